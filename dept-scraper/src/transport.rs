use std::time::Duration;

use async_trait::async_trait;
use clap::ValueEnum;
use common::FormPayload;
use reqwest::multipart::Form;
use tracing::debug;
use url::Url;

use crate::error::ScrapeError;

/// Posts a filled-in form and hands back the response body.
#[async_trait]
pub trait FormTransport {
    async fn submit(&self, url: &Url, payload: &FormPayload) -> Result<String, ScrapeError>;
}

/// Body encoding for the POST.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// `multipart/form-data`, what a browser sends for `FormData`.
    #[default]
    Multipart,
    /// `application/x-www-form-urlencoded`.
    Urlencoded,
}

pub struct HttpTransport {
    client: reqwest::Client,
    encoding: Encoding,
    fail_on_status: bool,
}

impl HttpTransport {
    /// Builds a client with a cookie store so the session cookie handed out
    /// with the source page is sent back on every search.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, ScrapeError> {
        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            encoding: Encoding::default(),
            fail_on_status: false,
        })
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Treat non-success statuses as failures instead of saving the body.
    pub fn fail_on_status(mut self, fail: bool) -> Self {
        self.fail_on_status = fail;
        self
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl FormTransport for HttpTransport {
    async fn submit(&self, url: &Url, payload: &FormPayload) -> Result<String, ScrapeError> {
        let request = self.client.post(url.clone());
        let request = match self.encoding {
            Encoding::Multipart => {
                let form = payload
                    .iter()
                    .fold(Form::new(), |form, (name, value)| form.text(name.to_string(), value.to_string()));
                request.multipart(form)
            }
            Encoding::Urlencoded => {
                let pairs: Vec<(&str, &str)> = payload.iter().collect();
                request.form(&pairs)
            }
        };

        let response = request.send().await?;
        let status = response.status();
        if self.fail_on_status && !status.is_success() {
            return Err(ScrapeError::Status { status, url: url.to_string() });
        }

        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "search response");
        Ok(body)
    }
}
