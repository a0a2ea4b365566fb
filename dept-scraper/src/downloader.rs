use std::time::Duration;

use common::constants::{
    DEPARTMENT_FIELD, DIVERSIFIED_LEVEL, FILE_PREFIX, LEVEL_FIELD, REQUEST_DELAY, SUBMIT_BUTTON,
    SUBMIT_COORDINATE,
};
use common::{DownloadResult, FormPayload, OptionEntry};
use tracing::{debug, info};
use url::Url;

use crate::error::ScrapeError;
use crate::pause::Pause;
use crate::sink::FileSink;
use crate::transport::FormTransport;

/// Form field names the downloader overrides on every request.
#[derive(Clone, Debug)]
pub struct FieldNames {
    pub department: String,
    pub level: String,
    pub submit_x: String,
    pub submit_y: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            department: DEPARTMENT_FIELD.to_string(),
            level: LEVEL_FIELD.to_string(),
            submit_x: format!("{}.x", SUBMIT_BUTTON),
            submit_y: format!("{}.y", SUBMIT_BUTTON),
        }
    }
}

/// Submits the search form once per department, one request at a time, and
/// saves every response body.
pub struct SequentialFormDownloader<T, S, P> {
    transport: T,
    sink: S,
    pause: P,
    target: Url,
    fields: FieldNames,
    level: String,
    prefix: String,
    delay: Duration,
}

impl<T, S, P> SequentialFormDownloader<T, S, P>
where
    T: FormTransport,
    S: FileSink,
    P: Pause,
{
    pub fn new(transport: T, sink: S, pause: P, target: Url) -> Self {
        Self {
            transport,
            sink,
            pause,
            target,
            fields: FieldNames::default(),
            level: DIVERSIFIED_LEVEL.to_string(),
            prefix: FILE_PREFIX.to_string(),
            delay: REQUEST_DELAY,
        }
    }

    pub fn fields(mut self, fields: FieldNames) -> Self {
        self.fields = fields;
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn pause(&self) -> &P {
        &self.pause
    }

    /// The payload posted for `entry`: the base form with the department,
    /// level and click coordinates filled in.
    pub fn payload_for(&self, base: &FormPayload, entry: &OptionEntry) -> FormPayload {
        let mut payload = base.clone();
        payload.set(&self.fields.department, entry.value.as_str());
        payload.set(&self.fields.level, self.level.as_str());
        payload.set(&self.fields.submit_x, SUBMIT_COORDINATE);
        payload.set(&self.fields.submit_y, SUBMIT_COORDINATE);
        payload
    }

    /// Downloads every entry in order and returns how many files were
    /// written. The first failure stops the run; files already written stay.
    pub async fn run(&self, base: &FormPayload, entries: &[OptionEntry]) -> Result<usize, ScrapeError> {
        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                self.pause.sleep(self.delay).await;
            }

            let payload = self.payload_for(base, entry);
            debug!(department = %entry, fields = payload.len(), "submitting search");
            let body = self.transport.submit(&self.target, &payload).await?;

            let result = DownloadResult::new(&self.prefix, &entry.label, body);
            self.sink.save(&result.filename, result.body.as_bytes()).await?;
            info!("Wrote {}", result.filename);
        }

        Ok(entries.len())
    }
}
