#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use common::FormPayload;
use dept_scraper::{FileSink, FormTransport, Pause, ScrapeError};
use url::Url;

/// Answers each submit with the next scripted outcome and remembers what was
/// posted.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<String, String>>>,
    pub posted: Mutex<Vec<(Url, FormPayload)>>,
}

impl ScriptedTransport {
    pub fn new<I: IntoIterator<Item = Result<&'static str, &'static str>>>(outcomes: I) -> Self {
        Self {
            outcomes: Mutex::new(
                outcomes
                    .into_iter()
                    .map(|o| o.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            posted: Mutex::new(Vec::new()),
        }
    }

    pub fn posted(&self) -> Vec<(Url, FormPayload)> {
        self.posted.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormTransport for ScriptedTransport {
    async fn submit(&self, url: &Url, payload: &FormPayload) -> Result<String, ScrapeError> {
        self.posted.lock().unwrap().push((url.clone(), payload.clone()));
        match self.outcomes.lock().unwrap().pop_front() {
            Some(Ok(body)) => Ok(body),
            Some(Err(msg)) => Err(ScrapeError::Io(io::Error::new(io::ErrorKind::ConnectionReset, msg))),
            None => panic!("no scripted response left"),
        }
    }
}

/// Keeps saved files in memory, optionally refusing the n-th save.
#[derive(Default)]
pub struct MemorySink {
    pub files: Mutex<Vec<(String, Vec<u8>)>>,
    pub fail_on: Option<usize>,
}

impl MemorySink {
    pub fn failing_on(n: usize) -> Self {
        Self { fail_on: Some(n), ..Default::default() }
    }

    pub fn names(&self) -> Vec<String> {
        self.files.lock().unwrap().iter().map(|(n, _)| n.clone()).collect()
    }
}

#[async_trait]
impl FileSink for MemorySink {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), ScrapeError> {
        let mut files = self.files.lock().unwrap();
        if self.fail_on == Some(files.len() + 1) {
            return Err(ScrapeError::Io(io::Error::new(io::ErrorKind::Other, "disk full")));
        }
        files.push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}

/// Records requested pauses without waiting.
#[derive(Default)]
pub struct RecordingPause {
    pub pauses: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Pause for RecordingPause {
    async fn sleep(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}
