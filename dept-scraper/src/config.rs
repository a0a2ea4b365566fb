use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::constants::{DIVERSIFIED_LEVEL, FILE_PREFIX, SOURCE_URL};

use crate::transport::Encoding;

#[derive(Parser, Debug)]
#[clap(name = "dept-scraper", about = "downloads establishment search results for every department")]
pub struct Opt {
    #[clap(short = 'l', long = "log", default_value = "info")]
    pub log_level: String,

    /// Search page holding the department and level selects
    #[clap(long, env = "SCRAPER_URL", default_value = SOURCE_URL)]
    pub url: String,

    #[clap(long, env = "SCRAPER_OUT_DIR", default_value = "downloads")]
    pub out_dir: PathBuf,

    #[clap(long, env = "SCRAPER_LEVEL", default_value = DIVERSIFIED_LEVEL)]
    pub level: String,

    /// Pause between consecutive searches
    #[clap(long, env = "SCRAPER_DELAY_MS", default_value = "1500")]
    pub delay_ms: u64,

    #[clap(long, env = "SCRAPER_PREFIX", default_value = FILE_PREFIX)]
    pub prefix: String,

    #[clap(long, env = "SCRAPER_ENCODING", value_enum, default_value_t = Encoding::Multipart)]
    pub encoding: Encoding,

    #[clap(long, env = "SCRAPER_USER_AGENT", default_value = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// Per-request timeout, none by default
    #[clap(long, env = "SCRAPER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Abort on a non-success status instead of saving the error page
    #[clap(long, env = "SCRAPER_FAIL_ON_STATUS")]
    pub fail_on_status: bool,

    /// Print the department options and exit without downloading
    #[clap(long)]
    pub list: bool,
}

impl Opt {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> String {
        format!("{},hyper=info,hyper_util=info,reqwest=info", self.log_level)
    }
}
