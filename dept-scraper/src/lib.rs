pub mod config;
pub mod downloader;
pub mod error;
pub mod page;
pub mod pause;
pub mod sink;
pub mod transport;

pub use downloader::{FieldNames, SequentialFormDownloader};
pub use error::ScrapeError;
pub use page::{PageContext, PageIds, SourcePage};
pub use pause::{Pause, TokioPause};
pub use sink::{DirSink, FileSink};
pub use transport::{Encoding, FormTransport, HttpTransport};
