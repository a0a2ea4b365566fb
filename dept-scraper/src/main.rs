use clap::Parser;
use dept_scraper::config::Opt;
use dept_scraper::{
    DirSink, HttpTransport, PageContext, PageIds, ScrapeError, SequentialFormDownloader, SourcePage, TokioPause,
};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let opt = Opt::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(opt.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(&opt).await {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(written)) => {
            info!(files = written, dir = %opt.out_dir.display(), "downloads complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("download run aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `None` when only listing departments.
async fn run(opt: &Opt) -> Result<Option<usize>, ScrapeError> {
    let transport = HttpTransport::new(&opt.user_agent, opt.timeout())?
        .with_encoding(opt.encoding)
        .fail_on_status(opt.fail_on_status);

    let page = SourcePage::fetch(transport.client(), &opt.url, &PageIds::default()).await?;
    let departments = page.department_options();

    if opt.list {
        for department in &departments {
            println!("{}\t{}", department.value, department.label);
        }
        return Ok(None);
    }

    if departments.is_empty() {
        return Err(ScrapeError::Page("department select has no options".to_string()));
    }
    if !page.has_level(&opt.level) {
        warn!(level = %opt.level, "level code not offered by the page");
    }

    let sink = DirSink::create(&opt.out_dir).await?;
    let downloader = SequentialFormDownloader::new(transport, sink, TokioPause, page.current_url().clone())
        .level(opt.level.as_str())
        .prefix(opt.prefix.as_str())
        .delay(opt.delay());

    let written = downloader.run(&page.form_fields(), &departments).await?;
    Ok(Some(written))
}
