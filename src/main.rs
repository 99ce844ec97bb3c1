use folio::{app, config::Config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    let log_guard = logging::init()?;
    let result = app::run(config).await;
    // write access log lines still buffered at shutdown
    log_guard.flush();
    result
}
