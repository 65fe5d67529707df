use {
  anyhow::Context,
  clap::Parser,
  std::{fs, net::SocketAddr, path::PathBuf, process, sync::Arc},
  wiki_explorer::{
    router, AppState, AsyncLogger, Config, ExtractOptions, HttpFetcher,
  },
};

#[derive(Parser)]
#[command(name = "wiki-explorer")]
#[command(about = "Wikipedia article extraction and exploration server", long_about = None)]
struct Arguments {
  /// Port to listen on
  #[arg(long, value_name = "PORT")]
  port: Option<u16>,

  /// Directory for the log file
  #[arg(long, value_name = "DIR")]
  logs_dir: Option<PathBuf>,

  /// Directory of frontend assets to serve alongside the API
  #[arg(long, value_name = "DIR")]
  static_dir: Option<PathBuf>,
}

impl Arguments {
  async fn run(self) -> Result {
    let config = Config::new(self.port, self.logs_dir, self.static_dir);

    fs::create_dir_all(&config.logs_dir).with_context(|| {
      format!(
        "failed to create logs directory `{}`",
        config.logs_dir.display()
      )
    })?;

    let logger = AsyncLogger::create(&config.log_file())
      .await
      .with_context(|| {
        format!("failed to open log file `{}`", config.log_file().display())
      })?;

    let state = AppState {
      fetcher: Arc::new(
        HttpFetcher::new().context("failed to build HTTP client")?,
      ),
      logger: logger.handle(),
      options: ExtractOptions::default(),
    };

    let router = router(state, config.static_dir.as_deref());

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(address)
      .await
      .with_context(|| format!("failed to bind `{address}`"))?;

    logger
      .handle()
      .info(format!("Server listening on {address}"));

    axum::serve(listener, router)
      .with_graceful_shutdown(async {
        let _ = tokio::signal::ctrl_c().await;
      })
      .await
      .context("server terminated abnormally")?;

    logger.shutdown().await;

    Ok(())
  }
}

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

#[tokio::main]
async fn main() {
  if let Err(error) = Arguments::parse().run().await {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
