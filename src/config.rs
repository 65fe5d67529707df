use super::*;

/// Application identity used for log directory placement.
pub const APP_NAME: &str = "WikiGraphExplorer";

/// Port the HTTP surface binds when none is supplied.
pub const DEFAULT_PORT: u16 = 8091;

/// Resolved runtime settings; defaults applied, paths absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub port: u16,
  pub logs_dir: PathBuf,
  pub static_dir: Option<PathBuf>,
}

impl Config {
  pub fn new(
    port: Option<u16>,
    logs_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
  ) -> Self {
    Self {
      port: port.unwrap_or(DEFAULT_PORT),
      logs_dir: logs_dir.unwrap_or_else(Self::os_logs_dir),
      static_dir,
    }
  }

  pub fn log_file(&self) -> PathBuf {
    self.logs_dir.join(LOG_FILE_NAME)
  }

  /// Per-platform log directory convention, with a relative last resort when
  /// the platform directories cannot be determined.
  fn os_logs_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
      if let Some(home) = dirs::home_dir() {
        return home.join("Library").join("Logs").join(APP_NAME);
      }
    } else if let Some(data) = dirs::data_dir() {
      return data.join(APP_NAME).join("logs");
    }

    PathBuf::from("logs")
  }
}
