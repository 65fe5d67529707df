use super::*;

/// Bounded queue capacity; producers drop messages when it is full.
const QUEUE_CAPACITY: usize = 1000;

/// Log file name within the per-application log directory.
pub const LOG_FILE_NAME: &str = "wiki-explorer.log";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
  Info,
  Warn,
  Error,
}

impl LogLevel {
  fn as_str(self) -> &'static str {
    match self {
      Self::Info => "INFO",
      Self::Warn => "WARN",
      Self::Error => "ERROR",
    }
  }
}

#[derive(Debug)]
struct LogMessage {
  level: LogLevel,
  timestamp: DateTime<Local>,
  message: String,
}

/// Cheap cloneable producer handle.
///
/// Enqueueing never blocks: when the queue is full the line is silently
/// dropped, so logging can never add backpressure to request handling.
#[derive(Clone)]
pub struct LogHandle {
  sender: Option<mpsc::Sender<LogMessage>>,
}

impl LogHandle {
  /// A handle that discards everything; for callers without a sink, such as
  /// unit tests of the extraction pipeline.
  pub fn disabled() -> Self {
    Self { sender: None }
  }

  pub fn info(&self, message: impl Into<String>) {
    self.log(LogLevel::Info, message);
  }

  pub fn warn(&self, message: impl Into<String>) {
    self.log(LogLevel::Warn, message);
  }

  pub fn error(&self, message: impl Into<String>) {
    self.log(LogLevel::Error, message);
  }

  pub fn log(&self, level: LogLevel, message: impl Into<String>) {
    if let Some(sender) = &self.sender {
      let _ = sender.try_send(LogMessage {
        level,
        timestamp: Local::now(),
        message: message.into(),
      });
    }
  }
}

/// Asynchronous file logger: a bounded multi-producer queue consumed by a
/// single background task that appends formatted lines to a log file.
pub struct AsyncLogger {
  sender: mpsc::Sender<LogMessage>,
  stop: oneshot::Sender<()>,
  worker: JoinHandle<()>,
}

impl AsyncLogger {
  /// Opens the log file (truncating any previous run) and starts the
  /// consumer task.
  pub async fn create(path: &Path) -> io::Result<Self> {
    let file = File::create(path).await?;

    let (sender, receiver) = mpsc::channel(QUEUE_CAPACITY);
    let (stop, stopped) = oneshot::channel();

    let worker = tokio::spawn(write_loop(receiver, stopped, file));

    Ok(Self {
      sender,
      stop,
      worker,
    })
  }

  pub fn handle(&self) -> LogHandle {
    LogHandle {
      sender: Some(self.sender.clone()),
    }
  }

  /// Drains any queued messages before the file handle is closed; no log
  /// loss at clean shutdown.
  pub async fn shutdown(self) {
    let _ = self.stop.send(());
    let _ = self.worker.await;
  }
}

async fn write_loop(
  mut receiver: mpsc::Receiver<LogMessage>,
  mut stopped: oneshot::Receiver<()>,
  mut file: File,
) {
  loop {
    tokio::select! {
      received = receiver.recv() => match received {
        Some(message) => write_line(&mut file, &message).await,
        None => break,
      },
      _ = &mut stopped => {
        while let Ok(message) = receiver.try_recv() {
          write_line(&mut file, &message).await;
        }

        break;
      }
    }
  }

  let _ = file.flush().await;
}

async fn write_line(file: &mut File, message: &LogMessage) {
  let line = format!(
    "[{}] {} {}\n",
    message.level.as_str(),
    message.timestamp.format("%Y-%m-%d %H:%M"),
    message.message
  );

  let _ = file.write_all(line.as_bytes()).await;
}
