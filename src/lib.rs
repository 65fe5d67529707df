use {
  async_trait::async_trait,
  axum::{
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
  },
  chrono::{DateTime, Local},
  content_fragment::ContentFragment,
  context::Context,
  dom_query::{Document, Selection},
  pipeline::Pipeline,
  serde::{Deserialize, Serialize},
  stage::{
    ComposeStage, LocateContentStage, RewriteImagesStage, RewriteLinksStage,
    SanitizeStage, Stage, TitleStage,
  },
  std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, Instant},
  },
  tokio::{
    fs::File,
    io::AsyncWriteExt,
    sync::{mpsc, oneshot},
    task::JoinHandle,
  },
  tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
  },
  url::Url,
};

pub use crate::{
  article::Article,
  config::Config,
  error::Error,
  extractor::Extractor,
  fetch::{Fetch, FetchResponse, HttpFetcher, FETCH_TIMEOUT, USER_AGENT},
  logger::{AsyncLogger, LogHandle, LogLevel, LOG_FILE_NAME},
  options::ExtractOptions,
  random::resolve_random,
  server::{router, AppState, ArticleResponse, RandomResponse},
  site::Language,
};

mod article;
mod config;
mod content_fragment;
mod context;
mod error;
mod extractor;
mod fetch;
mod logger;
mod options;
mod pipeline;
mod random;
mod server;
mod site;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
