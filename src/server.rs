use super::*;

/// Shared per-process state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
  pub fetcher: Arc<dyn Fetch>,
  pub logger: LogHandle,
  pub options: ExtractOptions,
}

/// Envelope returned by the parse endpoint.
///
/// The HTTP status is always 200; failure is reported in-band through the
/// `error` field while the content fields stay empty.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleResponse {
  pub title: String,
  pub content: String,
  pub links: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl ArticleResponse {
  fn success(article: Article) -> Self {
    Self {
      title: article.title,
      content: article.content,
      links: article.links,
      error: None,
    }
  }

  fn failure(error: &Error) -> Self {
    Self {
      error: Some(error.to_string()),
      ..Self::default()
    }
  }
}

/// Envelope returned by the random endpoint; always carries a loadable URL.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RandomResponse {
  pub url: String,
}

#[derive(Deserialize)]
struct ParseParams {
  url: Option<String>,
}

#[derive(Deserialize)]
struct RandomParams {
  lang: Option<String>,
}

/// Builds the application router: the two JSON endpoints, a permissive CORS
/// layer, and an optional static file fallback for the exploration frontend.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
  let mut router = Router::new()
    .route("/api/parse", get(parse_article))
    .route("/api/random", get(random_article))
    .with_state(state)
    .layer(CorsLayer::new().allow_origin(Any));

  if let Some(dir) = static_dir {
    router = router.fallback_service(ServeDir::new(dir));
  }

  router
}

async fn parse_article(
  State(state): State<AppState>,
  Query(params): Query<ParseParams>,
) -> Response {
  let Some(url) = params.url else {
    state.logger.warn("Parse request missing url parameter");

    return json_response(&ArticleResponse::failure(&Error::MissingParameter(
      "url",
    )));
  };

  state.logger.info(format!("Parsing article: {url}"));

  let started = Instant::now();

  match extract_article(&state, &url).await {
    Ok(article) => {
      state.logger.info(format!(
        "Successfully parsed {url} in {:?} - Title: {}, Links: {}",
        started.elapsed(),
        article.title,
        article.links.len()
      ));

      json_response(&ArticleResponse::success(article))
    }
    Err(error) => {
      state.logger.error(format!(
        "Failed to parse {url} after {:?}: {error}",
        started.elapsed()
      ));

      json_response(&ArticleResponse::failure(&error))
    }
  }
}

async fn extract_article(state: &AppState, url: &str) -> Result<Article> {
  let response = state.fetcher.fetch(url).await?;

  if response.status != 200 {
    return Err(Error::Status(response.status));
  }

  Extractor::new(&response.body, url, state.options)?.extract(&state.logger)
}

async fn random_article(
  State(state): State<AppState>,
  Query(params): Query<RandomParams>,
) -> Response {
  let language = Language::from_code(params.lang.as_deref().unwrap_or("en"));

  let url =
    resolve_random(language, state.fetcher.as_ref(), &state.logger).await;

  json_response(&RandomResponse { url })
}

/// Serializes explicitly so that a serialization failure degrades to the
/// in-band error envelope instead of a bare 500.
fn json_response<T: Serialize>(payload: &T) -> Response {
  match serde_json::to_string(payload) {
    Ok(body) => {
      ([(CONTENT_TYPE, "application/json")], body).into_response()
    }
    Err(error) => {
      Json(ArticleResponse::failure(&Error::Serialization {
        source: error,
      }))
      .into_response()
    }
  }
}
