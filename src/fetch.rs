use super::*;

/// Identifying client header attached to every outbound request.
pub const USER_AGENT: &str = "WikiGraphExplorer/1.0";

/// Fixed transport timeout for article and random-page fetches; a timed-out
/// fetch terminates its request immediately, there are no retries.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a successful fetch, including the URL reached after the
/// transport transparently followed redirects.
#[derive(Debug, Clone)]
pub struct FetchResponse {
  pub status: u16,
  pub body: String,
  pub final_url: String,
}

/// Transport collaborator consumed by the HTTP handlers; abstracted so the
/// pipeline and resolver are testable without a network.
#[async_trait]
pub trait Fetch: Send + Sync {
  async fn fetch(&self, url: &str) -> Result<FetchResponse>;
}

pub struct HttpFetcher {
  client: reqwest::Client,
}

impl HttpFetcher {
  pub fn new() -> Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(USER_AGENT)
      .timeout(FETCH_TIMEOUT)
      .build()?;

    Ok(Self { client })
  }
}

#[async_trait]
impl Fetch for HttpFetcher {
  async fn fetch(&self, url: &str) -> Result<FetchResponse> {
    let url = Url::parse(url)?;

    let response = self.client.get(url).send().await?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();
    let body = response.text().await.map_err(Error::BodyRead)?;

    Ok(FetchResponse {
      status,
      body,
      final_url,
    })
  }
}
