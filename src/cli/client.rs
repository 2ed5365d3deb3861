use anyhow::{anyhow, Context};
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

/// Thin JSON client over the expense tracker HTTP API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url.as_ref())
            .with_context(|| format!("invalid API URL: {}", base_url.as_ref()))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("invalid API URL: {}", base_url);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Base URL joined with percent-encoded path segments
    pub fn url(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("invalid API URL: {}", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> anyhow::Result<T> {
        let request = self.http.get(self.url(segments)?);
        Self::send(request).await?.json().await.context("invalid response body")
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, segments: &[&str], body: &B) -> anyhow::Result<T> {
        let request = self.http.request(Method::POST, self.url(segments)?).json(body);
        Self::send(request).await?.json().await.context("invalid response body")
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, segments: &[&str], body: &B) -> anyhow::Result<T> {
        let request = self.http.request(Method::PUT, self.url(segments)?).json(body);
        Self::send(request).await?.json().await.context("invalid response body")
    }

    pub async fn delete(&self, segments: &[&str]) -> anyhow::Result<()> {
        Self::send(self.http.delete(self.url(segments)?)).await?;
        Ok(())
    }

    /// Send and turn non-2xx responses into errors carrying the server's message
    async fn send(request: RequestBuilder) -> anyhow::Result<reqwest::Response> {
        let response = request.send().await.context("request to API failed")?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        if message.is_empty() {
            Err(anyhow!("server returned {}", status))
        } else {
            Err(anyhow!("{} ({})", message, status))
        }
    }
}
