// GitHub request provider.
// Maps targets to decorated endpoints, sends them, logs the exchange and
// decodes responses.

use std::time::Duration;

use futures::{stream::BoxStream, StreamExt};
use reqwest::{header::HeaderMap, Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::endpoint::{endpoint_mapping, Endpoint};
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::logger::{json_response_data_formatter, NetworkLogger};
use crate::models::{Authorization, Commit, Issue, PullRequest, Readme, Repository, SearchResults, User};
use crate::target::{GitHub, GITHUB_API_BASE};

const DEFAULT_USER_AGENT: &str = concat!("github-endpoints/", env!("CARGO_PKG_VERSION"));
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A complete, successful response.
#[derive(Debug, Clone)]
pub struct GitHubResponse {
    pub status: StatusCode,
    pub url: String,
    pub headers: HeaderMap,
    pub data: Vec<u8>,
}

impl GitHubResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.data)?)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }

    /// Body pretty-printed if it is JSON, verbatim otherwise.
    pub fn pretty(&self) -> String {
        String::from_utf8_lossy(&json_response_data_formatter(&self.data)).into_owned()
    }
}

pub struct GitHubProviderBuilder {
    base_url: String,
    environment: Environment,
    verbose: bool,
    user_agent: String,
    connect_timeout: Duration,
}

impl Default for GitHubProviderBuilder {
    fn default() -> Self {
        GitHubProviderBuilder {
            base_url: GITHUB_API_BASE.to_string(),
            environment: Environment::default(),
            verbose: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl GitHubProviderBuilder {
    /// Point the provider at another API host (GitHub Enterprise, a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Log headers and formatted bodies in addition to the request line and status.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<GitHubProvider> {
        let parsed = Url::parse(&self.base_url).map_err(|_| Error::InvalidBaseUrl(self.base_url.clone()))?;
        if parsed.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(self.base_url));
        }

        let client = Client::builder()
            .user_agent(self.user_agent)
            .connect_timeout(self.connect_timeout)
            .build()?;

        debug!("GitHub provider rooted at {}", self.base_url);

        Ok(GitHubProvider {
            client,
            base_url: self.base_url,
            environment: self.environment,
            logger: NetworkLogger::new(self.verbose),
        })
    }
}

pub struct GitHubProvider {
    client: Client,
    base_url: String,
    environment: Environment,
    logger: NetworkLogger,
}

impl GitHubProvider {
    /// Provider for the public API using credentials from `environment`.
    pub fn new(environment: Environment) -> Result<Self> {
        Self::builder().environment(environment).build()
    }

    pub fn builder() -> GitHubProviderBuilder {
        GitHubProviderBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Resolve and decorate `target` without sending it.
    pub fn endpoint(&self, target: &GitHub) -> Endpoint {
        endpoint_mapping(target, &self.base_url, &self.environment)
    }

    /// Send `target` and collect the whole response.
    ///
    /// Any non-2xx status is returned as [`Error::Status`]; nothing is retried.
    pub async fn request(&self, target: &GitHub) -> Result<GitHubResponse> {
        let request = self.endpoint(target).into_request(&self.client).build()?;
        self.logger.will_send(target, &request);

        let response = self.client.execute(request).await?;
        let status = response.status();
        let url = response.url().to_string();
        let headers = response.headers().clone();
        let data = response.bytes().await?.to_vec();

        self.logger.did_receive(target, status, &url, &data);

        if !status.is_success() {
            return Err(Error::Status {
                status,
                body: String::from_utf8_lossy(&data).into_owned(),
            });
        }

        Ok(GitHubResponse {
            status,
            url,
            headers,
            data,
        })
    }

    pub async fn request_json<T: DeserializeOwned>(&self, target: &GitHub) -> Result<T> {
        self.request(target).await?.json()
    }

    /// Send `target` and hand back the body as it arrives.
    pub async fn request_stream(
        &self,
        target: &GitHub,
    ) -> Result<BoxStream<'static, Result<Vec<u8>>>> {
        let request = self.endpoint(target).into_request(&self.client).build()?;
        self.logger.will_send(target, &request);

        let response = self.client.execute(request).await?;
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            self.logger.did_receive(target, status, &url, body.as_bytes());
            return Err(Error::Status { status, body });
        }

        info!("Streaming {}: {} from {}", target, status, url);
        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map(|bytes| bytes.to_vec()).map_err(Error::from))
            .boxed())
    }

    pub async fn create_token(&self, username: &str, password: &str) -> Result<Authorization> {
        self.request_json(&GitHub::Token {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await
    }

    pub async fn search_repos(&self, query: &str, page: u32) -> Result<SearchResults<Repository>> {
        self.request_json(&GitHub::RepoSearch {
            query: query.to_string(),
            page,
        })
        .await
    }

    pub async fn trending_repos(&self, language: &str, page: u32) -> Result<SearchResults<Repository>> {
        self.request_json(&GitHub::TrendingReposSinceLastWeek {
            language: language.to_string(),
            page,
        })
        .await
    }

    pub async fn repo(&self, full_name: &str) -> Result<Repository> {
        self.request_json(&GitHub::Repo {
            full_name: full_name.to_string(),
        })
        .await
    }

    pub async fn readme(&self, full_name: &str) -> Result<Readme> {
        self.request_json(&GitHub::RepoReadMe {
            full_name: full_name.to_string(),
        })
        .await
    }

    pub async fn pulls(&self, full_name: &str) -> Result<Vec<PullRequest>> {
        self.request_json(&GitHub::Pulls {
            full_name: full_name.to_string(),
        })
        .await
    }

    pub async fn issues(&self, full_name: &str) -> Result<Vec<Issue>> {
        self.request_json(&GitHub::Issues {
            full_name: full_name.to_string(),
        })
        .await
    }

    pub async fn commits(&self, full_name: &str) -> Result<Vec<Commit>> {
        self.request_json(&GitHub::Commits {
            full_name: full_name.to_string(),
        })
        .await
    }

    pub async fn user(&self) -> Result<User> {
        self.request_json(&GitHub::User).await
    }
}
