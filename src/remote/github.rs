//! GitHub contents API as a `BlobStore`: the blob SHA is the revision token.

use crate::config::GithubConfig;
use crate::errors::{AppError, AppResult};
use crate::remote::{Blob, BlobStore, PutOutcome};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ContentResponse {
    content: String,
    sha: String,
    #[serde(default)]
    encoding: Option<String>,
}

#[derive(Debug, Serialize)]
struct PutRequest<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct PutResponse {
    content: PutContent,
}

#[derive(Debug, Deserialize)]
struct PutContent {
    sha: String,
}

pub struct GithubBlobStore {
    client: Client,
    api_url: String,
    owner: String,
    repo: String,
    branch: Option<String>,
    token: Option<String>,
}

impl GithubBlobStore {
    pub fn new(cfg: &GithubConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        Ok(Self::with_client(cfg, client))
    }

    pub fn with_client(cfg: &GithubConfig, client: Client) -> Self {
        let token = std::env::var(&cfg.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty());
        if token.is_none() {
            tracing::warn!(token_env = %cfg.token_env, "no GitHub token set, writes will be rejected");
        }

        Self {
            client,
            api_url: cfg.api_url.trim_end_matches('/').to_string(),
            owner: cfg.owner.clone(),
            repo: cfg.repo.clone(),
            branch: cfg.branch.clone(),
            token,
        }
    }

    fn contents_url(&self, path: &str) -> String {
        let encoded: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| urlencoding::encode(s).into_owned())
            .collect();
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url,
            self.owner,
            self.repo,
            encoded.join("/")
        )
    }

    fn with_headers(&self, req: RequestBuilder) -> RequestBuilder {
        let req = req
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, concat!("staffledger/", env!("CARGO_PKG_VERSION")))
            .header("X-GitHub-Api-Version", "2022-11-28");
        match &self.token {
            Some(t) => req.header(AUTHORIZATION, format!("Bearer {t}")),
            None => req,
        }
    }
}

fn decode_content(raw: &str, encoding: Option<&str>) -> AppResult<String> {
    if let Some(enc) = encoding
        && enc != "base64"
    {
        return Err(AppError::Remote(format!("unsupported content encoding '{enc}'")));
    }

    // GitHub wraps base64 at 60 columns
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|e| AppError::Remote(format!("invalid base64 content: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Remote(format!("content is not UTF-8: {e}")))
}

impl BlobStore for GithubBlobStore {
    fn fetch(&self, path: &str) -> AppResult<Option<Blob>> {
        let url = self.contents_url(path);
        tracing::debug!(%url, "fetching remote ledger");

        let mut req = self.client.get(&url);
        if let Some(branch) = &self.branch {
            req = req.query(&[("ref", branch.as_str())]);
        }

        let response = self.with_headers(req).send().map_err(|e| {
            tracing::error!(error = %e, %url, "GitHub request failed");
            AppError::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::error!(%status, body = %body, "GitHub returned an error on fetch");
            return Err(AppError::Remote(format!("GitHub API error: {status} - {body}")));
        }

        let payload: ContentResponse = response.json()?;
        let content = decode_content(&payload.content, payload.encoding.as_deref())?;

        Ok(Some(Blob {
            content,
            revision: payload.sha,
        }))
    }

    fn put(
        &self,
        path: &str,
        content: &str,
        revision: Option<&str>,
        message: &str,
    ) -> AppResult<PutOutcome> {
        let url = self.contents_url(path);
        let body = PutRequest {
            message,
            content: STANDARD.encode(content.as_bytes()),
            sha: revision,
            branch: self.branch.as_deref(),
        };

        let response = self
            .with_headers(self.client.put(&url))
            .json(&body)
            .send()
            .map_err(|e| {
                tracing::error!(error = %e, %url, "GitHub request failed");
                AppError::from(e)
            })?;

        let status = response.status();
        match status {
            // 409: the sha does not match the current file
            StatusCode::CONFLICT => {
                tracing::debug!(%status, "GitHub rejected the revision guard");
                Ok(PutOutcome::Conflict)
            }
            s if s.is_success() => {
                let payload: PutResponse = response.json()?;
                Ok(PutOutcome::Committed {
                    revision: payload.content.sha,
                })
            }
            _ => {
                let body = response.text().unwrap_or_default();

                // 422 also covers a create that raced with another writer:
                // the file now exists and no sha was sent
                if status == StatusCode::UNPROCESSABLE_ENTITY
                    && revision.is_none()
                    && self.fetch(path)?.is_some()
                {
                    tracing::debug!(%status, "file was created concurrently");
                    return Ok(PutOutcome::Conflict);
                }

                tracing::error!(%status, body = %body, "GitHub returned an error on write");
                Err(AppError::Remote(format!("GitHub API error: {status} - {body}")))
            }
        }
    }

    fn describe(&self, path: &str) -> String {
        format!("github:{}/{}/{}", self.owner, self.repo, path)
    }
}
