pub mod model;

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub use model::{ApiEnvelope, DirectoryResponse, Employee, ResponseInfo};

pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },

    #[error("directory API returned status {status}")]
    Status { status: u16 },

    #[error("failed to decode directory response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("directory API error: {message}")]
    Api { message: String },

    #[error("failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to setup proxy {proxy}: {source}")]
    ProxySetup {
        proxy: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid header '{header}'")]
    InvalidHeader { header: String },
}

/// Request-shaping knobs for a directory fetch. One query describes a full
/// result set; the page number is supplied per call so a seeded query can be
/// walked page by page.
#[derive(Clone, Debug)]
pub struct DirectoryQuery {
    pub results: u32,
    pub nationalities: Vec<String>,
    pub seed: Option<String>,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            // 12 English-speaking-country records, matching the page the
            // directory originally shipped with.
            results: 12,
            nationalities: ["au", "ca", "gb", "ie", "nz", "us"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            seed: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub api_url: String,
    pub timeout_seconds: usize,
    pub proxy: Option<String>,
    pub header: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: 10,
            proxy: None,
            header: None,
        }
    }
}

/// One fetched page, tagged so concurrent fetches can be re-assembled in
/// order.
#[derive(Clone, Debug)]
pub struct DirectoryPage {
    pub page: u32,
    pub employees: Vec<Employee>,
    pub seed: String,
}

#[derive(Clone, Debug)]
pub struct DirectoryClient {
    http: reqwest::Client,
    api_url: String,
    extra_header: Option<(reqwest::header::HeaderName, reqwest::header::HeaderValue)>,
}

impl DirectoryClient {
    pub fn new(options: &ClientOptions) -> Result<Self, DirectoryError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(concat!(
                "staffdex/",
                env!("CARGO_PKG_VERSION")
            )),
        );

        let timeout = Duration::from_secs(options.timeout_seconds.try_into().unwrap_or(10));
        let builder = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(timeout);

        let builder = match options.proxy.as_deref() {
            Some(proxy_url) if !proxy_url.trim().is_empty() => {
                let proxy =
                    reqwest::Proxy::all(proxy_url).map_err(|source| DirectoryError::ProxySetup {
                        proxy: proxy_url.to_string(),
                        source,
                    })?;
                builder.proxy(proxy)
            }
            _ => builder,
        };

        let http = builder
            .build()
            .map_err(|source| DirectoryError::ClientBuild { source })?;

        let extra_header = match options.header.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(parse_header(raw)?),
            _ => None,
        };

        Ok(Self {
            http,
            api_url: options.api_url.clone(),
            extra_header,
        })
    }

    /// Issues one GET against the directory API and decodes the body.
    ///
    /// Status errors and in-body API errors both surface as `Err`; nothing
    /// is swallowed.
    pub async fn fetch_page(
        &self,
        query: &DirectoryQuery,
        page: u32,
    ) -> Result<DirectoryPage, DirectoryError> {
        let mut params: Vec<(&str, String)> = vec![("results", query.results.to_string())];
        if !query.nationalities.is_empty() {
            params.push(("nat", query.nationalities.join(",")));
        }
        if let Some(seed) = query.seed.as_deref() {
            params.push(("seed", seed.to_string()));
        }
        if page > 1 {
            params.push(("page", page.to_string()));
        }

        let mut request = self.http.get(&self.api_url).query(&params);
        if let Some((key, value)) = self.extra_header.as_ref() {
            request = request.header(key.clone(), value.clone());
        }

        let response = request
            .send()
            .await
            .map_err(|source| DirectoryError::Request { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| DirectoryError::Request { source })?;
        let envelope: ApiEnvelope =
            serde_json::from_slice(&body).map_err(|source| DirectoryError::Decode { source })?;

        match envelope {
            ApiEnvelope::Directory(directory) => Ok(DirectoryPage {
                page,
                employees: directory.results,
                seed: directory.info.seed,
            }),
            ApiEnvelope::Error { error } => Err(DirectoryError::Api { message: error }),
        }
    }
}

fn parse_header(
    raw: &str,
) -> Result<(reqwest::header::HeaderName, reqwest::header::HeaderValue), DirectoryError> {
    let (key, value) = raw.split_once(':').ok_or_else(|| DirectoryError::InvalidHeader {
        header: raw.to_string(),
    })?;
    let key = reqwest::header::HeaderName::from_str(key.trim()).map_err(|_| {
        DirectoryError::InvalidHeader {
            header: raw.to_string(),
        }
    })?;
    let value = reqwest::header::HeaderValue::from_str(value.trim()).map_err(|_| {
        DirectoryError::InvalidHeader {
            header: raw.to_string(),
        }
    })?;
    Ok((key, value))
}
