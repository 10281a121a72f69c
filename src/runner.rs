use std::num::NonZeroU32;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use governor::{Quota, RateLimiter};
use indicatif::ProgressBar;
use thiserror::Error;
use tokio::task;
use tokio::time::Instant;

use crate::directory::{
    ClientOptions, DirectoryClient, DirectoryError, DirectoryPage, DirectoryQuery, Employee,
    DEFAULT_API_URL,
};
use crate::utils;

/// randomuser.me caps a single request at 5000 results.
pub const MAX_RESULTS_PER_PAGE: u32 = 5000;

#[derive(Clone, Debug)]
pub struct Options {
    pub api_url: String,
    pub results: u32,
    pub nationalities: Vec<String>,
    pub seed: Option<String>,
    pub pages: u32,
    pub concurrency: u32,
    pub rate: u32,
    pub timeout_seconds: usize,
    pub proxy: Option<String>,
    pub header: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        let query = DirectoryQuery::default();
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            results: query.results,
            nationalities: query.nationalities,
            seed: None,
            pages: 1,
            concurrency: 4,
            rate: 5,
            timeout_seconds: 10,
            proxy: None,
            header: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("invalid results count {value}, expected 1..={MAX_RESULTS_PER_PAGE}")]
    InvalidResults { value: u32 },

    #[error("invalid page count {value}, expected a positive integer")]
    InvalidPages { value: u32 },

    #[error("unsupported nationality code '{code}'")]
    UnsupportedNationality { code: String },

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("page fetch task failed: {source}")]
    TaskJoin {
        #[source]
        source: tokio::task::JoinError,
    },
}

/// The assembled directory for one session.
#[derive(Clone, Debug)]
pub struct DirectoryResult {
    pub employees: Vec<Employee>,
    /// Seed the API used; reusing it reproduces the same people.
    pub seed: Option<String>,
    pub elapsed: Duration,
}

/// Embeddable fetch pipeline behind the CLI: validates options once, then
/// fans page requests out under a rate limit and reassembles them in order.
#[derive(Clone, Debug)]
pub struct Runner {
    options: Options,
}

impl Runner {
    pub fn new(options: Options) -> Result<Self, RunnerError> {
        if options.results == 0 || options.results > MAX_RESULTS_PER_PAGE {
            return Err(RunnerError::InvalidResults {
                value: options.results,
            });
        }
        if options.pages == 0 {
            return Err(RunnerError::InvalidPages {
                value: options.pages,
            });
        }
        for code in options.nationalities.iter() {
            if !utils::SUPPORTED_NATIONALITIES.contains(&code.as_str()) {
                return Err(RunnerError::UnsupportedNationality { code: code.clone() });
            }
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub async fn fetch(&self) -> Result<DirectoryResult, RunnerError> {
        self.fetch_with_progress(None).await
    }

    pub async fn fetch_with_progress(
        &self,
        pb: Option<ProgressBar>,
    ) -> Result<DirectoryResult, RunnerError> {
        let started = Instant::now();

        let client = DirectoryClient::new(&ClientOptions {
            api_url: self.options.api_url.clone(),
            timeout_seconds: self.options.timeout_seconds,
            proxy: self.options.proxy.clone(),
            header: self.options.header.clone(),
        })?;

        // Concurrent pages of an unseeded query would be unrelated samples,
        // so pin a seed up front whenever more than one page is requested.
        let seed = match (&self.options.seed, self.options.pages) {
            (Some(seed), _) => Some(seed.clone()),
            (None, 1) => None,
            (None, _) => Some(generated_seed()),
        };

        let query = DirectoryQuery {
            results: self.options.results,
            nationalities: self.options.nationalities.clone(),
            seed,
        };

        let rate = NonZeroU32::new(self.options.rate).unwrap_or(NonZeroU32::MIN);
        let lim = RateLimiter::direct(Quota::per_second(rate));

        let concurrency = self.options.concurrency.max(1) as usize;
        let mut workers = FuturesUnordered::new();
        let mut pages: Vec<DirectoryPage> = Vec::with_capacity(self.options.pages as usize);
        let mut next_page: u32 = 1;

        while next_page <= self.options.pages || !workers.is_empty() {
            while next_page <= self.options.pages && workers.len() < concurrency {
                lim.until_ready().await;
                let client = client.clone();
                let query = query.clone();
                let page = next_page;
                workers.push(task::spawn(
                    async move { client.fetch_page(&query, page).await },
                ));
                next_page += 1;
            }

            if let Some(joined) = workers.next().await {
                let page = joined.map_err(|source| RunnerError::TaskJoin { source })??;
                if let Some(pb) = pb.as_ref() {
                    pb.inc(1);
                }
                pages.push(page);
            }
        }

        // Out-of-order completions would otherwise scramble the session list.
        pages.sort_by_key(|p| p.page);

        let effective_seed = query
            .seed
            .clone()
            .or_else(|| pages.first().map(|p| p.seed.clone()))
            .filter(|s| !s.is_empty());

        let employees: Vec<Employee> = pages.into_iter().flat_map(|p| p.employees).collect();

        Ok(DirectoryResult {
            employees,
            seed: effective_seed,
            elapsed: started.elapsed(),
        })
    }
}

fn generated_seed() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("staffdex{nanos:x}")
}
