//! # Catalog source fetching
//!
//! This module defines [`CatalogSource`], the **single polymorphic fetch
//! capability** of the pipeline. Historically the catalog was pulled by
//! several copy-pasted loaders (local file, live page scrape, raw mirror,
//! refresh-then-read); they collapse here into one enum with one contract:
//!
//! ```text
//! fetch() -> Result<Vec<String>, FetchError>
//! ```
//!
//! ## Failure contract
//!
//! A fetch returns a **typed error** so that callers, logs and tests can
//! distinguish a missing snapshot from a timeout from a malformed page.
//! No variant panics. The Catalog Builder
//! ([`crate::catalog::Catalog::from_source`]) is the only place that
//! collapses every error into "no lines": the catalog is optional
//! enrichment data and its absence must never take a caller down.
//!
//! ## Variants
//!
//! - [`CatalogSource::LocalSnapshot`] – read a catalog text file at an
//!   injected path; a missing file is an expected, typed condition.
//! - [`CatalogSource::LiveScrape`] – HTTP GET of the catalog page and
//!   extraction of its single `<pre>` text block.
//! - [`CatalogSource::RemoteMirror`] – HTTP GET of a raw-text endpoint.
//! - [`CatalogSource::RefreshThenRead`] – try a remote variant, on success
//!   atomically overwrite the local cache, then **always** read the cache.
//!   A failed refresh never blocks the fallback read.
//!
//! ## HTTP client
//!
//! Requests go through a [`ureq::Agent`] built per fetch from
//! [`SourceConfig`], with a global timeout (default 10 s). Disabling TLS
//! certificate verification is an explicit, off-by-default insecure mode
//! that is flagged in the logs whenever it is active.
//!
//! ## Cache atomicity
//!
//! Cache refreshes write to a temporary file in the cache's directory and
//! rename it over the target, so a concurrent reader observes either the
//! old complete content or the new complete content, never a truncated
//! file.

use std::fs;
use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use tempfile::NamedTempFile;
use ureq::{tls::TlsConfig, Agent};

use crate::constants::FETCH_TIMEOUT;
use crate::orbcat_errors::FetchError;

/// Knobs of the HTTP fetch layer, injected at source construction.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Upper bound on the whole request (connect + transfer).
    pub timeout: Duration,
    /// Insecure mode: skip TLS certificate verification. Off by default;
    /// every fetch performed with it enabled is warn-logged.
    pub accept_invalid_certs: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            timeout: FETCH_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

impl SourceConfig {
    pub(crate) fn build_agent(&self) -> Agent {
        let mut config = Agent::config_builder().timeout_global(Some(self.timeout));

        if self.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for catalog fetches (insecure mode)");
            config = config.tls_config(
                TlsConfig::builder()
                    .disable_verification(true)
                    .build(),
            );
        }

        config.build().into()
    }
}

/// Where and how to obtain the raw catalog text.
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// Read a local catalog snapshot file.
    LocalSnapshot { path: Utf8PathBuf },
    /// Fetch the catalog page and scrape its single `<pre>` block.
    LiveScrape { url: String, config: SourceConfig },
    /// Fetch a raw-text mirror of the catalog.
    RemoteMirror { url: String, config: SourceConfig },
    /// Refresh the local cache from a remote variant, then read the cache.
    RefreshThenRead {
        remote: Box<CatalogSource>,
        cache_path: Utf8PathBuf,
    },
}

impl CatalogSource {
    pub fn local_snapshot(path: impl Into<Utf8PathBuf>) -> Self {
        CatalogSource::LocalSnapshot { path: path.into() }
    }

    pub fn live_scrape(url: impl Into<String>, config: SourceConfig) -> Self {
        CatalogSource::LiveScrape {
            url: url.into(),
            config,
        }
    }

    pub fn remote_mirror(url: impl Into<String>, config: SourceConfig) -> Self {
        CatalogSource::RemoteMirror {
            url: url.into(),
            config,
        }
    }

    pub fn refresh_then_read(remote: CatalogSource, cache_path: impl Into<Utf8PathBuf>) -> Self {
        CatalogSource::RefreshThenRead {
            remote: Box::new(remote),
            cache_path: cache_path.into(),
        }
    }

    /// Fetch the raw catalog text as lines.
    ///
    /// Return
    /// ----------
    /// * `Ok(lines)` – the catalog text, split on line endings. May be empty.
    /// * `Err(FetchError)` – a typed fetch failure. Callers building a
    ///   catalog should treat any error as "no data" (see
    ///   [`crate::catalog::Catalog::from_source`]).
    pub fn fetch(&self) -> Result<Vec<String>, FetchError> {
        match self {
            CatalogSource::LocalSnapshot { path } => read_snapshot(path),
            CatalogSource::LiveScrape { url, config } => {
                let page = get_text(config, url)?;
                let block = extract_pre_block(&page)
                    .ok_or_else(|| FetchError::MissingPreBlock(url.clone()))?;
                Ok(to_lines(block))
            }
            CatalogSource::RemoteMirror { url, config } => {
                let body = get_text(config, url)?;
                Ok(to_lines(&body))
            }
            CatalogSource::RefreshThenRead { remote, cache_path } => {
                match remote.fetch() {
                    Ok(lines) => {
                        debug!("refreshing catalog cache at {cache_path} ({} lines)", lines.len());
                        if let Err(error) = write_cache_atomic(cache_path, &lines) {
                            warn!("catalog cache refresh failed, keeping previous snapshot: {error}");
                        }
                    }
                    Err(error) => {
                        warn!("remote catalog refresh failed, falling back to local snapshot: {error}");
                    }
                }
                read_snapshot(cache_path)
            }
        }
    }
}

fn to_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn read_snapshot(path: &Utf8Path) -> Result<Vec<String>, FetchError> {
    if !path.exists() {
        return Err(FetchError::SnapshotNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    Ok(to_lines(&text))
}

fn get_text(config: &SourceConfig, url: &str) -> Result<String, FetchError> {
    let agent = config.build_agent();
    let mut response = agent.get(url).call()?;
    let body = response.body_mut().read_to_string()?;
    Ok(body)
}

/// Locate the single pre-formatted text block of the catalog page.
///
/// The upstream page serves the whole fixed-width table inside one
/// `<pre> … </pre>` pair; everything outside it is navigation markup.
fn extract_pre_block(markup: &str) -> Option<&str> {
    let start = markup.find("<pre>")? + "<pre>".len();
    let length = markup[start..].find("</pre>")?;
    Some(&markup[start..start + length])
}

/// Overwrite the cache file so that a concurrent reader never sees a
/// partial write: the new content lands in a temporary file in the same
/// directory and is renamed over the target.
fn write_cache_atomic(path: &Utf8Path, lines: &[String]) -> Result<(), FetchError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    for line in lines {
        writeln!(tmp, "{line}")?;
    }
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}
