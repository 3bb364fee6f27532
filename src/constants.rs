//! # Constants and defaults for the ORB6 catalog pipeline
//!
//! This module centralizes the **well-known source locations** of the ORB6
//! catalog and the default knobs of the fetch layer. Everything here is a
//! default: the actual URL, cache path and timeout used by a fetch are
//! injected through [`crate::source::CatalogSource`] and
//! [`crate::source::SourceConfig`] at construction time.

use std::time::Duration;

/// ORB6 master page at Georgia State University, serving the catalog inside
/// a single `<pre>` block.
pub const ORB6_PAGE_URL: &str = "https://www.astro.gsu.edu/wds/orb6/orb6orbits.html";

/// Raw fixed-width text of the ORB6 catalog, one orbit solution per line.
pub const ORB6_TEXT_URL: &str = "https://www.astro.gsu.edu/wds/orb6/orb6orbits.txt";

/// Default filename of the local catalog snapshot / refresh cache.
pub const ORB6_CACHE_FILE: &str = "orb6.txt";

/// Upper bound on any single catalog HTTP request.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
