//! # Catalog builder and accessor
//!
//! This module defines [`Catalog`], the immutable in-memory result of one
//! ingestion call: fetch → data-line filter → fixed-width decode →
//! validation, in one blocking sequence bounded only by the fetch timeout.
//!
//! ## Contract towards consumers
//!
//! The catalog is **optional enrichment data**. Construction never fails:
//! every fetch or parse problem resolves to fewer records, down to an
//! empty catalog, which is a valid terminal state consumers must read as
//! "overlay feature unavailable" (see [`Catalog::is_empty`]).
//!
//! Once built, a `Catalog` is never mutated. It is safe to share across
//! threads behind an `Arc` without locking.
//!
//! ## Duplicate reference codes
//!
//! `StarRef` is not guaranteed unique upstream. Iteration and
//! [`Catalog::keys`] preserve source order including duplicates, while
//! [`Catalog::lookup`] resolves a duplicated key to its **last
//! occurrence** in the source.

use std::collections::HashMap;

use log::{debug, warn};

use crate::elements::CatalogRecord;
use crate::fixed_width::{decode_line, is_data_line, SchemaVariant};
use crate::record::validate;
use crate::source::CatalogSource;

/// An immutable, queryable set of published orbit solutions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    by_ref: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog by fetching a source and ingesting its lines.
    ///
    /// Any fetch failure is logged and collapsed to an empty line set, so
    /// this constructor never fails and never panics.
    ///
    /// Arguments
    /// -----------------
    /// * `source`: Where to obtain the raw catalog text.
    /// * `variant`: Which row layout the source serves.
    ///
    /// Return
    /// ----------
    /// * A fresh [`Catalog`], possibly empty.
    pub fn from_source(source: &CatalogSource, variant: SchemaVariant) -> Catalog {
        let lines = match source.fetch() {
            Ok(lines) => lines,
            Err(error) => {
                warn!("catalog fetch failed, continuing without orbit data: {error}");
                Vec::new()
            }
        };
        Catalog::from_lines(lines.iter().map(String::as_str), variant)
    }

    /// Build a catalog from raw text lines already in memory.
    ///
    /// This is the pure core of the pipeline: lines are filtered by the
    /// data-line heuristic, decoded by byte offset, validated, and the
    /// survivors indexed by reference code (last occurrence wins).
    pub fn from_lines<'a, I>(lines: I, variant: SchemaVariant) -> Catalog
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut records = Vec::new();
        let mut data_lines = 0usize;

        for line in lines.into_iter().filter(|line| is_data_line(line)) {
            data_lines += 1;
            let raw = decode_line(line, variant);
            if let Some(record) = validate(&raw, variant) {
                records.push(record);
            }
        }

        let mut by_ref = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            by_ref.insert(record.star_ref.clone(), index);
        }

        debug!(
            "built orbit catalog: {} records accepted out of {} data lines",
            records.len(),
            data_lines
        );

        Catalog { records, by_ref }
    }

    /// Ordered reference codes of every record, in source order.
    ///
    /// Suitable as an operator-facing selection list; a consumer may
    /// prepend its own "none selected" sentinel, which is not part of the
    /// catalog.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.star_ref.as_str())
    }

    /// Look up a record by reference code.
    ///
    /// Return
    /// ----------
    /// * `Some(record)` – the matching record (last occurrence for
    ///   duplicated codes).
    /// * `None` – unknown code. Never panics.
    pub fn lookup(&self, star_ref: &str) -> Option<&CatalogRecord> {
        self.by_ref.get(star_ref).map(|&index| &self.records[index])
    }

    /// True iff the catalog holds no records. Consumers use this to decide
    /// whether to offer the overlay feature at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogRecord> {
        self.records.get(index)
    }
}

#[cfg(test)]
mod catalog_test {
    use super::*;
    use std::ops::Range;

    use crate::fixed_width::FieldSpans;

    /// Assemble one synthetic catalog line by placing field text at the
    /// schema's byte offsets.
    fn build_line(fields: &[(Range<usize>, &str)]) -> String {
        let end = fields.iter().map(|(span, _)| span.end).max().unwrap();
        let mut buf = vec![b' '; end];
        for (span, text) in fields {
            assert!(text.len() <= span.end - span.start);
            buf[span.start..span.start + text.len()].copy_from_slice(text.as_bytes());
        }
        // The heuristic needs a leading digit; real lines start with the
        // epoch-2000 coordinates of the pair.
        buf[0] = b'0';
        String::from_utf8(buf).unwrap()
    }

    fn line_for(star_id: &str, star_ref: &str, period: &str) -> String {
        build_line(&[
            (FieldSpans::STAR_ID, star_id),
            (FieldSpans::PERIOD, period),
            (FieldSpans::PERIASTRON_TIME, "2451545.00"),
            (FieldSpans::ECCENTRICITY, "0.1234"),
            (FieldSpans::SEMI_MAJOR_AXIS, "0.500"),
            (FieldSpans::ASCENDING_NODE, "120.0"),
            (FieldSpans::PERIASTRON_ARGUMENT, "45.0"),
            (FieldSpans::INCLINATION, "60.0"),
            (FieldSpans::STAR_REF, star_ref),
        ])
    }

    #[test]
    fn builds_only_from_fully_valid_data_lines() {
        let good = line_for("00022+2705", "Doc1902d", "365.2500");
        let bad_float = line_for("00024-1234", "Hei1990", "not_a_num");
        let no_ref = line_for("00030+0000", "", "100.0");
        let header = "   WDS        P (days)   header line".to_string();

        let lines = [header.as_str(), good.as_str(), bad_float.as_str(), no_ref.as_str()];
        let catalog = Catalog::from_lines(lines, SchemaVariant::Full);

        assert_eq!(catalog.len(), 1);
        let record = catalog.lookup("Doc1902d").unwrap();
        assert_eq!(record.star_id.as_deref(), Some("00022+2705"));
        assert_eq!(record.elements.period, 365.25);
        assert_eq!(record.elements.eccentricity, 0.1234);
    }

    #[test]
    fn duplicate_star_ref_lookup_is_last_occurrence() {
        let first = line_for("00022+2705", "Doc1902d", "100.0");
        let second = line_for("11111+1111", "Doc1902d", "200.0");
        let catalog =
            Catalog::from_lines([first.as_str(), second.as_str()], SchemaVariant::Full);

        // Both stay in source order; the index resolves to the later row.
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.keys().collect::<Vec<_>>(), ["Doc1902d", "Doc1902d"]);
        assert_eq!(
            catalog.lookup("Doc1902d").unwrap().elements.period,
            200.0
        );
    }

    #[test]
    fn empty_catalog_is_a_valid_state() {
        let catalog = Catalog::from_lines([], SchemaVariant::Full);
        assert!(catalog.is_empty());
        assert_eq!(catalog.keys().count(), 0);
        assert!(catalog.lookup("anything").is_none());
    }

    #[test]
    fn unknown_key_returns_none() {
        let line = line_for("00022+2705", "Doc1902d", "365.25");
        let catalog = Catalog::from_lines([line.as_str()], SchemaVariant::Full);
        assert!(catalog.lookup("Nope2000").is_none());
    }
}
