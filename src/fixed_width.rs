//! # ORB6 fixed-width line decoder
//!
//! Utilities to cut one raw ORB6 catalog line into **named raw field
//! slices** by byte offset, and to recognize which fetched lines are data
//! lines at all.
//!
//! ## Overview
//!
//! This module provides:
//! - The byte-offset schema of the ORB6 layout ([`FieldSpans`], [`SchemaVariant`]).
//! - A line-qualification predicate ([`is_data_line`]) applied before decoding.
//! - The decoder itself ([`decode_line`]) producing a [`RawRecord`] of
//!   `Option<&str>` slices. Decoding never fails: a span the line does not
//!   fully cover simply yields a missing field.
//!
//! No parsing or trimming happens here; that is the job of the validator
//! (see [`crate::record`]). The decoder's contract is byte-exact: when the
//! line covers `[start, end)`, the slice is exactly `line[start..end]`.
//!
//! ## Layout compatibility
//!
//! The offsets below are a reverse-engineered constant of one fixed-width
//! revision of the upstream catalog. Nothing validates that the layout has
//! not shifted; an upstream reformat would silently produce wrong values
//! rather than an error. This risk is accepted (the published layout has
//! been stable for years) and documented here rather than guarded against.
//!
//! ## Byte-offset schema (0-based, end-exclusive)
//!
//! | Field   | Offsets    |
//! |---------|------------|
//! | StarID  | `[19, 28)` |
//! | P       | `[50, 62)` |
//! | T       | `[122, 133)` |
//! | e       | `[142, 148)` |
//! | a       | `[78, 84)` |
//! | Omega   | `[107, 112)` |
//! | omega   | `[157, 162)` |
//! | i       | `[93, 98)` |
//! | StarRef | `[176, 200)` |

use std::ops::Range;

/// Byte-offset spans of every ORB6 field, 0-based and end-exclusive.
pub struct FieldSpans;

impl FieldSpans {
    pub const STAR_ID: Range<usize> = 19..28;
    pub const PERIOD: Range<usize> = 50..62;
    pub const PERIASTRON_TIME: Range<usize> = 122..133;
    pub const ECCENTRICITY: Range<usize> = 142..148;
    pub const SEMI_MAJOR_AXIS: Range<usize> = 78..84;
    pub const ASCENDING_NODE: Range<usize> = 107..112;
    pub const PERIASTRON_ARGUMENT: Range<usize> = 157..162;
    pub const INCLINATION: Range<usize> = 93..98;
    pub const STAR_REF: Range<usize> = 176..200;
}

/// Which revision of the ORB6 row layout a source serves.
///
/// * `Full` – the complete layout, including the WDS designation (`StarID`).
/// * `Slim` – a reduced layout without `StarID`; all other offsets are
///   identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    Full,
    Slim,
}

/// Raw field slices of one data line, prior to any trimming or parsing.
///
/// `None` means the line did not cover the field's byte span (or, for
/// `star_id` under [`SchemaVariant::Slim`], that the schema omits the
/// field). The validator treats both the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub star_id: Option<&'a str>,
    pub period: Option<&'a str>,
    pub periastron_time: Option<&'a str>,
    pub eccentricity: Option<&'a str>,
    pub semi_major_axis: Option<&'a str>,
    pub ascending_node: Option<&'a str>,
    pub periastron_argument: Option<&'a str>,
    pub inclination: Option<&'a str>,
    pub star_ref: Option<&'a str>,
}

/// Cut one field out of a line by byte span.
///
/// Return
/// ----------
/// * `Some(slice)` – the exact substring `line[start..end]` when the line
///   covers the span.
/// * `None` – the span extends past the end of the line, or a span edge
///   falls inside a multi-byte UTF-8 sequence. Either way the field is
///   missing, never a panic.
pub fn slice_field(line: &str, span: Range<usize>) -> Option<&str> {
    line.get(span)
}

/// Data-line heuristic applied to every fetched line before decoding.
///
/// A line qualifies when its first character after leading whitespace is an
/// ASCII decimal digit. Headers, column rulers and footnotes all fail this
/// test and are discarded.
pub fn is_data_line(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

/// Decode one data line into its raw field slices.
///
/// Arguments
/// -----------------
/// * `line`: A single catalog line, already known to satisfy [`is_data_line`].
/// * `variant`: Which layout revision the line follows.
///
/// Return
/// ----------
/// * A [`RawRecord`] borrowing from `line`. Never fails; short lines give
///   missing fields rather than an index error.
pub fn decode_line(line: &str, variant: SchemaVariant) -> RawRecord<'_> {
    let star_id = match variant {
        SchemaVariant::Full => slice_field(line, FieldSpans::STAR_ID),
        SchemaVariant::Slim => None,
    };

    RawRecord {
        star_id,
        period: slice_field(line, FieldSpans::PERIOD),
        periastron_time: slice_field(line, FieldSpans::PERIASTRON_TIME),
        eccentricity: slice_field(line, FieldSpans::ECCENTRICITY),
        semi_major_axis: slice_field(line, FieldSpans::SEMI_MAJOR_AXIS),
        ascending_node: slice_field(line, FieldSpans::ASCENDING_NODE),
        periastron_argument: slice_field(line, FieldSpans::PERIASTRON_ARGUMENT),
        inclination: slice_field(line, FieldSpans::INCLINATION),
        star_ref: slice_field(line, FieldSpans::STAR_REF),
    }
}
