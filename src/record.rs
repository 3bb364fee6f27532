//! Validation and normalization of raw ORB6 field slices.
//!
//! A raw record is accepted only when all seven numeric fields parse as
//! floating point and the reference code (plus the WDS designation in full
//! schema) is non-empty after trimming. Anything else is dropped whole: no
//! partial or placeholder record ever reaches the catalog.

use crate::elements::{CatalogRecord, OrbitalElements};
use crate::fixed_width::{RawRecord, SchemaVariant};

/// Parse one numeric field slice, treating absence, blanks and garbage
/// uniformly as missing.
fn parse_float(field: Option<&str>) -> Option<f64> {
    field?.trim().parse::<f64>().ok()
}

/// Turn raw field slices into a clean [`CatalogRecord`], or `None` when the
/// row must be rejected.
pub(crate) fn validate(raw: &RawRecord<'_>, variant: SchemaVariant) -> Option<CatalogRecord> {
    let star_ref = raw.star_ref?.trim();
    if star_ref.is_empty() {
        return None;
    }

    let star_id = match variant {
        SchemaVariant::Full => {
            let id = raw.star_id?.trim();
            if id.is_empty() {
                return None;
            }
            Some(id.to_string())
        }
        SchemaVariant::Slim => None,
    };

    let elements = OrbitalElements {
        period: parse_float(raw.period)?,
        periastron_time: parse_float(raw.periastron_time)?,
        eccentricity: parse_float(raw.eccentricity)?,
        semi_major_axis: parse_float(raw.semi_major_axis)?,
        ascending_node: parse_float(raw.ascending_node)?,
        periastron_argument: parse_float(raw.periastron_argument)?,
        inclination: parse_float(raw.inclination)?,
    };

    Some(CatalogRecord {
        star_id,
        star_ref: star_ref.to_string(),
        elements,
    })
}

#[cfg(test)]
mod record_test {
    use super::*;

    fn full_raw<'a>() -> RawRecord<'a> {
        RawRecord {
            star_id: Some(" 00022+2705 "),
            period: Some("  365.2500  "),
            periastron_time: Some(" 2451545.00"),
            eccentricity: Some(" 0.1234"),
            semi_major_axis: Some(" 0.500"),
            ascending_node: Some("120.0"),
            periastron_argument: Some(" 45.0"),
            inclination: Some(" 60.0"),
            star_ref: Some("Doc1902d                "),
        }
    }

    #[test]
    fn accepts_complete_row_trimmed_and_parsed() {
        let rec = validate(&full_raw(), SchemaVariant::Full).unwrap();
        assert_eq!(rec.star_id.as_deref(), Some("00022+2705"));
        assert_eq!(rec.star_ref, "Doc1902d");
        assert_eq!(rec.elements.period, 365.25);
        assert_eq!(rec.elements.eccentricity, 0.1234);
        assert_eq!(rec.elements.inclination, 60.0);
    }

    #[test]
    fn rejects_unparsable_numeric() {
        let mut raw = full_raw();
        raw.eccentricity = Some(" 0.12.4");
        assert!(validate(&raw, SchemaVariant::Full).is_none());

        raw = full_raw();
        raw.period = Some("    .     ");
        assert!(validate(&raw, SchemaVariant::Full).is_none());
    }

    #[test]
    fn rejects_missing_field() {
        let mut raw = full_raw();
        raw.periastron_time = None;
        assert!(validate(&raw, SchemaVariant::Full).is_none());
    }

    #[test]
    fn rejects_blank_star_ref() {
        let mut raw = full_raw();
        raw.star_ref = Some("            ");
        assert!(validate(&raw, SchemaVariant::Full).is_none());
        raw.star_ref = None;
        assert!(validate(&raw, SchemaVariant::Full).is_none());
    }

    #[test]
    fn star_id_only_required_in_full_schema() {
        let mut raw = full_raw();
        raw.star_id = Some("   ");
        assert!(validate(&raw, SchemaVariant::Full).is_none());

        // Slim schema ignores the designation entirely.
        raw.star_id = None;
        let rec = validate(&raw, SchemaVariant::Slim).unwrap();
        assert_eq!(rec.star_id, None);
        assert_eq!(rec.star_ref, "Doc1902d");
    }
}
