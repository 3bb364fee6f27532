//! # ORB6 orbital elements and catalog records
//!
//! This module defines the typed representation of one published orbit
//! solution from the ORB6 catalog of visual binary stars.
//!
//! ## What ORB6 publishes
//!
//! The seven elements carried per solution are:
//!
//! 1. **P** – Orbital period (days)
//! 2. **T** – Epoch of periastron passage (Julian date)
//! 3. **e** – Eccentricity (unitless, expected in `[0, 1)`)
//! 4. **a** – Semimajor axis (arcseconds)
//! 5. **Ω** – Position angle of the ascending node (degrees, `[0, 360)`)
//! 6. **ω** – Argument of periastron (degrees, `[0, 360)`)
//! 7. **i** – Inclination (degrees, `[0, 180]`)
//!
//! ORB6 carries no radial-velocity information, so the consumer-facing
//! parameter vector produced by [`OrbitalElements::to_fit_parameters`]
//! zero-fills the `K1`, `K2` and `V0` slots.
//!
//! ## Units
//!
//! - Lengths: **arcseconds** (on-sky, not AU)
//! - Angles: **degrees**, exactly as published
//! - Time: **days** for `P`, **Julian date** for `T`

use std::fmt;

/// Keplerian elements of one published double-star orbit solution.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElements {
    /// Orbital period in days.
    pub period: f64,
    /// Epoch of periastron passage, Julian date.
    pub periastron_time: f64,
    /// Eccentricity of the orbital ellipse.
    pub eccentricity: f64,
    /// Semimajor axis in arcseconds.
    pub semi_major_axis: f64,
    /// Position angle of the ascending node, degrees.
    pub ascending_node: f64,
    /// Argument of periastron, degrees.
    pub periastron_argument: f64,
    /// Inclination, degrees.
    pub inclination: f64,
}

impl OrbitalElements {
    /// Map the elements into the 10-slot fit parameter vector
    /// `[P, T, e, a, Ω, ω, i, K1, K2, V0]` consumed by an orbital-fit
    /// collaborator as its starting guess or overlay.
    ///
    /// Return
    /// ----------
    /// * The parameter vector, with `K1`, `K2` and `V0` set to `0.0` since
    ///   the catalog carries no radial-velocity amplitude or systemic
    ///   velocity data.
    pub fn to_fit_parameters(&self) -> [f64; 10] {
        [
            self.period,
            self.periastron_time,
            self.eccentricity,
            self.semi_major_axis,
            self.ascending_node,
            self.periastron_argument,
            self.inclination,
            0.0,
            0.0,
            0.0,
        ]
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P={:.4} d, T={:.4} JD, e={:.4}, a={:.4}\", Ω={:.2}°, ω={:.2}°, i={:.2}°",
            self.period,
            self.periastron_time,
            self.eccentricity,
            self.semi_major_axis,
            self.ascending_node,
            self.periastron_argument,
            self.inclination,
        )
    }
}

/// One validated catalog entry: designation, reference code and elements.
///
/// `star_ref` is the external lookup key. It identifies the published orbit
/// solution, not the star, and the upstream catalog does not guarantee its
/// uniqueness (see the duplicate policy on [`crate::catalog::Catalog`]).
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    /// WDS designation of the double star. Absent in the slim schema.
    pub star_id: Option<String>,
    /// Reference/citation code of the orbit solution.
    pub star_ref: String,
    /// The published orbital elements.
    pub elements: OrbitalElements,
}

impl fmt::Display for CatalogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.star_id {
            Some(id) => write!(f, "{} (WDS {}): {}", self.star_ref, id, self.elements),
            None => write!(f, "{}: {}", self.star_ref, self.elements),
        }
    }
}

#[cfg(test)]
mod elements_test {
    use super::*;

    #[test]
    fn fit_parameters_zero_fill_rv_slots() {
        let elements = OrbitalElements {
            period: 365.25,
            periastron_time: 2451545.0,
            eccentricity: 0.1234,
            semi_major_axis: 0.5,
            ascending_node: 120.0,
            periastron_argument: 45.0,
            inclination: 60.0,
        };

        let params = elements.to_fit_parameters();
        assert_eq!(params[0], 365.25);
        assert_eq!(params[1], 2451545.0);
        assert_eq!(params[2], 0.1234);
        assert_eq!(params[3], 0.5);
        assert_eq!(params[4], 120.0);
        assert_eq!(params[5], 45.0);
        assert_eq!(params[6], 60.0);
        assert_eq!(params[7..10], [0.0, 0.0, 0.0]);
    }
}
