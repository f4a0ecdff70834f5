//! Typed description of a toy planetary system

use crate::schema::PLANET_FEATURES;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One planet of interest plus its host star, in archive units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanetarySystem {
    /// Number of planets in the system
    pub planet_count: u32,
    /// Planet mass in Jupiter masses
    pub planet_mass: f64,
    /// Semi-major axis in AU
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Stellar mass in solar masses
    pub stellar_mass: f64,
    /// Stellar effective temperature in Kelvin
    pub stellar_temperature: f64,
}

impl Default for PlanetarySystem {
    /// Earth around the Sun
    fn default() -> Self {
        Self {
            planet_count: 1,
            planet_mass: 0.00315,
            semi_major_axis: 1.0,
            eccentricity: 0.0167,
            stellar_mass: 1.0,
            stellar_temperature: 5772.0,
        }
    }
}

impl PlanetarySystem {
    /// Values in [`PLANET_FEATURES`] order
    pub fn to_values(&self) -> [f64; 6] {
        [
            f64::from(self.planet_count),
            self.planet_mass,
            self.semi_major_axis,
            self.eccentricity,
            self.stellar_mass,
            self.stellar_temperature,
        ]
    }

    /// Named description keyed by archive column
    pub fn to_description(&self) -> HashMap<String, f64> {
        PLANET_FEATURES
            .iter()
            .map(|name| name.to_string())
            .zip(self.to_values())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_keys() {
        let system = PlanetarySystem {
            planet_count: 3,
            ..Default::default()
        };
        let description = system.to_description();
        assert_eq!(description.len(), 6);
        assert_eq!(description["pl_pnum"], 3.0);
        assert_eq!(description["st_teff"], 5772.0);
    }
}
