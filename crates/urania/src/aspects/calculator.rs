use crate::aspects::types::{AspectKind, AspectRecord};
use crate::ephemeris::PlanetaryPosition;
use crate::zodiac::round_to;

/// Angular distance between two longitudes, folded into [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs() % 360.0;
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect calculator
#[derive(Debug, Clone)]
pub struct AspectCalculator {
    /// Orb per kind, indexed like [`AspectKind::ALL`]
    orbs: [f64; 5],
}

impl AspectCalculator {
    /// Calculator with the default orbs (8° for all but Sextile at 4°)
    pub fn new() -> Self {
        let mut orbs = [0.0; 5];
        for (slot, kind) in orbs.iter_mut().zip(AspectKind::ALL) {
            *slot = kind.default_orb();
        }
        Self { orbs }
    }

    /// Override the orb for one aspect kind
    pub fn with_orb(mut self, kind: AspectKind, orb: f64) -> Self {
        if let Some(i) = AspectKind::ALL.iter().position(|k| *k == kind) {
            self.orbs[i] = orb.abs();
        }
        self
    }

    pub fn orb(&self, kind: AspectKind) -> f64 {
        AspectKind::ALL
            .iter()
            .position(|k| *k == kind)
            .map(|i| self.orbs[i])
            .unwrap_or(0.0)
    }

    /// Aspect between two longitudes, if any.
    ///
    /// Kinds are tested in [`AspectKind::ALL`] order and the first match
    /// wins, even when a later kind would be closer to exact. The returned
    /// separation is the raw distance between the longitudes.
    pub fn calculate_aspect(&self, lon1: f64, lon2: f64) -> Option<(AspectKind, f64)> {
        let separation = angular_separation(lon1, lon2);

        AspectKind::ALL
            .iter()
            .zip(self.orbs.iter())
            .find(|(kind, orb)| (separation - kind.angle()).abs() <= **orb)
            .map(|(kind, _)| (*kind, separation))
    }

    /// Aspects over every unordered pair, each pair at most once, in
    /// (i, j > i) order of the input.
    pub fn calculate_aspects(&self, planets: &[PlanetaryPosition]) -> Vec<AspectRecord> {
        let mut aspects = Vec::new();

        for i in 0..planets.len() {
            for j in (i + 1)..planets.len() {
                let p1 = &planets[i];
                let p2 = &planets[j];

                if let Some((aspect, separation)) = self.calculate_aspect(p1.longitude, p2.longitude) {
                    aspects.push(AspectRecord {
                        planet1: p1.planet,
                        planet2: p2.planet,
                        aspect,
                        orb: round_to(separation, 2),
                    });
                }
            }
        }

        log::debug!("found {} aspects among {} bodies", aspects.len(), planets.len());
        aspects
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}
