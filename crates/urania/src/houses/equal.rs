use super::{AngleProvider, AngleSystem};
use crate::time::mean_obliquity;
use crate::zodiac::normalize_degrees;

/// Ascendant and Midheaven from local sidereal time, equal houses from
/// the Ascendant.
///
/// Latitudes are clamped to ±89.9° where the Ascendant formula degenerates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualHouseAngles;

const MAX_LATITUDE: f64 = 89.9;

impl AngleProvider for EqualHouseAngles {
    fn system(&self) -> AngleSystem {
        AngleSystem::Equal
    }

    fn ascendant(&self, lst: f64, latitude: f64, julian_day: f64) -> f64 {
        let ramc = lst.to_radians();
        let eps = mean_obliquity(julian_day).to_radians();
        let phi = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

        let y = ramc.cos();
        let x = -(ramc.sin() * eps.cos() + phi.tan() * eps.sin());
        normalize_degrees(y.atan2(x).to_degrees())
    }

    fn midheaven(&self, lst: f64, _latitude: f64, julian_day: f64) -> f64 {
        let ramc = lst.to_radians();
        let eps = mean_obliquity(julian_day).to_radians();
        normalize_degrees(ramc.sin().atan2(ramc.cos() * eps.cos()).to_degrees())
    }

    fn house_cusps(&self, ascendant: f64, _midheaven: f64, _latitude: f64) -> [f64; 12] {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = normalize_degrees(ascendant + 30.0 * i as f64);
        }
        cusps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::J2000_JD;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_equator_at_zero_ramc() {
        let angles = EqualHouseAngles;
        assert_abs_diff_eq!(angles.midheaven(0.0, 0.0, J2000_JD), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(angles.ascendant(0.0, 0.0, J2000_JD), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mc_at_ramc_90_is_cancer_point() {
        let angles = EqualHouseAngles;
        assert_abs_diff_eq!(angles.midheaven(90.0, 45.0, J2000_JD), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ascendant_is_east_of_mc() {
        let angles = EqualHouseAngles;
        for lst in [10.0, 95.0, 180.0, 275.0] {
            let mc = angles.midheaven(lst, 40.0, J2000_JD);
            let asc = angles.ascendant(lst, 40.0, J2000_JD);
            let ahead = normalize_degrees(asc - mc);
            assert!(ahead > 0.0 && ahead < 180.0, "lst={lst} mc={mc} asc={asc}");
        }
    }

    #[test]
    fn test_cusps_step_thirty_degrees() {
        let cusps = EqualHouseAngles.house_cusps(350.0, 0.0, 0.0);
        assert_eq!(cusps[0], 350.0);
        assert_eq!(cusps[1], 20.0);
        assert_eq!(cusps[11], 320.0);
    }
}
