//! Calendar to Julian Day conversion and sidereal time.

use crate::zodiac::normalize_degrees;
use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2451545.0;

const DAYS_PER_CENTURY: f64 = 36525.0;

/// Gregorian calendar date plus fractional hour to Julian Day.
///
/// January and February count as months 13 and 14 of the previous year;
/// the century term `b = 2 - a + a/4` applies the Gregorian correction.
pub fn calculate_julian_day(year: i32, month: u32, day: u32, hour_fraction: f64) -> f64 {
    let (year, month) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let year = year as f64;
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year + 4716.0)).floor()
        + (30.6001 * (month as f64 + 1.0)).floor()
        + day as f64
        + b
        - 1524.5
        + hour_fraction / 24.0
}

/// Hours plus minutes/60. Seconds are not part of the model.
pub fn hour_fraction(datetime: &NaiveDateTime) -> f64 {
    datetime.hour() as f64 + datetime.minute() as f64 / 60.0
}

/// Julian Day for a naive date-time read on the chosen [`TimeBasis`].
pub fn julian_day_for(datetime: &NaiveDateTime) -> f64 {
    calculate_julian_day(
        datetime.year(),
        datetime.month(),
        datetime.day(),
        hour_fraction(datetime),
    )
}

/// Julian centuries since J2000.0.
pub fn julian_centuries(julian_day: f64) -> f64 {
    (julian_day - J2000_JD) / DAYS_PER_CENTURY
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
pub fn greenwich_mean_sidereal_time(julian_day: f64) -> f64 {
    let t = julian_centuries(julian_day);
    let gmst = 280.46061837 + 360.98564736629 * (julian_day - J2000_JD) + 0.000387933 * t * t
        - t * t * t / 38710000.0;
    normalize_degrees(gmst)
}

/// Local Sidereal Time in degrees [0, 360), east longitude positive.
pub fn calculate_local_sidereal_time(julian_day: f64, longitude: f64) -> f64 {
    normalize_degrees(greenwich_mean_sidereal_time(julian_day) + longitude)
}

/// Mean obliquity of the ecliptic in degrees (low-order IAU polynomial).
pub fn mean_obliquity(julian_day: f64) -> f64 {
    let t = julian_centuries(julian_day);
    23.439291 - 0.0130042 * t - 0.00000016 * t * t + 0.000000504 * t * t * t
}

/// How the birth's civil clock time maps to the time fed into the
/// Julian Day formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeBasis {
    /// Local civil time is used as if it were UT.
    #[default]
    LocalAsUniversal,
    /// Local civil time minus a fixed offset east of Greenwich.
    FixedOffset { minutes: i32 },
}

impl TimeBasis {
    pub fn from_offset_minutes(offset: Option<i32>) -> Self {
        match offset {
            Some(minutes) => TimeBasis::FixedOffset { minutes },
            None => TimeBasis::LocalAsUniversal,
        }
    }

    /// Shift a local civil date-time onto the universal axis.
    /// Returns `None` if the shift leaves chrono's representable range.
    pub fn to_universal(&self, local: NaiveDateTime) -> Option<NaiveDateTime> {
        match *self {
            TimeBasis::LocalAsUniversal => Some(local),
            TimeBasis::FixedOffset { minutes } => {
                local.checked_sub_signed(Duration::minutes(minutes as i64))
            }
        }
    }

    /// Label such as `UTC` or `UTC+05:30`.
    pub fn label(&self) -> String {
        match *self {
            TimeBasis::LocalAsUniversal | TimeBasis::FixedOffset { minutes: 0 } => "UTC".to_string(),
            TimeBasis::FixedOffset { minutes } => {
                let sign = if minutes < 0 { '-' } else { '+' };
                let abs = minutes.unsigned_abs();
                format!("UTC{}{:02}:{:02}", sign, abs / 60, abs % 60)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    #[test]
    fn test_j2000_fixed_point() {
        assert_eq!(calculate_julian_day(2000, 1, 1, 12.0), J2000_JD);
    }

    #[test]
    fn test_gmst_at_j2000() {
        assert_abs_diff_eq!(greenwich_mean_sidereal_time(J2000_JD), 280.46061837, epsilon = 1e-9);
    }

    #[test]
    fn test_lst_wraps_with_longitude() {
        let lst = calculate_local_sidereal_time(J2000_JD, 90.0);
        assert_abs_diff_eq!(lst, 10.46061837, epsilon = 1e-8);
        let west = calculate_local_sidereal_time(J2000_JD, -180.0);
        assert_abs_diff_eq!(west, 100.46061837, epsilon = 1e-8);
    }

    #[test]
    fn test_offset_label() {
        assert_eq!(TimeBasis::LocalAsUniversal.label(), "UTC");
        assert_eq!(TimeBasis::FixedOffset { minutes: 330 }.label(), "UTC+05:30");
        assert_eq!(TimeBasis::FixedOffset { minutes: -480 }.label(), "UTC-08:00");
    }

    #[test]
    fn test_fixed_offset_crosses_midnight() {
        let local = NaiveDate::from_ymd_opt(2004, 2, 12)
            .unwrap()
            .and_hms_opt(2, 0, 0)
            .unwrap();
        let utc = TimeBasis::FixedOffset { minutes: 330 }.to_universal(local).unwrap();
        assert_eq!(utc.day(), 11);
        assert_eq!(utc.hour(), 20);
        assert_eq!(utc.minute(), 30);
    }
}
