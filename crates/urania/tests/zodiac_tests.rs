use approx::assert_abs_diff_eq;
use urania::time::{calculate_julian_day, calculate_local_sidereal_time, J2000_JD};
use urania::zodiac::{degrees_to_sign, sign_index, ZodiacSign};

#[test]
fn test_degrees_to_sign_known_points() {
    let aries = degrees_to_sign(0.0);
    assert_eq!(aries.sign, ZodiacSign::Aries);
    assert_eq!(aries.degree_in_sign, 0.0);

    let late_pisces = degrees_to_sign(359.999);
    assert_eq!(late_pisces.sign, ZodiacSign::Pisces);
    assert_abs_diff_eq!(late_pisces.degree_in_sign, 29.999, epsilon = 0.01);

    let negative = degrees_to_sign(-10.0);
    assert_eq!(negative.sign, ZodiacSign::Pisces);
    assert_eq!(negative.degree_in_sign, 20.0);
}

#[test]
fn test_degrees_to_sign_is_periodic() {
    for x in [0.5, 45.25, 123.4, 200.1, 359.4, -75.3] {
        let base = degrees_to_sign(x);
        for k in -3..=3 {
            let shifted = degrees_to_sign(x + 360.0 * k as f64);
            assert_eq!(shifted, base, "x={x} k={k}");
        }
    }
}

#[test]
fn test_periodic_at_rounding_boundaries() {
    assert_eq!(degrees_to_sign(-499.995), degrees_to_sign(-499.995 - 1080.0));

    for i in 0..20_000 {
        let x = -500.0 + i as f64 * 0.0005;
        let base = degrees_to_sign(x);
        for k in [-3.0, -1.0, 2.0] {
            assert_eq!(degrees_to_sign(x + 360.0 * k), base, "x={x} k={k}");
        }
    }
}

#[test]
fn test_sign_index_always_in_range() {
    let mut x = -1000.0;
    while x < 1000.0 {
        assert!(sign_index(x) <= 11);
        x += 0.37;
    }
    assert!(sign_index(360.0 - f64::EPSILON) <= 11);
    assert!(sign_index(-f64::MIN_POSITIVE) <= 11);
}

#[test]
fn test_sign_boundaries() {
    assert_eq!(degrees_to_sign(30.0).sign, ZodiacSign::Taurus);
    assert_eq!(degrees_to_sign(29.99).sign, ZodiacSign::Aries);
    assert_eq!(degrees_to_sign(300.0).sign, ZodiacSign::Aquarius);
    assert_eq!(degrees_to_sign(330.0).sign, ZodiacSign::Pisces);
}

#[test]
fn test_julian_day_j2000() {
    assert_eq!(calculate_julian_day(2000, 1, 1, 12.0), J2000_JD);
}

#[test]
fn test_julian_day_known_dates() {
    // 1999-01-01 00:00 and the Gregorian reform date
    assert_eq!(calculate_julian_day(1999, 1, 1, 0.0), 2451179.5);
    assert_eq!(calculate_julian_day(1957, 10, 4, 19.0 + 26.0 / 60.0 + 24.0 / 3600.0).floor(), 2436116.0);
    assert_eq!(calculate_julian_day(2004, 2, 12, 0.0), 2453047.5);
}

#[test]
fn test_julian_day_strictly_increasing() {
    let mut previous = calculate_julian_day(1899, 12, 31, 6.5);
    for year in 1900..2030 {
        for month in 1..=12u32 {
            for day in [1u32, 15, 28] {
                let jd = calculate_julian_day(year, month, day, 6.5);
                assert!(jd > previous, "{year}-{month}-{day}");
                previous = jd;
            }
        }
    }
}

#[test]
fn test_julian_day_march_follows_february() {
    let leap = calculate_julian_day(2004, 3, 1, 0.0) - calculate_julian_day(2004, 2, 28, 0.0);
    assert_eq!(leap, 2.0);
    let common = calculate_julian_day(2003, 3, 1, 0.0) - calculate_julian_day(2003, 2, 28, 0.0);
    assert_eq!(common, 1.0);
}

#[test]
fn test_lst_in_range() {
    for i in 0..200 {
        let jd = J2000_JD + i as f64 * 13.37;
        for lng in [-180.0, -77.0, 0.0, 77.0, 180.0] {
            let lst = calculate_local_sidereal_time(jd, lng);
            assert!((0.0..360.0).contains(&lst), "jd={jd} lng={lng} lst={lst}");
        }
    }
}
