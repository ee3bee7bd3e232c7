use solar_alt_az::dst::is_daylight_saving;
use solar_alt_az::position::*;
use solar_alt_az::types::{CivilDateTime, ObserverLocation};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> CivilDateTime {
    CivilDateTime::new(year, month, day, hour, minute, second).unwrap()
}

fn carbondale() -> SolarPositionCalculator {
    SolarPositionCalculator::new(ObserverLocation::new(37.7272, -89.2168, -6, -5).unwrap())
}

// ── Carbondale reference scenarios ──

#[test]
fn test_june_evening_reference() {
    let time = dt(2025, 6, 13, 22, 14, 0);
    assert!(is_daylight_saving(2025, 6, 13, 22));

    let result = carbondale().compute(&time);
    assert_eq!(result.utc_offset_hours, -5);
    assert_approx!(result.elevation_deg, -18.0937185114, 1e-6);
    assert_approx!(result.azimuth_deg, 320.9660873169, 1e-6);
    assert_eq!(result.irradiance_wm2, 0.0);
}

#[test]
fn test_june_reference_angles() {
    let location = ObserverLocation::default();
    let angles = solar_angles(&location, &dt(2025, 6, 13, 22, 14, 0), -5);
    assert_approx!(angles.gamma, 2.8130882163, 1e-9);
    assert_approx!(angles.declination, 0.4049304241, 1e-9);
    assert_approx!(angles.hour_angle, 2.4322844584, 1e-8);
}

#[test]
fn test_june_solar_noon_reference() {
    let result = carbondale().compute(&dt(2025, 6, 13, 13, 0, 0));
    assert_eq!(result.utc_offset_hours, -5);
    assert_approx!(result.elevation_deg, 75.4314272629, 1e-6);
    assert_approx!(result.azimuth_deg, 183.2143868096, 1e-6);
    assert_approx!(result.irradiance_wm2, 999.8493588517, 1e-5);
}

#[test]
fn test_january_standard_time_reference() {
    let result = carbondale().compute(&dt(2025, 1, 15, 12, 0, 0));
    assert_eq!(result.utc_offset_hours, -6);
    assert_approx!(result.elevation_deg, 30.9859244266, 1e-6);
    assert_approx!(result.azimuth_deg, 178.5063576696, 1e-6);
    assert_approx!(result.irradiance_wm2, 504.0728026059, 1e-5);
}

#[test]
fn test_equinox_reference() {
    let result = carbondale().compute(&dt(2025, 3, 20, 12, 0, 0));
    assert_eq!(result.utc_offset_hours, -5);
    assert_approx!(result.elevation_deg, 48.9691984096, 1e-6);
    assert_approx!(result.azimuth_deg, 154.7573587711, 1e-6);
    assert_approx!(result.irradiance_wm2, 765.9703454251, 1e-5);
}

#[test]
fn test_default_calculator_is_carbondale() {
    let default = SolarPositionCalculator::default();
    assert_eq!(default, carbondale());
    assert_eq!(default.location().latitude_deg(), 37.7272);
}

// ── Pure function properties ──

#[test]
fn test_idempotent() {
    let calculator = carbondale();
    let time = dt(2025, 6, 13, 22, 14, 0);
    let first = calculator.compute(&time);
    let second = calculator.compute(&time);
    assert_eq!(first, second);
    assert_eq!(first, compute_solar_position(calculator.location(), &time));
}

#[test]
fn test_ranges_over_a_year() {
    let calculator = carbondale();
    for month in 1..=12 {
        for day in [1, 15, 28] {
            for hour in 0..24 {
                let r = calculator.compute(&dt(2025, month, day, hour, 30, 0));
                assert!((-90.0..=90.0).contains(&r.elevation_deg), "{:?}", r);
                assert!((0.0..360.0).contains(&r.azimuth_deg), "{:?}", r);
                assert!(r.irradiance_wm2 >= 0.0, "{:?}", r);
                assert_eq!(r.irradiance_wm2 == 0.0, r.elevation_deg <= 0.0, "{:?}", r);
            }
        }
    }
}

#[test]
fn test_midnight_below_horizon() {
    let r = carbondale().compute(&dt(2025, 6, 21, 0, 0, 0));
    assert!(r.elevation_deg < 0.0);
    assert_eq!(r.irradiance_wm2, 0.0);
}

#[test]
fn test_morning_east_afternoon_west() {
    let calculator = carbondale();
    let morning = calculator.compute(&dt(2025, 9, 22, 9, 0, 0));
    let afternoon = calculator.compute(&dt(2025, 9, 22, 17, 0, 0));
    assert!(morning.azimuth_deg < 180.0);
    assert!(afternoon.azimuth_deg > 180.0);
}

// ── Other observers ──

#[test]
fn test_southern_hemisphere_reversed_seasons() {
    let sydney = SolarPositionCalculator::new(ObserverLocation::new(-33.9, 151.2, 10, 11).unwrap());
    let june = sydney.compute(&dt(2025, 6, 21, 12, 0, 0));
    let december = sydney.compute(&dt(2025, 12, 21, 12, 0, 0));
    assert!(june.elevation_deg < december.elevation_deg);
    assert!(june.irradiance_wm2 < december.irradiance_wm2);
}

#[test]
fn test_offsets_follow_configuration() {
    let eastern = SolarPositionCalculator::new(ObserverLocation::new(40.7, -74.0, -5, -4).unwrap());
    assert_eq!(eastern.compute(&dt(2025, 7, 4, 12, 0, 0)).utc_offset_hours, -4);
    assert_eq!(eastern.compute(&dt(2025, 12, 4, 12, 0, 0)).utc_offset_hours, -5);
}

#[test]
fn test_equivalent_clock_times_agree() {
    // Same instant and place, expressed against two different zones
    let central = ObserverLocation::new(37.7272, -89.2168, -6, -5).unwrap();
    let eastern = ObserverLocation::new(37.7272, -89.2168, -5, -4).unwrap();
    let a = compute_solar_position(&central, &dt(2025, 7, 4, 12, 0, 0));
    let b = compute_solar_position(&eastern, &dt(2025, 7, 4, 13, 0, 0));
    // gamma depends on the local hour, so only approximately equal
    assert_approx!(a.elevation_deg, b.elevation_deg, 0.05);
    assert_approx!(a.azimuth_deg, b.azimuth_deg, 0.1);
}

#[test]
fn test_out_of_envelope_years_still_evaluate() {
    let calculator = carbondale();
    for year in [1, 1800, 1900, 2100, 3000] {
        let r = calculator.compute(&dt(year, 6, 1, 12, 0, 0));
        assert!(r.elevation_deg.is_finite() && r.azimuth_deg.is_finite());
    }
}

// ── Input validation ──

#[test]
fn test_location_rejects_bad_values() {
    assert!(ObserverLocation::new(f64::NAN, 0.0, 0, 0).is_err());
    assert!(ObserverLocation::new(0.0, f64::INFINITY, 0, 0).is_err());
    assert!(ObserverLocation::new(91.0, 0.0, 0, 0).is_err());
    assert!(ObserverLocation::new(0.0, -181.0, 0, 0).is_err());
    assert!(ObserverLocation::new(0.0, 0.0, -13, 0).is_err());
    assert!(ObserverLocation::new(0.0, 0.0, 0, 15).is_err());
    assert!(ObserverLocation::new(-90.0, 180.0, -12, 14).is_ok());
}

#[test]
fn test_datetime_rejects_bad_values() {
    assert!(CivilDateTime::new(2025, 2, 29, 0, 0, 0).is_err());
    assert!(CivilDateTime::new(2025, 13, 1, 0, 0, 0).is_err());
    assert!(CivilDateTime::new(2025, 4, 31, 0, 0, 0).is_err());
    assert!(CivilDateTime::new(0, 1, 1, 0, 0, 0).is_err());
    assert!(CivilDateTime::new(2025, 1, 1, 24, 0, 0).is_err());
    assert!(CivilDateTime::new(2025, 1, 1, 0, 60, 0).is_err());
    assert!(CivilDateTime::new(2025, 1, 1, 0, 0, 60).is_err());
    assert!(CivilDateTime::new(2024, 2, 29, 23, 59, 59).is_ok());
}

#[test]
fn test_accessors_mirror_constructor() {
    let location = ObserverLocation::new(40.7, -74.0, -5, -4).unwrap();
    assert_eq!(location.latitude_deg(), 40.7);
    assert_eq!(location.longitude_deg(), -74.0);
    assert_eq!(location.standard_utc_offset_hours(), -5);
    assert_eq!(location.daylight_utc_offset_hours(), -4);

    let time = dt(2025, 6, 13, 22, 14, 5);
    assert_eq!(
        (time.year(), time.month(), time.day()),
        (2025, 6, 13)
    );
    assert_eq!((time.hour(), time.minute(), time.second()), (22, 14, 5));
}

#[test]
fn test_non_finite_and_impossible_inputs_cannot_be_built() {
    use solar_alt_az::Error;

    for (lat, lon) in [
        (f64::NAN, 0.0),
        (0.0, f64::NAN),
        (f64::INFINITY, 0.0),
        (0.0, f64::NEG_INFINITY),
    ] {
        assert!(
            matches!(
                ObserverLocation::new(lat, lon, -6, -5),
                Err(Error::InvalidInput { .. })
            ),
            "({}, {})",
            lat,
            lon
        );
    }
    assert!(matches!(
        CivilDateTime::new(2025, 13, 1, 12, 0, 0),
        Err(Error::InvalidDate { month: 13, .. })
    ));
    assert!(matches!(
        CivilDateTime::new(2025, 0, 1, 12, 0, 0),
        Err(Error::InvalidDate { month: 0, .. })
    ));
    assert!(matches!(
        solar_alt_az::parse_line("2025,13,1,12,0,0"),
        Err(Error::InvalidDate { .. })
    ));
}

#[test]
fn test_results_finite_for_extreme_valid_inputs() {
    let corners = [
        (90.0, 180.0, -12, 14),
        (-90.0, -180.0, 14, -12),
        (0.0, 0.0, 0, 0),
    ];
    for (lat, lon, std_offset, dst_offset) in corners {
        let location = ObserverLocation::new(lat, lon, std_offset, dst_offset).unwrap();
        for time in [dt(1, 1, 1, 0, 0, 0), dt(2025, 6, 21, 12, 0, 0), dt(9999, 12, 31, 23, 59, 59)] {
            let r = compute_solar_position(&location, &time);
            assert!(r.elevation_deg.is_finite(), "{:?}", r);
            assert!((0.0..360.0).contains(&r.azimuth_deg), "{:?}", r);
            assert!(r.irradiance_wm2 >= 0.0, "{:?}", r);
        }
    }
}

#[test]
fn test_datetime_chrono_conversion() {
    use chrono::NaiveDate;

    let naive = NaiveDate::from_ymd_opt(2025, 6, 13)
        .unwrap()
        .and_hms_opt(22, 14, 0)
        .unwrap();
    let civil = CivilDateTime::try_from(naive).unwrap();
    assert_eq!(civil, dt(2025, 6, 13, 22, 14, 0));
    assert_eq!(civil.to_naive(), Some(naive));
}
