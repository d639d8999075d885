//! 필터 해석 엔진 회귀 테스트.
use std::f64::consts::PI;

use rf_engineering_toolbox::filter::{
    calculate_filter_results, cutoff_frequency, magnitude_response, FilterError,
    FilterInputValues, FilterType, ResponseShape, RESPONSE_POINTS,
};
use rf_engineering_toolbox::quantity::QuantityValue;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual}, expected={expected}"
    );
}

fn unit_lc(filter_type: FilterType) -> FilterInputValues {
    FilterInputValues {
        filter_type,
        frequency: QuantityValue::new(1.0 / (2.0 * PI), "Hz"),
        capacitance: QuantityValue::new(1.0, "F"),
        inductance: QuantityValue::new(1.0, "H"),
        resistance: QuantityValue::new(1.0, "Ω"),
    }
}

#[test]
fn unit_lc_cutoff() {
    assert_close(cutoff_frequency(1.0, 1.0).unwrap(), 0.159_155, 1e-6);
}

#[test]
fn lowpass_is_3db_down_at_cutoff_for_any_r() {
    let fc = cutoff_frequency(1.0, 1.0).unwrap();
    for r in [0.1, 1.0, 1000.0] {
        let bw = fc * r;
        let mag = magnitude_response(ResponseShape::LowPass, fc, fc, bw).unwrap();
        assert_close(mag, std::f64::consts::FRAC_1_SQRT_2, 1e-4);
    }
}

#[test]
fn lowpass_attenuation_at_cutoff() {
    let r = calculate_filter_results(&unit_lc(FilterType::LowPass)).unwrap();
    assert_close(r.cutoff_frequency, 0.159_155, 1e-6);
    assert_close(r.quality_factor, 1.0, 1e-12);
    assert_close(r.attenuation, 3.01, 0.05);
    assert_close(r.phase_shift_degrees(), -45.0, 1e-6);
    assert_eq!(r.roll_off, -20.0);
}

#[test]
fn bandpass_peaks_at_cutoff() {
    let r = calculate_filter_results(&unit_lc(FilterType::BandPass)).unwrap();
    assert_close(r.attenuation, 0.0, 1e-9);
    assert_eq!(r.stopband_frequency, r.cutoff_frequency);
    assert_eq!(r.roll_off, -40.0);
}

#[test]
fn response_has_fixed_length_and_increasing_frequency() {
    for filter_type in FilterType::ALL {
        let r = calculate_filter_results(&unit_lc(filter_type)).unwrap();
        let points = r.frequency_response.points();
        assert_eq!(points.len(), RESPONSE_POINTS);
        assert!(points.windows(2).all(|w| w[0].x < w[1].x), "{filter_type}");
        assert!(points.iter().all(|p| p.y.is_finite() || p.y == f64::NEG_INFINITY));
    }
}

#[test]
fn far_out_frequency_is_clamped() {
    let mut input = unit_lc(FilterType::HighPass);
    input.frequency = QuantityValue::new(1.0, "THz");
    let r = calculate_filter_results(&input).unwrap();
    let points = r.frequency_response.points();
    assert_eq!(points.len(), RESPONSE_POINTS);
    assert!(points.windows(2).all(|w| w[0].x < w[1].x));
    assert!(r.attenuation.abs() < 1e-6);
}

#[test]
fn results_use_caller_units() {
    let input = FilterInputValues {
        filter_type: FilterType::BandStop,
        frequency: QuantityValue::new(1.0, "kHz"),
        capacitance: QuantityValue::new(100.0, "nF"),
        inductance: QuantityValue::new(10.0, "mH"),
        resistance: QuantityValue::new(0.05, "kΩ"),
    };
    let r = calculate_filter_results(&input).unwrap();
    let fc_hz = 1.0 / (2.0 * PI * (10e-3f64 * 100e-9).sqrt());
    assert_eq!(r.frequency_unit, "kHz");
    assert_eq!(r.impedance_unit, "kΩ");
    assert_close(r.cutoff_frequency, fc_hz / 1e3, 1e-9);

    let omega = 2.0 * PI * 1e3;
    let x = omega * 10e-3 - 1.0 / (omega * 100e-9);
    let z_ohm = (50.0f64 * 50.0 + x * x).sqrt();
    assert_close(r.impedance, z_ohm / 1e3, 1e-9);

    let first = r.frequency_response.points()[0];
    assert_close(first.x, 1.0 / 100.0, 1e-12);
}

#[test]
fn invalid_components_are_wrapped() {
    for bad in [0.0, -1.0, f64::NAN] {
        let mut input = unit_lc(FilterType::LowPass);
        input.inductance.value = bad;
        let err = calculate_filter_results(&input).unwrap_err();
        assert!(matches!(
            err.cause(),
            FilterError::InvalidComponentValue { component: "inductance", .. }
        ));
        let source = std::error::Error::source(&err).expect("wrapped source");
        assert!(source.downcast_ref::<FilterError>().is_some());
    }
}

#[test]
fn filter_type_aliases() {
    assert_eq!("notch".parse::<FilterType>().unwrap(), FilterType::BandStop);
    assert_eq!("rc-lowpass".parse::<FilterType>().unwrap(), FilterType::RcLowPass);
    assert!(matches!(
        "elliptic".parse::<FilterType>(),
        Err(FilterError::InvalidFilterType(_))
    ));
}
