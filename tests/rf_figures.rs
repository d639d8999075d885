//! 정합/잡음 지표 회귀 테스트.
use num_complex::Complex64;
use rf_engineering_toolbox::rf::{
    cascade, mismatch_loss_db, noise_figure_db, noise_temperature, power_gain_db,
    reflection_coefficient, return_loss_db, voltage_gain_db, MatchReport, RfError, Stage,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual}, expected={expected}"
    );
}

#[test]
fn matched_load() {
    let m = MatchReport::from_load(Complex64::new(50.0, 0.0), 50.0).unwrap();
    assert_eq!(m.gamma_magnitude, 0.0);
    assert_eq!(m.vswr, 1.0);
    assert_eq!(m.return_loss_db, f64::INFINITY);
    assert_close(m.mismatch_loss_db, 0.0, 1e-12);
}

#[test]
fn hundred_ohm_load_on_fifty_ohm_line() {
    let g = reflection_coefficient(Complex64::new(100.0, 0.0), 50.0).unwrap();
    assert_close(g.re, 1.0 / 3.0, 1e-12);
    assert_close(g.im, 0.0, 1e-12);
    let m = MatchReport::from_load(Complex64::new(100.0, 0.0), 50.0).unwrap();
    assert_close(m.vswr, 2.0, 1e-12);
    assert_close(return_loss_db(1.0 / 3.0).unwrap(), 9.542, 1e-3);
    assert_close(mismatch_loss_db(1.0 / 3.0).unwrap(), 0.5115, 1e-3);
}

#[test]
fn rejects_bad_reference_impedance() {
    assert_eq!(
        reflection_coefficient(Complex64::new(50.0, 0.0), 0.0),
        Err(RfError::InvalidReferenceImpedance(0.0))
    );
}

#[test]
fn noise_temperature_of_3db() {
    assert_close(noise_temperature(3.0103), 290.0, 0.1);
    assert_close(noise_figure_db(290.0).unwrap(), 3.0103, 1e-4);
}

#[test]
fn single_stage_cascade_keeps_nf() {
    let r = cascade(&[Stage { gain_db: 15.0, noise_figure_db: 2.0 }]).unwrap();
    assert_close(r.noise_figure_db, 2.0, 1e-12);
    assert_close(r.total_gain_db, 15.0, 1e-12);
}

#[test]
fn lna_dominates_cascade() {
    let stages: Vec<Stage> = ["20:1", "10:10"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let r = cascade(&stages).unwrap();
    // F = 1.2589 + (10 − 1)/100
    let f = 10f64.powf(0.1) + 9.0 / 100.0;
    assert_close(r.noise_figure_db, 10.0 * f.log10(), 1e-9);
    assert_close(r.total_gain_db, 30.0, 1e-12);
    assert_eq!(cascade(&[]), Err(RfError::EmptyCascade));
}

#[test]
fn gains_in_db() {
    assert_close(power_gain_db(1e-3, 1.0).unwrap(), 30.0, 1e-12);
    assert_close(voltage_gain_db(1.0, 10.0).unwrap(), 20.0, 1e-12);
    assert!(power_gain_db(0.0, 1.0).is_err());
}
