//! L/R/C 소자 값으로부터 코너 주파수, Q, 대역폭, 임피던스를 구한다. 모든 값은 SI 기준이다.

use std::f64::consts::PI;

use num_complex::Complex64;

use super::model::FilterType;
use super::FilterError;

/// 안전 주파수 범위: 코너 주파수 대비 배율
const SAFE_RATIO: f64 = 1e6;

pub(crate) fn ensure_positive(component: &'static str, value: f64) -> Result<f64, FilterError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FilterError::InvalidComponentValue { component, value })
    }
}

/// LC 공진(차단) 주파수 `1 / (2π√(LC))` [Hz].
pub fn cutoff_frequency(inductance_h: f64, capacitance_f: f64) -> Result<f64, FilterError> {
    let l = ensure_positive("inductance", inductance_h)?;
    let c = ensure_positive("capacitance", capacitance_f)?;
    Ok(1.0 / (2.0 * PI * (l * c).sqrt()))
}

/// 직렬 RLC 품질 계수 `(1/R)·√(L/C)`.
pub fn quality_factor(
    resistance_ohm: f64,
    inductance_h: f64,
    capacitance_f: f64,
) -> Result<f64, FilterError> {
    let r = ensure_positive("resistance", resistance_ohm)?;
    let l = ensure_positive("inductance", inductance_h)?;
    let c = ensure_positive("capacitance", capacitance_f)?;
    Ok((l / c).sqrt() / r)
}

pub fn bandwidth(cutoff_hz: f64, quality_factor: f64) -> f64 {
    cutoff_hz / quality_factor
}

/// 필터 종류별 코너 주파수.
///
/// LC 계열은 공진 주파수, RC 계열은 `1/(2πRC)`, RL 계열은 `R/(2πL)`.
pub fn corner_frequency(
    filter_type: FilterType,
    resistance_ohm: f64,
    inductance_h: f64,
    capacitance_f: f64,
) -> Result<f64, FilterError> {
    match filter_type {
        FilterType::LowPass | FilterType::HighPass | FilterType::BandPass | FilterType::BandStop => {
            cutoff_frequency(inductance_h, capacitance_f)
        }
        FilterType::RcLowPass | FilterType::RcHighPass => {
            let r = ensure_positive("resistance", resistance_ohm)?;
            let c = ensure_positive("capacitance", capacitance_f)?;
            Ok(1.0 / (2.0 * PI * r * c))
        }
        FilterType::RlLowPass | FilterType::RlHighPass => {
            let r = ensure_positive("resistance", resistance_ohm)?;
            let l = ensure_positive("inductance", inductance_h)?;
            Ok(r / (2.0 * PI * l))
        }
    }
}

/// 응답 계산용 주파수를 `[fc·1e-6, fc·1e6]` 범위로 제한한다.
pub fn safe_frequency(frequency_hz: f64, cutoff_hz: f64) -> f64 {
    let lo = cutoff_hz / SAFE_RATIO;
    let hi = cutoff_hz * SAFE_RATIO;
    let clamped = frequency_hz.clamp(lo, hi);
    if clamped != frequency_hz {
        tracing::debug!(frequency_hz, clamped, cutoff_hz, "운전 주파수를 안전 범위로 제한");
    }
    clamped
}

/// 직렬 RLC 복소 임피던스 `R + j(ωL − 1/(ωC))`.
pub fn complex_impedance(
    resistance_ohm: f64,
    inductance_h: f64,
    capacitance_f: f64,
    frequency_hz: f64,
) -> Complex64 {
    let omega = 2.0 * PI * frequency_hz;
    Complex64::new(resistance_ohm, omega * inductance_h - 1.0 / (omega * capacitance_f))
}

/// 임피던스 크기 [Ω].
pub fn impedance(
    resistance_ohm: f64,
    inductance_h: f64,
    capacitance_f: f64,
    frequency_hz: f64,
) -> f64 {
    complex_impedance(resistance_ohm, inductance_h, capacitance_f, frequency_hz).norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_lc_cutoff() {
        let fc = cutoff_frequency(1.0, 1.0).unwrap();
        assert_relative_eq!(fc, 1.0 / (2.0 * PI), max_relative = 1e-12);
    }

    #[test]
    fn rejects_non_positive_parts() {
        assert!(matches!(
            cutoff_frequency(0.0, 1e-6),
            Err(FilterError::InvalidComponentValue { component: "inductance", .. })
        ));
        assert!(quality_factor(-1.0, 1e-3, 1e-6).is_err());
    }

    #[test]
    fn impedance_is_resistive_at_resonance() {
        let (r, l, c) = (50.0, 1e-3, 1e-6);
        let f0 = cutoff_frequency(l, c).unwrap();
        assert_relative_eq!(impedance(r, l, c, f0), r, max_relative = 1e-9);
    }

    #[test]
    fn safe_frequency_clamps_both_ends() {
        assert_eq!(safe_frequency(0.0, 1_000.0), 1e-3);
        assert_eq!(safe_frequency(1e12, 1_000.0), 1e9);
        assert_eq!(safe_frequency(10.0, 1_000.0), 10.0);
    }

    #[test]
    fn rc_corner_frequency() {
        let fc = corner_frequency(FilterType::RcLowPass, 1_000.0, 1.0, 1e-6).unwrap();
        assert_relative_eq!(fc, 159.154_943_091_895_34, max_relative = 1e-9);
    }
}
