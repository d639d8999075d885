//! 응답 형태별 폐형식(closed-form) 진폭/위상/군지연 식.
//!
//! 기호: `n = f/fc`, `q = fc/bw`, `x = q·(n − 1/n)`.

use std::f64::consts::{FRAC_PI_2, PI};

use super::model::ResponseShape;
use super::FilterError;

fn check_args(f: f64, fc: f64, bw: f64) -> Result<(), FilterError> {
    if !f.is_finite() || f < 0.0 {
        return Err(FilterError::InvalidFrequency(f));
    }
    if !fc.is_finite() || fc <= 0.0 {
        return Err(FilterError::InvalidCutoff(fc));
    }
    if !bw.is_finite() || bw <= 0.0 {
        return Err(FilterError::InvalidBandwidth(bw));
    }
    Ok(())
}

/// 대역 필터의 정규화 이조(detuning) `q·(n − 1/n)`. f = 0 이면 -∞.
fn detuning(f: f64, fc: f64, bw: f64) -> f64 {
    let n = f / fc;
    let q = fc / bw;
    if n == 0.0 {
        f64::NEG_INFINITY
    } else {
        q * (n - 1.0 / n)
    }
}

/// 선형 진폭 응답 |H(f)|.
pub fn magnitude_response(
    shape: ResponseShape,
    f: f64,
    fc: f64,
    bw: f64,
) -> Result<f64, FilterError> {
    check_args(f, fc, bw)?;
    let n = f / fc;
    let mag = match shape {
        ResponseShape::LowPass => 1.0 / (1.0 + n * n).sqrt(),
        ResponseShape::HighPass => n / (1.0 + n * n).sqrt(),
        ResponseShape::BandPass => {
            let x = detuning(f, fc, bw);
            if x.is_infinite() {
                0.0
            } else {
                1.0 / (1.0 + x * x).sqrt()
            }
        }
        ResponseShape::BandStop => {
            let x = detuning(f, fc, bw);
            if x.is_infinite() {
                1.0
            } else {
                x.abs() / (1.0 + x * x).sqrt()
            }
        }
    };
    Ok(mag)
}

/// 위상 [rad].
pub fn phase_shift(shape: ResponseShape, f: f64, fc: f64, bw: f64) -> Result<f64, FilterError> {
    check_args(f, fc, bw)?;
    let n = f / fc;
    let phase = match shape {
        ResponseShape::LowPass => -n.atan(),
        ResponseShape::HighPass => FRAC_PI_2 - (1.0 / n).atan(),
        ResponseShape::BandPass => detuning(f, fc, bw).atan(),
        ResponseShape::BandStop => -detuning(f, fc, bw).atan(),
    };
    Ok(phase)
}

/// 군지연 [s].
pub fn group_delay(shape: ResponseShape, f: f64, fc: f64, bw: f64) -> Result<f64, FilterError> {
    check_args(f, fc, bw)?;
    let n = f / fc;
    let delay = match shape {
        ResponseShape::LowPass => 1.0 / (2.0 * PI * f * (1.0 + n * n)),
        ResponseShape::HighPass => {
            let inv = 1.0 / n;
            1.0 / (2.0 * PI * f * (1.0 + inv * inv))
        }
        ResponseShape::BandPass | ResponseShape::BandStop => {
            let q = fc / bw;
            let x = detuning(f, fc, bw);
            q / (PI * fc * (1.0 + x * x))
        }
    };
    Ok(delay)
}

/// 감쇠량 `−20·log10|H|` [dB].
pub fn attenuation(shape: ResponseShape, f: f64, fc: f64, bw: f64) -> Result<f64, FilterError> {
    Ok(-20.0 * magnitude_response(shape, f, fc, bw)?.log10())
}

/// 저지대역 기준 주파수. 대역 필터는 코너 주파수를 그대로 쓴다.
pub fn stopband_frequency(shape: ResponseShape, fc: f64) -> f64 {
    match shape {
        ResponseShape::LowPass => fc * 10.0,
        ResponseShape::HighPass => fc / 10.0,
        ResponseShape::BandPass | ResponseShape::BandStop => fc,
    }
}

pub fn stopband_attenuation(shape: ResponseShape, fc: f64, bw: f64) -> Result<f64, FilterError> {
    let fs = stopband_frequency(shape, fc);
    if fs > 0.0 {
        attenuation(shape, fs, fc, bw)
    } else {
        Ok(0.0)
    }
}

/// 롤오프 [dB/decade].
pub fn roll_off(shape: ResponseShape) -> f64 {
    match shape {
        ResponseShape::LowPass | ResponseShape::HighPass => -20.0,
        ResponseShape::BandPass | ResponseShape::BandStop => -40.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FC: f64 = 1_000.0;
    const BW: f64 = 100.0;

    #[test]
    fn first_order_shapes_are_half_power_at_cutoff() {
        for shape in [ResponseShape::LowPass, ResponseShape::HighPass] {
            let m = magnitude_response(shape, FC, FC, BW).unwrap();
            assert_relative_eq!(m, std::f64::consts::FRAC_1_SQRT_2, max_relative = 1e-12);
        }
    }

    #[test]
    fn band_shapes_at_centre() {
        assert_relative_eq!(magnitude_response(ResponseShape::BandPass, FC, FC, BW).unwrap(), 1.0);
        assert_eq!(magnitude_response(ResponseShape::BandStop, FC, FC, BW).unwrap(), 0.0);
    }

    #[test]
    fn band_shapes_at_dc_use_limits() {
        assert_eq!(magnitude_response(ResponseShape::BandPass, 0.0, FC, BW).unwrap(), 0.0);
        assert_eq!(magnitude_response(ResponseShape::BandStop, 0.0, FC, BW).unwrap(), 1.0);
    }

    #[test]
    fn argument_validation() {
        assert!(matches!(
            magnitude_response(ResponseShape::LowPass, -1.0, FC, BW),
            Err(FilterError::InvalidFrequency(_))
        ));
        assert!(matches!(
            magnitude_response(ResponseShape::LowPass, 1.0, 0.0, BW),
            Err(FilterError::InvalidCutoff(_))
        ));
        assert!(matches!(
            magnitude_response(ResponseShape::BandPass, 1.0, FC, 0.0),
            Err(FilterError::InvalidBandwidth(_))
        ));
    }

    #[test]
    fn lowpass_phase_is_minus_45_deg_at_cutoff() {
        let p = phase_shift(ResponseShape::LowPass, FC, FC, BW).unwrap();
        assert_relative_eq!(p.to_degrees(), -45.0, max_relative = 1e-12);
    }

    #[test]
    fn bandpass_delay_peaks_at_centre() {
        let centre = group_delay(ResponseShape::BandPass, FC, FC, BW).unwrap();
        let off = group_delay(ResponseShape::BandPass, 1.2 * FC, FC, BW).unwrap();
        assert_relative_eq!(centre, (FC / BW) / (PI * FC), max_relative = 1e-12);
        assert!(off < centre);
    }

    const F_ABOVE: f64 = 1.3 * FC;

    fn off_centre_detuning() -> f64 {
        let n = F_ABOVE / FC;
        (FC / BW) * (n - 1.0 / n)
    }

    #[test]
    fn highpass_phase_off_cutoff() {
        let n: f64 = F_ABOVE / FC;
        let p = phase_shift(ResponseShape::HighPass, F_ABOVE, FC, BW).unwrap();
        assert_relative_eq!(p, FRAC_PI_2 - (1.0 / n).atan(), max_relative = 1e-12);
        assert!(p > 0.0 && p < FRAC_PI_2);
    }

    #[test]
    fn band_phases_have_opposite_signs() {
        let x = off_centre_detuning();
        let bp = phase_shift(ResponseShape::BandPass, F_ABOVE, FC, BW).unwrap();
        let bs = phase_shift(ResponseShape::BandStop, F_ABOVE, FC, BW).unwrap();
        assert_relative_eq!(bp, x.atan(), max_relative = 1e-12);
        assert_relative_eq!(bs, -x.atan(), max_relative = 1e-12);
        assert!(bp > 0.0);
        assert!(bs < 0.0);
    }

    #[test]
    fn first_order_group_delay_off_cutoff() {
        let n = F_ABOVE / FC;
        let lp = group_delay(ResponseShape::LowPass, F_ABOVE, FC, BW).unwrap();
        let hp = group_delay(ResponseShape::HighPass, F_ABOVE, FC, BW).unwrap();
        assert_relative_eq!(lp, 1.0 / (2.0 * PI * F_ABOVE * (1.0 + n * n)), max_relative = 1e-12);
        assert_relative_eq!(
            hp,
            1.0 / (2.0 * PI * F_ABOVE * (1.0 + 1.0 / (n * n))),
            max_relative = 1e-12
        );
        assert!(lp > 0.0 && hp > 0.0);
    }

    #[test]
    fn bandstop_group_delay_off_centre() {
        let x = off_centre_detuning();
        let d = group_delay(ResponseShape::BandStop, F_ABOVE, FC, BW).unwrap();
        assert_relative_eq!(d, (FC / BW) / (PI * FC * (1.0 + x * x)), max_relative = 1e-12);
    }

    #[test]
    fn highpass_stopband_attenuation_a_decade_below() {
        let a = stopband_attenuation(ResponseShape::HighPass, FC, BW).unwrap();
        assert_relative_eq!(a, 20.0 + 10.0 * 1.01f64.log10(), max_relative = 1e-12);
    }

    #[test]
    fn stopband_rules() {
        assert_eq!(stopband_frequency(ResponseShape::LowPass, FC), 10_000.0);
        assert_eq!(stopband_frequency(ResponseShape::HighPass, FC), 100.0);
        assert_eq!(stopband_frequency(ResponseShape::BandStop, FC), FC);
        let a = stopband_attenuation(ResponseShape::LowPass, FC, BW).unwrap();
        assert_relative_eq!(a, 10.0 * 101f64.log10(), max_relative = 1e-12);
    }
}
