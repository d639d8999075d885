//! 정합(반사계수, VSWR, 반사손실)과 잡음/이득 관련 RF 지표.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 잡음 온도 기준 T0 [K].
pub const REFERENCE_TEMPERATURE_K: f64 = 290.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RfError {
    #[error("반사계수 크기는 0 이상 1 이하여야 합니다: {0}")]
    InvalidReflection(f64),
    #[error("VSWR은 1 이상이어야 합니다: {0}")]
    InvalidVswr(f64),
    #[error("기준 임피던스는 0보다 커야 합니다: {0}")]
    InvalidReferenceImpedance(f64),
    #[error("{name}은(는) 0보다 커야 합니다: {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("단(stage)이 하나도 없습니다")]
    EmptyCascade,
}

fn check_gamma(gamma_mag: f64) -> Result<f64, RfError> {
    if gamma_mag.is_finite() && (0.0..=1.0).contains(&gamma_mag) {
        Ok(gamma_mag)
    } else {
        Err(RfError::InvalidReflection(gamma_mag))
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<f64, RfError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RfError::NonPositive { name, value })
    }
}

/// 부하 반사계수 Γ = (ZL − Z0) / (ZL + Z0).
pub fn reflection_coefficient(z_load: Complex64, z0: f64) -> Result<Complex64, RfError> {
    if !z0.is_finite() || z0 <= 0.0 {
        return Err(RfError::InvalidReferenceImpedance(z0));
    }
    let z0 = Complex64::new(z0, 0.0);
    Ok((z_load - z0) / (z_load + z0))
}

/// |Γ| → VSWR. 전반사(|Γ| = 1)는 무한대.
pub fn vswr_from_reflection(gamma_mag: f64) -> Result<f64, RfError> {
    let g = check_gamma(gamma_mag)?;
    if g == 1.0 {
        return Ok(f64::INFINITY);
    }
    Ok((1.0 + g) / (1.0 - g))
}

pub fn reflection_from_vswr(vswr: f64) -> Result<f64, RfError> {
    if vswr.is_nan() || vswr < 1.0 {
        return Err(RfError::InvalidVswr(vswr));
    }
    if vswr.is_infinite() {
        return Ok(1.0);
    }
    Ok((vswr - 1.0) / (vswr + 1.0))
}

/// 반사손실 `−20·log10|Γ|` [dB]. 완전 정합이면 무한대.
pub fn return_loss_db(gamma_mag: f64) -> Result<f64, RfError> {
    Ok(-20.0 * check_gamma(gamma_mag)?.log10())
}

/// 부정합 손실 `−10·log10(1 − |Γ|²)` [dB].
pub fn mismatch_loss_db(gamma_mag: f64) -> Result<f64, RfError> {
    let g = check_gamma(gamma_mag)?;
    Ok(-10.0 * (1.0 - g * g).log10())
}

/// 부하 정합 상태 요약.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchReport {
    pub gamma: Complex64,
    pub gamma_magnitude: f64,
    pub vswr: f64,
    pub return_loss_db: f64,
    pub mismatch_loss_db: f64,
}

impl MatchReport {
    pub fn from_load(z_load: Complex64, z0: f64) -> Result<Self, RfError> {
        let gamma = reflection_coefficient(z_load, z0)?;
        // 음의 저항(능동 부하)은 |Γ| > 1 이므로 InvalidReflection 으로 거른다
        let mag = gamma.norm();
        Ok(Self {
            gamma,
            gamma_magnitude: mag,
            vswr: vswr_from_reflection(mag)?,
            return_loss_db: return_loss_db(mag)?,
            mismatch_loss_db: mismatch_loss_db(mag)?,
        })
    }
}

/// 잡음 지수 [dB] → 등가 잡음 온도 [K].
pub fn noise_temperature(noise_figure_db: f64) -> f64 {
    REFERENCE_TEMPERATURE_K * (10f64.powf(noise_figure_db / 10.0) - 1.0)
}

/// 등가 잡음 온도 [K] → 잡음 지수 [dB].
pub fn noise_figure_db(noise_temperature_k: f64) -> Result<f64, RfError> {
    if !noise_temperature_k.is_finite() || noise_temperature_k < 0.0 {
        return Err(RfError::NonPositive {
            name: "noise temperature",
            value: noise_temperature_k,
        });
    }
    Ok(10.0 * (1.0 + noise_temperature_k / REFERENCE_TEMPERATURE_K).log10())
}

/// 증폭기/감쇠기 한 단.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub gain_db: f64,
    pub noise_figure_db: f64,
}

impl std::str::FromStr for Stage {
    type Err = String;

    /// `이득dB:잡음지수dB` 형식. 예: `20:1.5`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (g, nf) = s
            .split_once(':')
            .ok_or_else(|| format!("'{s}': 이득:잡음지수 형식이 아닙니다"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("'{v}': {e}"))
        };
        Ok(Stage {
            gain_db: parse(g)?,
            noise_figure_db: parse(nf)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CascadeResult {
    pub total_gain_db: f64,
    pub noise_figure_db: f64,
    pub noise_temperature_k: f64,
}

/// Friis 식으로 다단 시스템의 총 이득과 잡음 지수를 구한다.
///
/// F = F1 + (F2 − 1)/G1 + (F3 − 1)/(G1·G2) + …
pub fn cascade(stages: &[Stage]) -> Result<CascadeResult, RfError> {
    if stages.is_empty() {
        return Err(RfError::EmptyCascade);
    }
    let mut factor = 0.0;
    let mut gain_before = 1.0;
    for (i, stage) in stages.iter().enumerate() {
        let f = 10f64.powf(stage.noise_figure_db / 10.0);
        factor += if i == 0 { f } else { (f - 1.0) / gain_before };
        gain_before *= 10f64.powf(stage.gain_db / 10.0);
    }
    let nf_db = 10.0 * factor.log10();
    Ok(CascadeResult {
        total_gain_db: stages.iter().map(|s| s.gain_db).sum(),
        noise_figure_db: nf_db,
        noise_temperature_k: REFERENCE_TEMPERATURE_K * (factor - 1.0),
    })
}

/// 전력 이득 `10·log10(Pout/Pin)` [dB].
pub fn power_gain_db(p_in: f64, p_out: f64) -> Result<f64, RfError> {
    Ok(10.0 * (check_positive("output power", p_out)? / check_positive("input power", p_in)?).log10())
}

/// 전압 이득 `20·log10(Vout/Vin)` [dB].
pub fn voltage_gain_db(v_in: f64, v_out: f64) -> Result<f64, RfError> {
    Ok(20.0
        * (check_positive("output voltage", v_out)? / check_positive("input voltage", v_in)?)
            .log10())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vswr_and_gamma_are_inverse() {
        let g = reflection_from_vswr(2.0).unwrap();
        assert_relative_eq!(g, 1.0 / 3.0, max_relative = 1e-12);
        assert_relative_eq!(vswr_from_reflection(g).unwrap(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn open_circuit_is_total_reflection() {
        assert_eq!(vswr_from_reflection(1.0).unwrap(), f64::INFINITY);
        assert!(vswr_from_reflection(1.5).is_err());
    }

    #[test]
    fn stage_parses_gain_and_nf() {
        let s: Stage = "20:1.5".parse().unwrap();
        assert_eq!(s.gain_db, 20.0);
        assert_eq!(s.noise_figure_db, 1.5);
        assert!("20".parse::<Stage>().is_err());
    }
}
