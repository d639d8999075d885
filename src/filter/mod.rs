//! 수동 필터 해석 엔진.
//!
//! 입력값을 SI 기준으로 환산해 코너 주파수, Q, 대역폭을 구하고, 응답 형태별 식으로
//! 위상/군지연/감쇠/응답 곡선을 계산한 뒤 호출자의 표시 단위로 되돌린다.

pub mod components;
pub mod model;
pub mod response;
pub mod sweep;

use thiserror::Error;

use crate::conversion::{self, ConversionError};
use crate::quantity::{PhysicalQuantity, QuantityValue};

pub use components::{
    bandwidth, corner_frequency, cutoff_frequency, impedance, quality_factor, safe_frequency,
};
pub use model::{
    FilterInputValues, FilterResults, FilterType, FrequencyResponse, ResponsePoint, ResponseShape,
};
pub use response::{
    attenuation, group_delay, magnitude_response, phase_shift, roll_off, stopband_attenuation,
    stopband_frequency,
};
pub use sweep::{frequency_response, RESPONSE_POINTS};

/// 필터 계산의 개별 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// 0 이하이거나 유한하지 않은 소자 값
    #[error("소자 값이 올바르지 않습니다: {component} = {value}")]
    InvalidComponentValue { component: &'static str, value: f64 },
    #[error("주파수가 올바르지 않습니다: {0}")]
    InvalidFrequency(f64),
    #[error("차단 주파수가 올바르지 않습니다: {0}")]
    InvalidCutoff(f64),
    #[error("대역폭이 올바르지 않습니다: {0}")]
    InvalidBandwidth(f64),
    #[error("알 수 없는 필터 종류: {0}")]
    InvalidFilterType(String),
    /// 단위 기호가 비어 있음
    #[error("{0} 단위가 지정되지 않았습니다")]
    MissingUnit(&'static str),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// [`calculate_filter_results`]가 돌려주는 단일 오류. 원인은 `source()`로 확인한다.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("필터 계산 실패: {source}")]
pub struct FilterCalculationError {
    #[from]
    source: FilterError,
}

impl FilterCalculationError {
    pub fn cause(&self) -> &FilterError {
        &self.source
    }
}

/// 입력값 검증 → SI 환산 → 계산 → 표시 단위 환산을 한 번에 수행한다.
pub fn calculate_filter_results(
    input: &FilterInputValues,
) -> Result<FilterResults, FilterCalculationError> {
    let _span = tracing::info_span!("filter_analysis", filter_type = %input.filter_type).entered();
    let results = compute(input).map_err(|e| {
        tracing::warn!(error = %e, "필터 계산 실패");
        e
    })?;
    tracing::debug!(
        cutoff = results.cutoff_frequency,
        q = results.quality_factor,
        unit = %results.frequency_unit,
        "필터 계산 완료"
    );
    Ok(results)
}

fn compute(input: &FilterInputValues) -> Result<FilterResults, FilterError> {
    let f = to_si(&input.frequency, "frequency", PhysicalQuantity::Frequency)?;
    let c = to_si(&input.capacitance, "capacitance", PhysicalQuantity::Capacitance)?;
    let l = to_si(&input.inductance, "inductance", PhysicalQuantity::Inductance)?;
    let r = to_si(&input.resistance, "resistance", PhysicalQuantity::Resistance)?;

    let shape = input.filter_type.shape();
    let fc = corner_frequency(input.filter_type, r, l, c)?;
    let q = quality_factor(r, l, c)?;
    let bw = bandwidth(fc, q);
    let f_safe = safe_frequency(f, fc);

    let freq_unit = input.frequency.unit.as_str();
    let ohm_unit = input.resistance.unit.as_str();
    let hz_to_display = |hz: f64| conversion::from_base(hz, freq_unit, PhysicalQuantity::Frequency);
    let x_scale = hz_to_display(1.0)?;
    let stopband_hz = stopband_frequency(shape, fc);

    Ok(FilterResults {
        filter_type: input.filter_type,
        cutoff_frequency: hz_to_display(fc)?,
        quality_factor: q,
        bandwidth: hz_to_display(bw)?,
        impedance: conversion::from_base(
            impedance(r, l, c, f_safe),
            ohm_unit,
            PhysicalQuantity::Resistance,
        )?,
        phase_shift: phase_shift(shape, f_safe, fc, bw)?,
        group_delay: group_delay(shape, f_safe, fc, bw)?,
        attenuation: attenuation(shape, f_safe, fc, bw)?,
        frequency_response: frequency_response(shape, f_safe, fc, bw, x_scale)?,
        stopband_frequency: hz_to_display(stopband_hz)?,
        stopband_attenuation: stopband_attenuation(shape, fc, bw)?,
        roll_off: roll_off(shape),
        frequency_unit: freq_unit.to_string(),
        impedance_unit: ohm_unit.to_string(),
    })
}

/// 값이 양수인지, 단위가 비어 있지 않고 등록되어 있는지 확인한 뒤 SI 값으로 환산한다.
fn to_si(
    input: &QuantityValue,
    component: &'static str,
    quantity: PhysicalQuantity,
) -> Result<f64, FilterError> {
    components::ensure_positive(component, input.value)?;
    if input.unit.is_empty() {
        return Err(FilterError::MissingUnit(component));
    }
    Ok(conversion::to_base(input.value, &input.unit, quantity)?)
}
