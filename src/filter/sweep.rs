//! 로그 간격 주파수 응답 샘플링.

use rayon::prelude::*;

use super::model::{FrequencyResponse, ResponsePoint, ResponseShape};
use super::response::magnitude_response;
use super::FilterError;

/// 응답 곡선 샘플 수.
pub const RESPONSE_POINTS: usize = 1000;

const SPAN: f64 = 100.0;
const SAFE_RATIO: f64 = 1e6;

/// `start`~`stop` 구간을 로그 간격 `n`개로 나눈다. 양 끝점을 포함한다.
pub fn logspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let log_start = start.log10();
            let step = (stop.log10() - log_start) / (n as f64 - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as f64))
                .collect()
        }
    }
}

/// 응답 곡선의 주파수 구간 `[max(f/100, fc·1e-6), min(f·100, fc·1e6)]` [Hz].
pub fn sweep_bounds(frequency_hz: f64, cutoff_hz: f64) -> (f64, f64) {
    let start = (frequency_hz / SPAN).max(cutoff_hz / SAFE_RATIO);
    let stop = (frequency_hz * SPAN).min(cutoff_hz * SAFE_RATIO);
    (start, stop)
}

/// 주파수 응답 곡선을 만든다.
///
/// `frequency_hz`는 안전 범위로 제한된 운전 주파수여야 X가 엄격히 증가한다.
/// `x_scale`은 Hz 값을 표시 단위로 바꾸는 배율(표시 단위 1개당 Hz의 역수)이다.
pub fn frequency_response(
    shape: ResponseShape,
    frequency_hz: f64,
    cutoff_hz: f64,
    bandwidth_hz: f64,
    x_scale: f64,
) -> Result<FrequencyResponse, FilterError> {
    let (start, stop) = sweep_bounds(frequency_hz, cutoff_hz);
    let points = logspace(start, stop, RESPONSE_POINTS)
        .into_par_iter()
        .map(|f| {
            let mag = magnitude_response(shape, f, cutoff_hz, bandwidth_hz)?;
            Ok(ResponsePoint {
                x: f * x_scale,
                y: 20.0 * mag.log10(),
            })
        })
        .collect::<Result<Vec<_>, FilterError>>()?;
    Ok(FrequencyResponse::new(points))
}
