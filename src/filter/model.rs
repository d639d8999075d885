use serde::{Deserialize, Serialize};

use super::FilterError;
use crate::quantity::QuantityValue;

/// 응답 곡선의 기본 형태. 모든 필터 종류는 이 네 가지 중 하나로 계산된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseShape {
    LowPass,
    HighPass,
    BandPass,
    BandStop,
}

/// 필터 종류. RC/RL 변형은 코너 주파수 계산식만 다르고 응답 형태는 공유한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterType {
    LowPass,
    HighPass,
    BandPass,
    BandStop,
    RcLowPass,
    RcHighPass,
    RlLowPass,
    RlHighPass,
}

impl FilterType {
    pub const ALL: [FilterType; 8] = [
        FilterType::LowPass,
        FilterType::HighPass,
        FilterType::BandPass,
        FilterType::BandStop,
        FilterType::RcLowPass,
        FilterType::RcHighPass,
        FilterType::RlLowPass,
        FilterType::RlHighPass,
    ];

    pub fn shape(&self) -> ResponseShape {
        match self {
            FilterType::LowPass | FilterType::RcLowPass | FilterType::RlLowPass => {
                ResponseShape::LowPass
            }
            FilterType::HighPass | FilterType::RcHighPass | FilterType::RlHighPass => {
                ResponseShape::HighPass
            }
            FilterType::BandPass => ResponseShape::BandPass,
            FilterType::BandStop => ResponseShape::BandStop,
        }
    }

    /// CLI/설정 파일에서 쓰는 이름.
    pub fn name(&self) -> &'static str {
        match self {
            FilterType::LowPass => "lowpass",
            FilterType::HighPass => "highpass",
            FilterType::BandPass => "bandpass",
            FilterType::BandStop => "bandstop",
            FilterType::RcLowPass => "rc-lowpass",
            FilterType::RcHighPass => "rc-highpass",
            FilterType::RlLowPass => "rl-lowpass",
            FilterType::RlHighPass => "rl-highpass",
        }
    }
}

impl std::fmt::Display for FilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FilterType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let found = match key.as_str() {
            "lowpass" | "lp" => FilterType::LowPass,
            "highpass" | "hp" => FilterType::HighPass,
            "bandpass" | "bp" => FilterType::BandPass,
            "bandstop" | "notch" | "bs" => FilterType::BandStop,
            "rclowpass" => FilterType::RcLowPass,
            "rchighpass" => FilterType::RcHighPass,
            "rllowpass" => FilterType::RlLowPass,
            "rlhighpass" => FilterType::RlHighPass,
            _ => return Err(FilterError::InvalidFilterType(s.to_string())),
        };
        Ok(found)
    }
}

/// 필터 계산 입력값. 각 값은 화면에서 고른 단위 기호와 함께 전달된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterInputValues {
    pub filter_type: FilterType,
    /// 운전 주파수. 단위는 결과의 주파수 표시 단위로도 쓰인다.
    pub frequency: QuantityValue,
    pub capacitance: QuantityValue,
    pub inductance: QuantityValue,
    /// 저항. 단위는 임피던스 표시 단위로도 쓰인다.
    pub resistance: QuantityValue,
}

/// 응답 곡선의 한 점. x는 표시 단위 주파수, y는 이득[dB].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponsePoint {
    pub x: f64,
    pub y: f64,
}

/// 로그 간격으로 샘플링한 주파수 응답. 주파수 오름차순이다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrequencyResponse {
    points: Vec<ResponsePoint>,
}

impl FrequencyResponse {
    pub(crate) fn new(points: Vec<ResponsePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ResponsePoint] {
        &self.points
    }
}

impl IntoIterator for FrequencyResponse {
    type Item = ResponsePoint;
    type IntoIter = std::vec::IntoIter<ResponsePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// 필터 계산 결과. 주파수 항목은 `frequency_unit`, 임피던스는 `impedance_unit` 기준이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterResults {
    pub filter_type: FilterType,
    pub cutoff_frequency: f64,
    pub quality_factor: f64,
    pub bandwidth: f64,
    pub impedance: f64,
    /// 위상 [rad]
    pub phase_shift: f64,
    /// 군지연 [s]
    pub group_delay: f64,
    /// 감쇠량 [dB]
    pub attenuation: f64,
    pub frequency_response: FrequencyResponse,
    pub stopband_frequency: f64,
    /// 저지대역 감쇠량 [dB]
    pub stopband_attenuation: f64,
    /// 롤오프 [dB/decade]
    pub roll_off: f64,
    pub frequency_unit: String,
    pub impedance_unit: String,
}

impl FilterResults {
    pub fn phase_shift_degrees(&self) -> f64 {
        self.phase_shift.to_degrees()
    }
}
