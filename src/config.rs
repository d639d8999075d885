use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::filter::FilterType;
use crate::quantity::PhysicalQuantity;
use crate::units::UnitRegistry;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 표시 단위 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitPreset {
    /// 순수 SI 기준 단위 (Hz, Ω, F, H)
    SI,
    /// 오디오 대역 (Hz, kΩ, μF, mH)
    Audio,
    /// 일반 아날로그 회로 (kHz, Ω, nF, mH)
    Engineering,
    /// RF 대역 (MHz, Ω, pF, nH)
    RF,
}

/// 결과 표시 단위. 모두 표준 레지스트리에 등록된 기호여야 한다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUnits {
    pub frequency: String,
    pub resistance: String,
    pub capacitance: String,
    pub inductance: String,
}

impl DisplayUnits {
    pub fn for_preset(preset: UnitPreset) -> Self {
        let (f, r, c, l) = match preset {
            UnitPreset::SI => ("Hz", "Ω", "F", "H"),
            UnitPreset::Audio => ("Hz", "kΩ", "μF", "mH"),
            UnitPreset::Engineering => ("kHz", "Ω", "nF", "mH"),
            UnitPreset::RF => ("MHz", "Ω", "pF", "nH"),
        };
        Self {
            frequency: f.into(),
            resistance: r.into(),
            capacitance: c.into(),
            inductance: l.into(),
        }
    }

    fn entries(&self) -> [(PhysicalQuantity, &str); 4] {
        [
            (PhysicalQuantity::Frequency, self.frequency.as_str()),
            (PhysicalQuantity::Resistance, self.resistance.as_str()),
            (PhysicalQuantity::Capacitance, self.capacitance.as_str()),
            (PhysicalQuantity::Inductance, self.inductance.as_str()),
        ]
    }
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self::for_preset(UnitPreset::Engineering)
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(ko, en, auto)
    pub language: String,
    /// `RUST_LOG`가 없을 때 쓰는 로그 필터
    pub log_level: String,
    pub unit_preset: UnitPreset,
    pub default_filter_type: FilterType,
    pub display_units: DisplayUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            log_level: "warn".into(),
            unit_preset: UnitPreset::Engineering,
            default_filter_type: FilterType::LowPass,
            display_units: DisplayUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("설정의 {quantity} 표시 단위 '{unit}'는 등록되지 않은 단위입니다")]
    InvalidUnit {
        quantity: PhysicalQuantity,
        unit: String,
    },
}

impl Config {
    /// TOML 문자열에서 설정을 읽고 표시 단위를 검증한다.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let registry = UnitRegistry::standard();
        for (quantity, unit) in self.display_units.entries() {
            if !registry.is_valid_unit(quantity, unit) {
                return Err(ConfigError::InvalidUnit {
                    quantity,
                    unit: unit.to_string(),
                });
            }
        }
        Ok(())
    }

    /// 프리셋을 적용해 표시 단위를 바꾼다.
    pub fn apply_preset(&mut self, preset: UnitPreset) {
        self.unit_preset = preset;
        self.display_units = DisplayUnits::for_preset(preset);
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_toml()?)?;
        tracing::debug!(path = %path.display(), "설정 저장");
        Ok(())
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: Option<&Path>) -> Result<(Config, PathBuf), ConfigError> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    if path.exists() {
        let content = fs::read_to_string(&path)?;
        let cfg = Config::from_toml(&content)?;
        Ok((cfg, path))
    } else {
        let cfg = Config::default();
        cfg.save_to(&path)?;
        Ok((cfg, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roundtrips_through_toml() {
        let cfg = Config::default();
        let text = cfg.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_toml("language = \"ko\"\n").unwrap();
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.display_units, DisplayUnits::default());
    }

    #[test]
    fn rejects_unknown_display_unit() {
        let src = "[display_units]\nfrequency = \"khz\"\nresistance = \"Ω\"\ncapacitance = \"nF\"\ninductance = \"mH\"\n";
        assert!(matches!(
            Config::from_toml(src),
            Err(ConfigError::InvalidUnit { quantity: PhysicalQuantity::Frequency, .. })
        ));
    }

    #[test]
    fn presets_use_registered_units() {
        for preset in [UnitPreset::SI, UnitPreset::Audio, UnitPreset::Engineering, UnitPreset::RF] {
            let mut cfg = Config::default();
            cfg.apply_preset(preset);
            assert!(cfg.validate().is_ok(), "{preset:?}");
        }
    }
}
