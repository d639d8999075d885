use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalQuantity {
    Frequency,
    Resistance,
    Capacitance,
    Inductance,
    Voltage,
    Current,
    Power,
    Time,
    Temperature,
    Angle,
    Pressure,
    Energy,
    Length,
    Area,
    Volume,
    Mass,
    Velocity,
    Force,
    Charge,
    Conductance,
    MagneticFlux,
    MagneticFluxDensity,
    ElectricFieldStrength,
    MagneticFieldStrength,
    Attenuation,
    SoundLevel,
    DataRate,
    Conductivity,
    Resistivity,
    Torque,
}

impl PhysicalQuantity {
    /// 선언 순서대로 나열한 전체 물리량 목록.
    pub const ALL: [PhysicalQuantity; 30] = [
        PhysicalQuantity::Frequency,
        PhysicalQuantity::Resistance,
        PhysicalQuantity::Capacitance,
        PhysicalQuantity::Inductance,
        PhysicalQuantity::Voltage,
        PhysicalQuantity::Current,
        PhysicalQuantity::Power,
        PhysicalQuantity::Time,
        PhysicalQuantity::Temperature,
        PhysicalQuantity::Angle,
        PhysicalQuantity::Pressure,
        PhysicalQuantity::Energy,
        PhysicalQuantity::Length,
        PhysicalQuantity::Area,
        PhysicalQuantity::Volume,
        PhysicalQuantity::Mass,
        PhysicalQuantity::Velocity,
        PhysicalQuantity::Force,
        PhysicalQuantity::Charge,
        PhysicalQuantity::Conductance,
        PhysicalQuantity::MagneticFlux,
        PhysicalQuantity::MagneticFluxDensity,
        PhysicalQuantity::ElectricFieldStrength,
        PhysicalQuantity::MagneticFieldStrength,
        PhysicalQuantity::Attenuation,
        PhysicalQuantity::SoundLevel,
        PhysicalQuantity::DataRate,
        PhysicalQuantity::Conductivity,
        PhysicalQuantity::Resistivity,
        PhysicalQuantity::Torque,
    ];

    /// 영문 이름. `FromStr`과 짝을 이룬다.
    pub fn name(&self) -> &'static str {
        match self {
            PhysicalQuantity::Frequency => "Frequency",
            PhysicalQuantity::Resistance => "Resistance",
            PhysicalQuantity::Capacitance => "Capacitance",
            PhysicalQuantity::Inductance => "Inductance",
            PhysicalQuantity::Voltage => "Voltage",
            PhysicalQuantity::Current => "Current",
            PhysicalQuantity::Power => "Power",
            PhysicalQuantity::Time => "Time",
            PhysicalQuantity::Temperature => "Temperature",
            PhysicalQuantity::Angle => "Angle",
            PhysicalQuantity::Pressure => "Pressure",
            PhysicalQuantity::Energy => "Energy",
            PhysicalQuantity::Length => "Length",
            PhysicalQuantity::Area => "Area",
            PhysicalQuantity::Volume => "Volume",
            PhysicalQuantity::Mass => "Mass",
            PhysicalQuantity::Velocity => "Velocity",
            PhysicalQuantity::Force => "Force",
            PhysicalQuantity::Charge => "Charge",
            PhysicalQuantity::Conductance => "Conductance",
            PhysicalQuantity::MagneticFlux => "MagneticFlux",
            PhysicalQuantity::MagneticFluxDensity => "MagneticFluxDensity",
            PhysicalQuantity::ElectricFieldStrength => "ElectricFieldStrength",
            PhysicalQuantity::MagneticFieldStrength => "MagneticFieldStrength",
            PhysicalQuantity::Attenuation => "Attenuation",
            PhysicalQuantity::SoundLevel => "SoundLevel",
            PhysicalQuantity::DataRate => "DataRate",
            PhysicalQuantity::Conductivity => "Conductivity",
            PhysicalQuantity::Resistivity => "Resistivity",
            PhysicalQuantity::Torque => "Torque",
        }
    }
}

impl std::fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PhysicalQuantity {
    type Err = ConversionError;

    /// 대소문자와 `-`, `_`, 공백을 무시하고 이름을 비교한다. (`magnetic-flux` == `MagneticFlux`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        PhysicalQuantity::ALL
            .iter()
            .copied()
            .find(|q| normalize(q.name()) == wanted)
            .ok_or_else(|| ConversionError::UnknownQuantityName(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// 단위 기호와 짝을 이룬 값. 화면에서 입력받은 그대로 보관한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityValue {
    pub value: f64,
    pub unit: String,
}

impl QuantityValue {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_loosely() {
        assert_eq!(
            "magnetic-flux".parse::<PhysicalQuantity>().unwrap(),
            PhysicalQuantity::MagneticFlux
        );
        assert_eq!(
            "FREQUENCY".parse::<PhysicalQuantity>().unwrap(),
            PhysicalQuantity::Frequency
        );
        assert!("warp".parse::<PhysicalQuantity>().is_err());
    }

    #[test]
    fn all_names_roundtrip() {
        for q in PhysicalQuantity::ALL {
            assert_eq!(q.to_string().parse::<PhysicalQuantity>().unwrap(), q);
        }
    }
}
