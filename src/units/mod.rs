//! 단위 정의 및 단위 레지스트리.
//!
//! 물리량마다 "1 단위 = factor × 기준 단위" 형태의 배율 표를 갖는다. 온도(°C, °F)처럼
//! 배율만으로 표현할 수 없는 단위는 [`Scale::Nonlinear`]로 등록하고 변환은
//! [`temperature`], [`angle`] 모듈의 전용 식이 담당한다.

pub mod angle;
pub mod electrical;
pub mod mechanical;
pub mod signal;
pub mod temperature;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::conversion::ConversionError;
use crate::quantity::PhysicalQuantity;

/// 단위의 기준 단위 대비 배율.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// 1 단위 = factor × 기준 단위
    Linear(f64),
    /// 전용 변환식으로만 다룰 수 있는 단위
    Nonlinear,
}

impl Scale {
    pub fn factor(&self) -> Option<f64> {
        match self {
            Scale::Linear(f) => Some(*f),
            Scale::Nonlinear => None,
        }
    }
}

/// 단위 기호 하나와 배율.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub scale: Scale,
}

impl UnitDef {
    pub const fn linear(symbol: &'static str, factor: f64) -> Self {
        Self {
            symbol,
            scale: Scale::Linear(factor),
        }
    }

    pub const fn nonlinear(symbol: &'static str) -> Self {
        Self {
            symbol,
            scale: Scale::Nonlinear,
        }
    }
}

/// 한 물리량에 속한 단위 표. 선언 순서를 유지한다.
#[derive(Debug, Clone)]
pub struct UnitTable {
    quantity: PhysicalQuantity,
    units: Vec<UnitDef>,
}

impl UnitTable {
    /// 표를 만들면서 불변식을 검사한다.
    ///
    /// - 배율 1.0인 기준 단위가 정확히 하나
    /// - 기호 중복 없음
    /// - 선형 배율은 유한한 양수
    pub fn new(quantity: PhysicalQuantity, units: &[UnitDef]) -> Result<Self, ConversionError> {
        let invalid = |reason: String| ConversionError::InvalidUnitTable { quantity, reason };

        let base_count = units
            .iter()
            .filter(|u| u.scale == Scale::Linear(1.0))
            .count();
        if base_count != 1 {
            return Err(invalid(format!("기준 단위(배율 1.0)가 {base_count}개입니다")));
        }
        for (i, unit) in units.iter().enumerate() {
            if units[..i].iter().any(|u| u.symbol == unit.symbol) {
                return Err(invalid(format!("중복된 단위 기호: {}", unit.symbol)));
            }
            if let Scale::Linear(f) = unit.scale {
                if !f.is_finite() || f <= 0.0 {
                    return Err(invalid(format!("{}의 배율이 잘못되었습니다: {f}", unit.symbol)));
                }
            }
        }
        Ok(Self {
            quantity,
            units: units.to_vec(),
        })
    }

    pub fn quantity(&self) -> PhysicalQuantity {
        self.quantity
    }

    pub fn units(&self) -> &[UnitDef] {
        &self.units
    }

    /// 기호로 단위를 찾는다. 대소문자/공백을 그대로 비교한다.
    pub fn get(&self, symbol: &str) -> Option<&UnitDef> {
        self.units.iter().find(|u| u.symbol == symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn symbols(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.symbol).collect()
    }

    /// 배율 1.0인 기준 단위.
    pub fn base_unit(&self) -> &'static str {
        self.units
            .iter()
            .find(|u| u.scale == Scale::Linear(1.0))
            .map(|u| u.symbol)
            .unwrap_or_default()
    }
}

/// 물리량 → 단위 표 레지스트리. 생성 후에는 읽기 전용이다.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    tables: HashMap<PhysicalQuantity, UnitTable>,
}

static STANDARD: Lazy<UnitRegistry> = Lazy::new(|| {
    let mut registry = UnitRegistry::empty();
    for (quantity, units) in standard_definitions() {
        match UnitTable::new(quantity, units) {
            Ok(table) => registry = registry.with_table(table),
            Err(err) => tracing::error!(%quantity, %err, "표준 단위 표 등록 실패"),
        }
    }
    registry
});

impl UnitRegistry {
    /// 표가 하나도 없는 레지스트리.
    pub fn empty() -> Self {
        Self::default()
    }

    /// 프로세스 전역에서 공유하는 표준 레지스트리. 최초 접근 시 한 번만 만든다.
    pub fn standard() -> &'static UnitRegistry {
        &STANDARD
    }

    /// 표를 추가(같은 물리량이면 교체)한 레지스트리를 반환한다.
    pub fn with_table(mut self, table: UnitTable) -> Self {
        self.tables.insert(table.quantity(), table);
        self
    }

    pub fn table(&self, quantity: PhysicalQuantity) -> Option<&UnitTable> {
        self.tables.get(&quantity)
    }

    pub fn table_or_err(&self, quantity: PhysicalQuantity) -> Result<&UnitTable, ConversionError> {
        self.table(quantity)
            .ok_or(ConversionError::UnknownQuantity(quantity))
    }

    /// 단위 기호가 해당 물리량에 등록되어 있는지 확인한다.
    pub fn is_valid_unit(&self, quantity: PhysicalQuantity, symbol: &str) -> bool {
        self.table(quantity).is_some_and(|t| t.contains(symbol))
    }
}

/// 표준 레지스트리의 원본 정의.
pub fn standard_definitions() -> Vec<(PhysicalQuantity, &'static [UnitDef])> {
    use PhysicalQuantity as Q;
    vec![
        (Q::Frequency, signal::FREQUENCY),
        (Q::Resistance, electrical::RESISTANCE),
        (Q::Capacitance, electrical::CAPACITANCE),
        (Q::Inductance, electrical::INDUCTANCE),
        (Q::Voltage, electrical::VOLTAGE),
        (Q::Current, electrical::CURRENT),
        (Q::Power, electrical::POWER),
        (Q::Time, signal::TIME),
        (Q::Temperature, temperature::UNITS),
        (Q::Angle, angle::UNITS),
        (Q::Pressure, mechanical::PRESSURE),
        (Q::Energy, mechanical::ENERGY),
        (Q::Length, mechanical::LENGTH),
        (Q::Area, mechanical::AREA),
        (Q::Volume, mechanical::VOLUME),
        (Q::Mass, mechanical::MASS),
        (Q::Velocity, mechanical::VELOCITY),
        (Q::Force, mechanical::FORCE),
        (Q::Charge, electrical::CHARGE),
        (Q::Conductance, electrical::CONDUCTANCE),
        (Q::MagneticFlux, electrical::MAGNETIC_FLUX),
        (Q::MagneticFluxDensity, electrical::MAGNETIC_FLUX_DENSITY),
        (Q::ElectricFieldStrength, electrical::ELECTRIC_FIELD_STRENGTH),
        (Q::MagneticFieldStrength, electrical::MAGNETIC_FIELD_STRENGTH),
        (Q::Attenuation, signal::ATTENUATION),
        (Q::SoundLevel, signal::SOUND_LEVEL),
        (Q::DataRate, signal::DATA_RATE),
        (Q::Conductivity, electrical::CONDUCTIVITY),
        (Q::Resistivity, electrical::RESISTIVITY),
        (Q::Torque, mechanical::TORQUE),
    ]
}
