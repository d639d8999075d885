use thiserror::Error;

use crate::quantity::PhysicalQuantity;
use crate::units::{angle, temperature, Scale, UnitRegistry};

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// NaN 또는 무한대 입력
    #[error("유효하지 않은 값: {0}")]
    InvalidValue(f64),
    /// 단위 표가 등록되지 않은 물리량
    #[error("등록되지 않은 물리량: {0}")]
    UnknownQuantity(PhysicalQuantity),
    /// 물리량에 없는 단위 기호
    #[error("알 수 없는 단위: '{unit}' ({quantity}). 사용 가능한 단위: {}", .valid.join(", "))]
    UnknownUnit {
        unit: String,
        quantity: PhysicalQuantity,
        valid: Vec<String>,
    },
    /// 물리량 이름을 해석할 수 없음
    #[error("알 수 없는 물리량 이름: {0}")]
    UnknownQuantityName(String),
    /// 단위 표 불변식 위반
    #[error("단위 표 오류 ({quantity}): {reason}")]
    InvalidUnitTable {
        quantity: PhysicalQuantity,
        reason: String,
    },
}

/// 표준 레지스트리로 값을 환산한다.
///
/// 단위 기호는 대소문자·공백까지 정확히 일치해야 한다. (`Ω`, `μ`, `°` 포함)
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    quantity: PhysicalQuantity,
) -> Result<f64, ConversionError> {
    convert_with(UnitRegistry::standard(), value, from_unit, to_unit, quantity)
}

/// 주입된 레지스트리로 값을 환산한다.
pub fn convert_with(
    registry: &UnitRegistry,
    value: f64,
    from_unit: &str,
    to_unit: &str,
    quantity: PhysicalQuantity,
) -> Result<f64, ConversionError> {
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue(value));
    }
    let table = registry.table_or_err(quantity)?;
    let unknown = |unit: &str| ConversionError::UnknownUnit {
        unit: unit.to_string(),
        quantity,
        valid: table.symbols().into_iter().map(String::from).collect(),
    };
    let from = table.get(from_unit).ok_or_else(|| unknown(from_unit))?;
    let to = table.get(to_unit).ok_or_else(|| unknown(to_unit))?;

    if from_unit == to_unit {
        return Ok(value);
    }

    let result = match quantity {
        PhysicalQuantity::Temperature => temperature::convert_temperature(value, from_unit, to_unit),
        PhysicalQuantity::Angle => angle::convert_angle(value, from_unit, to_unit),
        _ => match (from.scale, to.scale) {
            (Scale::Linear(f_from), Scale::Linear(f_to)) => value * f_from / f_to,
            // 비선형 단위는 온도/각도 외에는 등록하지 않는다
            _ => value,
        },
    };
    tracing::trace!(%quantity, value, from_unit, to_unit, result, "단위 변환");
    Ok(result)
}

/// 값을 해당 물리량의 기준 단위로 환산한다.
pub fn to_base(value: f64, unit: &str, quantity: PhysicalQuantity) -> Result<f64, ConversionError> {
    let base = UnitRegistry::standard().table_or_err(quantity)?.base_unit();
    convert(value, unit, base, quantity)
}

/// 기준 단위 값을 요청 단위로 환산한다.
pub fn from_base(
    value_base: f64,
    unit: &str,
    quantity: PhysicalQuantity,
) -> Result<f64, ConversionError> {
    let base = UnitRegistry::standard().table_or_err(quantity)?.base_unit();
    convert(value_base, base, unit, quantity)
}

/// 물리량에 등록된 단위 기호를 선언 순서대로 반환한다.
pub fn units_for(quantity: PhysicalQuantity) -> Result<Vec<&'static str>, ConversionError> {
    Ok(UnitRegistry::standard().table_or_err(quantity)?.symbols())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linear_scale_conversion() {
        let v = convert(4.7, "kΩ", "Ω", PhysicalQuantity::Resistance).unwrap();
        assert_relative_eq!(v, 4700.0, max_relative = 1e-12);
        let v = convert(100.0, "nF", "μF", PhysicalQuantity::Capacitance).unwrap();
        assert_relative_eq!(v, 0.1, max_relative = 1e-12);
    }

    #[test]
    fn identity_short_circuit_is_exact() {
        let x = 1.234_567_890_123e300;
        assert_eq!(convert(x, "°C", "°C", PhysicalQuantity::Temperature).unwrap(), x);
        assert_eq!(convert(x, "GHz", "GHz", PhysicalQuantity::Frequency).unwrap(), x);
    }

    #[test]
    fn unknown_quantity_in_empty_registry() {
        let err = convert_with(&UnitRegistry::empty(), 1.0, "Hz", "kHz", PhysicalQuantity::Frequency)
            .unwrap_err();
        assert_eq!(err, ConversionError::UnknownQuantity(PhysicalQuantity::Frequency));
    }
}
