//! 결과 값을 사람이 읽기 좋은 단위로 표시하는 서식 함수.

use crate::quantity::PhysicalQuantity;
use crate::units::UnitRegistry;

/// 적합한 단위를 찾지 못했을 때 붙이는 표시.
pub const UNDEFINED_UNIT: &str = "undefined";

/// 등록된 단위 중 가장 읽기 좋은 단위를 골라 소수 둘째 자리까지 표시한다.
///
/// 배율이 |value| 이하인 단위 중 배율이 가장 큰 것을 고른다. 해당하는 단위가 없으면
/// (0 이거나 가장 작은 단위보다 작은 값) 원래 값에 `undefined`를 붙인다.
pub fn auto_format(value: f64, quantity: PhysicalQuantity) -> String {
    auto_format_with(UnitRegistry::standard(), value, quantity)
}

pub fn auto_format_with(registry: &UnitRegistry, value: f64, quantity: PhysicalQuantity) -> String {
    if !value.is_finite() {
        return format!("{value} {UNDEFINED_UNIT}");
    }
    let magnitude = value.abs();
    let best = registry.table(quantity).and_then(|table| {
        table
            .units()
            .iter()
            .filter_map(|u| u.scale.factor().map(|f| (u.symbol, f)))
            .filter(|(_, f)| *f <= magnitude)
            .fold(None, |best: Option<(&str, f64)>, cand| match best {
                Some((_, f)) if f >= cand.1 => best,
                _ => Some(cand),
            })
    });
    match best {
        Some((symbol, factor)) => format!("{:.2} {symbol}", value / factor),
        None => format!("{value:.2} {UNDEFINED_UNIT}"),
    }
}

/// 두 대안 단위 중 하나를 임계값으로 고르는 고정 서식.
///
/// |value| ≥ `larger_threshold` 이면 큰 단위, 0이 아니면서 |value| < `smaller_threshold` 이면
/// 작은 단위, 그 외에는 기준 단위로 표시한다. 임계값은 해당 단위의 배율로도 쓰인다.
pub fn format_fixed(
    value: f64,
    base_unit: &str,
    larger_unit: &str,
    smaller_unit: &str,
    larger_threshold: f64,
    smaller_threshold: f64,
) -> String {
    let magnitude = value.abs();
    if magnitude >= larger_threshold {
        format!("{:.2} {larger_unit}", value / larger_threshold)
    } else if value != 0.0 && magnitude < smaller_threshold {
        format!("{:.2} {smaller_unit}", value / smaller_threshold)
    } else {
        format!("{value:.2} {base_unit}")
    }
}

/// 자주 쓰는 고정 서식 프리셋. 입력 값은 `base_unit` 기준이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFormat {
    pub base_unit: &'static str,
    pub larger_unit: &'static str,
    pub smaller_unit: &'static str,
    pub larger_threshold: f64,
    pub smaller_threshold: f64,
}

impl FixedFormat {
    pub const RESISTANCE: FixedFormat = FixedFormat {
        base_unit: "Ω",
        larger_unit: "kΩ",
        smaller_unit: "mΩ",
        larger_threshold: 1e3,
        smaller_threshold: 1e-3,
    };
    pub const CAPACITANCE: FixedFormat = FixedFormat {
        base_unit: "nF",
        larger_unit: "μF",
        smaller_unit: "pF",
        larger_threshold: 1e3,
        smaller_threshold: 1e-3,
    };
    pub const INDUCTANCE: FixedFormat = FixedFormat {
        base_unit: "μH",
        larger_unit: "mH",
        smaller_unit: "nH",
        larger_threshold: 1e3,
        smaller_threshold: 1e-3,
    };
    pub const FREQUENCY: FixedFormat = FixedFormat {
        base_unit: "kHz",
        larger_unit: "MHz",
        smaller_unit: "Hz",
        larger_threshold: 1e3,
        smaller_threshold: 1e-3,
    };
    pub const VOLTAGE: FixedFormat = FixedFormat {
        base_unit: "V",
        larger_unit: "kV",
        smaller_unit: "mV",
        larger_threshold: 1e3,
        smaller_threshold: 1e-3,
    };

    pub fn format(&self, value: f64) -> String {
        format_fixed(
            value,
            self.base_unit,
            self.larger_unit,
            self.smaller_unit,
            self.larger_threshold,
            self.smaller_threshold,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_fitting_unit() {
        assert_eq!(auto_format(4_700.0, PhysicalQuantity::Resistance), "4.70 kΩ");
        assert_eq!(auto_format(2.2e-9, PhysicalQuantity::Capacitance), "2.20 nF");
        assert_eq!(auto_format(-1500.0, PhysicalQuantity::Frequency), "-1.50 kHz");
    }

    #[test]
    fn exact_factor_selects_that_unit() {
        assert_eq!(auto_format(1e6, PhysicalQuantity::Frequency), "1.00 MHz");
    }

    #[test]
    fn zero_is_undefined() {
        assert_eq!(auto_format(0.0, PhysicalQuantity::Voltage), "0.00 undefined");
    }

    #[test]
    fn temperature_only_offers_kelvin() {
        assert_eq!(auto_format(300.0, PhysicalQuantity::Temperature), "300.00 K");
    }
}
