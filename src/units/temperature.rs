use super::UnitDef;

pub const KELVIN: &str = "K";
pub const CELSIUS: &str = "°C";
pub const FAHRENHEIT: &str = "°F";

/// 온도 단위 표. 켈빈만 선형 배율(기준 단위)을 갖고 °C/°F는 전용 식으로 변환한다.
pub const UNITS: &[UnitDef] = &[
    UnitDef::linear(KELVIN, 1.0),
    UnitDef::nonlinear(CELSIUS),
    UnitDef::nonlinear(FAHRENHEIT),
];

/// 온도를 변환한다. °C/K/°F 사이의 여섯 조합만 식으로 처리하고
/// 그 외 조합은 값을 그대로 돌려준다.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    match (from, to) {
        (CELSIUS, KELVIN) => value + 273.15,
        (KELVIN, CELSIUS) => value - 273.15,
        (CELSIUS, FAHRENHEIT) => value * 9.0 / 5.0 + 32.0,
        (FAHRENHEIT, CELSIUS) => (value - 32.0) * 5.0 / 9.0,
        (KELVIN, FAHRENHEIT) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        (FAHRENHEIT, KELVIN) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        _ => value,
    }
}
