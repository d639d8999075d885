use std::f64::consts::PI;

use super::UnitDef;

pub const RADIAN: &str = "rad";
pub const DEGREE: &str = "°";
pub const GRAD: &str = "grad";

/// 각도 단위 표. 자동 서식에서는 배율을 쓰지만 변환은 [`convert_angle`]이 담당한다.
pub const UNITS: &[UnitDef] = &[
    UnitDef::linear(DEGREE, PI / 180.0),
    UnitDef::linear(GRAD, PI / 200.0),
    UnitDef::linear(RADIAN, 1.0),
];

/// 도 ↔ 라디안만 변환한다. grad가 끼는 조합은 값을 그대로 돌려준다.
pub fn convert_angle(value: f64, from: &str, to: &str) -> f64 {
    match (from, to) {
        (DEGREE, RADIAN) => value * PI / 180.0,
        (RADIAN, DEGREE) => value * 180.0 / PI,
        _ => value,
    }
}
