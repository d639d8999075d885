//! 기계/열역학 계열 단위 표. 기준 단위는 SI(Pa, J, m, kg ...)이다.

use super::UnitDef;

const ATM_PA: f64 = 101_325.0;
const PSI_PA: f64 = 6_894.757_293_168;
const MMHG_PA: f64 = 133.322_387_415;
const INCH_M: f64 = 0.0254;
const FOOT_M: f64 = 0.3048;
const STANDARD_GRAVITY: f64 = 9.806_65;
const POUND_KG: f64 = 0.453_592_37;
const POUND_FORCE_N: f64 = 4.448_221_615_260_5;

pub const PRESSURE: &[UnitDef] = &[
    UnitDef::linear("Pa", 1.0),
    UnitDef::linear("mbar", 100.0),
    UnitDef::linear("mmHg", MMHG_PA),
    UnitDef::linear("kPa", 1e3),
    UnitDef::linear("psi", PSI_PA),
    UnitDef::linear("bar", 1e5),
    UnitDef::linear("atm", ATM_PA),
    UnitDef::linear("MPa", 1e6),
];

pub const ENERGY: &[UnitDef] = &[
    UnitDef::linear("eV", 1.602_176_634e-19),
    UnitDef::linear("J", 1.0),
    UnitDef::linear("cal", 4.184),
    UnitDef::linear("kJ", 1e3),
    UnitDef::linear("Wh", 3600.0),
    UnitDef::linear("kcal", 4184.0),
    UnitDef::linear("MJ", 1e6),
    UnitDef::linear("kWh", 3.6e6),
];

pub const LENGTH: &[UnitDef] = &[
    UnitDef::linear("nm", 1e-9),
    UnitDef::linear("μm", 1e-6),
    UnitDef::linear("mil", INCH_M / 1000.0),
    UnitDef::linear("mm", 1e-3),
    UnitDef::linear("cm", 1e-2),
    UnitDef::linear("in", INCH_M),
    UnitDef::linear("ft", FOOT_M),
    UnitDef::linear("m", 1.0),
    UnitDef::linear("km", 1e3),
    UnitDef::linear("mi", 1_609.344),
];

pub const AREA: &[UnitDef] = &[
    UnitDef::linear("mm²", 1e-6),
    UnitDef::linear("cm²", 1e-4),
    UnitDef::linear("in²", INCH_M * INCH_M),
    UnitDef::linear("ft²", FOOT_M * FOOT_M),
    UnitDef::linear("m²", 1.0),
    UnitDef::linear("km²", 1e6),
];

pub const VOLUME: &[UnitDef] = &[
    UnitDef::linear("mL", 1e-6),
    UnitDef::linear("in³", INCH_M * INCH_M * INCH_M),
    UnitDef::linear("L", 1e-3),
    // 미국 액량 갤런
    UnitDef::linear("gal", 3.785_411_784e-3),
    UnitDef::linear("ft³", FOOT_M * FOOT_M * FOOT_M),
    UnitDef::linear("m³", 1.0),
];

pub const MASS: &[UnitDef] = &[
    UnitDef::linear("mg", 1e-6),
    UnitDef::linear("g", 1e-3),
    UnitDef::linear("oz", POUND_KG / 16.0),
    UnitDef::linear("lb", POUND_KG),
    UnitDef::linear("kg", 1.0),
    UnitDef::linear("t", 1e3),
];

pub const VELOCITY: &[UnitDef] = &[
    UnitDef::linear("ft/s", FOOT_M),
    UnitDef::linear("km/h", 1.0 / 3.6),
    UnitDef::linear("mph", 0.447_04),
    UnitDef::linear("kn", 1_852.0 / 3_600.0),
    UnitDef::linear("m/s", 1.0),
];

pub const FORCE: &[UnitDef] = &[
    UnitDef::linear("μN", 1e-6),
    UnitDef::linear("mN", 1e-3),
    UnitDef::linear("N", 1.0),
    UnitDef::linear("lbf", POUND_FORCE_N),
    UnitDef::linear("kgf", STANDARD_GRAVITY),
    UnitDef::linear("kN", 1e3),
];

pub const TORQUE: &[UnitDef] = &[
    UnitDef::linear("mN·m", 1e-3),
    UnitDef::linear("N·m", 1.0),
    UnitDef::linear("lbf·ft", POUND_FORCE_N * FOOT_M),
    UnitDef::linear("kgf·m", STANDARD_GRAVITY),
    UnitDef::linear("kN·m", 1e3),
];
