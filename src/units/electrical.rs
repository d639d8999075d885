//! 전기/자기 관련 단위 표. 기준 단위는 SI 단위(Ω, F, H, V, A, W ...)이다.

use super::UnitDef;

pub const RESISTANCE: &[UnitDef] = &[
    UnitDef::linear("mΩ", 1e-3),
    UnitDef::linear("Ω", 1.0),
    UnitDef::linear("kΩ", 1e3),
    UnitDef::linear("MΩ", 1e6),
    UnitDef::linear("GΩ", 1e9),
];

pub const CAPACITANCE: &[UnitDef] = &[
    UnitDef::linear("fF", 1e-15),
    UnitDef::linear("pF", 1e-12),
    UnitDef::linear("nF", 1e-9),
    UnitDef::linear("μF", 1e-6),
    UnitDef::linear("mF", 1e-3),
    UnitDef::linear("F", 1.0),
];

pub const INDUCTANCE: &[UnitDef] = &[
    UnitDef::linear("pH", 1e-12),
    UnitDef::linear("nH", 1e-9),
    UnitDef::linear("μH", 1e-6),
    UnitDef::linear("mH", 1e-3),
    UnitDef::linear("H", 1.0),
];

pub const VOLTAGE: &[UnitDef] = &[
    UnitDef::linear("nV", 1e-9),
    UnitDef::linear("μV", 1e-6),
    UnitDef::linear("mV", 1e-3),
    UnitDef::linear("V", 1.0),
    UnitDef::linear("kV", 1e3),
    UnitDef::linear("MV", 1e6),
];

pub const CURRENT: &[UnitDef] = &[
    UnitDef::linear("pA", 1e-12),
    UnitDef::linear("nA", 1e-9),
    UnitDef::linear("μA", 1e-6),
    UnitDef::linear("mA", 1e-3),
    UnitDef::linear("A", 1.0),
    UnitDef::linear("kA", 1e3),
];

pub const POWER: &[UnitDef] = &[
    UnitDef::linear("nW", 1e-9),
    UnitDef::linear("μW", 1e-6),
    UnitDef::linear("mW", 1e-3),
    UnitDef::linear("W", 1.0),
    UnitDef::linear("kW", 1e3),
    UnitDef::linear("MW", 1e6),
    UnitDef::linear("GW", 1e9),
];

pub const CHARGE: &[UnitDef] = &[
    UnitDef::linear("pC", 1e-12),
    UnitDef::linear("nC", 1e-9),
    UnitDef::linear("μC", 1e-6),
    UnitDef::linear("mC", 1e-3),
    UnitDef::linear("C", 1.0),
    // 1 mAh = 3.6 C
    UnitDef::linear("mAh", 3.6),
    UnitDef::linear("Ah", 3600.0),
];

pub const CONDUCTANCE: &[UnitDef] = &[
    UnitDef::linear("nS", 1e-9),
    UnitDef::linear("μS", 1e-6),
    UnitDef::linear("mS", 1e-3),
    UnitDef::linear("S", 1.0),
    UnitDef::linear("kS", 1e3),
];

pub const MAGNETIC_FLUX: &[UnitDef] = &[
    UnitDef::linear("nWb", 1e-9),
    UnitDef::linear("μWb", 1e-6),
    UnitDef::linear("mWb", 1e-3),
    UnitDef::linear("Wb", 1.0),
    // 맥스웰(CGS)
    UnitDef::linear("Mx", 1e-8),
];

pub const MAGNETIC_FLUX_DENSITY: &[UnitDef] = &[
    UnitDef::linear("nT", 1e-9),
    UnitDef::linear("μT", 1e-6),
    UnitDef::linear("mT", 1e-3),
    UnitDef::linear("T", 1.0),
    UnitDef::linear("G", 1e-4),
];

pub const ELECTRIC_FIELD_STRENGTH: &[UnitDef] = &[
    UnitDef::linear("μV/m", 1e-6),
    UnitDef::linear("mV/m", 1e-3),
    UnitDef::linear("V/m", 1.0),
    UnitDef::linear("V/cm", 100.0),
    UnitDef::linear("kV/m", 1e3),
];

pub const MAGNETIC_FIELD_STRENGTH: &[UnitDef] = &[
    UnitDef::linear("mA/m", 1e-3),
    UnitDef::linear("A/m", 1.0),
    // 1 Oe = 1000/(4π) A/m
    UnitDef::linear("Oe", 79.577_471_545_947_67),
    UnitDef::linear("kA/m", 1e3),
];

pub const CONDUCTIVITY: &[UnitDef] = &[
    UnitDef::linear("μS/cm", 1e-4),
    UnitDef::linear("mS/m", 1e-3),
    UnitDef::linear("mS/cm", 0.1),
    UnitDef::linear("S/m", 1.0),
];

pub const RESISTIVITY: &[UnitDef] = &[
    UnitDef::linear("μΩ·cm", 1e-8),
    UnitDef::linear("Ω·mm²/m", 1e-6),
    UnitDef::linear("Ω·cm", 1e-2),
    UnitDef::linear("Ω·m", 1.0),
];
