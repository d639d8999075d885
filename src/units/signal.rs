//! 신호/주파수/레벨 계열 단위 표.

use super::UnitDef;

pub const FREQUENCY: &[UnitDef] = &[
    UnitDef::linear("mHz", 1e-3),
    UnitDef::linear("Hz", 1.0),
    UnitDef::linear("kHz", 1e3),
    UnitDef::linear("MHz", 1e6),
    UnitDef::linear("GHz", 1e9),
    UnitDef::linear("THz", 1e12),
];

pub const TIME: &[UnitDef] = &[
    UnitDef::linear("fs", 1e-15),
    UnitDef::linear("ps", 1e-12),
    UnitDef::linear("ns", 1e-9),
    UnitDef::linear("μs", 1e-6),
    UnitDef::linear("ms", 1e-3),
    UnitDef::linear("s", 1.0),
    UnitDef::linear("min", 60.0),
    UnitDef::linear("h", 3600.0),
];

/// 감쇠량. 로그 척도끼리의 배율만 다룬다. (1 Np = 20/ln10 dB)
pub const ATTENUATION: &[UnitDef] = &[
    UnitDef::linear("mB", 0.01),
    UnitDef::linear("dB", 1.0),
    UnitDef::linear("Np", 8.685_889_638_065_036),
    UnitDef::linear("B", 10.0),
];

pub const SOUND_LEVEL: &[UnitDef] = &[UnitDef::linear("dB", 1.0), UnitDef::linear("B", 10.0)];

pub const DATA_RATE: &[UnitDef] = &[
    UnitDef::linear("bit/s", 1.0),
    UnitDef::linear("B/s", 8.0),
    UnitDef::linear("kbit/s", 1e3),
    UnitDef::linear("kB/s", 8e3),
    UnitDef::linear("Mbit/s", 1e6),
    UnitDef::linear("MB/s", 8e6),
    UnitDef::linear("Gbit/s", 1e9),
];
