//! 자동/고정 서식 회귀 테스트.
use rf_engineering_toolbox::format::{auto_format, format_fixed, FixedFormat};
use rf_engineering_toolbox::quantity::PhysicalQuantity;

#[test]
fn auto_format_picks_prefix() {
    assert_eq!(auto_format(1500.0, PhysicalQuantity::Frequency), "1.50 kHz");
    assert_eq!(auto_format(2.4e9, PhysicalQuantity::Frequency), "2.40 GHz");
    assert_eq!(auto_format(1.0, PhysicalQuantity::Frequency), "1.00 Hz");
    assert_eq!(auto_format(3.3e-6, PhysicalQuantity::Time), "3.30 μs");
}

#[test]
fn auto_format_below_smallest_unit_is_undefined() {
    assert_eq!(auto_format(0.0005, PhysicalQuantity::Frequency), "0.00 undefined");
    assert_eq!(auto_format(0.0, PhysicalQuantity::Resistance), "0.00 undefined");
}

#[test]
fn auto_format_non_finite() {
    assert_eq!(auto_format(f64::NAN, PhysicalQuantity::Voltage), "NaN undefined");
    assert_eq!(auto_format(f64::INFINITY, PhysicalQuantity::Voltage), "inf undefined");
}

#[test]
fn fixed_format_thresholds() {
    assert_eq!(format_fixed(1500.0, "Ω", "kΩ", "mΩ", 1e3, 1e-3), "1.50 kΩ");
    assert_eq!(format_fixed(0.0005, "Ω", "kΩ", "mΩ", 1e3, 1e-3), "0.50 mΩ");
    assert_eq!(format_fixed(47.0, "Ω", "kΩ", "mΩ", 1e3, 1e-3), "47.00 Ω");
    assert_eq!(format_fixed(0.0, "Ω", "kΩ", "mΩ", 1e3, 1e-3), "0.00 Ω");
    assert_eq!(format_fixed(-2000.0, "Ω", "kΩ", "mΩ", 1e3, 1e-3), "-2.00 kΩ");
}

#[test]
fn fixed_presets() {
    assert_eq!(FixedFormat::CAPACITANCE.format(4700.0), "4.70 μF");
    assert_eq!(FixedFormat::INDUCTANCE.format(0.0002), "0.20 nH");
    assert_eq!(FixedFormat::FREQUENCY.format(12.0), "12.00 kHz");
}
