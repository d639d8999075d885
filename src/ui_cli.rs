use std::io::{self, Write};

use num_complex::Complex64;

use crate::app::AppError;
use crate::config::{Config, UnitPreset};
use crate::conversion;
use crate::filter::{self, FilterInputValues, FilterResults, FilterType};
use crate::format::{self, FixedFormat};
use crate::i18n::{keys, Translator};
use crate::quantity::{PhysicalQuantity, QuantityValue};
use crate::rf::{self, MatchReport, Stage};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    AutoFormat,
    FilterAnalysis,
    RfMatch,
    NoiseCascade,
    Settings,
    Exit,
}

impl MenuChoice {
    fn from_input(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "1" => MenuChoice::UnitConversion,
            "2" => MenuChoice::AutoFormat,
            "3" => MenuChoice::FilterAnalysis,
            "4" => MenuChoice::RfMatch,
            "5" => MenuChoice::NoiseCascade,
            "6" => MenuChoice::Settings,
            "0" => MenuChoice::Exit,
            _ => return None,
        })
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ITEMS));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match MenuChoice::from_input(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 물리량 목록을 번호와 함께 출력한다.
fn print_quantities() {
    for (i, q) in PhysicalQuantity::ALL.iter().enumerate() {
        print!("{:>2}) {:<22}", i + 1, q.name());
        if i % 3 == 2 {
            println!();
        }
    }
    println!();
}

/// 번호(1부터) 또는 이름으로 물리량을 고른다.
fn read_quantity(tr: &Translator) -> Result<PhysicalQuantity, AppError> {
    print_quantities();
    loop {
        let sel = read_line(tr.t(keys::PROMPT_QUANTITY))?;
        let sel = sel.trim();
        let by_index = sel
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| PhysicalQuantity::ALL.get(i).copied());
        if let Some(q) = by_index {
            return Ok(q);
        }
        match sel.parse::<PhysicalQuantity>() {
            Ok(q) => return Ok(q),
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    let quantity = read_quantity(tr)?;
    println!(
        "{} {}",
        tr.t(keys::AVAILABLE_UNITS),
        conversion::units_for(quantity)?.join(", ")
    );
    let value = read_f64(tr, tr.t(keys::PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::PROMPT_TO_UNIT))?;
    let result = conversion::convert(value, from_unit.trim(), to_unit.trim(), quantity)?;
    println!("{} {result} {}", tr.t(keys::RESULT_CONVERTED), to_unit.trim());
    Ok(())
}

/// 기준 단위 값을 가장 알맞은 단위로 표시한다.
pub fn handle_auto_format(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    let quantity = read_quantity(tr)?;
    let value = read_f64(tr, tr.t(keys::PROMPT_VALUE))?;
    println!(
        "{} {}",
        tr.t(keys::RESULT_AUTO_FORMAT),
        format::auto_format(value, quantity)
    );
    Ok(())
}

/// 값과 단위를 입력받는다. 단위를 비워두면 `default_unit`을 쓴다.
fn read_quantity_value(
    tr: &Translator,
    label_key: &str,
    default_unit: &str,
) -> Result<QuantityValue, AppError> {
    let value = read_f64(tr, &format!("{} [{default_unit}]: ", tr.t(label_key)))?;
    let unit = read_line(&format!("  unit ({default_unit}): "))?;
    let unit = match unit.trim() {
        "" => default_unit,
        u => u,
    };
    Ok(QuantityValue::new(value, unit))
}

/// 필터 해석 메뉴를 처리한다. 입력 기본 단위는 설정의 표시 단위를 따른다.
pub fn handle_filter_analysis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::FILTER_HEADING));
    let sel = read_line(tr.t(keys::FILTER_TYPES))?;
    let filter_type = match sel.trim() {
        "" => cfg.default_filter_type,
        s => s.parse::<FilterType>()?,
    };
    let units = &cfg.display_units;
    let input = FilterInputValues {
        filter_type,
        frequency: read_quantity_value(tr, keys::PROMPT_FREQUENCY, &units.frequency)?,
        capacitance: read_quantity_value(tr, keys::PROMPT_CAPACITANCE, &units.capacitance)?,
        inductance: read_quantity_value(tr, keys::PROMPT_INDUCTANCE, &units.inductance)?,
        resistance: read_quantity_value(tr, keys::PROMPT_RESISTANCE, &units.resistance)?,
    };
    let results = filter::calculate_filter_results(&input)?;
    print_filter_results(tr, &results, 2);
    Ok(())
}

/// 필터 결과를 출력한다. 응답 곡선은 양 끝과 가운데 등 `samples`+2개 점만 보여준다.
pub fn print_filter_results(tr: &Translator, r: &FilterResults, samples: usize) {
    let fu = r.frequency_unit.as_str();
    println!("[{}]", r.filter_type);
    let cutoff_khz =
        conversion::convert(r.cutoff_frequency, fu, "kHz", PhysicalQuantity::Frequency).ok();
    match cutoff_khz {
        Some(khz) if fu != "kHz" => println!(
            "{} {:.4} {fu} ({})",
            tr.t(keys::RESULT_CUTOFF),
            r.cutoff_frequency,
            FixedFormat::FREQUENCY.format(khz)
        ),
        _ => println!("{} {:.4} {fu}", tr.t(keys::RESULT_CUTOFF), r.cutoff_frequency),
    }
    println!("{} {:.4}", tr.t(keys::RESULT_Q), r.quality_factor);
    println!("{} {:.4} {fu}", tr.t(keys::RESULT_BANDWIDTH), r.bandwidth);
    println!(
        "{} {:.4} {}",
        tr.t(keys::RESULT_IMPEDANCE),
        r.impedance,
        r.impedance_unit
    );
    println!(
        "{} {:.4} rad ({:.2}°)",
        tr.t(keys::RESULT_PHASE),
        r.phase_shift,
        r.phase_shift_degrees()
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_GROUP_DELAY),
        format::auto_format(r.group_delay, PhysicalQuantity::Time)
    );
    println!("{} {:.2} dB", tr.t(keys::RESULT_ATTENUATION), r.attenuation);
    println!(
        "{} {:.4} {fu}, {:.2} dB",
        tr.t(keys::RESULT_STOPBAND),
        r.stopband_frequency,
        r.stopband_attenuation
    );
    println!("{} {:.0} dB/decade", tr.t(keys::RESULT_ROLL_OFF), r.roll_off);

    let points = r.frequency_response.points();
    if points.is_empty() {
        return;
    }
    println!("{} ({} points)", tr.t(keys::RESULT_RESPONSE), points.len());
    for i in sample_indices(points.len(), samples) {
        let p = points[i];
        println!("  {:>12.4} {fu}  {:>9.2} dB", p.x, p.y);
    }
}

/// 응답 곡선에서 출력할 인덱스. 첫 점과 마지막 점을 포함하고, 사이에 최대 `samples`개를
/// 고르게 넣는다. `samples`는 곡선 길이로 제한된다.
fn sample_indices(len: usize, samples: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let last = len - 1;
    let samples = samples.min(len.saturating_sub(2));
    let step = (last / samples.saturating_add(1)).max(1);
    let mut indices: Vec<usize> = (0..=samples.saturating_add(1))
        .map(|k| k * step)
        .take_while(|&i| i < len)
        .collect();
    if indices.last() != Some(&last) {
        indices.push(last);
    }
    indices
}

/// 부하 정합 메뉴를 처리한다.
pub fn handle_rf_match(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MATCH_HEADING));
    let re = read_f64(tr, tr.t(keys::PROMPT_LOAD_RE))?;
    let im = read_f64(tr, tr.t(keys::PROMPT_LOAD_IM))?;
    let z0 = read_f64(tr, tr.t(keys::PROMPT_Z0))?;
    let report = MatchReport::from_load(Complex64::new(re, im), z0)?;
    print_match_report(tr, &report);
    Ok(())
}

pub fn print_match_report(tr: &Translator, m: &MatchReport) {
    println!("{}", tr.t(keys::RESULT_MATCH));
    println!(
        "  Γ = {:.4} {:+.4}j  (|Γ| = {:.4})",
        m.gamma.re, m.gamma.im, m.gamma_magnitude
    );
    println!("  VSWR = {:.3}", m.vswr);
    println!("  RL = {:.2} dB", m.return_loss_db);
    println!("  ML = {:.3} dB", m.mismatch_loss_db);
}

/// 잡음 캐스케이드 메뉴를 처리한다. 빈 줄이 입력되면 계산한다.
pub fn handle_cascade(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CASCADE_HEADING));
    let mut stages = Vec::new();
    loop {
        let line = read_line(tr.t(keys::PROMPT_STAGE))?;
        if line.trim().is_empty() {
            break;
        }
        match line.trim().parse::<Stage>() {
            Ok(stage) => stages.push(stage),
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    }
    let result = rf::cascade(&stages)?;
    print_cascade(tr, &result);
    Ok(())
}

pub fn print_cascade(tr: &Translator, c: &rf::CascadeResult) {
    println!("{}", tr.t(keys::RESULT_CASCADE));
    println!("  G  = {:.2} dB", c.total_gain_db);
    println!("  NF = {:.3} dB", c.noise_figure_db);
    println!("  Te = {:.1} K", c.noise_temperature_k);
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_PRESET), cfg.unit_preset);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let preset = match sel.trim() {
        "1" => UnitPreset::SI,
        "2" => UnitPreset::Audio,
        "3" => UnitPreset::Engineering,
        "4" => UnitPreset::RF,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.apply_preset(preset);
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_preset);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choice_parses_digits() {
        assert_eq!(MenuChoice::from_input("3\n"), Some(MenuChoice::FilterAnalysis));
        assert_eq!(MenuChoice::from_input("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("9"), None);
    }

    #[test]
    fn sample_indices_include_both_ends() {
        assert_eq!(sample_indices(1000, 2), vec![0, 333, 666, 999]);
        assert_eq!(sample_indices(1000, 0), vec![0, 999]);
        assert_eq!(sample_indices(1, 5), vec![0]);
        assert!(sample_indices(0, 5).is_empty());
    }

    #[test]
    fn sample_indices_clamp_huge_requests() {
        let idx = sample_indices(1000, usize::MAX);
        assert_eq!(idx.len(), 1000);
        assert_eq!(idx.first(), Some(&0));
        assert_eq!(idx.last(), Some(&999));
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn printing_with_unbounded_sample_count() {
        let input = FilterInputValues {
            filter_type: FilterType::LowPass,
            frequency: QuantityValue::new(1.0, "kHz"),
            capacitance: QuantityValue::new(100.0, "nF"),
            inductance: QuantityValue::new(10.0, "mH"),
            resistance: QuantityValue::new(50.0, "Ω"),
        };
        let results = filter::calculate_filter_results(&input).unwrap();
        print_filter_results(&Translator::new("en"), &results, usize::MAX);
    }
}
