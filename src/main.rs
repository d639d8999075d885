use std::path::PathBuf;

use clap::{Parser, Subcommand};
use num_complex::Complex64;
use rf_engineering_toolbox::app::{self, AppError};
use rf_engineering_toolbox::config::{self, Config};
use rf_engineering_toolbox::filter::{self, FilterInputValues, FilterType};
use rf_engineering_toolbox::i18n::{self, keys, Translator};
use rf_engineering_toolbox::quantity::{PhysicalQuantity, QuantityValue};
use rf_engineering_toolbox::rf::{self, MatchReport, Stage};
use rf_engineering_toolbox::{conversion, format, ui_cli};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

/// 단위 변환, 필터 해석, RF 정합 계산 도구
#[derive(Parser)]
#[command(name = "rf_engineering_toolbox", version)]
struct Cli {
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// 출력 언어 (ko, en, auto)
    #[arg(long)]
    lang: Option<String>,

    /// 언어팩 디렉터리 (`<코드>.toml`, 기본: ./locales)
    #[arg(long)]
    locales: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 값을 다른 단위로 변환한다
    #[command(allow_negative_numbers = true)]
    Convert {
        value: f64,
        from: String,
        to: String,
        #[arg(long, short)]
        quantity: PhysicalQuantity,
    },
    /// 기준 단위 값을 알맞은 단위로 표시한다
    #[command(allow_negative_numbers = true)]
    Format {
        value: f64,
        #[arg(long, short)]
        quantity: PhysicalQuantity,
    },
    /// 등록된 단위를 나열한다
    Units {
        #[arg(long, short)]
        quantity: Option<PhysicalQuantity>,
    },
    /// 수동 필터를 해석한다
    #[command(allow_negative_numbers = true)]
    Filter {
        #[arg(long = "type", short = 't')]
        filter_type: Option<FilterType>,
        #[arg(long)]
        frequency: f64,
        #[arg(long)]
        frequency_unit: Option<String>,
        #[arg(long)]
        capacitance: f64,
        #[arg(long)]
        capacitance_unit: Option<String>,
        #[arg(long)]
        inductance: f64,
        #[arg(long)]
        inductance_unit: Option<String>,
        #[arg(long)]
        resistance: f64,
        #[arg(long)]
        resistance_unit: Option<String>,
        /// 양 끝점 외에 출력할 응답 곡선 점 수
        #[arg(long, default_value_t = 3)]
        points: usize,
    },
    /// 부하 임피던스의 정합 상태를 계산한다
    #[command(allow_negative_numbers = true)]
    Match {
        #[arg(long)]
        load_re: f64,
        #[arg(long, default_value_t = 0.0)]
        load_im: f64,
        #[arg(long, default_value_t = 50.0)]
        z0: f64,
    },
    /// Friis 식으로 다단 잡음 지수를 계산한다 (이득dB:잡음지수dB ...)
    #[command(allow_negative_numbers = true)]
    Cascade {
        #[arg(required = true)]
        stages: Vec<Stage>,
    },
    /// 입력/출력 비를 dB 이득으로 나타낸다 (기본: 전력)
    Gain {
        input: f64,
        output: f64,
        /// 전압비로 계산 (20·log10)
        #[arg(long)]
        voltage: bool,
    },
    /// VSWR에서 반사계수와 손실을 구한다
    Vswr { vswr: f64 },
    /// 잡음 지수와 잡음 온도를 상호 환산한다
    #[command(allow_negative_numbers = true)]
    Noise {
        #[arg(long, conflicts_with = "temperature", required_unless_present = "temperature")]
        nf_db: Option<f64>,
        /// 등가 잡음 온도 [K]
        #[arg(long)]
        temperature: Option<f64>,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 단발 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    // RUST_LOG가 없으면 기본 수준으로 시작하고, 설정을 읽은 뒤 log_level로 바꾼다
    let env_filter = EnvFilter::try_from_default_env().ok();
    let has_env_filter = env_filter.is_some();
    let (filter, filter_handle) = reload::Layer::new(
        env_filter.unwrap_or_else(|| EnvFilter::new(Config::default().log_level)),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let (mut cfg, cfg_path) = config::load_or_default(cli.config.as_deref())?;
    if !has_env_filter {
        if let Err(err) = filter_handle.reload(EnvFilter::new(&cfg.log_level)) {
            tracing::warn!(%err, level = %cfg.log_level, "로그 수준 적용 실패");
        }
    }

    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());
    tracing::debug!(
        lang = tr.language().as_code(),
        config = %cfg_path.display(),
        "시작"
    );

    let Some(command) = cli.command else {
        return app::run(&mut cfg, &tr, &cfg_path);
    };
    if let Err(err) = run_command(command, &cfg, &tr) {
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
    Ok(())
}

fn run_command(command: Command, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    match command {
        Command::Convert {
            value,
            from,
            to,
            quantity,
        } => {
            let result = conversion::convert(value, &from, &to, quantity)?;
            println!("{result} {to}");
        }
        Command::Format { value, quantity } => {
            println!("{}", format::auto_format(value, quantity));
        }
        Command::Units { quantity } => {
            let quantities = match quantity {
                Some(q) => vec![q],
                None => PhysicalQuantity::ALL.to_vec(),
            };
            for q in quantities {
                println!("{q}: {}", conversion::units_for(q)?.join(", "));
            }
        }
        Command::Filter {
            filter_type,
            frequency,
            frequency_unit,
            capacitance,
            capacitance_unit,
            inductance,
            inductance_unit,
            resistance,
            resistance_unit,
            points,
        } => {
            let units = &cfg.display_units;
            let pick = |unit: Option<String>, default: &str| {
                unit.unwrap_or_else(|| default.to_string())
            };
            let input = FilterInputValues {
                filter_type: filter_type.unwrap_or(cfg.default_filter_type),
                frequency: QuantityValue::new(frequency, pick(frequency_unit, &units.frequency)),
                capacitance: QuantityValue::new(
                    capacitance,
                    pick(capacitance_unit, &units.capacitance),
                ),
                inductance: QuantityValue::new(inductance, pick(inductance_unit, &units.inductance)),
                resistance: QuantityValue::new(resistance, pick(resistance_unit, &units.resistance)),
            };
            let results = filter::calculate_filter_results(&input)?;
            ui_cli::print_filter_results(tr, &results, points);
        }
        Command::Match { load_re, load_im, z0 } => {
            let report = MatchReport::from_load(Complex64::new(load_re, load_im), z0)?;
            ui_cli::print_match_report(tr, &report);
        }
        Command::Cascade { stages } => {
            let result = rf::cascade(&stages)?;
            ui_cli::print_cascade(tr, &result);
        }
        Command::Gain {
            input,
            output,
            voltage,
        } => {
            let db = if voltage {
                rf::voltage_gain_db(input, output)?
            } else {
                rf::power_gain_db(input, output)?
            };
            println!("{db:.3} dB");
        }
        Command::Vswr { vswr } => {
            let gamma = rf::reflection_from_vswr(vswr)?;
            println!("|Γ| = {gamma:.4}");
            println!("RL = {:.2} dB", rf::return_loss_db(gamma)?);
            println!("ML = {:.3} dB", rf::mismatch_loss_db(gamma)?);
        }
        Command::Noise { nf_db, temperature } => {
            let (nf, te) = match nf_db {
                Some(nf) => (nf, rf::noise_temperature(nf)),
                None => {
                    let te = temperature.unwrap_or(rf::REFERENCE_TEMPERATURE_K);
                    (rf::noise_figure_db(te)?, te)
                }
            };
            println!("NF = {nf:.3} dB");
            println!("Te = {te:.1} K");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<(), AppError> {
        let cli = Cli::try_parse_from(args).unwrap();
        run_command(cli.command.unwrap(), &Config::default(), &Translator::new("en"))
    }

    #[test]
    fn gain_vswr_and_noise_commands() {
        assert!(run(&["rf", "gain", "0.001", "1"]).is_ok());
        assert!(run(&["rf", "gain", "--voltage", "1", "10"]).is_ok());
        assert!(run(&["rf", "vswr", "2"]).is_ok());
        assert!(run(&["rf", "noise", "--nf-db", "3"]).is_ok());
        assert!(run(&["rf", "noise", "--temperature", "290"]).is_ok());
    }

    #[test]
    fn rf_command_errors_surface() {
        assert!(matches!(run(&["rf", "vswr", "0.5"]), Err(AppError::Rf(_))));
        assert!(matches!(run(&["rf", "gain", "0", "1"]), Err(AppError::Rf(_))));
        assert!(Cli::try_parse_from(["rf", "noise"]).is_err());
        assert!(Cli::try_parse_from(["rf", "noise", "--nf-db", "1", "--temperature", "2"]).is_err());
    }

    #[test]
    fn startup_and_config_log_levels_are_valid_filters() {
        assert!(EnvFilter::try_new(Config::default().log_level).is_ok());
        let (filter, handle) = reload::Layer::<EnvFilter, tracing_subscriber::Registry>::new(
            EnvFilter::new("warn"),
        );
        let _subscriber = tracing_subscriber::registry().with(filter);
        assert!(handle.reload(EnvFilter::new("debug")).is_ok());
    }

    #[test]
    fn locales_flag_is_parsed() {
        let cli = Cli::try_parse_from(["rf", "--locales", "packs", "units"]).unwrap();
        assert_eq!(cli.locales.as_deref(), Some("packs"));
    }
}
