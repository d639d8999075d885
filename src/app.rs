use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::filter::{FilterCalculationError, FilterError};
use crate::i18n::{self, Translator};
use crate::rf::RfError;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 필터 계산 오류
    #[error("{0}")]
    FilterCalculation(#[from] FilterCalculationError),
    /// 필터 입력 오류 (종류 파싱 등)
    #[error("필터 입력 오류: {0}")]
    Filter(#[from] FilterError),
    /// RF 지표 계산 오류
    #[error("RF 계산 오류: {0}")]
    Rf(#[from] RfError),
}

/// 대화형 CLI의 메인 루프를 실행한다. 설정 변경은 메뉴를 나갈 때 저장한다.
pub fn run(config: &mut Config, tr: &Translator, config_path: &Path) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr),
            MenuChoice::AutoFormat => ui_cli::handle_auto_format(tr),
            MenuChoice::FilterAnalysis => ui_cli::handle_filter_analysis(tr, config),
            MenuChoice::RfMatch => ui_cli::handle_rf_match(tr),
            MenuChoice::NoiseCascade => ui_cli::handle_cascade(tr),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save_to(config_path)?;
                Ok(())
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        // 계산 오류는 메뉴로 돌아가고, 입출력 오류만 루프를 끝낸다
        match outcome {
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => {
                tracing::debug!(error = %e, "메뉴 처리 실패");
                println!("{}: {e}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            Ok(()) => {}
        }
    }
    Ok(())
}
