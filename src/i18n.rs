use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ITEMS: &str = "main_menu.items";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const PROMPT_QUANTITY: &str = "prompt.quantity";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_FROM_UNIT: &str = "prompt.from_unit";
    pub const PROMPT_TO_UNIT: &str = "prompt.to_unit";
    pub const AVAILABLE_UNITS: &str = "unit_conversion.available_units";
    pub const RESULT_CONVERTED: &str = "result.converted";
    pub const RESULT_AUTO_FORMAT: &str = "result.auto_format";

    pub const FILTER_HEADING: &str = "filter.heading";
    pub const FILTER_TYPES: &str = "filter.types";
    pub const PROMPT_FREQUENCY: &str = "prompt.frequency";
    pub const PROMPT_CAPACITANCE: &str = "prompt.capacitance";
    pub const PROMPT_INDUCTANCE: &str = "prompt.inductance";
    pub const PROMPT_RESISTANCE: &str = "prompt.resistance";
    pub const RESULT_CUTOFF: &str = "result.cutoff";
    pub const RESULT_Q: &str = "result.q";
    pub const RESULT_BANDWIDTH: &str = "result.bandwidth";
    pub const RESULT_IMPEDANCE: &str = "result.impedance";
    pub const RESULT_PHASE: &str = "result.phase";
    pub const RESULT_GROUP_DELAY: &str = "result.group_delay";
    pub const RESULT_ATTENUATION: &str = "result.attenuation";
    pub const RESULT_STOPBAND: &str = "result.stopband";
    pub const RESULT_ROLL_OFF: &str = "result.roll_off";
    pub const RESULT_RESPONSE: &str = "result.response";

    pub const MATCH_HEADING: &str = "match.heading";
    pub const PROMPT_LOAD_RE: &str = "prompt.load_re";
    pub const PROMPT_LOAD_IM: &str = "prompt.load_im";
    pub const PROMPT_Z0: &str = "prompt.z0";
    pub const RESULT_MATCH: &str = "result.match";

    pub const CASCADE_HEADING: &str = "cascade.heading";
    pub const PROMPT_STAGE: &str = "prompt.stage";
    pub const RESULT_CASCADE: &str = "result.cascade";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_PRESET: &str = "settings.current_preset";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순으로 찾고, 영어에 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 중첩 테이블은 `a.b` 형태의 키로 펼친다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== RF Engineering Toolbox ===",
        MAIN_MENU_ITEMS => {
            "1) 단위 변환  2) 자동 단위 표시  3) 필터 해석  4) 정합/VSWR  5) 잡음 캐스케이드\n6) 설정  0) 종료"
        }
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        PROMPT_QUANTITY => "물리량 이름 또는 번호: ",
        PROMPT_VALUE => "값 입력: ",
        PROMPT_FROM_UNIT => "입력 단위: ",
        PROMPT_TO_UNIT => "변환 단위: ",
        AVAILABLE_UNITS => "사용 가능한 단위:",
        RESULT_CONVERTED => "변환 결과:",
        RESULT_AUTO_FORMAT => "표시:",
        FILTER_HEADING => "\n-- 필터 해석 --",
        FILTER_TYPES => "필터 종류 (lowpass, highpass, bandpass, bandstop, rc-lowpass, rc-highpass, rl-lowpass, rl-highpass): ",
        PROMPT_FREQUENCY => "운전 주파수",
        PROMPT_CAPACITANCE => "커패시턴스",
        PROMPT_INDUCTANCE => "인덕턴스",
        PROMPT_RESISTANCE => "저항",
        RESULT_CUTOFF => "차단 주파수:",
        RESULT_Q => "Q:",
        RESULT_BANDWIDTH => "대역폭:",
        RESULT_IMPEDANCE => "임피던스:",
        RESULT_PHASE => "위상:",
        RESULT_GROUP_DELAY => "군지연:",
        RESULT_ATTENUATION => "감쇠:",
        RESULT_STOPBAND => "저지대역:",
        RESULT_ROLL_OFF => "롤오프:",
        RESULT_RESPONSE => "응답 곡선:",
        MATCH_HEADING => "\n-- 정합/VSWR --",
        PROMPT_LOAD_RE => "부하 저항 R [Ω]: ",
        PROMPT_LOAD_IM => "부하 리액턴스 X [Ω]: ",
        PROMPT_Z0 => "기준 임피던스 Z0 [Ω]: ",
        RESULT_MATCH => "정합 결과:",
        CASCADE_HEADING => "\n-- 잡음 캐스케이드 --",
        PROMPT_STAGE => "단 입력 (이득dB:잡음지수dB, 빈 줄이면 계산): ",
        RESULT_CASCADE => "캐스케이드 결과:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_PRESET => "현재 표시 단위 프리셋:",
        SETTINGS_OPTIONS => "1) SI  2) Audio  3) Engineering  4) RF",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "표시 단위 프리셋이 변경되었습니다:",
        _ => "?",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== RF Engineering Toolbox ===",
        MAIN_MENU_ITEMS => {
            "1) Unit conversion  2) Auto format  3) Filter analysis  4) Match/VSWR  5) Noise cascade\n6) Settings  0) Exit"
        }
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        UNIT_CONVERSION_HEADING => "\n-- Unit conversion --",
        PROMPT_QUANTITY => "Quantity name or number: ",
        PROMPT_VALUE => "Value: ",
        PROMPT_FROM_UNIT => "From unit: ",
        PROMPT_TO_UNIT => "To unit: ",
        AVAILABLE_UNITS => "Available units:",
        RESULT_CONVERTED => "Result:",
        RESULT_AUTO_FORMAT => "Display:",
        FILTER_HEADING => "\n-- Filter analysis --",
        FILTER_TYPES => "Filter type (lowpass, highpass, bandpass, bandstop, rc-lowpass, rc-highpass, rl-lowpass, rl-highpass): ",
        PROMPT_FREQUENCY => "Operating frequency",
        PROMPT_CAPACITANCE => "Capacitance",
        PROMPT_INDUCTANCE => "Inductance",
        PROMPT_RESISTANCE => "Resistance",
        RESULT_CUTOFF => "Cutoff frequency:",
        RESULT_Q => "Q:",
        RESULT_BANDWIDTH => "Bandwidth:",
        RESULT_IMPEDANCE => "Impedance:",
        RESULT_PHASE => "Phase:",
        RESULT_GROUP_DELAY => "Group delay:",
        RESULT_ATTENUATION => "Attenuation:",
        RESULT_STOPBAND => "Stop band:",
        RESULT_ROLL_OFF => "Roll-off:",
        RESULT_RESPONSE => "Response curve:",
        MATCH_HEADING => "\n-- Match/VSWR --",
        PROMPT_LOAD_RE => "Load resistance R [Ω]: ",
        PROMPT_LOAD_IM => "Load reactance X [Ω]: ",
        PROMPT_Z0 => "Reference impedance Z0 [Ω]: ",
        RESULT_MATCH => "Match:",
        CASCADE_HEADING => "\n-- Noise cascade --",
        PROMPT_STAGE => "Stage (gain_dB:NF_dB, empty line to compute): ",
        RESULT_CASCADE => "Cascade:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_PRESET => "Current display preset:",
        SETTINGS_OPTIONS => "1) SI  2) Audio  3) Engineering  4) RF",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; preset unchanged.",
        SETTINGS_SAVED => "Display preset changed to:",
        _ => return None,
    })
}
