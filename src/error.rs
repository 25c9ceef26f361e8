mod code;

pub use code::ErrorCode;

use owo_colors::OwoColorize;
use std::io::IsTerminal;
use thiserror::Error;

/// PocketCare統一エラー型
///
/// 選択ダイアログ本体はエラーを返さない。境界層（CLI引数、スクリプト、設定、端末）専用。
#[derive(Debug, Error)]
pub enum PcError {
    #[error("Invalid time label: {0}. Expected HH:MM on a half-hour boundary (e.g. 09:30)")]
    InvalidTimeLabel(String),

    #[error("Invalid time range: {0}. Expected HH:MM-HH:MM with start before end")]
    InvalidTimeRange(String),

    #[error("Unknown quick preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Selector is closed, '{0}' was not applied")]
    SelectorClosed(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PcError>;

impl PcError {
    /// エラーコードを取得
    pub fn code(&self) -> ErrorCode {
        match self {
            PcError::InvalidTimeLabel(_) => ErrorCode::Val001,
            PcError::InvalidTimeRange(_) => ErrorCode::Val002,
            PcError::UnknownPreset(_) => ErrorCode::Val003,
            PcError::InvalidAction(_) => ErrorCode::Val004,
            PcError::SelectorClosed(_) => ErrorCode::Sel001,
            PcError::Tui(_) => ErrorCode::Tui001,
            PcError::Config(_) | PcError::Toml(_) => ErrorCode::Cfg001,
            PcError::Io(_) => ErrorCode::Io001,
            PcError::Json(_) => ErrorCode::Int001,
        }
    }

    /// CLI向けの表示（`error[VAL001]: ...` と原因の2行）
    ///
    /// stderr が端末で NO_COLOR が未設定の場合のみ色付けする。
    pub fn render(&self) -> String {
        self.render_with_color(should_use_color())
    }

    pub fn render_with_color(&self, use_color: bool) -> String {
        let code = self.code();
        let head = format!("error[{code}]");
        if use_color {
            format!("{}: {}\n  {} {}", head.red().bold(), self, "=".blue(), code.cause())
        } else {
            format!("{head}: {self}\n  = {}", code.cause())
        }
    }
}

fn should_use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_color_uses_code_prefix() {
        let err = PcError::InvalidTimeLabel("9:00".to_string());
        assert_eq!(
            err.render_with_color(false),
            "error[VAL001]: Invalid time label: 9:00. Expected HH:MM on a half-hour boundary (e.g. 09:30)\n  = Time labels must be HH:MM with minutes 00 or 30"
        );
    }

    #[test]
    fn toml_errors_map_to_config_code() {
        let err: PcError = toml::from_str::<toml::Table>("= broken").unwrap_err().into();
        assert_eq!(err.code(), ErrorCode::Cfg001);
    }

    #[test]
    fn selector_closed_has_its_own_code() {
        let err = PcError::SelectorClosed("add".to_string());
        assert_eq!(err.code().as_str(), "SEL001");
        assert!(err.to_string().contains("'add'"));
    }
}
