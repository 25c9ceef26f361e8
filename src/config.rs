//! 設定ファイル（~/.pocketcare/config.toml）
//!
//! ファイルがなければ既定値で動作する。

use crate::error::{PcError, Result};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイルのパスを上書きする環境変数
pub const CONFIG_ENV: &str = "POCKETCARE_CONFIG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

/// CLI 設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `--day` 省略時の曜日ラベル（未設定なら今日の曜日）
    pub default_day: Option<String>,
    /// 出力形式
    pub output: OutputFormat,
    /// ログレベル（tracing の EnvFilter 形式）
    pub log_level: Option<String>,
}

impl Config {
    /// 既定パスから読み込む
    ///
    /// 優先順位: `POCKETCARE_CONFIG` > `$HOME/.pocketcare/config.toml`
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = EnvVar::get(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".pocketcare").join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;

        if let Some(day) = &config.default_day {
            if day.trim().is_empty() {
                return Err(PcError::Config(format!(
                    "default_day must not be blank ({})",
                    path.display()
                )));
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
