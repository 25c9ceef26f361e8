//! ログ出力（tracing）
//!
//! stderr に出力する。フィルタの優先順位: `POCKETCARE_LOG` > 設定の `log_level` > `warn`

use crate::config::EnvVar;
use tracing_subscriber::EnvFilter;

/// ログフィルタを上書きする環境変数
pub const LOG_ENV: &str = "POCKETCARE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// 使用するフィルタ文字列を決定
pub fn resolve_filter(configured: Option<&str>) -> String {
    EnvVar::get(LOG_ENV)
        .or_else(|| configured.filter(|s| !s.trim().is_empty()).map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// グローバルな subscriber を設定（2回目以降は何もしない）
pub fn init(configured: Option<&str>) {
    let directive = resolve_filter(configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| {
        eprintln!("warning: invalid log filter '{directive}', using '{DEFAULT_FILTER}'");
        EnvFilter::new(DEFAULT_FILTER)
    });

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(err) = installed {
        // 既に設定済みの subscriber をそのまま使う
        tracing::debug!(%err, "log subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn env_var_wins_over_config() {
        std::env::set_var(LOG_ENV, "trace");
        assert_eq!(resolve_filter(Some("info")), "trace");
        std::env::remove_var(LOG_ENV);
    }

    #[test]
    #[serial]
    fn config_used_when_env_unset() {
        std::env::remove_var(LOG_ENV);
        assert_eq!(resolve_filter(Some("debug")), "debug");
    }

    #[test]
    #[serial]
    fn init_twice_keeps_running() {
        std::env::remove_var(LOG_ENV);
        init(Some("debug"));
        init(Some("not a [valid filter"));
        tracing::debug!("still logging after second init");
    }

    #[test]
    #[serial]
    fn falls_back_to_warn() {
        std::env::set_var(LOG_ENV, "");
        assert_eq!(resolve_filter(None), "warn");
        assert_eq!(resolve_filter(Some("  ")), "warn");
        std::env::remove_var(LOG_ENV);
    }
}
