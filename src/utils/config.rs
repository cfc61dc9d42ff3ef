//! グローバル環境変数設定
//!
//! プロセス起動時に一度だけ初期化し、以降はどこからでもアクセス可能。

use once_cell::sync::OnceCell;
use std::sync::Arc;

/// グローバル環境変数設定
static ENV_CONFIG: OnceCell<Arc<EnvConfig>> = OnceCell::new();

/// 読み込む `.env` ファイルを指定する環境変数
pub const ENV_PATH_ENV: &str = "WORDS_ADD_ENV_PATH";
/// プロファイルログを有効にする環境変数
pub const PROFILE_ENV: &str = "WORDS_ADD_PROFILE";

/// 環境変数設定
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// プロファイルログを出すか
    pub profile: bool,
}

impl EnvConfig {
    /// 環境変数から設定を組み立てる
    pub fn from_env() -> Self {
        EnvConfig {
            profile: std::env::var(PROFILE_ENV)
                .ok()
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        }
    }

    /// 環境変数から設定を初期化
    ///
    /// 既に初期化済みの場合は何もしない（冪等）。
    pub fn init() {
        if ENV_CONFIG.get().is_some() {
            return;
        }
        let _ = ENV_CONFIG.set(Arc::new(Self::from_env()));
    }

    /// 設定を取得。未初期化なら環境変数から直接組み立てる。
    pub fn get() -> Arc<EnvConfig> {
        ENV_CONFIG
            .get()
            .cloned()
            .unwrap_or_else(|| Arc::new(Self::from_env()))
    }
}

/// "1" / "true" / "yes" / "on" を真とみなす
pub fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    matches!(value.as_str(), "1" | "true" | "yes" | "on")
}
