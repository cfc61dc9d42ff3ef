//! 統一エラーハンドリング
//!
//! words_add 全体で使用するエラー型を定義します。
//! 読み込み・書き込み・引数不足をそれぞれ別のバリアントで表現します。

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// words_add 全体で使用する統一エラー型
#[derive(Debug, Error)]
pub enum WordListError {
    // ========================================
    // CLI 関連エラー
    // ========================================
    #[error("Usage: words_add <json_path> word1 [word2 ...]")]
    Usage,

    // ========================================
    // 入出力関連エラー
    // ========================================
    #[error("Malformed word list {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list not found: {}", .0.display())]
    NotFound(PathBuf),

    /// 文字列配列の整形では起きないが `render` の `?` 用に残す
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 統一Result型エイリアス
pub type Result<T> = std::result::Result<T, WordListError>;

// ========================================
// ヘルパー関数
// ========================================

impl WordListError {
    /// プロセス終了コード。引数不足は 1、それ以外は 2。
    pub fn exit_code(&self) -> i32 {
        match self {
            WordListError::Usage => 1,
            _ => 2,
        }
    }
}
