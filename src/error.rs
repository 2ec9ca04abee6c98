//! エラーハンドリングシステム
//!
//! codereading 全体で使用される統一されたエラー型とユーティリティを定義
//! コア処理（領域の正規化）は同期的に失敗を返し、内部で回復しない

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum CodeReadingError {
    /// テキスト領域操作エラー
    #[error("Region operation failed")]
    Region(#[from] RegionError),

    /// ファイル操作エラー
    #[error("File operation failed")]
    File(#[from] FileError),

    /// 設定エラー
    #[error("Configuration error")]
    Config(#[from] ConfigError),

    /// アプリケーション論理エラー
    #[error("Application error: {0}")]
    Application(String),
}

/// テキスト領域（オフセット・行・タブ幅）固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegionError {
    #[error("Offset out of range: offset={offset}, length={length}")]
    OutOfRange { offset: usize, length: usize },

    #[error("Invalid argument for {name}: {value}")]
    InvalidArgument { name: &'static str, value: String },
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to create directory for log file: {path}")]
    CreateDirectory { path: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Invalid configuration file: {path}")]
    InvalidFile { path: String },

    #[error("Missing required setting: {key}")]
    MissingRequired { key: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// エラーレベル分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorLevel {
    Warning,
    Error,
    Fatal,
}

/// ユーザー向けのエラー表示情報
#[derive(Debug, Clone)]
pub struct ErrorDisplay {
    /// エラーメッセージ
    pub message: String,
    /// エラーレベル
    pub level: ErrorLevel,
}

impl ErrorDisplay {
    pub fn new(error: &CodeReadingError) -> Self {
        let (message, level) = Self::format_error(error);
        Self { message, level }
    }

    fn format_error(error: &CodeReadingError) -> (String, ErrorLevel) {
        match error {
            CodeReadingError::Region(RegionError::OutOfRange { offset, length }) => (
                format!("選択範囲がファイルの外にあります: offset={}, length={}", offset, length),
                ErrorLevel::Error,
            ),
            CodeReadingError::Region(RegionError::InvalidArgument { name, value }) => {
                (format!("引数 {} の値が不正です: {}", name, value), ErrorLevel::Error)
            }
            CodeReadingError::File(FileError::NotFound { path }) => {
                (format!("ファイルが見つかりません: {}", path), ErrorLevel::Error)
            }
            CodeReadingError::File(FileError::InvalidPath { path }) => {
                (format!("無効なパスです: {}", path), ErrorLevel::Error)
            }
            CodeReadingError::File(FileError::Read { path, message }) => (
                format!("ファイルを読み込めません: {} ({})", path, message),
                ErrorLevel::Error,
            ),
            CodeReadingError::File(FileError::CreateDirectory { path }) => (
                format!("ログファイルのディレクトリを作成できません: {}", path),
                ErrorLevel::Fatal,
            ),
            CodeReadingError::File(FileError::Io { message }) => {
                (format!("ファイルの入出力に失敗しました: {}", message), ErrorLevel::Fatal)
            }
            CodeReadingError::Config(ConfigError::MissingRequired { key }) => {
                (format!("設定 {} が指定されていません", key), ErrorLevel::Warning)
            }
            _ => (format!("エラーが発生しました: {}", error), ErrorLevel::Error),
        }
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, CodeReadingError>;

/// 各モジュール固有のResult型
pub mod region {
    pub type Result<T> = std::result::Result<T, super::RegionError>;
}

pub mod file {
    pub type Result<T> = std::result::Result<T, super::FileError>;
}

// std::io::Error から FileError への変換
impl From<std::io::Error> for FileError {
    fn from(error: std::io::Error) -> Self {
        FileError::Io { message: error.to_string() }
    }
}

// std::io::Error から CodeReadingError への変換
impl From<std::io::Error> for CodeReadingError {
    fn from(error: std::io::Error) -> Self {
        CodeReadingError::File(FileError::from(error))
    }
}
