//! 設定モジュール
//!
//! - `config.json`: タブ幅・改行コード・エンコーディング（ユーザーが編集する）
//! - `settings.json`: 最後に使ったログファイルなど（プログラムが更新する）

pub mod settings;

pub use settings::{Settings, SettingsStore};

use crate::error::{ConfigError, Result};
use crate::file::{LineBreak, LogEncoding, LogFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ディレクトリ名
pub const APP_DIR: &str = "codereading";

/// `<config_dir>/codereading`
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| {
            ConfigError::MissingRequired {
                key: "config directory".to_string(),
            }
            .into()
        })
}

/// ユーザー設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// タブ幅（1以上）
    pub tab_width: usize,
    pub line_break: LineBreak,
    pub encoding: LogEncoding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_width: 4,
            line_break: LineBreak::Platform,
            encoding: LogEncoding::Utf8,
        }
    }
}

impl Config {
    /// 既定の場所から読み込む（なければデフォルト）
    pub fn load_default() -> Result<Self> {
        Self::load(config_dir()?.join("config.json"))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            log::warn!("failed to parse {}: {}", path.display(), e);
            ConfigError::InvalidFile {
                path: path.display().to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tab_width == 0 {
            return Err(ConfigError::InvalidValue {
                key: "tab_width".to_string(),
                value: self.tab_width.to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::new(self.encoding, self.line_break)
    }
}
