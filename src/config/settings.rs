//! 呼び出し間で保持する設定値
//!
//! セクションとキーで引く文字列マップを JSON で保存する。
//! 起動時に一度読み込み、呼び出し側が明示的に受け渡す（グローバル状態は持たない）。

use crate::error::{ConfigError, FileError, Result};
use crate::file::create_parent_dirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// スニペット記録のセクション名
pub const SECTION_LOG_SNIPPET: &str = "LogSnippet";
/// 最後に使ったログファイルのキー
pub const KEY_LOG_FILE: &str = "logfile";

/// セクション付きの文字列設定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Settings {
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|values| values.get(key))
            .map(String::as_str)
    }

    pub fn put(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// 最後に使ったログファイル
    pub fn last_log_file(&self) -> Option<PathBuf> {
        self.get(SECTION_LOG_SNIPPET, KEY_LOG_FILE).map(PathBuf::from)
    }

    pub fn remember_log_file<P: AsRef<Path>>(&mut self, path: P) {
        let value = path.as_ref().to_string_lossy().into_owned();
        self.put(SECTION_LOG_SNIPPET, KEY_LOG_FILE, value);
    }
}

/// 設定ファイルの読み書き
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// `<config_dir>/codereading/settings.json`
    pub fn open_default() -> Result<Self> {
        let dir = super::config_dir()?;
        Ok(Self::new(dir.join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルがなければ空の設定を返す
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!("no settings at {}, starting empty", self.path.display());
            return Ok(Settings::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            log::warn!("failed to parse {}: {}", self.path.display(), e);
            ConfigError::InvalidFile {
                path: self.path.display().to_string(),
            }
            .into()
        })
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        create_parent_dirs(&self.path)?;
        let json = serde_json::to_string_pretty(settings).map_err(|e| FileError::Io {
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
