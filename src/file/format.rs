//! ログファイルの書式（改行コードと文字エンコーディング）

use serde::{Deserialize, Serialize};

/// 改行コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBreak {
    Lf,
    CrLf,
    /// 実行環境の標準
    #[default]
    Platform,
}

impl LineBreak {
    pub fn as_str(self) -> &'static str {
        match self {
            LineBreak::Lf => "\n",
            LineBreak::CrLf => "\r\n",
            LineBreak::Platform => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }

    /// 設定値の文字列から解析
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "lf" => Some(LineBreak::Lf),
            "crlf" => Some(LineBreak::CrLf),
            "platform" => Some(LineBreak::Platform),
            _ => None,
        }
    }
}

/// ログファイルの文字エンコーディング
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "utf-16le")]
    Utf16Le,
    #[serde(rename = "utf-16be")]
    Utf16Be,
}

impl LogEncoding {
    /// 文字列をバイト列に変換（BOMは付けない）
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            LogEncoding::Utf8 => text.as_bytes().to_vec(),
            LogEncoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            LogEncoding::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Some(LogEncoding::Utf8),
            "utf-16le" => Some(LogEncoding::Utf16Le),
            "utf-16be" => Some(LogEncoding::Utf16Be),
            _ => None,
        }
    }
}

/// 追記時の書式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogFormat {
    pub encoding: LogEncoding,
    pub line_break: LineBreak,
}

impl LogFormat {
    pub fn new(encoding: LogEncoding, line_break: LineBreak) -> Self {
        Self { encoding, line_break }
    }
}
