//! ロギングシステム
//!
//! ライブラリ側は `log` クレートのマクロで出力し、バイナリ起動時に
//! ここの `Logger` を一度だけ登録する

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// デバッグ出力を有効化する環境変数
pub const DEBUG_ENV: &str = "CODEREADING_DEBUG";
/// ログの追記先ファイルを指定する環境変数
pub const LOG_FILE_ENV: &str = "CODEREADING_LOG_FILE";

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Trace,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}

/// ロガー
///
/// * 既定では stderr へ出力（stdout はスニペット出力に使う）
/// * ファイル出力を追加指定できる
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    output_stderr: bool,
    output_file: Option<PathBuf>,
}

impl Logger {
    /// デフォルト構築
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            output_stderr: true,
            output_file: None,
        }
    }

    /// 環境変数からレベルと出力先を決める
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var_os(DEBUG_ENV).is_some(),
            std::env::var_os(LOG_FILE_ENV).filter(|path| !path.is_empty()),
        )
    }

    fn from_vars(debug: bool, log_file: Option<std::ffi::OsString>) -> Self {
        let logger = if debug {
            Self::new(LogLevel::Debug)
        } else {
            Self::new(LogLevel::Warning)
        };
        match log_file {
            Some(path) => logger.with_file_output(path),
            None => logger,
        }
    }

    /// ログレベルを取得
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// ログレベルを変更
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// ファイル出力を設定
    pub fn with_file_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// 標準エラー出力を無効化（テスト向け）
    pub fn without_stderr(mut self) -> Self {
        self.output_stderr = false;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    fn write_line(&self, message: &str) {
        if self.output_stderr {
            eprintln!("{}", message);
        }

        if let Some(path) = &self.output_file {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{}", message);
            }
        }
    }

    /// 任意のログレベルでメッセージを出力
    pub fn emit(&self, level: LogLevel, target: &str, message: impl AsRef<str>) {
        if self.should_log(level) {
            self.write_line(&format!("{} [{}]: {}", level.tag(), target, message.as_ref()));
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.should_log(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        self.emit(
            LogLevel::from(record.level()),
            record.target(),
            record.args().to_string(),
        );
    }

    fn flush(&self) {}
}

/// グローバルロガーとして登録
///
/// 二回目以降の呼び出しはエラーを返す（`log` の制約）
pub fn init(logger: Logger) -> Result<(), log::SetLoggerError> {
    let filter = logger.level().to_filter();
    log::set_boxed_logger(Box::new(logger)).map(|()| log::set_max_level(filter))
}
