//! コマンドライン処理
//!
//! 引数の解析と、スニペット取得からログ追記までの一連の流れ

use crate::buffer::{Buffer, Span};
use crate::config::{Config, SettingsStore};
use crate::error::{CodeReadingError, FileError, RegionError, Result};
use crate::file::{append_lines, expand_path, file_exists};
use crate::snippet::SnippetSource;
use std::path::PathBuf;

pub const USAGE: &str = "\
usage: codereading <FILE> [options]

options:
  --offset N          selection start (character offset, default 0)
  --length N          selection length in characters (default 0)
  --lines A:B         select lines A through B (1-based, inclusive)
  --tab-width W       tab width (default from config.json)
  --log PATH          log file to append to (default: last used)
  --message TEXT      comment placed above the snippet
  --create            create the log file if it does not exist
  --dry-run           print the entry instead of appending it
  --config-dir DIR    directory holding config.json and settings.json
  --verbose           debug output on stderr
  -h, --help          show this help
  -V, --version       show version";

/// 選択範囲の指定方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Offsets { offset: usize, length: usize },
    /// 1始まり・両端を含む行範囲
    Lines { first: usize, last: usize },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Offsets { offset: 0, length: 0 }
    }
}

impl Selection {
    /// バッファ上の範囲に変換
    pub fn resolve(&self, buffer: &Buffer) -> Result<Span> {
        match *self {
            Selection::Offsets { offset, length } => Ok(Span::new(offset, length)),
            Selection::Lines { first, last } => {
                if first == 0 || last < first {
                    return Err(RegionError::InvalidArgument {
                        name: "lines",
                        value: format!("{}:{}", first, last),
                    }
                    .into());
                }
                let start = buffer.line_info(first - 1)?;
                let end = buffer.line_info(last - 1)?;
                Ok(Span::new(start.offset, end.offset + end.length - start.offset))
            }
        }
    }
}

/// 解析済みのコマンドライン
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub file: Option<PathBuf>,
    pub selection: Selection,
    pub tab_width: Option<usize>,
    pub log_file: Option<String>,
    pub message: Option<String>,
    pub create: bool,
    pub dry_run: bool,
    pub config_dir: Option<String>,
    pub verbose: bool,
    pub help: bool,
    pub version: bool,
}

impl CliOptions {
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut options = CliOptions::default();
        let mut offset: Option<usize> = None;
        let mut length: Option<usize> = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => options.help = true,
                "-V" | "--version" => options.version = true,
                "--create" => options.create = true,
                "--dry-run" => options.dry_run = true,
                "--verbose" => options.verbose = true,
                "--offset" => offset = Some(parse_count("--offset", iter.next())?),
                "--length" => length = Some(parse_count("--length", iter.next())?),
                "--lines" => {
                    let (first, last) = parse_line_range(value_of("--lines", iter.next())?)?;
                    options.selection = Selection::Lines { first, last };
                }
                "--tab-width" => {
                    options.tab_width = Some(parse_tab_width(value_of("--tab-width", iter.next())?)?)
                }
                "--log" => options.log_file = Some(value_of("--log", iter.next())?.to_string()),
                "--message" => {
                    options.message = Some(value_of("--message", iter.next())?.to_string())
                }
                "--config-dir" => {
                    options.config_dir = Some(value_of("--config-dir", iter.next())?.to_string())
                }
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(CodeReadingError::Application(format!(
                        "unknown option: {}",
                        other
                    )));
                }
                other => {
                    if options.file.is_some() {
                        return Err(CodeReadingError::Application(format!(
                            "unexpected argument: {}",
                            other
                        )));
                    }
                    options.file = Some(PathBuf::from(other));
                }
            }
        }

        if offset.is_some() || length.is_some() {
            if matches!(options.selection, Selection::Lines { .. }) {
                return Err(CodeReadingError::Application(
                    "--lines cannot be combined with --offset/--length".to_string(),
                ));
            }
            options.selection = Selection::Offsets {
                offset: offset.unwrap_or(0),
                length: length.unwrap_or(0),
            };
        }

        if options.file.is_none() && !options.help && !options.version {
            return Err(CodeReadingError::Application("missing <FILE> argument".to_string()));
        }
        Ok(options)
    }
}

fn value_of<'a>(name: &str, value: Option<&'a String>) -> Result<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| CodeReadingError::Application(format!("{} requires a value", name)))
}

fn parse_count(name: &str, value: Option<&String>) -> Result<usize> {
    let value = value_of(name, value)?;
    value
        .parse()
        .map_err(|_| CodeReadingError::Application(format!("{} expects a number: {}", name, value)))
}

fn parse_tab_width(value: &str) -> Result<usize> {
    match value.parse::<i64>() {
        Ok(width) if width > 0 => usize::try_from(width).map_err(|_| invalid_tab_width(value)),
        _ => Err(invalid_tab_width(value)),
    }
}

fn invalid_tab_width(value: &str) -> CodeReadingError {
    RegionError::InvalidArgument {
        name: "tab_width",
        value: value.to_string(),
    }
    .into()
}

fn parse_line_range(value: &str) -> Result<(usize, usize)> {
    let invalid = || {
        CodeReadingError::from(RegionError::InvalidArgument {
            name: "lines",
            value: value.to_string(),
        })
    };
    let (first, last) = match value.split_once(':') {
        Some((first, last)) => (first, last),
        None => (value, value),
    };
    let first: usize = first.trim().parse().map_err(|_| invalid())?;
    let last: usize = last.trim().parse().map_err(|_| invalid())?;
    Ok((first, last))
}

/// 実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// ログファイルに追記した
    Appended { log_file: PathBuf, lines: usize },
    /// `--dry-run` で整形結果だけを返した
    Preview(String),
}

/// スニペットを整形してログファイルに追記する
///
/// 追記に失敗してもログファイルのパスは設定に記録する。
pub fn execute(options: &CliOptions, config: &Config, store: &SettingsStore) -> Result<Outcome> {
    let file = options
        .file
        .as_ref()
        .ok_or_else(|| CodeReadingError::Application("missing <FILE> argument".to_string()))?;
    if !file_exists(file) {
        return Err(FileError::NotFound {
            path: file.display().to_string(),
        }
        .into());
    }

    let text = std::fs::read_to_string(file).map_err(|e| FileError::Read {
        path: file.display().to_string(),
        message: e.to_string(),
    })?;
    let buffer = Buffer::new(&text);
    let span = options.selection.resolve(&buffer)?;
    let tab_width = options.tab_width.unwrap_or(config.tab_width);
    log::debug!("capturing {} from {} (tab width {})", span, file.display(), tab_width);

    let source = SnippetSource::new(Some(file.clone()), buffer, Some(span));
    let mut entry = source.template(tab_width)?;
    if let Some(message) = &options.message {
        entry = entry.with_comment(message);
    }

    if options.dry_run {
        return Ok(Outcome::Preview(entry.render(config.line_break)));
    }

    let mut settings = store.load()?;
    let log_file = match &options.log_file {
        Some(path) => expand_path(path)?,
        None => settings.last_log_file().ok_or_else(|| {
            CodeReadingError::Config(crate::error::ConfigError::MissingRequired {
                key: "--log".to_string(),
            })
        })?,
    };

    if !file_exists(&log_file) && !options.create {
        return Err(FileError::NotFound {
            path: format!("{} (pass --create to start a new log)", log_file.display()),
        }
        .into());
    }

    let result = append_lines(&log_file, entry.lines(), config.log_format());
    settings.remember_log_file(&log_file);
    let saved = store.save(&settings);
    // 追記の失敗を設定保存の失敗より優先して返す
    result?;
    saved?;

    Ok(Outcome::Appended {
        log_file,
        lines: entry.lines().len(),
    })
}
