//! ログファイルへの追記
//!
//! 既存内容は変更せず末尾にだけ書き込む。親ディレクトリは必要に応じて作成する。

use crate::error::{file::Result, FileError};
use crate::file::format::LogFormat;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// ファイルが存在するかチェック
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_file()
}

/// 親ディレクトリを作成
pub fn create_parent_dirs<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };

    if fs::create_dir_all(parent).is_err() || !parent.is_dir() {
        return Err(FileError::CreateDirectory {
            path: parent.display().to_string(),
        });
    }
    Ok(())
}

/// 各行の後に改行を付けてファイル末尾に追記
pub fn append_lines<P: AsRef<Path>>(path: P, lines: &[String], format: LogFormat) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(FileError::InvalidPath {
            path: path.display().to_string(),
        });
    }
    create_parent_dirs(path)?;

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    let line_break = format.encoding.encode(format.line_break.as_str());
    for line in lines {
        writer.write_all(&format.encoding.encode(line))?;
        writer.write_all(&line_break)?;
    }
    writer.flush()?;

    log::info!("appended {} lines to {}", lines.len(), path.display());
    Ok(())
}
