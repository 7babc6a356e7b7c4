// src/log_file.rs

use crate::error::Result;
use crate::models::LogRecord;
use log::debug;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const LOG_FILE_NAME: &str = "execution_log.csv";

// 与 Python csv 模块默认方言一致
const LINE_TERMINATOR: &str = "\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// 文件原本不存在，已写入表头
    Created,
    Appended,
}

/// 日志文件路径，相对于当前工作目录
pub fn get_log_path() -> PathBuf {
    PathBuf::from(LOG_FILE_NAME)
}

/// 追加一条记录；仅当文件此前不存在时写入表头
///
/// 不校验已有文件的表头，表头不一致时依旧直接追加。
pub fn append_record(path: &Path, record: &LogRecord) -> Result<AppendOutcome> {
    let file_exists = path.exists();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);

    if !file_exists {
        debug!("creating {} with header", path.display());
        writer.write_all(LogRecord::HEADER.as_bytes())?;
        writer.write_all(LINE_TERMINATOR.as_bytes())?;
    }

    writer.write_all(record.to_csv_row().as_bytes())?;
    writer.write_all(LINE_TERMINATOR.as_bytes())?;
    writer.flush()?;

    debug!("appended row to {}", path.display());
    Ok(if file_exists {
        AppendOutcome::Appended
    } else {
        AppendOutcome::Created
    })
}
