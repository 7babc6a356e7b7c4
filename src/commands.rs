// src/commands.rs

use crate::error::Result;
use crate::log_file::{self, AppendOutcome};
use crate::models::LogRecord;
use log::debug;

/// 打印问候语，并把当前时间追加到执行日志
pub fn handle_run() -> Result<()> {
    let record = LogRecord::now();

    println!("Hello World");
    println!("Current timestamp: {}", record.timestamp);

    let path = log_file::get_log_path();
    let outcome = log_file::append_record(&path, &record)?;
    if outcome == AppendOutcome::Created {
        debug!("new log file: {}", path.display());
    }

    println!("Data logged to {}", path.display());
    println!(
        "Date: {}/{}/{}, Git action complete: {}",
        record.day, record.month, record.year, record.git_action_complete
    );
    Ok(())
}
