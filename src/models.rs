// src/models.rs

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// 每次运行追加到 CSV 中的一条记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String, // YYYY-MM-DD HH:MM:SS，本地时间
    pub day: String,
    pub month: String,
    pub year: String, // 两位年份
    pub git_action_complete: String,
}

impl LogRecord {
    pub const HEADER: &'static str = "timestamp,dd,mm,yy,git_action_complete";
    pub const GIT_ACTION_COMPLETE: &'static str = "yes";

    /// 使用当前本地时间构造记录
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime<Tz>(dt: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        LogRecord {
            timestamp: dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            day: dt.format("%d").to_string(),
            month: dt.format("%m").to_string(),
            year: dt.format("%y").to_string(),
            git_action_complete: Self::GIT_ACTION_COMPLETE.to_string(),
        }
    }

    /// 按表头顺序渲染为一行 CSV（不含换行符）
    pub fn to_csv_row(&self) -> String {
        [
            self.timestamp.as_str(),
            self.day.as_str(),
            self.month.as_str(),
            self.year.as_str(),
            self.git_action_complete.as_str(),
        ]
        .join(",")
    }
}
