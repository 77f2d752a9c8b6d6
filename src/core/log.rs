//! 日志系统模块
//!
//! 基于 `tracing` 提供结构化的日志记录功能。
//! 导入过程中的软异常（非三角形面、缺失的材质库等）都通过这里的宏输出，
//! 不会作为错误返回给调用者。
//!
//! # 使用示例
//!
//! ```no_run
//! use meshview::core::log;
//! use meshview::core::config::LogLevel;
//!
//! // 初始化日志系统
//! log::init_logger(LogLevel::Info, false, None)?;
//!
//! // 结构化日志
//! tracing::info!(meshes = 3, "Model imported");
//! # Ok::<(), meshview::core::MeshViewError>(())
//! ```

use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use std::path::Path;

use super::config::LogLevel;
use super::error::{MeshViewError, Result};

/// 初始化日志系统
///
/// 只能成功调用一次；重复初始化返回 `MeshViewError::Log`。
///
/// # 参数
///
/// * `level` - 日志级别
/// * `file_output` - 是否输出到文件
/// * `log_file_path` - 日志文件路径（可选，默认为 "meshview.log"）
pub fn init_logger(level: LogLevel, file_output: bool, log_file_path: Option<&str>) -> Result<()> {
    let filter = EnvFilter::default().add_directive(LevelFilter::from_level(level.into()).into());

    let result = if file_output {
        let log_path = log_file_path.unwrap_or("meshview.log");
        let path = Path::new(log_path);
        let directory = path.parent().unwrap_or(Path::new("."));
        let filename = path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("meshview.log");

        // 每天滚动
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            directory,
            filename
        );

        let console_layer = fmt::layer()
            .with_target(true)
            .with_ansi(true);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
    };

    result.map_err(|e| MeshViewError::Log(e.to_string()))
}

/// 导入管线日志 - Info 级别
#[macro_export]
macro_rules! import_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "meshview::import", $($arg)*)
    };
}

/// 导入管线日志 - Warn 级别
///
/// 用于软异常：记录后继续导入。
#[macro_export]
macro_rules! import_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "meshview::import", $($arg)*)
    };
}

/// 导入管线日志 - Debug 级别
#[macro_export]
macro_rules! import_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "meshview::import", $($arg)*)
    };
}

/// 日志级别转换
impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("WARN"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("verbose"), None);
        assert_eq!(LogLevel::Trace.as_str(), "trace");
    }
}
