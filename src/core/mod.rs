//! 核心功能模块
//!
//! 本模块提供导入管线之外的基础设施：配置管理、日志系统、错误处理，
//! 以及按名称持有已导入模型的模型库。
//! 这些模块独立于具体的图形 API。
//!
//! # 模块组织
//!
//! - `config`：配置管理，支持从 TOML 文件加载导入选项与日志设置
//! - `log`：日志系统，基于 `tracing`
//! - `error`：错误处理，定义统一的错误类型
//! - `library`：模型库，按名称管理已导入的模型

pub mod config;
pub mod error;
pub mod library;
pub mod log;

// 重新导出常用类型，方便使用
pub use config::{Config, ImportConfig, LogLevel};
pub use error::{ImportError, ImportResult, MeshViewError, Result};
pub use library::ModelLibrary;
