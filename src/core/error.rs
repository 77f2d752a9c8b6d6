//! 错误处理模块
//!
//! 定义了导入管线中使用的统一错误类型。
//!
//! # 设计原则
//!
//! - 每次调用返回独立的 `Result`，不保留跨调用的"最近错误"状态
//! - 只有文件无法读取或无法解析属于硬错误
//! - 单个面/顶点的异常属于软异常，只记录日志，不进入错误类型
//! - 支持错误链（error source）

use std::fmt;
use std::path::PathBuf;

/// 引擎统一的 Result 类型
pub type Result<T> = std::result::Result<T, MeshViewError>;

/// 导入操作的 Result 类型
pub type ImportResult<T> = std::result::Result<T, ImportError>;

/// MeshView 的顶层错误类型
#[derive(Debug)]
pub enum MeshViewError {
    /// 配置错误
    Config(ConfigError),

    /// 模型导入错误
    Import(ImportError),

    /// IO 错误
    Io(std::io::Error),

    /// 日志系统错误
    Log(String),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 模型导入相关的错误
#[derive(Debug)]
pub enum ImportError {
    /// 文件不存在
    FileNotFound(PathBuf),

    /// 文件存在但读取失败
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// OBJ 解析失败
    Parse { path: PathBuf, message: String },

    /// 不支持的文件格式
    UnsupportedFormat(String),

    /// 批量导入在某个文件处中止
    Batch {
        path: PathBuf,
        source: Box<ImportError>,
    },

    /// 模型库中没有该名称的模型
    NotFound(String),
}

impl ImportError {
    /// 返回导致失败的文件路径（如果有）
    ///
    /// 对批量导入错误，返回中止处的那个文件。
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ImportError::FileNotFound(path) => Some(path),
            ImportError::Io { path, .. } => Some(path),
            ImportError::Parse { path, .. } => Some(path),
            ImportError::Batch { path, .. } => Some(path),
            ImportError::UnsupportedFormat(_) | ImportError::NotFound(_) => None,
        }
    }
}

impl fmt::Display for MeshViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshViewError::Config(e) => write!(f, "Configuration error: {}", e),
            MeshViewError::Import(e) => write!(f, "Import error: {}", e),
            MeshViewError::Io(e) => write!(f, "IO error: {}", e),
            MeshViewError::Log(msg) => write!(f, "Log error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::FileNotFound(path) => write!(f, "Model file not found: {}", path.display()),
            ImportError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            ImportError::Parse { path, message } => {
                write!(f, "Failed to load OBJ file {}: {}", path.display(), message)
            }
            ImportError::UnsupportedFormat(msg) => write!(f, "Unsupported model format: {}", msg),
            ImportError::Batch { path, source } => {
                write!(f, "Failed to load model: {} - {}", path.display(), source)
            }
            ImportError::NotFound(name) => write!(f, "Model '{}' is not loaded", name),
        }
    }
}

impl std::error::Error for MeshViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshViewError::Io(e) => Some(e),
            MeshViewError::Import(e) => Some(e),
            MeshViewError::Config(e) => Some(e),
            MeshViewError::Log(_) => None,
        }
    }
}

impl std::error::Error for ConfigError {}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io { source, .. } => Some(source),
            ImportError::Batch { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

// 实现 From trait 以便于错误转换
impl From<std::io::Error> for MeshViewError {
    fn from(err: std::io::Error) -> Self {
        MeshViewError::Io(err)
    }
}

impl From<ConfigError> for MeshViewError {
    fn from(err: ConfigError) -> Self {
        MeshViewError::Config(err)
    }
}

impl From<ImportError> for MeshViewError {
    fn from(err: ImportError) -> Self {
        MeshViewError::Import(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_batch_error_names_failing_path() {
        let err = ImportError::Batch {
            path: PathBuf::from("missing.obj"),
            source: Box::new(ImportError::FileNotFound(PathBuf::from("missing.obj"))),
        };

        assert_eq!(err.path(), Some(&PathBuf::from("missing.obj")));
        assert!(err.to_string().contains("missing.obj"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_import_error_converts_into_top_level() {
        let err: MeshViewError = ImportError::UnsupportedFormat(".fbx".to_string()).into();
        assert!(matches!(err, MeshViewError::Import(_)));
        assert!(err.to_string().starts_with("Import error"));
    }
}
