//! 配置管理模块
//!
//! 提供导入选项与日志设置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (config.toml)
//!
//! ```toml
//! [import]
//! generate_normals = true
//! generate_tangents = false
//! flip_uvs = false
//! weld_vertices = false
//!
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};

/// 引擎配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 模型导入配置
    #[serde(default)]
    pub import: ImportConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 模型导入配置
///
/// 与 [`crate::geometry::loaders::ImportOptions`] 一一对应。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// 源数据缺少法线时是否重建
    #[serde(default = "default_generate_normals")]
    pub generate_normals: bool,

    /// 是否计算切线
    #[serde(default)]
    pub generate_tangents: bool,

    /// 是否翻转纹理坐标 V 分量
    #[serde(default)]
    pub flip_uvs: bool,

    /// 是否合并完全相同的顶点
    #[serde(default)]
    pub weld_vertices: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// 从字符串解析日志级别（不区分大小写）
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    /// `EnvFilter` 使用的指令字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

// 默认值函数
fn default_generate_normals() -> bool { true }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "meshview.log".to_string() }

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            generate_normals: default_generate_normals(),
            generate_tangents: false,
            flip_uvs: false,
            weld_vertices: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use meshview::core::Config;
    ///
    /// let config = Config::from_file("config.toml")?;
    /// # Ok::<(), meshview::core::MeshViewError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--flip-uvs`: 翻转纹理坐标 V 分量
    /// - `--tangents`: 计算切线
    /// - `--no-normals`: 不重建缺失的法线
    /// - `--weld`: 合并完全相同的顶点
    /// - `--log-level <value>`: 设置日志级别
    ///
    /// 返回未被识别的参数（通常是模型路径），顺序保持不变。
    pub fn apply_args<I>(&mut self, args: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut rest = Vec::new();
        let mut args = args.into_iter().map(|s| s.as_ref().to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--flip-uvs" => self.import.flip_uvs = true,
                "--tangents" => self.import.generate_tangents = true,
                "--no-normals" => self.import.generate_normals = false,
                "--weld" => self.import.weld_vertices = true,
                "--log-level" => {
                    if let Some(level) = args.next().as_deref().and_then(LogLevel::parse) {
                        self.logging.level = level;
                    }
                }
                _ => rest.push(arg),
            }
        }

        rest
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.logging.file_output && self.logging.log_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.log_file".to_string(),
                reason: "Log file path must not be empty when file output is enabled".to_string(),
            }.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.import.generate_normals);
        assert!(!config.import.generate_tangents);
        assert!(!config.import.flip_uvs);
        assert!(!config.import.weld_vertices);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[import]\nflip_uvs = true\n").unwrap();
        assert!(config.import.flip_uvs);
        assert!(config.import.generate_normals);
        assert_eq!(config.logging.log_file, "meshview.log");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = Config::from_toml_str("[import\n");
        assert!(matches!(
            result,
            Err(crate::core::error::MeshViewError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        let rest = config.apply_args([
            "--flip-uvs", "a.obj", "--tangents", "--log-level", "debug", "b.obj", "--no-normals",
        ]);

        assert_eq!(rest, vec!["a.obj".to_string(), "b.obj".to_string()]);
        assert!(config.import.flip_uvs);
        assert!(config.import.generate_tangents);
        assert!(!config.import.generate_normals);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.logging.file_output = true;
        config.logging.log_file = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
