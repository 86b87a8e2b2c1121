//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（quire.toml）
//! 3. 默认值
//!
//! 命令行参数在此之上由调用方覆盖。

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["quire", "quire.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `QUIRE_SOURCE__ROOT=drafts/novel`
/// - `QUIRE_COMPILE__SCENE_SEPARATOR=hr`
/// - `QUIRE_COMPILE__TITLE_PAGE=false`
/// - `QUIRE_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，指定时文件必须存在；为 None 则搜索默认文件
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("source.root", "manuscript")?
        .set_default("source.extension", "md")?
        .set_default("source.header_file", "header_material")?
        .set_default("output.path", "output/full_manuscript.md")?
        .set_default("compile.include_header", true)?
        .set_default("compile.title_page", true)?
        .set_default("compile.chapter_heading", "title")?
        .set_default("compile.scene_separator", "em")?
        .set_default("compile.chapter_break", "hr")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 前缀: QUIRE_
    // 层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix("QUIRE")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.source.extension.is_empty() {
        return Err(ConfigError::ValidationError(
            "Scene extension cannot be empty".to_string(),
        ));
    }

    if config.source.extension.starts_with('.') {
        return Err(ConfigError::ValidationError(format!(
            "Scene extension must not start with a dot: {}",
            config.source.extension
        )));
    }

    if config.source.header_file.is_empty() {
        return Err(ConfigError::ValidationError(
            "Header file name cannot be empty".to_string(),
        ));
    }

    if config.output.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（debug 级别）
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Configuration ===");
    tracing::debug!("Manuscript Root: {}", config.source.root.display());
    tracing::debug!("Scene Extension: {}", config.source.extension);
    tracing::debug!("Header File: {}", config.source.header_file);
    tracing::debug!("Output: {}", config.output.path.display());
    tracing::debug!(
        "Header Body: {}, Title Page: {}",
        config.compile.include_header,
        config.compile.title_page
    );
    tracing::debug!(
        "Chapter Heading: {}, Scene Separator: {}, Chapter Break: {}",
        config.compile.chapter_heading.as_str(),
        config.compile.scene_separator.as_str(),
        config.compile.chapter_break.as_str()
    );
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("=====================");
}
