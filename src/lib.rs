//! Quire - 手稿编译工具
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Metadata: 受限 YAML front matter 解析
//! - Manuscript Context: 章节/场景结构、扉页、手稿组装
//! - 字数统计
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ManuscriptSource, ManuscriptWriter）
//! - Commands: 编译手稿
//! - Queries: 字数报告
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文件系统读写
//! - Memory: 内存读写实现
//! - CLI: 命令行参数与报告输出

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
