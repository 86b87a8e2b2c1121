//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：编译并写出手稿

mod compile_commands;

pub mod handlers;

pub use compile_commands::*;
