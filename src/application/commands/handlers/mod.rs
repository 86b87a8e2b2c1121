//! Command Handlers 实现

mod compile_handlers;

pub use compile_handlers::*;
