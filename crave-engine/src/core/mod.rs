//! 核心模块 - 配置与配置错误

pub mod config;

pub use config::{Config, ConfigError};
