use std::time::Duration;

use thiserror::Error;

use crate::orders::LifecycleConfig;

/// Default simulated delivery delay before the reveal (毫秒)
pub const DEFAULT_DELIVERY_DELAY_MS: u64 = 4000;

/// Upper bound for the simulated delivery delay (10 分钟)
pub const MAX_DELIVERY_DELAY_MS: u64 = 600_000;

/// 配置错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown environment: {0} (expected development | staging | production)")]
    UnknownEnvironment(String),

    #[error("Delivery delay too long: {0}ms (max {max}ms)", max = MAX_DELIVERY_DELAY_MS)]
    DeliveryDelayTooLong(u64),
}

/// 引擎配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DELIVERY_DELAY_MS | 4000 | 模拟配送时长(毫秒)，之后进入揭晓阶段 |
/// | ALLOW_EMPTY_ORDER | false | 允许空购物车下单（旧行为） |
/// | ESTIMATED_DELIVERY | 25-35 minutes | 追踪页面显示的预计送达时间 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (unset) | 日志目录，设置后按天滚动写文件 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DELIVERY_DELAY_MS=1000 LOG_LEVEL=debug cargo run -p crave-engine -- 2 21 23
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 模拟配送时长 (毫秒)
    pub delivery_delay_ms: u64,
    /// 是否允许空购物车下单
    pub allow_empty_order: bool,
    /// 预计送达时间文案
    pub estimated_delivery: String,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            delivery_delay_ms: std::env::var("DELIVERY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DELIVERY_DELAY_MS),
            allow_empty_order: std::env::var("ALLOW_EMPTY_ORDER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            estimated_delivery: std::env::var("ESTIMATED_DELIVERY")
                .unwrap_or_else(|_| "25-35 minutes".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(
            self.environment.as_str(),
            "development" | "staging" | "production"
        ) {
            return Err(ConfigError::UnknownEnvironment(self.environment.clone()));
        }
        if self.delivery_delay_ms > MAX_DELIVERY_DELAY_MS {
            return Err(ConfigError::DeliveryDelayTooLong(self.delivery_delay_ms));
        }
        Ok(())
    }

    /// 生命周期控制器配置
    pub fn lifecycle(&self) -> LifecycleConfig {
        LifecycleConfig {
            delivery_delay: Duration::from_millis(self.delivery_delay_ms),
            allow_empty_order: self.allow_empty_order,
            estimated_delivery: self.estimated_delivery.clone(),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delivery_delay_ms: DEFAULT_DELIVERY_DELAY_MS,
            allow_empty_order: false,
            estimated_delivery: "25-35 minutes".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            environment: "development".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_lifecycle_config() {
        let config = Config {
            delivery_delay_ms: 1500,
            allow_empty_order: true,
            ..Config::default()
        };
        let lifecycle = config.lifecycle();
        assert_eq!(lifecycle.delivery_delay, Duration::from_millis(1500));
        assert!(lifecycle.allow_empty_order);
        assert_eq!(lifecycle.estimated_delivery, "25-35 minutes");
    }

    #[test]
    fn test_validate_rejects_unknown_environment() {
        let config = Config {
            environment: "qa".into(),
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownEnvironment("qa".into()))
        );
    }

    #[test]
    fn test_validate_rejects_huge_delay() {
        let config = Config {
            delivery_delay_ms: MAX_DELIVERY_DELAY_MS + 1,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DeliveryDelayTooLong(_))
        ));
    }
}
