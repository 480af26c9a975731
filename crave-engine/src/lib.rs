//! Crave Engine - 订单生命周期与隐秘替换引擎
//!
//! # 架构概述
//!
//! - **目录** (`catalog`): 静态餐厅与菜单数据
//! - **购物车** (`cart`): 有序的购物车行与小计
//! - **用户档案** (`profiles`): 下单人与交换对象的隐藏 karma
//! - **替换引擎** (`substitution`): (购物车, karma) → 实际配送订单
//! - **订单生命周期** (`orders`): Idle → Tracking → Revealed 状态机与揭晓计时器
//!
//! # 模块结构
//!
//! ```text
//! crave-engine/src/
//! ├── core/          # 配置
//! ├── utils/         # 日志、金额
//! ├── catalog/       # 餐厅与菜单
//! ├── cart/          # 购物车
//! ├── profiles/      # 用户档案
//! ├── substitution/  # 替换引擎
//! └── orders/        # 生命周期控制器、调度器、揭晓数据
//! ```

pub mod cart;
pub mod catalog;
pub mod core;
pub mod orders;
pub mod profiles;
pub mod substitution;
pub mod utils;

// Re-export 公共类型
pub use cart::Cart;
pub use catalog::{Catalog, StaticCatalog};
pub use crate::core::{Config, ConfigError};
pub use orders::{
    DeliveryScheduler, LifecycleConfig, ManualScheduler, OrderError, OrderLifecycle, RevealData,
    SwapSummary, TimerHandle, TokioScheduler,
};
pub use profiles::{ProfileStore, StaticProfileStore};
pub use substitution::{KarmaBand, SubstitutedLine, SubstitutionEngine, substitute};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env、读取并校验配置、初始化日志
pub fn setup_environment() -> Result<Config, ConfigError> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.validate()?;

    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
   ______
  / ____/________ __   _____
 / /   / ___/ __ `/ | / / _ \
/ /___/ /  / /_/ /| |/ /  __/
\____/_/   \__,_/ |___/\___/
    "#
    );
}
