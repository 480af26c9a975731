pub mod logger;
pub mod money;

pub use money::{format_money, money, round_money};
