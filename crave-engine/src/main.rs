use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crave_engine::utils::format_money;
use crave_engine::{
    Catalog, OrderLifecycle, StaticCatalog, StaticProfileStore, TokioScheduler, print_banner,
    setup_environment,
};
use shared::error::{AppError, ErrorCode};
use shared::order::LifecyclePhase;

/// Usage: crave-engine [RESTAURANT_ID [ITEM_ID...]]
///
/// Defaults to one Meat Lovers Supreme from Tony's Pizza Palace.
fn parse_args(args: &[String]) -> anyhow::Result<(i64, Vec<i64>)> {
    let restaurant_id = match args.first() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid restaurant id: {}", raw))?,
        None => 1,
    };
    let mut item_ids = args[args.len().min(1)..]
        .iter()
        .map(|raw| {
            raw.parse()
                .with_context(|| format!("invalid item id: {}", raw))
        })
        .collect::<anyhow::Result<Vec<i64>>>()?;
    if args.is_empty() {
        item_ids.push(11);
    }
    Ok((restaurant_id, item_ids))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment()?;

    print_banner();
    tracing::info!("🍔 Crave engine starting...");

    // 2. 参考数据
    let catalog = StaticCatalog::demo();
    let profiles = Arc::new(StaticProfileStore::demo());
    let scheduler = Arc::new(TokioScheduler::try_current()?);
    let lifecycle = OrderLifecycle::new(profiles, scheduler, config.lifecycle());

    // 3. 组装购物车
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (restaurant_id, item_ids) = parse_args(&args)?;
    let restaurant = catalog.restaurant(restaurant_id).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::RestaurantNotFound,
            format!("Restaurant {} not found", restaurant_id),
        )
    })?;

    for item_id in item_ids {
        let item = catalog.menu_item(restaurant_id, item_id).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::MenuItemNotFound,
                format!("Item {} not on the {} menu", item_id, restaurant.name),
            )
            .with_detail("restaurant_id", restaurant_id)
        })?;
        lifecycle.add_item(item)?;
    }

    let cart = lifecycle.cart_snapshot();
    println!("{} {}", restaurant.image, restaurant.name);
    for line in &cart.lines {
        println!("  {} {:<30} {}", line.image(), line.name(), format_money(line.price()));
    }
    println!("  Subtotal      {}", format_money(cart.subtotal));
    println!("  Delivery fee  {}", format_money(restaurant.delivery_fee));
    println!(
        "  Total         {}",
        format_money(cart.subtotal + restaurant.delivery_fee)
    );

    // 4. 下单并等待揭晓
    let mut phase_rx = lifecycle.subscribe();
    lifecycle.place_order()?;

    if let Some(tracking) = lifecycle.tracking_info() {
        println!(
            "\nPreparing order #{}... estimated delivery: {}",
            tracking.order_no, tracking.estimated_delivery
        );
    }

    let wait = lifecycle.config().delivery_delay + Duration::from_secs(5);
    tokio::time::timeout(wait, phase_rx.wait_for(|p| *p == LifecyclePhase::Revealed))
        .await
        .context("timed out waiting for delivery")?
        .context("lifecycle dropped before reveal")?;

    // 5. 揭晓
    let reveal = lifecycle
        .reveal_data()
        .context("order revealed but no reveal data")?;
    let headline = reveal.headline();
    if !headline.is_empty() {
        println!("\n{}", headline);
    }
    println!("{}", serde_json::to_string_pretty(&reveal)?);

    lifecycle.reset();
    tracing::info!("Done");
    Ok(())
}
