use super::*;
use crate::catalog::{Catalog, StaticCatalog};
use crate::profiles::{ProfileStore, StaticProfileStore};
use crate::substitution::{HEALTHY_SUBSTITUTES, INDULGENT_SUBSTITUTES, KarmaBand};
use crate::utils::money;
use shared::models::MenuItem;
use shared::order::LifecyclePhase;
use std::sync::Arc;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(4000);

fn create_lifecycle(karma: i64) -> (OrderLifecycle, Arc<ManualScheduler>) {
    create_lifecycle_with(karma, LifecycleConfig::default())
}

fn create_lifecycle_with(
    karma: i64,
    config: LifecycleConfig,
) -> (OrderLifecycle, Arc<ManualScheduler>) {
    let scheduler = Arc::new(ManualScheduler::new());
    let profiles = Arc::new(StaticProfileStore::demo().with_requester_karma(karma));
    let lifecycle = OrderLifecycle::new(profiles, scheduler.clone(), config);
    (lifecycle, scheduler)
}

fn item(restaurant_id: i64, item_id: i64) -> MenuItem {
    StaticCatalog::demo()
        .menu_item(restaurant_id, item_id)
        .unwrap()
}

fn meat_lovers() -> MenuItem {
    item(1, 11)
}

fn burger() -> MenuItem {
    item(2, 21)
}

// ========================================================================
// Cart editing
// ========================================================================

#[test]
fn test_starts_idle_with_empty_cart() {
    let (lifecycle, _) = create_lifecycle(-47);
    assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);
    let cart = lifecycle.cart_snapshot();
    assert!(cart.lines.is_empty());
    assert_eq!(cart.subtotal, money(0));
    assert!(lifecycle.reveal_data().is_none());
    assert!(lifecycle.tracking_info().is_none());
}

#[test]
fn test_add_and_remove_while_idle() {
    let (lifecycle, _) = create_lifecycle(-47);
    let a = lifecycle.add_item(meat_lovers()).unwrap();
    let b = lifecycle.add_item(burger()).unwrap();
    assert_eq!(lifecycle.cart_snapshot().subtotal, money(2499 + 1899));

    lifecycle.remove_item(&a.line_id).unwrap();
    let cart = lifecycle.cart_snapshot();
    assert_eq!(cart.item_count, 1);
    assert_eq!(cart.lines[0].line_id, b.line_id);
    assert_eq!(cart.subtotal, money(1899));

    // Unknown id is a no-op
    lifecycle.remove_item("missing").unwrap();
    assert_eq!(lifecycle.cart_snapshot().item_count, 1);
}

#[test]
fn test_cart_frozen_after_placement() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    let line = lifecycle.add_item(meat_lovers()).unwrap();
    lifecycle.place_order().unwrap();

    let err = lifecycle.add_item(burger()).unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidPhase {
            action: "add item",
            phase: LifecyclePhase::Tracking,
        }
    );
    assert!(matches!(
        lifecycle.remove_item(&line.line_id),
        Err(OrderError::InvalidPhase { .. })
    ));
    assert_eq!(lifecycle.cart_snapshot().item_count, 1);

    scheduler.advance(DELAY);
    assert!(matches!(
        lifecycle.add_item(burger()),
        Err(OrderError::InvalidPhase {
            phase: LifecyclePhase::Revealed,
            ..
        })
    ));
}

// ========================================================================
// Placement
// ========================================================================

#[test]
fn test_empty_placement_rejected() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    assert_eq!(lifecycle.place_order(), Err(OrderError::EmptyCart));
    assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);
    assert_eq!(scheduler.pending(), 0);

    // Still usable afterwards
    lifecycle.add_item(burger()).unwrap();
    assert!(lifecycle.place_order().is_ok());
}

#[test]
fn test_empty_placement_allowed_in_legacy_mode() {
    let config = LifecycleConfig {
        allow_empty_order: true,
        ..LifecycleConfig::default()
    };
    let (lifecycle, scheduler) = create_lifecycle_with(-47, config);
    lifecycle.place_order().unwrap();
    scheduler.advance(DELAY);

    let reveal = lifecycle.reveal_data().unwrap();
    assert!(reveal.substituted_order.is_empty());
    assert!(reveal.original_cart.is_empty());
}

#[test]
fn test_place_twice_rejected() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    lifecycle.add_item(meat_lovers()).unwrap();
    lifecycle.place_order().unwrap();

    assert!(matches!(
        lifecycle.place_order(),
        Err(OrderError::InvalidPhase {
            action: "place order",
            ..
        })
    ));
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn test_tracking_hides_delivered_items() {
    let (lifecycle, _) = create_lifecycle(-47);
    lifecycle.add_item(meat_lovers()).unwrap();
    lifecycle.add_item(burger()).unwrap();
    let order_no = lifecycle.place_order().unwrap();

    assert_eq!(lifecycle.phase(), LifecyclePhase::Tracking);
    assert!(lifecycle.reveal_data().is_none());

    let tracking = lifecycle.tracking_info().unwrap();
    assert_eq!(tracking.order_no, order_no);
    assert_eq!(tracking.line_count, 2);
    assert_eq!(tracking.estimated_delivery, "25-35 minutes");
}

#[test]
fn test_order_numbers_increase() {
    let (lifecycle, _) = create_lifecycle(10);
    lifecycle.add_item(burger()).unwrap();
    let first = lifecycle.place_order().unwrap();
    lifecycle.reset();
    lifecycle.add_item(burger()).unwrap();
    let second = lifecycle.place_order().unwrap();
    assert!(second > first);
}

// ========================================================================
// Reveal
// ========================================================================

#[test]
fn test_reveal_after_delay() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    lifecycle.add_item(meat_lovers()).unwrap();
    let order_no = lifecycle.place_order().unwrap();

    scheduler.advance(DELAY - Duration::from_millis(1));
    assert_eq!(lifecycle.phase(), LifecyclePhase::Tracking);

    assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
    assert_eq!(lifecycle.phase(), LifecyclePhase::Revealed);
    assert!(lifecycle.tracking_info().is_none());

    let reveal = lifecycle.reveal_data().unwrap();
    assert_eq!(reveal.order_no, order_no);
    assert_eq!(reveal.band, KarmaBand::Intervention);
    assert_eq!(reveal.original_cart.len(), 1);
    assert_eq!(reveal.original_cart[0].name(), "Meat Lovers Supreme");
    assert_eq!(reveal.substituted_order.len(), 1);
    assert_eq!(
        reveal.substituted_order[0].name(),
        HEALTHY_SUBSTITUTES[0].name
    );
    assert_eq!(reveal.requester.name, "Dara Williams");
    assert_eq!(reveal.partner.name, "Josh Daniels");
    assert!(reveal.headline().contains("Josh Daniels"));
}

#[test]
fn test_reveal_summary() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    for _ in 0..4 {
        lifecycle.add_item(burger()).unwrap();
    }
    lifecycle.place_order().unwrap();
    scheduler.advance(DELAY);

    let summary = lifecycle.reveal_data().unwrap().summary;
    assert!(summary.swapped);
    assert_eq!(summary.original_total, money(1899 * 4));
    assert_eq!(summary.delivered_total, money(1299 + 899 + 1499));
    assert_eq!(summary.original_calories, 890 * 4);
    assert_eq!(summary.delivered_calories, 180 + 140 + 200);
    assert_eq!(summary.items_missing, 1);
}

#[test]
fn test_indulgence_flow() {
    let (lifecycle, scheduler) = create_lifecycle(82);
    lifecycle.add_item(item(3, 31)).unwrap();
    lifecycle.add_item(item(3, 32)).unwrap();
    lifecycle.add_item(item(3, 33)).unwrap();
    lifecycle.place_order().unwrap();
    scheduler.advance(DELAY);

    let reveal = lifecycle.reveal_data().unwrap();
    let names: Vec<_> = reveal.substituted_order.iter().map(|l| l.name()).collect();
    let expected: Vec<_> = INDULGENT_SUBSTITUTES.iter().map(|e| e.name).collect();
    assert_eq!(names, expected);
    assert_eq!(reveal.summary.items_missing, 1);
}

#[test]
fn test_neutral_flow_is_not_swapped() {
    let (lifecycle, scheduler) = create_lifecycle(10);
    lifecycle.add_item(burger()).unwrap();
    lifecycle.place_order().unwrap();
    scheduler.advance(DELAY);

    let reveal = lifecycle.reveal_data().unwrap();
    assert_eq!(reveal.band, KarmaBand::Neutral);
    assert_eq!(reveal.substituted_order[0].name(), "Triple Bacon Cheeseburger");
    assert_eq!(reveal.substituted_order[0].price(), money(1899));
    assert!(!reveal.summary.swapped);
    assert!(reveal.headline().is_empty());
}

#[test]
fn test_karma_read_at_placement() {
    let (lifecycle, scheduler) = create_lifecycle(-20);
    lifecycle.add_item(burger()).unwrap();
    lifecycle.place_order().unwrap();
    scheduler.advance(DELAY);
    assert_eq!(lifecycle.reveal_data().unwrap().band, KarmaBand::Neutral);
}

// ========================================================================
// Reset & cancellation
// ========================================================================

#[test]
fn test_reset_from_idle_is_noop() {
    let (lifecycle, _) = create_lifecycle(-47);
    lifecycle.add_item(burger()).unwrap();
    lifecycle.reset();
    assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);
    assert_eq!(lifecycle.cart_snapshot().item_count, 1);
}

#[test]
fn test_reset_from_revealed() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    lifecycle.add_item(burger()).unwrap();
    lifecycle.place_order().unwrap();
    scheduler.advance(DELAY);

    lifecycle.reset();
    assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);
    assert!(lifecycle.cart_snapshot().lines.is_empty());
    assert!(lifecycle.reveal_data().is_none());
}

#[test]
fn test_reset_before_delay_cancels_reveal() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    lifecycle.add_item(meat_lovers()).unwrap();
    lifecycle.place_order().unwrap();

    scheduler.advance(Duration::from_millis(1000));
    lifecycle.reset();
    assert_eq!(scheduler.pending(), 0);

    assert_eq!(scheduler.advance(Duration::from_secs(60)), 0);
    assert_eq!(lifecycle.phase(), LifecyclePhase::Idle);
    assert!(lifecycle.cart_snapshot().lines.is_empty());
}

#[test]
fn test_stale_timer_never_reveals_new_order() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    lifecycle.add_item(meat_lovers()).unwrap();
    lifecycle.place_order().unwrap();

    scheduler.advance(Duration::from_millis(1000));
    lifecycle.reset();

    lifecycle.add_item(burger()).unwrap();
    let second = lifecycle.place_order().unwrap();

    // First order's deadline passes: nothing happens
    assert_eq!(scheduler.advance(Duration::from_millis(3500)), 0);
    assert_eq!(lifecycle.phase(), LifecyclePhase::Tracking);

    // Second order's own deadline
    assert_eq!(scheduler.advance(Duration::from_millis(500)), 1);
    assert_eq!(lifecycle.phase(), LifecyclePhase::Revealed);
    let reveal = lifecycle.reveal_data().unwrap();
    assert_eq!(reveal.order_no, second);
    assert_eq!(reveal.original_cart[0].name(), "Triple Bacon Cheeseburger");
}

#[test]
fn test_reveal_fires_once() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    lifecycle.add_item(burger()).unwrap();
    lifecycle.place_order().unwrap();

    assert_eq!(scheduler.advance(DELAY), 1);
    assert_eq!(scheduler.advance(DELAY * 10), 0);
    assert_eq!(lifecycle.phase(), LifecyclePhase::Revealed);
}

#[test]
fn test_dropping_lifecycle_cancels_timer() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    lifecycle.add_item(burger()).unwrap();
    lifecycle.place_order().unwrap();
    drop(lifecycle);

    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.advance(DELAY), 0);
}

#[test]
fn test_subscribe_sees_transitions() {
    let (lifecycle, scheduler) = create_lifecycle(-47);
    let rx = lifecycle.subscribe();
    assert_eq!(*rx.borrow(), LifecyclePhase::Idle);

    lifecycle.add_item(burger()).unwrap();
    lifecycle.place_order().unwrap();
    assert_eq!(*rx.borrow(), LifecyclePhase::Tracking);

    scheduler.advance(DELAY);
    assert_eq!(*rx.borrow(), LifecyclePhase::Revealed);

    lifecycle.reset();
    assert_eq!(*rx.borrow(), LifecyclePhase::Idle);
}

#[test]
fn test_profiles_are_not_mutated() {
    let store = Arc::new(StaticProfileStore::demo());
    let scheduler = Arc::new(ManualScheduler::new());
    let lifecycle = OrderLifecycle::new(store.clone(), scheduler.clone(), LifecycleConfig::default());

    let before = (store.requester(), store.partner());
    lifecycle.add_item(meat_lovers()).unwrap();
    lifecycle.place_order().unwrap();
    scheduler.advance(DELAY);
    lifecycle.reset();

    assert_eq!((store.requester(), store.partner()), before);
}
