//! OrderLifecycle - cart ownership, placement, timed reveal, reset
//!
//! # Place Order Flow
//!
//! ```text
//! place_order()
//!     ├─ 1. Phase must be Idle
//!     ├─ 2. Reject empty cart (unless allow_empty_order)
//!     ├─ 3. Freeze cart snapshot, read requester + partner profiles
//!     ├─ 4. Substitute
//!     ├─ 5. Schedule reveal (one timer per order)
//!     └─ 6. Enter Tracking
//! ```
//!
//! All state sits behind one mutex. The reveal task checks, under that
//! mutex, that its order is still the current one and still Tracking, so a
//! reset followed by a new order can never be revealed by the old timer.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use shared::models::{MenuItem, UserProfile};
use shared::order::{CartLine, CartSnapshot, LifecyclePhase, TrackingInfo};
use shared::util::now_millis;
use tokio::sync::watch;

use super::error::OrderError;
use super::reveal::RevealData;
use super::scheduler::{DeliveryScheduler, TimerHandle};
use crate::cart::Cart;
use crate::core::config::DEFAULT_DELIVERY_DELAY_MS;
use crate::profiles::ProfileStore;
use crate::substitution::{KarmaBand, SubstitutedLine, SubstitutionEngine};

/// 生命周期配置
#[derive(Debug, Clone)]
pub struct LifecycleConfig {
    /// Time spent in Tracking before the reveal
    pub delivery_delay: Duration,
    /// Legacy behaviour: accept an empty cart and reveal an empty order
    pub allow_empty_order: bool,
    /// Label shown on the tracking screen
    pub estimated_delivery: String,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            delivery_delay: Duration::from_millis(DEFAULT_DELIVERY_DELAY_MS),
            allow_empty_order: false,
            estimated_delivery: "25-35 minutes".into(),
        }
    }
}

/// Frozen order
struct PlacedOrder {
    order_no: u64,
    band: KarmaBand,
    original_cart: Vec<CartLine>,
    substituted: Vec<SubstitutedLine>,
    requester: UserProfile,
    partner: UserProfile,
    placed_at: i64,
}

#[derive(Default)]
struct LifecycleState {
    phase: LifecyclePhase,
    cart: Cart,
    order: Option<PlacedOrder>,
    /// At most one outstanding reveal timer
    timer: Option<TimerHandle>,
    last_order_no: u64,
}

impl LifecycleState {
    fn require_idle(&self, action: &'static str) -> Result<(), OrderError> {
        if self.phase.is_idle() {
            return Ok(());
        }
        tracing::warn!(action, phase = %self.phase, "Rejected: order in progress");
        Err(OrderError::InvalidPhase {
            action,
            phase: self.phase,
        })
    }
}

/// Order lifecycle controller (one per session)
pub struct OrderLifecycle {
    state: Arc<Mutex<LifecycleState>>,
    phase_tx: Arc<watch::Sender<LifecyclePhase>>,
    profiles: Arc<dyn ProfileStore>,
    scheduler: Arc<dyn DeliveryScheduler>,
    engine: SubstitutionEngine,
    config: LifecycleConfig,
}

impl OrderLifecycle {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        scheduler: Arc<dyn DeliveryScheduler>,
        config: LifecycleConfig,
    ) -> Self {
        Self::with_engine(profiles, scheduler, SubstitutionEngine::default(), config)
    }

    pub fn with_engine(
        profiles: Arc<dyn ProfileStore>,
        scheduler: Arc<dyn DeliveryScheduler>,
        engine: SubstitutionEngine,
        config: LifecycleConfig,
    ) -> Self {
        let (phase_tx, _) = watch::channel(LifecyclePhase::Idle);
        Self {
            state: Arc::new(Mutex::new(LifecycleState::default())),
            phase_tx: Arc::new(phase_tx),
            profiles,
            scheduler,
            engine,
            config,
        }
    }

    // ========================================================================
    // Cart
    // ========================================================================

    pub fn add_item(&self, item: MenuItem) -> Result<CartLine, OrderError> {
        let mut state = self.state.lock();
        state.require_idle("add item")?;
        let line = state.cart.add(item);
        tracing::debug!(line_id = %line.line_id, item_id = line.item.id, "Item added to cart");
        Ok(line)
    }

    /// Unknown line ids are ignored
    pub fn remove_item(&self, line_id: &str) -> Result<(), OrderError> {
        let mut state = self.state.lock();
        state.require_idle("remove item")?;
        match state.cart.remove(line_id) {
            Some(line) => {
                tracing::debug!(line_id, item_id = line.item.id, "Item removed from cart")
            }
            None => tracing::debug!(line_id, "Remove ignored: line not in cart"),
        }
        Ok(())
    }

    pub fn cart_snapshot(&self) -> CartSnapshot {
        self.state.lock().cart.snapshot()
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Place the order, returning its number
    pub fn place_order(&self) -> Result<u64, OrderError> {
        let mut state = self.state.lock();
        state.require_idle("place order")?;

        if state.cart.is_empty() && !self.config.allow_empty_order {
            tracing::warn!("Rejected: place order with empty cart");
            return Err(OrderError::EmptyCart);
        }

        let original_cart = state.cart.lines().to_vec();
        let requester = self.profiles.requester();
        let partner = self.profiles.partner();
        let band = KarmaBand::from_karma(requester.karma);
        let substituted = self.engine.substitute(&original_cart, requester.karma);

        state.last_order_no += 1;
        let order_no = state.last_order_no;

        let timer = self.schedule_reveal(order_no);
        if let Some(stale) = state.timer.replace(timer) {
            stale.cancel();
        }

        tracing::info!(
            order_no,
            lines = original_cart.len(),
            delay_ms = self.config.delivery_delay.as_millis() as u64,
            "Order placed"
        );
        tracing::debug!(
            order_no,
            band = ?band,
            delivered = substituted.len(),
            "Substitution computed"
        );

        state.order = Some(PlacedOrder {
            order_no,
            band,
            original_cart,
            substituted,
            requester,
            partner,
            placed_at: now_millis(),
        });
        Self::set_phase(&mut state, &self.phase_tx, LifecyclePhase::Tracking);

        Ok(order_no)
    }

    /// Back to Idle, cancelling any pending reveal. No-op while idle.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        if state.phase.is_idle() {
            tracing::debug!("Reset ignored: already idle");
            return;
        }

        if let Some(timer) = state.timer.take() {
            timer.cancel();
        }
        let order_no = state.order.take().map(|o| o.order_no);
        state.cart.clear();
        Self::set_phase(&mut state, &self.phase_tx, LifecyclePhase::Idle);

        tracing::info!(order_no = ?order_no, "Order reset");
    }

    fn schedule_reveal(&self, order_no: u64) -> TimerHandle {
        let state = Arc::downgrade(&self.state);
        let phase_tx = Arc::downgrade(&self.phase_tx);
        self.scheduler.schedule(
            self.config.delivery_delay,
            Box::new(move || Self::complete_delivery(&state, &phase_tx, order_no)),
        )
    }

    /// Reveal callback; ignores anything but the current Tracking order
    fn complete_delivery(
        state: &Weak<Mutex<LifecycleState>>,
        phase_tx: &Weak<watch::Sender<LifecyclePhase>>,
        order_no: u64,
    ) {
        let (Some(state), Some(phase_tx)) = (state.upgrade(), phase_tx.upgrade()) else {
            return;
        };
        let mut state = state.lock();

        let current = state.order.as_ref().map(|o| o.order_no);
        if state.phase != LifecyclePhase::Tracking || current != Some(order_no) {
            tracing::debug!(order_no, current = ?current, "Ignoring stale reveal");
            return;
        }

        state.timer = None;
        Self::set_phase(&mut state, &phase_tx, LifecyclePhase::Revealed);
        tracing::info!(order_no, "Order revealed");
    }

    fn set_phase(
        state: &mut LifecycleState,
        phase_tx: &watch::Sender<LifecyclePhase>,
        phase: LifecyclePhase,
    ) {
        state.phase = phase;
        phase_tx.send_replace(phase);
    }

    // ========================================================================
    // Read side
    // ========================================================================

    pub fn phase(&self) -> LifecyclePhase {
        self.state.lock().phase
    }

    /// Watch phase changes (e.g. to wait for the reveal)
    pub fn subscribe(&self) -> watch::Receiver<LifecyclePhase> {
        self.phase_tx.subscribe()
    }

    /// Tracking screen data; `None` unless Tracking
    pub fn tracking_info(&self) -> Option<TrackingInfo> {
        let state = self.state.lock();
        if state.phase != LifecyclePhase::Tracking {
            return None;
        }
        state.order.as_ref().map(|order| TrackingInfo {
            order_no: order.order_no,
            line_count: order.original_cart.len(),
            estimated_delivery: self.config.estimated_delivery.clone(),
            placed_at: order.placed_at,
        })
    }

    /// Reveal screen data; `None` unless Revealed
    pub fn reveal_data(&self) -> Option<RevealData> {
        let state = self.state.lock();
        if state.phase != LifecyclePhase::Revealed {
            return None;
        }
        state.order.as_ref().map(|order| {
            RevealData::new(
                order.order_no,
                order.band,
                order.substituted.clone(),
                order.original_cart.clone(),
                order.requester.clone(),
                order.partner.clone(),
            )
        })
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }
}

impl Drop for OrderLifecycle {
    fn drop(&mut self) {
        if let Some(timer) = self.state.lock().timer.take() {
            timer.cancel();
        }
    }
}
