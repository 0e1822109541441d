//! # Session State
//!
//! Holds the order currently being built at the counter.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Screen Action            Method              State Change              │
//! │  ─────────────            ──────              ────────────              │
//! │                                                                         │
//! │  1) New Order ──────────► start() ──────────► Some(Order::new())        │
//! │                                                                         │
//! │  Add item ──────────────► order_mut() ──────► order.add_product(..)     │
//! │                                                                         │
//! │  Receipt saved ─────────► finish() ─────────► None (order returned)     │
//! │                                                                         │
//! │  0) Cancel Order ───────► cancel() ─────────► None (order dropped)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use deli_core::Order;
use tracing::{info, warn};

/// At most one active order.
#[derive(Debug, Default)]
pub struct SessionState {
    order: Option<Order>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh order, replacing any unfinished one.
    pub fn start(&mut self) -> &mut Order {
        if let Some(previous) = self.order.take() {
            warn!(order_id = %previous.id(), items = previous.len(), "unfinished order replaced");
        }
        let order = Order::new();
        info!(order_id = %order.id(), "new order");
        self.order.insert(order)
    }

    pub fn is_active(&self) -> bool {
        self.order.is_some()
    }

    pub fn order(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn order_mut(&mut self) -> Option<&mut Order> {
        self.order.as_mut()
    }

    /// Ends the session's order after a successful checkout.
    pub fn finish(&mut self) -> Option<Order> {
        self.order.take()
    }

    /// Discards the active order.
    pub fn cancel(&mut self) -> Option<Order> {
        let order = self.order.take();
        if let Some(order) = &order {
            info!(order_id = %order.id(), items = order.len(), "order cancelled");
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deli_core::Chips;

    #[test]
    fn test_start_and_finish() {
        let mut session = SessionState::new();
        assert!(!session.is_active());

        session.start().add_product(Chips::new("Lays"));
        assert!(session.is_active());
        assert_eq!(session.order().map(Order::len), Some(1));

        let finished = session.finish().unwrap();
        assert_eq!(finished.len(), 1);
        assert!(!session.is_active());
        assert!(session.finish().is_none());
    }

    #[test]
    fn test_start_replaces_unfinished_order() {
        let mut session = SessionState::new();
        let first = session.start().id();
        let second = session.start().id();

        assert_ne!(first, second);
        assert!(session.order().unwrap().is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut session = SessionState::new();
        session.start();
        session.order_mut().unwrap().add_product(Chips::new("Doritos"));

        let cancelled = session.cancel().unwrap();
        assert_eq!(cancelled.len(), 1);
        assert!(session.order().is_none());
        assert!(session.cancel().is_none());
    }
}
