//! Change notifications
//!
//! Every successful mutation publishes one [`Event`] so views can re-render
//! from the shared store instead of keeping private copies.

mod event_bus;
mod events;

pub use event_bus::{create_event_bus, EventBus, EventSubscriber, SharedEventBus};
pub use events::*;
