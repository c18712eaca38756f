//! # Event Bus Module
//!
//! Publish/subscribe channel between the session and whatever front end
//! renders it. The session publishes stage changes, progress, narration lines
//! and remote-call outcomes; front ends subscribe with a filter.
//!
//! ```rust,ignore
//! use cncpilot_core::event_bus::{AppEvent, EventBus, EventCategory, EventFilter, PipelineEvent};
//!
//! let bus = EventBus::new();
//! bus.subscribe(EventFilter::Categories(vec![EventCategory::Pipeline]), |event| {
//!     if let AppEvent::Pipeline(PipelineEvent::Log { message, .. }) = event {
//!         println!("{message}");
//!     }
//! });
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
