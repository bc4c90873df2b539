//! Headless document tree for server-side page rendering.
//!
//! Provides an arena-based element tree that stands in for a browser
//! document: mutation, document-order queries, HTML serialization, and an
//! event-handler registry with synthetic dispatch so interaction code can
//! be exercised without a browser.

pub mod document;
pub mod events;
pub mod query;
pub mod serialize;

pub use document::{Document, NodeId, ScrollBehavior, ScrollRequest};
pub use events::{Events, EventState, IntersectionWatcher};
