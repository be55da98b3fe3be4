//! Services layer - toolkit-independent state machines.
//!
//! - Theme preference store with subscribe/notify
//! - Scroll-driven active-section resolution
//! - Typewriter animation

pub mod scroll_tracker;
pub mod theme_store;
pub mod typewriter;
