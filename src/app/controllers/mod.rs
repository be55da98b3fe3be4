//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Navigation view-model (active link, menu, header style)
//! - Typewriter timer driver
//! - Scroll offset watcher
//! - Simulated contact submission

pub mod contact;
pub mod navigation;
pub mod scroll;
pub mod typewriter;
