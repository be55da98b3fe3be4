//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data (sections, settings, content, contact form, messages)
//! - `controllers/` - Orchestration (navigation view-model, timer drivers, contact submit)
//! - `services/` - Stateful logic (theme store, scroll tracker, typewriter)
//! - `infrastructure/` - External integrations (storage, platform, timers, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::navigation::{NavigationViewModel, NavigationViewState};
pub use domain::{Message, PortfolioConfig, SectionDescriptor, SectionRegistry, ThemePreference};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::detect_system_dark_mode;
pub use services::scroll_tracker::{ScrollTracker, SectionMeasure, resolve_active};
pub use services::theme_store::ThemeStore;
pub use services::typewriter::Typewriter;
