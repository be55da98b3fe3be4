//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Section descriptors and the ordered section registry
//! - Portfolio configuration and the theme preference
//! - Contact form and its validation rules
//! - Static page content
//! - Message types for the event system

pub mod contact;
pub mod content;
pub mod messages;
pub mod section;
pub mod settings;
pub mod tabs;

pub use contact::{ContactField, ContactForm, FieldError, ValidationErrors};
pub use messages::Message;
pub use section::{RegistryError, SectionDescriptor, SectionRegistry};
pub use settings::{PortfolioConfig, ThemePreference};
pub use tabs::TabSet;
