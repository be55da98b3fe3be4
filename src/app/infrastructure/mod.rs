//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Durable key-value storage
//! - Platform-specific detection
//! - FLTK timer ownership
//! - Error types

pub mod error;
pub mod platform;
pub mod storage;
pub mod timer;
