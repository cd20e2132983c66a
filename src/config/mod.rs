//! Configuration module for Penny
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//!
//! Only preferences live on disk. Expenses and goals are never written.

pub mod paths;
pub mod settings;

pub use paths::PennyPaths;
pub use settings::Settings;
