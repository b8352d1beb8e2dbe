//! Configuration module for perdiem
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PerdiemPaths;
pub use settings::Settings;
