//! Git operations for upstream skill repositories
//!
//! This module handles:
//! - Cloning repositories (HTTPS, SSH and local paths)
//! - Pulling cached clones up to date
//! - Authentication via git's native credential system
//! - Translating libgit2 errors into readable reasons

pub mod auth;
pub mod clone;
pub mod error;
pub mod pull;
pub mod url;

pub use clone::clone;
pub use pull::pull;
