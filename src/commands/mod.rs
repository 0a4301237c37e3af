//! Command implementations for Skillport CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod link;
pub mod sync;
pub mod version;
