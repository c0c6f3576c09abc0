//! Platform abstractions for pimbuild
//!
//! This crate provides the OS-facing pieces of the orchestrator:
//! - Advisory file locking for build trees
//! - External tool discovery (cmake, ninja)

mod lock;
mod tools;

pub use lock::{LockError, LockMetadata, TreeLock};
pub use tools::Toolchain;
