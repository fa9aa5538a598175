//! Background Tasks Module
//!
//! Contains background tasks owned by a search client.
//!
//! # Tasks
//! - Expiry sweep: removes expired cache entries at a fixed interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
