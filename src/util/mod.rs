//! Utility helpers shared across state and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers)
//! and pure input rules from component logic to improve testability.

pub mod anchor;
pub mod storage;
pub mod timer;
pub mod validate;
