//! Low-level building blocks for custom transform pipelines.
//!
//! These entry points expose the two transform phases separately for
//! advanced use cases such as instrumenting the relaxation or resuming it
//! after injecting extra frontier entries. Most users should prefer the top-level
//! [`weighted_distance_transform`](crate::weighted_distance_transform).

pub use crate::queue::{CostQueue, QueueEntry};
pub use crate::util::scalar::CostScalar;
pub use crate::wdt::{propagate, seed_frontier};
