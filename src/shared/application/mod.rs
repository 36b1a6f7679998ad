/// Shared application layer patterns
///
/// This module contains application-level abstractions used across
/// multiple bounded contexts.
pub mod pagination;
pub mod state_holder;

pub use pagination::*;
pub use state_holder::{Generation, StateHolder};
