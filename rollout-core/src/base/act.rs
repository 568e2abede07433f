//! Action.
use std::fmt::Debug;

/// Represents an action of an environment.
pub trait Act: Clone + Debug {}
