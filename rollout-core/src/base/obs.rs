//! Observation.
use std::fmt::Debug;

/// Represents an observation of an environment.
///
/// The driver treats observations as opaque values; it only clones them into
/// transitions and hands the last one back to the caller.
pub trait Obs: Clone + Debug {}
