//! Action of classic-control environments.
use rollout_core::Act;

/// Action of classic-control environments.
///
/// All registered environments have a small discrete action set; the action
/// is an index into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassicAct {
    /// The action index.
    pub act: u8,
}

impl Act for ClassicAct {}

impl From<u8> for ClassicAct {
    fn from(act: u8) -> Self {
        Self { act }
    }
}
