use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Photometric band (filter) identifier, e.g. ZTF `fid`
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Band(pub u8);

impl Band {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u8 {
        self.0
    }
}

impl From<u8> for Band {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
