//! Transport mode value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// A way of travelling from the origin to a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Driving, measured as road distance
    Car,
    /// Rail, measured as journey duration and fare
    Train,
}

impl TransportMode {
    /// Line colour used when drawing a route of this mode
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Car => "red",
            Self::Train => "blue",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Train => write!(f, "train"),
        }
    }
}
