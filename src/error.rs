use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::initialization::RandErr;

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, NetErr>;

/// The network's error type.
#[derive(Debug)]
pub enum NetErr {
    NoInputs,
    EmptyLayout,
    EmptyLayer { layer: usize },
    NonFiniteBias(f32),
    WeightGen(RandErr),
    Json(serde_json::Error),
}

impl Display for NetErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NetErr::NoInputs => "The network must have at least one input".to_string(),
            NetErr::EmptyLayout => "The layout must have at least one layer".to_string(),
            NetErr::EmptyLayer { layer } => {
                format!("The layer {layer} of the layout has no neurons")
            }
            NetErr::NonFiniteBias(bias) => format!("The bias must be finite, got {bias}"),
            NetErr::WeightGen(e) => format!("Failed to build the weight initializer: {e}"),
            NetErr::Json(e) => format!("Invalid configuration JSON: {e}"),
        };

        write!(f, "{s}")
    }
}

impl Error for NetErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetErr::WeightGen(e) => Some(e),
            NetErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RandErr> for NetErr {
    fn from(value: RandErr) -> Self {
        Self::WeightGen(value)
    }
}

impl From<serde_json::Error> for NetErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
