use serde::{Deserialize, Serialize};

/// Stable identifier of a surf spot, as assigned by the backend.
pub type SpotId = u32;

/// A named surf location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    pub id: SpotId,
    #[serde(rename = "nom", alias = "name")]
    pub name: String,
}

impl Spot {
    pub fn new(id: SpotId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Value carried by the selector option for this spot.
    pub fn option_value(&self) -> String {
        self.id.to_string()
    }
}

/// Parses a selector option value back into a spot id.
pub fn parse_spot_id(value: &str) -> Option<SpotId> {
    value.trim().parse().ok()
}
