use serde::{Deserialize, Serialize};

/// One user-submitted URL with its display string and click counter.
///
/// Field names are the persisted JSON keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub original: String,
    pub short: String,
    #[serde(default)]
    pub clicks: u64,
}

impl LinkEntry {
    pub fn new(original: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            short: short.into(),
            clicks: 0,
        }
    }
}
