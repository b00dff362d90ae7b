//! Anexia Engine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnexiaVlan {
    pub id: String,
}

/// ## Example
///
/// ```json
/// {"id": "12c28aa7-604d-47e9-83fb-5f1d1f1837b3", "name": "Flatcar Linux Stable"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnexiaTemplate {
    pub id: String,

    #[serde(default)]
    pub name: String,
}
