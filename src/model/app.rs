use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppEntry {
    #[serde(rename = "AppId")]
    pub app_id: i64,

    #[serde(rename = "Name", default)]
    pub name: String,
}

impl AppEntry {
    pub fn new(app_id: i64, name: impl Into<String>) -> Self {
        AppEntry {
            app_id,
            name: name.into(),
        }
    }
}
