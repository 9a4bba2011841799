use serde::{Deserialize, Serialize};

/// One entry of the remote amphibian data set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmphibianRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(alias = "imgSrc")]
    pub img_src: String,
}

impl AmphibianRecord {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
        img_src: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            description: description.into(),
            img_src: img_src.into(),
        }
    }
}
