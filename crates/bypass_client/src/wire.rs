use serde::{Deserialize, Serialize};

use crate::{PageMetadata, Resolution};

/// Request body for `POST {endpoint}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BypassRequest<'a> {
    pub url: &'a str,
}

/// Success body. The service speaks camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BypassResponse {
    pub original_url: String,
    pub final_url: String,
    #[serde(default)]
    pub metadata: Option<MetadataBody>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct MetadataBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Failure body; the service may omit it entirely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl From<BypassResponse> for Resolution {
    fn from(body: BypassResponse) -> Self {
        Resolution {
            original_url: body.original_url,
            final_url: body.final_url,
            metadata: body.metadata.map(|m| PageMetadata {
                title: m.title,
                description: m.description,
            }),
            warnings: body.warnings,
        }
    }
}
