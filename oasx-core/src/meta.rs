use serde::Serialize;
use serde_json::{Map, Value};

/// Mutable descriptor for one documented API operation.
///
/// Owned by the surrounding documentation pipeline, which creates one per
/// discovered operation, runs the filters over it, and serializes the result
/// into the published document. `responses` is keyed by status-code string
/// (`"200"`), `definitions` by type name (`"User"`); both hold plain JSON
/// objects so filters can update individual fields without knowing the full
/// entry shape.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSpec {
    pub operation_id: String,
    pub consumes: Vec<String>,
    pub parameters: Vec<ParamSpec>,
    pub responses: Map<String, Value>,
    pub definitions: Map<String, Value>,
}

impl OperationSpec {
    pub fn new(operation_id: &str) -> Self {
        Self {
            operation_id: operation_id.to_string(),
            ..Default::default()
        }
    }

    /// Add a consumed media type. Set semantics: adding a media type that is
    /// already present is a no-op.
    pub fn add_consumes(&mut self, media_type: &str) {
        if !self.consumes.iter().any(|m| m == media_type) {
            self.consumes.push(media_type.to_string());
        }
    }
}

/// Descriptor for one operation parameter. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamSpec {
    pub name: String,
    pub required: bool,
    #[serde(rename = "in")]
    pub location: ParamLocation,
    #[serde(rename = "type")]
    pub param_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Where a parameter is located in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamLocation {
    Query,
    Header,
    Path,
    FormData,
    Body,
}
