use serde::Deserialize;
use serde_json::Value;

use crate::error::SuiteError;
use crate::http::ApiResponse;

/// `{ "success": bool, "data": ... }` wrapper used by most endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub(crate) success: bool,
    #[serde(default)]
    pub(crate) data: Value,
}

impl Envelope {
    /// A body that is not an object (or not JSON at all) counts as
    /// unsuccessful rather than as an error.
    pub(crate) fn from_response(response: &ApiResponse) -> Self {
        response.json_as().unwrap_or_default()
    }

    /// Reads `data.id`, accepting either a JSON string or number.
    pub(crate) fn resource_id(&self, path: &str) -> Result<String, SuiteError> {
        match self.data.get("id") {
            Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
            Some(Value::Number(id)) => Ok(id.to_string()),
            None | Some(Value::Null) => Err(SuiteError::MissingField {
                path: path.to_owned(),
                field: "data.id",
            }),
            Some(other) => Err(SuiteError::InvalidField {
                path: path.to_owned(),
                field: "data.id",
                value: other.to_string(),
            }),
        }
    }
}
