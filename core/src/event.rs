use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The slice of an API Gateway proxy event the greeter cares about.
///
/// Every other field the gateway sends (headers, path, request context, ...)
/// is ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestEvent {
    /// Absent and explicit `null` both deserialize to `None`. A `null` value
    /// inside the mapping is kept as `None` and reads as a missing parameter.
    #[serde(
        rename = "queryStringParameters",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub query_string_parameters: Option<HashMap<String, Option<String>>>,
}

impl RequestEvent {
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), Some(value.into()));
        self
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(key))
            .and_then(|value| value.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub const OK: u16 = 200;

    /// 200 response whose body is `payload` serialized as JSON.
    pub fn ok_json<T: Serialize>(payload: &T) -> crate::errors::Result<Self> {
        Ok(Self {
            status_code: Self::OK,
            body: serde_json::to_string(payload)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GreetingBody {
    pub message: String,
}
