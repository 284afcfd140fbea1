use serde_json::Value;

use crate::{ApiError, Result};

/// One decoded response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GhPage {
    /// Decoded JSON body.
    pub body: Value,
    /// Next-page signal from the `Link` header, `None` when the header is absent.
    pub has_next_page: Option<bool>,
}

impl GhPage {
    pub fn new(body: Value) -> Self {
        Self {
            body,
            has_next_page: None,
        }
    }

    pub fn with_next_page(mut self, has_next_page: bool) -> Self {
        self.has_next_page = Some(has_next_page);
        self
    }

    /// Items of a list response.
    pub fn into_items(self, route: &str) -> Result<Vec<Value>> {
        match self.body {
            Value::Array(items) => Ok(items),
            other => Err(ApiError::invalid_payload(
                route,
                format!("expected an array, got {}", kind_of(&other)),
            )),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
