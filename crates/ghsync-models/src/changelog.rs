use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

/// One issue timeline event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Changelog {
    pub changelog_id: String,
    pub issue_id: u64,
    pub event: Option<String>,
    pub changes: Value,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    pub raw: Value,
}

impl Changelog {
    /// Stable key of a timeline event.
    ///
    /// Some event kinds (`committed`, `cross-referenced`, ...) carry no `id`,
    /// so the key falls back to `node_id`, then `sha`, then the event
    /// position in the issue timeline.
    pub fn key_for_event(issue_id: u64, position: usize, event: &Value) -> String {
        match event.get("id") {
            Some(Value::Number(n)) => return n.to_string(),
            Some(Value::String(s)) if !s.is_empty() => return s.clone(),
            _ => {}
        }

        ["node_id", "sha"]
            .iter()
            .find_map(|field| event.get(*field).and_then(Value::as_str))
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("{issue_id}:{position}"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn key_for_event() {
        assert_eq!(
            Changelog::key_for_event(1, 0, &json!({"id": 42, "node_id": "N"})),
            "42"
        );
        assert_eq!(
            Changelog::key_for_event(1, 0, &json!({"node_id": "N", "sha": "abc"})),
            "N"
        );
        assert_eq!(
            Changelog::key_for_event(1, 0, &json!({"event": "committed", "sha": "abc"})),
            "abc"
        );
        assert_eq!(
            Changelog::key_for_event(7, 3, &json!({"event": "cross-referenced"})),
            "7:3"
        );
    }
}
