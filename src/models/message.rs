//! Visitor contact message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: String,
    pub name: String,
    /// One of the configured contact form types; free text on the wire.
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
    pub contact: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for submitting a contact message.
///
/// Every field is optional at the deserialization level so that missing
/// fields are reported as a validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitMessageRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl SubmitMessageRequest {
    /// Names of the required fields that are absent or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("contact", &self.contact),
            ("content", &self.content),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(field, _)| field)
        .collect()
    }

    /// Build the record to persist. Callers validate first.
    pub fn into_record(self) -> MessageRecord {
        MessageRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name: self.name.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            contact: self.contact.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}

/// Order messages newest first. Records sharing a timestamp keep the most
/// recently appended one first.
pub fn sort_newest_first(messages: &mut [MessageRecord]) {
    messages.reverse();
    messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: &str, secs: i64) -> MessageRecord {
        MessageRecord {
            id: id.to_string(),
            name: "n".to_string(),
            kind: String::new(),
            contact: "c".to_string(),
            content: "x".to_string(),
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_missing_fields() {
        let request = SubmitMessageRequest {
            name: Some("Ann".into()),
            kind: None,
            contact: Some("   ".into()),
            content: None,
        };
        assert_eq!(request.missing_fields(), vec!["contact", "content"]);
    }

    #[test]
    fn test_type_is_optional() {
        let request: SubmitMessageRequest = serde_json::from_str(
            r#"{"name":"Ann","contact":"wechat: ann","content":"hello"}"#,
        )
        .unwrap();
        assert!(request.missing_fields().is_empty());
        let record = request.into_record();
        assert_eq!(record.kind, "");
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut messages = vec![record("a", 10), record("b", 30), record("c", 20)];
        sort_newest_first(&mut messages);
        let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_ties_prefer_later_append() {
        let mut messages = vec![record("first", 10), record("second", 10)];
        sort_newest_first(&mut messages);
        assert_eq!(messages[0].id, "second");
    }

    #[test]
    fn test_null_type_reads_as_empty() {
        let record: MessageRecord = serde_json::from_str(
            r#"{"id":"m1","name":"Ann","type":null,"contact":"c","content":"x","createdAt":"2024-05-01T08:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(record.kind, "");
    }

    #[test]
    fn test_wire_format() {
        let value = serde_json::to_value(record("a", 0)).unwrap();
        assert_eq!(value["type"], "");
        assert_eq!(value["createdAt"], "1970-01-01T00:00:00Z");
    }
}
