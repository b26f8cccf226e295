//! Notification value type.
//!
//! Notifications are what the View and Controller tiers pass around. This crate
//! only defines the value; dispatch lives with those tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named message with an optional body and an optional type discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification<B = ()> {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<B>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

impl<B> Notification<B> {
    /// Create a notification with no body and no type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            kind: None,
        }
    }

    pub fn with_body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn set_body(&mut self, body: B) {
        self.body = Some(body);
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = Some(kind.into());
    }

    /// Consume the notification and return its body.
    pub fn into_body(self) -> Option<B> {
        self.body
    }
}

impl<B: fmt::Debug> fmt::Display for Notification<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Notification Name: {}", self.name)?;
        match &self.body {
            Some(body) => writeln!(f, "Body: {:?}", body)?,
            None => writeln!(f, "Body: null")?,
        }
        write!(f, "Type: {}", self.kind.as_deref().unwrap_or("null"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification() {
        let note: Notification = Notification::new("startup");
        assert_eq!(note.name(), "startup");
        assert!(note.body().is_none());
        assert!(note.kind().is_none());
    }

    #[test]
    fn test_builder() {
        let note = Notification::new("colors_changed")
            .with_body(vec!["red", "green"])
            .with_kind("update");
        assert_eq!(note.body(), Some(&vec!["red", "green"]));
        assert_eq!(note.kind(), Some("update"));
    }

    #[test]
    fn test_setters() {
        let mut note = Notification::new("n");
        note.set_body(3u32);
        note.set_kind("count");
        assert_eq!(note.clone().into_body(), Some(3));
        assert_eq!(note.kind(), Some("count"));
    }

    #[test]
    fn test_display_with_body_and_type() {
        let note = Notification::new("sizes").with_body(7u8).with_kind("add");
        let text = note.to_string();
        assert!(text.contains("Notification Name: sizes"));
        assert!(text.contains("Body: 7"));
        assert!(text.ends_with("Type: add"));
    }

    #[test]
    fn test_display_empty_fields() {
        let note: Notification<String> = Notification::new("bare");
        let text = note.to_string();
        assert!(text.contains("Body: null"));
        assert!(text.contains("Type: null"));
    }

    #[test]
    fn test_serialize_uses_type_field() {
        let note: Notification<()> = Notification::new("n").with_kind("k");
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["name"], "n");
        assert_eq!(json["type"], "k");
        assert!(json.get("body").is_none());
    }
}
