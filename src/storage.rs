//! Local Draft Store
//!
//! Best-effort persistence of in-progress contact form values and the
//! submission history, keyed in `localStorage`. Malformed or unavailable
//! storage is treated as empty; it must never break form initialization.

use serde::{Deserialize, Serialize};

const DRAFT_KEY: &str = "contact_form_draft";
const SUBMISSIONS_KEY: &str = "contact_submissions";

/// Unsaved contact form input. Only fields whose trimmed value is non-empty
/// are persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl ContactDraft {
    /// Build a draft from raw field values, dropping whitespace-only ones
    pub fn from_fields(name: &str, email: &str, subject: &str, message: &str) -> Self {
        let keep = |v: &str| {
            if v.trim().is_empty() {
                String::new()
            } else {
                v.to_string()
            }
        };
        Self {
            name: keep(name),
            email: keep(email),
            subject: keep(subject),
            message: keep(message),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

/// One entry in the submission history
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub timestamp: String,
    pub kind: String,
}

/// Decode a persisted draft. Anything malformed reads as `None`.
pub fn parse_draft(raw: &str) -> Option<ContactDraft> {
    serde_json::from_str(raw).ok()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn save_draft(draft: &ContactDraft) {
    let Some(storage) = local_storage() else {
        return;
    };
    if draft.is_empty() {
        let _ = storage.remove_item(DRAFT_KEY);
        return;
    }
    if let Ok(json) = serde_json::to_string(draft) {
        let _ = storage.set_item(DRAFT_KEY, &json);
    }
}

pub fn load_draft() -> Option<ContactDraft> {
    let storage = local_storage()?;
    let raw = storage.get_item(DRAFT_KEY).ok().flatten()?;
    let draft = parse_draft(&raw);
    if draft.is_none() {
        web_sys::console::warn_1(&"[STORAGE] discarding malformed draft".into());
        let _ = storage.remove_item(DRAFT_KEY);
    }
    draft
}

pub fn clear_draft() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(DRAFT_KEY);
    }
}

/// Append a record to the submission history. A malformed history is replaced
/// rather than crashed on.
pub fn record_submission(record: SubmissionRecord) {
    let Some(storage) = local_storage() else {
        return;
    };
    let mut history: Vec<SubmissionRecord> = storage
        .get_item(SUBMISSIONS_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();
    history.push(record);
    if let Ok(json) = serde_json::to_string(&history) {
        let _ = storage.set_item(SUBMISSIONS_KEY, &json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fields_drops_whitespace_only_values() {
        let draft = ContactDraft::from_fields("Angger", "   ", "", "Hello from the form");
        assert_eq!(draft.name, "Angger");
        assert_eq!(draft.email, "");
        assert_eq!(draft.subject, "");
        assert_eq!(draft.message, "Hello from the form");
    }

    #[test]
    fn empty_fields_are_not_serialized() {
        let draft = ContactDraft::from_fields("Angger", "", "", "");
        let json = serde_json::to_string(&draft).unwrap();
        assert_eq!(json, r#"{"name":"Angger"}"#);
    }

    #[test]
    fn parse_accepts_partial_drafts() {
        let draft = parse_draft(r#"{"subject":"Hi"}"#).unwrap();
        assert_eq!(draft.subject, "Hi");
        assert_eq!(draft.name, "");
    }

    #[test]
    fn parse_fails_soft_on_malformed_data() {
        assert_eq!(parse_draft("not json"), None);
        assert_eq!(parse_draft(r#"{"name": 42}"#), None);
        assert_eq!(parse_draft(""), None);
    }

    #[test]
    fn is_empty_tracks_all_fields() {
        assert!(ContactDraft::default().is_empty());
        assert!(!ContactDraft::from_fields("", "a@b.co", "", "").is_empty());
    }
}
