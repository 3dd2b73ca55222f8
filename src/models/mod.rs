use serde::Serialize;

/// In-progress login form fields, serialized as the request body on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginDraft {
    pub username: String,
    pub password: String,
}

impl LoginDraft {
    /// First required field that is still empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.username.is_empty() {
            Some("username")
        } else if self.password.is_empty() {
            Some("password")
        } else {
            None
        }
    }
}

/// In-progress registration form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterDraft {
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.username.is_empty() {
            Some("username")
        } else if self.email.is_empty() {
            Some("email")
        } else if self.password.is_empty() {
            Some("password")
        } else {
            None
        }
    }
}

/// Lifecycle of a single form submission.
///
/// Every outcome maps to exactly one variant; there is no boolean pair to
/// drift out of sync, and no status class falls through silently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    /// Nothing submitted yet (or a fresh attempt is about to start).
    #[default]
    Idle,
    /// A request is in flight. Re-entrant submits are ignored in this state.
    Submitting,
    /// The server accepted the submission (HTTP 200).
    Succeeded,
    /// The server rejected the submission (HTTP 400).
    Rejected,
    /// The submission never produced a verdict: a required field was empty,
    /// the transport failed, or the server answered with an unexpected status.
    Failed(String),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_draft_reports_missing_fields() {
        let draft = LoginDraft::default();
        assert_eq!(draft.missing_field(), Some("username"));

        let draft = LoginDraft {
            username: "johndoe".to_string(),
            password: String::new(),
        };
        assert_eq!(draft.missing_field(), Some("password"));

        let draft = LoginDraft {
            username: "johndoe".to_string(),
            password: "hunter22".to_string(),
        };
        assert_eq!(draft.missing_field(), None);
    }

    #[test]
    fn register_draft_reports_missing_fields_in_form_order() {
        let mut draft = RegisterDraft::default();
        assert_eq!(draft.missing_field(), Some("username"));

        draft.username = "johndoe".to_string();
        assert_eq!(draft.missing_field(), Some("email"));

        draft.email = "john@example.com".to_string();
        assert_eq!(draft.missing_field(), Some("password"));

        draft.password = "hunter22".to_string();
        assert_eq!(draft.missing_field(), None);
    }

    #[test]
    fn login_body_contains_exactly_the_submitted_fields() {
        let draft = LoginDraft {
            username: "johndoe".to_string(),
            password: "hunter22".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({ "username": "johndoe", "password": "hunter22" })
        );
    }

    #[test]
    fn register_body_contains_exactly_the_submitted_fields() {
        let draft = RegisterDraft {
            username: "johndoe".to_string(),
            email: "john@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "username": "johndoe",
                "email": "john@example.com",
                "password": "hunter22"
            })
        );
    }

    #[test]
    fn submit_state_defaults_to_idle() {
        assert_eq!(SubmitState::default(), SubmitState::Idle);
        assert!(!SubmitState::Idle.is_submitting());
        assert!(SubmitState::Submitting.is_submitting());
    }
}
