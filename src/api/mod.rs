use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::models::{LoginDraft, RegisterDraft, SubmitState};

/// API client error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiClientError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected server response: HTTP {0}")]
    UnexpectedStatus(u16),
}

type Result<T> = std::result::Result<T, ApiClientError>;

/// The server's answer to a well-formed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthVerdict {
    /// HTTP 200
    Accepted,
    /// HTTP 400
    Rejected,
}

/// Map a response status to a verdict. Anything outside the two statuses the
/// API documents is an error, never a silent no-op.
fn verdict_for_status(status: u16) -> Result<AuthVerdict> {
    match status {
        200 => Ok(AuthVerdict::Accepted),
        400 => Ok(AuthVerdict::Rejected),
        other => Err(ApiClientError::UnexpectedStatus(other)),
    }
}

/// Collapse a submission result into the state the form displays.
pub fn submission_state(result: Result<AuthVerdict>) -> SubmitState {
    match result {
        Ok(AuthVerdict::Accepted) => SubmitState::Succeeded,
        Ok(AuthVerdict::Rejected) => SubmitState::Rejected,
        Err(err) => SubmitState::Failed(err.to_string()),
    }
}

/// Issue a single POST with a JSON body. No retry, no timeout.
async fn submit<T: Serialize>(url: &str, body: &T) -> Result<AuthVerdict> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiClientError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiClientError::Network(e.to_string()))?;

    verdict_for_status(response.status())
}

/// Authentication API
pub mod auth {
    use super::*;

    /// Exactly one request per call; drafts with an empty required field
    /// fail before any request is built.
    pub async fn login(draft: &LoginDraft) -> Result<AuthVerdict> {
        if let Some(field) = draft.missing_field() {
            return Err(ApiClientError::MissingField(field));
        }
        submit(&config::login_url(), draft).await
    }

    pub async fn register(draft: &RegisterDraft) -> Result<AuthVerdict> {
        if let Some(field) = draft.missing_field() {
            return Err(ApiClientError::MissingField(field));
        }
        submit(&config::register_url(), draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_200_is_accepted() {
        assert_eq!(verdict_for_status(200), Ok(AuthVerdict::Accepted));
    }

    #[test]
    fn status_400_is_rejected() {
        assert_eq!(verdict_for_status(400), Ok(AuthVerdict::Rejected));
    }

    #[test]
    fn other_statuses_are_errors_not_noops() {
        for status in [201, 302, 401, 403, 500, 503] {
            assert_eq!(
                verdict_for_status(status),
                Err(ApiClientError::UnexpectedStatus(status))
            );
        }
    }

    #[test]
    fn accepted_maps_to_succeeded_only() {
        assert_eq!(
            submission_state(Ok(AuthVerdict::Accepted)),
            SubmitState::Succeeded
        );
    }

    #[test]
    fn rejected_maps_to_rejected_only() {
        assert_eq!(
            submission_state(Ok(AuthVerdict::Rejected)),
            SubmitState::Rejected
        );
    }

    #[test]
    fn errors_surface_as_failed_with_a_message() {
        let state = submission_state(Err(ApiClientError::MissingField("email")));
        assert_eq!(state, SubmitState::Failed("email is required".to_string()));

        let state = submission_state(Err(ApiClientError::UnexpectedStatus(500)));
        assert_eq!(
            state,
            SubmitState::Failed("unexpected server response: HTTP 500".to_string())
        );
    }
}
