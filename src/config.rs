//! Service endpoints and navigation targets.
//!
//! The API base lives here and nowhere else. Deployments can override it
//! without recompiling by setting `data-api-base` on the document root;
//! everything else in the crate goes through the builders below.

/// Default base URL of the external Notedown API server.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Attribute on `<html>` that overrides [`DEFAULT_API_BASE`].
const API_BASE_ATTR: &str = "data-api-base";

/// Delay before the post-login redirect fires, in milliseconds.
pub const REDIRECT_DELAY_MS: u64 = 2800;

/// Resolve the API base for this page load.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(API_BASE_ATTR))
        .filter(|base| !base.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

/// Join a base URL and a path without doubling or dropping the slash.
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

pub fn login_url() -> String {
    endpoint(&api_base(), "login/")
}

pub fn register_url() -> String {
    endpoint(&api_base(), "register/")
}

/// In-app route of a user's profile dashboard.
pub fn profile_path(username: &str) -> String {
    format!("/profile/{}", username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_with_single_slash() {
        assert_eq!(
            endpoint("http://127.0.0.1:8000", "login/"),
            "http://127.0.0.1:8000/login/"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:8000/", "login/"),
            "http://127.0.0.1:8000/login/"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:8000/", "/register/"),
            "http://127.0.0.1:8000/register/"
        );
    }

    #[test]
    fn profile_path_is_addressed_by_username() {
        assert_eq!(profile_path("johndoe"), "/profile/johndoe");
    }
}
