/**
 * Client Session State
 *
 * A single state value updated exclusively through dispatched actions: the
 * API client produces `Action`s, `reduce` folds them in, and nothing else
 * touches the state. Profile payloads stay as raw JSON documents; the
 * client renders them, it does not re-model them.
 */

use serde_json::Value;

use crate::client::session::SessionUser;

/// Authentication slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub is_authenticated: bool,
    /// Identity decoded from the session token
    pub user: Option<SessionUser>,
}

/// Profile slice
///
/// `profile` mirrors the original convention: an empty object means the
/// logged-in user has no profile yet, `Value::Null` means a requested
/// profile was not found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileState {
    pub profile: Option<Value>,
    pub profiles: Option<Value>,
    pub loading: bool,
}

/// Full client session state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub auth: AuthState,
    pub profile: ProfileState,
    /// Field-keyed error map from the last failed call, `Null` when clear
    pub errors: Value,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Action descriptors consumed by `reduce`
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A token was obtained or restored; its identity becomes the current user
    SetCurrentUser(SessionUser),
    /// Log the session out
    ClearCurrentUser,
    /// A profile fetch is in flight
    ProfileLoading,
    /// A profile payload arrived (own or requested)
    Profile(Value),
    /// The all-profiles payload arrived
    Profiles(Value),
    /// Drop the loaded profile, e.g. on logout
    ClearCurrentProfile,
    /// A failed call produced a field-keyed error map
    Errors(Value),
    /// Reset the error map
    ClearErrors,
}

/// Apply one action to the state
pub fn reduce(state: &mut SessionState, action: Action) {
    match action {
        Action::SetCurrentUser(user) => {
            state.auth.is_authenticated = true;
            state.auth.user = Some(user);
        }
        Action::ClearCurrentUser => {
            state.auth = AuthState::default();
        }
        Action::ProfileLoading => {
            state.profile.loading = true;
        }
        Action::Profile(payload) => {
            state.profile.profile = Some(payload);
            state.profile.loading = false;
        }
        Action::Profiles(payload) => {
            state.profile.profiles = Some(payload);
            state.profile.loading = false;
        }
        Action::ClearCurrentProfile => {
            state.profile.profile = None;
        }
        Action::Errors(map) => {
            state.errors = map;
        }
        Action::ClearErrors => {
            state.errors = Value::Null;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn user() -> SessionUser {
        SessionUser {
            id: "b2c7f5a0-0000-0000-0000-000000000000".to_string(),
            name: "John Doe".to_string(),
            avatar: "https://avatar".to_string(),
        }
    }

    #[test]
    fn test_set_current_user_authenticates() {
        let mut state = SessionState::new();
        assert!(!state.auth.is_authenticated);

        reduce(&mut state, Action::SetCurrentUser(user()));
        assert!(state.auth.is_authenticated);
        assert_eq!(state.auth.user.as_ref().map(|u| u.name.as_str()), Some("John Doe"));
    }

    #[test]
    fn test_clear_current_user_resets_auth() {
        let mut state = SessionState::new();
        reduce(&mut state, Action::SetCurrentUser(user()));
        reduce(&mut state, Action::ClearCurrentUser);

        assert_eq!(state.auth, AuthState::default());
    }

    #[test]
    fn test_profile_payload_clears_loading() {
        let mut state = SessionState::new();
        reduce(&mut state, Action::ProfileLoading);
        assert!(state.profile.loading);

        reduce(&mut state, Action::Profile(json!({ "handle": "johndoe" })));
        assert!(!state.profile.loading);
        assert_eq!(state.profile.profile, Some(json!({ "handle": "johndoe" })));
    }

    #[test]
    fn test_profiles_payload_clears_loading() {
        let mut state = SessionState::new();
        reduce(&mut state, Action::ProfileLoading);

        reduce(&mut state, Action::Profiles(json!([{ "handle": "johndoe" }])));
        assert!(!state.profile.loading);
        assert!(state.profile.profiles.is_some());
    }

    #[test]
    fn test_clear_current_profile() {
        let mut state = SessionState::new();
        reduce(&mut state, Action::Profile(json!({ "handle": "johndoe" })));
        reduce(&mut state, Action::ClearCurrentProfile);

        assert_eq!(state.profile.profile, None);
    }

    #[test]
    fn test_errors_set_and_clear() {
        let mut state = SessionState::new();
        reduce(&mut state, Action::Errors(json!({ "email": "Email is invalid" })));
        assert_eq!(state.errors["email"], "Email is invalid");

        reduce(&mut state, Action::ClearErrors);
        assert_eq!(state.errors, Value::Null);
    }
}
