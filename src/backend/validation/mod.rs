/**
 * Input Validation
 *
 * Stateless validators, one per resource, called before every mutating
 * handler. Each returns a field-keyed error map; an empty map means the
 * input is valid and the handler may touch the store. Missing fields
 * deserialize to empty strings, so "absent" and "blank" are treated
 * identically.
 */

use std::collections::BTreeMap;

use serde::Serialize;

use crate::backend::auth::handlers::types::{LoginRequest, RegisterRequest};
use crate::backend::posts::PostInput;
use crate::backend::profile::{EducationInput, ExperienceInput, ProfileInput};

/// Field-keyed validation error map
///
/// Serializes as a plain JSON object, `{"field": "message", ...}`, which is
/// exactly the 400 body the API returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    /// Record an error for a field
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// The input is valid iff no errors were recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the message recorded for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Character-count range check (chars, not bytes, so multibyte names are
/// measured the way a user counts them)
fn within(value: &str, min: usize, max: usize) -> bool {
    let len = value.trim().chars().count();
    len >= min && len <= max
}

/// Minimal email shape check: one `@`, non-empty local part, and a domain
/// with a dot and a plausible TLD. Deliberately loose; the mail system is
/// the real validator.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.chars().count() >= 2,
        None => false,
    }
}

pub fn validate_register(input: &RegisterRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&input.name) {
        errors.add("name", "Name field is required");
    } else if !within(&input.name, 2, 30) {
        errors.add("name", "Name must be between 2 and 30 characters");
    }

    if is_blank(&input.email) {
        errors.add("email", "Email field is required");
    } else if !is_valid_email(input.email.trim()) {
        errors.add("email", "Email is invalid");
    }

    if input.password.is_empty() {
        errors.add("password", "Password field is required");
    } else if !within(&input.password, 6, 30) {
        errors.add("password", "Password must be at least 6 characters");
    }

    errors
}

pub fn validate_login(input: &LoginRequest) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&input.email) {
        errors.add("email", "Email field is required");
    } else if !is_valid_email(input.email.trim()) {
        errors.add("email", "Email is invalid");
    }

    if input.password.is_empty() {
        errors.add("password", "Password field is required");
    }

    errors
}

pub fn validate_profile(input: &ProfileInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&input.handle) {
        errors.add("handle", "Profile handle is required");
    } else if !within(&input.handle, 2, 40) {
        errors.add("handle", "Handle needs to be between 2 and 40 characters");
    }

    if is_blank(&input.status) {
        errors.add("status", "Status field is required");
    }

    if is_blank(&input.skills) {
        errors.add("skills", "Skills field is required");
    }

    errors
}

pub fn validate_experience(input: &ExperienceInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&input.title) {
        errors.add("title", "Job title field is required");
    }
    if is_blank(&input.company) {
        errors.add("company", "Company field is required");
    }
    if is_blank(&input.from) {
        errors.add("from", "From date field is required");
    }

    errors
}

pub fn validate_education(input: &EducationInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&input.school) {
        errors.add("school", "School field is required");
    }
    if is_blank(&input.degree) {
        errors.add("degree", "Degree field is required");
    }
    if is_blank(&input.fieldofstudy) {
        errors.add("fieldofstudy", "Field of study field is required");
    }
    if is_blank(&input.from) {
        errors.add("from", "From date field is required");
    }

    errors
}

pub fn validate_post(input: &PostInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&input.text) {
        errors.add("text", "Text field is required");
    } else if !within(&input.text, 10, 300) {
        errors.add("text", "Post must be between 10 and 300 characters");
    }

    errors
}

/// Comments share the post body shape but not its length bounds; a
/// two-character reply is a valid comment.
pub fn validate_comment(input: &PostInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&input.text) {
        errors.add("text", "Text field is required");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn register(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_register() {
        let input = register("John Doe", "john@example.com", "password123");
        assert!(validate_register(&input).is_empty());
    }

    #[test]
    fn test_register_missing_and_blank_are_the_same() {
        // A missing field deserializes to "", so both paths converge here
        let missing = validate_register(&register("", "", ""));
        let blank = validate_register(&register("   ", "  ", ""));
        assert_eq!(missing.get("name"), Some("Name field is required"));
        assert_eq!(blank.get("name"), Some("Name field is required"));
        assert_eq!(missing.get("email"), Some("Email field is required"));
        assert_eq!(missing.get("password"), Some("Password field is required"));
    }

    #[test]
    fn test_register_name_length() {
        let errors = validate_register(&register("J", "john@example.com", "password123"));
        assert_eq!(
            errors.get("name"),
            Some("Name must be between 2 and 30 characters")
        );
    }

    #[test]
    fn test_register_short_password() {
        let errors = validate_register(&register("John", "john@example.com", "pw"));
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_profile_requires_handle_status_skills() {
        let errors = validate_profile(&ProfileInput::default());
        assert_eq!(errors.get("handle"), Some("Profile handle is required"));
        assert_eq!(errors.get("status"), Some("Status field is required"));
        assert_eq!(errors.get("skills"), Some("Skills field is required"));
    }

    #[test]
    fn test_profile_handle_length() {
        let input = ProfileInput {
            handle: "x".to_string(),
            status: "Developer".to_string(),
            skills: "Rust".to_string(),
            ..ProfileInput::default()
        };
        let errors = validate_profile(&input);
        assert_eq!(
            errors.get("handle"),
            Some("Handle needs to be between 2 and 40 characters")
        );
    }

    #[test]
    fn test_experience_required_fields() {
        let input = ExperienceInput::default();
        let errors = validate_experience(&input);
        assert_eq!(errors.get("title"), Some("Job title field is required"));
        assert_eq!(errors.get("company"), Some("Company field is required"));
        assert_eq!(errors.get("from"), Some("From date field is required"));
    }

    #[test]
    fn test_education_required_fields() {
        let errors = validate_education(&EducationInput::default());
        assert_eq!(errors.get("school"), Some("School field is required"));
        assert_eq!(errors.get("degree"), Some("Degree field is required"));
        assert_eq!(
            errors.get("fieldofstudy"),
            Some("Field of study field is required")
        );
    }

    #[test]
    fn test_post_text_bounds() {
        let short = PostInput {
            text: "too short".to_string(),
            ..PostInput::default()
        };
        let errors = validate_post(&short);
        assert_eq!(
            errors.get("text"),
            Some("Post must be between 10 and 300 characters")
        );

        let ok = PostInput {
            text: "long enough to pass validation".to_string(),
            ..PostInput::default()
        };
        assert!(validate_post(&ok).is_empty());

        let long = PostInput {
            text: "x".repeat(301),
            ..PostInput::default()
        };
        assert!(!validate_post(&long).is_empty());
    }

    #[test]
    fn test_comment_text_has_no_length_floor() {
        let short = PostInput {
            text: "hi".to_string(),
            ..PostInput::default()
        };
        assert!(validate_comment(&short).is_empty());

        let blank = PostInput {
            text: "   ".to_string(),
            ..PostInput::default()
        };
        assert_eq!(
            validate_comment(&blank).get("text"),
            Some("Text field is required")
        );
    }

    #[test]
    fn test_optional_fields_are_not_validated() {
        let input = ExperienceInput {
            title: "Engineer".to_string(),
            company: "Initech".to_string(),
            from: "2019-04-01".to_string(),
            ..ExperienceInput::default()
        };
        assert!(validate_experience(&input).is_empty());
    }
}
