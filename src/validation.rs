//! Form Validators
//!
//! Field-level checks for the organization and add-member forms. Every
//! check runs; errors are collected and shown together.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::{ALLOWED_IMAGE_TYPES, DESCRIPTION_MAX_CHARS, MAX_IMAGE_BYTES};
use crate::models::Role;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Form fields that can carry an inline error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OrgName,
    OrgDescription,
    OrgImage,
    MemberEmail,
    MemberRole,
}

impl Field {
    /// Id of the error slot rendered under the field
    pub fn error_id(self) -> &'static str {
        match self {
            Field::OrgName => "name-error",
            Field::OrgDescription => "desc-error",
            Field::OrgImage => "image-error",
            Field::MemberEmail => "member-email-error",
            Field::MemberRole => "member-role-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// All errors found in one form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for `field`, if it failed
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Drop any error for `field`
    pub fn clear(&mut self, field: Field) {
        self.0.retain(|e| e.field != field);
    }

    /// Set the error for `error.field`, dropping an older one
    pub fn replace(&mut self, error: FieldError) {
        self.clear(error.field);
        self.0.push(error);
    }

    fn finish<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for FormErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

/// Type and size of a chosen file, read off the browser `File`
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    pub mime: String,
    pub size: u64,
}

/// Raw values of the organization form
#[derive(Debug, Clone, Copy)]
pub struct OrgDraft<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub image: Option<&'a FileMeta>,
}

/// Organization values that passed validation, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrg {
    pub name: String,
    pub description: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn validate_image(file: &FileMeta) -> Result<(), FieldError> {
    if !ALLOWED_IMAGE_TYPES.contains(&file.mime.as_str()) {
        return Err(FieldError::new(Field::OrgImage, "Please upload a JPG or PNG image."));
    }
    if file.size > MAX_IMAGE_BYTES {
        return Err(FieldError::new(Field::OrgImage, "File size must be less than 10MB."));
    }
    Ok(())
}

pub fn validate_org(draft: OrgDraft<'_>) -> Result<ValidOrg, FormErrors> {
    let mut errors = FormErrors::default();
    let name = draft.name.trim();
    let description = draft.description.trim();

    if name.is_empty() {
        errors.push(FieldError::new(Field::OrgName, "Organization name is required."));
    }

    if description.is_empty() {
        errors.push(FieldError::new(Field::OrgDescription, "Description is required."));
    } else if description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.push(FieldError::new(
            Field::OrgDescription,
            "Description must be 500 characters or fewer.",
        ));
    }

    if let Some(Err(e)) = draft.image.map(validate_image) {
        errors.push(e);
    }

    errors.finish(ValidOrg {
        name: name.to_string(),
        description: description.to_string(),
    })
}

/// Check the add-member form, returning the trimmed email and parsed role
pub fn validate_new_member(email: &str, role: &str) -> Result<(String, Role), FormErrors> {
    let mut errors = FormErrors::default();
    let email = email.trim();

    if email.is_empty() {
        errors.push(FieldError::new(Field::MemberEmail, "Email address is required."));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(Field::MemberEmail, "Please enter a valid email address."));
    }

    let role = role.parse::<Role>().ok();
    if role.is_none() {
        errors.push(FieldError::new(Field::MemberRole, "Please select a role."));
    }

    match role {
        Some(role) => errors.finish((email.to_string(), role)),
        None => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(size: u64) -> FileMeta {
        FileMeta { mime: "image/png".into(), size }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("jane.doe@example.com"));
        assert!(is_valid_email("  a@b.co "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
    }

    #[test]
    fn org_collects_every_error() {
        let bad = FileMeta { mime: "image/gif".into(), size: 1 };
        let errors = validate_org(OrgDraft { name: "  ", description: "", image: Some(&bad) }).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.message(Field::OrgName), Some("Organization name is required."));
        assert_eq!(errors.message(Field::OrgDescription), Some("Description is required."));
        assert_eq!(errors.message(Field::OrgImage), Some("Please upload a JPG or PNG image."));
    }

    #[test]
    fn org_trims_values() {
        let valid = validate_org(OrgDraft { name: " Chess Club ", description: " We play. ", image: None }).unwrap();
        assert_eq!(valid.name, "Chess Club");
        assert_eq!(valid.description, "We play.");
    }

    #[test]
    fn org_description_limit() {
        let at_limit = "x".repeat(DESCRIPTION_MAX_CHARS);
        assert!(validate_org(OrgDraft { name: "A", description: &at_limit, image: None }).is_ok());

        let over = "x".repeat(DESCRIPTION_MAX_CHARS + 1);
        let errors = validate_org(OrgDraft { name: "A", description: &over, image: None }).unwrap_err();
        assert_eq!(errors.message(Field::OrgDescription), Some("Description must be 500 characters or fewer."));
    }

    #[test]
    fn image_type_and_size() {
        assert!(validate_image(&png(MAX_IMAGE_BYTES)).is_ok());
        assert!(validate_image(&FileMeta { mime: "image/jpg".into(), size: 10 }).is_ok());
        assert!(validate_image(&FileMeta { mime: "image/jpeg".into(), size: 10 }).is_ok());
        let too_big = validate_image(&png(MAX_IMAGE_BYTES + 1)).unwrap_err();
        assert_eq!(too_big.message, "File size must be less than 10MB.");
        assert_eq!(too_big.field.error_id(), "image-error");
    }

    #[test]
    fn member_form() {
        assert_eq!(
            validate_new_member(" jane.doe@example.com ", "member"),
            Ok(("jane.doe@example.com".to_string(), Role::Member))
        );

        let errors = validate_new_member("not-an-email", "member").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message(Field::MemberEmail), Some("Please enter a valid email address."));

        let errors = validate_new_member("", "").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message(Field::MemberEmail), Some("Email address is required."));
        assert_eq!(errors.message(Field::MemberRole), Some("Please select a role."));
    }

    #[test]
    fn replace_keeps_one_error_per_field() {
        let mut errors = validate_new_member("", "").unwrap_err();
        errors.replace(validate_image(&png(MAX_IMAGE_BYTES + 1)).unwrap_err());
        errors.replace(validate_image(&png(MAX_IMAGE_BYTES * 2)).unwrap_err());
        assert_eq!(errors.len(), 3);

        errors.clear(Field::MemberEmail);
        assert_eq!(errors.message(Field::MemberEmail), None);
        assert_eq!(errors.message(Field::OrgImage), Some("File size must be less than 10MB."));
    }
}
