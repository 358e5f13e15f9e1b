use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum accepted comment length, in characters.
pub const MAX_COMMENT_LEN: usize = 100;

/// User feedback form model, shared with the backend wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackModel {
    pub email_address: String,
    pub rating: i32,
    pub comment: String,
}

impl Default for FeedbackModel {
    fn default() -> Self {
        Self {
            email_address: String::new(),
            rating: 1,
            comment: String::new(),
        }
    }
}

/// A single form constraint violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    EmailMissing,
    EmailInvalid,
    RatingOutOfRange,
    CommentTooLong,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmailMissing => write!(f, "Email address is required"),
            ValidationIssue::EmailInvalid => write!(f, "Email address is not valid"),
            ValidationIssue::RatingOutOfRange => write!(f, "Rating must be between 1 and 5"),
            ValidationIssue::CommentTooLong => {
                write!(f, "Comment must be at most {} characters", MAX_COMMENT_LEN)
            }
        }
    }
}

impl FeedbackModel {
    /// Check the form constraints enforced before submission.
    ///
    /// Validation failures stay on the form; they are never dispatched as
    /// actions.
    pub fn validate(&self) -> Result<(), Vec<ValidationIssue>> {
        let mut issues = Vec::new();
        if self.email_address.trim().is_empty() {
            issues.push(ValidationIssue::EmailMissing);
        } else if !is_valid_email(&self.email_address) {
            issues.push(ValidationIssue::EmailInvalid);
        }
        if !(1..=5).contains(&self.rating) {
            issues.push(ValidationIssue::RatingOutOfRange);
        }
        if self.comment.chars().count() > MAX_COMMENT_LEN {
            issues.push(ValidationIssue::CommentTooLong);
        }
        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

fn is_valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !address.chars().any(char::is_whitespace)
}
