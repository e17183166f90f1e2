//! Client-side checks for documented parameter constraints.
//!
//! The service enforces all of these itself; checking before a request is
//! encoded only turns an avoidable round trip into a local error. Whether the
//! codec runs them is controlled by [`crate::config::CodecConfig`].

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Repository names: 1-100 characters of letters, digits, `_`, `.` and `-`.
pub const REPOSITORY_NAME_MAX: usize = 100;
/// Branch and reference names.
pub const BRANCH_NAME_MAX: usize = 256;
/// Repository and approval rule template descriptions.
pub const DESCRIPTION_MAX: usize = 1000;
/// Approval rule and approval rule template names.
pub const APPROVAL_RULE_NAME_MAX: usize = 100;
/// Approval rule and approval rule template content documents.
pub const APPROVAL_RULE_CONTENT_MAX: usize = 3000;
/// Pull request titles.
pub const PULL_REQUEST_TITLE_MAX: usize = 150;
/// Pull request descriptions.
pub const PULL_REQUEST_DESCRIPTION_MAX: usize = 10240;
/// Comment bodies.
pub const COMMENT_CONTENT_MAX: usize = 10240;
/// Tag keys.
pub const TAG_KEY_MAX: usize = 128;
/// Tag values.
pub const TAG_VALUE_MAX: usize = 256;
/// Commit IDs accepted by a single batch lookup.
pub const BATCH_COMMIT_IDS_MAX: usize = 100;
/// Repository names accepted by a single batch lookup.
pub const BATCH_REPOSITORY_NAMES_MAX: usize = 25;
/// Bytes of file content accepted by a single put.
pub const FILE_CONTENT_MAX_BYTES: usize = 6 * 1024 * 1024;

static REPOSITORY_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("repository name pattern compiles"));

/// A documented constraint that a request value does not meet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be between {min} and {max} characters, got {actual}")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("{field} contains characters outside [A-Za-z0-9_.-]: {value:?}")]
    Pattern { field: &'static str, value: String },

    #[error("{field} accepts at most {max} entries, got {actual}")]
    TooManyItems {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} accepts at most {max} bytes, got {actual}")]
    TooLarge {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Implemented by every request type. Requests without documented
/// constraints use the default, which accepts anything.
pub trait Validate {
    /// Check the request against its documented constraints.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Reject an empty string.
pub fn not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Check a character count against an inclusive range.
pub fn length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual == 0 && min > 0 {
        return Err(ValidationError::Empty { field });
    }
    if actual < min || actual > max {
        return Err(ValidationError::Length {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}

/// [`length`] for an optional value; `None` passes.
pub fn optional_length(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| length(field, v, min, max))
}

/// Repository names: length and character class.
pub fn repository_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    length(field, value, 1, REPOSITORY_NAME_MAX)?;
    if !REPOSITORY_NAME_PATTERN.is_match(value) {
        return Err(ValidationError::Pattern {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// [`repository_name`] for an optional value.
pub fn optional_repository_name(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| repository_name(field, v))
}

/// Branch names: 1-256 characters.
pub fn branch_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    length(field, value, 1, BRANCH_NAME_MAX)
}

/// Check a list is non-empty and no longer than `max`.
pub fn items<T>(field: &'static str, values: &[T], max: usize) -> Result<(), ValidationError> {
    if values.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if values.len() > max {
        return Err(ValidationError::TooManyItems {
            field,
            max,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Check a byte payload size.
pub fn byte_size(field: &'static str, value: &[u8], max: usize) -> Result<(), ValidationError> {
    if value.len() > max {
        return Err(ValidationError::TooLarge {
            field,
            max,
            actual: value.len(),
        });
    }
    Ok(())
}

/// Tag maps: every key 1-128 characters, every value at most 256.
pub fn tags<'a>(
    field: &'static str,
    entries: impl IntoIterator<Item = (&'a String, &'a String)>,
) -> Result<(), ValidationError> {
    for (key, value) in entries {
        length(field, key, 1, TAG_KEY_MAX)?;
        length(field, value, 0, TAG_VALUE_MAX)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_name_accepts_word_dot_dash() {
        assert!(repository_name("repositoryName", "my-repo").is_ok());
        assert!(repository_name("repositoryName", "My_Repo.v2").is_ok());
        assert!(repository_name("repositoryName", &"a".repeat(100)).is_ok());
    }

    #[test]
    fn test_repository_name_rejects_bad_input() {
        assert_eq!(
            repository_name("repositoryName", ""),
            Err(ValidationError::Empty {
                field: "repositoryName"
            })
        );
        assert_eq!(
            repository_name("repositoryName", &"a".repeat(101)),
            Err(ValidationError::Length {
                field: "repositoryName",
                min: 1,
                max: 100,
                actual: 101,
            })
        );
        assert!(matches!(
            repository_name("repositoryName", "my repo"),
            Err(ValidationError::Pattern { .. })
        ));
        assert!(matches!(
            repository_name("repositoryName", "a/b"),
            Err(ValidationError::Pattern { .. })
        ));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 150 multi-byte characters fit a 150 character title
        let title = "é".repeat(150);
        assert!(length("title", &title, 1, PULL_REQUEST_TITLE_MAX).is_ok());
    }

    #[test]
    fn test_optional_length_skips_none() {
        assert!(optional_length("repositoryDescription", None, 0, DESCRIPTION_MAX).is_ok());
        assert!(
            optional_length("repositoryDescription", Some(&"x".repeat(1001)), 0, DESCRIPTION_MAX)
                .is_err()
        );
    }

    #[test]
    fn test_items_bounds() {
        let ids: Vec<String> = Vec::new();
        assert_eq!(
            items("commitIds", &ids, BATCH_COMMIT_IDS_MAX),
            Err(ValidationError::Empty { field: "commitIds" })
        );

        let ids = vec!["a".to_string(); 101];
        assert!(matches!(
            items("commitIds", &ids, BATCH_COMMIT_IDS_MAX),
            Err(ValidationError::TooManyItems { actual: 101, .. })
        ));
    }

    #[test]
    fn test_byte_size() {
        assert!(byte_size("fileContent", &[0u8; 16], 16).is_ok());
        assert!(byte_size("fileContent", &[0u8; 17], 16).is_err());
    }
}
