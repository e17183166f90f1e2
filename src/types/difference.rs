//! Blob and difference data models.

use serde::{Deserialize, Serialize};

use super::enums::ChangeType;

/// A blob at a path, with its Git mode string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlobMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Raw Git mode, e.g. `"100644"` or `"120000"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// One changed path between two commit specifiers.
///
/// An added file has no `before_blob`; a deleted file has no `after_blob`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Difference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_blob: Option<BlobMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_blob: Option<BlobMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<ChangeType>,
}

impl Difference {
    /// The path this difference concerns, preferring the new location.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.after_blob
            .as_ref()
            .and_then(|b| b.path.as_deref())
            .or_else(|| self.before_blob.as_ref().and_then(|b| b.path.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_file_difference() {
        let diff = Difference {
            before_blob: Some(BlobMetadata {
                blob_id: Some("abc123".to_string()),
                path: Some("src/a.txt".to_string()),
                mode: Some("100644".to_string()),
            }),
            after_blob: None,
            change_type: Some(ChangeType::Deleted),
        };

        let value = serde_json::to_value(&diff).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(!obj.contains_key("afterBlob"));
        assert_eq!(value["changeType"], "D");
        assert_eq!(value["beforeBlob"]["blobId"], "abc123");
        assert_eq!(value["beforeBlob"]["path"], "src/a.txt");
        assert_eq!(value["beforeBlob"]["mode"], "100644");

        assert_eq!(diff.path(), Some("src/a.txt"));
    }

    #[test]
    fn test_path_prefers_after_blob() {
        let diff = Difference {
            before_blob: Some(BlobMetadata {
                path: Some("old.txt".to_string()),
                ..Default::default()
            }),
            after_blob: Some(BlobMetadata {
                path: Some("new.txt".to_string()),
                ..Default::default()
            }),
            change_type: Some(ChangeType::Modified),
        };
        assert_eq!(diff.path(), Some("new.txt"));
    }
}
