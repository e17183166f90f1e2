//! Commit and difference operations.

use serde::{Deserialize, Serialize};

use crate::types::{
    BatchGetCommitsError, Commit, DeleteFileEntry, Difference, FileMetadata, PutFileEntry,
    SetFileModeEntry,
};
use crate::validation::{self, Validate, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCommitRequest {
    pub repository_name: String,
    pub commit_id: String,
}

impl GetCommitRequest {
    pub fn new(repository_name: impl Into<String>, commit_id: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            commit_id: commit_id.into(),
        }
    }
}

impl Validate for GetCommitRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::not_empty("commitId", &self.commit_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetCommitResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<Commit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetCommitsRequest {
    /// Full commit IDs; at most 100
    pub commit_ids: Vec<String>,
    pub repository_name: String,
}

impl BatchGetCommitsRequest {
    pub fn new<I, S>(repository_name: impl Into<String>, commit_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commit_ids: commit_ids.into_iter().map(Into::into).collect(),
            repository_name: repository_name.into(),
        }
    }
}

impl Validate for BatchGetCommitsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::items("commitIds", &self.commit_ids, validation::BATCH_COMMIT_IDS_MAX)?;
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

/// Commits found, plus one error entry per commit ID that could not be
/// returned. The call as a whole succeeds either way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchGetCommitsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commits: Vec<Commit>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<BatchGetCommitsError>,
}

impl BatchGetCommitsResult {
    /// True if no commit failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Commit IDs that could not be returned.
    #[must_use]
    pub fn failed_commit_ids(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(|e| e.commit_id.as_deref())
            .collect()
    }
}

/// Create a commit on a branch from file additions, deletions and mode
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommitRequest {
    pub repository_name: String,
    pub branch_name: String,
    /// Required unless the branch is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_commit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_empty_folders: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub put_files: Vec<PutFileEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delete_files: Vec<DeleteFileEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub set_file_modes: Vec<SetFileModeEntry>,
}

impl CreateCommitRequest {
    pub fn new(repository_name: impl Into<String>, branch_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            branch_name: branch_name.into(),
            ..Default::default()
        }
    }

    /// True if the commit would not change any file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.put_files.is_empty() && self.delete_files.is_empty() && self.set_file_modes.is_empty()
    }
}

impl Validate for CreateCommitRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::branch_name("branchName", &self.branch_name)?;
        let total: usize = self
            .put_files
            .iter()
            .filter_map(|f| f.file_content.as_ref())
            .map(Vec::len)
            .sum();
        if total > validation::FILE_CONTENT_MAX_BYTES {
            return Err(ValidationError::TooLarge {
                field: "putFiles",
                max: validation::FILE_CONTENT_MAX_BYTES,
                actual: total,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCommitResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files_added: Vec<FileMetadata>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files_updated: Vec<FileMetadata>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files_deleted: Vec<FileMetadata>,
}

/// Differences between two commit specifiers, optionally narrowed to a path.
///
/// The pagination fields of this operation are capitalised on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDifferencesRequest {
    pub repository_name: String,
    /// Omit to compare against the empty tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_commit_specifier: Option<String>,
    pub after_commit_specifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_path: Option<String>,
    #[serde(
        rename = "MaxResults",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_results: Option<i32>,
    #[serde(rename = "NextToken", default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl GetDifferencesRequest {
    pub fn new(
        repository_name: impl Into<String>,
        after_commit_specifier: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            after_commit_specifier: after_commit_specifier.into(),
            ..Default::default()
        }
    }
}

impl Validate for GetDifferencesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::not_empty("afterCommitSpecifier", &self.after_commit_specifier)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetDifferencesResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub differences: Vec<Difference>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileMode;

    #[test]
    fn test_batch_get_commits_partial_failure() {
        let json = r#"{
            "commits": [{"commitId": "317f8570EXAMPLE", "parents": []}],
            "errors": [{
                "commitId": "deadbeef",
                "errorCode": "CommitDoesNotExistException",
                "errorMessage": "Could not find commit"
            }]
        }"#;
        let result: BatchGetCommitsResult = serde_json::from_str(json).unwrap();

        assert!(!result.is_complete());
        assert_eq!(result.commits.len(), 1);
        assert_eq!(result.failed_commit_ids(), vec!["deadbeef"]);
    }

    #[test]
    fn test_batch_get_commits_limits() {
        let empty = BatchGetCommitsRequest::new("MyDemoRepo", Vec::<String>::new());
        assert_eq!(
            empty.validate(),
            Err(ValidationError::Empty { field: "commitIds" })
        );

        let ids: Vec<String> = (0..101).map(|i| format!("{i:040x}")).collect();
        let too_many = BatchGetCommitsRequest::new("MyDemoRepo", ids);
        assert!(matches!(
            too_many.validate(),
            Err(ValidationError::TooManyItems { max: 100, .. })
        ));
    }

    #[test]
    fn test_create_commit_serialize() {
        let request = CreateCommitRequest {
            parent_commit_id: Some("4c925148EXAMPLE".to_string()),
            commit_message: Some("Add readme".to_string()),
            put_files: vec![PutFileEntry::with_content("README.md", "# hi\n")],
            set_file_modes: vec![SetFileModeEntry {
                file_path: "run.sh".to_string(),
                file_mode: FileMode::Executable,
            }],
            ..CreateCommitRequest::new("MyDemoRepo", "main")
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["putFiles"][0]["fileContent"], "IyBoaQo=");
        assert_eq!(value["setFileModes"][0]["fileMode"], "EXECUTABLE");
        assert!(value.get("deleteFiles").is_none());
        assert!(value.get("authorName").is_none());
        assert!(!request.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_get_differences_capitalised_paging() {
        let request = GetDifferencesRequest {
            before_commit_specifier: Some("main".to_string()),
            max_results: Some(50),
            next_token: Some("page2".to_string()),
            ..GetDifferencesRequest::new("MyDemoRepo", "feature")
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["MaxResults"], 50);
        assert_eq!(value["NextToken"], "page2");
        assert!(value.get("maxResults").is_none());

        let result: GetDifferencesResult =
            serde_json::from_str(r#"{"differences": [], "NextToken": "page3"}"#).unwrap();
        assert_eq!(result.next_token.as_deref(), Some("page3"));
    }
}
