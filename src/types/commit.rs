//! Commit data models.

use serde::{Deserialize, Serialize};

/// Author or committer identity attached to a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Git-formatted date, e.g. `"1484167798 -0800"`. Kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// A commit, including its author and committer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Commit {
    /// Full SHA of the commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    /// Tree the commit points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    /// Parent commit IDs, first parent first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer: Option<UserInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
}

impl Commit {
    /// True for merge commits (more than one parent).
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// Per-commit failure inside a batch commit lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchGetCommitsError {
    /// The commit ID that could not be returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    /// e.g. `CommitIdDoesNotExistException`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
