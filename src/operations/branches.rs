//! Branch operations.

use serde::{Deserialize, Serialize};

use crate::types::BranchInfo;
use crate::validation::{self, Validate, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    pub repository_name: String,
    pub branch_name: String,
    /// Commit the new branch points at
    pub commit_id: String,
}

impl CreateBranchRequest {
    pub fn new(
        repository_name: impl Into<String>,
        branch_name: impl Into<String>,
        commit_id: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            branch_name: branch_name.into(),
            commit_id: commit_id.into(),
        }
    }
}

impl Validate for CreateBranchRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::branch_name("branchName", &self.branch_name)?;
        validation::not_empty("commitId", &self.commit_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreateBranchResult {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBranchRequest {
    pub repository_name: String,
    pub branch_name: String,
}

impl DeleteBranchRequest {
    pub fn new(repository_name: impl Into<String>, branch_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            branch_name: branch_name.into(),
        }
    }
}

impl Validate for DeleteBranchRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::branch_name("branchName", &self.branch_name)
    }
}

/// The branch as it was before deletion. Empty if it did not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteBranchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_branch: Option<BranchInfo>,
}

/// Both fields are optional on the wire; the service requires them anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBranchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

impl GetBranchRequest {
    pub fn new(repository_name: impl Into<String>, branch_name: impl Into<String>) -> Self {
        Self {
            repository_name: Some(repository_name.into()),
            branch_name: Some(branch_name.into()),
        }
    }
}

impl Validate for GetBranchRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::optional_repository_name("repositoryName", self.repository_name.as_deref())?;
        validation::optional_length(
            "branchName",
            self.branch_name.as_deref(),
            1,
            validation::BRANCH_NAME_MAX,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetBranchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<BranchInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBranchesRequest {
    pub repository_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListBranchesRequest {
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            next_token: None,
        }
    }
}

impl Validate for ListBranchesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListBranchesResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDefaultBranchRequest {
    pub repository_name: String,
    pub default_branch_name: String,
}

impl UpdateDefaultBranchRequest {
    pub fn new(repository_name: impl Into<String>, default_branch_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            default_branch_name: default_branch_name.into(),
        }
    }
}

impl Validate for UpdateDefaultBranchRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::branch_name("defaultBranchName", &self.default_branch_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateDefaultBranchResult {}
