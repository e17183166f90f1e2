//! Repository operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{RepositoryMetadata, RepositoryNameIdPair};
use crate::types::{Order, SortBy};
use crate::validation::{self, Validate, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepositoryRequest {
    pub repository_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_description: Option<String>,
    /// Tags applied to the new repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,
}

impl CreateRepositoryRequest {
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            ..Default::default()
        }
    }
}

impl Validate for CreateRepositoryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::optional_length(
            "repositoryDescription",
            self.repository_description.as_deref(),
            0,
            validation::DESCRIPTION_MAX,
        )?;
        if let Some(tags) = &self.tags {
            validation::tags("tags", tags)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRepositoryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_metadata: Option<RepositoryMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRepositoryRequest {
    pub repository_name: String,
}

impl DeleteRepositoryRequest {
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
        }
    }
}

impl Validate for DeleteRepositoryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

/// Deleting a repository that does not exist succeeds with no ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteRepositoryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRepositoryRequest {
    pub repository_name: String,
}

impl GetRepositoryRequest {
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
        }
    }
}

impl Validate for GetRepositoryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetRepositoryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_metadata: Option<RepositoryMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetRepositoriesRequest {
    pub repository_names: Vec<String>,
}

impl BatchGetRepositoriesRequest {
    pub fn new<I, S>(repository_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            repository_names: repository_names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for BatchGetRepositoriesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::items(
            "repositoryNames",
            &self.repository_names,
            validation::BATCH_REPOSITORY_NAMES_MAX,
        )?;
        for name in &self.repository_names {
            validation::repository_name("repositoryNames", name)?;
        }
        Ok(())
    }
}

/// Repositories found, plus the requested names that were not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchGetRepositoriesResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<RepositoryMetadata>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub repositories_not_found: Vec<String>,
}

impl BatchGetRepositoriesResult {
    /// True if every requested repository was returned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.repositories_not_found.is_empty()
    }

    /// Look up a returned repository by name.
    #[must_use]
    pub fn get(&self, repository_name: &str) -> Option<&RepositoryMetadata> {
        self.repositories
            .iter()
            .find(|r| r.repository_name.as_deref() == Some(repository_name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRepositoriesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl Validate for ListRepositoriesRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRepositoriesResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<RepositoryNameIdPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRepositoryDescriptionRequest {
    pub repository_name: String,
    /// `None` clears the description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_description: Option<String>,
}

impl Validate for UpdateRepositoryDescriptionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::optional_length(
            "repositoryDescription",
            self.repository_description.as_deref(),
            0,
            validation::DESCRIPTION_MAX,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateRepositoryDescriptionResult {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRepositoryNameRequest {
    pub old_name: String,
    pub new_name: String,
}

impl UpdateRepositoryNameRequest {
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }
}

impl Validate for UpdateRepositoryNameRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("oldName", &self.old_name)?;
        validation::repository_name("newName", &self.new_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdateRepositoryNameResult {}
