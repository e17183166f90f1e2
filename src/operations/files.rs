//! Blob, file and folder operations.

use serde::{Deserialize, Serialize};

use crate::types::{File, FileMode, Folder, SubModule, SymbolicLink};
use crate::validation::{self, Validate, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetBlobRequest {
    pub repository_name: String,
    pub blob_id: String,
}

impl GetBlobRequest {
    pub fn new(repository_name: impl Into<String>, blob_id: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            blob_id: blob_id.into(),
        }
    }
}

impl Validate for GetBlobRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::not_empty("blobId", &self.blob_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetBlobResult {
    /// Raw blob bytes
    #[serde(with = "crate::encoding::base64_bytes")]
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFileRequest {
    pub repository_name: String,
    /// Commit, branch or tag; defaults to the head of the default branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_specifier: Option<String>,
    pub file_path: String,
}

impl GetFileRequest {
    pub fn new(repository_name: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            commit_specifier: None,
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn at(mut self, commit_specifier: impl Into<String>) -> Self {
        self.commit_specifier = Some(commit_specifier.into());
        self
    }
}

impl Validate for GetFileRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::not_empty("filePath", &self.file_path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetFileResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_mode: Option<FileMode>,
    /// Size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<i64>,
    #[serde(with = "crate::encoding::base64_bytes")]
    pub file_content: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFolderRequest {
    pub repository_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_specifier: Option<String>,
    /// `/` or an empty string lists the repository root
    pub folder_path: String,
}

impl GetFolderRequest {
    pub fn new(repository_name: impl Into<String>, folder_path: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            commit_specifier: None,
            folder_path: folder_path.into(),
        }
    }
}

impl Validate for GetFolderRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetFolderResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_folders: Vec<Folder>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub symbolic_links: Vec<SymbolicLink>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_modules: Vec<SubModule>,
}

impl GetFolderResult {
    /// Number of entries of every kind in the folder.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.sub_folders.len() + self.files.len() + self.symbolic_links.len() + self.sub_modules.len()
    }
}

/// Add or replace one file in a single-file commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutFileRequest {
    pub repository_name: String,
    pub branch_name: String,
    #[serde(with = "crate::encoding::base64_bytes")]
    pub file_content: Vec<u8>,
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_mode: Option<FileMode>,
    /// Required unless the branch is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_commit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    /// Author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl PutFileRequest {
    pub fn new(
        repository_name: impl Into<String>,
        branch_name: impl Into<String>,
        file_path: impl Into<String>,
        file_content: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            branch_name: branch_name.into(),
            file_content: file_content.into(),
            file_path: file_path.into(),
            ..Default::default()
        }
    }
}

impl Validate for PutFileRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::branch_name("branchName", &self.branch_name)?;
        validation::not_empty("filePath", &self.file_path)?;
        validation::byte_size(
            "fileContent",
            &self.file_content,
            validation::FILE_CONTENT_MAX_BYTES,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PutFileResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileRequest {
    pub repository_name: String,
    pub branch_name: String,
    pub file_path: String,
    /// Must be the current tip of the branch
    pub parent_commit_id: String,
    /// Keep the containing folder if this was its last file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_empty_folders: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl DeleteFileRequest {
    pub fn new(
        repository_name: impl Into<String>,
        branch_name: impl Into<String>,
        file_path: impl Into<String>,
        parent_commit_id: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            branch_name: branch_name.into(),
            file_path: file_path.into(),
            parent_commit_id: parent_commit_id.into(),
            ..Default::default()
        }
    }
}

impl Validate for DeleteFileRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::branch_name("branchName", &self.branch_name)?;
        validation::not_empty("filePath", &self.file_path)?;
        validation::not_empty("parentCommitId", &self.parent_commit_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteFileResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}
