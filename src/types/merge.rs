//! Merge conflict data models.
//!
//! These types describe a three-way merge as the service sees it: a source,
//! a destination and their merge base. Nothing here merges anything; the
//! service computes conflicts and applies resolutions.

use serde::{Deserialize, Serialize};

use super::enums::{ChangeType, FileMode, MergeOption, ObjectType, ReplacementType};
use super::file::{DeleteFileEntry, SetFileModeEntry};

/// File modes of a path on each side of a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileModes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<FileMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<FileMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<FileMode>,
}

/// File sizes in bytes on each side of a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileSizes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<i64>,
}

/// Object kinds of a path on each side of a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectTypes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ObjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<ObjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<ObjectType>,
}

/// Whether the file is binary on each side of a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IsBinaryFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<bool>,
}

impl IsBinaryFile {
    /// True if any side is binary. Binary files cannot be resolved hunk by hunk.
    #[must_use]
    pub fn any(&self) -> bool {
        [self.source, self.destination, self.base]
            .iter()
            .any(|side| side.unwrap_or(false))
    }
}

/// What each side did to the path relative to the merge base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeOperations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ChangeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<ChangeType>,
}

/// Line range and content of one side of a hunk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeHunkDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hunk_content: Option<String>,
}

/// A region of a file that differs between the sides of a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeHunk {
    /// Whether the region conflicts or merges cleanly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_conflict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<MergeHunkDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<MergeHunkDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<MergeHunkDetail>,
}

/// Per-file summary of a merge conflict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConflictMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_sizes: Option<FileSizes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_modes: Option<FileModes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_types: Option<ObjectTypes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_conflicts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_binary_file: Option<IsBinaryFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_conflict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_mode_conflict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type_conflict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_operations: Option<MergeOperations>,
}

impl ConflictMetadata {
    /// True if the file has any kind of conflict.
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        self.content_conflict.unwrap_or(false)
            || self.file_mode_conflict.unwrap_or(false)
            || self.object_type_conflict.unwrap_or(false)
    }
}

/// A conflicted file and its hunks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Conflict {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_metadata: Option<ConflictMetadata>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merge_hunks: Vec<MergeHunk>,
}

/// Failure to describe conflicts for one file in a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchDescribeMergeConflictsError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Merge state of a pull request target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_merged: Option<bool>,
    /// ARN of the user who merged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_option: Option<MergeOption>,
}

/// How to resolve one conflicted file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceContentEntry {
    pub file_path: String,
    pub replacement_type: ReplacementType,
    /// Required when `replacement_type` is `USE_NEW_CONTENT`.
    #[serde(
        default,
        with = "crate::encoding::base64_bytes::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_mode: Option<FileMode>,
}

impl ReplaceContentEntry {
    /// Keep one side's version of `file_path`.
    pub fn keep(file_path: impl Into<String>, replacement_type: ReplacementType) -> Self {
        Self {
            file_path: file_path.into(),
            replacement_type,
            content: None,
            file_mode: None,
        }
    }

    /// Replace `file_path` with hand-merged content.
    pub fn new_content(file_path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_path: file_path.into(),
            replacement_type: ReplacementType::UseNewContent,
            content: Some(content.into()),
            file_mode: None,
        }
    }
}

/// Resolutions applied when merging with `ConflictResolutionStrategy::None`
/// or on top of an automatic strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictResolution {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replace_contents: Vec<ReplaceContentEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delete_files: Vec<DeleteFileEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub set_file_modes: Vec<SetFileModeEntry>,
}

impl ConflictResolution {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replace_contents.is_empty()
            && self.delete_files.is_empty()
            && self.set_file_modes.is_empty()
    }
}
