//! Branch merge and merge-conflict operations.
//!
//! The conflict queries (`GetMergeConflicts`, `DescribeMergeConflicts`,
//! `BatchDescribeMergeConflicts`) only report conflicts; the merge itself runs
//! on the service when one of the `MergeBranchesBy*` or
//! `CreateUnreferencedMergeCommit` requests is sent.

use serde::{Deserialize, Serialize};

use crate::types::{
    BatchDescribeMergeConflictsError, Conflict, ConflictDetailLevel, ConflictMetadata,
    ConflictResolution, ConflictResolutionStrategy, MergeHunk, MergeOption, ReplacementType,
};
use crate::validation::{self, Validate, ValidationError};

/// Knobs shared by every request that creates a merge commit.
///
/// Flattened into the request on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeCommitOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_detail_level: Option<ConflictDetailLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_resolution_strategy: Option<ConflictResolutionStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_empty_folders: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_resolution: Option<ConflictResolution>,
}

impl MergeCommitOptions {
    /// Resolve conflicts with the given entries instead of an automatic strategy.
    #[must_use]
    pub fn resolved_by(conflict_resolution: ConflictResolution) -> Self {
        Self {
            conflict_resolution_strategy: Some(ConflictResolutionStrategy::None),
            conflict_resolution: Some(conflict_resolution),
            ..Default::default()
        }
    }

    pub(crate) fn check(&self) -> Result<(), ValidationError> {
        let Some(resolution) = &self.conflict_resolution else {
            return Ok(());
        };
        for entry in &resolution.replace_contents {
            validation::not_empty("conflictResolution.replaceContents.filePath", &entry.file_path)?;
            if entry.replacement_type == ReplacementType::UseNewContent && entry.content.is_none() {
                return Err(ValidationError::Empty {
                    field: "conflictResolution.replaceContents.content",
                });
            }
        }
        Ok(())
    }
}

fn check_merge_target(
    repository_name: &str,
    source_commit_specifier: &str,
    destination_commit_specifier: &str,
) -> Result<(), ValidationError> {
    validation::repository_name("repositoryName", repository_name)?;
    validation::not_empty("sourceCommitSpecifier", source_commit_specifier)?;
    validation::not_empty("destinationCommitSpecifier", destination_commit_specifier)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMergeCommitRequest {
    pub repository_name: String,
    pub source_commit_specifier: String,
    pub destination_commit_specifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_detail_level: Option<ConflictDetailLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_resolution_strategy: Option<ConflictResolutionStrategy>,
}

impl GetMergeCommitRequest {
    pub fn new(
        repository_name: impl Into<String>,
        source_commit_specifier: impl Into<String>,
        destination_commit_specifier: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            source_commit_specifier: source_commit_specifier.into(),
            destination_commit_specifier: destination_commit_specifier.into(),
            ..Default::default()
        }
    }
}

impl Validate for GetMergeCommitRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_merge_target(
            &self.repository_name,
            &self.source_commit_specifier,
            &self.destination_commit_specifier,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetMergeCommitResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_commit_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMergeOptionsRequest {
    pub repository_name: String,
    pub source_commit_specifier: String,
    pub destination_commit_specifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_detail_level: Option<ConflictDetailLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_resolution_strategy: Option<ConflictResolutionStrategy>,
}

impl GetMergeOptionsRequest {
    pub fn new(
        repository_name: impl Into<String>,
        source_commit_specifier: impl Into<String>,
        destination_commit_specifier: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            source_commit_specifier: source_commit_specifier.into(),
            destination_commit_specifier: destination_commit_specifier.into(),
            ..Default::default()
        }
    }
}

impl Validate for GetMergeOptionsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_merge_target(
            &self.repository_name,
            &self.source_commit_specifier,
            &self.destination_commit_specifier,
        )
    }
}

/// Merge strategies that would succeed without manual resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetMergeOptionsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merge_options: Vec<MergeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_commit_id: Option<String>,
}

impl GetMergeOptionsResult {
    #[must_use]
    pub fn supports(&self, option: MergeOption) -> bool {
        self.merge_options.contains(&option)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMergeConflictsRequest {
    pub repository_name: String,
    pub destination_commit_specifier: String,
    pub source_commit_specifier: String,
    pub merge_option: MergeOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_detail_level: Option<ConflictDetailLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_conflict_files: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_resolution_strategy: Option<ConflictResolutionStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl GetMergeConflictsRequest {
    pub fn new(
        repository_name: impl Into<String>,
        source_commit_specifier: impl Into<String>,
        destination_commit_specifier: impl Into<String>,
        merge_option: MergeOption,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            destination_commit_specifier: destination_commit_specifier.into(),
            source_commit_specifier: source_commit_specifier.into(),
            merge_option,
            conflict_detail_level: None,
            max_conflict_files: None,
            conflict_resolution_strategy: None,
            next_token: None,
        }
    }
}

impl Validate for GetMergeConflictsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_merge_target(
            &self.repository_name,
            &self.source_commit_specifier,
            &self.destination_commit_specifier,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetMergeConflictsResult {
    /// False if at least one file conflicts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mergeable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflict_metadata_list: Vec<ConflictMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl GetMergeConflictsResult {
    /// Paths of files with a conflict on this page.
    #[must_use]
    pub fn conflicting_paths(&self) -> Vec<&str> {
        self.conflict_metadata_list
            .iter()
            .filter(|m| m.has_conflict())
            .filter_map(|m| m.file_path.as_deref())
            .collect()
    }
}

/// Hunk-level detail for one conflicted file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeMergeConflictsRequest {
    pub repository_name: String,
    pub destination_commit_specifier: String,
    pub source_commit_specifier: String,
    pub merge_option: MergeOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_merge_hunks: Option<i32>,
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_detail_level: Option<ConflictDetailLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_resolution_strategy: Option<ConflictResolutionStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeMergeConflictsRequest {
    pub fn new(
        repository_name: impl Into<String>,
        source_commit_specifier: impl Into<String>,
        destination_commit_specifier: impl Into<String>,
        merge_option: MergeOption,
        file_path: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            destination_commit_specifier: destination_commit_specifier.into(),
            source_commit_specifier: source_commit_specifier.into(),
            merge_option,
            max_merge_hunks: None,
            file_path: file_path.into(),
            conflict_detail_level: None,
            conflict_resolution_strategy: None,
            next_token: None,
        }
    }
}

impl Validate for DescribeMergeConflictsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_merge_target(
            &self.repository_name,
            &self.source_commit_specifier,
            &self.destination_commit_specifier,
        )?;
        validation::not_empty("filePath", &self.file_path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribeMergeConflictsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_metadata: Option<ConflictMetadata>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merge_hunks: Vec<MergeHunk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_commit_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDescribeMergeConflictsRequest {
    pub repository_name: String,
    pub destination_commit_specifier: String,
    pub source_commit_specifier: String,
    pub merge_option: MergeOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_merge_hunks: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_conflict_files: Option<i32>,
    /// Restrict to these paths; empty means every conflicted file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_detail_level: Option<ConflictDetailLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_resolution_strategy: Option<ConflictResolutionStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl BatchDescribeMergeConflictsRequest {
    pub fn new(
        repository_name: impl Into<String>,
        source_commit_specifier: impl Into<String>,
        destination_commit_specifier: impl Into<String>,
        merge_option: MergeOption,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            destination_commit_specifier: destination_commit_specifier.into(),
            source_commit_specifier: source_commit_specifier.into(),
            merge_option,
            max_merge_hunks: None,
            max_conflict_files: None,
            file_paths: Vec::new(),
            conflict_detail_level: None,
            conflict_resolution_strategy: None,
            next_token: None,
        }
    }
}

impl Validate for BatchDescribeMergeConflictsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_merge_target(
            &self.repository_name,
            &self.source_commit_specifier,
            &self.destination_commit_specifier,
        )
    }
}

/// Conflicts described, plus files whose description failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchDescribeMergeConflictsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<Conflict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<BatchDescribeMergeConflictsError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_commit_id: Option<String>,
}

impl BatchDescribeMergeConflictsResult {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// File paths whose conflicts could not be described.
    #[must_use]
    pub fn failed_paths(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(|e| e.file_path.as_deref())
            .collect()
    }
}

/// Merge two commits into a commit that no branch points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnreferencedMergeCommitRequest {
    pub repository_name: String,
    pub source_commit_specifier: String,
    pub destination_commit_specifier: String,
    pub merge_option: MergeOption,
    #[serde(flatten)]
    pub options: MergeCommitOptions,
}

impl CreateUnreferencedMergeCommitRequest {
    pub fn new(
        repository_name: impl Into<String>,
        source_commit_specifier: impl Into<String>,
        destination_commit_specifier: impl Into<String>,
        merge_option: MergeOption,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            source_commit_specifier: source_commit_specifier.into(),
            destination_commit_specifier: destination_commit_specifier.into(),
            merge_option,
            options: MergeCommitOptions::default(),
        }
    }
}

impl Validate for CreateUnreferencedMergeCommitRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_merge_target(
            &self.repository_name,
            &self.source_commit_specifier,
            &self.destination_commit_specifier,
        )?;
        self.options.check()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUnreferencedMergeCommitResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeBranchesByFastForwardRequest {
    pub repository_name: String,
    pub source_commit_specifier: String,
    pub destination_commit_specifier: String,
    /// Branch to move; defaults to the destination when it is a branch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_branch: Option<String>,
}

impl MergeBranchesByFastForwardRequest {
    pub fn new(
        repository_name: impl Into<String>,
        source_commit_specifier: impl Into<String>,
        destination_commit_specifier: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            source_commit_specifier: source_commit_specifier.into(),
            destination_commit_specifier: destination_commit_specifier.into(),
            target_branch: None,
        }
    }
}

impl Validate for MergeBranchesByFastForwardRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_merge_target(
            &self.repository_name,
            &self.source_commit_specifier,
            &self.destination_commit_specifier,
        )?;
        validation::optional_length(
            "targetBranch",
            self.target_branch.as_deref(),
            1,
            validation::BRANCH_NAME_MAX,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeBranchesByFastForwardResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeBranchesBySquashRequest {
    pub repository_name: String,
    pub source_commit_specifier: String,
    pub destination_commit_specifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_branch: Option<String>,
    #[serde(flatten)]
    pub options: MergeCommitOptions,
}

impl MergeBranchesBySquashRequest {
    pub fn new(
        repository_name: impl Into<String>,
        source_commit_specifier: impl Into<String>,
        destination_commit_specifier: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            source_commit_specifier: source_commit_specifier.into(),
            destination_commit_specifier: destination_commit_specifier.into(),
            ..Default::default()
        }
    }
}

impl Validate for MergeBranchesBySquashRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_merge_target(
            &self.repository_name,
            &self.source_commit_specifier,
            &self.destination_commit_specifier,
        )?;
        self.options.check()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeBranchesBySquashResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeBranchesByThreeWayRequest {
    pub repository_name: String,
    pub source_commit_specifier: String,
    pub destination_commit_specifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_branch: Option<String>,
    #[serde(flatten)]
    pub options: MergeCommitOptions,
}

impl MergeBranchesByThreeWayRequest {
    pub fn new(
        repository_name: impl Into<String>,
        source_commit_specifier: impl Into<String>,
        destination_commit_specifier: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            source_commit_specifier: source_commit_specifier.into(),
            destination_commit_specifier: destination_commit_specifier.into(),
            ..Default::default()
        }
    }
}

impl Validate for MergeBranchesByThreeWayRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_merge_target(
            &self.repository_name,
            &self.source_commit_specifier,
            &self.destination_commit_specifier,
        )?;
        self.options.check()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergeBranchesByThreeWayResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
}
