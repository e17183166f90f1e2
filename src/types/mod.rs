//! Value types shared by operation requests and results.

pub mod approval;
pub mod comment;
pub mod commit;
pub mod difference;
pub mod enums;
pub mod file;
pub mod merge;
pub mod pull_request;
pub mod repository;
pub mod timestamp;
pub mod trigger;

// Re-exports
pub use approval::{
    content_sha256, Approval, ApprovalRule, ApprovalRuleEventMetadata,
    ApprovalRuleOverriddenEventMetadata, ApprovalRuleTemplate, ApprovalStateChangedEventMetadata,
    BatchAssociateApprovalRuleTemplateWithRepositoriesError,
    BatchDisassociateApprovalRuleTemplateFromRepositoriesError, Evaluation,
    OriginApprovalRuleTemplate, RuleContent, RuleStatement, RULE_CONTENT_VERSION,
};
pub use comment::{
    Comment, CommentsForComparedCommit, CommentsForPullRequest, Location, ReactionForComment,
    ReactionValueFormats,
};
pub use commit::{BatchGetCommitsError, Commit, UserInfo};
pub use difference::{BlobMetadata, Difference};
pub use enums::{
    ApprovalState, ChangeType, ConflictDetailLevel, ConflictResolutionStrategy, FileMode,
    MergeOption, ObjectType, Order, OverrideStatus, PullRequestEventType, PullRequestStatus,
    RelativeFileVersion, ReplacementType, RepositoryTriggerEvent, SortBy,
};
pub use file::{
    DeleteFileEntry, File, FileMetadata, Folder, PutFileEntry, SetFileModeEntry,
    SourceFileSpecifier, SubModule, SymbolicLink,
};
pub use merge::{
    BatchDescribeMergeConflictsError, Conflict, ConflictMetadata, ConflictResolution, FileModes,
    FileSizes, IsBinaryFile, MergeHunk, MergeHunkDetail, MergeMetadata, MergeOperations,
    ObjectTypes, ReplaceContentEntry,
};
pub use pull_request::{
    PullRequest, PullRequestCreatedEventMetadata, PullRequestEvent,
    PullRequestMergedStateChangedEventMetadata, PullRequestSourceReferenceUpdatedEventMetadata,
    PullRequestStatusChangedEventMetadata, PullRequestTarget, Target,
};
pub use repository::{BranchInfo, RepositoryMetadata, RepositoryNameIdPair};
pub use timestamp::Timestamp;
pub use trigger::{RepositoryTrigger, RepositoryTriggerExecutionFailure};
