//! Request and result types, one pair per API operation.
//!
//! Requests take their required fields as plain values and their optional
//! fields as `Option`. Results default every field, so a response that omits
//! a key decodes to `None` or an empty list.

pub mod approval_rule_templates;
pub mod approvals;
pub mod branches;
pub mod comments;
pub mod commits;
pub mod files;
pub mod merges;
pub mod pull_requests;
pub mod repositories;
pub mod tags;
pub mod triggers;

pub use approval_rule_templates::*;
pub use approvals::*;
pub use branches::*;
pub use comments::*;
pub use commits::*;
pub use files::*;
pub use merges::*;
pub use pull_requests::*;
pub use repositories::*;
pub use tags::*;
pub use triggers::*;

use crate::operation::{Operation, PageRequest, Paginated};

macro_rules! define_operations {
    ($($name:ident => $request:ident, $result:ident),* $(,)?) => {
        $(
            impl Operation for $request {
                const NAME: &'static str = stringify!($name);
                type Output = $result;
            }
        )*

        /// Every operation name, in the order they are registered.
        pub const OPERATION_NAMES: &[&str] = &[$(stringify!($name)),*];
    };
}

macro_rules! define_paginated {
    ($($request:ident => $result:ident),* $(,)?) => {
        $(
            impl Paginated for $request {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }
            }

            impl PageRequest for $request {
                fn set_next_token(&mut self, token: Option<String>) {
                    self.next_token = token;
                }
            }

            impl Paginated for $result {
                fn next_token(&self) -> Option<&str> {
                    self.next_token.as_deref()
                }
            }
        )*
    };
}

define_operations! {
    AssociateApprovalRuleTemplateWithRepository => AssociateApprovalRuleTemplateWithRepositoryRequest, AssociateApprovalRuleTemplateWithRepositoryResult,
    BatchAssociateApprovalRuleTemplateWithRepositories => BatchAssociateApprovalRuleTemplateWithRepositoriesRequest, BatchAssociateApprovalRuleTemplateWithRepositoriesResult,
    BatchDescribeMergeConflicts => BatchDescribeMergeConflictsRequest, BatchDescribeMergeConflictsResult,
    BatchDisassociateApprovalRuleTemplateFromRepositories => BatchDisassociateApprovalRuleTemplateFromRepositoriesRequest, BatchDisassociateApprovalRuleTemplateFromRepositoriesResult,
    BatchGetCommits => BatchGetCommitsRequest, BatchGetCommitsResult,
    BatchGetRepositories => BatchGetRepositoriesRequest, BatchGetRepositoriesResult,
    CreateApprovalRuleTemplate => CreateApprovalRuleTemplateRequest, CreateApprovalRuleTemplateResult,
    CreateBranch => CreateBranchRequest, CreateBranchResult,
    CreateCommit => CreateCommitRequest, CreateCommitResult,
    CreatePullRequest => CreatePullRequestRequest, CreatePullRequestResult,
    CreatePullRequestApprovalRule => CreatePullRequestApprovalRuleRequest, CreatePullRequestApprovalRuleResult,
    CreateRepository => CreateRepositoryRequest, CreateRepositoryResult,
    CreateUnreferencedMergeCommit => CreateUnreferencedMergeCommitRequest, CreateUnreferencedMergeCommitResult,
    DeleteApprovalRuleTemplate => DeleteApprovalRuleTemplateRequest, DeleteApprovalRuleTemplateResult,
    DeleteBranch => DeleteBranchRequest, DeleteBranchResult,
    DeleteCommentContent => DeleteCommentContentRequest, DeleteCommentContentResult,
    DeleteFile => DeleteFileRequest, DeleteFileResult,
    DeletePullRequestApprovalRule => DeletePullRequestApprovalRuleRequest, DeletePullRequestApprovalRuleResult,
    DeleteRepository => DeleteRepositoryRequest, DeleteRepositoryResult,
    DescribeMergeConflicts => DescribeMergeConflictsRequest, DescribeMergeConflictsResult,
    DescribePullRequestEvents => DescribePullRequestEventsRequest, DescribePullRequestEventsResult,
    DisassociateApprovalRuleTemplateFromRepository => DisassociateApprovalRuleTemplateFromRepositoryRequest, DisassociateApprovalRuleTemplateFromRepositoryResult,
    EvaluatePullRequestApprovalRules => EvaluatePullRequestApprovalRulesRequest, EvaluatePullRequestApprovalRulesResult,
    GetApprovalRuleTemplate => GetApprovalRuleTemplateRequest, GetApprovalRuleTemplateResult,
    GetBlob => GetBlobRequest, GetBlobResult,
    GetBranch => GetBranchRequest, GetBranchResult,
    GetComment => GetCommentRequest, GetCommentResult,
    GetCommentReactions => GetCommentReactionsRequest, GetCommentReactionsResult,
    GetCommentsForComparedCommit => GetCommentsForComparedCommitRequest, GetCommentsForComparedCommitResult,
    GetCommentsForPullRequest => GetCommentsForPullRequestRequest, GetCommentsForPullRequestResult,
    GetCommit => GetCommitRequest, GetCommitResult,
    GetDifferences => GetDifferencesRequest, GetDifferencesResult,
    GetFile => GetFileRequest, GetFileResult,
    GetFolder => GetFolderRequest, GetFolderResult,
    GetMergeCommit => GetMergeCommitRequest, GetMergeCommitResult,
    GetMergeConflicts => GetMergeConflictsRequest, GetMergeConflictsResult,
    GetMergeOptions => GetMergeOptionsRequest, GetMergeOptionsResult,
    GetPullRequest => GetPullRequestRequest, GetPullRequestResult,
    GetPullRequestApprovalStates => GetPullRequestApprovalStatesRequest, GetPullRequestApprovalStatesResult,
    GetPullRequestOverrideState => GetPullRequestOverrideStateRequest, GetPullRequestOverrideStateResult,
    GetRepository => GetRepositoryRequest, GetRepositoryResult,
    GetRepositoryTriggers => GetRepositoryTriggersRequest, GetRepositoryTriggersResult,
    ListApprovalRuleTemplates => ListApprovalRuleTemplatesRequest, ListApprovalRuleTemplatesResult,
    ListAssociatedApprovalRuleTemplatesForRepository => ListAssociatedApprovalRuleTemplatesForRepositoryRequest, ListAssociatedApprovalRuleTemplatesForRepositoryResult,
    ListBranches => ListBranchesRequest, ListBranchesResult,
    ListPullRequests => ListPullRequestsRequest, ListPullRequestsResult,
    ListRepositories => ListRepositoriesRequest, ListRepositoriesResult,
    ListRepositoriesForApprovalRuleTemplate => ListRepositoriesForApprovalRuleTemplateRequest, ListRepositoriesForApprovalRuleTemplateResult,
    ListTagsForResource => ListTagsForResourceRequest, ListTagsForResourceResult,
    MergeBranchesByFastForward => MergeBranchesByFastForwardRequest, MergeBranchesByFastForwardResult,
    MergeBranchesBySquash => MergeBranchesBySquashRequest, MergeBranchesBySquashResult,
    MergeBranchesByThreeWay => MergeBranchesByThreeWayRequest, MergeBranchesByThreeWayResult,
    MergePullRequestByFastForward => MergePullRequestByFastForwardRequest, MergePullRequestByFastForwardResult,
    MergePullRequestBySquash => MergePullRequestBySquashRequest, MergePullRequestBySquashResult,
    MergePullRequestByThreeWay => MergePullRequestByThreeWayRequest, MergePullRequestByThreeWayResult,
    OverridePullRequestApprovalRules => OverridePullRequestApprovalRulesRequest, OverridePullRequestApprovalRulesResult,
    PostCommentForComparedCommit => PostCommentForComparedCommitRequest, PostCommentForComparedCommitResult,
    PostCommentForPullRequest => PostCommentForPullRequestRequest, PostCommentForPullRequestResult,
    PostCommentReply => PostCommentReplyRequest, PostCommentReplyResult,
    PutCommentReaction => PutCommentReactionRequest, PutCommentReactionResult,
    PutFile => PutFileRequest, PutFileResult,
    PutRepositoryTriggers => PutRepositoryTriggersRequest, PutRepositoryTriggersResult,
    TagResource => TagResourceRequest, TagResourceResult,
    TestRepositoryTriggers => TestRepositoryTriggersRequest, TestRepositoryTriggersResult,
    UntagResource => UntagResourceRequest, UntagResourceResult,
    UpdateApprovalRuleTemplateContent => UpdateApprovalRuleTemplateContentRequest, UpdateApprovalRuleTemplateContentResult,
    UpdateApprovalRuleTemplateDescription => UpdateApprovalRuleTemplateDescriptionRequest, UpdateApprovalRuleTemplateDescriptionResult,
    UpdateApprovalRuleTemplateName => UpdateApprovalRuleTemplateNameRequest, UpdateApprovalRuleTemplateNameResult,
    UpdateComment => UpdateCommentRequest, UpdateCommentResult,
    UpdateDefaultBranch => UpdateDefaultBranchRequest, UpdateDefaultBranchResult,
    UpdatePullRequestApprovalRuleContent => UpdatePullRequestApprovalRuleContentRequest, UpdatePullRequestApprovalRuleContentResult,
    UpdatePullRequestApprovalState => UpdatePullRequestApprovalStateRequest, UpdatePullRequestApprovalStateResult,
    UpdatePullRequestDescription => UpdatePullRequestDescriptionRequest, UpdatePullRequestDescriptionResult,
    UpdatePullRequestStatus => UpdatePullRequestStatusRequest, UpdatePullRequestStatusResult,
    UpdatePullRequestTitle => UpdatePullRequestTitleRequest, UpdatePullRequestTitleResult,
    UpdateRepositoryDescription => UpdateRepositoryDescriptionRequest, UpdateRepositoryDescriptionResult,
    UpdateRepositoryName => UpdateRepositoryNameRequest, UpdateRepositoryNameResult,
}

define_paginated! {
    BatchDescribeMergeConflictsRequest => BatchDescribeMergeConflictsResult,
    DescribeMergeConflictsRequest => DescribeMergeConflictsResult,
    DescribePullRequestEventsRequest => DescribePullRequestEventsResult,
    GetCommentReactionsRequest => GetCommentReactionsResult,
    GetCommentsForComparedCommitRequest => GetCommentsForComparedCommitResult,
    GetCommentsForPullRequestRequest => GetCommentsForPullRequestResult,
    GetDifferencesRequest => GetDifferencesResult,
    GetMergeConflictsRequest => GetMergeConflictsResult,
    ListApprovalRuleTemplatesRequest => ListApprovalRuleTemplatesResult,
    ListAssociatedApprovalRuleTemplatesForRepositoryRequest => ListAssociatedApprovalRuleTemplatesForRepositoryResult,
    ListBranchesRequest => ListBranchesResult,
    ListPullRequestsRequest => ListPullRequestsResult,
    ListRepositoriesRequest => ListRepositoriesResult,
    ListRepositoriesForApprovalRuleTemplateRequest => ListRepositoriesForApprovalRuleTemplateResult,
    ListTagsForResourceRequest => ListTagsForResourceResult,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_operation_names_are_unique() {
        let unique: HashSet<_> = OPERATION_NAMES.iter().collect();
        assert_eq!(unique.len(), OPERATION_NAMES.len());
        assert_eq!(OPERATION_NAMES.len(), 77);
    }

    #[test]
    fn test_target_header() {
        assert_eq!(
            GetDifferencesRequest::target(),
            "CodeCommit_20150413.GetDifferences"
        );
        assert_eq!(
            <BatchGetCommitsRequest as Operation>::NAME,
            "BatchGetCommits"
        );
    }

    #[test]
    fn test_resume_from_next_page() {
        let mut request = ListBranchesRequest::new("MyDemoRepo");
        let page = ListBranchesResult {
            branches: vec!["main".to_string()],
            next_token: Some("page2".to_string()),
        };
        assert!(request.resume_from(&page));
        assert_eq!(request.next_token(), Some("page2"));

        let last = ListBranchesResult::default();
        assert!(!request.resume_from(&last));
        assert_eq!(request.next_token(), Some("page2"));
    }
}
