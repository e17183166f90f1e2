//! Property-based tests for the CodeCommit models.
//!
//! These tests check serde round-trips, equality and the string forms of
//! closed value sets across generated inputs.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use proptest::prelude::*;

use codecommit::operations::{
    BatchAssociateApprovalRuleTemplateWithRepositoriesResult, BatchDescribeMergeConflictsResult,
    BatchDisassociateApprovalRuleTemplateFromRepositoriesResult, BatchGetCommitsRequest,
    BatchGetCommitsResult, PutFileRequest,
};
use codecommit::types::{
    ApprovalRule, ApprovalRuleTemplate, ApprovalState, BatchGetCommitsError, BlobMetadata,
    ChangeType, Comment, CommentsForPullRequest, Commit, Conflict, ConflictDetailLevel,
    ConflictMetadata, ConflictResolution, ConflictResolutionStrategy, Difference, FileMode,
    MergeHunk, MergeOption, ObjectType, Order, OverrideStatus, PullRequest, PullRequestEvent,
    PullRequestEventType, PullRequestStatus, PullRequestTarget, ReactionForComment,
    RelativeFileVersion, ReplaceContentEntry, ReplacementType, RepositoryMetadata,
    RepositoryTrigger, RepositoryTriggerEvent, SortBy, Timestamp, UserInfo,
};
use serde_json::{json, Value};

fn opt_string() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z0-9 _\\-\\./]{0,24}")
}

fn sha() -> impl Strategy<Value = String> {
    "[0-9a-f]{40}"
}

fn change_type() -> impl Strategy<Value = ChangeType> {
    prop::sample::select(ChangeType::ALL.to_vec())
}

fn blob_metadata() -> impl Strategy<Value = BlobMetadata> {
    (opt_string(), opt_string(), proptest::option::of(Just("100644".to_string())))
        .prop_map(|(blob_id, path, mode)| BlobMetadata {
            blob_id,
            path,
            mode,
        })
}

fn difference() -> impl Strategy<Value = Difference> {
    (
        proptest::option::of(blob_metadata()),
        proptest::option::of(blob_metadata()),
        proptest::option::of(change_type()),
    )
        .prop_map(|(before_blob, after_blob, change_type)| Difference {
            before_blob,
            after_blob,
            change_type,
        })
}

fn user_info() -> impl Strategy<Value = UserInfo> {
    (opt_string(), opt_string(), opt_string()).prop_map(|(name, email, date)| UserInfo {
        name,
        email,
        date,
    })
}

fn commit() -> impl Strategy<Value = Commit> {
    (
        proptest::option::of(sha()),
        proptest::option::of(sha()),
        prop::collection::vec(sha(), 0..3),
        opt_string(),
        proptest::option::of(user_info()),
        proptest::option::of(user_info()),
    )
        .prop_map(|(commit_id, tree_id, parents, message, author, committer)| Commit {
            commit_id,
            tree_id,
            parents,
            message,
            author,
            committer,
            additional_data: None,
        })
}

fn batch_error() -> impl Strategy<Value = BatchGetCommitsError> {
    (proptest::option::of(sha()), opt_string(), opt_string()).prop_map(
        |(commit_id, error_code, error_message)| BatchGetCommitsError {
            commit_id,
            error_code,
            error_message,
        },
    )
}

/// Nanosecond-precision instants, as `Utc::now()` produces them.
fn precise_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (-2_000_000_000_i64..4_000_000_000, 0_u32..1_000_000_000)
        .prop_filter_map("in range", |(secs, nanos)| DateTime::from_timestamp(secs, nanos))
}

fn timestamp() -> impl Strategy<Value = Option<Timestamp>> {
    proptest::option::of(precise_instant().prop_map(Timestamp::from))
}

fn pull_request() -> impl Strategy<Value = PullRequest> {
    (
        opt_string(),
        opt_string(),
        timestamp(),
        timestamp(),
        proptest::option::of(prop::sample::select(PullRequestStatus::ALL.to_vec())),
        prop::collection::vec(
            (opt_string(), opt_string()).prop_map(|(repository_name, source_reference)| {
                PullRequestTarget {
                    repository_name,
                    source_reference,
                    ..PullRequestTarget::default()
                }
            }),
            0..3,
        ),
    )
        .prop_map(
            |(pull_request_id, title, last_activity_date, creation_date, status, targets)| {
                PullRequest {
                    pull_request_id,
                    title,
                    last_activity_date,
                    creation_date,
                    pull_request_status: status,
                    pull_request_targets: targets,
                    ..PullRequest::default()
                }
            },
        )
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    /// Serializing then deserializing a difference yields an equal value.
    #[test]
    fn test_difference_round_trip(diff in difference()) {
        let json = serde_json::to_string(&diff).expect("Serialization should succeed");
        let parsed: Difference = serde_json::from_str(&json).expect("Should parse");
        prop_assert_eq!(diff, parsed);
    }

    #[test]
    fn test_commit_round_trip(value in commit()) {
        let json = serde_json::to_string(&value).expect("Serialization should succeed");
        let parsed: Commit = serde_json::from_str(&json).expect("Should parse");
        prop_assert_eq!(value, parsed);
    }

    /// Both halves of a partial batch failure survive a round-trip.
    #[test]
    fn test_batch_result_round_trip(
        commits in prop::collection::vec(commit(), 0..4),
        errors in prop::collection::vec(batch_error(), 0..4),
    ) {
        let result = BatchGetCommitsResult { commits, errors };
        let json = serde_json::to_string(&result).expect("Serialization should succeed");
        let parsed: BatchGetCommitsResult = serde_json::from_str(&json).expect("Should parse");
        prop_assert_eq!(parsed.commits.len(), result.commits.len());
        prop_assert_eq!(parsed.errors.len(), result.errors.len());
        prop_assert_eq!(parsed.is_complete(), result.errors.is_empty());
        prop_assert_eq!(parsed, result);
    }

    /// Timestamps keep millisecond precision through epoch seconds.
    #[test]
    fn test_pull_request_round_trip(value in pull_request()) {
        let json = serde_json::to_string(&value).expect("Serialization should succeed");
        let parsed: PullRequest = serde_json::from_str(&json).expect("Should parse");
        prop_assert_eq!(value, parsed);
    }

    /// Any caller-built instant survives the epoch-seconds wire form.
    #[test]
    fn test_precise_timestamps_round_trip(created in precise_instant(), modified in precise_instant()) {
        let comment = Comment {
            creation_date: Some(created.into()),
            last_modified_date: Some(modified.into()),
            ..Comment::default()
        };
        let json = serde_json::to_string(&comment).expect("Serialization should succeed");
        let parsed: Comment = serde_json::from_str(&json).expect("Should parse");
        prop_assert_eq!(&parsed, &comment);

        let millis = parsed.creation_date.map(|t| t.timestamp_millis());
        prop_assert_eq!(millis, Some(created.timestamp_millis()));
    }

    /// Binary content survives base64 encoding unchanged.
    #[test]
    fn test_put_file_content_round_trip(content in prop::collection::vec(any::<u8>(), 0..512)) {
        let request = PutFileRequest::new("MyDemoRepo", "main", "README.md", content.clone());
        let json = serde_json::to_string(&request).expect("Serialization should succeed");
        let parsed: PutFileRequest = serde_json::from_str(&json).expect("Should parse");
        prop_assert_eq!(parsed.file_content, content);
    }

    /// Equal values hash equally, and clones are equal.
    #[test]
    fn test_equality_consistent_with_hash(a in difference(), b in difference()) {
        let a_clone = a.clone();
        prop_assert_eq!(&a, &a_clone);
        prop_assert_eq!(hash_of(&a), hash_of(&a_clone));
        prop_assert_eq!(a == b, b == a);
        if a == b {
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }

    /// A constructor equals the struct literal with the same values.
    #[test]
    fn test_constructor_matches_literal(
        repository in "[A-Za-z0-9_.-]{1,20}",
        ids in prop::collection::vec(sha(), 1..5),
    ) {
        let built = BatchGetCommitsRequest::new(repository.clone(), ids.clone());
        let literal = BatchGetCommitsRequest {
            commit_ids: ids,
            repository_name: repository,
        };
        prop_assert_eq!(built, literal);
    }

    /// Mutating the caller's list after building a request does not leak in.
    #[test]
    fn test_list_is_copied(
        ids in prop::collection::vec(sha(), 1..5),
        extra in sha(),
    ) {
        let mut caller = ids.clone();
        let request = BatchGetCommitsRequest::new("MyDemoRepo", caller.clone());
        caller.push(extra);
        caller[0].clear();
        prop_assert_eq!(request.commit_ids, ids);
    }

    /// Values outside a closed set are rejected both by `FromStr` and serde.
    #[test]
    fn test_unknown_enum_rejected(value in "[a-z]{6,12}") {
        prop_assert!(value.parse::<MergeOption>().is_err());
        let quoted = format!("\"{value}\"");
        prop_assert!(serde_json::from_str::<MergeOption>(&quoted).is_err());
    }
}

macro_rules! assert_string_forms {
    ($($ty:ty),+ $(,)?) => {
        $(
            for variant in <$ty>::ALL {
                let wire = variant.as_str();
                assert_eq!(wire.parse::<$ty>().expect("Canonical string should parse"), *variant);
                assert_eq!(variant.to_string(), wire);
                assert_eq!(
                    serde_json::to_string(variant).expect("Serialization should succeed"),
                    format!("\"{wire}\"")
                );
                let parsed: $ty = serde_json::from_str(&format!("\"{wire}\"")).expect("Should parse");
                assert_eq!(parsed, *variant);
            }
        )+
    };
}

#[test]
fn test_enum_string_equivalence() {
    assert_string_forms!(
        ChangeType,
        FileMode,
        MergeOption,
        ObjectType,
        Order,
        PullRequestStatus,
        ApprovalState,
        ReplacementType,
        RelativeFileVersion,
        ConflictDetailLevel,
        ConflictResolutionStrategy,
        OverrideStatus,
        PullRequestEventType,
        RepositoryTriggerEvent,
        SortBy,
    );
}

#[test]
fn test_canonical_strings() {
    assert_eq!(ChangeType::Deleted.as_str(), "D");
    assert_eq!(MergeOption::ThreeWayMerge.as_str(), "THREE_WAY_MERGE");
    assert_eq!(SortBy::LastModifiedDate.as_str(), "lastModifiedDate");
    assert_eq!(Order::Descending.as_str(), "descending");
    assert_eq!(ReplacementType::UseNewContent.as_str(), "USE_NEW_CONTENT");
    assert_eq!(FileMode::Symlink.as_str(), "SYMLINK");
}

/// Decode a fully populated wire document, re-encode it, and require the
/// exact same document back. A misspelled or dropped field shows up as a
/// difference.
fn assert_populated_round_trip<T>(wire: Value)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let parsed: T = serde_json::from_value(wire.clone()).expect("Should parse");
    let encoded = serde_json::to_value(&parsed).expect("Serialization should succeed");
    assert_eq!(encoded, wire, "{}", std::any::type_name::<T>());

    let again: T = serde_json::from_value(encoded).expect("Should parse");
    assert_eq!(again, parsed);
}

fn assert_empty_round_trip<T>()
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug + Default,
{
    let empty = T::default();
    let json = serde_json::to_string(&empty).expect("Serialization should succeed");
    assert_eq!(json, "{}", "{}", std::any::type_name::<T>());
    let parsed: T = serde_json::from_str(&json).expect("Should parse");
    assert_eq!(parsed, empty);
}

fn hunk_detail(start: i32) -> Value {
    json!({"startLine": start, "endLine": start + 2, "hunkContent": "line\n"})
}

fn merge_metadata() -> Value {
    json!({
        "isMerged": true,
        "mergedBy": "arn:aws:iam::111111111111:user/Mary_Major",
        "mergeCommitId": "4f178133EXAMPLE",
        "mergeOption": "THREE_WAY_MERGE"
    })
}

#[test]
fn test_merge_conflict_model_round_trip() {
    let conflict_metadata = json!({
        "filePath": "readme.md",
        "fileSizes": {"source": 139, "destination": 230, "base": 85},
        "fileModes": {"source": "NORMAL", "destination": "EXECUTABLE", "base": "NORMAL"},
        "objectTypes": {"source": "FILE", "destination": "SYMBOLIC_LINK", "base": "FILE"},
        "numberOfConflicts": 1,
        "isBinaryFile": {"source": false, "destination": false, "base": false},
        "contentConflict": true,
        "fileModeConflict": true,
        "objectTypeConflict": true,
        "mergeOperations": {"source": "M", "destination": "M"}
    });
    let merge_hunk = json!({
        "isConflict": true,
        "source": hunk_detail(1),
        "destination": hunk_detail(3),
        "base": hunk_detail(5)
    });

    assert_populated_round_trip::<ConflictMetadata>(conflict_metadata.clone());
    assert_populated_round_trip::<MergeHunk>(merge_hunk.clone());
    assert_populated_round_trip::<Conflict>(json!({
        "conflictMetadata": conflict_metadata.clone(),
        "mergeHunks": [merge_hunk.clone()]
    }));
    assert_populated_round_trip::<ReplaceContentEntry>(json!({
        "filePath": "readme.md",
        "replacementType": "USE_NEW_CONTENT",
        "content": "cmVzb2x2ZWQK",
        "fileMode": "NORMAL"
    }));
    assert_populated_round_trip::<ConflictResolution>(json!({
        "replaceContents": [
            {"filePath": "readme.md", "replacementType": "USE_NEW_CONTENT", "content": "cmVzb2x2ZWQK"},
            {"filePath": "setup.py", "replacementType": "KEEP_DESTINATION"}
        ],
        "deleteFiles": [{"filePath": "obsolete.txt"}],
        "setFileModes": [{"filePath": "run.sh", "fileMode": "EXECUTABLE"}]
    }));
    assert_populated_round_trip::<BatchDescribeMergeConflictsResult>(json!({
        "conflicts": [{"conflictMetadata": conflict_metadata, "mergeHunks": [merge_hunk]}],
        "nextToken": "token",
        "errors": [{
            "filePath": "huge.bin",
            "exceptionName": "FileTooLargeException",
            "message": "File is too large"
        }],
        "destinationCommitId": "86958e0aEXAMPLE",
        "sourceCommitId": "6ccd57fdEXAMPLE",
        "baseCommitId": "767b6958EXAMPLE"
    }));
}

#[test]
fn test_pull_request_event_variants_round_trip() {
    let base = json!({
        "pullRequestId": "42",
        "eventDate": 1508962823.165,
        "actorArn": "arn:aws:iam::111111111111:user/Saanvi_Sarkar"
    });
    let variants = [
        ("PULL_REQUEST_CREATED", "pullRequestCreatedEventMetadata", json!({
            "repositoryName": "MyDemoRepo",
            "sourceCommitId": "2d7a3b85EXAMPLE",
            "destinationCommitId": "5a6d9aa8EXAMPLE",
            "mergeBase": "317f8570EXAMPLE"
        })),
        ("PULL_REQUEST_STATUS_CHANGED", "pullRequestStatusChangedEventMetadata", json!({
            "pullRequestStatus": "CLOSED"
        })),
        ("PULL_REQUEST_SOURCE_REFERENCE_UPDATED", "pullRequestSourceReferenceUpdatedEventMetadata", json!({
            "repositoryName": "MyDemoRepo",
            "beforeCommitId": "2d7a3b85EXAMPLE",
            "afterCommitId": "3f0b5a3aEXAMPLE",
            "mergeBase": "317f8570EXAMPLE"
        })),
        ("PULL_REQUEST_MERGE_STATE_CHANGED", "pullRequestMergedStateChangedEventMetadata", json!({
            "repositoryName": "MyDemoRepo",
            "destinationReference": "refs/heads/main",
            "mergeMetadata": merge_metadata()
        })),
        ("PULL_REQUEST_APPROVAL_RULE_CREATED", "approvalRuleEventMetadata", json!({
            "approvalRuleName": "Require two approvals",
            "approvalRuleId": "dd8b17fe-EXAMPLE",
            "approvalRuleContent": "{\"Version\": \"2018-11-08\"}"
        })),
        ("PULL_REQUEST_APPROVAL_STATE_CHANGED", "approvalStateChangedEventMetadata", json!({
            "revisionId": "9f29d167EXAMPLE",
            "approvalStatus": "APPROVE"
        })),
        ("PULL_REQUEST_APPROVAL_RULE_OVERRIDDEN", "approvalRuleOverriddenEventMetadata", json!({
            "revisionId": "9f29d167EXAMPLE",
            "overrideStatus": "OVERRIDE"
        })),
    ];

    for (event_type, key, metadata) in variants {
        let mut wire = base.clone();
        wire["pullRequestEventType"] = json!(event_type);
        wire[key] = metadata;
        assert_populated_round_trip::<PullRequestEvent>(wire);
    }
}

#[test]
fn test_approval_comment_trigger_repository_round_trip() {
    let approval_rule = json!({
        "approvalRuleId": "dd8b17fe-EXAMPLE",
        "approvalRuleName": "Require two approvals",
        "approvalRuleContent": "{\"Version\": \"2018-11-08\"}",
        "ruleContentSha256": "4711b576EXAMPLE",
        "lastModifiedDate": 1571356106.936,
        "creationDate": 1571356106.936,
        "lastModifiedUser": "arn:aws:iam::111111111111:user/Mary_Major",
        "originApprovalRuleTemplate": {
            "approvalRuleTemplateId": "dd8b17fe-EXAMPLE",
            "approvalRuleTemplateName": "2-approver-rule-for-main"
        }
    });
    assert_populated_round_trip::<ApprovalRule>(approval_rule.clone());
    assert_populated_round_trip::<ApprovalRuleTemplate>(json!({
        "approvalRuleTemplateId": "dd8b17fe-EXAMPLE",
        "approvalRuleTemplateName": "2-approver-rule-for-main",
        "approvalRuleTemplateDescription": "Requires two approvals",
        "approvalRuleTemplateContent": "{\"Version\": \"2018-11-08\"}",
        "ruleContentSha256": "621181bbEXAMPLE",
        "lastModifiedDate": 1571356106.936,
        "creationDate": 1571356106.936,
        "lastModifiedUser": "arn:aws:iam::111111111111:user/Mary_Major"
    }));

    let comment = json!({
        "commentId": "ff30b348EXAMPLEb9aa670f",
        "content": "Looks good",
        "inReplyTo": "abcd1234EXAMPLEb5678efgh",
        "creationDate": 1508369768.142,
        "lastModifiedDate": 1508369842.278,
        "authorArn": "arn:aws:iam::111111111111:user/Li_Juan",
        "deleted": false,
        "clientRequestToken": "123Example",
        "callerReactions": [":thumbsup:"],
        "reactionCounts": {"SMILE": 1, "THUMBSUP": 3}
    });
    assert_populated_round_trip::<Comment>(comment.clone());
    assert_populated_round_trip::<CommentsForPullRequest>(json!({
        "pullRequestId": "42",
        "repositoryName": "MyDemoRepo",
        "beforeCommitId": "317f8570EXAMPLE",
        "afterCommitId": "5d036259EXAMPLE",
        "beforeBlobId": "4c5fe0a8EXAMPLE",
        "afterBlobId": "5f8ef1e0EXAMPLE",
        "location": {"filePath": "ahs_count.py", "filePosition": 367, "relativeFileVersion": "AFTER"},
        "comments": [comment]
    }));
    assert_populated_round_trip::<ReactionForComment>(json!({
        "reaction": {"emoji": "👍", "shortCode": ":thumbsup:", "unicode": "U+1F44D"},
        "reactionUsers": ["arn:aws:iam::111111111111:user/Li_Juan"],
        "reactionsFromDeletedUsersCount": 1
    }));

    assert_populated_round_trip::<RepositoryTrigger>(json!({
        "name": "MyFirstTrigger",
        "destinationArn": "arn:aws:sns:us-east-1:111111111111:MyCodeCommitTopic",
        "customData": "Project ID 12345",
        "branches": ["main", "preprod"],
        "events": ["all"]
    }));

    assert_populated_round_trip::<RepositoryMetadata>(json!({
        "accountId": "111111111111",
        "repositoryId": "f7579e13-b83e-4027-aaef-650c0EXAMPLE",
        "repositoryName": "MyDemoRepo",
        "repositoryDescription": "My demonstration repository",
        "defaultBranch": "main",
        "lastModifiedDate": 1430783812.087,
        "creationDate": 1430783812.087,
        "cloneUrlHttp": "https://codecommit.us-east-1.amazonaws.com/v1/repos/MyDemoRepo",
        "cloneUrlSsh": "ssh://git-codecommit.us-east-1.amazonaws.com/v1/repos/MyDemoRepo",
        "Arn": "arn:aws:codecommit:us-east-1:111111111111:MyDemoRepo"
    }));

    let pull_request = json!({
        "pullRequestId": "42",
        "title": "Pronunciation difficulty analyzer",
        "description": "A code review of the new feature",
        "lastActivityDate": 1508962823.285,
        "creationDate": 1508962823.285,
        "pullRequestStatus": "OPEN",
        "authorArn": "arn:aws:iam::111111111111:user/Jane_Doe",
        "pullRequestTargets": [{
            "repositoryName": "MyDemoRepo",
            "sourceReference": "refs/heads/jane-branch",
            "destinationReference": "refs/heads/main",
            "destinationCommit": "5d036259EXAMPLE",
            "sourceCommit": "317f8570EXAMPLE",
            "mergeBase": "a99f5ddbEXAMPLE",
            "mergeMetadata": merge_metadata()
        }],
        "clientRequestToken": "123Example",
        "revisionId": "9f29d167EXAMPLE",
        "approvalRules": [approval_rule]
    });
    assert_populated_round_trip::<PullRequest>(pull_request);
}

#[test]
fn test_batch_association_results_round_trip() {
    assert_populated_round_trip::<BatchAssociateApprovalRuleTemplateWithRepositoriesResult>(json!({
        "associatedRepositoryNames": ["MyDemoRepo"],
        "errors": [{
            "repositoryName": "MyOtherDemoRepo",
            "errorCode": "MaximumNumberOfApprovalRuleTemplatesExceededException",
            "errorMessage": "Too many templates"
        }]
    }));
    assert_populated_round_trip::<BatchDisassociateApprovalRuleTemplateFromRepositoriesResult>(json!({
        "disassociatedRepositoryNames": ["MyDemoRepo"],
        "errors": [{
            "repositoryName": "MyOtherDemoRepo",
            "errorCode": "RepositoryDoesNotExistException",
            "errorMessage": "Repository does not exist"
        }]
    }));
}

#[test]
fn test_empty_values_round_trip() {
    assert_empty_round_trip::<ConflictMetadata>();
    assert_empty_round_trip::<MergeHunk>();
    assert_empty_round_trip::<Conflict>();
    assert_empty_round_trip::<ConflictResolution>();
    assert_empty_round_trip::<PullRequestEvent>();
    assert_empty_round_trip::<PullRequest>();
    assert_empty_round_trip::<ApprovalRule>();
    assert_empty_round_trip::<ApprovalRuleTemplate>();
    assert_empty_round_trip::<Comment>();
    assert_empty_round_trip::<CommentsForPullRequest>();
    assert_empty_round_trip::<ReactionForComment>();
    assert_empty_round_trip::<RepositoryMetadata>();
    assert_empty_round_trip::<Commit>();
    assert_empty_round_trip::<Difference>();
    assert_empty_round_trip::<BatchGetCommitsResult>();
    assert_empty_round_trip::<BatchDescribeMergeConflictsResult>();
    assert_empty_round_trip::<BatchAssociateApprovalRuleTemplateWithRepositoriesResult>();
    assert_empty_round_trip::<BatchDisassociateApprovalRuleTemplateFromRepositoriesResult>();
}
