//! Comment and reaction operations.

use serde::{Deserialize, Serialize};

use crate::idempotency::client_request_token;
use crate::types::{
    Comment, CommentsForComparedCommit, CommentsForPullRequest, Location, ReactionForComment,
};
use crate::validation::{self, Validate, ValidationError};

fn check_content(content: &str) -> Result<(), ValidationError> {
    validation::length("content", content, 1, validation::COMMENT_CONTENT_MAX)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentContentRequest {
    pub comment_id: String,
}

impl DeleteCommentContentRequest {
    pub fn new(comment_id: impl Into<String>) -> Self {
        Self {
            comment_id: comment_id.into(),
        }
    }
}

impl Validate for DeleteCommentContentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("commentId", &self.comment_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteCommentContentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentRequest {
    pub comment_id: String,
}

impl GetCommentRequest {
    pub fn new(comment_id: impl Into<String>) -> Self {
        Self {
            comment_id: comment_id.into(),
        }
    }
}

impl Validate for GetCommentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("commentId", &self.comment_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetCommentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentReactionsRequest {
    pub comment_id: String,
    /// Only return reactions from this user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_user_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetCommentReactionsRequest {
    pub fn new(comment_id: impl Into<String>) -> Self {
        Self {
            comment_id: comment_id.into(),
            ..Default::default()
        }
    }
}

impl Validate for GetCommentReactionsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("commentId", &self.comment_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetCommentReactionsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reactions_for_comment: Vec<ReactionForComment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentsForComparedCommitRequest {
    pub repository_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_commit_id: Option<String>,
    pub after_commit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetCommentsForComparedCommitRequest {
    pub fn new(repository_name: impl Into<String>, after_commit_id: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            after_commit_id: after_commit_id.into(),
            ..Default::default()
        }
    }
}

impl Validate for GetCommentsForComparedCommitRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::not_empty("afterCommitId", &self.after_commit_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetCommentsForComparedCommitResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments_for_compared_commit_data: Vec<CommentsForComparedCommit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentsForPullRequestRequest {
    pub pull_request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_commit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_commit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetCommentsForPullRequestRequest {
    pub fn new(pull_request_id: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            ..Default::default()
        }
    }
}

impl Validate for GetCommentsForPullRequestRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)?;
        validation::optional_repository_name("repositoryName", self.repository_name.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetCommentsForPullRequestResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments_for_pull_request_data: Vec<CommentsForPullRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Comment on the comparison between two commits. Without a location the
/// comment applies to the comparison as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentForComparedCommitRequest {
    pub repository_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_commit_id: Option<String>,
    pub after_commit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl PostCommentForComparedCommitRequest {
    pub fn new(
        repository_name: impl Into<String>,
        after_commit_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            before_commit_id: None,
            after_commit_id: after_commit_id.into(),
            location: None,
            content: content.into(),
            client_request_token: Some(client_request_token()),
        }
    }
}

impl Validate for PostCommentForComparedCommitRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::not_empty("afterCommitId", &self.after_commit_id)?;
        check_content(&self.content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostCommentForComparedCommitResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_blob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_blob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentForPullRequestRequest {
    pub pull_request_id: String,
    pub repository_name: String,
    /// Destination branch tip at the time of the comment
    pub before_commit_id: String,
    /// Source branch tip at the time of the comment
    pub after_commit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl PostCommentForPullRequestRequest {
    pub fn new(
        pull_request_id: impl Into<String>,
        repository_name: impl Into<String>,
        before_commit_id: impl Into<String>,
        after_commit_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            repository_name: repository_name.into(),
            before_commit_id: before_commit_id.into(),
            after_commit_id: after_commit_id.into(),
            location: None,
            content: content.into(),
            client_request_token: Some(client_request_token()),
        }
    }

    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl Validate for PostCommentForPullRequestRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)?;
        validation::repository_name("repositoryName", &self.repository_name)?;
        validation::not_empty("beforeCommitId", &self.before_commit_id)?;
        validation::not_empty("afterCommitId", &self.after_commit_id)?;
        check_content(&self.content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostCommentForPullRequestResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_blob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_blob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentReplyRequest {
    pub in_reply_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    pub content: String,
}

impl PostCommentReplyRequest {
    pub fn new(in_reply_to: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            in_reply_to: in_reply_to.into(),
            client_request_token: Some(client_request_token()),
            content: content.into(),
        }
    }
}

impl Validate for PostCommentReplyRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("inReplyTo", &self.in_reply_to)?;
        check_content(&self.content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostCommentReplyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutCommentReactionRequest {
    pub comment_id: String,
    /// Emoji, short code (`:thumbsup:`) or Unicode (`U+1F44D`)
    pub reaction_value: String,
}

impl PutCommentReactionRequest {
    pub fn new(comment_id: impl Into<String>, reaction_value: impl Into<String>) -> Self {
        Self {
            comment_id: comment_id.into(),
            reaction_value: reaction_value.into(),
        }
    }
}

impl Validate for PutCommentReactionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("commentId", &self.comment_id)?;
        validation::not_empty("reactionValue", &self.reaction_value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PutCommentReactionResult {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentRequest {
    pub comment_id: String,
    pub content: String,
}

impl UpdateCommentRequest {
    pub fn new(comment_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            comment_id: comment_id.into(),
            content: content.into(),
        }
    }
}

impl Validate for UpdateCommentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("commentId", &self.comment_id)?;
        check_content(&self.content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCommentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
}
