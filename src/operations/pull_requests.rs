//! Pull request lifecycle operations.

use serde::{Deserialize, Serialize};

use super::merges::MergeCommitOptions;
use crate::idempotency::client_request_token;
use crate::types::{PullRequest, PullRequestEvent, PullRequestEventType, PullRequestStatus, Target};
use crate::validation::{self, Validate, ValidationError};

/// Open a pull request.
///
/// [`CreatePullRequestRequest::new`] fills in a fresh client request token,
/// so resending the same value after a timeout does not open a second pull
/// request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePullRequestRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub targets: Vec<Target>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl CreatePullRequestRequest {
    pub fn new(title: impl Into<String>, targets: Vec<Target>) -> Self {
        Self {
            title: title.into(),
            description: None,
            targets,
            client_request_token: Some(client_request_token()),
        }
    }
}

impl Validate for CreatePullRequestRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::length("title", &self.title, 1, validation::PULL_REQUEST_TITLE_MAX)?;
        validation::optional_length(
            "description",
            self.description.as_deref(),
            0,
            validation::PULL_REQUEST_DESCRIPTION_MAX,
        )?;
        if self.targets.is_empty() {
            return Err(ValidationError::Empty { field: "targets" });
        }
        for target in &self.targets {
            validation::repository_name("targets.repositoryName", &target.repository_name)?;
            validation::not_empty("targets.sourceReference", &target.source_reference)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePullRequestResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribePullRequestEventsRequest {
    pub pull_request_id: String,
    /// Only return events of this type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request_event_type: Option<PullRequestEventType>,
    /// Only return events caused by this user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl DescribePullRequestEventsRequest {
    pub fn new(pull_request_id: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            ..Default::default()
        }
    }
}

impl Validate for DescribePullRequestEventsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribePullRequestEventsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pull_request_events: Vec<PullRequestEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPullRequestRequest {
    pub pull_request_id: String,
}

impl GetPullRequestRequest {
    pub fn new(pull_request_id: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
        }
    }
}

impl Validate for GetPullRequestRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetPullRequestResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPullRequestsRequest {
    pub repository_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request_status: Option<PullRequestStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListPullRequestsRequest {
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            ..Default::default()
        }
    }
}

impl Validate for ListPullRequestsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListPullRequestsResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pull_request_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergePullRequestByFastForwardRequest {
    pub pull_request_id: String,
    pub repository_name: String,
    /// Fail unless the source branch tip is still this commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_commit_id: Option<String>,
}

impl MergePullRequestByFastForwardRequest {
    pub fn new(pull_request_id: impl Into<String>, repository_name: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            repository_name: repository_name.into(),
            source_commit_id: None,
        }
    }
}

impl Validate for MergePullRequestByFastForwardRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)?;
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergePullRequestByFastForwardResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergePullRequestBySquashRequest {
    pub pull_request_id: String,
    pub repository_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_commit_id: Option<String>,
    #[serde(flatten)]
    pub options: MergeCommitOptions,
}

impl MergePullRequestBySquashRequest {
    pub fn new(pull_request_id: impl Into<String>, repository_name: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            repository_name: repository_name.into(),
            ..Default::default()
        }
    }
}

impl Validate for MergePullRequestBySquashRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)?;
        validation::repository_name("repositoryName", &self.repository_name)?;
        self.options.check()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergePullRequestBySquashResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergePullRequestByThreeWayRequest {
    pub pull_request_id: String,
    pub repository_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_commit_id: Option<String>,
    #[serde(flatten)]
    pub options: MergeCommitOptions,
}

impl MergePullRequestByThreeWayRequest {
    pub fn new(pull_request_id: impl Into<String>, repository_name: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            repository_name: repository_name.into(),
            ..Default::default()
        }
    }
}

impl Validate for MergePullRequestByThreeWayRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)?;
        validation::repository_name("repositoryName", &self.repository_name)?;
        self.options.check()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MergePullRequestByThreeWayResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePullRequestDescriptionRequest {
    pub pull_request_id: String,
    pub description: String,
}

impl UpdatePullRequestDescriptionRequest {
    pub fn new(pull_request_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            description: description.into(),
        }
    }
}

impl Validate for UpdatePullRequestDescriptionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)?;
        validation::length(
            "description",
            &self.description,
            0,
            validation::PULL_REQUEST_DESCRIPTION_MAX,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePullRequestDescriptionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePullRequestStatusRequest {
    pub pull_request_id: String,
    /// Only `CLOSED` is accepted for an open pull request
    pub pull_request_status: PullRequestStatus,
}

impl UpdatePullRequestStatusRequest {
    pub fn new(pull_request_id: impl Into<String>, pull_request_status: PullRequestStatus) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            pull_request_status,
        }
    }

    /// Close the pull request without merging.
    pub fn close(pull_request_id: impl Into<String>) -> Self {
        Self::new(pull_request_id, PullRequestStatus::Closed)
    }
}

impl Validate for UpdatePullRequestStatusRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePullRequestStatusResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePullRequestTitleRequest {
    pub pull_request_id: String,
    pub title: String,
}

impl UpdatePullRequestTitleRequest {
    pub fn new(pull_request_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            title: title.into(),
        }
    }
}

impl Validate for UpdatePullRequestTitleRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)?;
        validation::length("title", &self.title, 1, validation::PULL_REQUEST_TITLE_MAX)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePullRequestTitleResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_pull_request_gets_token() {
        let targets = vec![Target::new("MyDemoRepo", "refs/heads/feature")];
        let first = CreatePullRequestRequest::new("Add analyzer", targets.clone());
        let second = CreatePullRequestRequest::new("Add analyzer", targets);

        assert!(first.client_request_token.is_some());
        assert_ne!(first.client_request_token, second.client_request_token);
        assert!(first.validate().is_ok());
    }

    #[test]
    fn test_create_pull_request_requires_target() {
        let request = CreatePullRequestRequest::new("Add analyzer", Vec::new());
        assert_eq!(
            request.validate(),
            Err(ValidationError::Empty { field: "targets" })
        );
    }

    #[test]
    fn test_title_length() {
        let request = UpdatePullRequestTitleRequest::new("42", "x".repeat(151));
        assert!(matches!(
            request.validate(),
            Err(ValidationError::Length { field: "title", max: 150, .. })
        ));
    }

    #[test]
    fn test_close_serialize() {
        let request = UpdatePullRequestStatusRequest::close("42");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"pullRequestId":"42","pullRequestStatus":"CLOSED"}"#
        );
    }

    #[test]
    fn test_list_pull_requests_result() {
        let result: ListPullRequestsResult = serde_json::from_str(
            r#"{"nextToken": "next", "pullRequestIds": ["2", "12", "16"]}"#,
        )
        .unwrap();
        assert_eq!(result.pull_request_ids.len(), 3);
        assert_eq!(result.next_token.as_deref(), Some("next"));
    }

    #[test]
    fn test_merge_by_squash_serialize() {
        let request = MergePullRequestBySquashRequest {
            source_commit_id: Some("99132ab0EXAMPLE".to_string()),
            options: MergeCommitOptions {
                commit_message: Some("Merged #47".to_string()),
                ..Default::default()
            },
            ..MergePullRequestBySquashRequest::new("47", "MyDemoRepo")
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"pullRequestId":"47","repositoryName":"MyDemoRepo","sourceCommitId":"99132ab0EXAMPLE","commitMessage":"Merged #47"}"#
        );
    }
}
