//! Pull request data models and pull request event payloads.

use serde::{Deserialize, Serialize};

use super::approval::{
    ApprovalRule, ApprovalRuleEventMetadata, ApprovalRuleOverriddenEventMetadata,
    ApprovalStateChangedEventMetadata,
};
use super::enums::{PullRequestEventType, PullRequestStatus};
use super::merge::MergeMetadata;
use super::timestamp::Timestamp;

/// A pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,
    /// Status: OPEN or CLOSED
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_status: Option<PullRequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_arn: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pull_request_targets: Vec<PullRequestTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    /// Changes whenever the source branch moves or approvals reset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub approval_rules: Vec<ApprovalRule>,
}

impl PullRequest {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.pull_request_status == Some(PullRequestStatus::Open)
    }

    /// True when every target has been merged.
    #[must_use]
    pub fn is_merged(&self) -> bool {
        !self.pull_request_targets.is_empty()
            && self.pull_request_targets.iter().all(PullRequestTarget::is_merged)
    }
}

/// Source and destination of a pull request within one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PullRequestTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    /// Full ref, e.g. `refs/heads/feature`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_metadata: Option<MergeMetadata>,
}

impl PullRequestTarget {
    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.merge_metadata
            .as_ref()
            .and_then(|m| m.is_merged)
            .unwrap_or(false)
    }
}

/// Target given when creating a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub repository_name: String,
    pub source_reference: String,
    /// Defaults to the repository's default branch when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_reference: Option<String>,
}

impl Target {
    pub fn new(repository_name: impl Into<String>, source_reference: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            source_reference: source_reference.into(),
            destination_reference: None,
        }
    }

    #[must_use]
    pub fn with_destination(mut self, destination_reference: impl Into<String>) -> Self {
        self.destination_reference = Some(destination_reference.into());
        self
    }
}

/// One entry of a pull request's event history.
///
/// Only the metadata field matching `pull_request_event_type` is populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PullRequestEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_event_type: Option<PullRequestEventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_created_event_metadata: Option<PullRequestCreatedEventMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_status_changed_event_metadata: Option<PullRequestStatusChangedEventMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_source_reference_updated_event_metadata:
        Option<PullRequestSourceReferenceUpdatedEventMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_merged_state_changed_event_metadata:
        Option<PullRequestMergedStateChangedEventMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_event_metadata: Option<ApprovalRuleEventMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_state_changed_event_metadata: Option<ApprovalStateChangedEventMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_overridden_event_metadata: Option<ApprovalRuleOverriddenEventMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PullRequestCreatedEventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_base: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PullRequestStatusChangedEventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_status: Option<PullRequestStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PullRequestSourceReferenceUpdatedEventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_base: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PullRequestMergedStateChangedEventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_metadata: Option<MergeMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::enums::MergeOption;

    #[test]
    fn test_pull_request_deserialize() {
        let json = r#"{
            "pullRequestId": "42",
            "title": "Pronunciation difficulty analyzer",
            "pullRequestStatus": "OPEN",
            "creationDate": 1508962823.285,
            "lastActivityDate": 1508442444,
            "authorArn": "arn:aws:iam::111111111111:user/Jane_Doe",
            "revisionId": "rev1",
            "pullRequestTargets": [{
                "repositoryName": "MyDemoRepo",
                "sourceReference": "refs/heads/jane-branch",
                "destinationReference": "refs/heads/main",
                "mergeMetadata": {"isMerged": false}
            }],
            "approvalRules": [{
                "approvalRuleName": "Require two approved approvers",
                "ruleContentSha256": "4711b576EXAMPLE"
            }]
        }"#;

        let pr: PullRequest = serde_json::from_str(json).expect("Should deserialize");
        assert!(pr.is_open());
        assert!(!pr.is_merged());
        assert_eq!(pr.approval_rules.len(), 1);
        assert_eq!(
            pr.creation_date.map(|d| d.timestamp_millis()),
            Some(1_508_962_823_285)
        );
    }

    #[test]
    fn test_pull_request_merged() {
        let pr = PullRequest {
            pull_request_status: Some(PullRequestStatus::Closed),
            pull_request_targets: vec![PullRequestTarget {
                merge_metadata: Some(MergeMetadata {
                    is_merged: Some(true),
                    merge_option: Some(MergeOption::SquashMerge),
                    ..Default::default()
                }),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(pr.is_merged());
        assert!(!pr.is_open());
    }

    #[test]
    fn test_target_serialize() {
        let target = Target::new("MyDemoRepo", "refs/heads/feature");
        assert_eq!(
            serde_json::to_string(&target).unwrap(),
            r#"{"repositoryName":"MyDemoRepo","sourceReference":"refs/heads/feature"}"#
        );

        let target = target.with_destination("refs/heads/main");
        let value = serde_json::to_value(&target).unwrap();
        assert_eq!(value["destinationReference"], "refs/heads/main");
    }

    #[test]
    fn test_event_carries_matching_metadata() {
        let json = r#"{
            "pullRequestId": "42",
            "eventDate": 1510341779.53,
            "pullRequestEventType": "PULL_REQUEST_STATUS_CHANGED",
            "pullRequestStatusChangedEventMetadata": {"pullRequestStatus": "CLOSED"}
        }"#;
        let event: PullRequestEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event.pull_request_event_type,
            Some(PullRequestEventType::StatusChanged)
        );
        assert_eq!(
            event
                .pull_request_status_changed_event_metadata
                .and_then(|m| m.pull_request_status),
            Some(PullRequestStatus::Closed)
        );
        assert!(event.approval_rule_event_metadata.is_none());
    }
}
