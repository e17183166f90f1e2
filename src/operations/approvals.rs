//! Approval rules, approval states and overrides on a single pull request.
//!
//! Every state-changing call here names the pull request revision it applies
//! to. A revision that is no longer current is rejected by the service with
//! `RevisionNotCurrentException`.

use serde::{Deserialize, Serialize};

use crate::types::{Approval, ApprovalRule, ApprovalState, Evaluation, OverrideStatus};
use crate::validation::{self, Validate, ValidationError};

fn check_revision(pull_request_id: &str, revision_id: &str) -> Result<(), ValidationError> {
    validation::not_empty("pullRequestId", pull_request_id)?;
    validation::not_empty("revisionId", revision_id)
}

fn check_rule(name: &str, content: &str) -> Result<(), ValidationError> {
    validation::length("approvalRuleName", name, 1, validation::APPROVAL_RULE_NAME_MAX)?;
    validation::length(
        "approvalRuleContent",
        content,
        1,
        validation::APPROVAL_RULE_CONTENT_MAX,
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePullRequestApprovalRuleRequest {
    pub pull_request_id: String,
    pub approval_rule_name: String,
    /// JSON rule document, see [`crate::types::RuleContent`]
    pub approval_rule_content: String,
}

impl CreatePullRequestApprovalRuleRequest {
    pub fn new(
        pull_request_id: impl Into<String>,
        approval_rule_name: impl Into<String>,
        approval_rule_content: impl Into<String>,
    ) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            approval_rule_name: approval_rule_name.into(),
            approval_rule_content: approval_rule_content.into(),
        }
    }
}

impl Validate for CreatePullRequestApprovalRuleRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)?;
        check_rule(&self.approval_rule_name, &self.approval_rule_content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePullRequestApprovalRuleResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule: Option<ApprovalRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePullRequestApprovalRuleRequest {
    pub pull_request_id: String,
    pub approval_rule_name: String,
}

impl DeletePullRequestApprovalRuleRequest {
    pub fn new(pull_request_id: impl Into<String>, approval_rule_name: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            approval_rule_name: approval_rule_name.into(),
        }
    }
}

impl Validate for DeletePullRequestApprovalRuleRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)?;
        validation::length(
            "approvalRuleName",
            &self.approval_rule_name,
            1,
            validation::APPROVAL_RULE_NAME_MAX,
        )
    }
}

/// Rules created from a template cannot be deleted this way; the ID is
/// empty when the rule did not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeletePullRequestApprovalRuleResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePullRequestApprovalRuleContentRequest {
    pub pull_request_id: String,
    pub approval_rule_name: String,
    /// SHA-256 of the content being replaced, see [`crate::types::content_sha256`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_rule_content_sha256: Option<String>,
    pub new_rule_content: String,
}

impl UpdatePullRequestApprovalRuleContentRequest {
    pub fn new(
        pull_request_id: impl Into<String>,
        approval_rule_name: impl Into<String>,
        new_rule_content: impl Into<String>,
    ) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            approval_rule_name: approval_rule_name.into(),
            existing_rule_content_sha256: None,
            new_rule_content: new_rule_content.into(),
        }
    }

    /// Only replace the rule if its current content is `existing`.
    #[must_use]
    pub fn replacing(mut self, existing: &str) -> Self {
        self.existing_rule_content_sha256 = Some(crate::types::content_sha256(existing));
        self
    }
}

impl Validate for UpdatePullRequestApprovalRuleContentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("pullRequestId", &self.pull_request_id)?;
        check_rule(&self.approval_rule_name, &self.new_rule_content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePullRequestApprovalRuleContentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule: Option<ApprovalRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPullRequestApprovalStatesRequest {
    pub pull_request_id: String,
    pub revision_id: String,
}

impl GetPullRequestApprovalStatesRequest {
    pub fn new(pull_request_id: impl Into<String>, revision_id: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            revision_id: revision_id.into(),
        }
    }
}

impl Validate for GetPullRequestApprovalStatesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_revision(&self.pull_request_id, &self.revision_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetPullRequestApprovalStatesResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub approvals: Vec<Approval>,
}

impl GetPullRequestApprovalStatesResult {
    /// ARNs of users currently approving.
    #[must_use]
    pub fn approvers(&self) -> Vec<&str> {
        self.approvals
            .iter()
            .filter(|a| a.approval_state == Some(ApprovalState::Approve))
            .filter_map(|a| a.user_arn.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPullRequestOverrideStateRequest {
    pub pull_request_id: String,
    pub revision_id: String,
}

impl GetPullRequestOverrideStateRequest {
    pub fn new(pull_request_id: impl Into<String>, revision_id: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            revision_id: revision_id.into(),
        }
    }
}

impl Validate for GetPullRequestOverrideStateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_revision(&self.pull_request_id, &self.revision_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetPullRequestOverrideStateResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overridden: Option<bool>,
    /// ARN of the user who set the override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrider: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverridePullRequestApprovalRulesRequest {
    pub pull_request_id: String,
    pub revision_id: String,
    pub override_status: OverrideStatus,
}

impl OverridePullRequestApprovalRulesRequest {
    pub fn new(
        pull_request_id: impl Into<String>,
        revision_id: impl Into<String>,
        override_status: OverrideStatus,
    ) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            revision_id: revision_id.into(),
            override_status,
        }
    }
}

impl Validate for OverridePullRequestApprovalRulesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_revision(&self.pull_request_id, &self.revision_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverridePullRequestApprovalRulesResult {}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePullRequestApprovalStateRequest {
    pub pull_request_id: String,
    pub revision_id: String,
    pub approval_state: ApprovalState,
}

impl UpdatePullRequestApprovalStateRequest {
    pub fn new(
        pull_request_id: impl Into<String>,
        revision_id: impl Into<String>,
        approval_state: ApprovalState,
    ) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            revision_id: revision_id.into(),
            approval_state,
        }
    }

    pub fn approve(pull_request_id: impl Into<String>, revision_id: impl Into<String>) -> Self {
        Self::new(pull_request_id, revision_id, ApprovalState::Approve)
    }
}

impl Validate for UpdatePullRequestApprovalStateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_revision(&self.pull_request_id, &self.revision_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpdatePullRequestApprovalStateResult {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatePullRequestApprovalRulesRequest {
    pub pull_request_id: String,
    pub revision_id: String,
}

impl EvaluatePullRequestApprovalRulesRequest {
    pub fn new(pull_request_id: impl Into<String>, revision_id: impl Into<String>) -> Self {
        Self {
            pull_request_id: pull_request_id.into(),
            revision_id: revision_id.into(),
        }
    }
}

impl Validate for EvaluatePullRequestApprovalRulesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_revision(&self.pull_request_id, &self.revision_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluatePullRequestApprovalRulesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<Evaluation>,
}
