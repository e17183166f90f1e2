//! Approval rules, approval rule templates and approval states.
//!
//! Rule content travels as a JSON document inside a string field. [`RuleContent`]
//! is a typed view of that document, and [`content_sha256`] produces the digest
//! the service expects when an update names the content it replaces.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::enums::{ApprovalState, OverrideStatus};
use super::timestamp::Timestamp;
use crate::error::Error;

/// Version string of the current rule content grammar.
pub const RULE_CONTENT_VERSION: &str = "2018-11-08";

/// One user's approval state on a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Approval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_state: Option<ApprovalState>,
}

/// Template an approval rule was created from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OriginApprovalRuleTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template_name: Option<String>,
}

/// An approval rule attached to a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApprovalRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_name: Option<String>,
    /// JSON rule document, see [`RuleContent`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_content_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,
    /// ARN of the user who last changed the rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_approval_rule_template: Option<OriginApprovalRuleTemplate>,
}

/// A reusable approval rule that can be associated with repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApprovalRuleTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_content_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_user: Option<String>,
}

/// Outcome of evaluating a pull request against its approval rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Evaluation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overridden: Option<bool>,
    /// Names of satisfied rules
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub approval_rules_satisfied: Vec<String>,
    /// Names of rules still waiting for approvals
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub approval_rules_not_satisfied: Vec<String>,
}

impl Evaluation {
    /// Whether the pull request may be merged as far as approvals go.
    #[must_use]
    pub fn is_mergeable(&self) -> bool {
        self.approved.unwrap_or(false) || self.overridden.unwrap_or(false)
    }
}

/// Pull request event payload for approval rule changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApprovalRuleEventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_content: Option<String>,
}

/// Pull request event payload for approval rule overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApprovalRuleOverriddenEventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_status: Option<OverrideStatus>,
}

/// Pull request event payload for approval state changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApprovalStateChangedEventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<ApprovalState>,
}

/// Failure to associate a template with one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchAssociateApprovalRuleTemplateWithRepositoriesError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Failure to disassociate a template from one repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchDisassociateApprovalRuleTemplateFromRepositoriesError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Typed form of an approval rule content document.
///
/// ```
/// use codecommit::types::{RuleContent, RuleStatement};
///
/// let content = RuleContent::new(vec![RuleStatement::approvers(2)
///     .with_pool_member("arn:aws:sts::123456789012:assumed-role/CodeCommitReview/*")]);
/// let json = content.to_json().unwrap();
/// assert!(json.contains(r#""NumberOfApprovalsNeeded":2"#));
/// assert_eq!(RuleContent::parse(&json).unwrap(), content);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleContent {
    pub version: String,
    /// Only used by templates: branches the rule applies to, as full refs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_references: Option<BTreeSet<String>>,
    pub statements: Vec<RuleStatement>,
}

impl RuleContent {
    /// Content with the current grammar version.
    #[must_use]
    pub fn new(statements: Vec<RuleStatement>) -> Self {
        Self {
            version: RULE_CONTENT_VERSION.to_string(),
            destination_references: None,
            statements,
        }
    }

    /// Restrict a template rule to the given branch names.
    #[must_use]
    pub fn for_branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let refs = branches
            .into_iter()
            .map(|b| {
                let b = b.as_ref();
                if b.starts_with("refs/") {
                    b.to_string()
                } else {
                    format!("refs/heads/{b}")
                }
            })
            .collect();
        self.destination_references = Some(refs);
        self
    }

    /// Parse the string carried in `approvalRuleContent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid rule content JSON.
    pub fn parse(content: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(content)?)
    }

    /// Render as the string expected in `approvalRuleContent`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One statement of a rule content document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleStatement {
    /// Always `"Approvers"` in the current grammar
    #[serde(rename = "Type")]
    pub statement_type: String,
    pub number_of_approvals_needed: u32,
    /// ARNs (wildcards allowed) whose approvals count toward the rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approval_pool_members: Vec<String>,
}

impl RuleStatement {
    #[must_use]
    pub fn approvers(number_of_approvals_needed: u32) -> Self {
        Self {
            statement_type: "Approvers".to_string(),
            number_of_approvals_needed,
            approval_pool_members: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pool_member(mut self, member: impl Into<String>) -> Self {
        self.approval_pool_members.push(member.into());
        self
    }
}

/// Hex-encoded SHA-256 of rule content, as stored in `ruleContentSha256`.
#[must_use]
pub fn content_sha256(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_sha256() {
        assert_eq!(
            content_sha256(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(content_sha256("abc").len(), 64);
    }

    #[test]
    fn test_rule_content_parse() {
        let json = r#"{
            "Version": "2018-11-08",
            "DestinationReferences": ["refs/heads/main"],
            "Statements": [{
                "Type": "Approvers",
                "NumberOfApprovalsNeeded": 2,
                "ApprovalPoolMembers": ["arn:aws:sts::123456789012:assumed-role/CodeCommitReview/*"]
            }]
        }"#;

        let content = RuleContent::parse(json).unwrap();
        assert_eq!(content.version, RULE_CONTENT_VERSION);
        assert_eq!(content.statements[0].number_of_approvals_needed, 2);
        assert!(content
            .destination_references
            .as_ref()
            .is_some_and(|r| r.contains("refs/heads/main")));
    }

    #[test]
    fn test_for_branches_expands_short_names() {
        let content = RuleContent::new(vec![RuleStatement::approvers(1)])
            .for_branches(["main", "refs/heads/release"]);
        let refs: Vec<&String> = content
            .destination_references
            .iter()
            .flatten()
            .collect();
        assert_eq!(refs, vec!["refs/heads/main", "refs/heads/release"]);
    }

    #[test]
    fn test_rule_content_rejects_garbage() {
        assert!(RuleContent::parse("not json").is_err());
    }

    #[test]
    fn test_evaluation_mergeable() {
        let pending = Evaluation {
            approved: Some(false),
            overridden: Some(false),
            approval_rules_not_satisfied: vec!["Require two approvals".to_string()],
            ..Default::default()
        };
        assert!(!pending.is_mergeable());

        let overridden = Evaluation {
            overridden: Some(true),
            ..pending
        };
        assert!(overridden.is_mergeable());
    }
}
