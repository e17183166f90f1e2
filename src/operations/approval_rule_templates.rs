//! Approval rule templates and their repository associations.

use serde::{Deserialize, Serialize};

use crate::types::{
    ApprovalRuleTemplate, BatchAssociateApprovalRuleTemplateWithRepositoriesError,
    BatchDisassociateApprovalRuleTemplateFromRepositoriesError,
};
use crate::validation::{self, Validate, ValidationError};

fn check_template_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
    validation::length(field, name, 1, validation::APPROVAL_RULE_NAME_MAX)
}

fn check_template_content(field: &'static str, content: &str) -> Result<(), ValidationError> {
    validation::length(field, content, 1, validation::APPROVAL_RULE_CONTENT_MAX)
}

fn check_repository_batch(names: &[String]) -> Result<(), ValidationError> {
    validation::items("repositoryNames", names, validation::BATCH_REPOSITORY_NAMES_MAX)?;
    names
        .iter()
        .try_for_each(|name| validation::repository_name("repositoryNames", name))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateApprovalRuleTemplateWithRepositoryRequest {
    pub approval_rule_template_name: String,
    pub repository_name: String,
}

impl AssociateApprovalRuleTemplateWithRepositoryRequest {
    pub fn new(
        approval_rule_template_name: impl Into<String>,
        repository_name: impl Into<String>,
    ) -> Self {
        Self {
            approval_rule_template_name: approval_rule_template_name.into(),
            repository_name: repository_name.into(),
        }
    }
}

impl Validate for AssociateApprovalRuleTemplateWithRepositoryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name("approvalRuleTemplateName", &self.approval_rule_template_name)?;
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssociateApprovalRuleTemplateWithRepositoryResult {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAssociateApprovalRuleTemplateWithRepositoriesRequest {
    pub approval_rule_template_name: String,
    pub repository_names: Vec<String>,
}

impl BatchAssociateApprovalRuleTemplateWithRepositoriesRequest {
    pub fn new<I, S>(approval_rule_template_name: impl Into<String>, repository_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            approval_rule_template_name: approval_rule_template_name.into(),
            repository_names: repository_names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for BatchAssociateApprovalRuleTemplateWithRepositoriesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name("approvalRuleTemplateName", &self.approval_rule_template_name)?;
        check_repository_batch(&self.repository_names)
    }
}

/// Repositories associated, plus one error per repository that was not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchAssociateApprovalRuleTemplateWithRepositoriesResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub associated_repository_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<BatchAssociateApprovalRuleTemplateWithRepositoriesError>,
}

impl BatchAssociateApprovalRuleTemplateWithRepositoriesResult {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn failed_repository_names(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(|e| e.repository_name.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDisassociateApprovalRuleTemplateFromRepositoriesRequest {
    pub approval_rule_template_name: String,
    pub repository_names: Vec<String>,
}

impl BatchDisassociateApprovalRuleTemplateFromRepositoriesRequest {
    pub fn new<I, S>(approval_rule_template_name: impl Into<String>, repository_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            approval_rule_template_name: approval_rule_template_name.into(),
            repository_names: repository_names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for BatchDisassociateApprovalRuleTemplateFromRepositoriesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name("approvalRuleTemplateName", &self.approval_rule_template_name)?;
        check_repository_batch(&self.repository_names)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchDisassociateApprovalRuleTemplateFromRepositoriesResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disassociated_repository_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<BatchDisassociateApprovalRuleTemplateFromRepositoriesError>,
}

impl BatchDisassociateApprovalRuleTemplateFromRepositoriesResult {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn failed_repository_names(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter_map(|e| e.repository_name.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApprovalRuleTemplateRequest {
    pub approval_rule_template_name: String,
    /// JSON rule document; may name `DestinationReferences`
    pub approval_rule_template_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_rule_template_description: Option<String>,
}

impl CreateApprovalRuleTemplateRequest {
    pub fn new(
        approval_rule_template_name: impl Into<String>,
        approval_rule_template_content: impl Into<String>,
    ) -> Self {
        Self {
            approval_rule_template_name: approval_rule_template_name.into(),
            approval_rule_template_content: approval_rule_template_content.into(),
            approval_rule_template_description: None,
        }
    }
}

impl Validate for CreateApprovalRuleTemplateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name("approvalRuleTemplateName", &self.approval_rule_template_name)?;
        check_template_content(
            "approvalRuleTemplateContent",
            &self.approval_rule_template_content,
        )?;
        validation::optional_length(
            "approvalRuleTemplateDescription",
            self.approval_rule_template_description.as_deref(),
            0,
            validation::DESCRIPTION_MAX,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateApprovalRuleTemplateResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template: Option<ApprovalRuleTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteApprovalRuleTemplateRequest {
    pub approval_rule_template_name: String,
}

impl DeleteApprovalRuleTemplateRequest {
    pub fn new(approval_rule_template_name: impl Into<String>) -> Self {
        Self {
            approval_rule_template_name: approval_rule_template_name.into(),
        }
    }
}

impl Validate for DeleteApprovalRuleTemplateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name("approvalRuleTemplateName", &self.approval_rule_template_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteApprovalRuleTemplateResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisassociateApprovalRuleTemplateFromRepositoryRequest {
    pub approval_rule_template_name: String,
    pub repository_name: String,
}

impl DisassociateApprovalRuleTemplateFromRepositoryRequest {
    pub fn new(
        approval_rule_template_name: impl Into<String>,
        repository_name: impl Into<String>,
    ) -> Self {
        Self {
            approval_rule_template_name: approval_rule_template_name.into(),
            repository_name: repository_name.into(),
        }
    }
}

impl Validate for DisassociateApprovalRuleTemplateFromRepositoryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name("approvalRuleTemplateName", &self.approval_rule_template_name)?;
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisassociateApprovalRuleTemplateFromRepositoryResult {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApprovalRuleTemplateRequest {
    pub approval_rule_template_name: String,
}

impl GetApprovalRuleTemplateRequest {
    pub fn new(approval_rule_template_name: impl Into<String>) -> Self {
        Self {
            approval_rule_template_name: approval_rule_template_name.into(),
        }
    }
}

impl Validate for GetApprovalRuleTemplateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name("approvalRuleTemplateName", &self.approval_rule_template_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetApprovalRuleTemplateResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template: Option<ApprovalRuleTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApprovalRuleTemplatesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl Validate for ListApprovalRuleTemplatesRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListApprovalRuleTemplatesResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub approval_rule_template_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAssociatedApprovalRuleTemplatesForRepositoryRequest {
    pub repository_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListAssociatedApprovalRuleTemplatesForRepositoryRequest {
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            ..Default::default()
        }
    }
}

impl Validate for ListAssociatedApprovalRuleTemplatesForRepositoryRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListAssociatedApprovalRuleTemplatesForRepositoryResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub approval_rule_template_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRepositoriesForApprovalRuleTemplateRequest {
    pub approval_rule_template_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListRepositoriesForApprovalRuleTemplateRequest {
    pub fn new(approval_rule_template_name: impl Into<String>) -> Self {
        Self {
            approval_rule_template_name: approval_rule_template_name.into(),
            ..Default::default()
        }
    }
}

impl Validate for ListRepositoriesForApprovalRuleTemplateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name("approvalRuleTemplateName", &self.approval_rule_template_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRepositoriesForApprovalRuleTemplateResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub repository_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApprovalRuleTemplateContentRequest {
    pub approval_rule_template_name: String,
    pub new_rule_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_rule_content_sha256: Option<String>,
}

impl UpdateApprovalRuleTemplateContentRequest {
    pub fn new(
        approval_rule_template_name: impl Into<String>,
        new_rule_content: impl Into<String>,
    ) -> Self {
        Self {
            approval_rule_template_name: approval_rule_template_name.into(),
            new_rule_content: new_rule_content.into(),
            existing_rule_content_sha256: None,
        }
    }

    /// Only replace the template content if it is currently `existing`.
    #[must_use]
    pub fn replacing(mut self, existing: &str) -> Self {
        self.existing_rule_content_sha256 = Some(crate::types::content_sha256(existing));
        self
    }
}

impl Validate for UpdateApprovalRuleTemplateContentRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name("approvalRuleTemplateName", &self.approval_rule_template_name)?;
        check_template_content("newRuleContent", &self.new_rule_content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateApprovalRuleTemplateContentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template: Option<ApprovalRuleTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApprovalRuleTemplateDescriptionRequest {
    pub approval_rule_template_name: String,
    pub approval_rule_template_description: String,
}

impl UpdateApprovalRuleTemplateDescriptionRequest {
    pub fn new(
        approval_rule_template_name: impl Into<String>,
        approval_rule_template_description: impl Into<String>,
    ) -> Self {
        Self {
            approval_rule_template_name: approval_rule_template_name.into(),
            approval_rule_template_description: approval_rule_template_description.into(),
        }
    }
}

impl Validate for UpdateApprovalRuleTemplateDescriptionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name("approvalRuleTemplateName", &self.approval_rule_template_name)?;
        validation::length(
            "approvalRuleTemplateDescription",
            &self.approval_rule_template_description,
            0,
            validation::DESCRIPTION_MAX,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateApprovalRuleTemplateDescriptionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template: Option<ApprovalRuleTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApprovalRuleTemplateNameRequest {
    pub old_approval_rule_template_name: String,
    pub new_approval_rule_template_name: String,
}

impl UpdateApprovalRuleTemplateNameRequest {
    pub fn new(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            old_approval_rule_template_name: old_name.into(),
            new_approval_rule_template_name: new_name.into(),
        }
    }
}

impl Validate for UpdateApprovalRuleTemplateNameRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_template_name(
            "oldApprovalRuleTemplateName",
            &self.old_approval_rule_template_name,
        )?;
        check_template_name(
            "newApprovalRuleTemplateName",
            &self.new_approval_rule_template_name,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateApprovalRuleTemplateNameResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rule_template: Option<ApprovalRuleTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RuleContent, RuleStatement};

    #[test]
    fn test_batch_associate_partial_failure() {
        let json = r#"{
            "associatedRepositoryNames": ["MyDemoRepo"],
            "errors": [{
                "repositoryName": "MyOtherDemoRepo",
                "errorCode": "RepositoryDoesNotExistException",
                "errorMessage": "MyOtherDemoRepo does not exist"
            }]
        }"#;
        let result: BatchAssociateApprovalRuleTemplateWithRepositoriesResult =
            serde_json::from_str(json).unwrap();
        assert!(!result.is_complete());
        assert_eq!(result.associated_repository_names, vec!["MyDemoRepo"]);
        assert_eq!(result.failed_repository_names(), vec!["MyOtherDemoRepo"]);
    }

    #[test]
    fn test_batch_disassociate_complete() {
        let result: BatchDisassociateApprovalRuleTemplateFromRepositoriesResult =
            serde_json::from_str(r#"{"disassociatedRepositoryNames": ["a", "b"], "errors": []}"#)
                .unwrap();
        assert!(result.is_complete());
        assert!(result.failed_repository_names().is_empty());
    }

    #[test]
    fn test_batch_request_checks_every_name() {
        let request = BatchAssociateApprovalRuleTemplateWithRepositoriesRequest::new(
            "2-approver-rule-for-main",
            ["MyDemoRepo", "bad name"],
        );
        assert!(matches!(
            request.validate(),
            Err(ValidationError::Pattern { field: "repositoryNames", .. })
        ));
    }

    #[test]
    fn test_create_template() {
        let content = RuleContent::new(vec![RuleStatement::approvers(2)])
            .for_branches(["main"])
            .to_json()
            .unwrap();
        let request = CreateApprovalRuleTemplateRequest {
            approval_rule_template_description: Some("Two approvers on main".to_string()),
            ..CreateApprovalRuleTemplateRequest::new("2-approver-rule-for-main", content)
        };
        assert!(request.validate().is_ok());

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["approvalRuleTemplateName"], "2-approver-rule-for-main");
        assert!(value["approvalRuleTemplateContent"]
            .as_str()
            .unwrap()
            .contains("refs/heads/main"));
    }

    #[test]
    fn test_template_result_deserialize() {
        let json = r#"{"approvalRuleTemplate": {
            "approvalRuleTemplateId": "dd8b17fe-EXAMPLE",
            "approvalRuleTemplateName": "2-approver-rule-for-main",
            "creationDate": 1571352720.773,
            "lastModifiedDate": 1571358728.41,
            "ruleContentSha256": "4711b576EXAMPLE"
        }}"#;
        let result: GetApprovalRuleTemplateResult = serde_json::from_str(json).unwrap();
        let template = result.approval_rule_template.unwrap();
        assert_eq!(
            template.last_modified_date.map(|d| d.timestamp_millis()),
            Some(1_571_358_728_410)
        );
    }
}
