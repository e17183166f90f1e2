//! Repository trigger operations.

use serde::{Deserialize, Serialize};

use crate::types::{RepositoryTrigger, RepositoryTriggerExecutionFailure};
use crate::validation::{self, Validate, ValidationError};

fn check_triggers(triggers: &[RepositoryTrigger]) -> Result<(), ValidationError> {
    for trigger in triggers {
        validation::not_empty("triggers.name", &trigger.name)?;
        validation::not_empty("triggers.destinationArn", &trigger.destination_arn)?;
        if trigger.events.is_empty() {
            return Err(ValidationError::Empty {
                field: "triggers.events",
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRepositoryTriggersRequest {
    pub repository_name: String,
}

impl GetRepositoryTriggersRequest {
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
        }
    }
}

impl Validate for GetRepositoryTriggersRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetRepositoryTriggersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<RepositoryTrigger>,
}

/// Replace the repository's trigger configuration. An empty list removes
/// every trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutRepositoryTriggersRequest {
    pub repository_name: String,
    pub triggers: Vec<RepositoryTrigger>,
}

impl PutRepositoryTriggersRequest {
    pub fn new(repository_name: impl Into<String>, triggers: Vec<RepositoryTrigger>) -> Self {
        Self {
            repository_name: repository_name.into(),
            triggers,
        }
    }
}

impl Validate for PutRepositoryTriggersRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        check_triggers(&self.triggers)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PutRepositoryTriggersResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<String>,
}

/// Fire test notifications for the given triggers without saving them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRepositoryTriggersRequest {
    pub repository_name: String,
    pub triggers: Vec<RepositoryTrigger>,
}

impl TestRepositoryTriggersRequest {
    pub fn new(repository_name: impl Into<String>, triggers: Vec<RepositoryTrigger>) -> Self {
        Self {
            repository_name: repository_name.into(),
            triggers,
        }
    }
}

impl Validate for TestRepositoryTriggersRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::repository_name("repositoryName", &self.repository_name)?;
        if self.triggers.is_empty() {
            return Err(ValidationError::Empty { field: "triggers" });
        }
        check_triggers(&self.triggers)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestRepositoryTriggersResult {
    /// Names of triggers that fired
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub successful_executions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_executions: Vec<RepositoryTriggerExecutionFailure>,
}

impl TestRepositoryTriggersResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed_executions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RepositoryTriggerEvent;

    fn trigger(events: Vec<RepositoryTriggerEvent>) -> RepositoryTrigger {
        RepositoryTrigger::new(
            "MyFirstTrigger",
            "arn:aws:sns:us-east-1:111111111111:MyCodeCommitTopic",
            events,
        )
    }

    #[test]
    fn test_put_triggers_validate() {
        let request =
            PutRepositoryTriggersRequest::new("MyDemoRepo", vec![trigger(vec![RepositoryTriggerEvent::All])]);
        assert!(request.validate().is_ok());

        let request = PutRepositoryTriggersRequest::new("MyDemoRepo", vec![trigger(Vec::new())]);
        assert_eq!(
            request.validate(),
            Err(ValidationError::Empty { field: "triggers.events" })
        );

        let clear = PutRepositoryTriggersRequest::new("MyDemoRepo", Vec::new());
        assert!(clear.validate().is_ok());
    }

    #[test]
    fn test_test_triggers_result() {
        let json = r#"{
            "successfulExecutions": ["MyFirstTrigger"],
            "failedExecutions": [{"trigger": "MySecondTrigger", "failureMessage": "Topic not found"}]
        }"#;
        let result: TestRepositoryTriggersResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_success());
        assert_eq!(
            result.failed_executions[0].trigger.as_deref(),
            Some("MySecondTrigger")
        );
    }
}
