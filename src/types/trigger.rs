//! Repository trigger data models.

use serde::{Deserialize, Serialize};

use super::enums::RepositoryTriggerEvent;

/// A notification target fired on repository events.
///
/// Triggers are sent whole on PutRepositoryTriggers, so name, destination and
/// events are required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryTrigger {
    pub name: String,
    /// ARN of the SNS topic or Lambda function
    pub destination_arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    /// Branches to watch; empty means all branches
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<String>,
    pub events: Vec<RepositoryTriggerEvent>,
}

impl RepositoryTrigger {
    pub fn new(
        name: impl Into<String>,
        destination_arn: impl Into<String>,
        events: Vec<RepositoryTriggerEvent>,
    ) -> Self {
        Self {
            name: name.into(),
            destination_arn: destination_arn.into(),
            custom_data: None,
            branches: Vec::new(),
            events,
        }
    }

    #[must_use]
    pub fn with_branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branches = branches.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the trigger fires for `event` on `branch`.
    #[must_use]
    pub fn fires_on(&self, event: RepositoryTriggerEvent, branch: &str) -> bool {
        let event_match = self
            .events
            .iter()
            .any(|e| *e == RepositoryTriggerEvent::All || *e == event);
        let branch_match = self.branches.is_empty() || self.branches.iter().any(|b| b == branch);
        event_match && branch_match
    }
}

/// A trigger that failed during TestRepositoryTriggers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositoryTriggerExecutionFailure {
    /// Name of the failed trigger
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_serialize() {
        let trigger = RepositoryTrigger::new(
            "MyFirstTrigger",
            "arn:aws:sns:us-east-1:111111111111:MyCodeCommitTopic",
            vec![RepositoryTriggerEvent::All],
        )
        .with_branches(["main", "preprod"]);

        let value = serde_json::to_value(&trigger).unwrap();
        assert_eq!(value["events"][0], "all");
        assert_eq!(value["branches"][1], "preprod");
        assert!(value.get("customData").is_none());
    }

    #[test]
    fn test_fires_on() {
        let trigger = RepositoryTrigger::new(
            "deletes",
            "arn:aws:lambda:us-east-1:111111111111:function:cleanup",
            vec![RepositoryTriggerEvent::DeleteReference],
        )
        .with_branches(["feature"]);

        assert!(trigger.fires_on(RepositoryTriggerEvent::DeleteReference, "feature"));
        assert!(!trigger.fires_on(RepositoryTriggerEvent::CreateReference, "feature"));
        assert!(!trigger.fires_on(RepositoryTriggerEvent::DeleteReference, "main"));
    }

    #[test]
    fn test_trigger_requires_name() {
        let result: Result<RepositoryTrigger, _> =
            serde_json::from_str(r#"{"destinationArn":"arn","events":["all"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_trigger_requires_events() {
        let result: Result<RepositoryTrigger, _> =
            serde_json::from_str(r#"{"name":"t","destinationArn":"arn"}"#);
        assert!(result.is_err());

        let trigger: RepositoryTrigger =
            serde_json::from_str(r#"{"name":"t","destinationArn":"arn","events":[]}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&trigger).unwrap(),
            r#"{"name":"t","destinationArn":"arn","events":[]}"#
        );
    }
}
