//! Resource tagging operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validation::{self, Validate, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceRequest {
    pub resource_arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListTagsForResourceRequest {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            next_token: None,
        }
    }
}

impl Validate for ListTagsForResourceRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("resourceArn", &self.resource_arn)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListTagsForResourceResult {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceRequest {
    pub resource_arn: String,
    pub tags: BTreeMap<String, String>,
}

impl TagResourceRequest {
    pub fn new(resource_arn: impl Into<String>, tags: BTreeMap<String, String>) -> Self {
        Self {
            resource_arn: resource_arn.into(),
            tags,
        }
    }
}

impl Validate for TagResourceRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("resourceArn", &self.resource_arn)?;
        if self.tags.is_empty() {
            return Err(ValidationError::Empty { field: "tags" });
        }
        validation::tags("tags", &self.tags)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagResourceResult {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceRequest {
    pub resource_arn: String,
    pub tag_keys: Vec<String>,
}

impl UntagResourceRequest {
    pub fn new<I, S>(resource_arn: impl Into<String>, tag_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resource_arn: resource_arn.into(),
            tag_keys: tag_keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validate for UntagResourceRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("resourceArn", &self.resource_arn)?;
        if self.tag_keys.is_empty() {
            return Err(ValidationError::Empty { field: "tagKeys" });
        }
        self.tag_keys
            .iter()
            .try_for_each(|key| validation::length("tagKeys", key, 1, validation::TAG_KEY_MAX))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UntagResourceResult {}

#[cfg(test)]
mod tests {
    use super::*;

    const ARN: &str = "arn:aws:codecommit:us-east-1:123456789012:MyDemoRepo";

    #[test]
    fn test_tag_resource_serialize() {
        let tags = BTreeMap::from([
            ("Team".to_string(), "Saanvi".to_string()),
            ("Status".to_string(), "Secret".to_string()),
        ]);
        let request = TagResourceRequest::new(ARN, tags);
        assert!(request.validate().is_ok());
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            format!(r#"{{"resourceArn":"{ARN}","tags":{{"Status":"Secret","Team":"Saanvi"}}}}"#)
        );
    }

    #[test]
    fn test_tag_key_too_long() {
        let tags = BTreeMap::from([("k".repeat(129), String::new())]);
        let request = TagResourceRequest::new(ARN, tags);
        assert!(matches!(
            request.validate(),
            Err(ValidationError::Length { field: "tags", max: 128, .. })
        ));
    }

    #[test]
    fn test_untag_requires_keys() {
        let request = UntagResourceRequest::new(ARN, Vec::<String>::new());
        assert_eq!(
            request.validate(),
            Err(ValidationError::Empty { field: "tagKeys" })
        );
        assert!(UntagResourceRequest::new(ARN, ["Team"]).validate().is_ok());
    }

    #[test]
    fn test_list_tags_result() {
        let result: ListTagsForResourceResult =
            serde_json::from_str(r#"{"tags": {"Team": "Saanvi"}}"#).unwrap();
        assert_eq!(result.tags.get("Team").map(String::as_str), Some("Saanvi"));
        assert!(result.next_token.is_none());
    }
}
