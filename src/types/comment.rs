//! Comment and reaction data models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::RelativeFileVersion;
use super::timestamp::Timestamp;

/// A comment on a commit comparison or pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// ID of the comment this one replies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_arn: Option<String>,
    /// Content was removed with DeleteCommentContent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
    /// Reactions the caller left on this comment
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caller_reactions: Vec<String>,
    /// Reaction value to count
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub reaction_counts: BTreeMap<String, i32>,
}

impl Comment {
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted.unwrap_or(false)
    }

    #[must_use]
    pub fn is_reply(&self) -> bool {
        self.in_reply_to.is_some()
    }
}

/// Where in a compared file a comment is anchored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Line number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_file_version: Option<RelativeFileVersion>,
}

impl Location {
    /// A line comment on the `AFTER` side of the comparison.
    pub fn line(file_path: impl Into<String>, file_position: i64) -> Self {
        Self {
            file_path: Some(file_path.into()),
            file_position: Some(file_position),
            relative_file_version: Some(RelativeFileVersion::After),
        }
    }
}

/// Comments on one location of a commit comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentsForComparedCommit {
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
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

/// Comments on one location of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentsForPullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request_id: Option<String>,
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
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

/// The ways one reaction value is written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReactionValueFormats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// e.g. `:thumbsup:`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    /// e.g. `U+1F44D`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode: Option<String>,
}

/// One reaction on a comment and the users who left it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReactionForComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<ReactionValueFormats>,
    /// ARNs of users who reacted
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reaction_users: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions_from_deleted_users_count: Option<i32>,
}

impl ReactionForComment {
    /// Total reactions including those from deleted users.
    #[must_use]
    pub fn total(&self) -> usize {
        let deleted = self
            .reactions_from_deleted_users_count
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0);
        self.reaction_users.len() + deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_deserialize() {
        let json = r#"{
            "authorArn": "arn:aws:iam::111111111111:user/Li_Juan",
            "clientRequestToken": "123Example",
            "commentId": "ff30b348EXAMPLEb9aa670f",
            "content": "Whoops - I meant to add this comment to the line, not the file.",
            "creationDate": 1508369768.142,
            "deleted": false,
            "lastModifiedDate": 1508369842.278,
            "callerReactions": [],
            "reactionCounts": {"SMILE": 1, "THUMBSUP": 3}
        }"#;

        let comment: Comment = serde_json::from_str(json).expect("Should deserialize");
        assert!(!comment.is_deleted());
        assert!(!comment.is_reply());
        assert_eq!(comment.reaction_counts.get("THUMBSUP"), Some(&3));
        assert_eq!(
            comment.creation_date.map(|d| d.timestamp_millis()),
            Some(1_508_369_768_142)
        );
    }

    #[test]
    fn test_empty_collections_are_omitted() {
        assert_eq!(serde_json::to_string(&Comment::default()).unwrap(), "{}");

        let mut comment = Comment::default();
        comment.reaction_counts.insert("THUMBSUP".to_string(), 2);
        assert_eq!(
            serde_json::to_string(&comment).unwrap(),
            r#"{"reactionCounts":{"THUMBSUP":2}}"#
        );
    }

    #[test]
    fn test_location_line() {
        let location = Location::line("ahs_count.py", 7);
        let value = serde_json::to_value(&location).unwrap();
        assert_eq!(value["filePath"], "ahs_count.py");
        assert_eq!(value["filePosition"], 7);
        assert_eq!(value["relativeFileVersion"], "AFTER");
    }

    #[test]
    fn test_reaction_total() {
        let reaction = ReactionForComment {
            reaction: Some(ReactionValueFormats {
                emoji: Some("👍".to_string()),
                short_code: Some(":thumbsup:".to_string()),
                unicode: Some("U+1F44D".to_string()),
            }),
            reaction_users: vec!["arn:aws:iam::123456789012:user/Li_Juan".to_string()],
            reactions_from_deleted_users_count: Some(2),
        };
        assert_eq!(reaction.total(), 3);
    }
}
