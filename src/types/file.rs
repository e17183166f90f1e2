//! File, folder and commit-entry data models.

use serde::{Deserialize, Serialize};

use super::enums::FileMode;

/// A file inside a folder listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct File {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_id: Option<String>,
    /// Path from the repository root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<String>,
    /// Path from the folder that was listed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_mode: Option<FileMode>,
}

/// A file touched by a commit created through the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_mode: Option<FileMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Folder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SymbolicLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_mode: Option<FileMode>,
}

/// A submodule (Git link) entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubModule {
    /// Commit the submodule points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_path: Option<String>,
}

/// Copy or move an existing file as the content of a put entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFileSpecifier {
    pub file_path: String,
    /// Remove the source path after copying
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_move: Option<bool>,
}

/// A file to add or update in a commit.
///
/// Exactly one of `file_content` and `source_file` should be set; the service
/// rejects entries with both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutFileEntry {
    pub file_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_mode: Option<FileMode>,
    #[serde(
        default,
        with = "crate::encoding::base64_bytes::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_content: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<SourceFileSpecifier>,
}

impl PutFileEntry {
    /// Entry that writes `content` at `file_path`.
    pub fn with_content(file_path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_path: file_path.into(),
            file_content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Entry that copies (or moves) another file to `file_path`.
    pub fn from_source(file_path: impl Into<String>, source: SourceFileSpecifier) -> Self {
        Self {
            file_path: file_path.into(),
            source_file: Some(source),
            ..Default::default()
        }
    }
}

/// A file to delete in a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileEntry {
    pub file_path: String,
}

/// A file whose mode changes in a commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFileModeEntry {
    pub file_path: String,
    pub file_mode: FileMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_file_entry_encodes_content_as_base64() {
        let entry = PutFileEntry::with_content("README.md", "# hi\n");
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["filePath"], "README.md");
        assert_eq!(value["fileContent"], "IyBoaQo=");
        assert!(value.get("sourceFile").is_none());
        assert!(value.get("fileMode").is_none());
    }

    #[test]
    fn test_put_file_entry_from_source() {
        let entry = PutFileEntry::from_source(
            "docs/guide.md",
            SourceFileSpecifier {
                file_path: "guide.md".to_string(),
                is_move: Some(true),
            },
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"filePath":"docs/guide.md","sourceFile":{"filePath":"guide.md","isMove":true}}"#
        );
    }

    #[test]
    fn test_folder_listing_entry_deserialize() {
        let json = r#"{
            "absolutePath": "src/main.rs",
            "blobId": "2eb4af3bEXAMPLE",
            "relativePath": "main.rs",
            "fileMode": "NORMAL"
        }"#;
        let file: File = serde_json::from_str(json).unwrap();
        assert_eq!(file.file_mode, Some(FileMode::Normal));
        assert_eq!(file.relative_path.as_deref(), Some("main.rs"));
    }

    #[test]
    fn test_set_file_mode_requires_mode() {
        let missing: Result<SetFileModeEntry, _> =
            serde_json::from_str(r#"{"filePath":"run.sh"}"#);
        assert!(missing.is_err());

        let entry: SetFileModeEntry =
            serde_json::from_str(r#"{"filePath":"run.sh","fileMode":"EXECUTABLE"}"#).unwrap();
        assert_eq!(entry.file_mode, FileMode::Executable);
    }
}
