//! Closed value sets used by request and result fields.
//!
//! Each set is one Rust enum. The wire string only appears at the serde
//! boundary and through [`as_str`](ChangeType::as_str), `Display` and
//! `FromStr`, so `"SQUASH_MERGE".parse::<MergeOption>()` and
//! `MergeOption::SquashMerge` are interchangeable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every member of the set, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire representation.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(Error::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// How a file changed between two commits.
    ChangeType {
        /// Added
        Added => "A",
        /// Modified
        Modified => "M",
        /// Deleted
        Deleted => "D",
    }
}

wire_enum! {
    /// File mode permissions stored for a blob.
    FileMode {
        Executable => "EXECUTABLE",
        Normal => "NORMAL",
        Symlink => "SYMLINK",
    }
}

wire_enum! {
    /// Merge strategy applied by the service.
    MergeOption {
        FastForwardMerge => "FAST_FORWARD_MERGE",
        SquashMerge => "SQUASH_MERGE",
        ThreeWayMerge => "THREE_WAY_MERGE",
    }
}

wire_enum! {
    /// Git object kind at a path.
    ObjectType {
        File => "FILE",
        Directory => "DIRECTORY",
        GitLink => "GIT_LINK",
        SymbolicLink => "SYMBOLIC_LINK",
    }
}

wire_enum! {
    /// Sort key for repository listings.
    SortBy {
        RepositoryName => "repositoryName",
        LastModifiedDate => "lastModifiedDate",
    }
}

wire_enum! {
    /// Sort direction for repository listings.
    Order {
        Ascending => "ascending",
        Descending => "descending",
    }
}

wire_enum! {
    PullRequestStatus {
        Open => "OPEN",
        Closed => "CLOSED",
    }
}

wire_enum! {
    /// A reviewer's approval state on a pull request revision.
    ApprovalState {
        Approve => "APPROVE",
        Revoke => "REVOKE",
    }
}

wire_enum! {
    /// How a conflicted file is resolved.
    ReplacementType {
        KeepBase => "KEEP_BASE",
        KeepSource => "KEEP_SOURCE",
        KeepDestination => "KEEP_DESTINATION",
        /// Use the content supplied in the resolution entry.
        UseNewContent => "USE_NEW_CONTENT",
    }
}

wire_enum! {
    /// Which side of a comparison a comment location refers to.
    RelativeFileVersion {
        Before => "BEFORE",
        After => "AFTER",
    }
}

wire_enum! {
    /// Granularity at which merge conflicts are detected.
    ConflictDetailLevel {
        FileLevel => "FILE_LEVEL",
        LineLevel => "LINE_LEVEL",
    }
}

wire_enum! {
    /// Strategy the service uses to resolve conflicts on its own.
    ConflictResolutionStrategy {
        None => "NONE",
        AcceptSource => "ACCEPT_SOURCE",
        AcceptDestination => "ACCEPT_DESTINATION",
        Automerge => "AUTOMERGE",
    }
}

wire_enum! {
    /// Whether approval rules on a pull request are set aside.
    OverrideStatus {
        Override => "OVERRIDE",
        Revoke => "REVOKE",
    }
}

wire_enum! {
    PullRequestEventType {
        Created => "PULL_REQUEST_CREATED",
        StatusChanged => "PULL_REQUEST_STATUS_CHANGED",
        SourceReferenceUpdated => "PULL_REQUEST_SOURCE_REFERENCE_UPDATED",
        MergeStateChanged => "PULL_REQUEST_MERGE_STATE_CHANGED",
        ApprovalRuleCreated => "PULL_REQUEST_APPROVAL_RULE_CREATED",
        ApprovalRuleUpdated => "PULL_REQUEST_APPROVAL_RULE_UPDATED",
        ApprovalRuleDeleted => "PULL_REQUEST_APPROVAL_RULE_DELETED",
        ApprovalRuleOverridden => "PULL_REQUEST_APPROVAL_RULE_OVERRIDDEN",
        ApprovalStateChanged => "PULL_REQUEST_APPROVAL_STATE_CHANGED",
    }
}

wire_enum! {
    /// Repository events a trigger can fire on.
    RepositoryTriggerEvent {
        All => "all",
        UpdateReference => "updateReference",
        CreateReference => "createReference",
        DeleteReference => "deleteReference",
    }
}
