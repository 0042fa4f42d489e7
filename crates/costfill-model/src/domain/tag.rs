use std::fmt;

use serde::{Deserialize, Serialize};

/// Activation state of a cost-allocation tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagStatus {
    Active,
    Inactive,
    /// Any status the provider reports that this crate does not know about.
    #[serde(untagged)]
    Unknown(String),
}

impl TagStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TagStatus::Active => "Active",
            TagStatus::Inactive => "Inactive",
            TagStatus::Unknown(s) => s,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TagStatus::Active)
    }
}

impl From<&str> for TagStatus {
    fn from(s: &str) -> Self {
        match s {
            "Active" => TagStatus::Active,
            "Inactive" => TagStatus::Inactive,
            other => TagStatus::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for TagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Origin of a cost-allocation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagType {
    /// Managed by AWS (`aws:` prefix).
    #[serde(rename = "AWSGenerated")]
    AwsGenerated,
    /// Defined by the account owner.
    UserDefined,
}

impl TagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagType::AwsGenerated => "AWSGenerated",
            TagType::UserDefined => "UserDefined",
        }
    }
}

/// A tag key together with its current activation status, as returned by a listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CostAllocationTag {
    pub tag_key: String,
    pub status: TagStatus,
}

impl CostAllocationTag {
    pub fn new(tag_key: impl Into<String>, status: TagStatus) -> Self {
        Self {
            tag_key: tag_key.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_provider_strings() {
        assert_eq!(TagStatus::from("Active"), TagStatus::Active);
        assert_eq!(TagStatus::from("Inactive"), TagStatus::Inactive);
        assert_eq!(
            TagStatus::from("Pending"),
            TagStatus::Unknown("Pending".into())
        );
    }

    #[test]
    fn only_active_is_active() {
        assert!(TagStatus::Active.is_active());
        assert!(!TagStatus::Inactive.is_active());
        assert!(!TagStatus::Unknown("Active ".into()).is_active());
    }

    #[test]
    fn tag_serializes_like_the_provider() {
        let tag = CostAllocationTag::new("aws:createdBy", TagStatus::Inactive);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r#"{"TagKey":"aws:createdBy","Status":"Inactive"}"#);
    }

    #[test]
    fn tag_type_wire_names() {
        assert_eq!(TagType::AwsGenerated.as_str(), "AWSGenerated");
        let json = serde_json::to_string(&TagType::AwsGenerated).unwrap();
        assert_eq!(json, r#""AWSGenerated""#);
    }
}
