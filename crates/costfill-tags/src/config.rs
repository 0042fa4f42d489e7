use costfill_model::TagType;

pub const ENV_DEFAULT_TAG_KEY: &str = "DEFAULT_TAG_KEY";
pub const DEFAULT_TAG_KEY: &str = "aws:createdBy";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatorConfig {
    /// Tag checked first and used as the fallback activation target.
    pub default_tag_key: String,
    /// Type of tags considered when looking for an alternative.
    pub tag_type: TagType,
}

impl Default for ActivatorConfig {
    fn default() -> Self {
        Self {
            default_tag_key: DEFAULT_TAG_KEY.to_string(),
            tag_type: TagType::AwsGenerated,
        }
    }
}

impl ActivatorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(key) = lookup(ENV_DEFAULT_TAG_KEY).filter(|s| !s.trim().is_empty()) {
            cfg.default_tag_key = key.trim().to_string();
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_created_by() {
        let cfg = ActivatorConfig::from_lookup(|_| None);
        assert_eq!(cfg.default_tag_key, "aws:createdBy");
        assert_eq!(cfg.tag_type, TagType::AwsGenerated);
    }

    #[test]
    fn default_key_override() {
        let cfg = ActivatorConfig::from_lookup(|k| {
            (k == "DEFAULT_TAG_KEY").then(|| " aws:cloudformation:stack-name ".to_string())
        });
        assert_eq!(cfg.default_tag_key, "aws:cloudformation:stack-name");

        let blank = ActivatorConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(blank.default_tag_key, "aws:createdBy");
    }
}
