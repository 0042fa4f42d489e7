use costfill_model::{TagStatus, TagType};
use tracing::info;

use crate::{
    api::{CostExplorerApi, TagQuery},
    error::ActivatorError,
    steps::TARGET,
};

/// Why a tag key was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The default key is not active yet (or has a status we do not recognise).
    DefaultInactive(TagStatus),
    /// The default key was not listed at all.
    DefaultNotFound,
    /// The default key is active; this is the first inactive tag of the same type.
    Alternative,
    /// The default key is active and no inactive tag exists; it is activated again anyway.
    FallbackDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelection {
    pub tag_key: String,
    pub reason: Selection,
}

/// Choose the tag key to activate.
///
/// The default key wins unless it is already `Active`, in which case the first `Inactive` tag
/// of `tag_type` in listing order is taken. With no such tag the default key is returned.
/// Listing failures are fatal.
pub async fn select_tag<A>(
    api: &A,
    default_key: &str,
    tag_type: TagType,
) -> Result<TagSelection, ActivatorError>
where
    A: CostExplorerApi + ?Sized,
{
    info!(target: TARGET, "Checking status of {default_key}...");
    let listed = api
        .list_tags(&TagQuery::key(default_key, tag_type))
        .await
        .map_err(ActivatorError::ListTags)?;

    let status = listed
        .into_iter()
        .find(|t| t.tag_key == default_key)
        .map(|t| t.status);

    let reason = match status {
        None => Selection::DefaultNotFound,
        Some(status) if !status.is_active() => Selection::DefaultInactive(status),
        Some(_) => {
            info!(
                target: TARGET,
                "Tag {default_key} is already Active. Searching for another inactive {} tag...",
                tag_type.as_str()
            );
            let all = api
                .list_tags(&TagQuery::of_type(tag_type))
                .await
                .map_err(ActivatorError::ListTags)?;

            if let Some(alt) = all.into_iter().find(|t| t.status == TagStatus::Inactive) {
                info!(target: TARGET, "Found inactive tag to activate: {}", alt.tag_key);
                return Ok(TagSelection {
                    tag_key: alt.tag_key,
                    reason: Selection::Alternative,
                });
            }
            info!(target: TARGET, "No inactive {} tags found. Proceeding with {default_key}.", tag_type.as_str());
            Selection::FallbackDefault
        }
    };

    Ok(TagSelection {
        tag_key: default_key.to_string(),
        reason,
    })
}
