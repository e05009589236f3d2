//! Region catalog.
//!
//! The explorer does not discover regions remotely; it renders whatever
//! selected-region list the host hands to
//! [`RegionNodeCollection::update_children`](crate::explorer::nodes::RegionNodeCollection::update_children).
//! The catalog here supplies display names and a sensible default selection.

use serde::{Deserialize, Serialize};

/// One AWS region as shown in the explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    /// Region code, e.g. `us-east-1`. Unique key in the region collection.
    pub region_code: String,
    /// Human-readable name, e.g. `US East (N. Virginia)`.
    pub region_name: String,
}

impl RegionInfo {
    /// Build a region entry with the catalog display name for `region_code`.
    pub fn new(region_code: impl Into<String>) -> Self {
        let region_code = region_code.into();
        let region_name = region_display_name(&region_code);
        Self {
            region_code,
            region_name,
        }
    }
}

/// Human-readable display name for a region code. Unknown codes fall back
/// to the code itself.
pub fn region_display_name(region_code: &str) -> String {
    match region_code {
        "us-east-1" => "US East (N. Virginia)".to_string(),
        "us-east-2" => "US East (Ohio)".to_string(),
        "us-west-1" => "US West (N. California)".to_string(),
        "us-west-2" => "US West (Oregon)".to_string(),
        "af-south-1" => "Africa (Cape Town)".to_string(),
        "ap-east-1" => "Asia Pacific (Hong Kong)".to_string(),
        "ap-south-1" => "Asia Pacific (Mumbai)".to_string(),
        "ap-southeast-1" => "Asia Pacific (Singapore)".to_string(),
        "ap-southeast-2" => "Asia Pacific (Sydney)".to_string(),
        "ap-southeast-3" => "Asia Pacific (Jakarta)".to_string(),
        "ap-northeast-1" => "Asia Pacific (Tokyo)".to_string(),
        "ap-northeast-2" => "Asia Pacific (Seoul)".to_string(),
        "ap-northeast-3" => "Asia Pacific (Osaka)".to_string(),
        "ca-central-1" => "Canada (Central)".to_string(),
        "eu-central-1" => "Europe (Frankfurt)".to_string(),
        "eu-west-1" => "Europe (Ireland)".to_string(),
        "eu-west-2" => "Europe (London)".to_string(),
        "eu-west-3" => "Europe (Paris)".to_string(),
        "eu-north-1" => "Europe (Stockholm)".to_string(),
        "eu-south-1" => "Europe (Milan)".to_string(),
        "me-south-1" => "Middle East (Bahrain)".to_string(),
        "sa-east-1" => "South America (São Paulo)".to_string(),
        "us-gov-east-1" => "AWS GovCloud (US-East)".to_string(),
        "us-gov-west-1" => "AWS GovCloud (US-West)".to_string(),
        _ => region_code.to_string(),
    }
}

/// Commonly used regions, offered when the host has no stored selection.
pub fn default_regions() -> Vec<RegionInfo> {
    [
        "us-east-1",
        "us-east-2",
        "us-west-1",
        "us-west-2",
        "eu-west-1",
        "eu-west-2",
        "eu-central-1",
        "ap-southeast-1",
        "ap-southeast-2",
        "ap-northeast-1",
    ]
    .into_iter()
    .map(RegionInfo::new)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_region_code_falls_back_to_code() {
        assert_eq!(region_display_name("xx-fake-9"), "xx-fake-9");
    }

    #[test]
    fn default_regions_have_display_names() {
        for region in default_regions() {
            assert_ne!(region.region_name, region.region_code);
        }
    }
}
