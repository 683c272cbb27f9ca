//! `[social]` section configuration.
//!
//! Profile links rendered into the site footer and meta tags.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[social]` section in plume.toml - external profile URLs.
///
/// # Example
/// ```toml
/// [social]
/// github = "https://github.com/alice"
/// linkedin = "https://www.linkedin.com/in/alice"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SocialConfig {
    /// GitHub profile URL.
    #[serde(default = "defaults::social::github")]
    #[educe(Default = defaults::social::github())]
    pub github: String,

    /// LinkedIn profile URL.
    #[serde(default = "defaults::social::linkedin")]
    #[educe(Default = defaults::social::linkedin())]
    pub linkedin: String,
}
