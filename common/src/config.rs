use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::message::MailEndpoint;

const BUNDLED_CONFIG: &str = include_str!("../assets/site.toml");

// site configuration
//
// who the site is for, how to reach the mail provider, and the handful of tuning constants
// the interactive parts depend on.  only owner and mail are required, the rest default
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SiteConfig {
    pub owner: OwnerConfig,
    pub mail: MailConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub headline: HeadlineConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct OwnerConfig {
    pub name: String,
    pub brand: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub availability: String,
    pub phone_hours: String,
    pub response_time: String,
    // both optional, the about and experience sections drop the picture / download button
    pub photo: Option<String>,
    pub resume: Option<String>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct MailConfig {
    #[serde(flatten)]
    pub endpoint: MailEndpoint,
    pub recipient: String,
}

// all distances are css pixels
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScrollConfig {
    pub sticky_threshold: f64,
    pub lookahead: f64,
    pub nav_height: f64,
    // fraction of a section that must be on screen before it counts as seen
    pub reveal_threshold: f64,
    pub back_to_top_threshold: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            sticky_threshold: 100.0,
            lookahead: 200.0,
            nav_height: 80.0,
            reveal_threshold: 0.2,
            back_to_top_threshold: 300.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub success_reset_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            success_reset_ms: 5000,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HeadlineConfig {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
}

impl Default for HeadlineConfig {
    fn default() -> Self {
        HeadlineConfig {
            type_ms: 90,
            delete_ms: 45,
            hold_ms: 1600,
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> anyhow::Result<SiteConfig> {
    debug!("reading site config");

    let data: TomlConfigFile = toml::from_str(doc)?;

    Ok(data.config)
}

impl SiteConfig {
    pub fn bundled() -> anyhow::Result<SiteConfig> {
        read_config(BUNDLED_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_loads() {
        let config = SiteConfig::bundled().unwrap();

        assert_eq!(config.scroll.sticky_threshold, 100.0);
        assert_eq!(config.scroll.lookahead, 200.0);
        assert_eq!(config.scroll.nav_height, 80.0);
        assert_eq!(config.owner.social.len(), 3);
        assert!(!config.mail.recipient.is_empty());
    }

    #[test]
    fn tuning_sections_are_optional() {
        let config = read_config(
            r#"
            [config.owner]
            name = "n"
            brand = "b"
            tagline = "t"
            email = "e@x.io"
            phone = "1"
            location = "l"
            availability = "a"
            phone_hours = "h"
            response_time = "r"

            [config.mail]
            service_id = "s"
            template_id = "t"
            public_key = "k"
            recipient = "owner@x.io"

            [config.scroll]
            lookahead = 150.0
            "#,
        )
        .unwrap();

        assert_eq!(config.scroll.lookahead, 150.0);
        assert_eq!(config.scroll.sticky_threshold, 100.0);
        assert_eq!(config.contact, ContactConfig::default());
        assert!(config.owner.social.is_empty());
        assert!(config.owner.resume.is_none());
        assert_eq!(config.mail.endpoint.service_id, "s");
    }

    #[test]
    fn missing_owner_is_an_error() {
        assert!(read_config("[config.mail]\nrecipient = \"x\"").is_err());
    }
}
