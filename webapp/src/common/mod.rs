pub mod scroll;
pub mod storage;
pub mod style;
pub mod theme;

use std::sync::Arc;

use dioxus::prelude::*;

use ::common::{config::SiteConfig, content::Content};

// read-only page data
//
// provided once at launch; every component that needs copy, links or tuning constants
// pulls it from context instead of threading props through the section tree
#[derive(Clone)]
pub struct Site {
    pub config: Arc<SiteConfig>,
    pub content: Arc<Content>,
}

impl Site {
    pub fn bundled() -> anyhow::Result<Site> {
        Ok(Site {
            config: Arc::new(SiteConfig::bundled()?),
            content: Arc::new(Content::bundled()?),
        })
    }
}

pub fn use_site() -> Site {
    use_context::<Site>()
}
