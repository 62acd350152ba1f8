//! Routes and their display titles
//!
//! Each route carries a human-readable title that the page shell hands to
//! [`PageTitle`](crate::brand::page_title::PageTitle).

use serde::{Deserialize, Serialize};

/// Settings tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettingsTab {
    /// General preferences
    Common,
    /// Default agent
    Agent,
    /// Model providers
    LlmProviders,
    /// About page
    About,
}

impl SettingsTab {
    fn slug(&self) -> &'static str {
        match self {
            SettingsTab::Common => "common",
            SettingsTab::Agent => "agent",
            SettingsTab::LlmProviders => "llm",
            SettingsTab::About => "about",
        }
    }

    fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "common" => Some(SettingsTab::Common),
            "agent" => Some(SettingsTab::Agent),
            "llm" => Some(SettingsTab::LlmProviders),
            "about" => Some(SettingsTab::About),
            _ => None,
        }
    }
}

/// All routes of the chat front-end
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "params")]
pub enum Route {
    /// Chat workspace
    Chat,
    /// First-run welcome page
    Welcome,
    /// Agent marketplace
    Discover,
    /// Settings, on a tab
    Settings {
        /// Active tab
        tab: SettingsTab,
    },
}

impl Route {
    /// Get a display title for this route
    ///
    /// The chat workspace has no title of its own and shows the bare
    /// product name.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Chat => "",
            Route::Welcome => "Welcome",
            Route::Discover => "Discover",
            Route::Settings { tab } => match tab {
                SettingsTab::Common => "Settings",
                SettingsTab::Agent => "Default Agent",
                SettingsTab::LlmProviders => "Language Model",
                SettingsTab::About => "About",
            },
        }
    }

    /// URL path of this route
    pub fn path(&self) -> String {
        match self {
            Route::Chat => "/chat".to_string(),
            Route::Welcome => "/welcome".to_string(),
            Route::Discover => "/market".to_string(),
            Route::Settings { tab } => format!("/settings/{}", tab.slug()),
        }
    }

    /// Parse a URL path
    pub fn from_path(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] | ["chat"] => Some(Route::Chat),
            ["welcome"] => Some(Route::Welcome),
            ["market"] => Some(Route::Discover),
            ["settings"] => Some(Route::Settings {
                tab: SettingsTab::Common,
            }),
            ["settings", slug] => SettingsTab::from_slug(slug).map(|tab| Route::Settings { tab }),
            _ => None,
        }
    }
}
