//! Settings "About" page content
//!
//! The About page renders no mark. It lists informational rows grouped in
//! fixed sections. Labels are localization keys resolved by the caller,
//! except for proper names which are literal.

use crate::branding::{self, links};
use serde::{Deserialize, Serialize};

/// About page sections, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AboutSection {
    /// App version
    Version,
    /// Contact channels
    Contact,
    /// Community links
    Information,
    /// Terms and privacy
    Legal,
}

impl AboutSection {
    /// All sections in display order
    pub const ALL: [AboutSection; 4] = [
        AboutSection::Version,
        AboutSection::Contact,
        AboutSection::Information,
        AboutSection::Legal,
    ];

    /// Localization key of the section heading
    pub fn title_key(&self) -> &'static str {
        match self {
            AboutSection::Version => "version",
            AboutSection::Contact => "contact",
            AboutSection::Information => "information",
            AboutSection::Legal => "legal",
        }
    }

    /// Whether items in this section are laid out as a card grid
    pub fn is_grid(&self) -> bool {
        matches!(self, AboutSection::Information)
    }
}

/// How an item label is obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Label {
    /// Localization key
    Key(String),
    /// Literal text
    Literal(String),
}

/// One row on the About page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutItem {
    /// Stable item identifier
    pub value: String,
    /// Display label
    pub label: Label,
    /// Link target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Icon name from the icon set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl AboutItem {
    fn link(value: &str, label: Label, href: String) -> Self {
        Self {
            value: value.to_string(),
            label,
            href: Some(href),
            icon: None,
        }
    }

    fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }
}

/// Items of one section
pub fn section_items(section: AboutSection) -> Vec<AboutItem> {
    match section {
        AboutSection::Version => vec![AboutItem {
            value: "version".to_string(),
            label: Label::Literal(format!("v{}", branding::APP_VERSION)),
            href: None,
            icon: None,
        }],
        AboutSection::Contact => vec![
            AboutItem::link(
                "officialSite",
                Label::Key("officialSite".to_string()),
                links::OFFICIAL_SITE.to_string(),
            ),
            AboutItem::link(
                "support",
                Label::Key("mail.support".to_string()),
                links::mail_to(links::EMAIL_SUPPORT),
            ),
        ],
        AboutSection::Information => vec![
            AboutItem::link(
                "feedback",
                Label::Literal("GitHub".to_string()),
                links::GITHUB.to_string(),
            )
            .with_icon("github"),
            AboutItem::link(
                "x",
                Label::Literal("X / Twitter".to_string()),
                links::X.to_string(),
            )
            .with_icon("x"),
        ],
        AboutSection::Legal => vec![
            AboutItem::link(
                "terms",
                Label::Key("terms".to_string()),
                links::TERMS_URL.to_string(),
            ),
            AboutItem::link(
                "privacy",
                Label::Key("privacy".to_string()),
                links::PRIVACY_URL.to_string(),
            ),
        ],
    }
}

/// Page heading, given the localized word for "About"
pub fn page_title(about: &str, chat_product_name: &str) -> String {
    format!("{} {}", about, chat_product_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let keys: Vec<&str> = AboutSection::ALL.iter().map(|s| s.title_key()).collect();
        assert_eq!(keys, vec!["version", "contact", "information", "legal"]);
        assert!(AboutSection::Information.is_grid());
        assert!(!AboutSection::Legal.is_grid());
    }

    #[test]
    fn test_contact_items() {
        let items = section_items(AboutSection::Contact);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].href.as_deref(), Some(links::OFFICIAL_SITE));
        assert_eq!(
            items[1].href.as_deref(),
            Some("mailto:support@intellectx.app")
        );
        assert_eq!(items[1].label, Label::Key("mail.support".to_string()));
    }

    #[test]
    fn test_information_items_have_icons() {
        let items = section_items(AboutSection::Information);
        assert!(items.iter().all(|item| item.icon.is_some()));
        assert_eq!(items[1].label, Label::Literal("X / Twitter".to_string()));
    }

    #[test]
    fn test_version_item() {
        let items = section_items(AboutSection::Version);
        assert_eq!(items.len(), 1);
        assert!(items[0].href.is_none());
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("About", "IntellectXChat"), "About IntellectXChat");
    }

    #[test]
    fn test_label_serialization() {
        let json = serde_json::to_string(&Label::Key("terms".to_string())).unwrap();
        assert_eq!(json, r#"{"type":"key","value":"terms"}"#);
    }
}
