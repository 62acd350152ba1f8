//! IntellectX Branding
//!
//! This module contains all branding constants for IntellectX Chat.
//! The product keeps the look and feel of the chat UI it is forked from,
//! with its own name, marks, and outbound links.

/// Product name
pub const APP_NAME: &str = "IntellectX";

/// Wordmark rendered as text wherever the brand name appears
pub const WORDMARK: &str = "IntellectX";

/// Chat product name, as shown on the settings About page
pub const CHAT_PRODUCT_NAME: &str = "IntellectXChat";

/// Suffix appended to the product name in the document title
pub const TITLE_SUFFIX: &str = "Chat";

/// Separator between a route title and the product in the document title
pub const TITLE_SEPARATOR: &str = " · ";

/// Application version (from Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outbound links
pub mod links {
    /// Official website
    pub const OFFICIAL_SITE: &str = "https://intellectx.app";

    /// Source repository
    pub const GITHUB: &str = "https://github.com/intellectx/intellectx-chat";

    /// X / Twitter profile
    pub const X: &str = "https://x.com/intellectx";

    /// Support email
    pub const EMAIL_SUPPORT: &str = "support@intellectx.app";

    /// Terms of service
    pub const TERMS_URL: &str = "https://intellectx.app/terms";

    /// Privacy policy
    pub const PRIVACY_URL: &str = "https://intellectx.app/privacy";

    /// `utm_source` tag on attribution links
    pub const UTM_SOURCE: &str = "intellectx_chat";

    /// Canonical attribution URL used by the watermark
    pub fn attribution_url() -> String {
        format!(
            "{}?utm_source={}",
            OFFICIAL_SITE,
            urlencoding::encode(UTM_SOURCE)
        )
    }

    /// Build a `mailto:` link
    pub fn mail_to(email: &str) -> String {
        format!("mailto:{}", email)
    }
}

/// Copyright information
pub mod copyright {
    use chrono::Datelike;

    /// Copyright holder
    pub const HOLDER: &str = "IntellectX";

    /// Copyright notice for a given year
    pub fn notice_for_year(year: i32) -> String {
        format!("Copyright © {} {} - All Rights Reserved.", year, HOLDER)
    }

    /// Copyright notice for the current year
    pub fn notice() -> String {
        notice_for_year(chrono::Utc::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "IntellectX");
        assert_eq!(CHAT_PRODUCT_NAME, "IntellectXChat");
    }

    #[test]
    fn test_app_version() {
        assert!(!APP_VERSION.is_empty());
        let parts: Vec<&str> = APP_VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_links_are_well_formed() {
        assert!(links::OFFICIAL_SITE.starts_with("https://"));
        assert!(links::GITHUB.starts_with("https://github.com/"));
        assert!(links::TERMS_URL.starts_with(links::OFFICIAL_SITE));
        assert!(links::PRIVACY_URL.starts_with(links::OFFICIAL_SITE));
        assert!(links::EMAIL_SUPPORT.contains('@'));
    }

    #[test]
    fn test_attribution_url() {
        assert_eq!(
            links::attribution_url(),
            "https://intellectx.app?utm_source=intellectx_chat"
        );
    }

    #[test]
    fn test_mail_to() {
        assert_eq!(
            links::mail_to(links::EMAIL_SUPPORT),
            "mailto:support@intellectx.app"
        );
    }

    #[test]
    fn test_copyright_notice() {
        assert_eq!(
            copyright::notice_for_year(2025),
            "Copyright © 2025 IntellectX - All Rights Reserved."
        );
        assert!(copyright::notice().contains("IntellectX - All Rights Reserved."));
    }
}
