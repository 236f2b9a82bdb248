//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "PMC Consulting".into()
    }

    pub fn description() -> String {
        "Automation, integrations, and live dashboards for logistics teams.".into()
    }

    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "Patrick McElroy".into()
    }

    pub fn email() -> String {
        "hello@pmc-consult.com".into()
    }

    pub fn language() -> String {
        "en-US".into()
    }

    pub fn business() -> String {
        "PMC Consulting".into()
    }

    pub fn legal_name() -> String {
        "Patrick McElroy Consulting LLC.".into()
    }

    pub fn logo() -> String {
        "PMC".into()
    }

    pub fn cta_label() -> String {
        "Schedule a Consult".into()
    }

    pub fn cta_url() -> String {
        "https://calendly.com/pmc-consult/intro".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content/posts.toml".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }

    pub mod rss {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "feed.xml".into()
        }
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}
