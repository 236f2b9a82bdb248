//! `[home]` section configuration.
//!
//! Hero copy and the services grid shown above the blog listing.

use educe::Educe;
use serde::{Deserialize, Serialize};

/// A single card in the services grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub title: String,
    pub blurb: String,
}

impl Service {
    fn new(title: &str, blurb: &str) -> Self {
        Self {
            title: title.into(),
            blurb: blurb.into(),
        }
    }
}

/// `[home]` section in site.toml.
///
/// # Example
/// ```toml
/// [home]
/// headline = "Automation that ships."
///
/// [[home.services]]
/// title = "MCP Development"
/// blurb = "Agents wired into the tools your team already uses."
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct HomeConfig {
    #[educe(Default = default_headline())]
    pub headline: String,

    #[educe(Default = default_tagline())]
    pub tagline: String,

    /// Services grid, in display order.
    #[educe(Default = default_services())]
    pub services: Vec<Service>,
}

fn default_headline() -> String {
    "Practical automation for logistics operations.".into()
}

fn default_tagline() -> String {
    "MCP agents, no-code integrations, and live dashboards that replace manual checks.".into()
}

fn default_services() -> Vec<Service> {
    vec![
        Service::new(
            "MCP Development",
            "Custom MCP servers and agents that read your docs, call your APIs, and report back.",
        ),
        Service::new(
            "Workflow Automation",
            "Zapier and Retool flows with human-in-the-loop approvals where they matter.",
        ),
        Service::new(
            "Dashboards & Insight",
            "From spreadsheets to live KPIs with alerts and a single source of truth.",
        ),
        Service::new(
            "Data Integrations",
            "Reconciled, idempotent syncs between TMS, LSP exports, and internal tools.",
        ),
    ]
}
