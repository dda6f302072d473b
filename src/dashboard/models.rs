//! Dashboard shell data models
//!
//! The sidebar is a two-level menu; top-level items may own a submenu that
//! the client renders as a floating panel. This is the single canonical
//! tree (the source had two divergent sidebar variants; the icon-set /
//! layout-width differences were visual and are not part of the contract).

use serde::{Deserialize, Serialize};

/// One navigation entry; `submenu` is omitted from the wire when empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub submenu: Vec<MenuItem>,
}

impl MenuItem {
    fn leaf(id: &str, label: &str, href: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            href: Some(href.to_string()),
            badge: None,
            submenu: Vec::new(),
        }
    }

    fn parent(id: &str, label: &str, submenu: Vec<MenuItem>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            href: None,
            badge: None,
            submenu,
        }
    }
}

/// Build the navigation tree for one session
///
/// Tier and admin status come from the authenticated session, never from
/// constants. `content_count` fills the live badge on the Content item;
/// the System entry is only present for admin sessions.
pub fn navigation(is_admin: bool, content_count: Option<i64>) -> Vec<MenuItem> {
    let mut content = MenuItem::parent(
        "content",
        "Content",
        vec![
            MenuItem::leaf("library", "Library", "/dashboard/content/library"),
            MenuItem::leaf("collections", "Collections", "/dashboard/content/collections"),
            MenuItem::leaf("drafts", "Drafts", "/dashboard/content/drafts"),
            MenuItem::leaf("trash", "Trash", "/dashboard/content/trash"),
        ],
    );
    content.badge = content_count;

    let mut items = vec![
        MenuItem::leaf("workbench", "Workbench", "/dashboard"),
        MenuItem::parent(
            "generator",
            "Generator",
            vec![
                MenuItem::leaf("ai-create", "AI Create", "/dashboard/generate/ai"),
                MenuItem::leaf("templates", "Templates", "/dashboard/generate/templates"),
                MenuItem::leaf("batch", "Batch Process", "/dashboard/generate/batch"),
                MenuItem::leaf("workflow", "Workflows", "/dashboard/generate/workflow"),
            ],
        ),
        content,
        MenuItem::parent(
            "distribute",
            "Distribute",
            vec![
                MenuItem::leaf("schedule", "Schedule", "/dashboard/distribute/schedule"),
                MenuItem::leaf("platforms", "Platforms", "/dashboard/distribute/platforms"),
                MenuItem::leaf("targeting", "Targeting", "/dashboard/distribute/targeting"),
                MenuItem::leaf("automation", "Automation", "/dashboard/distribute/automation"),
            ],
        ),
        MenuItem::parent(
            "analytics",
            "Analytics",
            vec![
                MenuItem::leaf("overview", "Overview", "/dashboard/analytics/overview"),
                MenuItem::leaf("performance", "Performance", "/dashboard/analytics/performance"),
                MenuItem::leaf("audience", "Audience", "/dashboard/analytics/audience"),
                MenuItem::leaf("revenue", "Revenue", "/dashboard/analytics/revenue"),
            ],
        ),
        MenuItem::parent(
            "ai-tools",
            "AI Tools",
            vec![
                MenuItem::leaf("enhance", "Enhance", "/dashboard/ai/enhance"),
                MenuItem::leaf("analyze", "Analyze", "/dashboard/ai/analyze"),
                MenuItem::leaf("optimize", "Optimize", "/dashboard/ai/optimize"),
                MenuItem::leaf("models", "Models", "/dashboard/ai/models"),
            ],
        ),
        MenuItem::leaf("settings", "Settings", "/dashboard/settings"),
        MenuItem::leaf("billing", "Billing", "/dashboard/billing"),
        MenuItem::leaf("help", "Help", "/dashboard/help"),
    ];

    if is_admin {
        items.push(MenuItem::leaf("system", "System Health", "/dashboard/system"));
    }

    items
}

/// Query parameters for the library listing
#[derive(Debug, Deserialize)]
pub struct LibraryQuery {
    pub limit: Option<usize>,
}

/// Default page size for the content library
pub const DEFAULT_LIBRARY_LIMIT: usize = 10;
