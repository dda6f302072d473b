//! Tests for dashboard module
//!
//! These tests verify the navigation tree contract:
//! - Canonical top-level entries and submenus
//! - Admin gating of the System entry
//! - Badge population and wire shape

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_navigation_canonical_top_level() {
        let menu = models::navigation(false, None);
        let ids: Vec<&str> = menu.iter().map(|item| item.id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "workbench",
                "generator",
                "content",
                "distribute",
                "analytics",
                "ai-tools",
                "settings",
                "billing",
                "help",
            ]
        );
    }

    #[test]
    fn test_navigation_system_entry_is_admin_only() {
        let menu = models::navigation(false, None);
        assert!(!menu.iter().any(|item| item.id == "system"));

        let menu = models::navigation(true, None);
        assert!(menu.iter().any(|item| item.id == "system"));
    }

    #[test]
    fn test_navigation_content_badge_is_live_count() {
        let menu = models::navigation(false, Some(12));
        let content = menu
            .iter()
            .find(|item| item.id == "content")
            .expect("content entry should exist");

        assert_eq!(content.badge, Some(12));
        assert_eq!(content.submenu.len(), 4);
    }

    #[test]
    fn test_navigation_submenus_are_two_levels_deep() {
        // Submenu entries are leaves: no third level anywhere
        let menu = models::navigation(true, Some(1));
        for item in &menu {
            for sub in &item.submenu {
                assert!(
                    sub.submenu.is_empty(),
                    "submenu entry {} should be a leaf",
                    sub.id
                );
            }
        }
    }

    #[test]
    fn test_menu_item_wire_shape_omits_empty_fields() {
        let menu = models::navigation(false, None);
        let workbench = serde_json::to_value(&menu[0]).expect("menu item should serialize");

        assert_eq!(workbench["id"], "workbench");
        assert_eq!(workbench["href"], "/dashboard");
        // No empty submenu array and no null badge on the wire
        assert!(workbench.get("submenu").is_none());
        assert!(workbench.get("badge").is_none());
    }

    #[test]
    fn test_library_query_limit_optional() {
        let query: models::LibraryQuery =
            serde_json::from_value(serde_json::json!({})).expect("empty query should deserialize");
        assert!(query.limit.is_none());
        assert_eq!(models::DEFAULT_LIBRARY_LIMIT, 10);
    }
}
