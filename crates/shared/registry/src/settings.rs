//! Settings aggregation.
//!
//! The settings area is not declared like other modules: it is assembled from its own
//! core pages plus the pages every other module contributes. Pages are ordered by
//! `order` with a stable sort, so equal orders keep their input position: core pages
//! first, then contributions in module registration order.

use crate::catalog::{
    SETTINGS_ICON, SETTINGS_INDEX, SETTINGS_LAYOUT, SETTINGS_NAV_PREFIX, SETTINGS_PATH,
    core_messages,
};
use crate::error::RegistryError;
use fhub_domain::{Module, ModuleId, NavItem, Route, RouteMeta, SettingsPage};
use std::collections::HashSet;

/// Merges `core` and `contributed` pages and sorts them for display.
///
/// # Errors
/// Returns [`RegistryError::DuplicateSettingsPage`] if two pages share a key.
pub fn merge_pages(
    core: Vec<SettingsPage>,
    contributed: Vec<SettingsPage>,
) -> Result<Vec<SettingsPage>, RegistryError> {
    let mut pages = core;
    pages.extend(contributed);

    let mut seen = HashSet::with_capacity(pages.len());
    for page in &pages {
        if !seen.insert(page.key.as_str()) {
            return Err(RegistryError::DuplicateSettingsPage {
                key: page.key.clone(),
                context: Some(format!("contributed by {}", page.module_id).into()),
            });
        }
    }

    // `sort_by_key` is stable; ties keep concatenation order.
    pages.sort_by_key(|page| page.order);
    Ok(pages)
}

/// Child route rendered inside the settings layout for one page.
#[must_use]
pub fn page_route(page: &SettingsPage) -> Route {
    Route::view(page.key.clone(), page.component.clone(), RouteMeta::owned_by(page.module_id))
}

/// Settings sub-menu entry for one page.
#[must_use]
pub fn page_nav_item(page: &SettingsPage) -> NavItem {
    NavItem::builder()
        .key(format!("{SETTINGS_NAV_PREFIX}{}", page.key))
        .label_key(page.label_key.clone())
        .module_id(page.module_id)
        .build()
}

/// Builds the composite settings module from `core` pages and the pages `contributed`
/// by other modules. [`core_settings_pages`](crate::catalog::core_settings_pages) is the
/// usual `core`.
///
/// # Errors
/// Returns [`RegistryError::DuplicateSettingsPage`] if two pages share a key.
pub fn aggregate(
    core: Vec<SettingsPage>,
    contributed: Vec<SettingsPage>,
) -> Result<Module, RegistryError> {
    let pages = merge_pages(core, contributed)?;

    // Both derived sequences stay index-aligned with `pages`.
    let mut children = Vec::with_capacity(pages.len() + 1);
    children.push(Route::redirect("", SETTINGS_INDEX));
    children.extend(pages.iter().map(page_route));
    let nav_children: Vec<NavItem> = pages.iter().map(page_nav_item).collect();

    tracing::debug!(pages = pages.len(), "Settings module aggregated");

    Ok(Module::builder()
        .id(ModuleId::Settings)
        .enabled_by_default(true)
        .toggleable(false)
        .nav(
            NavItem::builder()
                .key(ModuleId::Settings.as_str())
                .label_key("nav.settings")
                .icon(SETTINGS_ICON)
                .children(nav_children)
                .build(),
        )
        .routes(vec![
            Route::view(SETTINGS_PATH, SETTINGS_LAYOUT, RouteMeta::main(ModuleId::Settings))
                .with_children(children),
        ])
        .settings_pages(pages)
        .messages(core_messages())
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::core_settings_pages;

    fn page(key: &'static str, order: i32, module_id: ModuleId) -> SettingsPage {
        SettingsPage::builder()
            .key(key)
            .label_key(format!("{key}.title"))
            .component("views/Stub")
            .order(order)
            .module_id(module_id)
            .build()
    }

    fn keys(pages: &[SettingsPage]) -> Vec<&str> {
        pages.iter().map(|p| p.key.as_str()).collect()
    }

    #[test]
    fn ties_resolve_core_first_then_registration_order() {
        let core = vec![
            page("general", 10, ModuleId::Settings),
            page("profile", 20, ModuleId::Settings),
            page("invoice", 30, ModuleId::Settings),
            page("email", 40, ModuleId::Settings),
        ];
        let contributed =
            vec![page("finance", 25, ModuleId::Finance), page("reports", 10, ModuleId::Reports)];

        let merged = merge_pages(core, contributed).expect("no duplicates");

        assert_eq!(keys(&merged), vec!["general", "reports", "profile", "finance", "invoice", "email"]);
    }

    #[test]
    fn contributed_ties_keep_registration_order() {
        let contributed = vec![
            page("b", 5, ModuleId::Finance),
            page("a", 5, ModuleId::Reports),
            page("c", 1, ModuleId::Clients),
        ];

        let merged = merge_pages(Vec::new(), contributed).expect("no duplicates");
        assert_eq!(keys(&merged), vec!["c", "b", "a"]);
    }

    #[test]
    fn duplicate_keys_fail_fast() {
        let err = merge_pages(
            vec![page("general", 10, ModuleId::Settings)],
            vec![page("general", 50, ModuleId::Finance)],
        )
        .unwrap_err();

        assert!(matches!(&err, RegistryError::DuplicateSettingsPage { key, .. } if key == "general"));
        assert_eq!(err.to_string(), "Duplicate settings page key (contributed by finance): general");
    }

    #[test]
    fn aggregated_module_has_redirect_then_aligned_children() {
        let module = aggregate(core_settings_pages(), vec![page("finance", 25, ModuleId::Finance)])
            .expect("aggregate");

        assert_eq!(module.id, ModuleId::Settings);
        assert!(module.enabled_by_default);
        assert!(!module.toggleable);
        assert_eq!(module.routes.len(), 1);

        let root = &module.routes[0];
        assert_eq!(root.path, SETTINGS_PATH);
        assert_eq!(root.meta(), Some(&RouteMeta::main(ModuleId::Settings)));

        let children = root.children();
        assert_eq!(children[0], Route::redirect("", SETTINGS_INDEX));

        let nav = module.nav.as_ref().expect("settings nav");
        assert_eq!(nav.key, "settings");
        assert_eq!(nav.children.len(), children.len() - 1);

        for ((route, item), page) in children[1..].iter().zip(&nav.children).zip(&module.settings_pages) {
            assert_eq!(route.path, page.key);
            assert_eq!(route.meta().and_then(|m| m.module_id), Some(page.module_id));
            assert_eq!(item.key, format!("settings/{}", page.key));
            assert_eq!(item.label_key, page.label_key);
            assert_eq!(item.module_id, Some(page.module_id));
        }
        assert_eq!(nav.children[2].key, "settings/finance");
        assert_eq!(module.messages, Some(core_messages()));
    }

    #[test]
    fn aggregation_is_deterministic() {
        let contributed =
            vec![page("finance", 25, ModuleId::Finance), page("tax", 10, ModuleId::Finance)];

        let first = aggregate(core_settings_pages(), contributed.clone()).expect("first");
        let second = aggregate(core_settings_pages(), contributed).expect("second");

        assert_eq!(first, second);
    }
}
