//! JSON views of the registry.

use fhub::Registry;
use fhub::domain::config::I18nConfig;
use fhub::domain::{Icon, Locale, ModuleId, ModuleOverrides, NavItem};
use fhub::kernel::i18n::{Catalog, lookup, merge_catalog};
use fhub::kernel::validation::Violation;
use fhub::query::is_module_enabled;
use fhub::router::flatten_paths;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModuleRow {
    id: &'static str,
    enabled_by_default: bool,
    toggleable: bool,
    enabled: bool,
    settings_pages: usize,
}

/// Every module in registry order, plus the bitset of active modules.
#[must_use]
pub fn modules(registry: &Registry, overrides: Option<&ModuleOverrides>) -> Value {
    let rows: Vec<ModuleRow> = registry
        .iter()
        .map(|m| ModuleRow {
            id: m.id.as_str(),
            enabled_by_default: m.enabled_by_default,
            toggleable: m.toggleable,
            enabled: is_module_enabled(m, overrides),
            settings_pages: m.settings_pages.len(),
        })
        .collect();

    json!({ "modules": rows, "active": registry.active_set(overrides) })
}

/// A nav entry with its label resolved in the configured locale.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NavRow<'a> {
    key: &'a str,
    label_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    module_id: Option<ModuleId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<NavRow<'a>>,
}

fn nav_row<'a>(item: &'a NavItem, catalog: &'a Catalog, i18n: &I18nConfig) -> NavRow<'a> {
    NavRow {
        key: &item.key,
        label_key: &item.label_key,
        label: lookup(catalog, i18n.locale, i18n.fallback_locale, &item.label_key),
        icon: item.icon.as_ref(),
        module_id: item.module_id,
        children: item.children.iter().map(|child| nav_row(child, catalog, i18n)).collect(),
    }
}

/// Navigation of the enabled modules. Labels come from the enabled modules' messages,
/// in the configured locale with its fallback; unresolved labels are omitted.
#[must_use]
pub fn nav(registry: &Registry, overrides: Option<&ModuleOverrides>, i18n: &I18nConfig) -> Value {
    let items = registry.active_nav_items(overrides);
    let catalog = merge_catalog(registry.active_messages(overrides));

    let rows: Vec<NavRow<'_>> = items.iter().map(|item| nav_row(item, &catalog, i18n)).collect();
    json!(rows)
}

#[must_use]
pub fn routes(registry: &Registry, overrides: Option<&ModuleOverrides>, flat: bool) -> Value {
    if !flat {
        return json!(registry.route_records(overrides));
    }

    let paths: Vec<String> =
        registry.active_routes(overrides).iter().flat_map(flatten_paths).collect();
    json!(paths)
}

/// Settings pages in display order. Pages of disabled modules are still listed;
/// the UI hides them, the registry does not.
#[must_use]
pub fn settings(registry: &Registry) -> Value {
    registry.settings().map_or(Value::Null, |m| json!(m.settings_pages))
}

/// Catalog merged from the enabled modules: one locale, or every locale for `None`.
#[must_use]
pub fn messages(
    registry: &Registry,
    overrides: Option<&ModuleOverrides>,
    locale: Option<Locale>,
) -> Value {
    let catalog = merge_catalog(registry.active_messages(overrides));
    match locale {
        Some(locale) => catalog.get(&locale).map_or(Value::Null, |bundle| json!(bundle)),
        None => json!(catalog),
    }
}

#[must_use]
pub fn validation(violations: &[Violation]) -> Value {
    json!({ "valid": violations.is_empty(), "violations": violations })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        fhub::build().expect("registry")
    }

    fn finance_off() -> ModuleOverrides {
        ModuleOverrides::from([(ModuleId::Finance, false)])
    }

    fn i18n(locale: Locale) -> I18nConfig {
        I18nConfig { locale, fallback_locale: Locale::EnUs }
    }

    fn nav_keys(value: &Value) -> Vec<String> {
        let mut keys = Vec::new();
        let mut stack: Vec<&Value> = value.as_array().into_iter().flatten().collect();
        while let Some(item) = stack.pop() {
            keys.extend(item["key"].as_str().map(str::to_owned));
            stack.extend(item["children"].as_array().into_iter().flatten());
        }
        keys
    }

    #[test]
    fn modules_report_marks_overridden_state() {
        let off = ModuleOverrides::from([(ModuleId::Finance, false)]);
        let value = modules(&registry(), Some(&off));

        let finance = value["modules"]
            .as_array()
            .and_then(|rows| rows.iter().find(|r| r["id"] == "finance"))
            .expect("finance row");
        assert_eq!(finance["enabled"], json!(false));
        assert_eq!(finance["enabledByDefault"], json!(true));
        assert_eq!(value["modules"].as_array().map(Vec::len), Some(registry().len()));
    }

    #[test]
    fn flat_routes_include_settings_children() {
        let value = routes(&registry(), None, true);
        let paths: Vec<&str> =
            value.as_array().into_iter().flatten().filter_map(Value::as_str).collect();

        assert!(paths.contains(&"/projects/:id"));
        assert!(paths.contains(&"/settings/finance"));
        assert_eq!(paths.last(), Some(&"/settings/email"));
    }

    #[test]
    fn messages_can_be_narrowed_to_a_locale() {
        let value = messages(&registry(), None, Some(Locale::ZhCn));
        assert_eq!(value["finance"]["nav"]["title"], json!("财务"));
        assert_eq!(value["nav"]["dashboard"], json!("仪表盘"));

        let all = messages(&registry(), None, None);
        assert!(all.get("en-US").is_some() && all.get("zh-CN").is_some());
    }

    #[test]
    fn disabled_module_leaves_no_trace_in_views() {
        let registry = registry();
        let off = finance_off();

        let catalog = messages(&registry, Some(&off), Some(Locale::EnUs));
        assert!(catalog.get("finance").is_none());
        assert!(catalog.get("nav").is_some());

        let keys = nav_keys(&nav(&registry, Some(&off), &i18n(Locale::EnUs)));
        assert!(!keys.iter().any(|k| k == "finance" || k == "settings/finance"));
        assert!(keys.iter().any(|k| k == "settings/general"));

        let flat = routes(&registry, Some(&off), true);
        let paths: Vec<&str> =
            flat.as_array().into_iter().flatten().filter_map(Value::as_str).collect();
        assert!(!paths.iter().any(|p| p.starts_with("/finance") || *p == "/settings/finance"));

        let tree = routes(&registry, Some(&off), false);
        let settings = tree.as_array().and_then(|r| r.last()).expect("settings record");
        let tabs = settings["children"].as_array().expect("settings children");
        assert!(!tabs.iter().any(|c| c["path"] == "finance"));
    }

    #[test]
    fn nav_labels_follow_the_configured_locale() {
        let registry = registry();

        let zh = nav(&registry, None, &i18n(Locale::ZhCn));
        let dashboard = &zh[0];
        assert_eq!(dashboard["labelKey"], json!("nav.dashboard"));
        assert_eq!(dashboard["label"], json!("仪表盘"));

        let en = nav(&registry, None, &i18n(Locale::EnUs));
        let finance = en
            .as_array()
            .and_then(|items| items.iter().find(|n| n["key"] == "finance"))
            .expect("finance nav");
        assert_eq!(finance["label"], json!("Finance"));

        let settings = en.as_array().and_then(|items| items.last()).expect("settings nav");
        assert_eq!(settings["children"][2]["key"], json!("settings/finance"));
        assert_eq!(settings["children"][2]["label"], json!("Finance"));
    }
}
