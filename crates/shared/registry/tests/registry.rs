use fhub_domain::{
    Locale, Module, ModuleId, ModuleMessages, ModuleOverrides, ModuleSet, NavItem, Route,
    RouteMeta, SettingsPage,
};
use fhub_registry::router::{RouteRecord, flatten_paths};
use fhub_registry::{Registry, RegistryError, catalog, query};
use serde_json::json;

fn billing_module() -> Module {
    Module::builder()
        .id(ModuleId::Finance)
        .enabled_by_default(false)
        .toggleable(true)
        .nav(
            NavItem::builder()
                .key("finance")
                .label_key("nav.finance")
                .icon("wallet")
                .module_id(ModuleId::Finance)
                .build(),
        )
        .routes(vec![Route::view(
            "/finance",
            "views/finance/Finance",
            RouteMeta::main(ModuleId::Finance),
        )])
        .settings_pages(vec![
            SettingsPage::builder()
                .key("finance")
                .label_key("finance.settings.title")
                .component("views/finance/FinanceSettings")
                .order(25)
                .module_id(ModuleId::Finance)
                .build(),
            SettingsPage::builder()
                .key("tax")
                .label_key("finance.tax.title")
                .component("views/finance/TaxSettings")
                .order(10)
                .module_id(ModuleId::Finance)
                .build(),
        ])
        .messages(ModuleMessages::from([(
            Locale::EnUs,
            json!({ "finance": { "title": "Finance" } }).as_object().cloned().unwrap_or_default(),
        )]))
        .build()
}

fn registry() -> Registry {
    Registry::assemble(catalog::base_modules(), vec![billing_module()]).expect("assemble")
}

#[test]
fn settings_is_appended_last() {
    let registry = registry();

    assert_eq!(registry.len(), catalog::base_modules().len() + 2);
    assert_eq!(registry.modules().last().map(|m| m.id), Some(ModuleId::Settings));
    assert_eq!(registry.iter().filter(|m| m.id == ModuleId::Settings).count(), 1);
    assert_eq!(registry.settings().map(|m| m.id), Some(ModuleId::Settings));
}

#[test]
fn contributed_pages_interleave_with_core_pages() {
    let registry = registry();
    let settings = registry.get(ModuleId::Settings).expect("settings");

    let keys: Vec<_> = settings.settings_pages.iter().map(|p| (p.key.as_str(), p.order)).collect();
    assert_eq!(
        keys,
        vec![
            ("general", 10),
            ("tax", 10),
            ("profile", 20),
            ("finance", 25),
            ("invoice", 30),
            ("email", 40),
        ]
    );
}

#[test]
fn nav_items_follow_registry_order() {
    let registry = registry();
    let nav = query::collect_nav_items(&registry);

    assert_eq!(nav.len(), registry.iter().filter(|m| m.nav.is_some()).count());
    let keys: Vec<_> = nav.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "dashboard",
            "clients",
            "projects",
            "timesheet",
            "invoices",
            "reports",
            "finance",
            "settings",
        ]
    );

    let settings_nav = nav.last().expect("settings nav");
    assert_eq!(settings_nav.children.len(), catalog::core_settings_pages().len() + 2);
}

#[test]
fn messages_are_collected_without_merging() {
    let registry = registry();
    let messages = query::collect_module_messages(&registry);

    // The feature bundle, then the core bundle carried by settings.
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains_key(&Locale::EnUs));
    assert_eq!(messages[1], &catalog::core_messages());
}

#[test]
fn disabled_modules_contribute_nothing() {
    let registry = registry();
    let on = ModuleOverrides::from([(ModuleId::Finance, true)]);

    let settings_tabs = |overrides: Option<&ModuleOverrides>| -> Vec<String> {
        let nav = registry.active_nav_items(overrides);
        let settings = nav.iter().find(|n| n.key == "settings").expect("settings nav");
        settings.children.iter().map(|c| c.key.clone()).collect()
    };
    assert_eq!(
        settings_tabs(None),
        vec!["settings/general", "settings/profile", "settings/invoice", "settings/email"]
    );
    assert!(settings_tabs(Some(&on)).contains(&"settings/tax".to_owned()));

    let paths = |overrides: Option<&ModuleOverrides>| -> Vec<String> {
        registry.active_routes(overrides).iter().flat_map(flatten_paths).collect()
    };
    let off = paths(None);
    assert!(!off.iter().any(|p| p.starts_with("/finance") || p == "/settings/finance"));
    assert!(off.contains(&"/settings".to_owned()));
    assert!(paths(Some(&on)).contains(&"/settings/finance".to_owned()));

    assert_eq!(registry.active_messages(None), vec![&catalog::core_messages()]);
    assert_eq!(registry.active_messages(Some(&on)).len(), 2);
}

#[test]
fn unknown_modules_fail_open() {
    let registry = Registry::from_modules(catalog::base_modules()).expect("registry");
    let all_off = ModuleOverrides::from([(ModuleId::Finance, false)]);

    assert!(registry.get(ModuleId::Finance).is_none());
    assert!(registry.is_id_enabled(ModuleId::Finance, Some(&all_off)));
    assert!(registry.is_name_enabled("unknown-id", None));
    assert!(registry.is_name_enabled("unknown-id", Some(&ModuleOverrides::new())));
}

#[test]
fn overrides_toggle_the_finance_module() {
    let registry = registry();
    let on = ModuleOverrides::from([(ModuleId::Finance, true)]);

    assert!(!registry.is_id_enabled(ModuleId::Finance, None));
    assert!(registry.is_name_enabled("finance", Some(&on)));

    assert!(!registry.active_set(None).contains(ModuleSet::FINANCE));
    assert_eq!(registry.active_set(Some(&on)), ModuleSet::ALL);
    assert_eq!(registry.active_modules(None).len(), registry.len() - 1);
}

#[test]
fn route_records_cover_active_modules_only() {
    let registry = registry();

    let records = registry.route_records(None);
    let off: Vec<_> = records.iter().map(|r| r.path().to_owned()).collect();
    assert!(!off.contains(&"/finance".to_owned()));
    assert_eq!(off.last().map(String::as_str), Some("/settings"));

    let settings_off = records.last().expect("settings record");
    let tabs: Vec<_> = settings_off.children().iter().map(RouteRecord::path).collect();
    assert_eq!(tabs, vec!["", "general", "profile", "invoice", "email"]);

    let on = ModuleOverrides::from([(ModuleId::Finance, true)]);
    let records = registry.route_records(Some(&on));
    assert!(records.iter().any(|r| r.path() == "/finance"));

    let settings = records.last().expect("settings record");
    assert!(matches!(
        &settings.children()[0],
        RouteRecord::Redirect { redirect, .. } if redirect == "/settings/general"
    ));
}

#[test]
fn settings_paths_are_addressable() {
    let registry = registry();
    let settings = registry.settings().expect("settings");

    let paths = flatten_paths(&settings.routes[0]);
    assert_eq!(
        paths,
        vec![
            "/settings",
            "/settings/general",
            "/settings/tax",
            "/settings/profile",
            "/settings/finance",
            "/settings/invoice",
            "/settings/email",
        ]
    );
}

#[test]
fn settings_id_is_reserved() {
    let mut modules = catalog::base_modules();
    modules.push(Module::builder().id(ModuleId::Settings).build());

    let err = Registry::from_modules(modules).unwrap_err();
    assert!(matches!(err, RegistryError::ReservedModule { id: ModuleId::Settings, .. }));
}

#[test]
fn duplicate_module_ids_are_rejected() {
    let err = Registry::assemble(catalog::base_modules(), catalog::base_modules()).unwrap_err();

    assert!(matches!(err, RegistryError::DuplicateModule { id: ModuleId::Dashboard, .. }));
    assert_eq!(err.to_string(), "Module registered twice: dashboard");
}

#[test]
fn colliding_settings_keys_are_rejected() {
    let mut clash = billing_module();
    clash.settings_pages[0].key = "general".into();

    let err = Registry::assemble(catalog::base_modules(), vec![clash]).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateSettingsPage { ref key, .. } if key == "general"));
}

#[test]
fn assembly_is_deterministic() {
    assert_eq!(registry(), registry());
}
