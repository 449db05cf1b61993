//! Built-in module descriptors: the always-present business modules, the settings
//! pages owned by the settings area itself, and the core message bundle that labels
//! them.

use fhub_domain::{
    Icon, Locale, MessageBundle, Module, ModuleId, ModuleMessages, NavItem, Route, RouteMeta,
    SettingsPage,
};
use serde_json::{Value, json};

/// Settings area mount point.
pub const SETTINGS_PATH: &str = "/settings";
/// Where the bare settings path redirects.
pub const SETTINGS_INDEX: &str = "/settings/general";
/// Prefix of every nav key derived from a settings page.
pub const SETTINGS_NAV_PREFIX: &str = "settings/";

pub(crate) const SETTINGS_LAYOUT: &str = "views/settings/SettingsLayout";
pub(crate) const SETTINGS_ICON: Icon = Icon::new("settings");

fn simple_module(
    id: ModuleId,
    icon: &'static str,
    routes: Vec<(&'static str, &'static str)>,
) -> Module {
    let key = id.as_str();
    Module::builder()
        .id(id)
        .enabled_by_default(true)
        .toggleable(false)
        .nav(NavItem::builder().key(key).label_key(format!("nav.{key}")).icon(icon).build())
        .routes(
            routes
                .into_iter()
                .map(|(path, view)| Route::view(path, view, RouteMeta::main(id)))
                .collect(),
        )
        .build()
}

/// Core business modules in navigation order.
#[must_use]
pub fn base_modules() -> Vec<Module> {
    vec![
        simple_module(
            ModuleId::Dashboard,
            "layout-dashboard",
            vec![("/dashboard", "views/Dashboard")],
        ),
        simple_module(ModuleId::Clients, "user", vec![("/clients", "views/Clients")]),
        simple_module(
            ModuleId::Projects,
            "folder-kanban",
            vec![("/projects", "views/Projects"), ("/projects/:id", "views/ProjectDetail")],
        ),
        simple_module(ModuleId::Timesheet, "clock", vec![("/timesheet", "views/Timesheet")]),
        simple_module(ModuleId::Invoices, "file-text", vec![("/invoices", "views/Invoices")]),
        simple_module(ModuleId::Reports, "bar-chart-3", vec![("/reports", "views/Reports")]),
    ]
}

fn core_page(key: &'static str, order: i32, component: &'static str) -> SettingsPage {
    SettingsPage::builder()
        .key(key)
        .label_key(format!("settings.{key}.title"))
        .component(component)
        .order(order)
        .module_id(ModuleId::Settings)
        .build()
}

/// Settings pages owned by the settings module, before any contributions.
#[must_use]
pub fn core_settings_pages() -> Vec<SettingsPage> {
    vec![
        core_page("general", 10, "views/settings/GeneralSettings"),
        core_page("profile", 20, "views/settings/ProfileSettings"),
        core_page("invoice", 30, "views/settings/InvoiceSettings"),
        core_page("email", 40, "views/settings/EmailSettings"),
    ]
}

/// Labels for the core nav entries and settings pages, carried by the settings module.
///
/// Only the `nav` and `settings` top-level keys are used; feature modules keep their
/// messages under their own id.
#[must_use]
pub fn core_messages() -> ModuleMessages {
    ModuleMessages::from([
        (Locale::EnUs, bundle(&core_en_us())),
        (Locale::ZhCn, bundle(&core_zh_cn())),
    ])
}

fn bundle(source: &Value) -> MessageBundle {
    source.as_object().cloned().unwrap_or_default()
}

fn core_en_us() -> Value {
    json!({
        "nav": {
            "dashboard": "Dashboard",
            "clients": "Clients",
            "projects": "Projects",
            "timesheet": "Timesheet",
            "invoices": "Invoices",
            "reports": "Reports",
            "settings": "Settings"
        },
        "settings": {
            "general": { "title": "General" },
            "profile": { "title": "Profile" },
            "invoice": { "title": "Invoice" },
            "email": { "title": "Email" }
        }
    })
}

fn core_zh_cn() -> Value {
    json!({
        "nav": {
            "dashboard": "仪表盘",
            "clients": "客户",
            "projects": "项目",
            "timesheet": "工时",
            "invoices": "发票",
            "reports": "报表",
            "settings": "设置"
        },
        "settings": {
            "general": { "title": "通用" },
            "profile": { "title": "个人资料" },
            "invoice": { "title": "发票" },
            "email": { "title": "邮件" }
        }
    })
}
