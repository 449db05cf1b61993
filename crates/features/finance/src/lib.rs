//! Finance feature module: income and expense tracking on top of invoices.
//!
//! Contributes a navigation entry, its views, one settings page and its own message
//! bundles. All message keys live under the top-level `finance` key so merging the
//! bundle into the application catalog never replaces another module's tree.

use fhub_domain::{
    Locale, MessageBundle, Module, ModuleId, ModuleMessages, NavItem, Route, RouteMeta,
    SettingsPage,
};
use fhub_kernel::i18n::convert_bundle;
use serde_json::{Value, json};

pub const ID: ModuleId = ModuleId::Finance;

/// Position of the finance tab in the settings area, between profile and invoice.
pub const SETTINGS_ORDER: i32 = 25;

/// The finance module descriptor.
#[must_use]
pub fn module() -> Module {
    tracing::debug!(module = %ID, "Finance module described");

    Module::builder()
        .id(ID)
        .enabled_by_default(true)
        .toggleable(true)
        .nav(
            NavItem::builder()
                .key(ID.as_str())
                .label_key("finance.nav.title")
                .icon("wallet")
                .module_id(ID)
                .build(),
        )
        .routes(vec![
            Route::view("/finance", "views/finance/FinanceOverview", RouteMeta::main(ID)),
            Route::view("/finance/expenses", "views/finance/Expenses", RouteMeta::main(ID)),
        ])
        .settings_pages(vec![
            SettingsPage::builder()
                .key("finance")
                .label_key("finance.settings.title")
                .component("views/finance/FinanceSettings")
                .order(SETTINGS_ORDER)
                .module_id(ID)
                .build(),
        ])
        .messages(messages())
        .build()
}

/// Message bundles per locale, with placeholders in the single-brace form.
#[must_use]
pub fn messages() -> ModuleMessages {
    ModuleMessages::from([
        (Locale::EnUs, bundle(&en_us())),
        (Locale::ZhCn, bundle(&zh_cn())),
    ])
}

fn bundle(source: &Value) -> MessageBundle {
    source.as_object().map(convert_bundle).unwrap_or_default()
}

fn en_us() -> Value {
    json!({
        "finance": {
            "nav": { "title": "Finance" },
            "overview": {
                "title": "Finance overview",
                "income": "Income",
                "expenses": "Expenses",
                "net": "Net for {{period}}: {{- amount}}"
            },
            "expenses": {
                "title": "Expenses",
                "add": "Add expense",
                "empty": "No expenses recorded yet",
                "count": "{{count}} expenses"
            },
            "settings": {
                "title": "Finance",
                "defaultCategory": "Default expense category",
                "fiscalYearStart": "Fiscal year starts in {{month}}"
            }
        }
    })
}

fn zh_cn() -> Value {
    json!({
        "finance": {
            "nav": { "title": "财务" },
            "overview": {
                "title": "财务概览",
                "income": "收入",
                "expenses": "支出",
                "net": "{{period}}净额：{{- amount}}"
            },
            "expenses": {
                "title": "支出",
                "add": "新增支出",
                "empty": "暂无支出记录",
                "count": "共 {{count}} 笔支出"
            },
            "settings": {
                "title": "财务",
                "defaultCategory": "默认支出类别",
                "fiscalYearStart": "财年起始月份：{{month}}"
            }
        }
    })
}
