//! Module descriptors.
//!
//! A [`Module`] is a plain record: every feature is described by the same shape and
//! told apart only by its [`ModuleId`]. Descriptors are built once at startup and
//! never mutated afterwards.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};
use typed_builder::TypedBuilder;

/// Closed set of module identifiers. Unique across the registry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModuleId {
    Dashboard,
    Clients,
    Projects,
    Timesheet,
    Invoices,
    Reports,
    Finance,
    Settings,
}

impl ModuleId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Boolean enablement overrides keyed by module.
///
/// This is the typed form produced by normalizing externally supplied values; the raw
/// shape is never passed past that boundary.
pub type ModuleOverrides = BTreeMap<ModuleId, bool>;

/// One locale's flat-or-nested message tree.
pub type MessageBundle = serde_json::Map<String, serde_json::Value>;

/// Message bundles a module contributes, per locale.
pub type ModuleMessages = BTreeMap<Locale, MessageBundle>;

/// Opaque reference to a renderable view (e.g. `views/Dashboard`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(Cow<'static, str>);

impl ComponentRef {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ComponentRef {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentRef {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// Symbolic icon name resolved by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(Cow<'static, str>);

impl Icon {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Icon {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// An entry in the navigation menu, possibly with nested sub-entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    #[builder(setter(into))]
    pub key: String,
    /// i18n lookup key for the label.
    #[builder(setter(into))]
    pub label_key: String,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<ModuleId>,
    /// Sub-entries in menu order.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// A tab inside the aggregated settings area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPage {
    /// Unique within the settings module; also the child route path.
    #[builder(setter(into))]
    pub key: String,
    #[builder(setter(into))]
    pub label_key: String,
    #[builder(setter(into))]
    pub component: ComponentRef,
    /// Display position, ascending.
    pub order: i32,
    pub module_id: ModuleId,
}

/// Route metadata consumed by the router guards and layout switcher.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    #[builder(default)]
    #[serde(default)]
    pub requires_auth: bool,
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<ModuleId>,
}

impl RouteMeta {
    /// Authenticated page rendered in the `main` layout.
    #[must_use]
    pub fn main(module_id: ModuleId) -> Self {
        Self::builder().requires_auth(true).layout("main").module_id(module_id).build()
    }

    /// Metadata carrying only the owning module.
    #[must_use]
    pub fn owned_by(module_id: ModuleId) -> Self {
        Self::builder().module_id(module_id).build()
    }
}

/// What a route resolves to. A redirect never has a component or children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RouteTarget {
    Redirect {
        to: String,
    },
    #[serde(rename_all = "camelCase")]
    View {
        component: ComponentRef,
        #[serde(default)]
        meta: RouteMeta,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<Route>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    #[serde(flatten)]
    pub target: RouteTarget,
}

impl Route {
    pub fn view(path: impl Into<String>, component: impl Into<ComponentRef>, meta: RouteMeta) -> Self {
        Self {
            path: path.into(),
            target: RouteTarget::View {
                component: component.into(),
                meta,
                children: Vec::new(),
            },
        }
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self { path: path.into(), target: RouteTarget::Redirect { to: to.into() } }
    }

    /// Replaces the children of a view route. Redirects are returned unchanged.
    #[must_use]
    pub fn with_children(mut self, routes: Vec<Self>) -> Self {
        if let RouteTarget::View { children, .. } = &mut self.target {
            *children = routes;
        }
        self
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        match &self.target {
            RouteTarget::View { children, .. } => children,
            RouteTarget::Redirect { .. } => &[],
        }
    }

    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect { .. })
    }

    #[must_use]
    pub const fn meta(&self) -> Option<&RouteMeta> {
        match &self.target {
            RouteTarget::View { meta, .. } => Some(meta),
            RouteTarget::Redirect { .. } => None,
        }
    }
}

/// A feature unit contributing navigation, routes, settings pages and messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: ModuleId,
    #[builder(default = true)]
    pub enabled_by_default: bool,
    #[builder(default)]
    pub toggleable: bool,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<NavItem>,
    #[builder(default)]
    #[serde(default)]
    pub routes: Vec<Route>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub settings_pages: Vec<SettingsPage>,
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<ModuleMessages>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn module_ids_round_trip_through_strings() {
        for id in ModuleId::iter() {
            assert_eq!(ModuleId::from_str(id.as_str()), Ok(id));
        }
        assert!(ModuleId::from_str("unknown-id").is_err());
        assert!(ModuleId::from_str("Dashboard").is_err());
    }

    #[test]
    fn redirect_routes_have_no_children() {
        let route = Route::redirect("", "/settings/general")
            .with_children(vec![Route::redirect("x", "/y")]);

        assert!(route.is_redirect());
        assert!(route.children().is_empty());
        assert!(route.meta().is_none());
    }

    #[test]
    fn nav_item_builder_defaults() {
        let item = NavItem::builder().key("clients").label_key("nav.clients").icon("user").build();

        assert_eq!(item.icon.as_ref().map(Icon::as_str), Some("user"));
        assert!(item.module_id.is_none());
        assert!(item.children.is_empty());
    }
}
