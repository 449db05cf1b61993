use crate::catalog::core_settings_pages;
use crate::error::RegistryError;
use crate::query::{collect_module_messages, collect_nav_items, is_module_enabled};
use crate::router::{RouteRecord, to_route_record};
use crate::settings;
use fhub_domain::{Module, ModuleId, ModuleMessages, ModuleOverrides, ModuleSet, NavItem, Route};
use std::collections::HashSet;
use std::str::FromStr;

/// The ordered, immutable list of every module in the application.
///
/// Exactly one module has id [`ModuleId::Settings`] and it is always last: it is built
/// by [`settings::aggregate`] from the pages contributed by the modules before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    modules: Vec<Module>,
}

impl Registry {
    /// Builds a registry from `base` modules followed by `features`, in declaration order.
    ///
    /// # Errors
    /// - [`RegistryError::ReservedModule`] if an input module claims the settings id.
    /// - [`RegistryError::DuplicateModule`] if two input modules share an id.
    /// - [`RegistryError::DuplicateSettingsPage`] if contributed page keys collide.
    pub fn assemble(base: Vec<Module>, features: Vec<Module>) -> Result<Self, RegistryError> {
        let mut modules = base;
        modules.extend(features);
        Self::from_modules(modules)
    }

    /// Builds a registry from an arbitrary module list and appends the settings module.
    ///
    /// # Errors
    /// Same as [`Registry::assemble`].
    pub fn from_modules(mut modules: Vec<Module>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(modules.len());
        for module in &modules {
            if module.id == ModuleId::Settings {
                return Err(RegistryError::ReservedModule {
                    id: module.id,
                    context: Some("settings is aggregated".into()),
                });
            }
            if !seen.insert(module.id) {
                return Err(RegistryError::DuplicateModule { id: module.id, context: None });
            }
        }

        let contributed =
            modules.iter().flat_map(|m| m.settings_pages.iter().cloned()).collect::<Vec<_>>();
        modules.push(settings::aggregate(core_settings_pages(), contributed)?);

        tracing::debug!(
            modules = modules.len(),
            ids = ?modules.iter().map(|m| m.id).collect::<Vec<_>>(),
            "Module registry assembled"
        );

        Ok(Self { modules })
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.modules.len()
    }

    /// Always `false`: the settings module is present in every registry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Module> {
        self.modules.iter()
    }

    /// The aggregated settings module.
    #[must_use]
    pub fn settings(&self) -> Option<&Module> {
        self.modules.last()
    }

    /// Linear lookup in registry order.
    #[must_use]
    pub fn get(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Enablement of `id`. A module missing from the registry counts as enabled.
    #[must_use]
    pub fn is_id_enabled(&self, id: ModuleId, overrides: Option<&ModuleOverrides>) -> bool {
        self.get(id).is_none_or(|module| is_module_enabled(module, overrides))
    }

    /// [`Registry::is_id_enabled`] for a loosely typed id. Unrecognized names count as
    /// enabled.
    #[must_use]
    pub fn is_name_enabled(&self, name: &str, overrides: Option<&ModuleOverrides>) -> bool {
        ModuleId::from_str(name).map_or_else(
            |_| {
                tracing::debug!(name, "Enablement query for unknown module");
                true
            },
            |id| self.is_id_enabled(id, overrides),
        )
    }

    /// Enabled modules in registry order.
    #[must_use]
    pub fn active_modules(&self, overrides: Option<&ModuleOverrides>) -> Vec<&Module> {
        self.modules.iter().filter(|m| is_module_enabled(m, overrides)).collect()
    }

    #[must_use]
    pub fn active_set(&self, overrides: Option<&ModuleOverrides>) -> ModuleSet {
        self.active_modules(overrides).into_iter().map(|m| m.id).collect()
    }

    /// Navigation entries of the enabled modules. Sub-entries owned by a disabled
    /// module (e.g. a contributed settings tab) are dropped.
    #[must_use]
    pub fn active_nav_items(&self, overrides: Option<&ModuleOverrides>) -> Vec<NavItem> {
        collect_nav_items(self.active_modules(overrides))
            .into_iter()
            .map(|item| self.prune_nav(item, overrides))
            .collect()
    }

    /// Routes of the enabled modules, without child routes owned by a disabled module.
    #[must_use]
    pub fn active_routes(&self, overrides: Option<&ModuleOverrides>) -> Vec<Route> {
        self.active_modules(overrides)
            .into_iter()
            .flat_map(|m| m.routes.iter())
            .filter_map(|route| self.prune_route(route, overrides))
            .collect()
    }

    /// Message bundles of the enabled modules, in registry order.
    #[must_use]
    pub fn active_messages(&self, overrides: Option<&ModuleOverrides>) -> Vec<&ModuleMessages> {
        collect_module_messages(self.active_modules(overrides))
    }

    /// Router records for [`Registry::active_routes`].
    #[must_use]
    pub fn route_records(&self, overrides: Option<&ModuleOverrides>) -> Vec<RouteRecord> {
        self.active_routes(overrides).iter().map(to_route_record).collect()
    }

    fn owner_enabled(&self, owner: Option<ModuleId>, overrides: Option<&ModuleOverrides>) -> bool {
        owner.is_none_or(|id| self.is_id_enabled(id, overrides))
    }

    fn prune_nav(&self, item: &NavItem, overrides: Option<&ModuleOverrides>) -> NavItem {
        let children = item
            .children
            .iter()
            .filter(|child| self.owner_enabled(child.module_id, overrides))
            .map(|child| self.prune_nav(child, overrides))
            .collect();
        NavItem { children, ..item.clone() }
    }

    // Redirects carry no owner and are always kept.
    fn prune_route(&self, route: &Route, overrides: Option<&ModuleOverrides>) -> Option<Route> {
        if !self.owner_enabled(route.meta().and_then(|m| m.module_id), overrides) {
            return None;
        }
        let children =
            route.children().iter().filter_map(|child| self.prune_route(child, overrides)).collect();
        Some(route.clone().with_children(children))
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Module;
    type IntoIter = std::slice::Iter<'a, Module>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}
