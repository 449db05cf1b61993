use crate::module::ModuleId;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;

bitflags! {
    /// Represents a set of modules, one bit per [`ModuleId`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ModuleSet: u32 {
        const DASHBOARD = 1 << 0;
        const CLIENTS = 1 << 1;
        const PROJECTS = 1 << 2;
        const TIMESHEET = 1 << 3;
        const INVOICES = 1 << 4;
        const REPORTS = 1 << 5;
        const FINANCE = 1 << 6;
        const SETTINGS = 1 << 7;

        const ALL = Self::DASHBOARD.bits()
            | Self::CLIENTS.bits()
            | Self::PROJECTS.bits()
            | Self::TIMESHEET.bits()
            | Self::INVOICES.bits()
            | Self::REPORTS.bits()
            | Self::FINANCE.bits()
            | Self::SETTINGS.bits();
    }
}

impl ModuleSet {
    #[must_use]
    pub fn contains_id(self, id: ModuleId) -> bool {
        self.contains(Self::from(id))
    }

    /// Module ids in the set, in declaration order.
    pub fn ids(self) -> impl Iterator<Item = ModuleId> {
        ModuleId::iter().filter(move |id| self.contains_id(*id))
    }
}

impl From<ModuleId> for ModuleSet {
    fn from(id: ModuleId) -> Self {
        match id {
            ModuleId::Dashboard => Self::DASHBOARD,
            ModuleId::Clients => Self::CLIENTS,
            ModuleId::Projects => Self::PROJECTS,
            ModuleId::Timesheet => Self::TIMESHEET,
            ModuleId::Invoices => Self::INVOICES,
            ModuleId::Reports => Self::REPORTS,
            ModuleId::Finance => Self::FINANCE,
            ModuleId::Settings => Self::SETTINGS,
        }
    }
}

impl FromIterator<ModuleId> for ModuleSet {
    fn from_iter<I: IntoIterator<Item = ModuleId>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, id| set | Self::from(id))
    }
}

impl From<&str> for ModuleSet {
    fn from(s: &str) -> Self {
        match s {
            "all" | "*" => Self::ALL,
            other => other.parse::<ModuleId>().map_or_else(|_| Self::empty(), Self::from),
        }
    }
}

impl From<u32> for ModuleSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for ModuleSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModuleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
