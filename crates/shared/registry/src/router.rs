//! Router-facing route records.
//!
//! The router consumes a tree of plain records: a redirect becomes a redirect-only
//! record, a view becomes a nested record whose children are converted in order.

use fhub_domain::{ComponentRef, Route, RouteMeta, RouteTarget};
use serde::Serialize;

/// Serializable route node handed to the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RouteRecord {
    Redirect {
        path: String,
        redirect: String,
    },
    View {
        path: String,
        component: ComponentRef,
        meta: RouteMeta,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<RouteRecord>,
    },
}

impl RouteRecord {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Redirect { path, .. } | Self::View { path, .. } => path,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::View { children, .. } => children,
            Self::Redirect { .. } => &[],
        }
    }
}

impl From<&Route> for RouteRecord {
    fn from(route: &Route) -> Self {
        to_route_record(route)
    }
}

#[must_use]
pub fn to_route_record(route: &Route) -> RouteRecord {
    match &route.target {
        RouteTarget::Redirect { to } => {
            RouteRecord::Redirect { path: route.path.clone(), redirect: to.clone() }
        }
        RouteTarget::View { component, meta, children } => RouteRecord::View {
            path: route.path.clone(),
            component: component.clone(),
            meta: meta.clone(),
            children: children.iter().map(to_route_record).collect(),
        },
    }
}

/// Every addressable path under `route`, depth first.
///
/// Child paths are relative to their parent; an empty child path addresses the parent
/// itself and is not repeated.
#[must_use]
pub fn flatten_paths(route: &Route) -> Vec<String> {
    let mut out = Vec::new();
    collect_paths(route, "", &mut out);
    out
}

fn collect_paths(route: &Route, parent: &str, out: &mut Vec<String>) {
    let full = join(parent, &route.path);
    if !out.contains(&full) {
        out.push(full.clone());
    }
    for child in route.children() {
        collect_paths(child, &full, out);
    }
}

fn join(parent: &str, path: &str) -> String {
    if path.starts_with('/') || parent.is_empty() {
        path.to_owned()
    } else if path.is_empty() {
        parent.to_owned()
    } else {
        format!("{}/{path}", parent.trim_end_matches('/'))
    }
}
