//! Route-driven category filter state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The filter bar under the nav shows which content tab (stays, car rental,
//! eating out, ...) is active and whether the bar is visible at all. Both are
//! derived from the current path on every navigation; the tabs themselves can
//! override the category until the next navigation.
//!
//! DESIGN
//! ======
//! `ROUTE_RULES` is evaluated top to bottom and the first matching rule wins.
//! Order is the priority: `/hotels` must precede `/hotel/`, and the exact
//! `/` rule only fires because nothing above it matches the root path.
//! Reordering rules changes behavior.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use serde::{Deserialize, Serialize};

use crate::net::types::ListingKind;

/// Active content-type tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCategory {
    #[default]
    RestStay,
    CarRental,
    EatingOut,
    Activities,
    TourPackages,
    /// Pages that are not tied to a catalog (cart, login).
    Default,
}

impl FilterCategory {
    /// Tabs shown in the filter bar, in display order.
    pub const TABS: [FilterCategory; 5] =
        [Self::RestStay, Self::CarRental, Self::EatingOut, Self::Activities, Self::TourPackages];

    pub fn label(self) -> &'static str {
        match self {
            Self::RestStay => "Stays",
            Self::CarRental => "Car Rental",
            Self::EatingOut => "Eating Out",
            Self::Activities => "Activities",
            Self::TourPackages => "Tour Packages",
            Self::Default => "All",
        }
    }

    /// Listing route for the tab.
    pub fn path(self) -> &'static str {
        match self {
            Self::RestStay => "/hotels",
            Self::CarRental => "/car-rentals",
            Self::EatingOut => "/eating-out",
            Self::Activities => "/activities",
            Self::TourPackages => "/tour-packages",
            Self::Default => "/",
        }
    }

    /// Backend collection backing the tab.
    pub fn listing_kind(self) -> Option<ListingKind> {
        match self {
            Self::RestStay => Some(ListingKind::Hotel),
            Self::CarRental => Some(ListingKind::Car),
            Self::EatingOut => Some(ListingKind::Restaurant),
            Self::Activities => Some(ListingKind::Activity),
            Self::TourPackages => Some(ListingKind::Tour),
            Self::Default => None,
        }
    }
}

/// Category plus filter-bar visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSetting {
    pub category: FilterCategory,
    pub show: bool,
}

impl FilterSetting {
    pub const fn new(category: FilterCategory, show: bool) -> Self {
        Self { category, show }
    }
}

impl Default for FilterSetting {
    fn default() -> Self {
        FALLBACK_SETTING
    }
}

/// How a rule tests the path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathMatch {
    Prefix(&'static str),
    Exact(&'static str),
}

impl PathMatch {
    pub fn matches(self, path: &str) -> bool {
        match self {
            Self::Prefix(prefix) => path.starts_with(prefix),
            Self::Exact(exact) => path == exact,
        }
    }
}

/// One `(predicate, setting)` pair of the rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterRule {
    pub when: PathMatch,
    pub setting: FilterSetting,
}

const fn rule(when: PathMatch, category: FilterCategory, show: bool) -> FilterRule {
    FilterRule { when, setting: FilterSetting::new(category, show) }
}

/// Used when no rule matches.
pub const FALLBACK_SETTING: FilterSetting = FilterSetting::new(FilterCategory::RestStay, true);

/// Ordered rule table; first match wins.
pub const ROUTE_RULES: &[FilterRule] = &[
    rule(PathMatch::Prefix("/hotels"), FilterCategory::RestStay, true),
    rule(PathMatch::Prefix("/hotel/"), FilterCategory::RestStay, false),
    rule(PathMatch::Prefix("/car-rentals"), FilterCategory::CarRental, true),
    rule(PathMatch::Prefix("/car-rental/"), FilterCategory::CarRental, false),
    rule(PathMatch::Prefix("/eating-out"), FilterCategory::EatingOut, true),
    rule(PathMatch::Prefix("/restaurant/"), FilterCategory::EatingOut, false),
    rule(PathMatch::Prefix("/activities"), FilterCategory::Activities, true),
    rule(PathMatch::Prefix("/tour-packages"), FilterCategory::TourPackages, true),
    rule(PathMatch::Prefix("/cart"), FilterCategory::Default, false),
    rule(PathMatch::Prefix("/login"), FilterCategory::Default, false),
    rule(PathMatch::Exact("/"), FilterCategory::RestStay, true),
];

/// Resolve `path` against `rules`, first match wins.
pub fn resolve_with(rules: &[FilterRule], path: &str) -> FilterSetting {
    let path = strip_query(path);
    rules.iter().find(|r| r.when.matches(path)).map_or(FALLBACK_SETTING, |r| r.setting)
}

/// Resolve `path` against `ROUTE_RULES`.
pub fn resolve_filter(path: &str) -> FilterSetting {
    resolve_with(ROUTE_RULES, path)
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

/// Filter-bar state provided as context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub setting: FilterSetting,
    pub path: String,
}

impl FilterState {
    pub fn for_path(path: &str) -> Self {
        Self { setting: resolve_filter(path), path: path.to_owned() }
    }

    pub fn category(&self) -> FilterCategory {
        self.setting.category
    }

    pub fn show(&self) -> bool {
        self.setting.show
    }

    /// Manual tab switch. Visibility stays as the route set it.
    pub fn set_active_category(&mut self, category: FilterCategory) {
        self.setting.category = category;
    }

    /// Re-derive from a new path. Returns whether the setting changed.
    pub fn on_navigate(&mut self, path: &str) -> bool {
        let next = resolve_filter(path);
        self.path = path.to_owned();
        let changed = next != self.setting;
        self.setting = next;
        changed
    }
}
