//! Feature fragments and their grouping by wire prefix
//!
//! A chart is made of [`FeatureSource`]s, each contributing zero or more
//! [`AppendableFeature`]s. The [`FeatureRegistry`] gathers fragments that share
//! a prefix into one [`FeatureGroup`], rendered as a single `prefix=data`
//! parameter.

use crate::data_types::ChartTypeFeature;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Separator used for prefixes without a known family.
pub const DEFAULT_GROUP_SEPARATOR: &str = "|";

/// One `prefix`/`data` pair contributed by a chart feature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AppendableFeature {
    prefix: String,
    data: String,
}

impl AppendableFeature {
    pub fn new(prefix: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            data: data.into(),
        }
    }

    pub fn of(feature: ChartTypeFeature, data: impl Into<String>) -> Self {
        Self::new(feature.prefix(), data)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Anything that contributes URL fragments to a chart.
pub trait FeatureSource: Send + Sync {
    fn appendable_features(&self) -> Vec<AppendableFeature>;
}

impl FeatureSource for AppendableFeature {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        vec![self.clone()]
    }
}

impl FeatureSource for Vec<AppendableFeature> {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        self.clone()
    }
}

impl<T: FeatureSource> FeatureSource for Option<T> {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        self.as_ref()
            .map(|source| source.appendable_features())
            .unwrap_or_default()
    }
}

impl<T: FeatureSource + ?Sized> FeatureSource for Box<T> {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        (**self).appendable_features()
    }
}

/// A source shared between charts; read-locked for one collection pass.
impl<T: FeatureSource + ?Sized> FeatureSource for Arc<RwLock<T>> {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        self.read().appendable_features()
    }
}

/// All fragments sharing one prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureGroup {
    prefix: String,
    separator: String,
    data: Vec<String>,
}

impl FeatureGroup {
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
            data: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Empty data strings are ignored so they never leave a stray separator.
    pub fn add(&mut self, feature: &AppendableFeature) {
        if !feature.data.is_empty() {
            self.data.push(feature.data.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Member data joined by the group separator.
    pub fn content(&self) -> String {
        self.data.join(&self.separator)
    }

    /// `prefix=content`, bare `content` for the empty prefix, `""` when
    /// the group holds nothing.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        if self.prefix.is_empty() {
            self.content()
        } else {
            format!("{}={}", self.prefix, self.content())
        }
    }
}

/// Groups fragments by prefix, iterated in ascending prefix order.
#[derive(Clone, Debug, Default)]
pub struct FeatureRegistry {
    groups: BTreeMap<String, FeatureGroup>,
    separators: HashMap<String, String>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the separator of groups created for `prefix`.
    pub fn with_separator(mut self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.separators.insert(prefix.into(), separator.into());
        self
    }

    fn separator_for(&self, prefix: &str) -> String {
        if let Some(sep) = self.separators.get(prefix) {
            return sep.clone();
        }
        ChartTypeFeature::from_prefix(prefix)
            .map(|f| f.separator())
            .unwrap_or(DEFAULT_GROUP_SEPARATOR)
            .to_string()
    }

    pub fn add(&mut self, feature: &AppendableFeature) {
        if !self.groups.contains_key(feature.prefix()) {
            let group = FeatureGroup::new(feature.prefix(), self.separator_for(feature.prefix()));
            self.groups.insert(feature.prefix().to_string(), group);
        }
        if let Some(group) = self.groups.get_mut(feature.prefix()) {
            group.add(feature);
        }
    }

    pub fn collect_from<S: FeatureSource + ?Sized>(&mut self, source: &S) {
        for feature in source.appendable_features() {
            self.add(&feature);
        }
    }

    pub fn group(&self, prefix: &str) -> Option<&FeatureGroup> {
        self.groups.get(prefix)
    }

    /// Non-empty groups sorted by prefix.
    pub fn into_groups(self) -> Vec<FeatureGroup> {
        self.groups.into_values().filter(|g| !g.is_empty()).collect()
    }
}
