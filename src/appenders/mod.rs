//! Reusable feature sources
//!
//! Appenders own an ordered list of values of one parameter family and
//! render it as a single fragment.

pub mod slices;

pub use slices::{ConcentricSliceAppender, PieChartSliceAppender};

use crate::data_types::{ChartColor, ChartTypeFeature, DataScalingSet};
use crate::error::{ChartError, Result};
use crate::features::{AppendableFeature, FeatureSource};
use std::num::NonZeroUsize;

/// A value rendered inside a [`GenericAppender`].
pub trait FeatureValue: Send + Sync {
    fn feature_data(&self) -> String;
}

impl FeatureValue for ChartColor {
    fn feature_data(&self) -> String {
        self.hex()
    }
}

impl FeatureValue for DataScalingSet {
    fn feature_data(&self) -> String {
        format!("{},{}", self.min(), self.max())
    }
}

impl FeatureValue for String {
    fn feature_data(&self) -> String {
        self.clone()
    }
}

/// Ordered values of one family, rendered as one fragment.
#[derive(Clone, Debug)]
pub struct GenericAppender<T> {
    feature: ChartTypeFeature,
    separator: String,
    values: Vec<T>,
}

impl<T> GenericAppender<T> {
    /// Values are joined with the family's default separator.
    pub fn new(feature: ChartTypeFeature) -> Self {
        Self::with_separator(feature, feature.separator())
    }

    pub fn with_separator(feature: ChartTypeFeature, separator: impl Into<String>) -> Self {
        Self {
            feature,
            separator: separator.into(),
            values: Vec::new(),
        }
    }

    pub fn feature(&self) -> ChartTypeFeature {
        self.feature
    }

    pub fn add(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn add_all(&mut self, values: impl IntoIterator<Item = T>) {
        self.values.extend(values);
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.values.len()).then(|| self.values.remove(index))
    }

    pub fn remove_all(&mut self) {
        self.values.clear();
    }

    pub fn list(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<T: PartialEq> GenericAppender<T> {
    /// Removes the first value equal to `value`.
    pub fn remove_value(&mut self, value: &T) -> bool {
        match self.values.iter().position(|v| v == value) {
            Some(idx) => {
                self.values.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl<T: FeatureValue> FeatureSource for GenericAppender<T> {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        if self.values.is_empty() {
            return vec![];
        }
        let data = self
            .values
            .iter()
            .map(FeatureValue::feature_data)
            .collect::<Vec<_>>()
            .join(&self.separator);
        vec![AppendableFeature::of(self.feature, data)]
    }
}

/// What a full [`UpperLimitGenericAppender`] does with a new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpperLimitReaction {
    /// Evict the oldest value.
    RemoveFirst,
    /// Drop every stored value, then add.
    RemoveAll,
    /// Refuse the value with [`ChartError::LimitExceeded`].
    Reject,
}

/// A [`GenericAppender`] holding at most `limit` values.
#[derive(Clone, Debug)]
pub struct UpperLimitGenericAppender<T> {
    inner: GenericAppender<T>,
    limit: NonZeroUsize,
    reaction: UpperLimitReaction,
}

impl<T> UpperLimitGenericAppender<T> {
    pub fn new(feature: ChartTypeFeature, limit: NonZeroUsize, reaction: UpperLimitReaction) -> Self {
        Self {
            inner: GenericAppender::new(feature),
            limit,
            reaction,
        }
    }

    pub fn add(&mut self, value: T) -> Result<()> {
        if self.inner.len() >= self.limit.get() {
            match self.reaction {
                UpperLimitReaction::RemoveFirst => {
                    let excess = self.inner.len() + 1 - self.limit.get();
                    self.inner.values.drain(..excess);
                    tracing::debug!(feature = ?self.inner.feature, excess, "evicted oldest values");
                }
                UpperLimitReaction::RemoveAll => {
                    tracing::debug!(feature = ?self.inner.feature, "cleared full appender");
                    self.inner.remove_all();
                }
                UpperLimitReaction::Reject => {
                    return Err(ChartError::LimitExceeded {
                        feature: self.inner.feature.prefix().to_string(),
                        limit: self.limit.get(),
                    });
                }
            }
        }
        self.inner.add(value);
        Ok(())
    }

    /// Leaves `value` as the only entry. Never exceeds the limit, which is
    /// at least one.
    pub fn replace(&mut self, value: T) {
        self.inner.remove_all();
        self.inner.add(value);
    }

    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.inner.remove(index)
    }

    pub fn remove_all(&mut self) {
        self.inner.remove_all();
    }

    pub fn list(&self) -> &[T] {
        self.inner.list()
    }
}

impl<T: FeatureValue> FeatureSource for UpperLimitGenericAppender<T> {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        self.inner.appendable_features()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limited(limit: usize, reaction: UpperLimitReaction) -> UpperLimitGenericAppender<String> {
        UpperLimitGenericAppender::new(
            ChartTypeFeature::ChartMarker,
            NonZeroUsize::new(limit).unwrap(),
            reaction,
        )
    }

    #[test]
    fn test_generic_join() {
        let mut colors = GenericAppender::new(ChartTypeFeature::ChartColor);
        assert!(colors.appendable_features().is_empty());
        colors.add(ChartColor::RED);
        colors.add(ChartColor::new(0, 0, 255, 0x80));
        let features = colors.appendable_features();
        assert_eq!(features, vec![AppendableFeature::new("chco", "FF0000,0000FF80")]);
    }

    #[test]
    fn test_generic_remove() {
        let mut labels = GenericAppender::new(ChartTypeFeature::ChartLabel);
        labels.add_all(["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(labels.remove(1), Some("b".to_string()));
        assert_eq!(labels.remove(5), None);
        assert!(labels.remove_value(&"a".to_string()));
        assert!(!labels.remove_value(&"zz".to_string()));
        assert_eq!(labels.list(), ["c".to_string()]);
    }

    #[test]
    fn test_remove_first() {
        let mut app = limited(2, UpperLimitReaction::RemoveFirst);
        for v in ["a", "b", "c"] {
            app.add(v.to_string()).unwrap();
        }
        assert_eq!(app.list(), ["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_remove_all() {
        let mut app = limited(2, UpperLimitReaction::RemoveAll);
        for v in ["a", "b", "c"] {
            app.add(v.to_string()).unwrap();
        }
        assert_eq!(app.list(), ["c".to_string()]);
    }

    #[test]
    fn test_replace_ignores_reaction() {
        let mut app = limited(1, UpperLimitReaction::Reject);
        app.add("a".to_string()).unwrap();
        app.replace("b".to_string());
        assert_eq!(app.list(), ["b".to_string()]);
        assert!(app.add("c".to_string()).is_err());
    }

    #[test]
    fn test_reject() {
        let mut app = limited(1, UpperLimitReaction::Reject);
        app.add("a".to_string()).unwrap();
        let err = app.add("b".to_string()).unwrap_err();
        assert!(matches!(err, ChartError::LimitExceeded { limit: 1, .. }));
        assert_eq!(app.list(), ["a".to_string()]);
    }
}
