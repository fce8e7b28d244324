//! Chart model
//!
//! A chart is a type tag, a size policy and an explicitly ordered list of
//! [`FeatureSource`]s. The [`Chart`] trait is the capability every chart kind
//! implements; [`ChartSpec`] is the generic kind that accepts any source.

use crate::assembler::UrlAssembler;
use crate::data_types::{ChartSize, ChartType, Dimension, OutputFormat};
use crate::error::Result;
use crate::features::FeatureSource;
use std::collections::BTreeMap;
use std::fmt;

pub trait Chart {
    fn chart_type(&self) -> ChartType;

    fn size(&self) -> ChartSize;

    /// Every source contributing fragments, in registration order.
    fn feature_sources(&self) -> Vec<&dyn FeatureSource>;

    /// GET URL against the default service location.
    fn url(&self) -> String {
        UrlAssembler::default().url(self)
    }

    fn url_at(&self, api_location: &str) -> String {
        UrlAssembler::default().url_at(self, api_location)
    }

    /// GET URL with a trailing `chof` output format.
    fn url_with_format(&self, format: OutputFormat) -> String {
        UrlAssembler::default().url_with_format(self, format)
    }

    fn post_request(&self) -> String {
        UrlAssembler::default().post_request(self)
    }

    fn post_request_parameters(&self) -> BTreeMap<String, String> {
        UrlAssembler::default().post_request_parameters(self)
    }
}

/// Generic chart of any type, built from registered sources.
pub struct ChartSpec {
    chart_type: ChartType,
    size: ChartSize,
    sources: Vec<Box<dyn FeatureSource>>,
}

impl ChartSpec {
    pub fn new(chart_type: ChartType, dimension: Dimension) -> Self {
        Self::with_size(chart_type, dimension.into())
    }

    pub fn with_size(chart_type: ChartType, size: ChartSize) -> Self {
        Self {
            chart_type,
            size,
            sources: Vec::new(),
        }
    }

    /// Height-only chart; the service derives the width.
    pub fn with_height(chart_type: ChartType, height: u32) -> Result<Self> {
        Ok(Self::with_size(chart_type, ChartSize::height(height)?))
    }

    /// No `chs` parameter. Some chart types need an explicit size.
    pub fn auto_sized(chart_type: ChartType) -> Self {
        Self::with_size(chart_type, ChartSize::Auto)
    }

    pub fn register(&mut self, source: impl FeatureSource + 'static) -> &mut Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    pub fn set_size(&mut self, size: ChartSize) {
        self.size = size;
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl fmt::Debug for ChartSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartSpec")
            .field("chart_type", &self.chart_type)
            .field("size", &self.size)
            .field("sources", &self.sources.len())
            .finish()
    }
}

impl Chart for ChartSpec {
    fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    fn size(&self) -> ChartSize {
        self.size
    }

    fn feature_sources(&self) -> Vec<&dyn FeatureSource> {
        self.sources.iter().map(|s| s.as_ref() as &dyn FeatureSource).collect()
    }
}
