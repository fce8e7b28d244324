use super::ChartColor;
use crate::error::{ChartError, Result};
use crate::features::{AppendableFeature, FeatureSource};
use crate::data_types::ChartTypeFeature;
use serde::{Deserialize, Serialize};

/// One slice of a pie chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieChartSlice {
    pub value: f64,
    pub label: Option<String>,
    pub color: Option<ChartColor>,
}

impl PieChartSlice {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            label: None,
            color: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Value range the service maps text-encoded data onto (`chds`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScaling")]
pub struct DataScalingSet {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawScaling {
    min: f64,
    max: f64,
}

impl TryFrom<RawScaling> for DataScalingSet {
    type Error = ChartError;

    fn try_from(raw: RawScaling) -> Result<Self> {
        DataScalingSet::new(raw.min, raw.max)
    }
}

impl DataScalingSet {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidArgument(
                "data scaling bounds must be finite".to_string(),
            ));
        }
        if min >= max {
            return Err(ChartError::InvalidArgument(format!(
                "data scaling min ({min}) must be below max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

/// Arrow of a Google-o-meter, labelled at its tip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoogleOMeterValue {
    pub label: String,
    pub value: f64,
}

impl GoogleOMeterValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Chart title (`chtt`) with optional style (`chts`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartTitle {
    text: String,
    color: Option<ChartColor>,
    font_size: Option<u32>,
}

impl ChartTitle {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            font_size: None,
        }
    }

    pub fn color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl FeatureSource for ChartTitle {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        let mut features = Vec::with_capacity(2);
        if !self.text.is_empty() {
            // the service reads '+' as a space and '|' as a line break
            let text = self.text.replace(' ', "+").replace('\n', "|");
            features.push(AppendableFeature::of(ChartTypeFeature::ChartTitle, text));
        }
        if self.color.is_some() || self.font_size.is_some() {
            let color = self.color.unwrap_or(ChartColor::BLACK).hex();
            let style = match self.font_size {
                Some(size) => format!("{color},{size}"),
                None => color,
            };
            features.push(AppendableFeature::of(ChartTypeFeature::ChartTitleStyle, style));
        }
        features
    }
}
