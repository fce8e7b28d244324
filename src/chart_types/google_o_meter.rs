use crate::appenders::GenericAppender;
use crate::chart::Chart;
use crate::coder::{Encoder, TextEncoder};
use crate::data_types::{
    ChartColor, ChartSize, ChartTitle, ChartType, ChartTypeFeature, GoogleOMeterValue,
};
use crate::features::{AppendableFeature, FeatureSource};

/// Arrows of a Google-o-meter with their encoder.
#[derive(Debug)]
struct MeterValues {
    values: Vec<GoogleOMeterValue>,
    encoder: Box<dyn Encoder>,
}

impl FeatureSource for MeterValues {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        if self.values.is_empty() {
            return vec![];
        }
        let data: Vec<f64> = self.values.iter().map(|v| v.value).collect();
        let mut features = vec![AppendableFeature::of(
            ChartTypeFeature::ChartData,
            self.encoder.encode_floats(&data),
        )];
        if self.values.iter().any(|v| !v.label.is_empty()) {
            let labels = self
                .values
                .iter()
                .map(|v| v.label.as_str())
                .collect::<Vec<_>>()
                .join("|");
            features.push(AppendableFeature::of(ChartTypeFeature::ChartLabel, labels));
        }
        features
    }
}

/// Gauge chart (`gom`). Values default to text encoding on a 0..=100 scale.
#[derive(Debug)]
pub struct GoogleOMeter {
    size: ChartSize,
    values: MeterValues,
    colors: GenericAppender<ChartColor>,
    title: Option<ChartTitle>,
}

impl GoogleOMeter {
    pub fn new(size: impl Into<ChartSize>) -> Self {
        Self {
            size: size.into(),
            values: MeterValues {
                values: Vec::new(),
                encoder: Box::new(TextEncoder),
            },
            colors: GenericAppender::new(ChartTypeFeature::ChartColor),
            title: None,
        }
    }

    pub fn add_value(&mut self, value: GoogleOMeterValue) {
        self.values.values.push(value);
    }

    pub fn remove_value(&mut self, index: usize) -> Option<GoogleOMeterValue> {
        let values = &mut self.values.values;
        (index < values.len()).then(|| values.remove(index))
    }

    pub fn remove_all_values(&mut self) {
        self.values.values.clear();
    }

    pub fn values(&self) -> &[GoogleOMeterValue] {
        &self.values.values
    }

    pub fn encoder(&self) -> &dyn Encoder {
        self.values.encoder.as_ref()
    }

    pub fn set_encoder(&mut self, encoder: impl Encoder + 'static) {
        self.values.encoder = Box::new(encoder);
    }

    /// Back to [`TextEncoder`].
    pub fn remove_encoder(&mut self) {
        self.values.encoder = Box::new(TextEncoder);
    }

    /// Adds a stop of the dial's color gradient.
    pub fn add_color(&mut self, color: ChartColor) {
        self.colors.add(color);
    }

    pub fn colors(&self) -> &[ChartColor] {
        self.colors.list()
    }

    pub fn remove_all_colors(&mut self) {
        self.colors.remove_all();
    }

    pub fn set_title(&mut self, title: ChartTitle) {
        self.title = Some(title);
    }

    pub fn remove_title(&mut self) {
        self.title = None;
    }
}

impl Chart for GoogleOMeter {
    fn chart_type(&self) -> ChartType {
        ChartType::GoogleOMeter
    }

    fn size(&self) -> ChartSize {
        self.size
    }

    fn feature_sources(&self) -> Vec<&dyn FeatureSource> {
        vec![
            &self.values as &dyn FeatureSource,
            &self.colors as &dyn FeatureSource,
            &self.title as &dyn FeatureSource,
        ]
    }
}
