use crate::coder::{AutoEncoder, Encoder, EncodingType};
use crate::data_types::{ChartTypeFeature, PieChartSlice};
use crate::features::{AppendableFeature, FeatureSource};

/// Slices of a pie chart: values, labels and per-slice colors.
#[derive(Debug)]
pub struct PieChartSliceAppender {
    slices: Vec<PieChartSlice>,
    encoder: Box<dyn Encoder>,
}

impl Default for PieChartSliceAppender {
    fn default() -> Self {
        Self {
            slices: Vec::new(),
            encoder: Box::new(AutoEncoder),
        }
    }
}

impl PieChartSliceAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, slice: PieChartSlice) {
        self.slices.push(slice);
    }

    pub fn add_all(&mut self, slices: impl IntoIterator<Item = PieChartSlice>) {
        self.slices.extend(slices);
    }

    pub fn remove(&mut self, index: usize) -> Option<PieChartSlice> {
        (index < self.slices.len()).then(|| self.slices.remove(index))
    }

    pub fn remove_slice(&mut self, slice: &PieChartSlice) -> bool {
        match self.slices.iter().position(|s| s == slice) {
            Some(idx) => {
                self.slices.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn remove_all(&mut self) {
        self.slices.clear();
    }

    pub fn list(&self) -> &[PieChartSlice] {
        &self.slices
    }

    pub fn encoder(&self) -> &dyn Encoder {
        self.encoder.as_ref()
    }

    pub fn set_encoder(&mut self, encoder: Box<dyn Encoder>) {
        self.encoder = encoder;
    }

    /// Falls back to [`AutoEncoder`].
    pub fn remove_encoder(&mut self) {
        self.encoder = Box::new(AutoEncoder);
    }
}

impl FeatureSource for PieChartSliceAppender {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        if self.slices.is_empty() {
            return vec![];
        }
        let values: Vec<f64> = self.slices.iter().map(|s| s.value).collect();
        let mut features = vec![AppendableFeature::of(
            ChartTypeFeature::ChartData,
            self.encoder.encode_floats(&values),
        )];
        features.extend(labels_feature(&self.slices));
        if let Some(colors) = colors_feature(&self.slices) {
            features.push(AppendableFeature::of(ChartTypeFeature::ChartColor, colors));
        }
        features
    }
}

/// Rings of a concentric pie chart, innermost first.
///
/// All rings are encoded in one call so they share one encoding.
#[derive(Debug)]
pub struct ConcentricSliceAppender {
    rings: Vec<Vec<PieChartSlice>>,
    encoder: Box<dyn Encoder>,
}

/// Separator between rings in `chco`, and in `chd` for simple/extended data.
pub const RING_SEPARATOR: &str = ",";
/// Separator between rings in `chd` for the text family, whose values are
/// already comma separated.
pub const TEXT_RING_SEPARATOR: &str = "|";

/// Ring separator in `chd` that stays distinct from the value separator.
pub fn ring_separator(encoding: EncodingType) -> &'static str {
    match encoding {
        EncodingType::Simple | EncodingType::Extended => RING_SEPARATOR,
        EncodingType::Text | EncodingType::Percentage | EncodingType::DataScalingText => {
            TEXT_RING_SEPARATOR
        }
    }
}

impl Default for ConcentricSliceAppender {
    fn default() -> Self {
        Self {
            rings: Vec::new(),
            encoder: Box::new(AutoEncoder),
        }
    }
}

impl ConcentricSliceAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_ring(&mut self, slices: Vec<PieChartSlice>) {
        self.rings.push(slices);
    }

    pub fn remove_ring(&mut self, index: usize) -> Option<Vec<PieChartSlice>> {
        (index < self.rings.len()).then(|| self.rings.remove(index))
    }

    pub fn remove_all(&mut self) {
        self.rings.clear();
    }

    pub fn rings(&self) -> &[Vec<PieChartSlice>] {
        &self.rings
    }

    pub fn encoder(&self) -> &dyn Encoder {
        self.encoder.as_ref()
    }

    pub fn set_encoder(&mut self, encoder: Box<dyn Encoder>) {
        self.encoder = encoder;
    }

    pub fn remove_encoder(&mut self) {
        self.encoder = Box::new(AutoEncoder);
    }
}

impl FeatureSource for ConcentricSliceAppender {
    fn appendable_features(&self) -> Vec<AppendableFeature> {
        let datasets: Vec<Vec<f64>> = self
            .rings
            .iter()
            .map(|ring| ring.iter().map(|s| s.value).collect())
            .collect();
        let views: Vec<&[f64]> = datasets.iter().map(Vec::as_slice).collect();
        let separator = ring_separator(self.encoder.encoding_for(&views));
        let data = self.encoder.encode_float_collection(&datasets, separator);
        if data.is_empty() {
            return vec![];
        }

        let mut features = vec![AppendableFeature::of(ChartTypeFeature::ChartData, data)];
        let all_slices: Vec<PieChartSlice> = self.rings.iter().flatten().cloned().collect();
        features.extend(labels_feature(&all_slices));

        let ring_colors: Option<Vec<String>> =
            self.rings.iter().map(|ring| colors_feature(ring)).collect();
        if let Some(ring_colors) = ring_colors {
            features.push(AppendableFeature::of(
                ChartTypeFeature::ChartColor,
                ring_colors.join(RING_SEPARATOR),
            ));
        }
        features
    }
}

/// `chl` with one entry per slice, emitted when any slice is labelled.
fn labels_feature(slices: &[PieChartSlice]) -> Option<AppendableFeature> {
    if slices.iter().all(|s| s.label.is_none()) {
        return None;
    }
    let labels = slices
        .iter()
        .map(|s| s.label.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join("|");
    Some(AppendableFeature::of(ChartTypeFeature::ChartLabel, labels))
}

/// Per-slice colors joined by `|`, or `None` unless every slice has a color.
///
/// A partially colored list is dropped whole: the service pairs colors with
/// slices by position, so a gap would shift every later color.
fn colors_feature(slices: &[PieChartSlice]) -> Option<String> {
    if slices.is_empty() {
        return None;
    }
    let colors: Option<Vec<String>> = slices.iter().map(|s| s.color.map(|c| c.hex())).collect();
    colors.map(|c| c.join("|"))
}
