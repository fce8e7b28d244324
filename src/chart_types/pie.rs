use crate::appenders::{
    GenericAppender, PieChartSliceAppender, UpperLimitGenericAppender, UpperLimitReaction,
};
use crate::chart::Chart;
use crate::coder::{AutoEncoder, DataScalingTextEncoder, Encoder, PercentageEncoder};
use crate::data_types::{
    ChartColor, ChartSize, ChartTitle, ChartType, ChartTypeFeature, DataScalingSet, PieChartSlice,
};
use crate::features::FeatureSource;
use std::num::NonZeroUsize;

/// Pie chart (`p`), optionally drawn in 3D (`p3`).
///
/// ```
/// use chart_url::{Chart, ChartColor, Dimension, PieChart, PieChartSlice};
///
/// let mut chart = PieChart::new(Dimension::new(400, 180)?);
/// chart.add_slice(PieChartSlice::new(80.0).label("USA").color(ChartColor::BLUE));
/// assert!(chart.url().contains("cht=p&chs=400x180"));
/// # Ok::<(), chart_url::ChartError>(())
/// ```
#[derive(Debug)]
pub struct PieChart {
    size: ChartSize,
    three_d: bool,
    slices: PieChartSliceAppender,
    chart_colors: GenericAppender<ChartColor>,
    data_scaling: UpperLimitGenericAppender<DataScalingSet>,
    title: Option<ChartTitle>,
}

impl PieChart {
    pub fn new(size: impl Into<ChartSize>) -> Self {
        Self {
            size: size.into(),
            three_d: false,
            slices: PieChartSliceAppender::new(),
            chart_colors: GenericAppender::new(ChartTypeFeature::ChartColor),
            data_scaling: UpperLimitGenericAppender::new(
                ChartTypeFeature::DataScaling,
                NonZeroUsize::MIN,
                UpperLimitReaction::RemoveFirst,
            ),
            title: None,
        }
    }

    pub fn with_slices(size: impl Into<ChartSize>, slices: impl IntoIterator<Item = PieChartSlice>) -> Self {
        let mut chart = Self::new(size);
        chart.slices.add_all(slices);
        chart
    }

    pub fn add_slice(&mut self, slice: PieChartSlice) {
        self.slices.add(slice);
    }

    pub fn add_slices(&mut self, slices: impl IntoIterator<Item = PieChartSlice>) {
        self.slices.add_all(slices);
    }

    pub fn remove_slice(&mut self, index: usize) -> Option<PieChartSlice> {
        self.slices.remove(index)
    }

    pub fn remove_slice_value(&mut self, slice: &PieChartSlice) -> bool {
        self.slices.remove_slice(slice)
    }

    pub fn remove_all_slices(&mut self) {
        self.slices.remove_all();
    }

    pub fn slices(&self) -> &[PieChartSlice] {
        self.slices.list()
    }

    pub fn is_3d(&self) -> bool {
        self.three_d
    }

    pub fn set_3d(&mut self, three_d: bool) {
        self.three_d = three_d;
    }

    /// Sends slice values as percentages of their sum.
    pub fn set_percentage_scaling(&mut self, enabled: bool) {
        if enabled {
            self.slices.set_encoder(Box::new(PercentageEncoder));
        } else {
            self.slices.set_encoder(Box::new(AutoEncoder));
        }
    }

    pub fn encoder(&self) -> &dyn Encoder {
        self.slices.encoder()
    }

    pub fn set_encoder(&mut self, encoder: impl Encoder + 'static) {
        self.slices.set_encoder(Box::new(encoder));
    }

    pub fn remove_encoder(&mut self) {
        self.slices.remove_encoder();
    }

    pub fn add_chart_color(&mut self, color: ChartColor) {
        self.chart_colors.add(color);
    }

    pub fn chart_colors(&self) -> &[ChartColor] {
        self.chart_colors.list()
    }

    pub fn remove_chart_color(&mut self, index: usize) -> Option<ChartColor> {
        self.chart_colors.remove(index)
    }

    pub fn remove_chart_color_value(&mut self, color: &ChartColor) -> bool {
        self.chart_colors.remove_value(color)
    }

    pub fn remove_all_chart_colors(&mut self) {
        self.chart_colors.remove_all();
    }

    /// Replaces any previous scaling and switches slices to raw text encoding.
    pub fn set_data_scaling(&mut self, scaling: DataScalingSet) {
        self.data_scaling.replace(scaling);
        self.slices.set_encoder(Box::new(DataScalingTextEncoder));
    }

    pub fn data_scaling(&self) -> Option<&DataScalingSet> {
        self.data_scaling.list().first()
    }

    pub fn remove_data_scaling(&mut self) {
        self.data_scaling.remove_all();
        self.slices.set_encoder(Box::new(AutoEncoder));
    }

    pub fn set_title(&mut self, title: ChartTitle) {
        self.title = Some(title);
    }

    pub fn title(&self) -> Option<&ChartTitle> {
        self.title.as_ref()
    }

    pub fn remove_title(&mut self) {
        self.title = None;
    }
}

impl Chart for PieChart {
    fn chart_type(&self) -> ChartType {
        if self.three_d {
            ChartType::PieChart3d
        } else {
            ChartType::PieChart
        }
    }

    fn size(&self) -> ChartSize {
        self.size
    }

    fn feature_sources(&self) -> Vec<&dyn FeatureSource> {
        vec![
            &self.slices as &dyn FeatureSource,
            &self.chart_colors as &dyn FeatureSource,
            &self.data_scaling as &dyn FeatureSource,
            &self.title as &dyn FeatureSource,
        ]
    }
}
