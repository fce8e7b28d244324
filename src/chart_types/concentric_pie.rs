use crate::appenders::{ConcentricSliceAppender, GenericAppender};
use crate::chart::Chart;
use crate::coder::{AutoEncoder, Encoder, PercentageEncoder};
use crate::data_types::{ChartColor, ChartSize, ChartTitle, ChartType, ChartTypeFeature, PieChartSlice};
use crate::features::FeatureSource;

/// Concentric pie chart (`pc`): one ring per slice list, innermost first.
#[derive(Debug)]
pub struct ConcentricPieChart {
    size: ChartSize,
    rings: ConcentricSliceAppender,
    chart_colors: GenericAppender<ChartColor>,
    title: Option<ChartTitle>,
}

impl ConcentricPieChart {
    pub fn new(size: impl Into<ChartSize>) -> Self {
        Self {
            size: size.into(),
            rings: ConcentricSliceAppender::new(),
            chart_colors: GenericAppender::new(ChartTypeFeature::ChartColor),
            title: None,
        }
    }

    pub fn add_ring(&mut self, slices: Vec<PieChartSlice>) {
        self.rings.add_ring(slices);
    }

    pub fn remove_ring(&mut self, index: usize) -> Option<Vec<PieChartSlice>> {
        self.rings.remove_ring(index)
    }

    pub fn remove_all_rings(&mut self) {
        self.rings.remove_all();
    }

    pub fn rings(&self) -> &[Vec<PieChartSlice>] {
        self.rings.rings()
    }

    pub fn set_percentage_scaling(&mut self, enabled: bool) {
        if enabled {
            self.rings.set_encoder(Box::new(PercentageEncoder));
        } else {
            self.rings.set_encoder(Box::new(AutoEncoder));
        }
    }

    pub fn encoder(&self) -> &dyn Encoder {
        self.rings.encoder()
    }

    pub fn set_encoder(&mut self, encoder: impl Encoder + 'static) {
        self.rings.set_encoder(Box::new(encoder));
    }

    pub fn remove_encoder(&mut self) {
        self.rings.remove_encoder();
    }

    pub fn add_chart_color(&mut self, color: ChartColor) {
        self.chart_colors.add(color);
    }

    pub fn chart_colors(&self) -> &[ChartColor] {
        self.chart_colors.list()
    }

    pub fn remove_all_chart_colors(&mut self) {
        self.chart_colors.remove_all();
    }

    pub fn set_title(&mut self, title: ChartTitle) {
        self.title = Some(title);
    }

    pub fn remove_title(&mut self) {
        self.title = None;
    }
}

impl Chart for ConcentricPieChart {
    fn chart_type(&self) -> ChartType {
        ChartType::ConcentricPieChart
    }

    fn size(&self) -> ChartSize {
        self.size
    }

    fn feature_sources(&self) -> Vec<&dyn FeatureSource> {
        vec![
            &self.rings as &dyn FeatureSource,
            &self.chart_colors as &dyn FeatureSource,
            &self.title as &dyn FeatureSource,
        ]
    }
}
