use serde::{Deserialize, Serialize};

/// Chart kinds understood by the service, by their `cht` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    LineChart,
    XyLineChart,
    Sparkline,
    BarHorizontalStacked,
    BarVerticalStacked,
    BarHorizontalGrouped,
    BarVerticalGrouped,
    PieChart,
    PieChart3d,
    ConcentricPieChart,
    VennDiagram,
    ScatterPlot,
    RadarChart,
    MapChart,
    GoogleOMeter,
    QrCode,
}

impl ChartType {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::LineChart => "lc",
            Self::XyLineChart => "lxy",
            Self::Sparkline => "ls",
            Self::BarHorizontalStacked => "bhs",
            Self::BarVerticalStacked => "bvs",
            Self::BarHorizontalGrouped => "bhg",
            Self::BarVerticalGrouped => "bvg",
            Self::PieChart => "p",
            Self::PieChart3d => "p3",
            Self::ConcentricPieChart => "pc",
            Self::VennDiagram => "v",
            Self::ScatterPlot => "s",
            Self::RadarChart => "r",
            Self::MapChart => "t",
            Self::GoogleOMeter => "gom",
            Self::QrCode => "qr",
        }
    }
}

/// Parameter families a chart feature can contribute to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartTypeFeature {
    ChartData,
    ChartColor,
    DataScaling,
    ChartLabel,
    ChartTitle,
    ChartTitleStyle,
    ChartLegend,
    ChartMarker,
    FillArea,
    AxisType,
    AxisLabel,
    AxisRange,
    AxisStyle,
    BarWidth,
    LineStyle,
    GridLine,
    PieOrientation,
    ChartMargin,
}

impl ChartTypeFeature {
    pub const ALL: [ChartTypeFeature; 18] = [
        Self::ChartData,
        Self::ChartColor,
        Self::DataScaling,
        Self::ChartLabel,
        Self::ChartTitle,
        Self::ChartTitleStyle,
        Self::ChartLegend,
        Self::ChartMarker,
        Self::FillArea,
        Self::AxisType,
        Self::AxisLabel,
        Self::AxisRange,
        Self::AxisStyle,
        Self::BarWidth,
        Self::LineStyle,
        Self::GridLine,
        Self::PieOrientation,
        Self::ChartMargin,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            Self::ChartData => "chd",
            Self::ChartColor => "chco",
            Self::DataScaling => "chds",
            Self::ChartLabel => "chl",
            Self::ChartTitle => "chtt",
            Self::ChartTitleStyle => "chts",
            Self::ChartLegend => "chdl",
            Self::ChartMarker => "chm",
            Self::FillArea => "chf",
            Self::AxisType => "chxt",
            Self::AxisLabel => "chxl",
            Self::AxisRange => "chxr",
            Self::AxisStyle => "chxs",
            Self::BarWidth => "chbh",
            Self::LineStyle => "chls",
            Self::GridLine => "chg",
            Self::PieOrientation => "chp",
            Self::ChartMargin => "chma",
        }
    }

    /// Separator between fragments of this family inside one group.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::ChartColor | Self::DataScaling | Self::AxisType => ",",
            _ => "|",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.prefix() == prefix)
    }
}

/// Image format requested through `chof`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Png,
    Gif,
    Json,
    Validate,
}

impl OutputFormat {
    pub fn parameter(&self) -> String {
        let name = match self {
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Json => "json",
            Self::Validate => "validate",
        };
        format!("chof={name}")
    }
}
