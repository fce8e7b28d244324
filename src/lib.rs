//! chart_url crate for building chart service URLs

pub mod appenders;
pub mod assembler;
pub mod chart;
pub mod chart_types;
pub mod coder;
pub mod data_types;
pub mod error;
pub mod features;

pub use assembler::{ApiConfig, UrlAssembler};
pub use chart::{Chart, ChartSpec};
pub use chart_types::{ConcentricPieChart, GoogleOMeter, PieChart};
pub use coder::{Encoder, EncodingType};
pub use data_types::{
    ChartColor, ChartSize, ChartTitle, ChartType, Dimension, GoogleOMeterValue, OutputFormat,
    PieChartSlice,
};
pub use error::{ChartError, Result};
pub use features::{AppendableFeature, FeatureSource};
