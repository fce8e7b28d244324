// Chart kinds with dedicated setters

pub mod concentric_pie;
pub mod google_o_meter;
pub mod pie;

pub use concentric_pie::ConcentricPieChart;
pub use google_o_meter::GoogleOMeter;
pub use pie::PieChart;
