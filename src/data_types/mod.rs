pub mod chart_type;
pub mod color;
pub mod dimension;
pub mod values;

pub use chart_type::*;
pub use color::*;
pub use dimension::*;
pub use values::*;
