use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// Largest width or height accepted by the service, in pixels.
pub const MAX_SIDE: u32 = 1000;
/// Largest width x height accepted by the service, in pixels.
pub const MAX_AREA: u32 = 300_000;

/// Validated chart size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimension")]
pub struct Dimension {
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct RawDimension {
    width: u32,
    height: u32,
}

impl TryFrom<RawDimension> for Dimension {
    type Error = ChartError;

    fn try_from(raw: RawDimension) -> Result<Self> {
        Dimension::new(raw.width, raw.height)
    }
}

impl Dimension {
    /// Zero sides are accepted; only the upper bounds are enforced.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_upper("width", width)?;
        check_upper("height", height)?;
        if width * height > MAX_AREA {
            return Err(ChartError::InvalidDimension(format!(
                "the largest possible area can not be > {MAX_AREA} (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

fn check_upper(name: &str, value: u32) -> Result<()> {
    if value > MAX_SIDE {
        return Err(ChartError::InvalidDimension(format!(
            "{name} can not be > {MAX_SIDE} (got {value})"
        )));
    }
    Ok(())
}

/// Validated height of a height-only chart size, in `1..=MAX_SIDE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Height(u32);

impl Height {
    pub fn new(height: u32) -> Result<Self> {
        if height == 0 {
            return Err(ChartError::InvalidDimension(
                "height must be > 0".to_string(),
            ));
        }
        check_upper("height", height)?;
        Ok(Self(height))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Height {
    type Error = ChartError;

    fn try_from(height: u32) -> Result<Self> {
        Height::new(height)
    }
}

impl From<Height> for u32 {
    fn from(height: Height) -> Self {
        height.0
    }
}

/// How the chart size is sent to the service.
///
/// Both sized variants hold validated values, so an out-of-range size can
/// not be built or deserialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartSize {
    /// No `chs` parameter; the service decides.
    #[default]
    Auto,
    /// Height only, rendered as `chs=<height>`.
    Height(Height),
    /// Rendered as `chs=<width>x<height>`.
    Dimension(Dimension),
}

impl ChartSize {
    pub fn height(height: u32) -> Result<Self> {
        Ok(Self::Height(Height::new(height)?))
    }

    /// Payload of the `chs` parameter, if any.
    pub fn fragment(&self) -> Option<String> {
        match self {
            Self::Auto => None,
            Self::Height(h) => Some(h.get().to_string()),
            Self::Dimension(d) => Some(format!("{}x{}", d.width, d.height)),
        }
    }
}

impl From<Dimension> for ChartSize {
    fn from(dimension: Dimension) -> Self {
        Self::Dimension(dimension)
    }
}

impl From<Height> for ChartSize {
    fn from(height: Height) -> Self {
        Self::Height(height)
    }
}
