//! Semantic layout keywords.
//!
//! Every keyword enum is closed and parsed by a total function: an unrecognised key maps to
//! the enum's fallback variant instead of failing deserialization.

/// Named rectangle of the canvas, expressed as a fixed fraction of its size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Region {
    #[default]
    Full,
    TopHalf,
    BottomHalf,
    LeftHalf,
    RightHalf,
    LeftThird,
    CenterThird,
    RightThird,
    TopThird,
    MiddleThird,
    BottomThird,
    Center,
    MainContent,
    TopBanner,
    BottomBanner,
}

impl Region {
    pub const ALL: [Region; 15] = [
        Region::Full,
        Region::TopHalf,
        Region::BottomHalf,
        Region::LeftHalf,
        Region::RightHalf,
        Region::LeftThird,
        Region::CenterThird,
        Region::RightThird,
        Region::TopThird,
        Region::MiddleThird,
        Region::BottomThird,
        Region::Center,
        Region::MainContent,
        Region::TopBanner,
        Region::BottomBanner,
    ];

    /// Parse a region key; unknown keys resolve to [`Region::Full`].
    pub fn parse(key: &str) -> Self {
        match key {
            "full" => Self::Full,
            "top-half" => Self::TopHalf,
            "bottom-half" => Self::BottomHalf,
            "left-half" => Self::LeftHalf,
            "right-half" => Self::RightHalf,
            "left-third" => Self::LeftThird,
            "center-third" => Self::CenterThird,
            "right-third" => Self::RightThird,
            "top-third" => Self::TopThird,
            "middle-third" => Self::MiddleThird,
            "bottom-third" => Self::BottomThird,
            "center" => Self::Center,
            "main-content" => Self::MainContent,
            "top-banner" => Self::TopBanner,
            "bottom-banner" => Self::BottomBanner,
            other => {
                tracing::debug!(region = other, "unknown region, using full canvas");
                Self::Full
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::TopHalf => "top-half",
            Self::BottomHalf => "bottom-half",
            Self::LeftHalf => "left-half",
            Self::RightHalf => "right-half",
            Self::LeftThird => "left-third",
            Self::CenterThird => "center-third",
            Self::RightThird => "right-third",
            Self::TopThird => "top-third",
            Self::MiddleThird => "middle-third",
            Self::BottomThird => "bottom-third",
            Self::Center => "center",
            Self::MainContent => "main-content",
            Self::TopBanner => "top-banner",
            Self::BottomBanner => "bottom-banner",
        }
    }
}

/// One of nine semantic anchor points inside a bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Position {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 9] = [
        Position::Center,
        Position::Top,
        Position::Bottom,
        Position::Left,
        Position::Right,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Parse a position key; unknown keys resolve to [`Position::Center`].
    pub fn parse(key: &str) -> Self {
        match key {
            "center" => Self::Center,
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            "top-left" => Self::TopLeft,
            "top-right" => Self::TopRight,
            "bottom-left" => Self::BottomLeft,
            "bottom-right" => Self::BottomRight,
            other => {
                tracing::debug!(position = other, "unknown position, using center");
                Self::Center
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

/// Semantic size hint mapped to a fraction of the target region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SizeHint {
    Tiny,
    Small,
    Medium,
    Large,
    Xl,
    Fill,
    #[default]
    Auto,
}

impl SizeHint {
    pub fn parse(key: &str) -> Self {
        match key {
            "tiny" => Self::Tiny,
            "small" => Self::Small,
            "medium" => Self::Medium,
            "large" => Self::Large,
            "xl" => Self::Xl,
            "fill" => Self::Fill,
            _ => Self::Auto,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Xl => "xl",
            Self::Fill => "fill",
            Self::Auto => "auto",
        }
    }

    /// Fraction of the region's width and height an element may occupy.
    pub fn area_ratio(self) -> f64 {
        match self {
            Self::Tiny => 0.10,
            Self::Small => 0.20,
            Self::Medium => 0.35,
            Self::Large => 0.50,
            Self::Xl => 0.70,
            Self::Fill => 0.90,
            Self::Auto => 0.35,
        }
    }
}

/// Main axis of a flex group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Direction {
    #[default]
    Row,
    Column,
}

impl Direction {
    /// Only `row` selects a horizontal main axis; every other key is a column.
    pub fn parse(key: &str) -> Self {
        if key == "row" { Self::Row } else { Self::Column }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

/// Main-axis distribution of group items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Justify {
    Start,
    End,
    #[default]
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl Justify {
    pub fn parse(key: &str) -> Self {
        match key {
            "start" => Self::Start,
            "end" => Self::End,
            "space-between" => Self::SpaceBetween,
            "space-around" => Self::SpaceAround,
            "space-evenly" => Self::SpaceEvenly,
            _ => Self::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::SpaceBetween => "space-between",
            Self::SpaceAround => "space-around",
            Self::SpaceEvenly => "space-evenly",
        }
    }
}

/// Cross-axis alignment of group items.
///
/// `Stretch` is positioned exactly like `Center`; items are never resized to the cross axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Align {
    Start,
    End,
    #[default]
    Center,
    Stretch,
}

impl Align {
    pub fn parse(key: &str) -> Self {
        match key {
            "start" => Self::Start,
            "end" => Self::End,
            "stretch" => Self::Stretch,
            _ => Self::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Center => "center",
            Self::Stretch => "stretch",
        }
    }
}

/// Policy for deriving group item sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Sizing {
    /// One shared size fitted to the average aspect ratio.
    #[default]
    Uniform,
    /// One shared scale factor applied to every intrinsic size.
    Intrinsic,
    /// Equal main-axis shares, each item keeping its own aspect ratio.
    Fill,
}

impl Sizing {
    /// Unknown keys fall through to [`Sizing::Fill`]; an absent key means [`Sizing::Uniform`].
    pub fn parse(key: &str) -> Self {
        match key {
            "uniform" => Self::Uniform,
            "intrinsic" => Self::Intrinsic,
            _ => Self::Fill,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Intrinsic => "intrinsic",
            Self::Fill => "fill",
        }
    }
}

impl From<String> for Region {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Region> for &'static str {
    fn from(value: Region) -> Self {
        value.as_str()
    }
}

impl From<String> for Position {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Position> for &'static str {
    fn from(value: Position) -> Self {
        value.as_str()
    }
}

impl From<String> for SizeHint {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SizeHint> for &'static str {
    fn from(value: SizeHint) -> Self {
        value.as_str()
    }
}

impl From<String> for Direction {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Direction> for &'static str {
    fn from(value: Direction) -> Self {
        value.as_str()
    }
}

impl From<String> for Justify {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Justify> for &'static str {
    fn from(value: Justify) -> Self {
        value.as_str()
    }
}

impl From<String> for Align {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Align> for &'static str {
    fn from(value: Align) -> Self {
        value.as_str()
    }
}

impl From<String> for Sizing {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Sizing> for &'static str {
    fn from(value: Sizing) -> Self {
        value.as_str()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/keywords.rs"]
mod tests;
