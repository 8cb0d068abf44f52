use derive_more::Display;
use serde::{Serialize, Serializer};
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - chart type understood by the host charting capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, AsRefStr)]
pub enum ChartKind {
    #[display(fmt = "Bar")]
    #[strum(serialize = "bar")]
    Bar,
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Radar")]
    #[strum(serialize = "radar")]
    Radar,
}

impl Serialize for ChartKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

/// Value Object - CSS color, serialized in `rgba(r, g, b, a)` form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(&self, alpha: f32) -> Self {
        Self { r: self.r, g: self.g, b: self.b, a: alpha }
    }

    /// Brand accent used across the deck's charts
    pub const ACCENT_GREEN: Rgba = Rgba::new(118, 185, 0);
    /// Secondary series color
    pub const STEEL_BLUE: Rgba = Rgba::new(0, 112, 192);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255);
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How a chart's per-point tooltip text is produced. Declared in the domain,
/// turned into a host-side callback by the charting adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipFormat {
    CurrencyBillions,
    ScoreOutOf100,
}

impl TooltipFormat {
    pub fn label_for_point(&self, series_label: &str, value: f64) -> String {
        match self {
            TooltipFormat::CurrencyBillions => format!("${value}B"),
            TooltipFormat::ScoreOutOf100 => format!("{series_label}: {value}/100"),
        }
    }
}

/// Fill/stroke paint: one color for a whole series, or one per data point
/// (the cash chart shades its projected bar differently).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Uniform(Rgba),
    PerPoint(Vec<Rgba>),
}

/// Complete chart configuration in the shape the host `Chart(ctx, config)`
/// constructor expects once serialized.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub scales: Scales,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<LinearAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<LinearAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<RadialAxis>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: GridStyle,
    pub ticks: TickStyle,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialAxis {
    pub angle_lines: GridStyle,
    pub grid: GridStyle,
    pub point_labels: PointLabelStyle,
    pub ticks: TickStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridStyle {
    pub color: Rgba,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickStyle {
    pub color: Rgba,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_label_backdrop: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointLabelStyle {
    pub color: Rgba,
    pub font: FontStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct FontStyle {
    pub size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plugins {
    pub legend: LegendStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendStyle {
    pub labels: LegendLabelStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendLabelStyle {
    pub color: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_renders_css_notation() {
        assert_eq!(Rgba::ACCENT_GREEN.to_string(), "rgba(118, 185, 0, 1)");
        assert_eq!(Rgba::ACCENT_GREEN.with_alpha(0.6).to_string(), "rgba(118, 185, 0, 0.6)");
        assert_eq!(Rgba::WHITE.with_alpha(0.1).to_string(), "rgba(255, 255, 255, 0.1)");
    }

    #[test]
    fn chart_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ChartKind::Bar).unwrap(), "bar");
        assert_eq!(serde_json::to_value(ChartKind::Radar).unwrap(), "radar");
    }

    #[test]
    fn currency_tooltip_drops_trailing_zero() {
        let fmt = TooltipFormat::CurrencyBillions;
        assert_eq!(fmt.label_for_point("Revenue", 130.0), "$130B");
        assert_eq!(fmt.label_for_point("Revenue", 167.2), "$167.2B");
    }

    #[test]
    fn score_tooltip_includes_series_label() {
        let fmt = TooltipFormat::ScoreOutOf100;
        assert_eq!(fmt.label_for_point("2024", 85.0), "2024: 85/100");
    }
}
