use once_cell::sync::Lazy;

use super::datasets::*;
use super::value_objects::{
    ChartData, ChartKind, ChartOptions, ChartSpec, Dataset, FontStyle, GridStyle, LegendLabelStyle,
    LegendStyle, LinearAxis, Paint, PointLabelStyle, Plugins, RadialAxis, Rgba, Scales, TickStyle,
    TooltipFormat,
};

/// One chart-bearing slide: which slide triggers the build, which canvas the
/// chart binds to, and the full configuration.
///
/// Builders are pure and enforce no idempotence of their own; constructing
/// the same spec against the same canvas twice would stack two charts. The
/// slide deck's write-once flag is the only guard.
#[derive(Debug, Clone)]
pub struct SlideChart {
    pub slide_index: usize,
    pub container_id: &'static str,
    pub tooltip: TooltipFormat,
    pub spec: ChartSpec,
}

/// Slide-to-chart registry. Keyed by literal slide ordinal: reordering the
/// deck or inserting slides silently detaches these entries.
pub static SLIDE_CHARTS: Lazy<Vec<SlideChart>> = Lazy::new(|| {
    vec![
        SlideChart {
            slide_index: 2,
            container_id: "cashGrowthChart",
            tooltip: TooltipFormat::CurrencyBillions,
            spec: cash_growth_spec(),
        },
        SlideChart {
            slide_index: 3,
            container_id: "revenueGrowthChart",
            tooltip: TooltipFormat::CurrencyBillions,
            spec: revenue_growth_spec(),
        },
        SlideChart {
            slide_index: 4,
            container_id: "cashFlowChart",
            tooltip: TooltipFormat::CurrencyBillions,
            spec: cash_flow_spec(),
        },
        SlideChart {
            slide_index: 5,
            container_id: "performanceSummaryChart",
            tooltip: TooltipFormat::ScoreOutOf100,
            spec: performance_summary_spec(),
        },
    ]
});

pub fn chart_for_slide(slide_index: usize) -> Option<&'static SlideChart> {
    SLIDE_CHARTS.iter().find(|chart| chart.slide_index == slide_index)
}

/// Single-series bar chart of cash reserves; the projected bar is set apart
/// by a fainter fill.
pub fn cash_growth_spec() -> ChartSpec {
    let fills = CASH_BAR_ALPHAS.iter().map(|&a| Rgba::ACCENT_GREEN.with_alpha(a)).collect();
    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: fiscal_year_labels(),
            datasets: vec![Dataset {
                label: "Cash and Cash Equivalents (Billions USD)".to_string(),
                data: CASH_RESERVES_BILLIONS.to_vec(),
                background_color: Some(Paint::PerPoint(fills)),
                border_color: Some(Paint::PerPoint(vec![Rgba::ACCENT_GREEN; 4])),
                border_width: Some(1),
                ..Default::default()
            }],
        },
        options: cartesian_options(true),
    }
}

/// Smoothed, filled revenue line over the same four fiscal years. The y axis
/// is intentionally not zero-based so the slope reads at a glance.
pub fn revenue_growth_spec() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        data: ChartData {
            labels: fiscal_year_labels(),
            datasets: vec![Dataset {
                label: "Total Revenue (Billions USD)".to_string(),
                data: TOTAL_REVENUE_BILLIONS.to_vec(),
                background_color: Some(Paint::Uniform(Rgba::ACCENT_GREEN.with_alpha(0.2))),
                border_color: Some(Paint::Uniform(Rgba::ACCENT_GREEN)),
                border_width: Some(3),
                point_background_color: Some(Rgba::ACCENT_GREEN),
                point_border_color: Some("#fff".to_string()),
                point_radius: Some(6),
                point_hover_radius: Some(8),
                tension: Some(0.3),
                fill: Some(true),
            }],
        },
        options: cartesian_options(false),
    }
}

/// Operating vs. free cash flow, grouped bars with a shared legend.
pub fn cash_flow_spec() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: fiscal_year_labels(),
            datasets: vec![
                Dataset {
                    label: "Operating Cash Flow (Billions USD)".to_string(),
                    data: OPERATING_CASH_FLOW_BILLIONS.to_vec(),
                    background_color: Some(Paint::Uniform(Rgba::ACCENT_GREEN.with_alpha(0.7))),
                    border_color: Some(Paint::Uniform(Rgba::ACCENT_GREEN)),
                    border_width: Some(1),
                    ..Default::default()
                },
                Dataset {
                    label: "Free Cash Flow (Billions USD)".to_string(),
                    data: FREE_CASH_FLOW_BILLIONS.to_vec(),
                    background_color: Some(Paint::Uniform(Rgba::STEEL_BLUE.with_alpha(0.7))),
                    border_color: Some(Paint::Uniform(Rgba::STEEL_BLUE)),
                    border_width: Some(1),
                    ..Default::default()
                },
            ],
        },
        options: cartesian_options(true),
    }
}

/// Two-fiscal-year radar over six qualitative dimensions, 0-100 scale.
pub fn performance_summary_spec() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Radar,
        data: ChartData {
            labels: PERFORMANCE_DIMENSIONS.iter().map(|s| s.to_string()).collect(),
            datasets: vec![
                radar_dataset("2024", PERFORMANCE_FY2024.to_vec(), Rgba::ACCENT_GREEN),
                radar_dataset("2025", PERFORMANCE_FY2025.to_vec(), Rgba::STEEL_BLUE),
            ],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            scales: Scales {
                r: Some(RadialAxis {
                    angle_lines: grid_style(),
                    grid: grid_style(),
                    point_labels: PointLabelStyle {
                        color: Rgba::WHITE.with_alpha(0.7),
                        font: FontStyle { size: 14 },
                    },
                    ticks: TickStyle {
                        color: Rgba::WHITE.with_alpha(0.5),
                        backdrop_color: Some("transparent".to_string()),
                        show_label_backdrop: Some(false),
                    },
                }),
                ..Default::default()
            },
            plugins: default_plugins(),
        },
    }
}

fn radar_dataset(label: &str, data: Vec<f64>, color: Rgba) -> Dataset {
    Dataset {
        label: label.to_string(),
        data,
        background_color: Some(Paint::Uniform(color.with_alpha(0.2))),
        border_color: Some(Paint::Uniform(color.with_alpha(0.8))),
        border_width: Some(2),
        point_background_color: Some(color),
        point_border_color: Some("#fff".to_string()),
        ..Default::default()
    }
}

fn fiscal_year_labels() -> Vec<String> {
    FISCAL_YEARS.iter().map(|s| s.to_string()).collect()
}

fn grid_style() -> GridStyle {
    GridStyle { color: Rgba::WHITE.with_alpha(0.1) }
}

fn tick_style() -> TickStyle {
    TickStyle {
        color: Rgba::WHITE.with_alpha(0.7),
        backdrop_color: None,
        show_label_backdrop: None,
    }
}

fn default_plugins() -> Plugins {
    Plugins { legend: LegendStyle { labels: LegendLabelStyle { color: Rgba::WHITE.with_alpha(0.8) } } }
}

fn cartesian_options(begin_y_at_zero: bool) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        scales: Scales {
            x: Some(LinearAxis { begin_at_zero: None, grid: grid_style(), ticks: tick_style() }),
            y: Some(LinearAxis {
                begin_at_zero: Some(begin_y_at_zero),
                grid: grid_style(),
                ticks: tick_style(),
            }),
            ..Default::default()
        },
        plugins: default_plugins(),
    }
}
