//! The fixed numeric series behind the four charts. Values are baked into
//! the page for the lifetime of the process; there is no data source.

/// Shared category axis for the three financial charts.
pub const FISCAL_YEARS: [&str; 4] = ["2023", "2024", "2025", "2026 (Projected)"];

pub const CASH_RESERVES_BILLIONS: [f64; 4] = [6.2, 8.6, 15.2, 18.5];

/// Fill opacity per bar; the projected year is deliberately the faintest.
pub const CASH_BAR_ALPHAS: [f32; 4] = [0.6, 0.7, 0.8, 0.5];

pub const TOTAL_REVENUE_BILLIONS: [f64; 4] = [111.5, 130.0, 148.5, 167.2];

pub const OPERATING_CASH_FLOW_BILLIONS: [f64; 4] = [58.0, 68.2, 80.5, 93.1];
pub const FREE_CASH_FLOW_BILLIONS: [f64; 4] = [52.3, 60.9, 72.1, 82.7];

/// Qualitative axes of the year-over-year radar, scored 0-100.
pub const PERFORMANCE_DIMENSIONS: [&str; 6] = [
    "Revenue Growth",
    "Profit Margin",
    "Cash Flow",
    "R&D Investment",
    "Market Share",
    "Debt Ratio",
];

pub const PERFORMANCE_FY2024: [f64; 6] = [85.0, 88.0, 80.0, 75.0, 82.0, 90.0];
pub const PERFORMANCE_FY2025: [f64; 6] = [92.0, 94.0, 88.0, 85.0, 90.0, 88.0];
