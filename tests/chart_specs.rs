use slide_deck_wasm::domain::charts::specs::{SLIDE_CHARTS, chart_for_slide};
use slide_deck_wasm::domain::charts::value_objects::TooltipFormat;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn registry_binds_fixed_container_ids() {
    let ids: Vec<(usize, &str)> =
        SLIDE_CHARTS.iter().map(|c| (c.slide_index, c.container_id)).collect();
    assert_eq!(
        ids,
        vec![
            (2, "cashGrowthChart"),
            (3, "revenueGrowthChart"),
            (4, "cashFlowChart"),
            (5, "performanceSummaryChart"),
        ]
    );
}

#[wasm_bindgen_test]
fn financial_charts_use_currency_tooltips() {
    for index in 2..=4 {
        assert_eq!(chart_for_slide(index).unwrap().tooltip, TooltipFormat::CurrencyBillions);
    }
    assert_eq!(chart_for_slide(5).unwrap().tooltip, TooltipFormat::ScoreOutOf100);
}

#[wasm_bindgen_test]
fn specs_serialize_into_host_config_shape() {
    for chart in SLIDE_CHARTS.iter() {
        let value = serde_json::to_value(&chart.spec).unwrap();
        // Every config carries the three top-level keys the host constructor
        // reads, and never embeds functions (those are attached later).
        assert!(value.get("type").is_some());
        assert!(value.get("data").is_some());
        assert_eq!(value["options"]["responsive"], serde_json::json!(true));
        assert_eq!(value["options"]["maintainAspectRatio"], serde_json::json!(false));
        assert!(value["options"]["plugins"].get("tooltip").is_none());
    }
}

#[wasm_bindgen_test]
fn four_categories_on_every_financial_chart() {
    for index in 2..=4 {
        let value = serde_json::to_value(&chart_for_slide(index).unwrap().spec).unwrap();
        let labels = value["data"]["labels"].as_array().unwrap();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0], "2023");
        assert_eq!(labels[3], "2026 (Projected)");
    }
}
