use lend_dash::lp_tokens::{EMPTY_MESSAGE, LpColumn, LpTokenPosition, LpTokensPanel};
use rust_decimal_macros::dec;

fn position(platform: &str, value: rust_decimal::Decimal) -> LpTokenPosition {
    LpTokenPosition {
        platform: platform.into(),
        asset: "ETH/USDC".into(),
        balance: dec!(1.5),
        value_usd: value,
    }
}

#[test]
fn test_empty_panel() {
    let panel = LpTokensPanel::default();
    assert_eq!(panel.total_label(), "$0.00");

    let out = panel.render();
    assert!(out.starts_with("LP Tokens"));
    assert!(out.contains("$0.00"));
    assert!(out.contains("Platform ^v | Asset | Balance | Value ^v"));
    assert!(out.trim_end().ends_with(EMPTY_MESSAGE));
}

#[test]
fn test_total_and_rows() {
    let panel = LpTokensPanel::new(vec![
        position("Uniswap", dec!(120.5)),
        position("Aerodrome", dec!(30.255)),
    ]);
    assert_eq!(panel.total_value_usd(), dec!(150.755));
    assert_eq!(panel.total_label(), "$150.76");
    assert!(panel.render().contains("Uniswap | ETH/USDC | 1.5 | $120.50"));
}

#[test]
fn test_sorting_only_on_sortable_columns() {
    let mut panel = LpTokensPanel::new(vec![
        position("Uniswap", dec!(10)),
        position("Aerodrome", dec!(30)),
        position("Curve", dec!(20)),
    ]);

    assert!(panel.sort_by(LpColumn::Value, true));
    let values: Vec<_> = panel.positions.iter().map(|p| p.value_usd).collect();
    assert_eq!(values, vec![dec!(30), dec!(20), dec!(10)]);

    assert!(panel.sort_by(LpColumn::Platform, false));
    let names: Vec<_> = panel.positions.iter().map(|p| p.platform.as_str()).collect();
    assert_eq!(names, vec!["Aerodrome", "Curve", "Uniswap"]);

    assert!(!panel.sort_by(LpColumn::Balance, false));
    assert!(!LpColumn::Asset.sortable());
}
