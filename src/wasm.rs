use wasm_bindgen::prelude::*;

use crate::deposit;
use crate::market::MarketRow;
use crate::model::{AssetMetadata, BalanceSnapshot, PoolSnapshot, PriceSet};

#[derive(serde::Deserialize)]
struct RowInput {
    asset: AssetMetadata,
    #[serde(default)]
    pool: Option<PoolSnapshot>,
    #[serde(default)]
    balance: Option<BalanceSnapshot>,
    prices: PriceSet,
}

/// Compute one market row. Takes `{asset, pool, balance, prices}` and
/// returns `{row, display}`, or `{error}` for malformed input.
#[wasm_bindgen]
pub fn compute_market_row(input: JsValue) -> JsValue {
    let input: RowInput = match serde_wasm_bindgen::from_value(input) {
        Ok(v) => v,
        Err(e) => return error_value(&format!("invalid row input: {e}")),
    };
    let row = MarketRow::compute(
        &input.asset,
        input.pool.as_ref(),
        input.balance.as_ref(),
        &input.prices,
    );
    let display = row.display();
    serde_wasm_bindgen::to_value(&serde_json::json!({ "row": row, "display": display }))
        .unwrap_or_else(|e| error_value(&format!("serialization error: {e}")))
}

#[wasm_bindgen]
pub fn accept_keystroke(candidate: &str) -> bool {
    deposit::accept_keystroke(candidate)
}

/// `balance_json` is a `BalanceSnapshot` as JSON, or empty when absent.
#[wasm_bindgen]
pub fn is_amount_valid(raw_amount: &str, balance_json: &str) -> bool {
    let balance = parse_balance(balance_json);
    deposit::is_amount_valid(raw_amount, balance.as_ref())
}

#[wasm_bindgen]
pub fn half_of_balance(balance_json: &str) -> String {
    deposit::half(parse_balance(balance_json).as_ref())
}

#[wasm_bindgen]
pub fn max_of_balance(balance_json: &str) -> String {
    deposit::max(parse_balance(balance_json).as_ref())
}

fn parse_balance(json: &str) -> Option<BalanceSnapshot> {
    if json.trim().is_empty() {
        return None;
    }
    serde_json::from_str(json).ok()
}

fn error_value(msg: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&serde_json::json!({ "error": msg })).unwrap_or(JsValue::NULL)
}
