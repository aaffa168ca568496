use schemars::schema_for;

use crate::model::MarketSnapshot;

/// JSON Schema of the offline market snapshot file.
pub fn get_schema_json() -> String {
    let schema = schema_for!(MarketSnapshot);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

/// Print the snapshot schema.
pub fn run() -> anyhow::Result<()> {
    println!("{}", get_schema_json());
    Ok(())
}
