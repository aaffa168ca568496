use lend_dash::model::MarketSnapshot;

/// Print an example market snapshot.
pub fn run() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&MarketSnapshot::example())?;
    println!("{json}");
    Ok(())
}
