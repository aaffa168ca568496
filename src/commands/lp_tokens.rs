use lend_dash::lp_tokens::LpTokensPanel;

/// Print the LP tokens panel. No LP positions are tracked yet.
pub fn run() -> anyhow::Result<()> {
    print!("{}", LpTokensPanel::default().render());
    Ok(())
}
