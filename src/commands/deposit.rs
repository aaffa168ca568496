use anyhow::{Result, bail};
use lend_dash::chain::EvmClient;
use lend_dash::deposit::{self, DepositForm, DepositSession, SubmitOutcome};
use lend_dash::effects::LogNotifier;
use lend_dash::market;
use lend_dash::model::{AssetSymbol, BalanceSnapshot, PoolSnapshot, asset};

use super::{ConsoleIndicator, Source, block_on, load_source};
use crate::cli::SourceArgs;

/// CLI-facing deposit arguments.
pub struct DepositConfig {
    pub asset: AssetSymbol,
    pub amount: String,
    pub source: SourceArgs,
    pub send: bool,
}

/// Entry point for the `deposit` command.
pub fn run(cfg: &DepositConfig) -> Result<()> {
    match load_source(&cfg.source)? {
        Source::Snapshot(snapshot) => {
            if cfg.send {
                bail!("--send needs a live --config, not a snapshot");
            }
            let entry = snapshot.asset(cfg.asset);
            let mut form = DepositForm::new(asset::metadata(cfg.asset).clone());
            let balance = entry.and_then(|e| e.balance.clone());
            let pool = entry.and_then(|e| e.pool.clone());
            report(&mut form, &cfg.amount, pool.as_ref(), balance.as_ref(), false);
            Ok(())
        }
        Source::Live(config) => {
            let Some(meta) = config.asset(cfg.asset) else {
                bail!("asset {} is not listed", cfg.asset);
            };
            let client = EvmClient::from_config(&config)?;
            let owner = config.owner()?;

            block_on(async {
                let notifier = LogNotifier;
                let indicator = ConsoleIndicator;
                let mut session = DepositSession::new(&notifier, &indicator);

                let balance = match owner.as_deref() {
                    Some(owner) => session.load_balance(&client, owner, &meta).await,
                    None => None,
                };
                let pool = market::read_pool(&client, &meta, &notifier).await;

                let mut form = DepositForm::new(meta);
                let write_available = client.can_write();
                report(&mut form, &cfg.amount, pool.as_ref(), balance.as_ref(), write_available);

                if !cfg.send {
                    return Ok(());
                }
                let submitter = write_available.then_some(&client);
                match session.submit(&mut form, balance.as_ref(), submitter).await? {
                    SubmitOutcome::Success { tx_hash } => println!("Deposit tx: {tx_hash}"),
                    SubmitOutcome::Failure(e) => bail!("deposit failed: {e}"),
                }
                Ok(())
            })?
        }
    }
}

fn report(
    form: &mut DepositForm,
    amount: &str,
    pool: Option<&PoolSnapshot>,
    balance: Option<&BalanceSnapshot>,
    write_available: bool,
) {
    let unit = form.asset().symbol.unit();
    println!("=== deposit {unit} ===");

    if !form.edit(amount) {
        println!("Amount:     '{amount}' rejected (digits and one '.' only)");
        return;
    }
    let summary = form.summary(pool, balance);
    println!("Amount:     {} {unit}", form.amount());
    println!("{}", summary.max_line);
    println!("APY:        {}", summary.apy);
    println!("Wallet:     {}", summary.wallet);
    println!("Half:       {}", deposit::half(balance));
    println!("Max:        {}", deposit::max(balance));
    println!("Valid:      {}", form.is_valid(balance));

    match form.request(balance) {
        Ok(request) => {
            println!("Token:      {}", request.token_address);
            println!("Amount arg: {}", request.amount_scaled);
            println!("Value wei:  {}", request.native_value_wei);
        }
        Err(e) => println!("Request:    {e}"),
    }
    println!("Can submit: {}", form.can_submit(write_available, balance));
}
