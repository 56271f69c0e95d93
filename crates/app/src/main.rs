use std::io::Write;

use engine::SettlementEngine;

use crate::error::Result;

mod bill;
mod error;
mod settings;

fn main() -> Result<()> {
    let config = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "billsplit={level},engine={level}",
            level = config.settings.level
        ))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&config) {
        tracing::error!("failed to settle {}: {err}", config.bill.display());
        return Err(err);
    }
    Ok(())
}

fn run(config: &settings::RunConfig) -> Result<()> {
    tracing::debug!("loading bill from {}", config.bill.display());
    let input = bill::load(&config.bill)?;
    let (participants, context) = bill::to_engine(&input, config.force_equal_split);

    let report = bill::to_report(SettlementEngine.settle(&participants, &context)?);

    let mut out = std::io::stdout().lock();
    if config.settings.compact {
        serde_json::to_writer(&mut out, &report)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &report)?;
    }
    writeln!(out)?;
    Ok(())
}
