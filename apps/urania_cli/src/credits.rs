use clap::Subcommand;
use obol::{Feature, Ledger};
use std::io::Write;
use urania_config::UraniaSettings;

#[derive(Subcommand, Debug, Clone)]
pub enum CreditsAction {
    /// Print the balance and the price list.
    Show,
    /// Add purchased credits.
    Add { amount: u32 },
    /// Back to the free allotment.
    Reset,
    /// Overwrite the balance (developer use).
    Set { amount: u32 },
    /// Charge one feature, e.g. `chart_analysis`.
    Charge { feature: Feature },
}

pub fn run(action: &CreditsAction, settings: &UraniaSettings, out: &mut impl Write) -> anyhow::Result<()> {
    let path = &settings.ledger_path;
    let mut ledger = Ledger::load(path, settings.free_allotment)?;

    match action {
        CreditsAction::Show => {
            writeln!(out, "credits: {}", ledger.balance())?;
            for feature in Feature::ALL {
                let mark = if ledger.can_afford(feature) { ' ' } else { '!' };
                writeln!(out, "{mark} {:<18} {}", feature.id(), feature.cost())?;
            }
            return Ok(());
        }
        CreditsAction::Add { amount } => {
            ledger.add(*amount);
        }
        CreditsAction::Reset => ledger.reset(),
        CreditsAction::Set { amount } => ledger.set(*amount),
        CreditsAction::Charge { feature } => {
            ledger.charge(*feature)?;
        }
    }

    ledger.save(path)?;
    writeln!(out, "credits: {}", ledger.balance())?;
    Ok(())
}
