//! Credit ledger.
//!
//! A single non-negative balance with checked deduction. Features are
//! priced in [`Feature`]; callers charge only after the feature succeeded.

pub mod feature;
pub mod store;

pub use feature::{Feature, UnknownFeature};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Credits granted to a new ledger and restored by [`Ledger::reset`].
pub const FREE_ALLOTMENT: u32 = 5;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Insufficient credits: {required} required, {available} available")]
    InsufficientCredits { required: u32, available: u32 },
    #[error("Ledger file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Ledger file {path} is not valid JSON: {source}")]
    Serde {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    credits: u32,
    #[serde(skip, default = "default_allotment")]
    allotment: u32,
}

fn default_allotment() -> u32 {
    FREE_ALLOTMENT
}

impl Ledger {
    /// Fresh ledger holding `allotment` credits.
    pub fn new(allotment: u32) -> Self {
        Self {
            credits: allotment,
            allotment,
        }
    }

    pub fn with_balance(credits: u32, allotment: u32) -> Self {
        Self { credits, allotment }
    }

    pub fn balance(&self) -> u32 {
        self.credits
    }

    pub fn allotment(&self) -> u32 {
        self.allotment
    }

    pub fn can_afford(&self, feature: Feature) -> bool {
        self.credits >= feature.cost()
    }

    /// Remove `amount` credits, or fail leaving the balance untouched.
    pub fn deduct(&mut self, amount: u32) -> Result<u32, LedgerError> {
        if self.credits < amount {
            return Err(LedgerError::InsufficientCredits {
                required: amount,
                available: self.credits,
            });
        }
        self.credits -= amount;
        Ok(self.credits)
    }

    /// Deduct the cost of `feature`.
    pub fn charge(&mut self, feature: Feature) -> Result<u32, LedgerError> {
        let remaining = self.deduct(feature.cost())?;
        log::info!("charged {} credit(s) for {}, {} left", feature.cost(), feature, remaining);
        Ok(remaining)
    }

    pub fn add(&mut self, amount: u32) -> u32 {
        self.credits = self.credits.saturating_add(amount);
        self.credits
    }

    /// Back to the free allotment.
    pub fn reset(&mut self) {
        self.credits = self.allotment;
    }

    /// Developer override.
    pub fn set(&mut self, amount: u32) {
        self.credits = amount;
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(FREE_ALLOTMENT)
    }
}
