//! JSON persistence: `{ "credits": n }`.

use crate::{Ledger, LedgerError};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

impl Ledger {
    /// Load a ledger, or start a fresh one if `path` does not exist.
    ///
    /// A stored balance below the allotment is raised to the allotment.
    pub fn load(path: &Path, allotment: u32) -> Result<Self, LedgerError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no ledger at {}, starting with {} credits", path.display(), allotment);
                return Ok(Ledger::new(allotment));
            }
            Err(source) => {
                return Err(LedgerError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        let stored: Ledger = serde_json::from_str(&text).map_err(|source| LedgerError::Serde {
            path: path.display().to_string(),
            source,
        })?;

        if stored.balance() < allotment {
            log::warn!(
                "ledger at {} held {} credits, topping up to {}",
                path.display(),
                stored.balance(),
                allotment
            );
            return Ok(Ledger::new(allotment));
        }
        Ok(Ledger::with_balance(stored.balance(), allotment))
    }

    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        let io_err = |source| LedgerError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string(self).map_err(|source| LedgerError::Serde {
            path: path.display().to_string(),
            source,
        })?;
        fs::write(path, text).map_err(io_err)
    }
}
