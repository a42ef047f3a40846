//! Sale phase flags.
//!
//! Presale and public sale are two independent switches. Nothing stops both
//! from being on at once; each mint path only looks at its own flag.

use soroban_sdk::{Address, Env};

use crate::roles;
use crate::storage_types::DataKey;
use crate::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Presale,
    PublicSale,
}

impl Phase {
    fn key(self) -> DataKey {
        match self {
            Phase::Presale => DataKey::PresaleActive,
            Phase::PublicSale => DataKey::PublicSaleActive,
        }
    }
}

pub fn is_active(e: &Env, phase: Phase) -> bool {
    e.storage().instance().get(&phase.key()).unwrap_or(false)
}

pub fn require_active(e: &Env, phase: Phase) -> Result<(), Error> {
    if !is_active(e, phase) {
        return Err(Error::SaleNotActive);
    }
    Ok(())
}

pub(crate) fn write(e: &Env, phase: Phase, active: bool) {
    e.storage().instance().set(&phase.key(), &active);
}

/// Flips `phase` and returns the new value.
pub fn toggle(e: &Env, caller: &Address, phase: Phase) -> Result<bool, Error> {
    roles::require_admin(e, caller)?;
    let next = !is_active(e, phase);
    write(e, phase, next);
    Ok(next)
}
