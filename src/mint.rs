//! Mint authorization.
//!
//! Every mint goes through [`execute`]. Checks run in a fixed order and the
//! first failure is returned:
//!
//! | Kind    | Checks                                              |
//! |---------|-----------------------------------------------------|
//! | Admin   | requester is admin, quantity, supply                |
//! | Public  | public sale on, quantity, payment, supply           |
//! | Presale | presale on, allowlist proof, quantity, payment, supply |
//!
//! The supply check lives in `supply::reserve`, which rejects before writing.
//! Nothing is written until all checks pass; the payment is pulled in last.

use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol, Vec};

use crate::phase::{self, Phase};
use crate::{allowlist, config, events, funds, roles, supply, Error};

pub enum MintKind {
    /// Free issuance by an admin to any recipient.
    Admin { to: Address },
    /// Paid issuance to the requester while the public sale is on.
    Public,
    /// Issuance to an allowlisted requester while the presale is on.
    Presale { proof: Vec<BytesN<32>> },
}

impl MintKind {
    fn label(&self) -> Symbol {
        match self {
            MintKind::Admin { .. } => symbol_short!("admin"),
            MintKind::Public => symbol_short!("public"),
            MintKind::Presale { .. } => symbol_short!("presale"),
        }
    }
}

pub struct MintRequest {
    pub kind: MintKind,
    pub requester: Address,
    pub quantity: u32,
    pub payment: i128,
}

/// Runs the checks for `request` and, if they all pass, issues the units.
/// Returns the first token id issued.
pub fn execute(e: &Env, request: MintRequest) -> Result<u32, Error> {
    let config = config::read_config(e)?;

    let (recipient, price) = match &request.kind {
        MintKind::Admin { to } => {
            roles::require_admin(e, &request.requester)?;
            (to.clone(), 0)
        }
        MintKind::Public => {
            phase::require_active(e, Phase::PublicSale)?;
            (request.requester.clone(), config.unit_price)
        }
        MintKind::Presale { proof } => {
            phase::require_active(e, Phase::Presale)?;
            allowlist::require_member(e, &request.requester, proof)?;
            (request.requester.clone(), config.presale_price)
        }
    };

    if request.quantity == 0 {
        return Err(Error::InvalidQuantity);
    }
    funds::check_payment(request.quantity, price, request.payment)?;

    let first_token_id = supply::reserve(e, config.max_supply, &recipient, request.quantity)?;
    funds::accept(e, &request.requester, request.payment)?;

    events::minted(e, request.kind.label(), &recipient, first_token_id, request.quantity);
    Ok(first_token_id)
}
