//! Funds collected from paid mints.
//!
//! The ledger balance mirrors what the contract holds of the payment token on
//! behalf of mint proceeds. It only grows through `accept` and only shrinks
//! through a full `withdraw_all`.

use soroban_sdk::{token, Address, Env};

use crate::config;
use crate::roles;
use crate::storage_types::DataKey;
use crate::Error;

pub fn balance(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::Balance).unwrap_or(0)
}

fn write_balance(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::Balance, &amount);
}

/// Checks that `payment` is exactly `quantity * price`.
pub fn check_payment(quantity: u32, price: i128, payment: i128) -> Result<(), Error> {
    let expected = price
        .checked_mul(i128::from(quantity))
        .ok_or(Error::IncorrectPayment)?;
    if payment != expected {
        return Err(Error::IncorrectPayment);
    }
    Ok(())
}

/// Pulls `amount` of the payment token from `payer` and records it.
///
/// A payer who cannot cover the transfer makes the token contract fail the
/// whole invocation, so nothing recorded earlier in the call survives.
pub fn accept(e: &Env, payer: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let next = balance(e)
        .checked_add(amount)
        .ok_or(Error::IncorrectPayment)?;

    let token = config::payment_token(e)?;
    token::Client::new(e, &token).transfer(payer, &e.current_contract_address(), &amount);
    write_balance(e, next);
    Ok(())
}

/// Sends the whole balance to `recipient` and returns the amount moved.
///
/// The balance is only zeroed once the transfer has gone through; a rejected
/// transfer leaves it untouched and reports `TransferFailed`.
pub fn withdraw_all(e: &Env, caller: &Address, recipient: &Address) -> Result<i128, Error> {
    roles::require_admin(e, caller)?;

    let amount = balance(e);
    if amount == 0 {
        return Ok(0);
    }

    let token = config::payment_token(e)?;
    let client = token::Client::new(e, &token);
    match client.try_transfer(&e.current_contract_address(), recipient, &amount) {
        Ok(Ok(())) => {}
        _ => return Err(Error::TransferFailed),
    }

    write_balance(e, 0);
    Ok(amount)
}
