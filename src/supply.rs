//! Issued supply and per-owner counts.
//!
//! `reserve` is the only place issuance is recorded. Token ids are handed out
//! sequentially from zero, so after any number of mints the ids in use are
//! exactly `0..total_issued`.
//!
//! Ownership is kept per mint, not per token: each mint appends one
//! [`MintBatch`] holding its first id and owner, whatever the quantity. Batches
//! are stored in issue order, so `owner_of` finds the batch covering an id
//! with a binary search over their first ids.

use soroban_sdk::{Address, Env};

use crate::storage_types::{
    DataKey, MintBatch, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};
use crate::Error;

pub fn total_issued(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::TotalIssued).unwrap_or(0)
}

fn batch_count(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::BatchCount).unwrap_or(0)
}

fn read_batch(e: &Env, index: u32) -> Option<MintBatch> {
    e.storage().persistent().get(&DataKey::Batch(index))
}

pub fn owned_count(e: &Env, identity: &Address) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::OwnedCount(identity.clone()))
        .unwrap_or(0)
}

pub fn owner_of(e: &Env, token_id: u32) -> Option<Address> {
    if token_id >= total_issued(e) {
        return None;
    }

    // last batch whose first id is <= token_id; batch 0 always starts at 0
    let (mut lo, mut hi) = (0u32, batch_count(e));
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if read_batch(e, mid)?.first_token_id <= token_id {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    read_batch(e, lo).map(|batch| batch.owner)
}

/// Issues `quantity` units to `identity` and returns the first token id.
///
/// Fails with `SupplyExceeded` before writing anything if the cap would be
/// passed. The number of entries written does not depend on `quantity`.
pub fn reserve(e: &Env, max_supply: u32, identity: &Address, quantity: u32) -> Result<u32, Error> {
    let first_id = total_issued(e);
    let total = first_id
        .checked_add(quantity)
        .filter(|total| *total <= max_supply)
        .ok_or(Error::SupplyExceeded)?;
    let owned = owned_count(e, identity)
        .checked_add(quantity)
        .ok_or(Error::SupplyExceeded)?;

    let persistent = e.storage().persistent();
    let index = batch_count(e);
    let batch_key = DataKey::Batch(index);
    persistent.set(
        &batch_key,
        &MintBatch {
            first_token_id: first_id,
            owner: identity.clone(),
        },
    );
    persistent.extend_ttl(&batch_key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    let count_key = DataKey::OwnedCount(identity.clone());
    persistent.set(&count_key, &owned);
    persistent.extend_ttl(&count_key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    let instance = e.storage().instance();
    instance.set(&DataKey::BatchCount, &(index + 1));
    instance.set(&DataKey::TotalIssued, &total);
    Ok(first_id)
}
