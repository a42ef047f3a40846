//! Admin role registry.
//!
//! Membership is a flag per address in persistent storage. Entries are never
//! removed, only flipped. Revoking the last admin is permitted.

use soroban_sdk::{Address, Env};

use crate::storage_types::{DataKey, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use crate::Error;

pub fn is_admin(e: &Env, identity: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Admin(identity.clone()))
        .unwrap_or(false)
}

/// Guard used by every privileged operation. An admin that passes has its
/// entry's TTL extended, so an active admin never gets archived.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    if !is_admin(e, caller) {
        return Err(Error::Unauthorized);
    }
    e.storage().persistent().extend_ttl(
        &DataKey::Admin(caller.clone()),
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
    Ok(())
}

pub(crate) fn write_admin(e: &Env, target: &Address, enabled: bool) {
    let key = DataKey::Admin(target.clone());
    e.storage().persistent().set(&key, &enabled);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn set_admin(e: &Env, caller: &Address, target: &Address, enabled: bool) -> Result<(), Error> {
    require_admin(e, caller)?;
    write_admin(e, target, enabled);
    Ok(())
}
