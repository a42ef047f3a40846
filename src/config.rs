use soroban_sdk::{Address, Env};

use crate::storage_types::{
    DataKey, SaleConfig, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
};
use crate::Error;

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn require_initialized(e: &Env) -> Result<(), Error> {
    if !is_initialized(e) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

/// Rejects configurations the mint paths cannot honor.
pub fn validate(config: &SaleConfig) -> Result<(), Error> {
    if config.max_supply == 0 || config.unit_price < 0 || config.presale_price < 0 {
        return Err(Error::InvalidConfig);
    }
    Ok(())
}

pub fn write_config(e: &Env, config: &SaleConfig, payment_token: &Address) {
    let storage = e.storage().instance();
    storage.set(&DataKey::Config, config);
    storage.set(&DataKey::PaymentToken, payment_token);
}

pub fn read_config(e: &Env) -> Result<SaleConfig, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn payment_token(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInitialized)
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
