#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, Address, BytesN, Env, Vec,
};

mod allowlist;
mod config;
mod events;
mod funds;
mod mint;
mod phase;
mod roles;
mod storage_types;
mod supply;

use mint::{MintKind, MintRequest};
use phase::Phase;
pub use storage_types::SaleConfig;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    SaleNotActive = 4,
    IncorrectPayment = 5,
    NotAllowlisted = 6,
    SupplyExceeded = 7,
    TransferFailed = 8,
    InvalidQuantity = 9,
    InvalidConfig = 10,
}

#[contract]
pub struct PresaleMintContract;

#[contractimpl]
impl PresaleMintContract {
    /// Initialize the collection. Only can be called once.
    ///
    /// # Arguments
    /// * `admin` - First admin; can toggle phases, set the allowlist root,
    ///   manage other admins and withdraw proceeds
    /// * `payment_token` - Token contract mint payments are made in
    /// * `sale_config` - Supply cap and prices, fixed for the life of the contract
    pub fn initialize(
        e: Env,
        admin: Address,
        payment_token: Address,
        sale_config: SaleConfig,
    ) -> Result<(), Error> {
        if config::is_initialized(&e) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        config::validate(&sale_config)?;

        config::write_config(&e, &sale_config, &payment_token);
        roles::write_admin(&e, &admin, true);
        phase::write(&e, Phase::Presale, false);
        phase::write(&e, Phase::PublicSale, false);
        config::extend_instance(&e);

        events::admin_updated(&e, &admin, true);
        Ok(())
    }

    /// Mint `quantity` units to `to` without payment. Only callable by an admin.
    ///
    /// Returns the first token id issued.
    pub fn admin_mint(e: Env, caller: Address, quantity: u32, to: Address) -> Result<u32, Error> {
        config::require_initialized(&e)?;
        caller.require_auth();

        let first_token_id = mint::execute(
            &e,
            MintRequest {
                kind: MintKind::Admin { to },
                requester: caller,
                quantity,
                payment: 0,
            },
        )?;
        config::extend_instance(&e);
        Ok(first_token_id)
    }

    /// Mint `quantity` units to `caller` during the public sale.
    ///
    /// `payment` must equal `quantity * unit_price` and is pulled from `caller`
    /// in the payment token.
    pub fn public_mint(e: Env, caller: Address, quantity: u32, payment: i128) -> Result<u32, Error> {
        config::require_initialized(&e)?;
        caller.require_auth();

        let first_token_id = mint::execute(
            &e,
            MintRequest {
                kind: MintKind::Public,
                requester: caller,
                quantity,
                payment,
            },
        )?;
        config::extend_instance(&e);
        Ok(first_token_id)
    }

    /// Mint `quantity` units to `caller` during the presale.
    ///
    /// # Arguments
    /// * `proof` - Sibling hashes proving `caller` is in the committed allowlist
    /// * `payment` - Must equal `quantity * presale_price` (zero when presale is free)
    pub fn presale_mint(
        e: Env,
        caller: Address,
        quantity: u32,
        proof: Vec<BytesN<32>>,
        payment: i128,
    ) -> Result<u32, Error> {
        config::require_initialized(&e)?;
        caller.require_auth();

        let first_token_id = mint::execute(
            &e,
            MintRequest {
                kind: MintKind::Presale { proof },
                requester: caller,
                quantity,
                payment,
            },
        )?;
        config::extend_instance(&e);
        Ok(first_token_id)
    }

    /// Flip the presale flag and return its new value.
    pub fn toggle_presale_started(e: Env, caller: Address) -> Result<bool, Error> {
        config::require_initialized(&e)?;
        caller.require_auth();

        let active = phase::toggle(&e, &caller, Phase::Presale)?;
        config::extend_instance(&e);
        events::phase_toggled(&e, symbol_short!("presale"), active);
        Ok(active)
    }

    /// Flip the public sale flag and return its new value.
    pub fn toggle_public_sale_started(e: Env, caller: Address) -> Result<bool, Error> {
        config::require_initialized(&e)?;
        caller.require_auth();

        let active = phase::toggle(&e, &caller, Phase::PublicSale)?;
        config::extend_instance(&e);
        events::phase_toggled(&e, symbol_short!("public"), active);
        Ok(active)
    }

    /// Replace the allowlist root. Proofs built against the previous root stop
    /// working for anyone not also in the new set.
    pub fn set_merkle_root(e: Env, caller: Address, root: BytesN<32>) -> Result<(), Error> {
        config::require_initialized(&e)?;
        caller.require_auth();

        allowlist::set_root(&e, &caller, &root)?;
        config::extend_instance(&e);
        events::root_updated(&e, &caller, &root);
        Ok(())
    }

    /// Grant or revoke the admin role. An admin may revoke itself, even the last one.
    pub fn set_admin_role(
        e: Env,
        caller: Address,
        target: Address,
        enabled: bool,
    ) -> Result<(), Error> {
        config::require_initialized(&e)?;
        caller.require_auth();

        roles::set_admin(&e, &caller, &target, enabled)?;
        config::extend_instance(&e);
        events::admin_updated(&e, &target, enabled);
        Ok(())
    }

    /// Send all collected mint proceeds to `recipient`. Returns the amount moved.
    pub fn withdraw_all(e: Env, caller: Address, recipient: Address) -> Result<i128, Error> {
        config::require_initialized(&e)?;
        caller.require_auth();

        let amount = funds::withdraw_all(&e, &caller, &recipient)?;
        config::extend_instance(&e);
        if amount > 0 {
            events::withdrawn(&e, &recipient, amount);
        }
        Ok(amount)
    }

    /// Number of units owned by `owner`.
    pub fn balance_of(e: Env, owner: Address) -> u32 {
        supply::owned_count(&e, &owner)
    }

    pub fn owner_of(e: Env, token_id: u32) -> Option<Address> {
        supply::owner_of(&e, token_id)
    }

    pub fn total_supply(e: Env) -> u32 {
        supply::total_issued(&e)
    }

    pub fn max_supply(e: Env) -> u32 {
        config::read_config(&e).map(|c| c.max_supply).unwrap_or(0)
    }

    pub fn unit_price(e: Env) -> i128 {
        config::read_config(&e).map(|c| c.unit_price).unwrap_or(0)
    }

    pub fn presale_price(e: Env) -> i128 {
        config::read_config(&e).map(|c| c.presale_price).unwrap_or(0)
    }

    pub fn payment_token(e: Env) -> Option<Address> {
        config::payment_token(&e).ok()
    }

    pub fn is_admin(e: Env, identity: Address) -> bool {
        roles::is_admin(&e, &identity)
    }

    pub fn is_presale_active(e: Env) -> bool {
        phase::is_active(&e, Phase::Presale)
    }

    pub fn is_public_sale_active(e: Env) -> bool {
        phase::is_active(&e, Phase::PublicSale)
    }

    pub fn merkle_root(e: Env) -> BytesN<32> {
        allowlist::root(&e)
    }

    /// Check a presale proof for `identity` against the committed root
    /// without minting.
    pub fn verify_allowlist(e: Env, identity: Address, proof: Vec<BytesN<32>>) -> bool {
        allowlist::verify(&e, &identity, &proof)
    }

    /// Mint proceeds currently held and not yet withdrawn.
    pub fn funds_balance(e: Env) -> i128 {
        funds::balance(&e)
    }
}
