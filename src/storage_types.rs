use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Immutable sale parameters fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    /// Hard cap on the number of units ever issued.
    pub max_supply: u32,
    /// Price per unit for public mints, in payment token base units.
    pub unit_price: i128,
    /// Price per unit for allowlisted presale mints. Zero makes presale free.
    pub presale_price: i128,
}

/// A run of consecutive token ids issued to one owner by a single mint.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintBatch {
    pub first_token_id: u32,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    PaymentToken,
    PresaleActive,
    PublicSaleActive,
    MerkleRoot,
    TotalIssued,
    BatchCount,
    Balance,
    Admin(Address),
    OwnedCount(Address),
    Batch(u32),
}
