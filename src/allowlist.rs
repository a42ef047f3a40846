//! Merkle allowlist.
//!
//! A single committed root stands for the set of identities allowed to mint
//! during presale. Proofs are produced off-chain with Keccak-256 and sorted
//! pairs, so a proof is just the list of sibling hashes from leaf to root with
//! no left/right markers:
//!
//! ```text
//! leaf(id)      = keccak256(xdr(id))
//! parent(a, b)  = keccak256(min(a, b) || max(a, b))
//! ```
//!
//! `min`/`max` compare the 32-byte values as big-endian integers. An unpaired
//! node is carried up to the next level unchanged, which the fold below
//! handles naturally because that level simply contributes no proof element.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

use crate::roles;
use crate::storage_types::DataKey;
use crate::Error;

const EMPTY_ROOT: [u8; 32] = [0u8; 32];

/// The committed root, all zeroes until an admin sets one.
pub fn root(e: &Env) -> BytesN<32> {
    e.storage()
        .instance()
        .get(&DataKey::MerkleRoot)
        .unwrap_or_else(|| BytesN::from_array(e, &EMPTY_ROOT))
}

/// Overwrites the committed root. No history is kept.
pub fn set_root(e: &Env, caller: &Address, root: &BytesN<32>) -> Result<(), Error> {
    roles::require_admin(e, caller)?;
    e.storage().instance().set(&DataKey::MerkleRoot, root);
    Ok(())
}

pub fn leaf(e: &Env, identity: &Address) -> BytesN<32> {
    e.crypto().keccak256(&identity.clone().to_xdr(e)).into()
}

pub fn hash_pair(e: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (a, b) = (a.to_array(), b.to_array());
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(&lo);
    buf[32..].copy_from_slice(&hi);
    e.crypto().keccak256(&Bytes::from_array(e, &buf)).into()
}

/// Folds `proof` over the leaf of `identity` and compares against the
/// committed root. Pure: never writes storage.
pub fn verify(e: &Env, identity: &Address, proof: &Vec<BytesN<32>>) -> bool {
    let committed = root(e);
    // the zero root admits nobody
    if committed.to_array() == EMPTY_ROOT {
        return false;
    }

    let mut computed = leaf(e, identity);
    for sibling in proof.iter() {
        computed = hash_pair(e, &computed, &sibling);
    }
    computed == committed
}

pub fn require_member(e: &Env, identity: &Address, proof: &Vec<BytesN<32>>) -> Result<(), Error> {
    if !verify(e, identity, proof) {
        return Err(Error::NotAllowlisted);
    }
    Ok(())
}
