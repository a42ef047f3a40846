use soroban_sdk::{symbol_short, Address, BytesN, Env, Symbol};

pub fn minted(e: &Env, kind: Symbol, to: &Address, first_token_id: u32, quantity: u32) {
    e.events().publish(
        (symbol_short!("mint"), to.clone()),
        (kind, first_token_id, quantity),
    );
}

pub fn phase_toggled(e: &Env, phase: Symbol, active: bool) {
    e.events().publish((symbol_short!("phase"), phase), active);
}

pub fn root_updated(e: &Env, caller: &Address, root: &BytesN<32>) {
    e.events()
        .publish((symbol_short!("root"), caller.clone()), root.clone());
}

pub fn admin_updated(e: &Env, target: &Address, enabled: bool) {
    e.events()
        .publish((symbol_short!("admin"), target.clone()), enabled);
}

pub fn withdrawn(e: &Env, recipient: &Address, amount: i128) {
    e.events()
        .publish((symbol_short!("withdraw"), recipient.clone()), amount);
}
