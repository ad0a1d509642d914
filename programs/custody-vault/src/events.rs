use anchor_lang::prelude::*;

#[event]
pub struct VaultCreated {
    pub owner: Pubkey,
    pub state: Pubkey,
    pub vault: Pubkey,
    pub target_amount: u64,
}

#[event]
pub struct Deposited {
    pub owner: Pubkey,
    pub amount: u64,
    /// Custodied balance after the deposit
    pub balance: u64,
}

/// A deposit arrived after the target was met and the vault was emptied
/// back to the owner instead.
#[event]
pub struct VaultRefunded {
    pub owner: Pubkey,
    pub amount: u64,
    pub target_amount: u64,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    /// Custodied balance after the withdrawal
    pub balance: u64,
}
