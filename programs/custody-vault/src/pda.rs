use anchor_lang::prelude::*;

use crate::constants::{STATE_SEED, VAULT_SEED};
use crate::state::VaultState;

/// Canonical State Record address for `owner`: seeds = [b"state", owner].
///
/// `find_program_address` walks the bump from 255 down and keeps the first
/// off-curve hit. Clients and the program must agree on that order.
pub fn state_address(owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED, owner.as_ref()], program_id)
}

/// Canonical Vault Record address for a State Record: seeds = [b"vault", state].
pub fn vault_address(state: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, state.as_ref()], program_id)
}

/// Everything an owner's vault lives at, with the canonical bumps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VaultAddresses {
    pub owner: Pubkey,
    pub state: Pubkey,
    pub state_bump: u8,
    pub vault: Pubkey,
    pub vault_bump: u8,
}

impl VaultAddresses {
    pub fn derive(owner: &Pubkey) -> Self {
        Self::derive_with_program_id(owner, &crate::ID)
    }

    pub fn derive_with_program_id(owner: &Pubkey, program_id: &Pubkey) -> Self {
        let (state, state_bump) = state_address(owner, program_id);
        let (vault, vault_bump) = vault_address(&state, program_id);
        Self {
            owner: *owner,
            state,
            state_bump,
            vault,
            vault_bump,
        }
    }

    /// Check that the bumps stored in `record` rebuild exactly these
    /// canonical addresses. Mirrors the bump check `Operations::load_state`
    /// applies on every deposit and withdrawal.
    pub fn verify(&self, record: &VaultState) -> bool {
        self.verify_with_program_id(record, &crate::ID)
    }

    pub fn verify_with_program_id(&self, record: &VaultState, program_id: &Pubkey) -> bool {
        if record.state_bump != self.state_bump || record.vault_bump != self.vault_bump {
            return false;
        }

        let state = Pubkey::create_program_address(
            &[STATE_SEED, self.owner.as_ref(), &[record.state_bump]],
            program_id,
        );
        let vault = Pubkey::create_program_address(
            &[VAULT_SEED, self.state.as_ref(), &[record.vault_bump]],
            program_id,
        );
        matches!(state, Ok(s) if s == self.state) && matches!(vault, Ok(v) if v == self.vault)
    }
}
