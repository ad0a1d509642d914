use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::error::VaultError;

/// Per-owner vault configuration (PDA, seeds = [b"state", owner])
///
/// The owner is not stored: the record is found by derivation, and the
/// `seeds` constraint on every instruction ties it back to the signer.
///
/// Layout (18 bytes):
/// - 0..8   discriminator, `sha256("account:VaultState")[..8]`
/// - 8..16  `target_amount`, u64 little-endian
/// - 16     `vault_bump`
/// - 17     `state_bump`
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct VaultState {
    /// Custodied balance at which the next deposit turns into a full refund
    pub target_amount: u64,
    /// Canonical bump of the vault PDA, reused as a signer seed
    pub vault_bump: u8,
    /// Canonical bump of this account's own PDA
    pub state_bump: u8,
}

impl VaultState {
    pub const LEN: usize = 8 // discriminator
        + 8                  // target_amount
        + 1                  // vault_bump
        + 1; // state_bump

    /// `init_if_needed` hands the handler a zeroed record on first use.
    /// A created record always carries a non-zero target.
    pub fn is_initialized(&self) -> bool {
        self.target_amount != 0
    }

    /// Decode a raw State Record as fetched from the ledger.
    ///
    /// The type tag is checked before anything else is read, so an account
    /// of another type can never be interpreted as vault state.
    pub fn from_record(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return err!(VaultError::NotInitialized);
        }
        let disc_len = Self::DISCRIMINATOR.len();
        if data.len() < Self::LEN || &data[..disc_len] != Self::DISCRIMINATOR {
            return err!(VaultError::MalformedRecord);
        }

        let state = Self::deserialize(&mut &data[disc_len..])
            .map_err(|_| error!(VaultError::MalformedRecord))?;
        if !state.is_initialized() {
            return err!(VaultError::NotInitialized);
        }
        Ok(state)
    }

    /// Encode into the on-ledger layout, discriminator included.
    pub fn to_record(&self) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(Self::LEN);
        self.try_serialize(&mut data)?;
        Ok(data)
    }
}
