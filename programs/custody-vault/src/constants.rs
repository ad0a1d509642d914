use anchor_lang::prelude::*;

/// Seed prefix for the per-owner State Record: `["state", owner]`
#[constant]
pub const STATE_SEED: &[u8] = b"state";

/// Seed prefix for the lamport-holding Vault Record: `["vault", state]`
#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Largest amount a single deposit may move into the vault (1 SOL)
#[constant]
pub const DEPOSIT_LIMIT: u64 = LAMPORTS_PER_SOL;

/// Largest amount a single withdrawal may move out of the vault (3 SOL)
#[constant]
pub const WITHDRAW_LIMIT: u64 = 3 * LAMPORTS_PER_SOL;
