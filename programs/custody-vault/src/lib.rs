#![allow(unexpected_cfgs)]

//! # Custody Vault
//!
//! One SOL vault per owner, held by a program-derived address:
//!  - `initialize` stores a target balance and the canonical bumps
//!  - `deposit` accepts at most 1 SOL per call, and once the vault already
//!    holds its target, returns the whole balance to the owner instead
//!  - `withdraw` releases at most 3 SOL per call

use anchor_lang::prelude::*;

pub mod client;
pub mod constants;
pub mod custody;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;


pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Ef4mxmArsCQg5qybkk9zhpcbHujiQMHtX8wDsazp9V4G");

#[program]
pub mod custody_vault {
    use super::*;

    /// Create the owner's state record and vault with a refund target.
    /// A second call for the same owner fails with `AlreadyInitialized`.
    pub fn initialize(ctx: Context<Initialize>, target_amount: u64) -> Result<()> {
        instructions::initialize(ctx, target_amount)
    }

    /// Deposit lamports, or refund the vault once its target is met.
    pub fn deposit(ctx: Context<Operations>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Withdraw lamports back to the owner.
    pub fn withdraw(ctx: Context<Operations>, amount: u64) -> Result<()> {
        instructions::withdraw(ctx, amount)
    }
}
