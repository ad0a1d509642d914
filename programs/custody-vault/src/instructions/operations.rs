use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{STATE_SEED, VAULT_SEED};
use crate::error::VaultError;
use crate::state::VaultState;

/// Accounts shared by `deposit` and `withdraw`.
///
/// Both PDAs are constrained to their canonical addresses here; the bumps
/// stored in the record are compared against those in `load_state`, so a
/// caller cannot substitute a record or vault built from any other bump or
/// owner.
#[derive(Accounts)]
pub struct Operations<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: decoded by `load_state`, which checks the type tag, the
    /// program ownership and the stored bumps, and reports a missing or
    /// foreign record with the program's own error codes.
    #[account(
        seeds = [STATE_SEED, owner.key().as_ref()],
        bump
    )]
    pub state: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, state.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Operations<'info> {
    pub fn load_state(&self, bumps: &OperationsBumps) -> Result<VaultState> {
        let record = {
            let data = self.state.try_borrow_data()?;
            VaultState::from_record(&data)?
        };
        require_keys_eq!(*self.state.owner, crate::ID, VaultError::MalformedRecord);
        require!(
            record.state_bump == bumps.state && record.vault_bump == bumps.vault,
            VaultError::MalformedRecord
        );
        Ok(record)
    }

    /// Owner -> vault, signed by the owner.
    pub fn pay_in(&self, amount: u64) -> Result<()> {
        let cpi_ctx = CpiContext::new(
            self.system_program.to_account_info(),
            Transfer {
                from: self.owner.to_account_info(),
                to: self.vault.to_account_info(),
            },
        );
        transfer(cpi_ctx, amount).map_err(|_| error!(VaultError::TransferFailed))
    }

    /// Vault -> owner, signed by the vault PDA.
    pub fn pay_out(&self, vault_bump: u8, amount: u64) -> Result<()> {
        let state_key = self.state.key();
        let seeds = &[VAULT_SEED, state_key.as_ref(), &[vault_bump]];
        let signer_seeds = &[&seeds[..]];

        let cpi_ctx = CpiContext::new_with_signer(
            self.system_program.to_account_info(),
            Transfer {
                from: self.vault.to_account_info(),
                to: self.owner.to_account_info(),
            },
            signer_seeds,
        );
        transfer(cpi_ctx, amount).map_err(|_| error!(VaultError::TransferFailed))
    }
}
