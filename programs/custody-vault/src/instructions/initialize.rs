use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{STATE_SEED, VAULT_SEED};
use crate::custody::Limits;
use crate::error::VaultError;
use crate::events::VaultCreated;
use crate::state::VaultState;

/// Create the owner's vault: state record plus a rent-exempt vault account.
///
/// `init_if_needed` lets an existing record reach the handler, where it is
/// refused with `AlreadyInitialized` instead of a generic system-program
/// "account in use" failure. Anchor still checks owner and discriminator of
/// an existing account before that, so a foreign account at the state
/// address never gets this far.
pub fn initialize(ctx: Context<Initialize>, target_amount: u64) -> Result<()> {
    require!(
        !ctx.accounts.state.is_initialized(),
        VaultError::AlreadyInitialized
    );
    require!(target_amount > 0, VaultError::InvalidAmount);

    // The vault only ever holds lamports; it exists once it carries the
    // zero-byte rent minimum. Lamports sent to the address before creation
    // are swept back to the owner, so every vault starts at a zero balance.
    let limits = Limits::from_rent(&Rent::get()?);
    let vault_lamports = ctx.accounts.vault.lamports();
    let shortfall = limits.reserve_shortfall(vault_lamports);
    let excess = limits.custodied(vault_lamports);

    if shortfall > 0 {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        );
        transfer(cpi_ctx, shortfall).map_err(|_| error!(VaultError::TransferFailed))?;
    }

    if excess > 0 {
        let state_key = ctx.accounts.state.key();
        let seeds = &[VAULT_SEED, state_key.as_ref(), &[ctx.bumps.vault]];
        let signer_seeds = &[&seeds[..]];

        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner.to_account_info(),
            },
            signer_seeds,
        );
        transfer(cpi_ctx, excess).map_err(|_| error!(VaultError::TransferFailed))?;
        msg!("Swept {} pre-existing lamports back to owner", excess);
    }

    let state = &mut ctx.accounts.state;
    state.target_amount = target_amount;
    state.vault_bump = ctx.bumps.vault;
    state.state_bump = ctx.bumps.state;

    emit!(VaultCreated {
        owner: ctx.accounts.owner.key(),
        state: state.key(),
        vault: ctx.accounts.vault.key(),
        target_amount,
    });

    msg!("Vault created for owner: {}", ctx.accounts.owner.key());
    msg!("Target amount: {}", target_amount);
    msg!("Bumps stored: state={} vault={}", state.state_bump, state.vault_bump);

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = VaultState::LEN,
        seeds = [STATE_SEED, owner.key().as_ref()],
        bump
    )]
    pub state: Account<'info, VaultState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, state.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
