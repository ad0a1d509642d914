use anchor_lang::prelude::*;

use crate::custody::{DepositOutcome, Limits};
use crate::events::{Deposited, VaultRefunded};
use crate::instructions::Operations;

/// Deposit up to 1 SOL, or, once the vault already holds its target,
/// refund everything it holds to the owner instead.
///
/// The target is compared against the balance from *before* this call, so
/// the deposit that reaches the target is kept and the next one triggers
/// the refund. Nothing is pulled from the owner on the refund path.
pub fn deposit(ctx: Context<Operations>, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    let record = accounts.load_state(&ctx.bumps)?;
    let limits = Limits::from_rent(&Rent::get()?);
    let balance = limits.custodied(accounts.vault.lamports());

    match limits.plan_deposit(
        balance,
        record.target_amount,
        amount,
        accounts.owner.lamports(),
    )? {
        DepositOutcome::Applied { new_balance } => {
            accounts.pay_in(amount)?;

            emit!(Deposited {
                owner: accounts.owner.key(),
                amount,
                balance: new_balance,
            });
            msg!("Deposited {} lamports. Vault balance: {}", amount, new_balance);
        }
        DepositOutcome::Refunded { amount: refund } => {
            accounts.pay_out(record.vault_bump, refund)?;

            emit!(VaultRefunded {
                owner: accounts.owner.key(),
                amount: refund,
                target_amount: record.target_amount,
            });
            msg!(
                "Target {} reached, refunded {} lamports to {}",
                record.target_amount,
                refund,
                accounts.owner.key()
            );
        }
    }

    Ok(())
}
