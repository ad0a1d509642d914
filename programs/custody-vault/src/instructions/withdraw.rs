use anchor_lang::prelude::*;

use crate::custody::Limits;
use crate::events::Withdrawn;
use crate::instructions::Operations;

/// Withdraw up to 3 SOL of custodied lamports back to the owner.
/// The vault's rent reserve is not part of the withdrawable balance.
pub fn withdraw(ctx: Context<Operations>, amount: u64) -> Result<()> {
    let accounts = &ctx.accounts;
    let record = accounts.load_state(&ctx.bumps)?;
    let limits = Limits::from_rent(&Rent::get()?);
    let balance = limits.custodied(accounts.vault.lamports());

    let remaining = limits.plan_withdraw(balance, amount)?;
    accounts.pay_out(record.vault_bump, amount)?;

    emit!(Withdrawn {
        owner: accounts.owner.key(),
        amount,
        balance: remaining,
    });
    msg!("Withdrawn {} lamports. Remaining balance: {}", amount, remaining);

    Ok(())
}
