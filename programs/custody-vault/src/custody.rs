//! Deposit / withdraw rules, kept free of account plumbing so every
//! decision can be checked before a single lamport moves.
//!
//! Balances here are *custodied* balances: vault lamports above the
//! rent-exempt reserve that keeps the vault account alive.

use anchor_lang::prelude::*;

use crate::constants::{DEPOSIT_LIMIT, WITHDRAW_LIMIT};
use crate::error::VaultError;

/// What a deposit call turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepositOutcome {
    /// `amount` moves owner -> vault; `new_balance` is the custodied balance after
    Applied { new_balance: u64 },
    /// The target was already met: the whole custodied balance goes back to the owner
    Refunded { amount: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub deposit_cap: u64,
    pub withdraw_cap: u64,
    /// Lamports the vault account must always keep
    pub reserve: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self::with_reserve(0)
    }
}

impl Limits {
    pub fn with_reserve(reserve: u64) -> Self {
        Self {
            deposit_cap: DEPOSIT_LIMIT,
            withdraw_cap: WITHDRAW_LIMIT,
            reserve,
        }
    }

    /// Reserve for a zero-data system account under the given rent schedule.
    pub fn from_rent(rent: &Rent) -> Self {
        Self::with_reserve(rent.minimum_balance(0))
    }

    /// Lamports held on the owner's behalf.
    pub fn custodied(&self, vault_lamports: u64) -> u64 {
        vault_lamports.saturating_sub(self.reserve)
    }

    /// Lamports still needed to bring a fresh vault up to the reserve.
    pub fn reserve_shortfall(&self, vault_lamports: u64) -> u64 {
        self.reserve.saturating_sub(vault_lamports)
    }

    /// Decide a deposit.
    ///
    /// The cap is checked first, then the target against the balance the
    /// vault held *before* this call. Meeting the target redirects the call
    /// into a refund whatever the amount, zero included, so the amount and
    /// the owner's own funds are only checked on the normal path.
    pub fn plan_deposit(
        &self,
        balance: u64,
        target_amount: u64,
        amount: u64,
        owner_lamports: u64,
    ) -> Result<DepositOutcome> {
        require!(amount <= self.deposit_cap, VaultError::DepositLimitExceeded);

        if balance >= target_amount {
            return Ok(DepositOutcome::Refunded { amount: balance });
        }

        require!(amount > 0, VaultError::InvalidAmount);
        require!(owner_lamports >= amount, VaultError::TransferFailed);
        let new_balance = balance.checked_add(amount).ok_or(VaultError::Overflow)?;
        Ok(DepositOutcome::Applied { new_balance })
    }

    /// Decide a withdrawal and return the custodied balance left afterwards.
    pub fn plan_withdraw(&self, balance: u64, amount: u64) -> Result<u64> {
        require!(amount > 0, VaultError::InvalidAmount);
        require!(amount <= self.withdraw_cap, VaultError::WithdrawLimitExceeded);
        require!(amount <= balance, VaultError::InsufficientFunds);

        balance.checked_sub(amount).ok_or_else(|| VaultError::Overflow.into())
    }
}
