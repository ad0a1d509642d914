//! Off-chain helpers for wallets and scripts: build the three instructions
//! with the right account metas and decode what the ledger returns.
//! Signing and submission stay with the caller.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{system_program, InstructionData, ToAccountMetas};

use crate::constants::LAMPORTS_PER_SOL;
use crate::custody::Limits;
use crate::pda::VaultAddresses;
use crate::state::VaultState;

pub fn initialize_ix(owner: &Pubkey, target_amount: u64) -> Instruction {
    let addrs = VaultAddresses::derive(owner);
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::Initialize {
            owner: *owner,
            state: addrs.state,
            vault: addrs.vault,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::Initialize { target_amount }.data(),
    }
}

pub fn deposit_ix(owner: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: operations_metas(owner),
        data: crate::instruction::Deposit { amount }.data(),
    }
}

pub fn withdraw_ix(owner: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: operations_metas(owner),
        data: crate::instruction::Withdraw { amount }.data(),
    }
}

fn operations_metas(owner: &Pubkey) -> Vec<AccountMeta> {
    let addrs = VaultAddresses::derive(owner);
    crate::accounts::Operations {
        owner: *owner,
        state: addrs.state,
        vault: addrs.vault,
        system_program: system_program::ID,
    }
    .to_account_metas(None)
}

/// Decode a fetched State Record and confirm its bumps point back at the
/// owner's canonical addresses.
pub fn read_state(owner: &Pubkey, data: &[u8]) -> Result<VaultState> {
    let state = VaultState::from_record(data)?;
    if !VaultAddresses::derive(owner).verify(&state) {
        return err!(crate::error::VaultError::MalformedRecord);
    }
    Ok(state)
}

/// Custodied balance for a raw vault lamport count under `rent`.
pub fn vault_balance(vault_lamports: u64, rent: &Rent) -> u64 {
    Limits::from_rent(rent).custodied(vault_lamports)
}

pub fn sol_to_lamports(sol: f64) -> u64 {
    (sol * LAMPORTS_PER_SOL as f64).floor() as u64
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// `1_500_000_000` -> `"1.5"`, `1` -> `"0.000000001"`, `0` -> `"0"`.
pub fn format_sol(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let frac = lamports % LAMPORTS_PER_SOL;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:09}", frac);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}
