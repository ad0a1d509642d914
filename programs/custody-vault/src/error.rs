use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Vault state already exists for this owner")]
    AlreadyInitialized,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Vault state has not been created for this owner")]
    NotInitialized,
    #[msg("Deposit amount exceeds the 1 SOL limit per transaction")]
    DepositLimitExceeded,
    #[msg("Withdrawal amount exceeds the 3 SOL limit per transaction")]
    WithdrawLimitExceeded,
    #[msg("Insufficient funds in vault")]
    InsufficientFunds,
    #[msg("Lamport transfer failed")]
    TransferFailed,
    #[msg("Account data is not a vault state record")]
    MalformedRecord,
    #[msg("Arithmetic overflow")]
    Overflow,
}
