#![no_main]

use custody_vault::constants::{DEPOSIT_LIMIT, WITHDRAW_LIMIT};
use custody_vault::custody::{DepositOutcome, Limits};
use libfuzzer_sys::fuzz_target;

// Layout: [target: u64][reserve: u32] then 9-byte steps of [op: u8][amount: u64].
fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }

    let target = u64::from_le_bytes(data[0..8].try_into().unwrap_or([0; 8])).max(1);
    let reserve = u32::from_le_bytes(data[8..12].try_into().unwrap_or([0; 4])) as u64;
    let limits = Limits::with_reserve(reserve);

    let mut vault = reserve;
    let mut owner = u64::MAX / 2;

    for step in data[12..].chunks_exact(9) {
        let amount = u64::from_le_bytes(step[1..9].try_into().unwrap_or([0; 8]));
        let balance = limits.custodied(vault);

        if step[0] % 2 == 0 {
            match limits.plan_deposit(balance, target, amount, owner) {
                Ok(DepositOutcome::Applied { new_balance }) => {
                    assert!(amount > 0 && amount <= DEPOSIT_LIMIT);
                    assert!(balance < target);
                    assert_eq!(new_balance, balance + amount);
                    owner -= amount;
                    vault += amount;
                }
                Ok(DepositOutcome::Refunded { amount: refund }) => {
                    assert!(balance >= target);
                    assert_eq!(refund, balance);
                    owner += refund;
                    vault -= refund;
                    assert_eq!(limits.custodied(vault), 0);
                }
                Err(_) => assert_eq!(limits.custodied(vault), balance),
            }
        } else {
            match limits.plan_withdraw(balance, amount) {
                Ok(remaining) => {
                    assert!(amount > 0 && amount <= WITHDRAW_LIMIT && amount <= balance);
                    vault -= amount;
                    owner += amount;
                    assert_eq!(limits.custodied(vault), remaining);
                }
                Err(_) => assert_eq!(limits.custodied(vault), balance),
            }
        }

        // the reserve is never touched
        assert!(vault >= reserve);
    }
});
