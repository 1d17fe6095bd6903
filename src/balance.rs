//! Pool custody. The token contract is the only source of truth for what the
//! pool holds; nothing here caches a balance.

use crate::error::PoolError;
use soroban_sdk::{Address, Env, token};

pub fn read_custody(e: &Env, token: &Address) -> i128 {
    token::TokenClient::new(e, token).balance(&e.current_contract_address())
}

pub fn require_custody(e: &Env, token: &Address, amount: i128) -> Result<i128, PoolError> {
    let balance = read_custody(e, token);
    if balance < amount {
        return Err(PoolError::InsufficientPoolBalance);
    }
    Ok(balance)
}

pub fn pay_out(e: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), PoolError> {
    require_custody(e, token, amount)?;
    token::TokenClient::new(e, token).transfer(&e.current_contract_address(), to, &amount);
    Ok(())
}

/// Lets `spender` pull exactly `amount` from custody during this ledger.
pub fn approve_spender(e: &Env, token: &Address, spender: &Address, amount: i128) {
    token::TokenClient::new(e, token).approve(
        &e.current_contract_address(),
        spender,
        &amount,
        &e.ledger().sequence(),
    );
}
