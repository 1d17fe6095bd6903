use crate::error::PoolError;
use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env};

pub fn is_admin(e: &Env, account: &Address) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Admin(account.clone()))
        .unwrap_or(false)
}

pub fn require_admin(e: &Env, account: &Address) -> Result<(), PoolError> {
    if !is_admin(e, account) {
        return Err(PoolError::RequiresAdmin);
    }
    Ok(())
}

fn read_admin_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::AdminCount)
        .unwrap_or(0)
}

/// Returns false when `account` already held the role.
pub fn add_admin(e: &Env, account: &Address) -> Result<bool, PoolError> {
    if is_admin(e, account) {
        return Ok(false);
    }
    let count = read_admin_count(e)
        .checked_add(1)
        .ok_or(PoolError::ArithmeticOverflow)?;
    e.storage()
        .instance()
        .set(&DataKey::Admin(account.clone()), &true);
    e.storage().instance().set(&DataKey::AdminCount, &count);
    Ok(true)
}

/// Returns false when `account` did not hold the role.
pub fn remove_admin(e: &Env, account: &Address) -> Result<bool, PoolError> {
    if !is_admin(e, account) {
        return Ok(false);
    }
    let count = read_admin_count(e);
    if count <= 1 {
        return Err(PoolError::LastAdmin);
    }
    e.storage()
        .instance()
        .remove(&DataKey::Admin(account.clone()));
    e.storage().instance().set(&DataKey::AdminCount, &(count - 1));
    Ok(true)
}

pub fn is_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn require_active(e: &Env) -> Result<(), PoolError> {
    if is_paused(e) {
        return Err(PoolError::Paused);
    }
    Ok(())
}

/// Active -> Paused.
pub fn pause(e: &Env) -> Result<(), PoolError> {
    require_active(e)?;
    e.storage().instance().set(&DataKey::Paused, &true);
    Ok(())
}

/// Paused -> Active.
pub fn unpause(e: &Env) -> Result<(), PoolError> {
    if !is_paused(e) {
        return Err(PoolError::NotPaused);
    }
    e.storage().instance().set(&DataKey::Paused, &false);
    Ok(())
}
