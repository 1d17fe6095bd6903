use crate::error::PoolError;
use crate::storage_types::{DataKey, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env, contracttype};

/// Collaborators fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub faucet: Address,
    pub token: Address,
}

/// Admin policy every seed and grant is checked against. Replaced as a whole.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraints {
    pub min_daily_rate: i128,
    pub max_daily_rate: i128,
    pub min_value: i128,
    pub max_value: i128,
    pub require_owned_nft: bool,
    pub min_grant: i128,
}

impl Constraints {
    pub fn check(&self) -> Result<(), PoolError> {
        if self.min_daily_rate < 0
            || self.max_daily_rate < 0
            || self.min_value < 0
            || self.max_value < 0
            || self.min_grant < 0
        {
            return Err(PoolError::InvalidConstraints);
        }
        if self.min_daily_rate > self.max_daily_rate || self.min_value > self.max_value {
            return Err(PoolError::InvalidConstraints);
        }
        Ok(())
    }
}

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn read_config(e: &Env) -> Result<PoolConfig, PoolError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

pub fn write_config(e: &Env, config: &PoolConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn read_constraints(e: &Env) -> Result<Constraints, PoolError> {
    e.storage()
        .instance()
        .get(&DataKey::Constraints)
        .ok_or(PoolError::NotInitialized)
}

pub fn write_constraints(e: &Env, constraints: &Constraints) -> Result<(), PoolError> {
    constraints.check()?;
    e.storage()
        .instance()
        .set(&DataKey::Constraints, constraints);
    Ok(())
}
