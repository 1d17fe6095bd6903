//! Ordered allowance ledger.
//!
//! Entries keep insertion order, an address may appear more than once, and
//! entries are never removed. Lookups resolve to the first matching entry.

use crate::error::PoolError;
use crate::storage_types::{AllowanceEntry, DataKey};
use soroban_sdk::{Address, Env, Vec};

pub fn read_allowances(e: &Env) -> Vec<AllowanceEntry> {
    e.storage()
        .instance()
        .get(&DataKey::Allowances)
        .unwrap_or_else(|| Vec::new(e))
}

/// Installs `entries` verbatim, duplicates and zero amounts included.
pub fn write_allowances(e: &Env, entries: &Vec<AllowanceEntry>) -> Result<(), PoolError> {
    for entry in entries.iter() {
        if entry.amount < 0 {
            return Err(PoolError::NegativeAmount);
        }
    }
    e.storage().instance().set(&DataKey::Allowances, entries);
    Ok(())
}

pub fn lookup(entries: &Vec<AllowanceEntry>, seeder: &Address) -> Option<(u32, AllowanceEntry)> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.seeder == *seeder {
            return Some((index as u32, entry));
        }
    }
    None
}

/// Decrements the first entry for `seeder` in place.
pub fn consume(
    entries: &mut Vec<AllowanceEntry>,
    seeder: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    if amount < 0 {
        return Err(PoolError::NegativeAmount);
    }
    let (index, mut entry) = lookup(entries, seeder).ok_or(PoolError::InsufficientAllowance)?;
    if entry.amount < amount {
        return Err(PoolError::InsufficientAllowance);
    }
    entry.amount = entry
        .amount
        .checked_sub(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;
    entries.set(index, entry);
    Ok(())
}

/// Moves `amount` from the first entry of `from` into a new entry for `to`
/// appended at the end. The ledger total is unchanged.
pub fn grant(
    entries: &mut Vec<AllowanceEntry>,
    from: &Address,
    to: &Address,
    amount: i128,
    min_grant: i128,
) -> Result<(), PoolError> {
    if amount < 0 {
        return Err(PoolError::NegativeAmount);
    }
    if amount < min_grant {
        return Err(PoolError::GrantTooSmall);
    }
    consume(entries, from, amount)?;
    entries.push_back(AllowanceEntry {
        seeder: to.clone(),
        amount,
    });
    Ok(())
}

pub fn spend_allowance(e: &Env, seeder: &Address, amount: i128) -> Result<(), PoolError> {
    let mut entries = read_allowances(e);
    consume(&mut entries, seeder, amount)?;
    e.storage().instance().set(&DataKey::Allowances, &entries);
    Ok(())
}

pub fn grant_allowance(
    e: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
    min_grant: i128,
) -> Result<(), PoolError> {
    let mut entries = read_allowances(e);
    grant(&mut entries, from, to, amount, min_grant)?;
    e.storage().instance().set(&DataKey::Allowances, &entries);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, vec};

    fn entry(seeder: &Address, amount: i128) -> AllowanceEntry {
        AllowanceEntry {
            seeder: seeder.clone(),
            amount,
        }
    }

    fn total(entries: &Vec<AllowanceEntry>) -> i128 {
        entries.iter().map(|e| e.amount).sum()
    }

    #[test]
    fn test_lookup_returns_first_match() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let entries = vec![&env, entry(&b, 1), entry(&a, 10), entry(&a, 20)];

        let (index, found) = lookup(&entries, &a).unwrap();
        assert_eq!(index, 1);
        assert_eq!(found.amount, 10);
        assert!(lookup(&entries, &Address::generate(&env)).is_none());
    }

    #[test]
    fn test_consume_touches_only_first_duplicate() {
        let env = Env::default();
        let a = Address::generate(&env);
        let mut entries = vec![&env, entry(&a, 10), entry(&a, 20)];

        consume(&mut entries, &a, 10).unwrap();
        assert_eq!(entries, vec![&env, entry(&a, 0), entry(&a, 20)]);

        // Duplicates are not aggregated.
        assert_eq!(
            consume(&mut entries, &a, 5),
            Err(PoolError::InsufficientAllowance)
        );
    }

    #[test]
    fn test_consume_unknown_seeder() {
        let env = Env::default();
        let mut entries: Vec<AllowanceEntry> = Vec::new(&env);
        assert_eq!(
            consume(&mut entries, &Address::generate(&env), 0),
            Err(PoolError::InsufficientAllowance)
        );
    }

    #[test]
    fn test_grant_conserves_total_and_appends() {
        let env = Env::default();
        let a2 = Address::generate(&env);
        let a3 = Address::generate(&env);
        let a4 = Address::generate(&env);
        let mut entries = vec![&env, entry(&a2, 50_000)];

        grant(&mut entries, &a2, &a3, 20_000, 10_000).unwrap();
        assert_eq!(total(&entries), 50_000);
        assert_eq!(entries.len(), 2);

        grant(&mut entries, &a3, &a4, 15_000, 10_000).unwrap();
        assert_eq!(
            entries,
            vec![&env, entry(&a2, 30_000), entry(&a3, 5_000), entry(&a4, 15_000)]
        );
    }

    #[test]
    fn test_grant_below_minimum() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let mut entries = vec![&env, entry(&a, 50_000)];

        assert_eq!(
            grant(&mut entries, &a, &b, 9_999, 10_000),
            Err(PoolError::GrantTooSmall)
        );
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_rejects_negative_entry() {
        let env = Env::default();
        let contract_id = env.register(crate::contract::SeedPool, ());
        let a = Address::generate(&env);
        env.as_contract(&contract_id, || {
            let entries = vec![&env, entry(&a, -1)];
            assert_eq!(
                write_allowances(&env, &entries),
                Err(PoolError::NegativeAmount)
            );
            assert_eq!(read_allowances(&env).len(), 0);
        });
    }
}
