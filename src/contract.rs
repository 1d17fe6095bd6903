use crate::admin;
use crate::allowance;
use crate::balance;
use crate::config::{
    Constraints, PoolConfig, bump_instance, has_config, read_config, read_constraints,
    write_config, write_constraints,
};
use crate::error::PoolError;
use crate::interface::{FaucetClient, NftClient};
use crate::storage_types::AllowanceEntry;
use crate::validation::SeedQuote;
use soroban_sdk::{Address, Env, Symbol, Vec, contract, contractimpl, contracttype, log};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub balance: i128,
    pub allowances: Vec<AllowanceEntry>,
    pub constraints: Constraints,
}

#[contract]
pub struct SeedPool;

#[contractimpl]
impl SeedPool {
    /// Initialize the pool with its collaborators and first admin.
    ///
    /// `admin` must sign. Deploy and initialize in the same transaction so no
    /// other account can claim the pool in between.
    pub fn initialize(
        env: Env,
        admin: Address,
        faucet: Address,
        token: Address,
        constraints: Constraints,
    ) -> Result<(), PoolError> {
        admin.require_auth();
        if has_config(&env) {
            return Err(PoolError::AlreadyInitialized);
        }

        write_constraints(&env, &constraints)?;
        write_config(&env, &PoolConfig { faucet, token });
        admin::add_admin(&env, &admin)?;
        bump_instance(&env);

        env.events()
            .publish((Symbol::new(&env, "init"), admin), constraints);
        Ok(())
    }

    /// Replace the whole allowance ledger (admin only)
    pub fn set_allowances(
        env: Env,
        caller: Address,
        entries: Vec<AllowanceEntry>,
    ) -> Result<(), PoolError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        admin::require_active(&env)?;
        admin::require_admin(&env, &caller)?;

        allowance::write_allowances(&env, &entries)?;
        bump_instance(&env);

        env.events()
            .publish((Symbol::new(&env, "set_allowances"), caller), entries.len());
        Ok(())
    }

    /// Replace the seeding constraints (admin only)
    pub fn set_constraints(
        env: Env,
        caller: Address,
        constraints: Constraints,
    ) -> Result<(), PoolError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        admin::require_active(&env)?;
        admin::require_admin(&env, &caller)?;

        write_constraints(&env, &constraints)?;
        bump_instance(&env);

        env.events()
            .publish((Symbol::new(&env, "set_constraints"), caller), constraints);
        Ok(())
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), PoolError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        admin::require_admin(&env, &caller)?;

        admin::pause(&env)?;
        bump_instance(&env);

        env.events().publish((Symbol::new(&env, "pause"),), caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), PoolError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        admin::require_admin(&env, &caller)?;

        admin::unpause(&env)?;
        bump_instance(&env);

        env.events().publish((Symbol::new(&env, "unpause"),), caller);
        Ok(())
    }

    /// Grant the admin capability to `account` (admin only)
    pub fn add_admin(env: Env, caller: Address, account: Address) -> Result<(), PoolError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        admin::require_admin(&env, &caller)?;

        if admin::add_admin(&env, &account)? {
            env.events()
                .publish((Symbol::new(&env, "add_admin"), caller), account);
        }
        bump_instance(&env);
        Ok(())
    }

    /// Revoke the admin capability from `account` (admin only)
    pub fn remove_admin(env: Env, caller: Address, account: Address) -> Result<(), PoolError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        admin::require_admin(&env, &caller)?;

        if admin::remove_admin(&env, &account)? {
            env.events()
                .publish((Symbol::new(&env, "remove_admin"), caller), account);
        }
        bump_instance(&env);
        Ok(())
    }

    /// Send the entire custody balance to the calling admin. Works while paused;
    /// allowances and constraints are left as they are.
    pub fn shutdown(env: Env, caller: Address) -> Result<i128, PoolError> {
        caller.require_auth();
        let config = read_config(&env)?;
        admin::require_admin(&env, &caller)?;

        let amount = balance::read_custody(&env, &config.token);
        if amount > 0 {
            balance::pay_out(&env, &config.token, &caller, amount)?;
        }
        bump_instance(&env);

        log!(&env, "pool drained", amount);
        env.events()
            .publish((Symbol::new(&env, "shutdown"), caller), amount);
        Ok(amount)
    }

    /// Delegate part of the caller's allowance to `to` as a new ledger entry
    pub fn grant(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), PoolError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        admin::require_active(&env)?;

        let constraints = read_constraints(&env)?;
        allowance::grant_allowance(&env, &caller, &to, amount, constraints.min_grant)?;
        bump_instance(&env);

        env.events()
            .publish((Symbol::new(&env, "grant"), caller, to), amount);
        Ok(())
    }

    /// Commit `daily_rate * num_days` pooled tokens to the faucet drip of
    /// `(nft, token_id)`, charged to the caller's allowance
    pub fn seed(
        env: Env,
        caller: Address,
        nft: Address,
        token_id: u32,
        daily_rate: i128,
        num_days: u32,
    ) -> Result<(), PoolError> {
        caller.require_auth();
        let config = read_config(&env)?;
        admin::require_active(&env)?;

        let constraints = read_constraints(&env)?;
        let ownership_satisfied = if constraints.require_owned_nft {
            NftClient::new(&env, &nft).owner_of(&token_id) == caller
        } else {
            true
        };
        let quote = SeedQuote::validate(&constraints, daily_rate, num_days, ownership_satisfied)?;

        // Ledger effects land before the faucet is called.
        allowance::spend_allowance(&env, &caller, quote.lifetime_value)?;
        let before = balance::require_custody(&env, &config.token, quote.lifetime_value)?;
        bump_instance(&env);

        balance::approve_spender(&env, &config.token, &config.faucet, quote.lifetime_value);
        FaucetClient::new(&env, &config.faucet).register_seed(
            &nft,
            &token_id,
            &caller,
            &env.current_contract_address(),
            &quote.daily_rate,
            &quote.lifetime_value,
        );

        let after = balance::read_custody(&env, &config.token);
        if before.checked_sub(after) != Some(quote.lifetime_value) {
            return Err(PoolError::SettlementMismatch);
        }

        log!(&env, "seeded", token_id, quote.lifetime_value);
        env.events().publish(
            (Symbol::new(&env, "seed"), caller, nft),
            (token_id, quote.daily_rate, quote.num_days, quote.lifetime_value),
        );
        Ok(())
    }

    /// Custody balance, ledger and constraints in one view
    pub fn get_info(env: Env) -> Result<PoolInfo, PoolError> {
        let config = read_config(&env)?;
        bump_instance(&env);
        Ok(PoolInfo {
            balance: balance::read_custody(&env, &config.token),
            allowances: allowance::read_allowances(&env),
            constraints: read_constraints(&env)?,
        })
    }

    /// Amount of the first ledger entry for `seeder`, 0 if there is none
    pub fn allowance_of(env: Env, seeder: Address) -> i128 {
        bump_instance(&env);
        let entries = allowance::read_allowances(&env);
        allowance::lookup(&entries, &seeder)
            .map(|(_, entry)| entry.amount)
            .unwrap_or(0)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        let config = read_config(&env)?;
        bump_instance(&env);
        Ok(config)
    }

    pub fn is_admin(env: Env, account: Address) -> bool {
        bump_instance(&env);
        admin::is_admin(&env, &account)
    }

    pub fn is_paused(env: Env) -> bool {
        bump_instance(&env);
        admin::is_paused(&env)
    }

    // Helper functions
    fn require_initialized(env: &Env) -> Result<(), PoolError> {
        if !has_config(env) {
            return Err(PoolError::NotInitialized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_types::{DAY_IN_LEDGERS, INSTANCE_BUMP_AMOUNT};
    use soroban_sdk::testutils::{Ledger, storage::Instance as _};
    use soroban_sdk::{Address, Env, testutils::Address as _};

    fn constraints() -> Constraints {
        Constraints {
            min_daily_rate: 1_000,
            max_daily_rate: 1_000,
            min_value: 50_000,
            max_value: 1_095_000,
            require_owned_nft: true,
            min_grant: 10_000,
        }
    }

    #[test]
    fn test_initialize() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register(SeedPool, ());
        let client = SeedPoolClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let faucet = Address::generate(&env);
        let token = Address::generate(&env);

        client.initialize(&admin, &faucet, &token, &constraints());

        let config = client.get_config();
        assert_eq!(config.faucet, faucet);
        assert_eq!(config.token, token);
        assert!(client.is_admin(&admin));
        assert!(!client.is_paused());
        assert_eq!(client.allowance_of(&admin), 0);
    }

    #[test]
    fn test_initialize_rejects_bad_constraints() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register(SeedPool, ());
        let client = SeedPoolClient::new(&env, &contract_id);

        let mut bad = constraints();
        bad.min_value = 2_000_000;

        let result = client.try_initialize(
            &Address::generate(&env),
            &Address::generate(&env),
            &Address::generate(&env),
            &bad,
        );
        assert_eq!(result, Err(Ok(PoolError::InvalidConstraints)));
        assert_eq!(client.try_get_config(), Err(Ok(PoolError::NotInitialized)));
    }

    #[test]
    fn test_reads_extend_instance_ttl() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register(SeedPool, ());
        let client = SeedPoolClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        client.initialize(
            &admin,
            &Address::generate(&env),
            &Address::generate(&env),
            &constraints(),
        );

        let ttl = || env.as_contract(&contract_id, || env.storage().instance().get_ttl());
        assert_eq!(ttl(), INSTANCE_BUMP_AMOUNT);

        env.ledger().with_mut(|li| li.sequence_number += 2 * DAY_IN_LEDGERS);
        assert_eq!(ttl(), INSTANCE_BUMP_AMOUNT - 2 * DAY_IN_LEDGERS);

        assert!(!client.is_paused());
        assert_eq!(ttl(), INSTANCE_BUMP_AMOUNT);
    }
}
