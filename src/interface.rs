use soroban_sdk::{Address, Env, contractclient};

/// Per-NFT drip registry funded by the pool.
#[contractclient(name = "FaucetClient")]
pub trait Faucet {
    /// Pulls `initial_balance` from `operator` and starts the drip for
    /// `(nft, token_id)`. Panics on failure without changing its own state.
    fn register_seed(
        env: Env,
        nft: Address,
        token_id: u32,
        seeder: Address,
        operator: Address,
        daily_rate: i128,
        initial_balance: i128,
    );
}

#[contractclient(name = "NftClient")]
pub trait NonFungible {
    fn owner_of(env: Env, token_id: u32) -> Address;
}
