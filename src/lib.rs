#![no_std]

mod admin;
mod allowance;
mod balance;
mod config;
mod contract;
mod error;
mod interface;
mod storage_types;
mod validation;


pub use crate::config::{Constraints, PoolConfig};
pub use crate::contract::{PoolInfo, SeedPool, SeedPoolClient};
pub use crate::error::PoolError;
pub use crate::interface::{Faucet, FaucetClient, NftClient, NonFungible};
pub use crate::storage_types::AllowanceEntry;
