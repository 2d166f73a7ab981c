//! Weights for pallet-goose-token.
//!
//! Each call is charged a flat execution cost plus the database reads and
//! writes it performs, as listed above each function. Regenerate with
//! `frame-omni-bencher` against the `runtime-benchmarks` build when a runtime
//! that includes this pallet is available.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-goose-token.
pub trait WeightInfo {
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn burn_from() -> Weight;
    fn add_admin() -> Weight;
    fn remove_admin() -> Weight;
    fn add_to_blacklist() -> Weight;
    fn remove_from_blacklist() -> Weight;
}

/// Weights for pallet-goose-token using the node's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Balances (2). Writes: Balances (2)
    fn transfer() -> Weight {
        Weight::from_parts(20_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Writes: Allowances (1)
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Reads: Allowances (1), Balances (2). Writes: Allowances (1), Balances (2)
    fn transfer_from() -> Weight {
        Weight::from_parts(28_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    // Reads: Admins (1), Blacklist (1), TotalSupply (1), Balances (1)
    // Writes: TotalSupply (1), Balances (1)
    fn mint() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Reads: Admins (1), Balances (1), TotalSupply (1). Writes: Balances (1), TotalSupply (1)
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Reads: Admins (1), Blacklist (1), Allowances (1), Balances (1), TotalSupply (1)
    // Writes: Allowances (1), Balances (1), TotalSupply (1)
    fn burn_from() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    // Reads: Admins (2), Blacklist (1). Writes: Admins (1)
    fn add_admin() -> Weight {
        Weight::from_parts(15_000_000, 3_513)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Reads: Admins (2). Writes: Admins (1)
    fn remove_admin() -> Weight {
        Weight::from_parts(14_000_000, 3_513)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Reads: Admins (2), Blacklist (1). Writes: Blacklist (1)
    fn add_to_blacklist() -> Weight {
        Weight::from_parts(15_000_000, 3_513)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Reads: Admins (1), Blacklist (1). Writes: Blacklist (1)
    fn remove_from_blacklist() -> Weight {
        Weight::from_parts(14_000_000, 3_513)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(20_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(28_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(22_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn_from() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn add_admin() -> Weight {
        Weight::from_parts(15_000_000, 3_513)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn remove_admin() -> Weight {
        Weight::from_parts(14_000_000, 3_513)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn add_to_blacklist() -> Weight {
        Weight::from_parts(15_000_000, 3_513)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn remove_from_blacklist() -> Weight {
        Weight::from_parts(14_000_000, 3_513)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
