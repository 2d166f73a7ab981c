//! Benchmarking setup for pallet-goose-token

use super::*;

#[allow(unused)]
use crate::Pallet as GooseToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Credit `amount` to `who`, keeping total supply in line with balances.
fn fund<T: Config>(who: &T::AccountId, amount: u128) {
    Balances::<T>::mutate(who, |balance| *balance = balance.saturating_add(amount));
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

/// Caller with admin rights and a funded balance.
fn funded_admin<T: Config>(balance: u128) -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    Admins::<T>::insert(&caller, true);
    fund::<T>(&caller, balance);
    caller
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
        #[cfg(test)]
        assert!(GooseToken::<T>::do_try_state().is_ok());
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund::<T>(&owner, 10_000_000);
        Allowances::<T>::insert(&owner, &spender, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 0);
        #[cfg(test)]
        assert!(GooseToken::<T>::do_try_state().is_ok());
    }

    #[benchmark]
    fn mint() {
        let caller = funded_admin::<T>(0);
        let recipient: T::AccountId = account("recipient", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn burn() {
        let caller = funded_admin::<T>(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
    }

    #[benchmark]
    fn burn_from() {
        let caller = funded_admin::<T>(0);
        let owner: T::AccountId = account("owner", 0, 0);
        fund::<T>(&owner, 1_000_000);
        Allowances::<T>::insert(&owner, &caller, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), owner.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&owner), 0);
        assert_eq!(Allowances::<T>::get(&owner, &caller), 0);
        #[cfg(test)]
        assert!(GooseToken::<T>::do_try_state().is_ok());
    }

    #[benchmark]
    fn add_admin() {
        let caller = funded_admin::<T>(0);
        let target: T::AccountId = account("admin", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert_eq!(Admins::<T>::get(&target), true);
    }

    #[benchmark]
    fn remove_admin() {
        let caller = funded_admin::<T>(0);
        let target: T::AccountId = account("admin", 0, 0);
        Admins::<T>::insert(&target, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert_eq!(Admins::<T>::get(&target), false);
    }

    #[benchmark]
    fn add_to_blacklist() {
        let caller = funded_admin::<T>(0);
        let target: T::AccountId = account("banned", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert_eq!(Blacklist::<T>::get(&target), true);
    }

    #[benchmark]
    fn remove_from_blacklist() {
        let caller = funded_admin::<T>(0);
        let target: T::AccountId = account("banned", 0, 0);
        Blacklist::<T>::insert(&target, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert_eq!(Blacklist::<T>::get(&target), false);
    }

    impl_benchmark_test_suite!(GooseToken, crate::mock::new_test_ext(), crate::mock::Test);
}
