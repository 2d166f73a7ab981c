#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are deprecated upstream but remain the query surface here
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # GooseToken pallet
//!
//! A fungible token with an admin role list and a blacklist.
//!
//! Admins mint, burn and manage both lists. Blacklisted accounts can never
//! become admins and cannot be the target of `mint` or `burn_from`. The admin
//! set and the blacklist are kept disjoint at every mutation point.
//!
//! Guards run in a fixed order: role check, then blacklist/target-state
//! check, then balance/allowance sufficiency. Every check runs before the
//! first storage write of a call.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Log target for everything emitted by this pallet.
pub const LOG_TARGET: &str = "runtime::goose-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Weight information for the dispatchables of this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Goose Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "GOOSE")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Always equals the sum of `Balances`.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Amount a spender (second key) may move or burn on behalf of an owner (first key).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Accounts allowed to mint, burn and manage the admin list and blacklist.
    #[pallet::storage]
    #[pallet::getter(fn is_admin)]
    pub type Admins<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Banned accounts. Never overlaps with `Admins`.
    #[pallet::storage]
    #[pallet::getter(fn is_blacklisted)]
    pub type Blacklist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved. `None` stands for the zero address: `from: None` is a
        /// mint, `to: None` is a burn.
        Transfer { from: Option<T::AccountId>, to: Option<T::AccountId>, amount: u128 },
        /// Allowance of `spender` over the tokens of `owner` was set to `amount`.
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        AdminAdded { account: T::AccountId },
        AdminRemoved { account: T::AccountId },
        AddedToBlacklist { account: T::AccountId },
        RemovedFromBlacklist { account: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Only admins have rights for this action.
        Unauthorized,
        /// Cannot add admin to admin list.
        AlreadyAdmin,
        /// Cannot remove user from admins if the user is not the admin.
        NotAdmin,
        /// Users in blacklist are banned.
        Blacklisted,
        /// Cannot add admin to blacklist.
        CannotBlacklistAdmin,
        /// Cannot add user to blacklist if the user is already there.
        AlreadyBlacklisted,
        /// Cannot remove user from blacklist that is not in there.
        NotBlacklisted,
        InsufficientBalance,
        /// The spender's allowance over the owner's tokens is below the
        /// requested amount. Spender, available allowance and requested amount
        /// are logged at debug level under `runtime::goose-token`; module
        /// errors cannot carry them.
        InsufficientAllowance,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Move `amount` from the caller to `to`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(sender, to, amount)
        }

        /// Set the allowance of `spender` over the caller's tokens to `amount`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Move `amount` from `owner` to `to`, spending the caller's allowance.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining = Self::checked_allowance(&owner, &spender, amount)?;
            Self::do_transfer(owner.clone(), to, amount)?;
            Allowances::<T>::insert(&owner, &spender, remaining);
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;
            Self::ensure_not_blacklisted(&to)?;
            Self::do_mint(to, amount)
        }

        /// Burn `amount` from the caller's own balance.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;
            Self::do_burn(who, amount)
        }

        /// Burn `amount` from `owner`, spending the caller's allowance.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::burn_from())]
        pub fn burn_from(origin: OriginFor<T>, owner: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;
            Self::ensure_not_blacklisted(&owner)?;
            let remaining = Self::checked_allowance(&owner, &who, amount)?;
            Self::do_burn(owner.clone(), amount)?;
            Allowances::<T>::insert(&owner, &who, remaining);
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::add_admin())]
        pub fn add_admin(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;
            ensure!(!Admins::<T>::get(&account), Error::<T>::AlreadyAdmin);
            Self::ensure_not_blacklisted(&account)?;

            Admins::<T>::insert(&account, true);
            log::debug!(target: LOG_TARGET, "{who:?} granted admin to {account:?}");
            Self::deposit_event(Event::AdminAdded { account });
            Ok(())
        }

        /// Revoke admin rights. An admin may remove itself, including when it
        /// is the last one.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::remove_admin())]
        pub fn remove_admin(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;
            ensure!(Admins::<T>::get(&account), Error::<T>::NotAdmin);

            Admins::<T>::remove(&account);
            log::debug!(target: LOG_TARGET, "{who:?} revoked admin from {account:?}");
            Self::deposit_event(Event::AdminRemoved { account });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::add_to_blacklist())]
        pub fn add_to_blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;
            ensure!(!Admins::<T>::get(&account), Error::<T>::CannotBlacklistAdmin);
            ensure!(!Blacklist::<T>::get(&account), Error::<T>::AlreadyBlacklisted);

            Blacklist::<T>::insert(&account, true);
            log::debug!(target: LOG_TARGET, "{who:?} blacklisted {account:?}");
            Self::deposit_event(Event::AddedToBlacklist { account });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::remove_from_blacklist())]
        pub fn remove_from_blacklist(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;
            ensure!(Blacklist::<T>::get(&account), Error::<T>::NotBlacklisted);

            Blacklist::<T>::remove(&account);
            log::debug!(target: LOG_TARGET, "{who:?} removed {account:?} from blacklist");
            Self::deposit_event(Event::RemovedFromBlacklist { account });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deploying account. Receives the initial supply and becomes an admin.
        pub deployer: Option<T::AccountId>,
        /// Amount minted to the deployer
        pub initial_supply: u128,
        /// Additional admins besides the deployer
        pub initial_admins: Vec<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            match self.deployer {
                Some(ref deployer) => {
                    Admins::<T>::insert(deployer, true);
                    Balances::<T>::insert(deployer, self.initial_supply);
                    TotalSupply::<T>::put(self.initial_supply);
                }
                None => assert!(self.initial_supply == 0, "Initial supply requires a deployer"),
            }

            // Repeated entries collapse into a single admin.
            for admin in &self.initial_admins {
                Admins::<T>::insert(admin, true);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Fails with `Unauthorized` unless `who` is an admin.
    pub fn ensure_admin(who: &T::AccountId) -> DispatchResult {
        ensure!(Admins::<T>::get(who), Error::<T>::Unauthorized);
        Ok(())
    }

    /// Fails with `Blacklisted` if `who` is on the blacklist.
    pub fn ensure_not_blacklisted(who: &T::AccountId) -> DispatchResult {
        ensure!(!Blacklist::<T>::get(who), Error::<T>::Blacklisted);
        Ok(())
    }

    /// Allowance left after `spender` uses `amount` of `owner`'s tokens.
    ///
    /// Read-only: callers write the returned value back once every other
    /// check of the call has passed.
    fn checked_allowance(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
    ) -> Result<u128, DispatchError> {
        let available = Allowances::<T>::get(owner, spender);
        match available.checked_sub(amount) {
            Some(remaining) => Ok(remaining),
            None => {
                log::debug!(
                    target: LOG_TARGET,
                    "insufficient allowance: spender {spender:?} has {available} of {owner:?}, needs {amount}"
                );
                Err(Error::<T>::InsufficientAllowance.into())
            }
        }
    }

    fn do_transfer(from: T::AccountId, to: T::AccountId, amount: u128) -> DispatchResult {
        let from_balance = Balances::<T>::get(&from);
        let new_from_balance =
            from_balance.checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

        if from != to {
            let new_to_balance =
                Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(&from, new_from_balance);
            Balances::<T>::insert(&to, new_to_balance);
        }

        log::trace!(target: LOG_TARGET, "transfer {amount} from {from:?} to {to:?}");
        Self::deposit_event(Event::Transfer { from: Some(from), to: Some(to), amount });
        Ok(())
    }

    fn do_mint(to: T::AccountId, amount: u128) -> DispatchResult {
        let new_supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
        let new_balance = Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        TotalSupply::<T>::put(new_supply);
        Balances::<T>::insert(&to, new_balance);

        log::trace!(target: LOG_TARGET, "minted {amount} to {to:?}");
        Self::deposit_event(Event::Transfer { from: None, to: Some(to), amount });
        Ok(())
    }

    fn do_burn(from: T::AccountId, amount: u128) -> DispatchResult {
        let new_balance =
            Balances::<T>::get(&from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

        Balances::<T>::insert(&from, new_balance);
        // Supply covers every individual balance, so this never saturates.
        TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));

        log::trace!(target: LOG_TARGET, "burned {amount} from {from:?}");
        Self::deposit_event(Event::Transfer { from: Some(from), to: None, amount });
        Ok(())
    }

    /// Check the ledger invariants: no account is both admin and blacklisted,
    /// and balances add up to the total supply.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        for (account, is_admin) in Admins::<T>::iter() {
            ensure!(
                !(is_admin && Blacklist::<T>::get(&account)),
                "An admin is on the blacklist"
            );
        }

        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("Sum of balances overflows")?;
        ensure!(sum == TotalSupply::<T>::get(), "Sum of balances differs from total supply");

        Ok(())
    }
}
