//! Minimal NEP-141 Mock FT for Integration Testing
//!
//! Stands in for the payment token the marketplace allow-lists:
//! - mint (test faucet; 1000 whole tokens by default)
//! - ft_balance_of / ft_total_supply / ft_metadata (views)
//! - ft_transfer (plain transfer, 1 yoctoNEAR)

use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{env, log, near, AccountId, NearToken, PanicOnDefault};

pub const DEFAULT_DECIMALS: u8 = 18;
/// 1000 tokens at 18 decimals.
pub const DEFAULT_MINT_AMOUNT: u128 = 1_000 * 10u128.pow(DEFAULT_DECIMALS as u32);

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct MockFT {
    balances: LookupMap<AccountId, u128>,
    total_supply: u128,
    decimals: u8,
}

#[near(serializers = [json])]
pub struct FtMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

#[near]
impl MockFT {
    /// `total_supply` (default 0) is credited to `owner_id`.
    #[init]
    pub fn new(owner_id: AccountId, total_supply: Option<U128>, decimals: Option<u8>) -> Self {
        let total_supply = total_supply.map(|s| s.0).unwrap_or(0);
        let mut balances = LookupMap::new(b"b");
        if total_supply > 0 {
            balances.insert(owner_id, total_supply);
        }
        Self {
            balances,
            total_supply,
            decimals: decimals.unwrap_or(DEFAULT_DECIMALS),
        }
    }

    // =========================================================================
    // NEP-141 Core
    // =========================================================================

    #[payable]
    pub fn ft_transfer(&mut self, receiver_id: AccountId, amount: U128, memo: Option<String>) {
        assert_eq!(
            env::attached_deposit(),
            NearToken::from_yoctonear(1),
            "Requires 1 yoctoNEAR"
        );
        let sender_id = env::predecessor_account_id();
        self.internal_transfer(&sender_id, &receiver_id, amount.0, memo);
    }

    pub fn ft_balance_of(&self, account_id: AccountId) -> U128 {
        U128(self.balance(&account_id))
    }

    pub fn ft_total_supply(&self) -> U128 {
        U128(self.total_supply)
    }

    pub fn ft_metadata(&self) -> FtMetadata {
        FtMetadata {
            spec: "ft-1.0.0".to_string(),
            name: "Mock Payment Token".to_string(),
            symbol: "MOCK".to_string(),
            decimals: self.decimals,
        }
    }

    // =========================================================================
    // Test Helpers (not in real FT)
    // =========================================================================

    /// Mint to `account_id`; `amount` defaults to `DEFAULT_MINT_AMOUNT`.
    pub fn mint(&mut self, account_id: AccountId, amount: Option<U128>) -> U128 {
        let amount = amount.map(|a| a.0).unwrap_or(DEFAULT_MINT_AMOUNT);
        let balance = self
            .balance(&account_id)
            .checked_add(amount)
            .unwrap_or_else(|| env::panic_str("Balance overflow"));
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .unwrap_or_else(|| env::panic_str("Total supply overflow"));
        log!("Minted {} to {}", amount, account_id);
        self.balances.insert(account_id, balance);
        U128(balance)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn balance(&self, account_id: &AccountId) -> u128 {
        self.balances.get(account_id).copied().unwrap_or(0)
    }

    fn internal_transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        amount: u128,
        _memo: Option<String>,
    ) {
        assert_ne!(sender_id, receiver_id, "Sender and receiver should be different");
        assert!(amount > 0, "The amount should be a positive number");
        let sender_balance = self.balance(sender_id);
        assert!(sender_balance >= amount, "Insufficient balance");

        self.balances.insert(sender_id.clone(), sender_balance - amount);
        let receiver_balance = self.balance(receiver_id);
        self.balances
            .insert(receiver_id.clone(), receiver_balance + amount);
    }
}
