#![allow(dead_code)]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, vec, Address, Env, String, Vec,
};
use fee_router::{FeeRouter, FeeRouterClient, SwapData};

// Test constants
pub const INITIAL_FEE_RATE: u32 = 100; // 1%
pub const DEADLINE_WINDOW: u64 = 3_600;
pub const START_TIMESTAMP: u64 = 1_700_000_000;

// ============================================================
// MOCK WRAPPED NATIVE TOKEN
// ============================================================

#[contracttype]
enum WrappedKey {
    Native,
    Balance(Address),
    Allowance(Address, Address),
}

/// Minimal wrapped native token: the token calls the router uses plus
/// deposit/withdraw against a native asset contract
#[contract]
pub struct MockWrappedNative;

#[contractimpl]
impl MockWrappedNative {
    pub fn initialize(env: Env, native: Address) {
        env.storage().instance().set(&WrappedKey::Native, &native);
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        credit(&env, &to, amount);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        debit(&env, &from, amount);
        credit(&env, &to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        let key = WrappedKey::Allowance(from.clone(), spender);
        let allowance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        if allowance < amount {
            panic!("insufficient allowance");
        }
        env.storage().persistent().set(&key, &(allowance - amount));
        debit(&env, &from, amount);
        credit(&env, &to, amount);
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, _expiration_ledger: u32) {
        from.require_auth();
        env.storage()
            .persistent()
            .set(&WrappedKey::Allowance(from, spender), &amount);
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&WrappedKey::Allowance(from, spender))
            .unwrap_or(0)
    }

    /// Native in from `from`, wrapped out to `to`
    pub fn deposit(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let this = env.current_contract_address();
        token::Client::new(&env, &native(&env)).transfer(&from, &this, &amount);
        credit(&env, &to, amount);
    }

    /// Wrapped burned from `from`, native out to `to`
    pub fn withdraw(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        debit(&env, &from, amount);
        let this = env.current_contract_address();
        token::Client::new(&env, &native(&env)).transfer(&this, &to, &amount);
    }
}

fn native(env: &Env) -> Address {
    env.storage().instance().get(&WrappedKey::Native).unwrap()
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&WrappedKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn credit(env: &Env, id: &Address, amount: i128) {
    let balance = read_balance(env, id);
    env.storage()
        .persistent()
        .set(&WrappedKey::Balance(id.clone()), &(balance + amount));
}

fn debit(env: &Env, id: &Address, amount: i128) {
    let balance = read_balance(env, id);
    if balance < amount {
        panic!("insufficient balance");
    }
    env.storage()
        .persistent()
        .set(&WrappedKey::Balance(id.clone()), &(balance - amount));
}

// ============================================================
// MOCK SMART ROUTER
// ============================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MockRouterError {
    SwapFailed = 1,
}

#[contracttype]
enum MockRouterKey {
    Rate,
    Failing,
}

/// Pays `amount * numerator / denominator` per hop out of its own
/// balance of the last path token
#[contract]
pub struct MockSmartRouter;

#[contractimpl]
impl MockSmartRouter {
    pub fn set_rate(env: Env, numerator: i128, denominator: i128) {
        env.storage()
            .instance()
            .set(&MockRouterKey::Rate, &(numerator, denominator));
    }

    pub fn set_failing(env: Env, failing: bool) {
        env.storage().instance().set(&MockRouterKey::Failing, &failing);
    }

    pub fn swap_exact_input(
        env: Env,
        payer: Address,
        path: Vec<Address>,
        _pool_versions: Vec<String>,
        _version_len: Vec<u32>,
        _fees: Vec<u32>,
        data: SwapData,
    ) -> Result<Vec<i128>, MockRouterError> {
        let failing: bool = env
            .storage()
            .instance()
            .get(&MockRouterKey::Failing)
            .unwrap_or(false);
        if failing {
            return Err(MockRouterError::SwapFailed);
        }

        let this = env.current_contract_address();
        let token_in = path.first().unwrap();
        let token_out = path.last().unwrap();

        token::Client::new(&env, &token_in).transfer_from(&this, &payer, &this, &data.amount_in);

        let (numerator, denominator): (i128, i128) = env
            .storage()
            .instance()
            .get(&MockRouterKey::Rate)
            .unwrap_or((1, 1));

        let mut amounts = vec![&env, data.amount_in];
        let mut current = data.amount_in;
        for _ in 1..path.len() {
            current = current * numerator / denominator;
            amounts.push_back(current);
        }

        token::Client::new(&env, &token_out).transfer(&this, &data.to, &current);

        Ok(amounts)
    }
}

// ============================================================
// SETUP
// ============================================================

pub struct TestRouter<'a> {
    pub admin: Address,
    pub router: FeeRouterClient<'a>,
    pub smart_router: MockSmartRouterClient<'a>,
    pub wrapped: MockWrappedNativeClient<'a>,
    pub native: Address,
}

/// Deploy native asset, wrapped native, mock smart router and an
/// initialized router with INITIAL_FEE_RATE
pub fn setup_router(env: &Env) -> TestRouter<'_> {
    env.ledger().with_mut(|li| li.timestamp = START_TIMESTAMP);

    let admin = Address::generate(env);
    let native = create_token(env, &admin);

    let wrapped_id = env.register(MockWrappedNative, ());
    let wrapped = MockWrappedNativeClient::new(env, &wrapped_id);
    wrapped.initialize(&native);

    let smart_router_id = env.register(MockSmartRouter, ());
    let smart_router = MockSmartRouterClient::new(env, &smart_router_id);

    let router_id = env.register(FeeRouter, ());
    let router = FeeRouterClient::new(env, &router_id);
    router.initialize(&admin, &smart_router_id, &wrapped_id, &INITIAL_FEE_RATE);

    TestRouter {
        admin,
        router,
        smart_router,
        wrapped,
        native,
    }
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    use soroban_sdk::token::StellarAssetClient;
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}

/// Give the smart router `amount` of wrapped output, backed by native held
/// in the wrapped token contract
pub fn fund_wrapped_output(env: &Env, setup: &TestRouter, amount: i128) {
    mint_tokens(env, &setup.native, &setup.wrapped.address, amount);
    setup.wrapped.mint(&setup.smart_router.address, &amount);
}

// ============================================================
// SWAP PARAMS
// ============================================================

pub struct Route {
    pub path: Vec<Address>,
    pub pool_versions: Vec<String>,
    pub version_len: Vec<u32>,
    pub fees: Vec<u32>,
}

pub fn single_hop(env: &Env, token_in: &Address, token_out: &Address) -> Route {
    Route {
        path: vec![env, token_in.clone(), token_out.clone()],
        pool_versions: vec![env, String::from_str(env, "v2.1")],
        version_len: vec![env, 1],
        fees: vec![env, 300],
    }
}

pub fn swap_data(env: &Env, amount_in: i128, amount_out_min: i128, to: &Address) -> SwapData {
    SwapData {
        amount_in,
        amount_out_min,
        to: to.clone(),
        deadline: env.ledger().timestamp() + DEADLINE_WINDOW,
    }
}
