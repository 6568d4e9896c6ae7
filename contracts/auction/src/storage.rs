use gavel::constants::{
    INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
    PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    State,
    Claimable(Address),
}

// ################################################################
//                             Auction
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionState {
    /// Account that deployed the auction, authorizes setup and teardown
    pub creator: Address,
    /// Token bids are paid in (the native XLM asset contract on mainnet)
    pub payment_token: Address,
    /// Token being auctioned, `None` until opted in
    pub asset: Option<Address>,
    /// Units of `asset` escrowed for the winner
    pub asset_amount: i128,
    /// Ledger timestamp at which bidding closes, 0 while not started
    pub end_time: u64,
    pub previous_bidder: Option<Address>,
    /// Highest bid so far, or the starting price before any bid
    pub previous_bid: i128,
    pub asset_claimed: bool,
    pub deleted: bool,
}

impl AuctionState {
    pub fn new(creator: Address, payment_token: Address) -> Self {
        AuctionState {
            creator,
            payment_token,
            asset: None,
            asset_amount: 0,
            end_time: 0,
            previous_bidder: None,
            previous_bid: 0,
            asset_claimed: false,
            deleted: false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.end_time != 0
    }

    /// Bids are accepted strictly before `end_time`.
    pub fn is_open(&self, now: u64) -> bool {
        self.is_started() && now < self.end_time
    }

    /// The asset becomes claimable strictly after `end_time`.
    pub fn is_ended(&self, now: u64) -> bool {
        self.is_started() && now > self.end_time
    }

    pub fn is_previous_bidder(&self, address: &Address) -> bool {
        self.previous_bidder.as_ref() == Some(address)
    }
}

pub fn save_auction_state(env: &Env, state: &AuctionState) {
    env.storage().instance().set(&DataKey::State, state);
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_auction_state(env: &Env) -> AuctionState {
    let state = env.storage().instance().get(&DataKey::State).expect("Auction state not set");

    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    state
}

// ################################################################
//                            Claimable
// ################################################################

/// Amount owed to `bidder`. A bidder without an entry is owed nothing.
pub fn get_claimable(env: &Env, bidder: &Address) -> i128 {
    let key = DataKey::Claimable(bidder.clone());
    let claimable = env.storage().persistent().get::<_, i128>(&key).unwrap_or(0);
    env.storage()
        .persistent()
        .has(&key)
        .then(|| {
            env.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
        });

    claimable
}

pub fn save_claimable(env: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::Claimable(bidder.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                             Utils
// ################################################################

pub mod utils {
    use soroban_sdk::token;

    use crate::errors::{AuctionResult, ErrorCode};

    use super::*;

    pub fn transfer_token(env: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
        let token_client = token::Client::new(env, token);
        token_client.transfer(from, to, &amount);
    }

    pub fn token_balance(env: &Env, token: &Address, id: &Address) -> i128 {
        token::Client::new(env, token).balance(id)
    }

    pub fn is_creator(env: &Env, state: &AuctionState, sender: &Address) -> AuctionResult {
        gavel::validate!(
            env,
            state.creator == *sender,
            ErrorCode::Unauthorized,
            "Auction: You are not authorized!"
        )
    }

    pub fn is_live(env: &Env, state: &AuctionState) -> AuctionResult {
        gavel::validate!(
            env,
            !state.deleted,
            ErrorCode::ApplicationDeleted,
            "Auction: the auction has been deleted"
        )
    }
}
