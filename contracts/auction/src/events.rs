use soroban_sdk::{Address, Env, Symbol};

pub struct AuctionEvents {}

impl AuctionEvents {
    /// Emitted when the creator registers the auctioned asset
    ///
    /// - topics - `["opt_in_asset", creator: Address]`
    /// - data - `asset: Address`
    pub fn opt_in_asset(env: &Env, creator: Address, asset: Address) {
        let topics = (Symbol::new(env, "opt_in_asset"), creator);
        env.events().publish(topics, asset);
    }

    /// Emitted when the asset is escrowed and bidding opens
    ///
    /// - topics - `["start_auction", creator: Address]`
    /// - data - `[asset_amount: i128, starting_price: i128, end_time: u64]`
    pub fn start_auction(
        env: &Env,
        creator: Address,
        asset_amount: i128,
        starting_price: i128,
        end_time: u64
    ) {
        let topics = (Symbol::new(env, "start_auction"), creator);
        env.events().publish(topics, (asset_amount, starting_price, end_time));
    }

    /// Emitted when a bid becomes the highest bid
    ///
    /// - topics - `["bid", bidder: Address]`
    /// - data - `[amount: i128, claimable: i128]`
    pub fn bid(env: &Env, bidder: Address, amount: i128, claimable: i128) {
        let topics = (Symbol::new(env, "bid"), bidder);
        env.events().publish(topics, (amount, claimable));
    }

    /// Emitted when the escrowed asset is released
    ///
    /// - topics - `["claim_asset", recipient: Address]`
    /// - data - `[asset: Address, amount: i128]`
    pub fn claim_asset(env: &Env, recipient: Address, asset: Address, amount: i128) {
        let topics = (Symbol::new(env, "claim_asset"), recipient);
        env.events().publish(topics, (asset, amount));
    }

    /// Emitted when a bidder withdraws what they are owed
    ///
    /// - topics - `["claim_bids", bidder: Address]`
    /// - data - `[payout: i128, remaining: i128]`
    pub fn claim_bids(env: &Env, bidder: Address, payout: i128, remaining: i128) {
        let topics = (Symbol::new(env, "claim_bids"), bidder);
        env.events().publish(topics, (payout, remaining));
    }

    /// Emitted when the creator retires the auction
    ///
    /// - topics - `["delete_application", creator: Address]`
    /// - data - `drained: i128`
    pub fn delete_application(env: &Env, creator: Address, drained: i128) {
        let topics = (Symbol::new(env, "delete_application"), creator);
        env.events().publish(topics, drained);
    }
}
