use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionResponse {
    pub creator: Address,
    pub payment_token: Address,
    pub asset: Option<Address>,
    pub asset_amount: i128,
    pub end_time: u64,
    pub previous_bidder: Option<Address>,
    pub previous_bid: i128,
    pub asset_claimed: bool,
    pub deleted: bool,
}
