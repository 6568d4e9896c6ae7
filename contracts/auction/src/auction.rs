use soroban_sdk::{Address, Env};

use crate::{
    errors::ErrorCode,
    msg::AuctionResponse,
    types::{AssetTransferProof, PaymentProof},
};

pub trait AuctionTrait {
    // ################################################################
    //                             CREATOR
    // ################################################################

    fn opt_in_asset(env: Env, sender: Address, asset: Address) -> Result<(), ErrorCode>;

    fn start_auction(
        env: Env,
        sender: Address,
        starting_price: i128,
        duration: u64,
        transfer: AssetTransferProof
    ) -> Result<(), ErrorCode>;

    fn delete_application(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             BIDDER
    // ################################################################

    fn bid(env: Env, bidder: Address, payment: PaymentProof) -> Result<(), ErrorCode>;

    fn claim_asset(env: Env, asset: Address) -> Result<(), ErrorCode>;

    fn claim_bids(env: Env, sender: Address) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_auction(env: Env) -> AuctionResponse;

    fn query_claimable(env: Env, address: Address) -> i128;

    fn query_creator(env: Env) -> Address;

    fn query_is_active(env: Env) -> bool;
}
