use gavel::math::safe_math::SafeMath;
use soroban_sdk::Env;

use crate::errors::AuctionResult;

/// Amount released to a bidder withdrawing `owed`.
///
/// The current highest bidder keeps `previous_bid` locked: it is the price of
/// the asset and is never refunded. Everyone else gets their whole balance.
pub fn calculate_payout(
    env: &Env,
    owed: i128,
    previous_bid: i128,
    is_previous_bidder: bool
) -> AuctionResult<i128> {
    if is_previous_bidder {
        Ok(owed.safe_sub(previous_bid, env)?)
    } else {
        Ok(owed)
    }
}

pub fn calculate_end_time(env: &Env, now: u64, duration: u64) -> AuctionResult<u64> {
    Ok(now.safe_add(duration, env)?)
}
