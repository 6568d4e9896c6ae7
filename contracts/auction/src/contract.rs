use gavel::{math::safe_math::SafeMath, safe_decrement, safe_increment, validate};
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env};

use crate::{
    auction::AuctionTrait,
    errors::ErrorCode,
    events::AuctionEvents,
    math::payout::{calculate_end_time, calculate_payout},
    msg::AuctionResponse,
    storage::{
        get_auction_state,
        get_claimable,
        save_auction_state,
        save_claimable,
        utils,
        AuctionState,
    },
    types::{AssetTransferProof, PaymentProof},
};

contractmeta!(
    key = "Description",
    val = "Single-asset ascending auction with escrowed bids and pull-based refunds"
);

#[contract]
pub struct Auction;

#[contractimpl]
impl Auction {
    pub fn __constructor(env: Env, creator: Address, payment_token: Address) {
        save_auction_state(&env, &AuctionState::new(creator, payment_token));
    }
}

#[contractimpl]
impl AuctionTrait for Auction {
    // ################################################################
    //                             CREATOR
    // ################################################################

    fn opt_in_asset(env: Env, sender: Address, asset: Address) -> Result<(), ErrorCode> {
        sender.require_auth();

        let mut state = get_auction_state(&env);
        utils::is_live(&env, &state)?;
        utils::is_creator(&env, &state, &sender)?;

        validate!(
            &env,
            state.asset.is_none(),
            ErrorCode::AlreadyInitialized,
            "Auction: Opt in asset: asset already opted in"
        )?;
        validate!(
            &env,
            asset != state.payment_token,
            ErrorCode::InvalidAsset,
            "Auction: Opt in asset: asset cannot be the payment token"
        )?;

        // Traps inside the host if `asset` is not a token contract.
        utils::token_balance(&env, &asset, &env.current_contract_address());
        log!(&env, "Auction: Opt in asset: asset token is reachable");

        state.asset = Some(asset.clone());
        save_auction_state(&env, &state);

        AuctionEvents::opt_in_asset(&env, sender, asset);

        Ok(())
    }

    fn start_auction(
        env: Env,
        sender: Address,
        starting_price: i128,
        duration: u64,
        transfer: AssetTransferProof
    ) -> Result<(), ErrorCode> {
        sender.require_auth();

        let mut state = get_auction_state(&env);
        utils::is_live(&env, &state)?;
        utils::is_creator(&env, &state, &sender)?;

        validate!(
            &env,
            !state.is_started(),
            ErrorCode::AlreadyStarted,
            "Auction: Start auction: auction already started"
        )?;

        let asset = match state.asset.clone() {
            Some(asset) => asset,
            None => {
                log!(&env, "Auction: Start auction: no asset has been opted in");
                return Err(ErrorCode::AssetNotOptedIn);
            }
        };

        validate!(
            &env,
            transfer.asset == asset,
            ErrorCode::InvalidAsset,
            "Auction: Start auction: transfer is not of the opted in asset"
        )?;
        validate!(
            &env,
            transfer.receiver == env.current_contract_address(),
            ErrorCode::InvalidTransferTarget,
            "Auction: Start auction: transfer must be addressed to the auction"
        )?;
        validate!(
            &env,
            transfer.amount > 0 && starting_price >= 0,
            ErrorCode::InvalidAmount,
            "Auction: Start auction: invalid amounts",
            transfer.amount,
            starting_price
        )?;
        validate!(
            &env,
            duration > 0,
            ErrorCode::InvalidDuration,
            "Auction: Start auction: duration must be positive"
        )?;

        let end_time = calculate_end_time(&env, env.ledger().timestamp(), duration)?;

        utils::transfer_token(&env, &asset, &transfer.sender, &transfer.receiver, transfer.amount);

        state.asset_amount = transfer.amount;
        state.previous_bid = starting_price;
        state.end_time = end_time;
        save_auction_state(&env, &state);

        AuctionEvents::start_auction(&env, sender, transfer.amount, starting_price, end_time);

        Ok(())
    }

    fn delete_application(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        sender.require_auth();

        let mut state = get_auction_state(&env);
        utils::is_live(&env, &state)?;
        utils::is_creator(&env, &state, &sender)?;

        validate!(
            &env,
            !state.is_started() || state.asset_claimed,
            ErrorCode::AssetNotClaimed,
            "Auction: Delete application: auctioned asset is still held"
        )?;

        let contract = env.current_contract_address();
        let drained = utils::token_balance(&env, &state.payment_token, &contract);
        if drained > 0 {
            utils::transfer_token(&env, &state.payment_token, &contract, &state.creator, drained);
        }

        state.deleted = true;
        save_auction_state(&env, &state);

        AuctionEvents::delete_application(&env, sender, drained);

        Ok(drained)
    }

    // ################################################################
    //                             BIDDER
    // ################################################################

    fn bid(env: Env, bidder: Address, payment: PaymentProof) -> Result<(), ErrorCode> {
        bidder.require_auth();

        let mut state = get_auction_state(&env);
        utils::is_live(&env, &state)?;

        let now = env.ledger().timestamp();

        validate!(
            &env,
            state.is_started(),
            ErrorCode::AuctionNotStarted,
            "Auction: Bid: auction has not started"
        )?;
        validate!(
            &env,
            state.is_open(now),
            ErrorCode::AuctionEnded,
            "Auction: Bid: auction ended",
            state.end_time,
            now
        )?;
        validate!(
            &env,
            !state.is_previous_bidder(&bidder),
            ErrorCode::RepeatBidder,
            "Auction: Bid: already the highest bidder"
        )?;
        validate!(
            &env,
            payment.sender == bidder,
            ErrorCode::SenderMismatch,
            "Auction: Bid: payment was not sent by the bidder"
        )?;
        validate!(
            &env,
            payment.receiver == env.current_contract_address(),
            ErrorCode::InvalidTransferTarget,
            "Auction: Bid: payment must be addressed to the auction"
        )?;
        validate!(
            &env,
            payment.amount > state.previous_bid,
            ErrorCode::BidTooLow,
            "Auction: Bid: bid must exceed the highest bid",
            payment.amount,
            state.previous_bid
        )?;

        utils::transfer_token(
            &env,
            &state.payment_token,
            &payment.sender,
            &payment.receiver,
            payment.amount
        );

        let mut claimable = get_claimable(&env, &bidder);
        safe_increment!(&env, claimable, payment.amount);
        save_claimable(&env, &bidder, claimable);

        state.previous_bid = payment.amount;
        state.previous_bidder = Some(bidder.clone());
        save_auction_state(&env, &state);

        AuctionEvents::bid(&env, bidder, payment.amount, claimable);

        Ok(())
    }

    fn claim_asset(env: Env, asset: Address) -> Result<(), ErrorCode> {
        let mut state = get_auction_state(&env);
        utils::is_live(&env, &state)?;

        let now = env.ledger().timestamp();

        validate!(
            &env,
            state.is_ended(now),
            ErrorCode::AuctionNotEnded,
            "Auction: Claim asset: auction not ended yet",
            state.end_time,
            now
        )?;
        validate!(
            &env,
            state.asset.as_ref() == Some(&asset),
            ErrorCode::InvalidAsset,
            "Auction: Claim asset: not the auctioned asset"
        )?;
        validate!(
            &env,
            !state.asset_claimed,
            ErrorCode::AssetAlreadyClaimed,
            "Auction: Claim asset: asset already claimed"
        )?;

        // Without a single bid the asset goes back to the creator.
        let recipient = state.previous_bidder.clone().unwrap_or_else(|| state.creator.clone());
        let contract = env.current_contract_address();

        utils::transfer_token(&env, &asset, &contract, &recipient, state.asset_amount);

        let remainder = utils::token_balance(&env, &asset, &contract);
        if remainder > 0 {
            utils::transfer_token(&env, &asset, &contract, &recipient, remainder);
        }

        let released = state.asset_amount.safe_add(remainder, &env)?;

        state.asset_claimed = true;
        save_auction_state(&env, &state);

        AuctionEvents::claim_asset(&env, recipient, asset, released);

        Ok(())
    }

    fn claim_bids(env: Env, sender: Address) -> Result<i128, ErrorCode> {
        sender.require_auth();

        let state = get_auction_state(&env);
        utils::is_live(&env, &state)?;

        let owed = get_claimable(&env, &sender);
        let payout = calculate_payout(
            &env,
            owed,
            state.previous_bid,
            state.is_previous_bidder(&sender)
        )?;
        let mut remaining = owed;
        safe_decrement!(&env, remaining, payout);

        if payout > 0 {
            utils::transfer_token(
                &env,
                &state.payment_token,
                &env.current_contract_address(),
                &sender,
                payout
            );
            save_claimable(&env, &sender, remaining);
        }

        AuctionEvents::claim_bids(&env, sender, payout, remaining);

        Ok(payout)
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    fn query_auction(env: Env) -> AuctionResponse {
        let state = get_auction_state(&env);

        AuctionResponse {
            creator: state.creator,
            payment_token: state.payment_token,
            asset: state.asset,
            asset_amount: state.asset_amount,
            end_time: state.end_time,
            previous_bidder: state.previous_bidder,
            previous_bid: state.previous_bid,
            asset_claimed: state.asset_claimed,
            deleted: state.deleted,
        }
    }

    fn query_claimable(env: Env, address: Address) -> i128 {
        get_claimable(&env, &address)
    }

    fn query_creator(env: Env) -> Address {
        get_auction_state(&env).creator
    }

    fn query_is_active(env: Env) -> bool {
        let state = get_auction_state(&env);
        !state.deleted && state.is_open(env.ledger().timestamp())
    }
}
