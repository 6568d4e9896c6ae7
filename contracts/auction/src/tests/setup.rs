use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token,
    Address,
    Env,
};

use crate::{
    contract::{Auction, AuctionClient},
    types::{AssetTransferProof, PaymentProof},
};

pub const START_TIME: u64 = 1_000;
pub const DURATION: u64 = 500;
pub const STARTING_PRICE: i128 = 100;
pub const ASSET_AMOUNT: i128 = 50;

pub fn deploy_token_contract<'a>(
    env: &Env,
    admin: &Address
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let contract = env.register_stellar_asset_contract_v2(admin.clone());
    (
        token::Client::new(env, &contract.address()),
        token::StellarAssetClient::new(env, &contract.address()),
    )
}

pub fn deploy_auction_contract<'a>(
    env: &Env,
    creator: &Address,
    payment_token: &Address
) -> AuctionClient<'a> {
    AuctionClient::new(env, &env.register(Auction, (creator.clone(), payment_token.clone())))
}

pub fn set_timestamp(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp = timestamp;
    });
}

pub fn payment(auction: &AuctionClient, sender: &Address, amount: i128) -> PaymentProof {
    PaymentProof {
        sender: sender.clone(),
        receiver: auction.address.clone(),
        amount,
    }
}

pub fn asset_transfer(
    auction: &AuctionClient,
    asset: &Address,
    sender: &Address,
    amount: i128
) -> AssetTransferProof {
    AssetTransferProof {
        asset: asset.clone(),
        sender: sender.clone(),
        receiver: auction.address.clone(),
        amount,
    }
}

pub struct AuctionTest<'a> {
    pub env: Env,
    pub creator: Address,
    pub auction: AuctionClient<'a>,
    pub asset: token::Client<'a>,
    pub asset_admin: token::StellarAssetClient<'a>,
    pub payment: token::Client<'a>,
    pub payment_admin: token::StellarAssetClient<'a>,
}

impl<'a> AuctionTest<'a> {
    /// Deployed auction with the creator holding `ASSET_AMOUNT` units of the
    /// asset. Nothing has been opted in yet.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        set_timestamp(&env, START_TIME);

        let creator = Address::generate(&env);
        let token_admin = Address::generate(&env);
        let (asset, asset_admin) = deploy_token_contract(&env, &token_admin);
        let (payment, payment_admin) = deploy_token_contract(&env, &token_admin);

        let auction = deploy_auction_contract(&env, &creator, &payment.address);

        asset_admin.mint(&creator, &ASSET_AMOUNT);

        AuctionTest {
            env,
            creator,
            auction,
            asset,
            asset_admin,
            payment,
            payment_admin,
        }
    }

    /// Auction opted in and started at `START_TIME` with the default price,
    /// duration and asset amount.
    pub fn started() -> Self {
        let test = Self::new();
        test.auction.opt_in_asset(&test.creator, &test.asset.address);
        test.auction.start_auction(
            &test.creator,
            &STARTING_PRICE,
            &DURATION,
            &asset_transfer(&test.auction, &test.asset.address, &test.creator, ASSET_AMOUNT)
        );
        test
    }

    pub fn bidder(&self, funds: i128) -> Address {
        let bidder = Address::generate(&self.env);
        self.payment_admin.mint(&bidder, &funds);
        bidder
    }

    pub fn bid(&self, bidder: &Address, amount: i128) {
        self.auction.bid(bidder, &payment(&self.auction, bidder, amount));
    }

    pub fn end_time(&self) -> u64 {
        self.auction.query_auction().end_time
    }
}
