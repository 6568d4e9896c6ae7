use gavel::error::ErrorCode as SharedErrors;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    #[doc = "Caller is not allowed to perform a privileged operation"]
    Unauthorized = 1,
    #[doc = "The auctioned asset has already been opted in"]
    AlreadyInitialized = 2,
    #[doc = "The auction has already been started"]
    AlreadyStarted = 3,
    #[doc = "Attached transfer is not addressed to the auction contract"]
    InvalidTransferTarget = 4,
    #[doc = "Bidding window has closed"]
    AuctionEnded = 5,
    #[doc = "Bidding window is still open"]
    AuctionNotEnded = 6,
    #[doc = "The current highest bidder may not outbid themselves"]
    RepeatBidder = 7,
    #[doc = "Caller is not the sender of the attached payment"]
    SenderMismatch = 8,
    #[doc = "Bid does not exceed the current highest bid"]
    BidTooLow = 9,
    AuctionNotStarted = 10,
    AssetNotOptedIn = 11,
    InvalidAsset = 12,
    InvalidAmount = 13,
    InvalidDuration = 14,
    AssetAlreadyClaimed = 15,
    ApplicationDeleted = 16,
    MathError = 17,
    #[doc = "The auctioned asset has not been released yet"]
    AssetNotClaimed = 18,
}

impl From<SharedErrors> for ErrorCode {
    fn from(err: SharedErrors) -> Self {
        match err {
            SharedErrors::MathError => ErrorCode::MathError,
        }
    }
}

pub type AuctionResult<T = ()> = core::result::Result<T, ErrorCode>;
