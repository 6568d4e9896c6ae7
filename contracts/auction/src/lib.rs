#![no_std]

#[cfg(test)]
extern crate std;

mod auction;
mod contract;
pub mod errors;
mod events;
mod math;
pub mod msg;
mod storage;
pub mod types;

pub use crate::contract::{Auction, AuctionClient};
