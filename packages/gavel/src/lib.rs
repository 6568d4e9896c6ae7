#![no_std]

#[cfg(test)]
extern crate std;

pub mod constants;
pub mod error;
pub mod macros;
pub mod math;
