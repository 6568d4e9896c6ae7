use soroban_sdk::contracterror;

pub type GavelResult<T = ()> = core::result::Result<T, ErrorCode>;

/// Errors raised by the shared helpers. Contracts convert these into their own
/// error enums with `From`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    MathError = 100,
}
