use soroban_sdk::{contracttype, Address};

/// A payment of the auction's payment token attached to a `bid` call.
///
/// The contract settles the payment by calling `transfer(sender, receiver,
/// amount)` on the payment token; the token contract requires `sender`'s
/// authorization, so the host authenticates the proof. The auction itself only
/// inspects the business fields.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentProof {
    pub sender: Address,
    pub receiver: Address,
    pub amount: i128,
}

/// A transfer of the auctioned asset attached to `start_auction`, settled the
/// same way as [`PaymentProof`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetTransferProof {
    pub asset: Address,
    pub sender: Address,
    pub receiver: Address,
    pub amount: i128,
}
