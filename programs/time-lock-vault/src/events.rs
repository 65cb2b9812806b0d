use anchor_lang::prelude::*;

/// Emitted on every accepted contribution, including the one made at initialization
#[event]
pub struct FundsReceived {
    pub vault: Pubkey,
    pub sender: Pubkey,
    pub amount: u64,
    /// Tracked balance after this contribution
    pub total_held: u64,
}

/// Emitted when the owner drains the vault
#[event]
pub struct FundsReleased {
    pub vault: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}
