use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Caller is not the owner")]
    Unauthorized,
    #[msg("Contract is locked")]
    StillLocked,
    #[msg("No funds in contract")]
    NothingToWithdraw,
    #[msg("Vault lamports cannot cover the release")]
    TransferFailed,
    #[msg("Contribution must be greater than zero")]
    ZeroContribution,
    #[msg("Total held would overflow")]
    Overflow,
    #[msg("Unlock time is out of range")]
    UnlockTimeOverflow,
    #[msg("Destination cannot be the vault itself")]
    InvalidDestination,
}
