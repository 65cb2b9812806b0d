use anchor_lang::prelude::*;

declare_id!("2z4CRLXoaNyVnatocQiPY8eDp9agp9GQQtkcmny5na9x");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod time_lock_vault {
    use super::*;

    /// Create the caller's vault, locked for `lock_duration_seconds` from now.
    /// A non-zero `initial_amount` is contributed by the caller in the same instruction.
    pub fn initialize(
        ctx: Context<Initialize>,
        lock_duration_seconds: u64,
        initial_amount: u64,
    ) -> Result<()> {
        instructions::initialize(ctx, lock_duration_seconds, initial_amount)
    }

    /// Add lamports to a vault. Open to any signer, before or after unlock.
    pub fn contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
        instructions::contribute(ctx, amount)
    }

    /// Release the full tracked balance to `destination`.
    /// Owner only, and only once the unlock time has passed.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx)
    }

    /// Read-only snapshot of the vault, returned as instruction return data.
    pub fn status(ctx: Context<Status>) -> Result<VaultStatus> {
        instructions::status(ctx)
    }
}
