use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::state::{TimeLockVault, VaultStatus};

/// Evaluate the vault against the current clock without touching it
pub fn status(ctx: Context<Status>) -> Result<VaultStatus> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.vault.status(now))
}

#[derive(Accounts)]
pub struct Status<'info> {
    #[account(
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, TimeLockVault>,
}
