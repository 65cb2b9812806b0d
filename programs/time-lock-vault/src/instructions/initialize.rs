use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::instructions::contribute::receive_funds;
use crate::state::TimeLockVault;

/// Create the vault for the signing owner and apply the optional initial contribution
pub fn initialize(
    ctx: Context<Initialize>,
    lock_duration_seconds: u64,
    initial_amount: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    ctx.accounts.vault.set_inner(TimeLockVault::open(
        owner,
        now,
        lock_duration_seconds,
        ctx.bumps.vault,
    )?);

    msg!(
        "Vault {} initialized for owner {}, unlocks at {}",
        ctx.accounts.vault.key(),
        owner,
        ctx.accounts.vault.unlock_time
    );

    // zero means no initial contribution
    if initial_amount > 0 {
        receive_funds(
            &ctx.accounts.system_program,
            &ctx.accounts.owner,
            &mut ctx.accounts.vault,
            initial_amount,
        )?;
    }

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Future owner. Pays for the vault account and any initial contribution
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = TimeLockVault::LEN,
        seeds = [VAULT_SEED, owner.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TimeLockVault>,

    pub system_program: Program<'info, System>,
}
