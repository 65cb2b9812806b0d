use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::VaultError;
use crate::events::FundsReleased;
use crate::state::TimeLockVault;

/// Release the whole tracked balance to `destination`.
///
/// Owner, unlock time and balance are checked in that order before anything
/// moves. The vault is a program-owned PDA, so lamports are debited directly
/// instead of through a system transfer. The vault must keep its rent-exempt
/// reserve after the debit, otherwise the release fails with `TransferFailed`
/// and the transaction reverts as a whole.
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts
        .vault
        .authorize_withdrawal(&ctx.accounts.caller.key(), now)?;

    require_keys_neq!(
        ctx.accounts.destination.key(),
        ctx.accounts.vault.key(),
        VaultError::InvalidDestination
    );

    let vault_info = ctx.accounts.vault.to_account_info();
    let destination_info = ctx.accounts.destination.to_account_info();

    let reserve = Rent::get()?.minimum_balance(vault_info.data_len());
    let (vault_remaining, destination_total) = ctx.accounts.vault.release_lamports(
        vault_info.lamports(),
        reserve,
        destination_info.lamports(),
    )?;

    **vault_info.try_borrow_mut_lamports()? = vault_remaining;
    **destination_info.try_borrow_mut_lamports()? = destination_total;

    let released = ctx.accounts.vault.release();

    msg!(
        "Released {} lamports from vault {} to {}",
        released,
        ctx.accounts.vault.key(),
        ctx.accounts.destination.key()
    );
    emit!(FundsReleased {
        vault: ctx.accounts.vault.key(),
        destination: ctx.accounts.destination.key(),
        amount: released,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Must match `vault.owner`. Checked in the handler so that a stranger
    /// gets `Unauthorized` rather than a seeds mismatch
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, TimeLockVault>,

    /// CHECK: any account may receive the released lamports
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,
}
