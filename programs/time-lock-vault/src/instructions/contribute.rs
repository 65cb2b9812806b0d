use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::VAULT_SEED;
use crate::events::FundsReceived;
use crate::state::TimeLockVault;

pub fn contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
    receive_funds(
        &ctx.accounts.system_program,
        &ctx.accounts.contributor,
        &mut ctx.accounts.vault,
        amount,
    )
}

/// Shared contribution path for `contribute` and the initial deposit of `initialize`.
///
/// The tracked balance is credited first so a zero or overflowing amount
/// fails before any lamports move. A failed transfer aborts the transaction,
/// which rolls the credit back with it.
pub(crate) fn receive_funds<'info>(
    system_program: &Program<'info, System>,
    sender: &Signer<'info>,
    vault: &mut Account<'info, TimeLockVault>,
    amount: u64,
) -> Result<()> {
    let total_held = vault.credit(amount)?;

    transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer {
                from: sender.to_account_info(),
                to: vault.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!(
        "Received {} lamports from {}, total held {}",
        amount,
        sender.key(),
        total_held
    );
    emit!(FundsReceived {
        vault: vault.key(),
        sender: sender.key(),
        amount,
        total_held,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Contribute<'info> {
    /// Anyone may contribute, the owner included
    #[account(mut)]
    pub contributor: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.owner.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, TimeLockVault>,

    pub system_program: Program<'info, System>,
}
