use anchor_lang::prelude::*;

use crate::error::VaultError;

/// Time-locked vault, one per owner
///
/// `total_held` is the vault's own record of contributions minus withdrawals.
/// It never reads the account's lamport balance, which also carries the
/// rent-exempt reserve and anything sent to the PDA outside `contribute`.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct TimeLockVault {
    /// Only key allowed to withdraw. Set at initialization and never changed
    pub owner: Pubkey,
    /// Unix timestamp (seconds) from which withdrawals are accepted
    pub unlock_time: i64,
    /// Lamports credited by contributions and not yet withdrawn
    pub total_held: u64,
    /// Unix timestamp (seconds) of initialization
    pub created_at: i64,
    /// Canonical bump of the vault PDA
    pub bump: u8,
}

impl TimeLockVault {
    /// 8 bytes discriminator + 32 pubkey + 8 i64 + 8 u64 + 8 i64 + 1 u8
    pub const LEN: usize = 8 + 32 + 8 + 8 + 8 + 1;

    /// Build a fresh, empty vault owned by `owner` that unlocks
    /// `lock_duration_seconds` after `now`.
    pub fn open(owner: Pubkey, now: i64, lock_duration_seconds: u64, bump: u8) -> Result<Self> {
        let duration =
            i64::try_from(lock_duration_seconds).map_err(|_| VaultError::UnlockTimeOverflow)?;
        let unlock_time = now
            .checked_add(duration)
            .ok_or(VaultError::UnlockTimeOverflow)?;

        Ok(Self {
            owner,
            unlock_time,
            total_held: 0,
            created_at: now,
            bump,
        })
    }

    /// Credit an accepted contribution. Returns the new tracked balance.
    pub fn credit(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, VaultError::ZeroContribution);

        self.total_held = self
            .total_held
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;

        Ok(self.total_held)
    }

    /// Check whether `caller` may withdraw at `now` and return the amount
    /// that would be released. Does not mutate.
    ///
    /// Checks run owner, then time, then balance, so a non-owner always sees
    /// `Unauthorized` no matter the lock state.
    pub fn authorize_withdrawal(&self, caller: &Pubkey, now: i64) -> Result<u64> {
        require_keys_eq!(*caller, self.owner, VaultError::Unauthorized);
        require!(self.is_unlocked(now), VaultError::StillLocked);
        require!(self.total_held > 0, VaultError::NothingToWithdraw);

        Ok(self.total_held)
    }

    /// Lamport balances of the vault and the destination after moving
    /// `total_held` between them.
    ///
    /// The vault has to keep `reserve` (its rent-exempt minimum) after the
    /// debit. Lamports that arrived outside `contribute` count toward it.
    pub fn release_lamports(
        &self,
        vault_lamports: u64,
        reserve: u64,
        destination_lamports: u64,
    ) -> Result<(u64, u64)> {
        let vault_remaining = vault_lamports
            .checked_sub(self.total_held)
            .filter(|remaining| *remaining >= reserve)
            .ok_or(VaultError::TransferFailed)?;
        let destination_total = destination_lamports
            .checked_add(self.total_held)
            .ok_or(VaultError::TransferFailed)?;

        Ok((vault_remaining, destination_total))
    }

    /// Zero the tracked balance and return what it held.
    /// Call only after the lamports have actually moved.
    pub fn release(&mut self) -> u64 {
        std::mem::take(&mut self.total_held)
    }

    pub fn is_unlocked(&self, now: i64) -> bool {
        now >= self.unlock_time
    }

    pub fn seconds_until_unlock(&self, now: i64) -> u64 {
        u64::try_from(self.unlock_time.saturating_sub(now)).unwrap_or(0)
    }

    pub fn status(&self, now: i64) -> VaultStatus {
        VaultStatus {
            owner: self.owner,
            unlock_time: self.unlock_time,
            total_held: self.total_held,
            unlocked: self.is_unlocked(now),
            seconds_until_unlock: self.seconds_until_unlock(now),
        }
    }
}

/// Return data of the `status` instruction
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VaultStatus {
    pub owner: Pubkey,
    pub unlock_time: i64,
    pub total_held: u64,
    pub unlocked: bool,
    pub seconds_until_unlock: u64,
}

impl VaultStatus {
    /// Borsh size: 32 pubkey + 8 i64 + 8 u64 + 1 bool + 8 u64.
    /// The runtime trims trailing zero bytes from return data, so readers
    /// pad back to this length before decoding.
    pub const LEN: usize = 32 + 8 + 8 + 1 + 8;
}
