use anchor_lang::prelude::*;

/// Seed prefix for vault PDAs: `[VAULT_SEED, owner]`
#[constant]
pub const VAULT_SEED: &[u8] = b"time-lock-vault";
