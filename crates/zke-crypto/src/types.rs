/// PBKDF2-HMAC-SHA256 iteration count used for every derived key.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// AES key length in bytes (256 bits).
pub const AES_KEY_LENGTH: usize = 32;

/// AES block size in bytes. CBC IVs are one block.
pub const AES_BLOCK_SIZE: usize = 16;

/// CBC IV length in bytes.
pub const CBC_IV_LENGTH: usize = AES_BLOCK_SIZE;

/// Random salt length in bytes (hex-encoded to 32 chars).
pub const SALT_LENGTH: usize = 16;

/// Per-encryption commitment randomness length in bytes (hex-encoded to 64 chars).
pub const RANDOMNESS_LENGTH: usize = 32;
