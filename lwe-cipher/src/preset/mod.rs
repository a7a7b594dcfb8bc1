//! Default parameter set used when no configuration is supplied.

/// Secret vector length n.
pub const DEFAULT_SECRET_LEN: usize = 64;
/// Coefficient matrix column count m.
pub const DEFAULT_COLUMN_COUNT: usize = 128;
/// Modulus q. Prime, and large enough for every Latin-1 and most BMP Latin code points.
pub const DEFAULT_MODULUS: u64 = 2053;
/// Error vector entries are drawn from `[0, DEFAULT_ERROR_BOUND)`.
pub const DEFAULT_ERROR_BOUND: u64 = 10;
/// Highest code point accepted when verifying a lock password (printable ASCII).
pub const DEFAULT_AUTH_CHAR_BOUND: u32 = 127;
