//! WSPR protocol constants
//!
//! Field widths, convolutional code parameters and the synchronization
//! vector for the WSPR Type 1 message, per the coding process described in
//! <https://www.g4jnt.com/WSPR_Coding_Process.pdf>.

/// Number of channel symbols in a WSPR transmission
pub const CHANNEL_SYMBOLS_COUNT: usize = 162;

/// Width of the packed callsign field (N)
pub const CALLSIGN_FIELD_BITS: usize = 28;

/// Width of the packed locator + power field (M)
pub const GRID_POWER_FIELD_BITS: usize = 22;

/// Constraint length of the convolutional code
pub const CONSTRAINT_LENGTH: usize = 32;

/// Zero bits shifted in after the data to flush the encoder register
pub const REGISTER_FLUSH_BITS: usize = CONSTRAINT_LENGTH - 1;

/// First generator polynomial of the rate-1/2 convolutional code
/// (Layland-Lushbaugh, non-systematic non-recursive)
pub const GENERATOR_POLYNOMIAL_A: u32 = 0xF2D0_5351;

/// Second generator polynomial of the rate-1/2 convolutional code
pub const GENERATOR_POLYNOMIAL_B: u32 = 0xE461_3C47;

/// Pseudo-random synchronization pattern, one bit per channel symbol.
/// Each transmitted symbol is `sync + 2 * data`, so this vector occupies
/// the least significant bit of every symbol.
pub const SYNC_VECTOR: [u8; CHANNEL_SYMBOLS_COUNT] = [
    1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0,
    1, 0, 0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0,
    0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1,
    0, 1, 0, 0, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0,
    1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 1,
    1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1,
    0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 1,
    1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0,
    0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0,
];
