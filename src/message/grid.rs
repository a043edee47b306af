//! Maidenhead locator and power packing for the 22-bit M field.
//!
//! From the WSPR coding process description
//! (<https://www.g4jnt.com/WSPR_Coding_Process.pdf>):
//!
//! ```text
//! M1 = (179 - 10 * (Loc[0] - 'A') - (Loc[2] - '0')) * 180
//!    + 10 * (Loc[1] - 'A') + (Loc[3] - '0')
//! M  = M1 * 128 + Pwr + 64
//! ```

use tracing::trace;

/// Pack a 4-character locator into the 15-bit M1 field.
///
/// The caller guarantees exactly four bytes. Locators outside AA00-RR99
/// are not rejected; the formula wraps modulo 2^32 and produces a
/// protocol-invalid M1.
pub fn pack_grid_into_15bits(locator: &str) -> u32 {
    let loc = locator.as_bytes();

    let m1 = (179 - 10 * (loc[0] as i32 - 'A' as i32) - (loc[2] as i32 - '0' as i32)) * 180
        + 10 * (loc[1] as i32 - 'A' as i32)
        + (loc[3] as i32 - '0' as i32);

    m1 as u32
}

/// Pack a locator and power level into the 22-bit M field.
///
/// Power is taken as given: out-of-range or off-grid dBm values still
/// produce a well-defined field by wrapping arithmetic, matching deployed
/// encoders. Callers wanting protocol-legal transmissions validate power
/// upstream.
pub fn pack_grid_power_into_22bits(locator: &str, power: i32) -> u32 {
    let m1 = pack_grid_into_15bits(locator);
    let m = m1
        .wrapping_mul(128)
        .wrapping_add(power as u32)
        .wrapping_add(64);
    trace!(m1, m, "grid and power packed");
    m
}
