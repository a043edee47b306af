use std::fmt::Display;

use snafu::Snafu;
use tracing::debug;

use crate::constants::CHANNEL_SYMBOLS_COUNT;

pub mod callsign;
pub mod channel_symbols;
pub mod grid;

use callsign::pack_callsign_into_28bits;
use channel_symbols::channel_symbols;
use grid::pack_grid_power_into_22bits;

#[derive(Debug, Snafu)]
pub enum WsprMessageError {
    /// Callsign has no characters
    #[snafu(display("callsign is empty"))]
    EmptyCallsign,

    /// Locator is not exactly four characters
    #[snafu(display("locator must be exactly 4 characters"))]
    InvalidLocatorLength,
}

/// A validated WSPR message with its packed fields and channel symbols.
#[derive(Debug)]
pub struct WsprMessage {
    pub callsign: String,
    pub locator: String,
    pub power: i32,
    /// The 28-bit N field
    pub packed_callsign: u32,
    /// The 22-bit M field
    pub packed_grid_power: u32,
    pub channel_symbols: [u8; CHANNEL_SYMBOLS_COUNT],
}

impl Display for WsprMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.callsign, self.locator, self.power)
    }
}

impl WsprMessage {
    /// Build a message from a callsign, a 4-character Maidenhead locator
    /// and a power level in dBm, and generate its channel symbols.
    ///
    /// Inputs are normalized to uppercase after validation. Power is not
    /// range-checked; see [`grid::pack_grid_power_into_22bits`].
    pub fn new(callsign: &str, locator: &str, power: i32) -> Result<Self, WsprMessageError> {
        if callsign.is_empty() {
            return Err(WsprMessageError::EmptyCallsign);
        }
        if locator.len() != 4 {
            return Err(WsprMessageError::InvalidLocatorLength);
        }

        let callsign = callsign.to_ascii_uppercase();
        let locator = locator.to_ascii_uppercase();

        let packed_callsign = pack_callsign_into_28bits(&callsign);
        let packed_grid_power = pack_grid_power_into_22bits(&locator, power);
        debug!(
            callsign = %callsign,
            locator = %locator,
            power,
            packed_callsign,
            packed_grid_power,
            "message fields packed"
        );

        let channel_symbols = channel_symbols(packed_callsign, packed_grid_power);

        Ok(WsprMessage {
            callsign,
            locator,
            power,
            packed_callsign,
            packed_grid_power,
            channel_symbols,
        })
    }
}

/// Encode a message straight to its 162 channel symbols.
pub fn encode(
    callsign: &str,
    locator: &str,
    power: i32,
) -> Result<[u8; CHANNEL_SYMBOLS_COUNT], WsprMessageError> {
    Ok(WsprMessage::new(callsign, locator, power)?.channel_symbols)
}
