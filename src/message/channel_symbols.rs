use bitvec::prelude::*;
use lazy_static::lazy_static;

use crate::constants::*;
use crate::util::bitvec_utils::PackBitvecFieldType;

lazy_static! {
    /// Destination symbol index for each encoded bit, in emission order.
    ///
    /// Walking a cursor over 0..=255, each candidate address is the 8-bit
    /// reversal of the cursor; reversals landing past the symbol count are
    /// skipped. Exactly 162 of the 256 reversals are in range and each
    /// in-range value occurs once, so the table is a bijection onto the
    /// symbol indices.
    static ref INTERLEAVE_ADDRESSES: [usize; CHANNEL_SYMBOLS_COUNT] = {
        let mut addresses = [0usize; CHANNEL_SYMBOLS_COUNT];
        let mut found = 0;
        let mut cursor: u16 = 0;
        while found < CHANNEL_SYMBOLS_COUNT {
            assert!(cursor < 256, "bit-reversal address space exhausted");
            let address = (cursor as u8).reverse_bits() as usize;
            cursor += 1;
            if address < CHANNEL_SYMBOLS_COUNT {
                addresses[found] = address;
                found += 1;
            }
        }
        addresses
    };
}

/// Generate the 162 channel symbols for packed callsign and grid/power
/// fields.
///
/// The two fields and a register-flushing tail feed a rate-1/2
/// convolutional encoder; its output bits are interleaved over the
/// synchronization vector, each symbol carrying the sync bit in its LSB
/// and one encoded bit above it.
pub fn channel_symbols(
    packed_callsign: u32,
    packed_grid_power: u32,
) -> [u8; CHANNEL_SYMBOLS_COUNT] {
    let mut source_bits: BitVec<u8, Msb0> = BitVec::new();
    packed_callsign.pack_into_bitvec(&mut source_bits, CALLSIGN_FIELD_BITS);
    packed_grid_power.pack_into_bitvec(&mut source_bits, GRID_POWER_FIELD_BITS);

    let encoded_bits = convolve(&source_bits);

    let mut symbols = SYNC_VECTOR;
    for (bit, &address) in encoded_bits.iter().zip(INTERLEAVE_ADDRESSES.iter()) {
        symbols[address] += 2 * (*bit as u8);
    }
    symbols
}

/// Rate-1/2 non-systematic convolutional encoder, constraint length 32.
///
/// The register is never reset: the source bits shift through it followed
/// by 31 zero bits, and every shift emits one parity bit per generator
/// polynomial.
fn convolve(source_bits: &BitSlice<u8, Msb0>) -> BitVec<u8, Msb0> {
    let mut encoded_bits: BitVec<u8, Msb0> = BitVec::new();
    let mut reg: u32 = 0;

    for bit in source_bits {
        reg <<= 1;
        reg |= *bit as u32;
        encoded_bits.push(parity(reg & GENERATOR_POLYNOMIAL_A) == 1);
        encoded_bits.push(parity(reg & GENERATOR_POLYNOMIAL_B) == 1);
    }
    for _ in 0..REGISTER_FLUSH_BITS {
        reg <<= 1;
        encoded_bits.push(parity(reg & GENERATOR_POLYNOMIAL_A) == 1);
        encoded_bits.push(parity(reg & GENERATOR_POLYNOMIAL_B) == 1);
    }

    encoded_bits
}

fn parity(value: u32) -> u8 {
    (value.count_ones() & 1) as u8
}
