//! Compact difficulty ("nBits") encoding of 256-bit proof-of-work targets.

pub use primitive_types::U256;
use thiserror::Error;

/// Sign bit of the compact mantissa.
const COMPACT_SIGN_BIT: u32 = 0x0080_0000;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactError {
    #[error("compact target {0:#010x} is negative")]
    Negative(u32),

    #[error("compact target {0:#010x} overflows 256 bits")]
    Overflow(u32),
}

/// Expands compact bits into the full target.
pub fn compact_to_target(bits: u32) -> Result<U256, CompactError> {
    let size = bits >> 24;
    let word = bits & 0x007f_ffff;

    if word != 0 && bits & COMPACT_SIGN_BIT != 0 {
        return Err(CompactError::Negative(bits));
    }
    if word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32)) {
        return Err(CompactError::Overflow(bits));
    }
    if word == 0 {
        return Ok(U256::zero());
    }

    let target = if size <= 3 {
        U256::from(word >> (8 * (3 - size)))
    } else {
        U256::from(word) << (8 * (size - 3) as usize)
    };
    Ok(target)
}

/// Encodes a target in compact form, rounding the mantissa down to 23 bits.
pub fn target_to_compact(target: U256) -> u32 {
    let mut size = (target.bits() as u32 + 7) / 8;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size - 3) as usize)).low_u64() as u32
    };

    // Keep the sign bit clear by moving one byte into the exponent
    if compact & COMPACT_SIGN_BIT != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | (size << 24)
}

/// Interprets a hash in internal (little-endian) byte order as an integer and
/// checks it against `target`.
pub fn hash_meets_target(hash_le: &[u8; 32], target: U256) -> bool {
    U256::from_little_endian(hash_le) <= target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow_limit_encodes_to_easiest_bits() {
        let limit = !U256::zero() >> 1usize;
        assert_eq!(target_to_compact(limit), 0x207f_ffff);
    }

    #[test]
    fn genesis_bits_round_trip() {
        let target = compact_to_target(0x1e0f_fff0).unwrap();
        assert_eq!(target, U256::from(0x0f_fff0u64) << 216usize);
        assert_eq!(target_to_compact(target), 0x1e0f_fff0);
    }

    #[test]
    fn small_exponents_shift_right() {
        assert_eq!(compact_to_target(0x0112_3456).unwrap(), U256::from(0x12u64));
        assert_eq!(compact_to_target(0x0212_3456).unwrap(), U256::from(0x1234u64));
        assert_eq!(target_to_compact(U256::from(0x12u64)), 0x0112_0000);
    }

    #[test]
    fn sign_bit_moves_into_exponent() {
        assert_eq!(target_to_compact(U256::from(0x80u64)), 0x0200_8000);
    }

    #[test]
    fn rejects_negative_and_overflowing_bits() {
        assert_eq!(compact_to_target(0x0480_0001), Err(CompactError::Negative(0x0480_0001)));
        assert_eq!(compact_to_target(0x2301_0000), Err(CompactError::Overflow(0x2301_0000)));
        assert_eq!(compact_to_target(0xff00_0000).unwrap(), U256::zero());
    }

    #[test]
    fn hash_comparison_uses_little_endian_bytes() {
        let target = compact_to_target(0x1e0f_fff0).unwrap();
        let mut easy = [0u8; 32];
        easy[0] = 0xff;
        assert!(hash_meets_target(&easy, target));

        let mut hard = [0u8; 32];
        hard[31] = 0x01;
        assert!(!hash_meets_target(&hard, target));
    }
}
