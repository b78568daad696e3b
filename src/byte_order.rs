//! Helpers for explicit little-endian byte-order conversions.
//!
//! Attribute lengths and notification identifiers travel least significant
//! byte first. These helpers keep Clippy expectations scoped to the
//! conversion points so protocol code stays explicit about wire endianness.

/// Serialise a `u16` in wire byte order (little-endian).
///
/// # Examples
///
/// ```
/// use notify_reassembly::byte_order::write_le_u16;
///
/// assert_eq!(write_le_u16(0x1234), [0x34, 0x12]);
/// ```
#[must_use]
pub fn write_le_u16(value: u16) -> [u8; 2] {
    #[expect(
        clippy::little_endian_bytes,
        reason = "Attribute lengths are little-endian on the wire."
    )]
    value.to_le_bytes()
}

/// Parse a wire-order `u16` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use notify_reassembly::byte_order::read_le_u16;
///
/// assert_eq!(read_le_u16([0x34, 0x12]), 0x1234);
/// ```
#[must_use]
pub fn read_le_u16(bytes: [u8; 2]) -> u16 {
    #[expect(
        clippy::little_endian_bytes,
        reason = "Attribute lengths are little-endian on the wire."
    )]
    u16::from_le_bytes(bytes)
}

/// Serialise a `u32` in wire byte order (little-endian).
///
/// # Examples
///
/// ```
/// use notify_reassembly::byte_order::write_le_u32;
///
/// assert_eq!(write_le_u32(0x1234_5678), [0x78, 0x56, 0x34, 0x12]);
/// ```
#[must_use]
pub fn write_le_u32(value: u32) -> [u8; 4] {
    #[expect(
        clippy::little_endian_bytes,
        reason = "Notification identifiers are little-endian on the wire."
    )]
    value.to_le_bytes()
}

/// Parse a wire-order `u32` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use notify_reassembly::byte_order::read_le_u32;
///
/// assert_eq!(read_le_u32([0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
/// ```
#[must_use]
pub fn read_le_u32(bytes: [u8; 4]) -> u32 {
    #[expect(
        clippy::little_endian_bytes,
        reason = "Notification identifiers are little-endian on the wire."
    )]
    u32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    //! Round-trip tests for little-endian conversion helpers.

    use rstest::rstest;

    use super::{read_le_u16, read_le_u32, write_le_u16, write_le_u32};

    /// Verify that each little-endian write/read pair round-trips correctly.
    #[rstest]
    #[case::u16(
        0x1234u32,
        &write_le_u16(0x1234)[..],
        &[0x34, 0x12],
        u32::from(read_le_u16([0x34, 0x12]))
    )]
    #[case::u16_max(
        u32::from(u16::MAX),
        &write_le_u16(u16::MAX)[..],
        &[0xff, 0xff],
        u32::from(read_le_u16([0xff, 0xff]))
    )]
    #[case::u32(
        0x1234_5678u32,
        &write_le_u32(0x1234_5678)[..],
        &[0x78, 0x56, 0x34, 0x12],
        read_le_u32([0x78, 0x56, 0x34, 0x12])
    )]
    #[case::uid(
        0x0403_0201u32,
        &write_le_u32(0x0403_0201)[..],
        &[0x01, 0x02, 0x03, 0x04],
        read_le_u32([0x01, 0x02, 0x03, 0x04])
    )]
    fn little_endian_round_trip(
        #[case] value: u32,
        #[case] written: &[u8],
        #[case] expected_bytes: &[u8],
        #[case] read_back: u32,
    ) {
        assert_eq!(written, expected_bytes);
        assert_eq!(read_back, value);
    }
}
