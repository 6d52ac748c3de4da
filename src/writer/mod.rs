#![doc = r#"
Byte-level writing primitives, the inverse of [`reader`](crate::reader).

Values that do not fit their field are refused instead of being truncated.
"#]

mod error;
pub use error::*;

use alloc::vec::Vec;

/// The largest value a variable-length quantity can carry (28 bits).
pub const MAX_VARLEN: u32 = 0x0FFF_FFFF;

/// Append `value` as an `n`-byte big-endian integer.
///
/// `n` above 8 is refused with [`WriterError::FieldWidth`].
pub fn write_fixed_int(out: &mut Vec<u8>, n: usize, value: u64) -> WriteResult<()> {
    if n > 8 {
        return Err(WriterError::FieldWidth(n));
    }
    if n < 8 && value >> (n * 8) != 0 {
        return Err(WriterError::Overflow { value, width: n });
    }
    let bytes = value.to_be_bytes();
    out.extend_from_slice(&bytes[bytes.len() - n..]);
    Ok(())
}

/// Append the minimal variable-length encoding of `value`.
///
/// Zero is written as a single `0x00`.
pub fn write_varlen(out: &mut Vec<u8>, value: u32) -> WriteResult<()> {
    if value > MAX_VARLEN {
        return Err(WriterError::VarLenOverflow(value as u64));
    }
    let mut groups = [0u8; 4];
    let mut len = 0;
    let mut rest = value;
    loop {
        groups[len] = (rest & 0x7F) as u8;
        len += 1;
        rest >>= 7;
        if rest == 0 {
            break;
        }
    }
    // groups are little-endian here; every byte but the final one continues
    for (i, group) in groups[..len].iter().enumerate().rev() {
        let continuation = if i == 0 { 0 } else { 0x80 };
        out.push(group | continuation);
    }
    Ok(())
}

/// Append a length as a variable-length quantity.
pub(crate) fn write_varlen_len(out: &mut Vec<u8>, len: usize) -> WriteResult<()> {
    let value = u32::try_from(len)
        .ok()
        .filter(|v| *v <= MAX_VARLEN)
        .ok_or(WriterError::VarLenOverflow(len as u64))?;
    write_varlen(out, value)
}

#[test]
fn write_fixed_width_integers() {
    use pretty_assertions::assert_eq;
    let mut out = Vec::new();
    write_fixed_int(&mut out, 4, 6).unwrap();
    write_fixed_int(&mut out, 2, 0x0060).unwrap();
    write_fixed_int(&mut out, 1, 0xFF).unwrap();
    assert_eq!(out, [0x00, 0x00, 0x00, 0x06, 0x00, 0x60, 0xFF]);
}

#[test]
fn write_fixed_int_refuses_overflow() {
    use pretty_assertions::assert_eq;
    let mut out = Vec::new();
    assert_eq!(
        write_fixed_int(&mut out, 2, 0x1_0000),
        Err(WriterError::Overflow {
            value: 0x1_0000,
            width: 2
        })
    );
    assert!(out.is_empty());
}

#[test]
fn write_fixed_int_refuses_wide_fields() {
    use pretty_assertions::assert_eq;
    let mut out = Vec::new();
    assert_eq!(
        write_fixed_int(&mut out, 9, 1),
        Err(WriterError::FieldWidth(9))
    );
    assert!(out.is_empty());

    write_fixed_int(&mut out, 8, u64::MAX).unwrap();
    assert_eq!(out, [0xFF; 8]);
}

#[test]
fn write_varlen_is_minimal() {
    use pretty_assertions::assert_eq;
    let cases: &[(u32, &[u8])] = &[
        (0, &[0x00]),
        (0x7F, &[0x7F]),
        (0x80, &[0x81, 0x00]),
        (0x2000, &[0xC0, 0x00]),
        (0x3FFF, &[0xFF, 0x7F]),
        (0x4000, &[0x81, 0x80, 0x00]),
        (0x0FFF_FFFF, &[0xFF, 0xFF, 0xFF, 0x7F]),
    ];
    for (value, expected) in cases {
        let mut out = Vec::new();
        write_varlen(&mut out, *value).unwrap();
        assert_eq!(&out[..], *expected);
    }
}

#[test]
fn write_varlen_refuses_29_bits() {
    use pretty_assertions::assert_eq;
    let mut out = Vec::new();
    assert_eq!(
        write_varlen(&mut out, 0x1000_0000),
        Err(WriterError::VarLenOverflow(0x1000_0000))
    );
}

#[test]
fn varlen_survives_a_trip_through_the_reader() {
    use crate::reader::Reader;
    use pretty_assertions::assert_eq;

    // walk the 28-bit range with an odd stride so every byte width is hit
    let mut value = 0u32;
    while value <= MAX_VARLEN {
        let mut out = Vec::new();
        write_varlen(&mut out, value).unwrap();
        assert_ne!(out[0], 0x80, "leading zero group for {value:#X}");

        let mut reader = Reader::from_byte_slice(&out);
        assert_eq!(reader.read_varlen().unwrap(), value);
        assert!(reader.is_empty());
        value += 4093;
    }
}
