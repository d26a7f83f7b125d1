/// Read position over an immutable MIDI byte buffer.
///
/// Every read clamps to the end of the buffer instead of failing, so a
/// truncated file simply runs dry and the callers stop early.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Consume up to `count` bytes, fewer if the buffer runs out first.
    pub fn take(&mut self, count: usize) -> &'a [u8] {
        let end = self.pos.saturating_add(count).min(self.bytes.len());
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        slice
    }

    /// Big-endian unsigned integer of 1..=4 bytes, zero-extended.
    pub fn read_big_endian(&mut self, count: usize) -> u32 {
        self.take(count.min(4))
            .iter()
            .fold(0u32, |value, &byte| (value << 8) | byte as u32)
    }

    /// MIDI variable-length quantity: 7 bits per byte, high bit means "more follows".
    pub fn read_variable_length(&mut self) -> u32 {
        let mut value: u32 = 0;

        while let Some(byte) = self.read_u8() {
            value = (value << 7) | (byte & 0x7F) as u32;
            if byte & 0x80 == 0 {
                break;
            }
        }

        value
    }

    pub fn skip(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.bytes.len());
    }

    /// Jump to an absolute offset, clamped to the buffer.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.bytes.len());
    }

    pub fn read_text(&mut self, length: usize) -> Vec<u8> {
        self.take(length).to_vec()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Reference encoder for variable-length quantities.
    fn encode_vlq(mut value: u32) -> Vec<u8> {
        let mut out = vec![(value & 0x7F) as u8];
        value >>= 7;
        while value > 0 {
            out.push(((value & 0x7F) as u8) | 0x80);
            value >>= 7;
        }
        out.reverse();
        out
    }

    #[test]
    fn big_endian_reads() {
        let bytes = [0x00, 0x00, 0x01, 0xE0, 0x4D, 0x54];
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_big_endian(4), 480);
        assert_eq!(cursor.read_big_endian(2), 0x4D54);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn big_endian_clamps_to_buffer() {
        let bytes = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&bytes);
        cursor.skip(1);

        assert_eq!(cursor.read_big_endian(4), 0x0203);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.read_big_endian(2), 0);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn variable_length_known_values() {
        let cases: &[(&[u8], u32)] = &[
            (&[0x00], 0),
            (&[0x40], 0x40),
            (&[0x7F], 0x7F),
            (&[0x81, 0x00], 0x80),
            (&[0x83, 0x60], 480),
            (&[0xC0, 0x00], 0x2000),
            (&[0xFF, 0x7F], 0x3FFF),
            (&[0x81, 0x80, 0x00], 0x4000),
            (&[0xFF, 0xFF, 0xFF, 0x7F], 0x0FFF_FFFF),
        ];

        for (bytes, expected) in cases {
            let mut cursor = ByteCursor::new(bytes);
            assert_eq!(cursor.read_variable_length(), *expected);
            assert!(cursor.is_exhausted());
        }
    }

    #[test]
    fn variable_length_matches_reference_encoder() {
        let mut value: u32 = 0;
        while value <= 0x0FFF_FFFF {
            let encoded = encode_vlq(value);
            let mut cursor = ByteCursor::new(&encoded);
            assert_eq!(cursor.read_variable_length(), value);
            assert_eq!(cursor.position(), encoded.len());

            value = value * 3 + 1;
        }

        let encoded = encode_vlq(0x0FFF_FFFF);
        assert_eq!(ByteCursor::new(&encoded).read_variable_length(), 0x0FFF_FFFF);
    }

    #[test]
    fn variable_length_stops_at_end() {
        let mut cursor = ByteCursor::new(&[]);
        assert_eq!(cursor.read_variable_length(), 0);

        let bytes = [0x81, 0x81];
        let mut cursor = ByteCursor::new(&bytes);
        assert_eq!(cursor.read_variable_length(), 0x81);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.read_variable_length(), 0);
    }

    #[test]
    fn skip_seek_and_text_clamp() {
        let bytes = b"Piano";
        let mut cursor = ByteCursor::new(bytes);

        assert_eq!(cursor.read_text(3), b"Pia".to_vec());
        assert_eq!(cursor.read_text(10), b"no".to_vec());
        assert!(cursor.is_exhausted());

        cursor.seek(1);
        cursor.skip(100);
        assert_eq!(cursor.position(), 5);

        cursor.seek(usize::MAX);
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.remaining(), 0);
    }
}
