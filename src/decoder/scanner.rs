use crate::decoder::DecodeSession;
use log::debug;

const PATTERNS: [[u8; 4]; 3] = [
    *b"MThd",
    *b"MTrk",
    [0xFF, 0x00, 0x00, 0x00], // only the first byte is ever compared
];

const THRESHOLDS: [usize; 3] = [4, 4, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkMatch {
    Header,
    Track,
    /// A lone 0xFF between chunks. Nothing is read for it; scanning restarts.
    Marker,
}

/// Byte-at-a-time matcher for the chunk magic sequences.
#[derive(Debug, Default)]
pub struct ChunkScanner {
    counters: [usize; 3],
}

impl ChunkScanner {
    pub fn reset(&mut self) {
        self.counters = [0; 3];
    }

    /// Advance every pattern by one byte. A mismatch drops that pattern back to zero.
    pub fn feed(&mut self, byte: u8) {
        for (counter, pattern) in self.counters.iter_mut().zip(PATTERNS.iter()) {
            if pattern.get(*counter) == Some(&byte) {
                *counter += 1;
            } else {
                *counter = 0;
            }
        }
    }

    pub fn matched(&self) -> Option<ChunkMatch> {
        if self.counters[0] == THRESHOLDS[0] {
            Some(ChunkMatch::Header)
        } else if self.counters[1] == THRESHOLDS[1] {
            Some(ChunkMatch::Track)
        } else if self.counters[2] == THRESHOLDS[2] {
            Some(ChunkMatch::Marker)
        } else {
            None
        }
    }
}

impl DecodeSession<'_> {
    /// Walk the whole buffer, handing every chunk found to its reader.
    pub(crate) fn scan_chunks(&mut self) {
        let mut scanner = ChunkScanner::default();

        while self.cursor.remaining() >= 2 {
            scanner.reset();

            while self.cursor.remaining() >= 2 {
                let Some(byte) = self.cursor.read_u8() else {
                    break;
                };
                scanner.feed(byte);

                match scanner.matched() {
                    Some(ChunkMatch::Header) => {
                        self.read_header_chunk();
                        break;
                    }
                    Some(ChunkMatch::Track) => {
                        self.read_track_chunk();
                        break;
                    }
                    Some(ChunkMatch::Marker) => {
                        debug!("Stray 0xFF at offset {}..!", self.cursor.position() - 1);
                        break;
                    }
                    None => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn feed_all(scanner: &mut ChunkScanner, bytes: &[u8]) -> Option<ChunkMatch> {
        for &byte in bytes {
            scanner.feed(byte);
            if let Some(found) = scanner.matched() {
                return Some(found);
            }
        }
        None
    }

    #[test]
    fn finds_header_and_track_magic() {
        let mut scanner = ChunkScanner::default();
        assert_eq!(feed_all(&mut scanner, b"xxMThd"), Some(ChunkMatch::Header));

        scanner.reset();
        assert_eq!(feed_all(&mut scanner, b"\x00MTrk"), Some(ChunkMatch::Track));
    }

    #[test]
    fn mismatch_resets_without_rematching() {
        let mut scanner = ChunkScanner::default();
        // The second 'M' breaks the run and is not counted as a fresh start.
        assert_eq!(feed_all(&mut scanner, b"MMThd"), None);
        assert_eq!(feed_all(&mut scanner, b"MTh"), None);
        assert_eq!(feed_all(&mut scanner, b"d"), Some(ChunkMatch::Header));
    }

    #[test]
    fn lone_ff_is_a_marker() {
        let mut scanner = ChunkScanner::default();
        assert_eq!(feed_all(&mut scanner, &[0x00, 0xFF]), Some(ChunkMatch::Marker));
    }
}
