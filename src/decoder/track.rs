use crate::decoder::DecodeSession;
use log::warn;

const META_PREFIX: u8 = 0xFF;

impl DecodeSession<'_> {
    pub(crate) fn read_track_chunk(&mut self) {
        let length = self.cursor.read_big_endian(4);
        self.record(format!("MTrk len: {}", length));

        self.read_track_events(length as usize);
    }

    /// Decode delta-time/event pairs until the chunk is used up or ends itself.
    ///
    /// Whatever happens inside, the cursor finishes on the declared end of the chunk.
    fn read_track_events(&mut self, length: usize) {
        self.record("TRACKEVENT");
        self.delta_ticks = 0;

        let start = self.cursor.position();
        let mut keep_reading = true;

        while keep_reading && self.cursor.position() - start < length {
            let delta = self.cursor.read_variable_length();
            self.delta_ticks += delta as u64;

            let Some(next) = self.cursor.peek() else {
                warn!("Track chunk at offset {} ran past the end of the file..!", start);
                self.record("Reached end of MIDI data unexpectedly.");
                break;
            };

            match next {
                META_PREFIX => {
                    self.cursor.skip(1);
                    keep_reading = self.dispatch_meta_event(delta);
                }
                // System messages are not parsed, they only cancel running status.
                0xF0..=0xF7 => {
                    self.running_status = None;
                    self.record("RUNNING STATUS SET: CLEARED");
                }
                _ => self.handle_voice_event(delta),
            }
        }

        let end = start.saturating_add(length);
        self.record(format!(
            "End of MTrk event, jumping from {} to {}",
            self.cursor.position(),
            end
        ));
        self.cursor.seek(end);
    }
}
