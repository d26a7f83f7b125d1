use crate::decoder::DecodeSession;
use crate::model::alphabet::key_for_midi;
use crate::model::song::{NoteEvent, Symbol};
use log::debug;

const NOTE_OFF: u8 = 0x8;
const NOTE_ON: u8 = 0x9;

/// Families that carry two data bytes besides note on/off.
const TWO_BYTE_FAMILIES: [u8; 4] = [0xA, 0xB, 0xD, 0xE];

impl DecodeSession<'_> {
    /// Decode one channel voice event, honouring running status.
    pub(crate) fn handle_voice_event(&mut self, delta: u32) {
        let Some(next) = self.cursor.peek() else {
            return;
        };

        let status = match self.running_status {
            Some(running) if next < 0x80 => running,
            _ => {
                if (0x80..=0xF7).contains(&next) {
                    self.record(format!("RUNNING STATUS SET: 0x{:02X}", next));
                    self.running_status = Some(next);
                }
                self.cursor.skip(1);
                next
            }
        };

        match status >> 4 {
            NOTE_ON | NOTE_OFF => self.handle_note(status, delta),
            family if TWO_BYTE_FAMILIES.contains(&family) => {
                let data = self.cursor.take(2);
                self.record(format!(
                    "VoiceEvent: 0x{:02X}, {}, DT: {}",
                    status,
                    hex_list(data),
                    delta
                ));
            }
            _ => {
                let data = self.cursor.take(1);
                self.record(format!(
                    "VoiceEvent: 0x{:02X}, {}, DT: {}",
                    status,
                    hex_list(data),
                    delta
                ));
            }
        }
    }

    fn handle_note(&mut self, status: u8, delta: u32) {
        if self.cursor.remaining() < 2 {
            debug!(
                "Note event 0x{:02X} truncated at offset {}, DT: {}..!",
                status,
                self.cursor.position(),
                delta
            );
            return;
        }

        let data = self.cursor.take(2);
        let (key, velocity) = (data[0], data[1]);
        let symbol = key_for_midi(key);
        let time = self.current_time();

        if status >> 4 == NOTE_ON && velocity > 0 {
            self.record(format!("{:.2} {}", time, symbol));
            self.notes
                .push(NoteEvent::new(time, Symbol::Press(symbol.to_string())));
            self.key_presses += 1;
        } else {
            self.record(format!("{:.2} ~{}", time, symbol));
            self.notes.push(NoteEvent::new(time, Symbol::Release(symbol)));
        }
    }
}

fn hex_list(data: &[u8]) -> String {
    data.iter()
        .map(|byte| format!("0x{:02X}", byte))
        .collect::<Vec<_>>()
        .join(", ")
}
