use crate::decoder::DecodeSession;
use crate::model::song::{NoteEvent, Symbol};
use log::warn;

const END_OF_TRACK: u8 = 0x2F;
const SET_TEMPO: u8 = 0x51;
const MICROSECONDS_PER_MINUTE: f64 = 60_000_000.0;

const META_EVENT_NAMES: &[(u8, &str)] = &[
    (0x00, "Sequence Number"),
    (0x01, "Text Event"),
    (0x02, "Copyright Notice"),
    (0x03, "Sequence/Track Name"),
    (0x04, "Instrument Name"),
    (0x05, "Lyric"),
    (0x06, "Marker"),
    (0x07, "Cue Point"),
    (0x08, "Other text format [0x08]"),
    (0x09, "Other text format [0x09]"),
    (0x0A, "Other text format [0x0A]"),
    (0x0C, "Other text format [0x0C]"),
    (0x20, "MIDI Channel Prefix"),
    (0x21, "Prefix Port"),
    (0x2F, "End of Track"),
    (0x51, "Set Tempo"),
    (0x54, "SMPTE Offset"),
    (0x58, "Time Signature"),
    (0x59, "Key Signature"),
    (0x7F, "Sequencer Specific"),
];

pub fn meta_event_name(kind: u8) -> Option<&'static str> {
    META_EVENT_NAMES
        .iter()
        .find(|(code, _)| *code == kind)
        .map(|(_, name)| *name)
}

impl DecodeSession<'_> {
    /// Decode one meta event (the 0xFF prefix is already consumed).
    ///
    /// Returns false once the track has ended.
    pub(crate) fn dispatch_meta_event(&mut self, delta: u32) -> bool {
        let Some(kind) = self.cursor.read_u8() else {
            return false;
        };
        let length = self.cursor.read_variable_length();

        let name = meta_event_name(kind).unwrap_or("Unknown Event");
        self.record(format!(
            "MIDIMETAEVENT: {}, LENGTH: {}, DT: {}",
            name, length, delta
        ));

        match kind {
            END_OF_TRACK => {
                self.record("END TRACK");
                // Suspect: this runs two bytes into whatever follows the track, but
                // the chunk boundary resync depends on it staying this way.
                self.cursor.skip(2);
                false
            }
            0x01..=0x0C if kind != 0x0B => {
                let text = self.cursor.read_text(length as usize);
                self.record(format!("\t{}", String::from_utf8_lossy(&text)));
                true
            }
            SET_TEMPO => {
                self.read_tempo();
                true
            }
            _ => {
                if meta_event_name(kind).is_none() {
                    warn!(
                        "Skipping unknown meta event 0x{:02X} ({} bytes)..!",
                        kind, length
                    );
                }
                self.cursor.skip(length as usize);
                true
            }
        }
    }

    /// Tempo is always three bytes, whatever length the event declares.
    fn read_tempo(&mut self) {
        let mpqn = self.cursor.read_big_endian(3);

        if mpqn == 0 {
            warn!("Ignoring Set Tempo of 0 us/qn..!");
            self.record("\tIgnoring tempo of 0 us/qn");
            return;
        }

        let bpm = MICROSECONDS_PER_MINUTE / mpqn as f64;
        self.tempo = Some(bpm);

        let time = self.current_time();
        self.notes.push(NoteEvent::new(time, Symbol::Tempo(bpm)));
        self.record(format!("\tNew tempo is {:.0}", bpm));
    }
}
