use crate::consolidate::consolidate_notes;
use crate::model::song::{MidiHeader, NoteEvent, Song};
use anyhow::{Result, anyhow};
use log::{debug, info};
use std::fs;
use std::path::Path;

mod cursor;
mod header;
mod meta;
mod scanner;
mod track;
mod voice;

pub use cursor::ByteCursor;
pub use meta::meta_event_name;
pub use scanner::{ChunkMatch, ChunkScanner};

/// Everything one decode of one file mutates, handed to every chunk and event reader.
#[derive(Debug)]
pub struct DecodeSession<'a> {
    pub(crate) cursor: ByteCursor<'a>,
    pub(crate) header: MidiHeader,
    pub(crate) running_status: Option<u8>,
    /// Ticks accumulated since the start of the current track chunk.
    pub(crate) delta_ticks: u64,
    pub(crate) tempo: Option<f64>,
    pub(crate) key_presses: u32,
    pub(crate) notes: Vec<NoteEvent>,
    pub(crate) record: Vec<String>,
}

impl<'a> DecodeSession<'a> {
    pub fn new(cursor: ByteCursor<'a>) -> Self {
        Self {
            cursor,
            header: MidiHeader::default(),
            running_status: None,
            delta_ticks: 0,
            tempo: None,
            key_presses: 0,
            notes: Vec::new(),
            record: Vec::new(),
        }
    }

    /// Append a line to the processing record.
    pub(crate) fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        debug!("{}", line);
        self.record.push(line);
    }

    /// Current position of the track in quarter notes.
    pub(crate) fn current_time(&self) -> f64 {
        self.delta_ticks as f64 / self.header.division as f64
    }

    /// Scan and decode the whole buffer, then consolidate what was found.
    pub fn run(mut self, verbose: bool) -> Song {
        self.scan_chunks();

        info!(
            "{} notes processed. Your MIDI survived..!",
            self.key_presses
        );

        if let Some(bpm) = self.tempo {
            debug!("Last tempo seen: {:.0} bpm", bpm);
        }

        consolidate_notes(&mut self.notes, verbose);

        Song {
            header: self.header,
            notes: self.notes,
            record: self.record,
            key_presses: self.key_presses,
        }
    }
}

pub fn decode_midi_file<P: AsRef<Path>>(path: P, verbose: bool) -> Result<Song> {
    let bytes = fs::read(path.as_ref()).map_err(|e| {
        anyhow!(
            "Failed to read MIDI file {}: {}",
            path.as_ref().display(),
            e
        )
    })?;

    info!("Processing {}", path.as_ref().display());
    Ok(decode_midi_bytes(&bytes, verbose))
}

pub fn decode_midi_bytes(bytes: &[u8], verbose: bool) -> Song {
    DecodeSession::new(ByteCursor::new(bytes)).run(verbose)
}
