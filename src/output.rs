use crate::model::song::{NoteEvent, Symbol};
use anyhow::{Result, anyhow};
use log::info;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub const DEFAULT_PLAYBACK_SPEED: f64 = 1.1;

const SHEET_LINE_LEN: usize = 8;
const SHEET_BLOCK_LEN: usize = 32;

/// Song stream for the player: a speed header, then one `"<time> <symbol>"` per line.
pub fn render_song(notes: &[NoteEvent], playback_speed: f64) -> String {
    let mut out = format!("playback_speed={}\n", playback_speed);
    for note in notes {
        let _ = writeln!(out, "{:.2} {}", note.time, note.symbol);
    }
    out
}

/// Printable sheet of every press, chords bracketed, eight per line.
pub fn render_sheet(notes: &[NoteEvent]) -> String {
    let mut out = String::new();
    let mut count = 0;

    for note in notes {
        let Symbol::Press(keys) = &note.symbol else {
            continue;
        };

        if keys.chars().count() > 1 {
            let _ = write!(out, "[{}] ", keys);
        } else {
            let _ = write!(out, "{} ", keys);
        }

        count += 1;
        if count % SHEET_LINE_LEN == 0 {
            out.push('\n');
        }
        if count % SHEET_BLOCK_LEN == 0 {
            out.push_str("\n\n");
        }
    }

    out
}

pub fn render_record(record: &[String]) -> String {
    let mut out = String::new();
    for line in record {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn write_output(path: &Path, what: &str, contents: &str) -> Result<()> {
    info!("Saving {} to {}", what, path.display());
    fs::write(path, contents)
        .map_err(|e| anyhow!("Failed to write {} to {}: {}", what, path.display(), e))
}

pub fn write_song<P: AsRef<Path>>(path: P, notes: &[NoteEvent], playback_speed: f64) -> Result<()> {
    write_output(path.as_ref(), "notes", &render_song(notes, playback_speed))
}

pub fn write_sheet<P: AsRef<Path>>(path: P, notes: &[NoteEvent]) -> Result<()> {
    write_output(path.as_ref(), "sheets", &render_sheet(notes))
}

pub fn write_record<P: AsRef<Path>>(path: P, record: &[String]) -> Result<()> {
    write_output(path.as_ref(), "processing log", &render_record(record))
}
