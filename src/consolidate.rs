use crate::model::song::{NoteEvent, Symbol};
use log::{debug, info};

/// Time the final entry is pinned to, marking the end of the song.
pub const END_OF_SONG_TIME: f64 = 1.00;

/// Turn the raw per-channel note stream into the playable song order.
///
/// Steps, in order: stable sort by time, merge presses sharing a time into chords,
/// drop repeated keys inside each chord, then pin the last entry to [`END_OF_SONG_TIME`].
pub fn consolidate_notes(notes: &mut Vec<NoteEvent>, verbose: bool) {
    sort_by_time(notes);

    for note in notes.iter() {
        if verbose {
            info!("{:.2}: {}", note.time, note.symbol);
        } else {
            debug!("{:.2}: {}", note.time, note.symbol);
        }
    }

    merge_chords(notes);
    dedup_chords(notes);
    normalize_end(notes);
}

pub fn sort_by_time(notes: &mut [NoteEvent]) {
    notes.sort_by(|a, b| a.time.total_cmp(&b.time));
}

/// Fold neighbouring presses at the same time into one chord. Tempo and release
/// markers never take part.
pub fn merge_chords(notes: &mut Vec<NoteEvent>) {
    let mut merged: Vec<NoteEvent> = Vec::with_capacity(notes.len());
    let mut n = 0;

    for note in notes.drain(..) {
        if let Some(last) = merged.last_mut()
            && last.time == note.time
            && let (Symbol::Press(chord), Symbol::Press(keys)) = (&mut last.symbol, &note.symbol)
        {
            chord.push_str(keys);
            n += 1;
            continue;
        }

        merged.push(note);
    }

    if n > 0 {
        debug!("Merged {} simultaneous press(es) into chords..!", n);
    }

    *notes = merged;
}

/// Remove repeated keys from every chord, keeping the first occurrence.
pub fn dedup_chords(notes: &mut [NoteEvent]) {
    for note in notes.iter_mut() {
        if let Symbol::Press(chord) = &mut note.symbol {
            let mut seen = String::with_capacity(chord.len());
            for key in chord.chars() {
                if !seen.contains(key) {
                    seen.push(key);
                }
            }
            *chord = seen;
        }
    }
}

pub fn normalize_end(notes: &mut [NoteEvent]) {
    if let Some(last) = notes.last_mut() {
        last.time = END_OF_SONG_TIME;
    }
}
