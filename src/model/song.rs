use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_DIVISION: u16 = 480;

/// What a single line of the song stream tells the player to do.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Symbol {
    /// One key, or several struck together as a chord.
    Press(String),

    /// Let go of a previously pressed key.
    Release(char),

    /// Tempo change in beats per minute.
    Tempo(f64),
}

impl Symbol {
    /// Only presses take part in chord merging and deduplication.
    pub fn is_press(&self) -> bool {
        matches!(self, Symbol::Press(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Press(keys) => write!(f, "{}", keys),
            Symbol::Release(key) => write!(f, "~{}", key),
            Symbol::Tempo(bpm) => write!(f, "tempo={:.0}", bpm),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NoteEvent {
    /// Quarter notes since the start of the owning track.
    pub time: f64,
    pub symbol: Symbol,
}

impl NoteEvent {
    pub fn new(time: f64, symbol: Symbol) -> Self {
        Self { time, symbol }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionType {
    #[default]
    TicksPerQuarter,
    Smpte,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiHeader {
    pub length: u32,
    pub format: u16,
    pub tracks: u16,
    pub division: u16,
    pub division_type: DivisionType,
}

impl Default for MidiHeader {
    fn default() -> Self {
        Self {
            length: 0,
            format: 0,
            tracks: 0,
            division: DEFAULT_DIVISION,
            division_type: DivisionType::TicksPerQuarter,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Song {
    pub header: MidiHeader,
    pub notes: Vec<NoteEvent>,
    pub record: Vec<String>,
    pub key_presses: u32,
}
