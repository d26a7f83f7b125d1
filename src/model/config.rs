use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "midi_keys",
    about = "Convert a MIDI file into a virtual piano song and sheet!"
)]
pub struct Args {
    /// Path to the target MIDI file (.mid or .MID).
    pub midi: PathBuf,

    /// Where to write the timed song stream for the player.
    #[arg(long, default_value = "song.txt")]
    pub song: PathBuf,

    /// Where to write the printable sheet.
    #[arg(long, default_value = "sheetConversion.txt")]
    pub sheet: PathBuf,

    /// Where to write the processing record.
    #[arg(long, default_value = "midiRecord.txt")]
    pub record: PathBuf,

    /// Playback speed written on the first line of the song file.
    #[arg(long = "playback-speed", default_value_t = 1.1)]
    pub playback_speed: f64,

    /// Dry run (print the consolidated song and exit without writing anything).
    #[arg(short, long, default_value_t = false)]
    pub dry_run: bool,

    /// Prints extra information to the terminal.
    #[arg(short, long)]
    pub verbose: bool,
}
