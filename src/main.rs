use anyhow::Result;
use clap::Parser;
use log::info;
use midi_keys::{
    Args, decode_midi_file, ensure_midi_extension, write_record, write_sheet, write_song,
};
use std::process;

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(why) if why.use_stderr() => {
            let _ = why.print();
            process::exit(1);
        }
        Err(why) => why.exit(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    ensure_midi_extension(&args.midi)?;

    let song = decode_midi_file(&args.midi, args.verbose)?;

    if args.dry_run {
        info!("Previewing {} consolidated events..!", song.notes.len());
        for (i, note) in song.notes.iter().enumerate() {
            info!("Event {}: {:.2} {}", i, note.time, note.symbol);
        }
        return Ok(());
    }

    write_record(&args.record, &song.record)?;
    write_song(&args.song, &song.notes, args.playback_speed)?;
    write_sheet(&args.sheet, &song.notes)?;

    info!(
        "Wrote {} events ({} key presses) for '{}'..!",
        song.notes.len(),
        song.key_presses,
        args.midi.display()
    );

    Ok(())
}
