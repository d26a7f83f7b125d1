use anyhow::{Result, bail};
use std::path::Path;

/// Only `.mid` and `.MID` files are accepted as input.
pub fn ensure_midi_extension(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("mid") | Some("MID") => Ok(()),
        _ => bail!(
            "File must have a .mid extension, got '{}'..!",
            path.display()
        ),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_mid_suffixes() {
        assert!(ensure_midi_extension(Path::new("songs/twinkle.mid")).is_ok());
        assert!(ensure_midi_extension(Path::new("TWINKLE.MID")).is_ok());
    }

    #[test]
    fn rejects_other_suffixes() {
        assert!(ensure_midi_extension(Path::new("twinkle.midi")).is_err());
        assert!(ensure_midi_extension(Path::new("twinkle.txt")).is_err());
        assert!(ensure_midi_extension(Path::new("twinkle")).is_err());
    }
}
