use crate::decoder::DecodeSession;
use crate::model::song::DivisionType;
use log::warn;

impl DecodeSession<'_> {
    pub(crate) fn read_header_chunk(&mut self) {
        self.header.length = self.cursor.read_big_endian(4);
        self.record(format!("HeaderLength: {}", self.header.length));

        self.header.format = self.cursor.read_big_endian(2) as u16;
        self.header.tracks = self.cursor.read_big_endian(2) as u16;

        let division = self.cursor.read_big_endian(2) as u16;
        self.header.division_type = if division & 0x8000 != 0 {
            DivisionType::Smpte
        } else {
            DivisionType::TicksPerQuarter
        };
        self.header.division = division & 0x7FFF;

        self.record(format!(
            "Format: {}, Tracks: {}, DivisionType: {}, Division: {}",
            self.header.format,
            self.header.tracks,
            self.header.division_type as u8,
            self.header.division
        ));

        if self.header.division == 0 {
            warn!("Header declares a division of 0, note times will not be finite..!");
        }
    }
}
