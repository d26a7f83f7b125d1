mod consolidate;
mod decoder;
mod model;
mod output;
mod util;

pub use consolidate::*;
pub use decoder::*;
pub use model::alphabet::*;
pub use model::config::*;
pub use model::song::*;
pub use output::*;
pub use util::*;
