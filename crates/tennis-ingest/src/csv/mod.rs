//! CSV reading utilities.

mod encoding;
mod reader;

pub use encoding::{TextEncoding, decode_bytes};
pub use reader::{ReadOptions, read_csv_frame, read_optional_csv};
