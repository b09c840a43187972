pub mod extract;
pub mod listing;
pub mod make;
pub mod scan;

pub use extract::{extract_image, extract_images, ExtractReport};
pub use listing::write_palette;
pub use make::{encode_palette, make_palette, read_palette_list, ListSource, MakeReport};
pub use scan::{scan_files, scan_reader, scan_stdin, ScanReport};
