//! Helpers shared by the crate's tests.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Builds a ZIP archive in memory.
///
/// Each pair is an entry name plus `Some(content)` for a file or `None`
/// for an explicit directory marker.
pub fn build_zip(entries: &[(&str, Option<&[u8]>)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (name, content) in entries {
        match content {
            Some(content) => {
                writer.start_file(*name, options).unwrap();
                writer.write_all(content).unwrap();
            }
            None => {
                writer.add_directory(*name, options).unwrap();
            }
        }
    }

    writer.finish().unwrap().into_inner()
}
