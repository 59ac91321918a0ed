use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Result;
use flate2::read::GzDecoder;

pub mod json_writer;
pub mod rows;
pub mod summary;
pub mod tsv_writer;

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}
