/*!
# IO utilities

Loading of raw discussion corpora, saving of encoded datasets and loading of pre-defined vocabularies.

Paths ending in `.gz` are transparently (de)compressed.
!*/
pub mod artifact;
pub mod corpus;

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};

use crate::error::Error;

pub use artifact::{ArtifactStore, JsonStore};
pub use corpus::{load_corpus, Discussion};

fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

/// Open `path` for reading, decompressing on the fly if needed.
pub(crate) fn open(path: &Path) -> Result<Box<dyn Read>, Error> {
    let f = BufReader::new(File::open(path)?);
    if is_gzip(path) {
        Ok(Box::new(MultiGzDecoder::new(f)))
    } else {
        Ok(Box::new(f))
    }
}

/// Write `bytes` to `path`, gzip-compressed if `gzip_like` ends in `.gz`.
pub(crate) fn write_bytes(path: &Path, gzip_like: &Path, bytes: &[u8]) -> Result<(), Error> {
    let f = BufWriter::new(File::create(path)?);
    let mut f = if is_gzip(gzip_like) {
        let mut enc = GzEncoder::new(f, Compression::default());
        enc.write_all(bytes)?;
        enc.finish()?
    } else {
        let mut f = f;
        f.write_all(bytes)?;
        f
    };
    f.flush()?;
    Ok(())
}
