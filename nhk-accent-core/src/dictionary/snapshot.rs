//! Binary snapshot of a loaded dictionary
//!
//! The snapshot skips re-parsing the derivative cache on startup. It starts
//! with a magic prefix so that a file from an incompatible build is rejected
//! instead of being decoded into garbage.

use crate::dictionary::{temp_sibling, Dictionary};
use crate::error::{AccentError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Identifies snapshot files written by this crate version
pub const SNAPSHOT_MAGIC: &[u8] = b"NHKACCENT-SNAPSHOT-1\n";

fn bincode_config() -> bincode::config::Configuration {
    bincode::config::standard()
}

/// Serialize `dictionary` to `writer`
pub fn write_to<W: Write>(dictionary: &Dictionary, mut writer: W) -> Result<()> {
    writer.write_all(SNAPSHOT_MAGIC)?;
    bincode::serde::encode_into_std_write(dictionary, &mut writer, bincode_config())
        .map_err(|e| AccentError::Snapshot(e.to_string()))?;
    writer.flush()?;
    Ok(())
}

/// Deserialize a dictionary from `reader`
pub fn read_from<R: Read>(mut reader: R) -> Result<Dictionary> {
    let mut magic = vec![0; SNAPSHOT_MAGIC.len()];
    reader
        .read_exact(&mut magic)
        .map_err(|e| AccentError::Snapshot(format!("missing header: {e}")))?;
    if magic != SNAPSHOT_MAGIC {
        return Err(AccentError::Snapshot("unrecognized snapshot header".into()));
    }
    bincode::serde::decode_from_std_read(&mut reader, bincode_config())
        .map_err(|e| AccentError::Snapshot(e.to_string()))
}

/// Write a snapshot file, replacing any previous one atomically
pub fn write_file(dictionary: &Dictionary, path: &Path) -> Result<()> {
    let tmp = temp_sibling(path);
    {
        let file = File::create(&tmp)?;
        write_to(dictionary, BufWriter::new(file))?;
    }
    fs::rename(&tmp, path)?;
    log::info!("Wrote dictionary snapshot to {}", path.display());
    Ok(())
}

/// Read a snapshot file
pub fn read_file(path: &Path) -> Result<Dictionary> {
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryCompiler;

    #[test]
    fn test_snapshot_round_trip() {
        let source = "\
1,10,A0001,1,1,ハシ,ハシ,箸,ハシ,2,0,0,,,,ハシ,1,1,12
2,20,A0002,1,1,キク,キク,菊,キク,2,10,20,,,,キク,1,1,12
";
        let (dict, _) = DictionaryCompiler::compile_str(source);

        let mut buf = Vec::new();
        write_to(&dict, &mut buf).unwrap();
        assert!(buf.starts_with(SNAPSHOT_MAGIC));

        let restored = read_from(buf.as_slice()).unwrap();
        assert_eq!(restored, dict);
    }

    #[test]
    fn test_foreign_file_is_rejected() {
        let err = read_from(&b"not a snapshot at all, just text"[..]).unwrap_err();
        assert!(matches!(err, AccentError::Snapshot(_)));

        let err = read_from(&b"short"[..]).unwrap_err();
        assert!(err.to_string().contains("missing header"));
    }
}
