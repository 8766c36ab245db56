use std::io::Write;
use std::path::Path;
use wordgrid_core::{WordGridError, WordGridResult};

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → atomic-rename pattern for safety
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically
    /// The temp file lives next to the target so the rename stays on one filesystem
    pub fn write_atomic(path: &Path, data: &[u8]) -> WordGridResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file
            .persist(path)
            .map_err(|e| WordGridError::Io(e.error))?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read all data from a file
    pub fn read_all(path: &Path) -> WordGridResult<Vec<u8>> {
        let data = std::fs::read(path)?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
