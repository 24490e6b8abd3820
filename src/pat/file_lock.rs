use std::fs::File;
use std::io::{self, Write};

use fs2::FileExt;

/// A file held under an exclusive advisory lock until dropped
pub struct ExclusiveLock {
    file: File,
}

impl ExclusiveLock {
    pub fn new(file: File) -> io::Result<Self> {
        file.lock_exclusive()?;
        Ok(ExclusiveLock { file })
    }
}

impl Drop for ExclusiveLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            warn!("failed to unlock output file: {}", e);
        }
    }
}

impl Write for ExclusiveLock {
    #[inline(always)]
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.file.write(data)
    }

    #[inline(always)]
    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
