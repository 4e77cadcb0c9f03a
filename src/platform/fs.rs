// Platform-specific filesystem queries

use std::io;
use std::path::Path;

/// Block counts for the filesystem containing a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsUsage {
    pub block_size: u64,
    pub blocks: u64,
    pub blocks_free: u64,
}

impl FsUsage {
    pub fn total_bytes(&self) -> u64 {
        self.blocks.saturating_mul(self.block_size)
    }

    pub fn free_bytes(&self) -> u64 {
        self.blocks_free.saturating_mul(self.block_size)
    }
}

#[cfg(unix)]
pub fn statvfs(path: &Path) -> io::Result<FsUsage> {
    use std::ffi::CString;
    use std::mem::MaybeUninit;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut stat = MaybeUninit::<libc::statvfs>::zeroed();

    // SAFETY: c_path is NUL-terminated and stat points to writable storage of
    // the right size; statvfs fully initializes it on success.
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    let stat = unsafe { stat.assume_init() };

    #[allow(clippy::unnecessary_cast)]
    let usage = FsUsage {
        block_size: stat.f_frsize as u64,
        blocks: stat.f_blocks as u64,
        blocks_free: stat.f_bfree as u64,
    };

    Ok(usage)
}

#[cfg(not(unix))]
pub fn statvfs(path: &Path) -> io::Result<FsUsage> {
    let _ = path;
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "statvfs is not available on this platform",
    ))
}
