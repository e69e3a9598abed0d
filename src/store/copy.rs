//! Metadata-preserving, all-or-nothing file copy

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

/// Copy `src` over `dest`, keeping permissions and timestamps.
///
/// Bytes are staged in a temporary file next to `dest` and renamed into
/// place, so `dest` is either untouched or fully replaced. The staging file
/// is removed on every error path.
pub(crate) fn copy_preserving(src: &Path, dest: &Path) -> io::Result<()> {
    let dir = dest.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "destination has no parent directory",
        )
    })?;

    let meta = fs::metadata(src)?;
    if !meta.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", src.display()),
        ));
    }

    let mut reader = File::open(src)?;
    let mut staged = tempfile::Builder::new()
        .prefix(".swapcache-")
        .suffix(".partial")
        .tempfile_in(dir)?;

    io::copy(&mut reader, staged.as_file_mut())?;
    staged.as_file().sync_all()?;

    let mut times = FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    staged.as_file().set_times(times)?;
    staged.as_file().set_permissions(meta.permissions())?;

    staged.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn staging_leftovers(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".partial"))
            .count()
    }

    #[test]
    fn copies_bytes_and_mtime() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src.bin");
        fs::write(&src, b"payload").unwrap();
        let past = SystemTime::now() - Duration::from_secs(3600);
        File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let dest = temp.path().join("dest");
        copy_preserving(&src, &dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), b"payload");
        let copied = fs::metadata(&dest).unwrap().modified().unwrap();
        let original = fs::metadata(&src).unwrap().modified().unwrap();
        assert_eq!(copied, original);
        assert_eq!(staging_leftovers(temp.path()), 0);
    }

    #[test]
    fn overwrites_existing_destination() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dest = temp.path().join("dest");
        fs::write(&src, b"new").unwrap();
        fs::write(&dest, b"old contents").unwrap();

        copy_preserving(&src, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), b"new");
    }

    #[test]
    fn missing_source_leaves_destination_alone() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("dest");
        fs::write(&dest, b"old").unwrap();

        let err = copy_preserving(&temp.path().join("absent"), &dest).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(fs::read(&dest).unwrap(), b"old");
        assert_eq!(staging_leftovers(temp.path()), 0);
    }

    #[test]
    fn directory_source_is_rejected() {
        let temp = TempDir::new().unwrap();
        let err = copy_preserving(temp.path(), &temp.path().join("dest")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!temp.path().join("dest").exists());
    }

    #[test]
    fn missing_destination_dir_fails() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::write(&src, b"x").unwrap();

        let dest = temp.path().join("nowhere").join("dest");
        assert!(copy_preserving(&src, &dest).is_err());
        assert!(!temp.path().join("nowhere").exists());
    }
}
