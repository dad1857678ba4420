//! Directory sizing and byte formatting

use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Total size of all regular files beneath `path`
///
/// Symlinked directories are not descended into, but a symlink to a file
/// counts as the size of its target. Entries that cannot be read, including
/// dangling links and files removed while the walk is in progress, count as
/// zero. A missing `path` yields 0.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| file_len(&entry))
        .sum()
}

fn file_len(entry: &DirEntry) -> u64 {
    let file_type = entry.file_type();
    if file_type.is_file() {
        entry.metadata().map(|m| m.len()).unwrap_or(0)
    } else if file_type.is_symlink() {
        fs::metadata(entry.path())
            .ok()
            .filter(|m| m.is_file())
            .map(|m| m.len())
            .unwrap_or(0)
    } else {
        0
    }
}

/// Format bytes as a human-readable string
///
/// Picks the largest binary unit that keeps the magnitude below 1024, falling
/// back to PB for anything larger, always with two decimals.
pub fn format_bytes(bytes: u64) -> String {
    let mut size = bytes as f64;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} PB", size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, len: usize) {
        fs::write(dir.join(name), vec![b'x'; len]).unwrap();
    }

    #[test]
    fn test_dir_size_sums_nested_files() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        write_file(temp.path(), "top.sql", 10);
        write_file(&temp.path().join("a"), "mid.sql", 20);
        write_file(&nested, "deep.sql.gz", 300);

        assert_eq!(dir_size(temp.path()), 330);
    }

    #[test]
    fn test_dir_size_is_stable_across_runs() {
        let temp = TempDir::new().unwrap();
        write_file(temp.path(), "dump.sql", 4096);

        let first = dir_size(temp.path());
        let second = dir_size(temp.path());
        assert_eq!(first, 4096);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dir_size_empty_and_missing() {
        let temp = TempDir::new().unwrap();
        assert_eq!(dir_size(temp.path()), 0);
        assert_eq!(dir_size(&temp.path().join("does-not-exist")), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_dir_size_symlinked_file_counts_target() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let env = temp.path().join("staging");
        fs::create_dir_all(&env).unwrap();
        write_file(temp.path(), "dump.sql", 4096);
        write_file(&env, "real.sql", 10);
        symlink(temp.path().join("dump.sql"), env.join("latest.sql")).unwrap();
        symlink(temp.path().join("gone.sql"), env.join("dangling.sql")).unwrap();

        assert_eq!(dir_size(&env), 4106);
    }

    #[cfg(unix)]
    #[test]
    fn test_dir_size_does_not_descend_symlinked_dirs() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let env = temp.path().join("staging");
        let shared = temp.path().join("shared");
        fs::create_dir_all(&env).unwrap();
        fs::create_dir_all(&shared).unwrap();
        write_file(&shared, "big.sql", 2048);
        write_file(&env, "own.sql", 5);
        symlink(&shared, env.join("shared")).unwrap();

        assert_eq!(dir_size(&env), 5);
    }

    #[test]
    fn test_format_bytes_small_values() {
        assert_eq!(format_bytes(0), "0.00 B");
        assert_eq!(format_bytes(512), "512.00 B");
        assert_eq!(format_bytes(1023), "1023.00 B");
    }

    #[test]
    fn test_format_bytes_unit_boundaries() {
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.00 GB");
        assert_eq!(format_bytes(1024_u64.pow(4)), "1.00 TB");
    }

    #[test]
    fn test_format_bytes_petabytes_are_not_capped() {
        assert_eq!(format_bytes(1024_u64.pow(5)), "1.00 PB");
        assert_eq!(format_bytes(2048 * 1024_u64.pow(5)), "2048.00 PB");
    }

    #[test]
    fn test_format_bytes_always_two_decimals() {
        for bytes in [1_u64, 999, 1025, 123_456_789, u64::MAX] {
            let formatted = format_bytes(bytes);
            let number = formatted.split(' ').next().unwrap();
            let decimals = number.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 2, "{formatted}");
        }
    }
}
