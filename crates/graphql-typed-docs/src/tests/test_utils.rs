use std::path::Path;
use std::path::PathBuf;

/// Write `content` to `dir/relative_path`, creating parent directories.
pub(super) fn write_file(dir: &Path, relative_path: &str, content: &str) -> PathBuf {
    let path = dir.join(relative_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
