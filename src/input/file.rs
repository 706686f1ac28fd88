use std::fs;
use std::io;
use std::path::Path;

use super::LoadError;

/// Reads a UTF-8 text file for preloading into the editor.
///
/// An empty file is not an error: it simply yields an empty session.
pub fn load_text_file(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    String::from_utf8(bytes).map_err(|_| LoadError::InvalidEncoding(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("glimpse_{}_{name}", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_valid_file_loads() {
        let path = scratch_file("valid.txt", "hello 世界".as_bytes());
        let result = load_text_file(&path);
        assert_eq!(result.unwrap(), "hello 世界");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_empty_file_loads_as_empty_text() {
        let path = scratch_file("empty.txt", b"");
        assert_eq!(load_text_file(&path).unwrap(), "");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = load_text_file(Path::new("nonexistent_file_12345.txt"));
        match result {
            Err(LoadError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("nonexistent_file_12345.txt"))
            }
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_error() {
        let path = scratch_file("binary.txt", &[0xff, 0xfe, 0x00, 0x41]);
        match load_text_file(&path) {
            Err(LoadError::InvalidEncoding(_)) => (),
            other => panic!("Expected InvalidEncoding, got {other:?}"),
        }
        fs::remove_file(path).unwrap();
    }
}
