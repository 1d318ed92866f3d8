use std::io;
use std::path::Path;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

/// Name, directory and size of a model's source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    /// Absolute directory containing the file.
    pub location: String,
    pub size_bytes: u64,
}

impl FileInfo {
    /// Reads the metadata of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file metadata cannot be read.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let absolute = std::path::absolute(path)?;
        let name = absolute
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let location = absolute
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Ok(Self {
            name,
            location,
            size_bytes: metadata.len(),
        })
    }

    /// Human-readable size, `"1.50 MB"` above one mebibyte, else
    /// `"12.00 KB"`.
    #[must_use]
    pub fn size_text(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let bytes = self.size_bytes as f64;
        if bytes > MIB {
            format!("{:.2} MB", bytes / MIB)
        } else {
            format!("{:.2} KB", bytes / KIB)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sized(size_bytes: u64) -> FileInfo {
        FileInfo {
            name: "part.step".into(),
            location: "/tmp".into(),
            size_bytes,
        }
    }

    #[test]
    fn size_units() {
        assert_eq!(sized(512).size_text(), "0.50 KB");
        assert_eq!(sized(1024 * 1024).size_text(), "1024.00 KB");
        assert_eq!(sized(3 * 1024 * 1024 / 2).size_text(), "1.50 MB");
    }

    #[test]
    fn reads_file_metadata() {
        let path = std::env::temp_dir().join("calipers_file_info_test.step");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let info = FileInfo::from_path(&path).unwrap();
        assert_eq!(info.name, "calipers_file_info_test.step");
        assert_eq!(info.size_text(), "2.00 KB");
        assert!(!info.location.is_empty());

        std::fs::remove_file(&path).unwrap();
        assert!(FileInfo::from_path(&path).is_err());
    }
}
