//! Hands a finished document to the file system.

use std::io::Write;
use std::path::{Path, PathBuf};

use realty_core::{RenderError, ReportDocument};
use tempfile::NamedTempFile;
use tracing::info;

/// Writes `document` into `dir` under its own file name.
///
/// The bytes go to a temporary file in the same directory, which is renamed
/// into place only after a successful flush. If any step fails the temporary
/// file is removed when it is dropped, so a reader never sees a partial
/// report.
///
/// # Errors
///
/// [`RenderError::Export`] naming the path that could not be written.
pub fn write_report(
    document: &ReportDocument,
    dir: &Path,
) -> Result<PathBuf, RenderError> {
    let target = dir.join(&document.file_name);
    let export_err = |source: std::io::Error| RenderError::Export {
        path: target.clone(),
        source,
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(export_err)?;
    temp.write_all(&document.bytes).map_err(export_err)?;
    temp.as_file().sync_all().map_err(export_err)?;
    temp.persist(&target).map_err(|err| export_err(err.error))?;

    info!(path = %target.display(), bytes = document.bytes.len(), "Exported report");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use realty_core::MIME_TYPE_PDF;

    use super::*;

    fn document() -> ReportDocument {
        ReportDocument {
            file_name: "summary.pdf".to_string(),
            mime_type: MIME_TYPE_PDF,
            bytes: b"%PDF-1.3 test".to_vec(),
        }
    }

    #[test]
    fn write_report_places_file_under_its_name() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_report(&document(), dir.path()).unwrap();

        assert_eq!(path, dir.path().join("summary.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.3 test");
    }

    #[test]
    fn write_report_leaves_only_the_final_file() {
        let dir = tempfile::tempdir().unwrap();

        write_report(&document(), dir.path()).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("summary.pdf")]);
    }

    #[test]
    fn write_report_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("summary.pdf"), b"stale").unwrap();

        write_report(&document(), dir.path()).unwrap();

        assert_eq!(
            std::fs::read(dir.path().join("summary.pdf")).unwrap(),
            b"%PDF-1.3 test"
        );
    }

    #[test]
    fn write_report_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = write_report(&document(), &missing);

        assert!(matches!(result, Err(RenderError::Export { .. })));
        assert!(!missing.exists());
    }
}
