//! Single-page read / transform / write cycle.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::error::FileError;
use crate::config::WriteConfig;
use crate::pipeline::{PageOutput, Pipeline};

/// Read `path`, run the pipeline, and write the result back.
///
/// The page is written even when nothing changed, unless `dry_run` is set.
pub fn process_file(
    path: &Path,
    pipeline: &Pipeline,
    write: &WriteConfig,
) -> Result<PageOutput, FileError> {
    let html = fs::read_to_string(path).map_err(|err| FileError::read(path, err))?;
    let output = pipeline.run(&html);

    if !write.dry_run {
        if write.atomic {
            write_atomic(path, &output.html)?;
        } else {
            write_in_place(path, &output.html)?;
        }
    }

    Ok(output)
}

/// Truncate and overwrite. A crash mid-write leaves a partial page.
fn write_in_place(path: &Path, contents: &str) -> Result<(), FileError> {
    fs::write(path, contents).map_err(|err| FileError::write(path, err))
}

/// Write a sibling temp file, then rename it over `path`.
///
/// The page keeps its permissions; readers see either the old or the new
/// content.
fn write_atomic(path: &Path, contents: &str) -> Result<(), FileError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let permissions = fs::metadata(path)
        .map_err(|err| FileError::write(path, err))?
        .permissions();

    let mut tmp = NamedTempFile::new_in(dir).map_err(|err| FileError::write(path, err))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|err| FileError::write(path, err))?;
    tmp.as_file()
        .sync_all()
        .map_err(|err| FileError::write(path, err))?;
    fs::set_permissions(tmp.path(), permissions).map_err(|err| FileError::write(path, err))?;

    tmp.persist(path).map_err(|err| FileError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeadGuard;
    use crate::pipeline::transform::HeadHints;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    const PAGE: &str = "<body><img src=\"hero.png\" alt=\"Hero\"></body>";

    fn config(atomic: bool, dry_run: bool) -> WriteConfig {
        WriteConfig { atomic, dry_run }
    }

    #[test]
    fn test_process_rewrites_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, PAGE).unwrap();

        let output = process_file(&path, &Pipeline::default(), &config(false, false)).unwrap();
        assert_eq!(output.converted, 1);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, output.html);
        assert!(written.contains(r#"<source srcset="hero.webp" type="image/webp">"#));
        assert!(written.contains(r#"<img src="hero.png" alt="Hero" loading="lazy">"#));
    }

    #[test]
    fn test_process_atomic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, PAGE).unwrap();

        let output = process_file(&path, &Pipeline::default(), &config(true, false)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), output.html);

        // no temp files left behind
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_process_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, PAGE).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        process_file(&path, &Pipeline::default(), &config(true, false)).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_process_dry_run_leaves_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, PAGE).unwrap();

        let output = process_file(&path, &Pipeline::default(), &config(false, true)).unwrap();
        assert!(output.is_modified());
        assert_eq!(fs::read_to_string(&path).unwrap(), PAGE);
    }

    #[test]
    fn test_process_unchanged_page_still_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plain.html");
        fs::write(&path, "<p>no images</p>").unwrap();

        let output = process_file(&path, &Pipeline::default(), &config(false, false)).unwrap();
        assert!(!output.is_modified());
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>no images</p>");
    }

    #[test]
    fn test_process_head_hints() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(
            &path,
            "<head>\n\t\t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n</head>",
        )
        .unwrap();

        let pipeline = Pipeline::new(HeadHints::new(HeadGuard::Missing));
        let output = process_file(&path, &pipeline, &config(false, false)).unwrap();
        assert!(output.head_hints);
        assert!(
            fs::read_to_string(&path)
                .unwrap()
                .contains(r#"<meta name="robots" content="index, follow">"#)
        );
    }

    #[test]
    fn test_process_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.html");

        let err = process_file(&path, &Pipeline::default(), &config(false, false)).unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.path(), path);
    }

    #[test]
    fn test_process_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.html");
        fs::write(&path, [0x3c, 0x70, 0x3e, 0xe9, 0xff]).unwrap();

        let err = process_file(&path, &Pipeline::default(), &config(false, false)).unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        // untouched on failure
        assert_eq!(fs::read(&path).unwrap(), vec![0x3c, 0x70, 0x3e, 0xe9, 0xff]);
    }
}
