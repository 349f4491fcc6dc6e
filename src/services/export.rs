use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ExportError;
use crate::model::app::AppEntry;

pub const CSV_HEADER: [&str; 2] = ["AppId", "Name"];

pub fn write_csv<'a, I>(path: &Path, apps: I) -> Result<(), ExportError>
where
    I: IntoIterator<Item = &'a AppEntry>,
{
    write_atomic(path, |file| {
        let mut w = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        w.write_record(CSV_HEADER).map_err(|e| csv_err(path, e))?;
        for app in apps {
            w.serialize(app).map_err(|e| csv_err(path, e))?;
        }
        w.flush().map_err(|e| io_err(path, e))?;

        Ok(())
    })
}

pub fn write_json(path: &Path, json: &Value) -> Result<(), ExportError> {
    write_atomic(path, |file| {
        let mut w = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut w, json).map_err(|e| ExportError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        w.write_all(b"\n").map_err(|e| io_err(path, e))?;
        w.flush().map_err(|e| io_err(path, e))?;

        Ok(())
    })
}

/// Writes through a sibling temp file and renames it over `path`.
///
/// The temp file is removed when `write` fails, leaving `path` untouched.
fn write_atomic<F>(path: &Path, write: F) -> Result<(), ExportError>
where
    F: FnOnce(&mut File) -> Result<(), ExportError>,
{
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_err(path, e))?;
    }

    let result = File::create(&tmp)
        .map_err(|e| io_err(path, e))
        .and_then(|mut file| {
            write(&mut file)?;
            file.sync_all().map_err(|e| io_err(path, e))
        })
        .and_then(|()| fs::rename(&tmp, path).map_err(|e| io_err(path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }

    result
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "export".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}

fn io_err(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_err(path: &Path, source: csv::Error) -> ExportError {
    ExportError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
