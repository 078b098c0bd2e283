//! Population log files.
//!
//! A log is written in one of three layouts: plain JSON (the
//! `{"prey": [...], "predators": [...], "grass": [...]}` object),
//! gzip-compressed JSON, or a CSV table with one row per step.

use crate::error::{IoError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use predprey_data::PopulationLog;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

const CSV_HEADER: &str = "step,prey,predators,grass";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryFormat {
    Json,
    JsonGz,
    Csv,
}

impl HistoryFormat {
    /// Picks a format from the file name: `.csv`, `.gz` (including
    /// `.json.gz`) or `.json`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Self::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("gz") => Ok(Self::JsonGz),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(IoError::validation(format!(
                "unrecognised log format for {} (expected .json, .json.gz or .csv)",
                path.display()
            ))),
        }
    }
}

fn ensure_consistent(log: &PopulationLog) -> Result<()> {
    if log.is_consistent() {
        Ok(())
    } else {
        Err(IoError::validation(format!(
            "series length mismatch: prey={} predators={} grass={}",
            log.prey.len(),
            log.predators.len(),
            log.grass.len()
        )))
    }
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    File::create(path)
        .map_err(|e| IoError::from(e).with_context(format!("creating {}", path.display())))
}

/// Writes `log` to `path` in `format`. Inconsistent logs are refused.
pub fn write_population_log<P: AsRef<Path>>(
    path: P,
    log: &PopulationLog,
    format: HistoryFormat,
) -> Result<()> {
    let path = path.as_ref();
    ensure_consistent(log)?;
    let file = create_file(path)?;

    match format {
        HistoryFormat::Json => {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, log)?;
            writer.flush()?;
        }
        HistoryFormat::JsonGz => {
            let mut encoder = GzEncoder::new(file, Compression::default());
            let json = serde_json::to_string(log)?;
            encoder.write_all(json.as_bytes())?;
            encoder.finish()?;
        }
        HistoryFormat::Csv => {
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{CSV_HEADER}")?;
            for row in log.iter() {
                writeln!(
                    writer,
                    "{},{},{},{}",
                    row.step, row.prey, row.predators, row.grass
                )?;
            }
            writer.flush()?;
        }
    }

    tracing::debug!(path = %path.display(), ?format, entries = log.len(), "Population log written");
    Ok(())
}

/// Reads a log written by [`write_population_log`]; the format is taken
/// from the file name.
pub fn read_population_log<P: AsRef<Path>>(path: P) -> Result<PopulationLog> {
    let path = path.as_ref();
    let format = HistoryFormat::from_path(path)?;
    let file = File::open(path)
        .map_err(|e| IoError::from(e).with_context(format!("opening {}", path.display())))?;

    let log = match format {
        HistoryFormat::Json => serde_json::from_reader(BufReader::new(file))?,
        HistoryFormat::JsonGz => {
            let mut decoder = GzDecoder::new(file);
            let mut decoded = Vec::new();
            decoder.read_to_end(&mut decoded)?;
            serde_json::from_slice(&decoded)?
        }
        HistoryFormat::Csv => parse_csv(BufReader::new(file))?,
    };

    ensure_consistent(&log)?;
    Ok(log)
}

fn parse_csv<R: BufRead>(reader: R) -> Result<PopulationLog> {
    let mut lines = reader.lines();
    let header = lines.next().transpose()?.unwrap_or_default();
    if header.trim() != CSV_HEADER {
        return Err(IoError::validation("missing CSV header"));
    }

    let mut log = PopulationLog::default();
    for (row, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let bad_row = || IoError::validation(format!("malformed CSV row {}: {line}", row + 1));
        if fields.len() != 4 {
            return Err(bad_row());
        }
        let step: usize = fields[0].parse().map_err(|_| bad_row())?;
        if step != log.len() {
            return Err(IoError::validation(format!(
                "CSV row {} has step {step}, expected {}",
                row + 1,
                log.len()
            )));
        }
        let prey = fields[1].parse().map_err(|_| bad_row())?;
        let predators = fields[2].parse().map_err(|_| bad_row())?;
        let grass = fields[3].parse().map_err(|_| bad_row())?;
        log.push(prey, predators, grass);
    }
    Ok(log)
}
