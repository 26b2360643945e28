use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Read, Seek},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::warn;
use zip::{ZipArchive, read::ZipFile};

mod config;
pub mod models;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Json(PathBuf),
    Csv(PathBuf),
    Zip(PathBuf),
    Records(Vec<DatasetCharger>),
}

/// The static, read-only source of charger records.
#[derive(Default)]
pub struct Dataset {
    config: Config,
    storage: StorageType,
}

impl Dataset {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Picks the storage from the file extension: `json`, `csv` or `zip`.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<Self, self::Error> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "json" => self.from_json(path),
            "csv" => self.from_csv(path),
            "zip" => self.from_zip(path),
            _ => Err(self::Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_json<P: AsRef<Path>>(mut self, path: P) -> Result<Self, self::Error> {
        self.storage = StorageType::Json(path.as_ref().canonicalize()?);
        Ok(self)
    }

    pub fn from_csv<P: AsRef<Path>>(mut self, path: P) -> Result<Self, self::Error> {
        self.storage = StorageType::Csv(path.as_ref().canonicalize()?);
        Ok(self)
    }

    pub fn from_zip<P: AsRef<Path>>(mut self, path: P) -> Result<Self, self::Error> {
        self.storage = StorageType::Zip(path.as_ref().canonicalize()?);
        Ok(self)
    }

    /// Uses records that are already in memory, e.g. a dataset compiled into the binary.
    pub fn from_records(mut self, records: Vec<DatasetCharger>) -> Self {
        self.storage = StorageType::Records(records);
        self
    }

    pub fn stream_chargers<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, DatasetCharger)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Json(path) => stream_json(File::open(path)?, f),
            StorageType::Csv(path) => {
                stream_csv(File::open(path)?, self.config.connector_separator, f)
            }
            StorageType::Zip(path) => self.stream_from_zip(path, f),
            StorageType::Records(records) => {
                records.iter().cloned().enumerate().for_each(f);
                Ok(())
            }
        }
    }

    fn stream_from_zip<F>(&self, zip_path: &PathBuf, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, DatasetCharger)),
    {
        let zip_file = File::open(zip_path)?;
        let mut archive = ZipArchive::new(zip_file)?;
        if archive.index_for_name(&self.config.json_file_name).is_some() {
            let file = get_file(&mut archive, &self.config.json_file_name)?;
            stream_json(file, f)
        } else {
            let file = get_file(&mut archive, &self.config.csv_file_name)?;
            stream_csv(file, self.config.connector_separator, f)
        }
    }
}

fn stream_json<R, F>(reader: R, f: F) -> Result<(), self::Error>
where
    R: Read,
    F: FnMut((usize, DatasetCharger)),
{
    let file: DatasetFile = parse_json(reader)?;
    file.chargers.into_iter().enumerate().for_each(f);
    Ok(())
}

fn parse_json<R, T>(reader: R) -> Result<T, self::Error>
where
    R: Read,
    T: DeserializeOwned,
{
    Ok(serde_json::from_reader(io::BufReader::new(reader))?)
}

fn stream_csv<R, F>(reader: R, separator: char, f: F) -> Result<(), self::Error>
where
    R: Read,
    F: FnMut((usize, DatasetCharger)),
{
    let mut reader = csv::Reader::from_reader(reader);
    reader
        .deserialize::<CsvCharger>()
        .enumerate()
        .filter_map(|(record, result)| match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Skipping charger on line {}: {err}", csv_line(record));
                None
            }
        })
        .map(|value| value.into_record(separator))
        .enumerate()
        .for_each(f);
    Ok(())
}

/// File line of a record, counting the header line and starting at 1.
fn csv_line(record: usize) -> usize {
    record + 2
}

fn get_file<'a, R: Read + Seek>(
    archive: &'a mut ZipArchive<R>,
    name: &'a str,
) -> Result<ZipFile<'a, R>, self::Error> {
    let index = archive
        .index_for_name(name)
        .ok_or(self::Error::FileNotFound(name.to_string()))?;
    let file = archive.by_index(index)?;
    Ok(file)
}

#[test]
fn unsupported_extension_test() {
    let result = Dataset::new().from_path("chargers.xml");
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
}

#[test]
fn empty_dataset_streams_nothing_test() {
    let mut count = 0;
    Dataset::new().stream_chargers(|_| count += 1).unwrap();
    assert_eq!(count, 0);
}

#[test]
fn csv_line_counts_header_test() {
    assert_eq!(csv_line(0), 2);
    assert_eq!(csv_line(2), 4);
}
