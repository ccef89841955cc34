mod parser;

use crate::analytics::domain::VendorRecord;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VendorImportError {
    #[error("failed to read vendor export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vendor CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads vendor records from a CSV export with one row per vendor.
pub struct VendorCsvImporter;

impl VendorCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<VendorRecord>, VendorImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<VendorRecord>, VendorImportError> {
        Ok(parser::parse_vendors(reader)?)
    }
}
