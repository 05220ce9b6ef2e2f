use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::repository::traits::SalesSource;

pub const DEFAULT_FILE_NAME: &str = "satis_verileri.json";

#[derive(Clone, Debug)]
pub struct FileSalesSource {
    file_path: PathBuf,
}

impl FileSalesSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl Default for FileSalesSource {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl SalesSource for FileSalesSource {
    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        let io_err = |source: std::io::Error| LoadError::Io {
            path: self.file_path.clone(),
            source,
        };
        let file = File::open(&self.file_path).map_err(io_err)?;
        let mut reader = BufReader::new(file);
        let mut body = String::new();
        reader.read_to_string(&mut body).map_err(io_err)?;
        Ok(body)
    }
}
