use std::fs::File;
use std::io::BufReader;

use hack_arch::Tables;

use crate::error::Error;

/// Load translation tables from a YAML file. Sections left out of the file
/// keep their built-in Hack contents.
pub fn load_tables(path: &str) -> Result<Tables, Error> {
    let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    serde_yaml::from_reader(BufReader::new(file)).map_err(|e| Error::TableLoad(path.to_string(), e))
}

/// Tables from `path`, or the built-in Hack tables.
pub fn tables(path: Option<&str>) -> Result<Tables, Error> {
    match path {
        Some(path) => load_tables(path),
        None => Ok(Tables::hack()),
    }
}
