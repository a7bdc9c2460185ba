//! JSON parameter loader
//!
//! Parameter files may be partial: any field left out takes its value from
//! the generic preset.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::BusinessParams;
use crate::error::Result;

/// Load parameters from a JSON file and validate them
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<BusinessParams> {
    let path = path.as_ref();
    log::debug!("loading parameters from {}", path.display());
    let file = File::open(path)?;
    load_params_from_reader(BufReader::new(file))
}

/// Load parameters from any reader (string buffer, stdin, ...)
pub fn load_params_from_reader<R: Read>(reader: R) -> Result<BusinessParams> {
    let params: BusinessParams = serde_json::from_reader(reader)?;
    params.validate()?;
    Ok(params)
}
