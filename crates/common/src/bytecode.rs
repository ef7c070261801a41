use std::path::Path;

use tracing::{debug, error};

use crate::{constants::BYTECODE_REGEX, utils::{io::file::read_file, strings::decode_hex}, Error};

/// Given a target, determines whether it is a bytecode file path or raw hex bytecode, and returns
/// the decoded bytecode.
///
/// ```
/// use wordvm_common::bytecode::get_bytecode_from_target;
///
/// assert_eq!(get_bytecode_from_target("0x602a").unwrap(), vec![0x60, 0x2a]);
/// ```
pub fn get_bytecode_from_target(target: &str) -> Result<Vec<u8>, Error> {
    if Path::new(target).is_file() {
        return load_bytecode_file(target);
    }

    if BYTECODE_REGEX.is_match(target).unwrap_or(false) {
        debug!("treating target as raw bytecode");
        return Ok(decode_hex(target)?);
    }

    error!("'{}' is neither a file nor valid bytecode.", target);
    Err(Error::ParseError(format!("'{target}' is neither a file nor valid bytecode.")))
}

/// Reads a text file of hex digit pairs and decodes it into bytecode.
///
/// Whitespace and a leading `0x` are ignored.
pub fn load_bytecode_file(path: &str) -> Result<Vec<u8>, Error> {
    let contents = read_file(path).map_err(|e| {
        error!("failed to open file '{}' .", path);
        Error::Generic(format!("failed to open file '{path}': {e}"))
    })?;

    let contents: String = contents.split_whitespace().collect();
    if !BYTECODE_REGEX.is_match(&contents).unwrap_or(false) ||
        contents.trim_start_matches("0x").len() % 2 != 0
    {
        error!("file '{}' doesn't contain valid bytecode.", path);
        return Err(Error::ParseError(format!("file '{path}' doesn't contain valid bytecode.")));
    }

    debug!("loaded {} bytes of bytecode from '{}'", contents.len() / 2, path);
    Ok(decode_hex(&contents)?)
}
