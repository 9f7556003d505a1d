use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;
use crate::model::Config;
use crate::parser::parse_line;
use crate::value::Value;

/// Load a config file into an immutable typed mapping.
///
/// The file is scanned lazily, one line at a time, through a buffered
/// reader; the handle is released when the call returns, on success and
/// on error alike. Any failure — open, read, malformed line,
/// unrecognized value — fails the whole call and no partial mapping is
/// returned.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, Error> {
    let mut entries = HashMap::new();
    load_into(path.as_ref(), &mut entries)?;
    Ok(Config::new(entries))
}

/// Load several config files into one mapping, in order.
///
/// Keys in later files override keys from earlier ones. An error in any
/// file fails the whole call. An empty path list yields an empty mapping.
pub fn load_paths<I, P>(paths: I) -> Result<Config, Error>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut entries = HashMap::new();
    for path in paths {
        load_into(path.as_ref(), &mut entries)?;
    }
    Ok(Config::new(entries))
}

fn load_into(path: &Path, entries: &mut HashMap<String, Value>) -> Result<(), Error> {
    let file = File::open(path).map_err(Error::Open)?;
    let reader = BufReader::new(file);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(Error::Read)?;
        let Some(entry) = parse_line(&line, idx as u32 + 1)? else {
            continue;
        };
        entries.insert(entry.key, entry.value);
    }

    Ok(())
}
