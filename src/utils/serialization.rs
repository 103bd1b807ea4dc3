use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use bincode::Options;

use crate::boggle::Result;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_no_limit()
}

pub fn serialize_bytes<T: Serialize>(data: &T) -> Result<Vec<u8>> {
    Ok(options().serialize(data)?)
}

pub fn deserialize_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    Ok(options().deserialize(bytes)?)
}

pub fn save_to_disk<T: Serialize, TPath: AsRef<Path>>(data: &T, path: TPath) -> Result<()> {
    // Write all bytes to the target file
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    options().serialize_into(&mut writer, data)?;
    writer.flush()?;
    Ok(())
}

pub fn load_from_disk<T: DeserializeOwned, TPath: AsRef<Path>>(path: TPath) -> Result<T> {
    // Open the file and read all bytes
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(options().deserialize_from(reader)?)
}
