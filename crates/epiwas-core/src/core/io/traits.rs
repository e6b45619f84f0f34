use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Interface for formats that parse an in-memory table from a text source.
///
/// Implementors validate eagerly: a malformed source is rejected as a whole and never yields a
/// partially populated table.
pub trait ReadTable {
    /// The in-memory table produced by the format.
    type Table;

    /// The error type for parsing and I/O failures.
    type Error: Error + From<io::Error>;

    /// Reads a table from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is malformed or the reader fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Table, Self::Error>;

    /// Reads a table from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Table, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

/// Interface for formats that serialize an in-memory table.
pub trait WriteTable {
    /// The in-memory table consumed by the format.
    type Table: ?Sized;

    /// The error type for serialization and I/O failures.
    type Error: Error + From<io::Error>;

    /// Writes a table to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(table: &Self::Table, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes a table to a file path, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(table: &Self::Table, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(table, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
