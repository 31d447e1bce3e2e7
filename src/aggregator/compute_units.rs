//! Group compute unit readings by the instruction that produced them.
//!
//! The scan keeps a single piece of state: the most recently declared
//! instruction name. Each consumption line is credited to it.

use crate::parser::log_line::parse_line;
use crate::parser::schema::AggregationResult;
use crate::utils::error::AggregateError;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Scan a log file and group its compute unit readings by instruction
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `path` - Log file written by the validator
///
/// # Returns
/// Readings grouped by instruction name, in file order
///
/// # Errors
/// * `AggregateError::FileAccess` - File cannot be opened
/// * `AggregateError::Read` - I/O or UTF-8 error partway through
///
/// # Example
/// ```ignore
/// let result = aggregate(".anchor/program-logs/Fg6P.defios.log")?;
/// println!("{:?}", result.consumed("CreateUser"));
/// ```
pub fn aggregate(path: impl AsRef<Path>) -> Result<AggregationResult, AggregateError> {
    let path = path.as_ref();

    debug!("Scanning log file: {}", path.display());

    let file = File::open(path).map_err(|source| AggregateError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let result = aggregate_reader(BufReader::new(file)).map_err(|source| AggregateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "{}: {} readings across {} instructions",
        path.display(),
        result.total_readings(),
        result.len()
    );

    Ok(result)
}

/// Scan any line source
///
/// **Public** - lets callers aggregate piped or in-memory logs
pub fn aggregate_reader<R: BufRead>(reader: R) -> io::Result<AggregationResult> {
    let mut scanner = LineScanner::default();

    for line in reader.lines() {
        scanner.feed(&line?);
    }

    Ok(scanner.finish())
}

/// Scan log text already in memory
pub fn aggregate_str(contents: &str) -> AggregationResult {
    let mut scanner = LineScanner::default();

    for line in contents.lines() {
        scanner.feed(line);
    }

    scanner.finish()
}

/// Scan state shared by every entry point
///
/// **Private** - the declaration on a line is applied before its reading,
/// so a line carrying both credits the newly declared instruction
#[derive(Default)]
struct LineScanner {
    result: AggregationResult,
    current: String,
}

impl LineScanner {
    fn feed(&mut self, line: &str) {
        let matched = parse_line(line);
        if matched.is_empty() {
            return;
        }

        if let Some(name) = matched.instruction {
            self.current.clear();
            self.current.push_str(name);
        }

        if let Some(reading) = matched.reading {
            self.result.record(&self.current, reading);
        }
    }

    fn finish(self) -> AggregationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
Program 11111111111111111111111111111111 invoke [1]
Program log: Instruction: InitializeUser
Program Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS consumed 12045 of 200000 compute units
Program Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS success
Program log: Instruction: CreateRepository
Program Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS consumed 40123 of 200000 compute units
Program log: Instruction: InitializeUser
Program Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS consumed 11980 of 200000 compute units
";

    #[test]
    fn test_reader_and_str_agree() {
        let from_reader = aggregate_reader(Cursor::new(SAMPLE)).unwrap();
        let from_str = aggregate_str(SAMPLE);
        assert_eq!(from_reader, from_str);
    }

    #[test]
    fn test_returning_name_appends_to_existing_group() {
        let result = aggregate_str(SAMPLE);

        assert_eq!(result.len(), 2);
        assert_eq!(result.consumed("InitializeUser"), Some(vec![12045, 11980]));
        assert_eq!(result.consumed("CreateRepository"), Some(vec![40123]));
        assert_eq!(
            result.instructions().collect::<Vec<_>>(),
            vec!["InitializeUser", "CreateRepository"]
        );
    }

    #[test]
    fn test_declaration_and_reading_on_one_line() {
        let text = "Program log: Instruction: A\n\
                    Program abc consumed 5 of 200000 compute units\n\
                    Program log: Instruction: B Program abc consumed 9 of 200000 compute units\n";

        let result = aggregate_reader(Cursor::new(text)).unwrap();

        assert_eq!(result.consumed("A"), Some(vec![5]));
        assert_eq!(result.consumed("B"), Some(vec![9]));
    }

    #[test]
    fn test_crlf_lines() {
        let text = "Program log: Instruction: Foo\r\nProgram abc consumed 5 of 200000 compute units\r\n";
        assert_eq!(aggregate_str(text).consumed("Foo"), Some(vec![5]));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let bytes: &[u8] = b"Program log: Instruction: Foo\n\xff\xfe\n";
        assert!(aggregate_reader(Cursor::new(bytes)).is_err());
    }
}
