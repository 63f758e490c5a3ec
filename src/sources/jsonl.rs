/*! JSON Lines record source.

Reads one raw record per line, from a plain or gzipped (multi-member) file.
Blank lines are skipped.

I/O errors are upstream failures and must abort processing,
whereas a line that is not valid UTF-8 only invalidates that record ([Error::MalformedRecord]).
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Split};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::error::Error;

#[derive(Debug)]
pub struct JsonLines<R>
where
    R: Read,
{
    lines: Split<BufReader<R>>,
    line_number: usize,
}

impl<R: Read> JsonLines<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).split(b'\n'),
            line_number: 0,
        }
    }

    /// number of lines read so far, blank lines included.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl JsonLines<Box<dyn Read + Send>> {
    /// Opens a file, decompressing it on the fly if it ends with `.gz`.
    pub fn from_path(src: &Path) -> Result<Self, Error> {
        let file = File::open(src)?;
        let reader: Box<dyn Read + Send> = match src.extension().and_then(|e| e.to_str()) {
            Some("gz") => {
                debug!("reading gzipped records from {:?}", src);
                Box::new(MultiGzDecoder::new(file))
            }
            _ => {
                debug!("reading records from {:?}", src);
                Box::new(file)
            }
        };
        Ok(Self::from_reader(reader))
    }
}

impl<R: Read> Iterator for JsonLines<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut bytes = match self.lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            self.line_number += 1;

            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            if bytes.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            return Some(String::from_utf8(bytes).map_err(|e| {
                Error::MalformedRecord(format!("line {}: {e}", self.line_number))
            }));
        }
    }
}
