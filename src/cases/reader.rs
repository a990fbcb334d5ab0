use std::io::BufRead;
use anyhow::{Result, anyhow, Context};
use log::debug;

use super::TestCase;

// Upper bound on up-front allocation for a test case, since K comes from
// untrusted input.
const MAX_PREALLOC: usize = 1024;

// Reads the test-case header and then yields test cases one at a time.
//
// Count lines (the header and each entry count) must be UTF-8 and are parsed
// after trimming, and blank lines before them are skipped. City lines are
// taken verbatim apart from the line terminator, so a blank line inside a
// test case is an entry too. Invalid UTF-8 in a city line is replaced, not
// rejected. Nothing is read past the last entry of the last declared case.
pub struct CaseReader<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    declared: usize,
    yielded: usize,
    done: bool,
}

impl<R: BufRead> CaseReader<R> {
    pub fn new(reader: R) -> Result<Self> {
        let mut case_reader = CaseReader {
            reader,
            buf: Vec::new(),
            line_no: 0,
            declared: 0,
            yielded: 0,
            done: false,
        };
        case_reader.declared = case_reader.read_count("test case count")?;
        debug!("Input declares {} test case(s)", case_reader.declared);
        Ok(case_reader)
    }

    pub fn declared(&self) -> usize {
        self.declared
    }

    // Reads the next line into `buf` without its `\n` or `\r\n` terminator.
    // Returns false at end of input.
    fn next_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let read = self.reader
            .read_until(b'\n', &mut self.buf)
            .with_context(|| format!("Failed to read line {}", self.line_no + 1))?;
        if read == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(true)
    }

    fn read_count(&mut self, what: &str) -> Result<usize> {
        loop {
            if !self.next_line()? {
                return Err(anyhow!("Unexpected end of input: expected {}", what));
            }
            let line = std::str::from_utf8(&self.buf).with_context(|| {
                format!("Expected {} on line {}, found invalid UTF-8", what, self.line_no)
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return trimmed.parse::<usize>().with_context(|| {
                format!("Expected {} on line {}, found {:?}", what, self.line_no, trimmed)
            });
        }
    }

    fn read_case(&mut self) -> Result<TestCase> {
        let index = self.yielded + 1;
        let count = self.read_count(&format!("entry count for test case {}", index))?;

        let mut entries = Vec::with_capacity(count.min(MAX_PREALLOC));
        while entries.len() < count {
            if !self.next_line()? {
                return Err(anyhow!(
                    "Unexpected end of input: test case {} declared {} entries but only {} were present",
                    index,
                    count,
                    entries.len()
                ));
            }
            entries.push(String::from_utf8_lossy(&self.buf).into_owned());
        }

        Ok(TestCase { index, entries })
    }
}

impl<R: BufRead> Iterator for CaseReader<R> {
    type Item = Result<TestCase>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.yielded == self.declared {
            return None;
        }

        let case = self.read_case();
        match case {
            Ok(_) => self.yielded += 1,
            // Input position is unknown after a failure, stop here
            Err(_) => self.done = true,
        }
        Some(case)
    }
}
