use std::io::{BufRead, Write};

use regex::Regex;

use super::{MatchError, MatchSpec};

/// Streams an input line by line, evaluating every matcher against every
/// line. Matching lines bump the matcher's count and, for matchers of a
/// printing kind, are written to the sink tagged with the matcher index.
pub struct Matcher<R, W> {
    matches: Vec<MatchState>,
    reader: R,
    writer: W,
}

struct MatchState {
    spec: MatchSpec,
    re: Option<Regex>,
    count: u64,
}

impl MatchState {
    fn new(spec: MatchSpec) -> Self {
        MatchState {
            spec,
            re: None,
            count: 0,
        }
    }

    // Patterns compile on first use, so a bad pattern surfaces as an
    // evaluation failure mid-run rather than before the scan starts.
    fn is_match(&mut self, line: &str) -> Result<bool, MatchError> {
        if self.re.is_none() {
            let re = Regex::new(&self.spec.pattern).map_err(|err| MatchError::MatchEvaluation {
                pattern: self.spec.pattern.clone(),
                source: err,
            })?;
            self.re = Some(re);
        }

        Ok(self.re.as_ref().is_some_and(|re| re.is_match(line)))
    }
}

impl<R: BufRead, W: Write> Matcher<R, W> {
    pub fn new(specs: Vec<MatchSpec>, reader: R, writer: W) -> Matcher<R, W> {
        Matcher {
            matches: specs.into_iter().map(MatchState::new).collect(),
            reader,
            writer,
        }
    }

    /// Scans the input to exhaustion, counting each matcher's matching
    /// lines (one per line, however often the pattern occurs within it)
    /// and printing `<i> line` for printing matchers as lines go by.
    /// The first read, evaluation or write failure aborts the whole run.
    pub fn scan_and_count(&mut self) -> Result<(), MatchError> {
        let Matcher {
            matches,
            reader,
            writer,
        } = self;

        for line in reader.lines() {
            let line = line.map_err(MatchError::InputUnavailable)?;

            for (i, m) in matches.iter_mut().enumerate() {
                if m.is_match(&line)? {
                    m.count += 1;

                    if m.spec.kind.prints() {
                        writeln!(writer, "<{}> {}", i, line)
                            .map_err(MatchError::OutputUnavailable)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Writes the final count of every counting matcher, in spec order.
    /// Print-only matchers are left out. Counters are only read here, so
    /// calling this again after a completed scan repeats the same report.
    pub fn report_counts(&mut self) -> Result<(), MatchError> {
        let Matcher {
            matches, writer, ..
        } = self;

        for (i, m) in matches.iter().enumerate() {
            if m.spec.kind.counts() {
                writeln!(
                    writer,
                    "Match {:?} <{}> got {} matches",
                    m.spec.pattern, i, m.count
                )
                .map_err(MatchError::OutputUnavailable)?;
            }
        }

        Ok(())
    }
}
