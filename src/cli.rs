use crate::matcher::{MatchError, MatchKind, MatchSpec, Matcher};
use anyhow::{anyhow, Result};
use clap::Parser;
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

#[derive(Parser)]
#[command(name = "pgrep")]
#[command(version = "0.1.0")]
#[command(
    about = "pgrep is a line-oriented search cli tool that matches several regex patterns at once against a file or stdin, printing and counting matching lines per pattern.",
    long_about = None
)]
#[command(after_help = "example: pgrep -p 'foo' -c '^\\s*$' -pc ';$' bar.txt

    print all lines containing foo
    count all empty lines
    print and count all lines ending with ;")]
pub struct Cli {
    /// Alternating <flag> <pattern> pairs (-p print, -c count, -pc both),
    /// optionally followed by a file to search instead of stdin.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true, required = true)]
    args: Vec<String>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.execute(&mut io::stdout().lock())
    }

    fn execute<W: Write>(&self, writer: &mut W) -> Result<()> {
        let (specs, file) = self.matchers()?;

        match file {
            Some(path) => {
                let file = File::open(&path).map_err(MatchError::InputUnavailable)?;
                scan(specs, BufReader::new(file), writer)
            }
            None => scan(specs, io::stdin().lock(), writer),
        }
    }

    /// Translates the raw arguments into matcher specs and an optional
    /// file path. An odd argument count means the last argument is the
    /// file to search; an even count means input comes from stdin.
    fn matchers(&self) -> Result<(Vec<MatchSpec>, Option<String>)> {
        if self.args.len() < 2 {
            return Err(anyhow!("too few arguments: need at least one flag and pattern"));
        }

        let (pairs, file) = if self.args.len() % 2 == 1 {
            (&self.args[..self.args.len() - 1], self.args.last().cloned())
        } else {
            (self.args.as_slice(), None)
        };

        let specs = pairs
            .iter()
            .tuples()
            .map(|(flag, pattern)| {
                MatchKind::from_flag(flag).map(|kind| MatchSpec::new(kind, pattern.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((specs, file))
    }
}

fn scan<R: BufRead, W: Write>(specs: Vec<MatchSpec>, reader: R, writer: &mut W) -> Result<()> {
    let mut matcher = Matcher::new(specs, reader, writer);
    matcher.scan_and_count()?;
    matcher.report_counts()?;
    Ok(())
}
