//! Interactive shell: reads command lines, drives the list, reports timing.
//!
//! The shell owns the list instance and the RNG; the list knows nothing
//! about clocks or consoles. Each list-touching command is wrapped in
//! [`timed`] and its wall time printed alongside the result. Generic over
//! reader and writer so sessions can be scripted in tests.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use linkbench_list::LinkedList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bench;
use crate::command::{ABOUT, Command, HELP};

/// Times a single call, returning its result and elapsed wall time.
///
/// Timing lives here in the driver as a wrapper around core calls; it is
/// never interleaved into the data-structure methods.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Micros) {
    let start = Instant::now();
    let result = f();
    (result, Micros(start.elapsed()))
}

/// Elapsed time, displayed in microseconds.
pub struct Micros(pub Duration);

impl fmt::Display for Micros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}µs", self.0.as_secs_f64() * 1e6)
    }
}

/// The interactive command loop around one list instance.
pub struct Shell<W> {
    list: LinkedList<i64>,
    rng: StdRng,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Creates a shell around a fresh list.
    ///
    /// `seed` pins the RNG used by `random` and `bench`; without it the RNG
    /// is seeded from OS entropy.
    pub fn new(capacity: usize, seed: Option<u64>, out: W) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            list: LinkedList::with_capacity(capacity),
            rng,
            out,
        }
    }

    /// Prints the startup banner.
    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "{ABOUT}")
    }

    /// Runs the command loop until `exit` or end of input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<()> {
        let mut line = String::new();

        loop {
            write!(self.out, "\n> ")?;
            self.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match Command::parse(line) {
                Ok(command) => {
                    tracing::debug!(?command, "dispatching");
                    if !self.dispatch(command)? {
                        return Ok(());
                    }
                }
                Err(err) => writeln!(self.out, "{err}")?,
            }
        }
    }

    /// Applies one command; returns `false` when the shell should stop.
    fn dispatch(&mut self, command: Command) -> io::Result<bool> {
        match command {
            Command::Random { count } => {
                self.list.clear();
                let (_, took) = timed(|| {
                    for _ in 0..count {
                        let value = self.rng.random_range(0..100);
                        self.list.push_back(value);
                    }
                });
                writeln!(self.out, "filled with {count} random values ({took})")?;
            }
            Command::Fill { values } => {
                let count = values.len();
                let (_, took) = timed(|| self.list.extend(values));
                writeln!(self.out, "appended {count} values ({took})")?;
            }
            Command::Insert { pos, value } => {
                let (result, took) = timed(|| self.list.insert(pos, value));
                match result {
                    Ok(()) => {
                        writeln!(self.out, "inserted {value} at position {pos} ({took})")?;
                    }
                    Err(err) => writeln!(self.out, "insert failed: {err}")?,
                }
            }
            Command::Read { pos } => {
                let (value, took) = timed(|| self.list.get(pos).copied());
                match value {
                    Some(value) => {
                        writeln!(self.out, "value at position {pos}: {value} ({took})")?;
                    }
                    None => self.report_out_of_range("read", pos)?,
                }
            }
            Command::ReadAll => {
                if self.list.is_empty() {
                    writeln!(self.out, "list is empty")?;
                } else {
                    let (rendered, took) = timed(|| render(self.list.iter()));
                    writeln!(self.out, "(Head) {rendered} (Tail) ({took})")?;
                }
            }
            Command::ReadReverse => {
                if self.list.is_empty() {
                    writeln!(self.out, "list is empty")?;
                } else {
                    let (rendered, took) = timed(|| render(self.list.iter().rev()));
                    writeln!(self.out, "(Tail) {rendered} (Head) ({took})")?;
                }
            }
            Command::Find { value } => {
                let (pos, took) = timed(|| self.list.position_of(&value));
                match pos {
                    Some(pos) => {
                        writeln!(self.out, "value {value} found at position {pos} ({took})")?;
                    }
                    None => writeln!(self.out, "value {value} not found ({took})")?,
                }
            }
            Command::Update { pos, value } => {
                let (old, took) = timed(|| self.list.replace(pos, value));
                match old {
                    Some(old) => {
                        writeln!(self.out, "updated position {pos} ({old} -> {value}) ({took})")?;
                    }
                    None => self.report_out_of_range("update", pos)?,
                }
            }
            Command::Delete { pos } => {
                let (removed, took) = timed(|| self.list.remove_at(pos));
                match removed {
                    Some(value) => {
                        writeln!(self.out, "deleted {value} from position {pos} ({took})")?;
                    }
                    None => self.report_out_of_range("delete", pos)?,
                }
            }
            Command::FindDelete { value } => {
                let (removed, took) = timed(|| self.list.remove_value(&value));
                match removed {
                    Some(_) => {
                        writeln!(self.out, "deleted first occurrence of {value} ({took})")?;
                    }
                    None => writeln!(self.out, "value {value} not found ({took})")?,
                }
            }
            Command::Clear => {
                let (_, took) = timed(|| self.list.clear());
                writeln!(self.out, "cleared ({took})")?;
            }
            Command::Len => match (self.list.front(), self.list.back()) {
                (Some(head), Some(tail)) => {
                    writeln!(
                        self.out,
                        "length {}, head {head}, tail {tail}",
                        self.list.len()
                    )?;
                }
                _ => writeln!(self.out, "list is empty")?,
            },
            Command::Bench { ops } => bench::run(&mut self.rng, ops, &mut self.out)?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::About => writeln!(self.out, "{ABOUT}")?,
            Command::Exit => {
                writeln!(self.out, "bye")?;
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn report_out_of_range(&mut self, what: &str, pos: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{what} failed: position {pos} out of range for list of length {}",
            self.list.len()
        )
    }
}

fn render<'a, I>(values: I) -> String
where
    I: Iterator<Item = &'a i64>,
{
    values
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" <-> ")
}
