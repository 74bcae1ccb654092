use super::matcher::LineMatcher;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// The validated filtering configuration, threaded through the engine as a
/// plain parameter. Count filters bound which lines are eligible at all;
/// content filters then narrow within that slice.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub first: Option<usize>,
    pub last: Option<usize>,
    pub timestamps: bool,
    pub ipv4: bool,
    pub ipv6: bool,
}

/// Runs the line filter over `input`, writing selected lines to `out` in
/// their original order, newline-terminated.
///
/// Count selection:
/// - `first` alone streams and stops reading after `first` lines.
/// - `last` alone keeps a ring buffer of the final `last` lines.
/// - both together emit the head slice followed by the tail-ring lines whose
///   ordinal falls past the head, so an overlapping line is emitted once.
pub fn filter_lines<R: BufRead, W: Write>(
    opts: &FilterOptions,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let matcher = LineMatcher::from_options(opts);
    let mut lines = Lines::new(input);

    match (opts.first, opts.last) {
        (None, None) => {
            while let Some(line) = lines.next_line()? {
                emit(&matcher, line, out)?;
            }
        }
        (Some(first), None) => {
            let mut seen = 0usize;
            while seen < first {
                let Some(line) = lines.next_line()? else {
                    break;
                };
                seen += 1;
                emit(&matcher, line, out)?;
            }
        }
        (None, Some(last)) => {
            let mut tail: VecDeque<Vec<u8>> = VecDeque::with_capacity(last);
            while let Some(line) = lines.next_line()? {
                if tail.len() == last {
                    tail.pop_front();
                }
                tail.push_back(line.to_vec());
            }
            for line in &tail {
                emit(&matcher, line, out)?;
            }
        }
        (Some(first), Some(last)) => {
            let mut head: Vec<Vec<u8>> = Vec::new();
            let mut tail: VecDeque<(usize, Vec<u8>)> = VecDeque::with_capacity(last);
            let mut ordinal = 0usize;

            while let Some(line) = lines.next_line()? {
                ordinal += 1;
                if ordinal <= first {
                    head.push(line.to_vec());
                }
                if tail.len() == last {
                    tail.pop_front();
                }
                tail.push_back((ordinal, line.to_vec()));
            }

            for line in &head {
                emit(&matcher, line, out)?;
            }
            for (ordinal, line) in &tail {
                if *ordinal > first {
                    emit(&matcher, line, out)?;
                }
            }
        }
    }

    Ok(())
}

fn emit<W: Write>(matcher: &Option<LineMatcher>, line: &[u8], out: &mut W) -> io::Result<()> {
    match matcher {
        Some(matcher) => {
            if let Some(rendered) = matcher.render(line) {
                out.write_all(&rendered)?;
                out.write_all(b"\n")?;
            }
        }
        None => {
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Lending reader over newline-delimited byte lines. The terminator (and a
/// preceding carriage return) is stripped; line content is otherwise opaque,
/// so malformed UTF-8 survives a pass-through untouched.
struct Lines<R> {
    input: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Lines<R> {
    fn new(input: R) -> Self {
        Lines {
            input,
            buf: Vec::new(),
        }
    }

    fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        let read = self.input.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }
        Ok(Some(&self.buf))
    }
}
