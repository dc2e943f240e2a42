// SPDX: CC0-1.0

use anyhow::Context;
use core::fmt;
use std::io::{self, stdin, BufRead, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    SetExpr,
    SetVector,
    SetSize,
    Render,
}

impl Command {
    pub const fn exhaustive() -> &'static [Command] {
        &[
            Self::Help,
            Self::Quit,
            Self::SetExpr,
            Self::SetVector,
            Self::SetSize,
            Self::Render,
        ]
    }

    pub const fn help(&self) -> &'static str {
        match self {
            Self::Help => "display help for each command",
            Self::Quit => "quit the shell",
            Self::SetExpr => "set the function of x to graph",
            Self::SetVector => "set the vector to draw ('dx,dy' or 'dx,dy;x0,y0')",
            Self::SetSize => "set the viewport size in pixels",
            Self::Render => "render the graph to an svg file",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Quit => "quit",
            Self::SetExpr => "fn",
            Self::SetVector => "vector",
            Self::SetSize => "size",
            Self::Render => "render",
        }
    }
}

impl core::str::FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for c in Self::exhaustive() {
            if s == c.name() {
                return Ok(*c);
            }
        }
        Err(())
    }
}

/// Finds the command with the most similar name, if any of them is at all
/// close to what was typed.
pub fn similar_command(input: &str) -> Option<Command> {
    let most_similar = Command::exhaustive()
        .iter()
        .map(|c| {
            (
                strsim::normalized_damerau_levenshtein(
                    &input.to_ascii_lowercase(),
                    c.name(),
                ),
                *c,
            )
        })
        .reduce(|acc, elem| if elem.0 > acc.0 { elem } else { acc });
    most_similar.and_then(|(sim, cmd)| (sim > 0.3).then_some(cmd))
}

pub fn input<W: Write>(out: W, prompt: impl fmt::Display) -> anyhow::Result<String> {
    fn inner<W: Write>(mut out: W, prompt: impl fmt::Display) -> io::Result<String> {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut stdin = stdin().lock();
        let mut s = String::new();
        stdin.read_line(&mut s)?;
        Ok(s.trim().to_string())
    }

    let s = inner(out, prompt).context("read from standard input failed")?;
    Ok(s)
}

pub fn read_fromstr<W: Write, T: core::str::FromStr>(
    mut out: W,
    prompt: impl fmt::Display,
    ignore_empty: bool,
) -> anyhow::Result<Result<Option<T>, <T as core::str::FromStr>::Err>>
where
    <T as core::str::FromStr>::Err: fmt::Display,
{
    let input = input(&mut out, prompt)?;
    if ignore_empty && input.is_empty() {
        return Ok(Ok(None));
    }
    match input.parse::<T>() {
        Ok(new) => Ok(Ok(Some(new))),
        Err(err) => {
            writeln!(out)?;
            underline(&mut out, &input, 0, input.len())?;
            writeln!(out, "parse error: {err}")?;
            Ok(Err(err))
        }
    }
}

/// Echoes `src` with `^` markers under the `[start, start + len)` span.
pub fn underline<W: Write>(mut out: W, src: &str, start: usize, len: usize) -> io::Result<()> {
    writeln!(out, "{src}")?;
    writeln!(out, "{}{}", " ".repeat(start), "^".repeat(len.max(1)))?;
    Ok(())
}
