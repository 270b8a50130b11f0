//! Line-oriented instance files: a header line of two integers, followed by
//! one whitespace-separated pair of numbers per record.
use std::{fmt::Display, fs, io, path::Path, str::FromStr};

use log::debug;
use thiserror::Error;

use crate::{graph::NodeId, instance::Item};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },
    #[error("header declares {declared} records but only {found} lines follow")]
    Truncated { declared: usize, found: usize },
    #[error("io error")]
    IO(#[from] io::Error),
}

type Result<T> = std::result::Result<T, ParseError>;

/// The two integers of line 0: `N K` for knapsack, `nbnodes nbedges` for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header(pub i64, pub i64);

#[derive(Debug, Clone)]
pub struct KnapsackInstance {
    pub capacity: i64,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone)]
pub struct ColoringInstance {
    pub nbnodes: usize,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl ColoringInstance {
    pub fn nbedges(&self) -> usize {
        self.edges.len()
    }
}

pub fn parse_header(input: &str) -> Result<Header> {
    let line = input.lines().next().ok_or_else(|| ParseError::Format {
        line: 0,
        reason: "missing header".to_string(),
    })?;
    let (a, b) = parse_pair(0, line)?;
    Ok(Header(a, b))
}

/// Parses `N K` followed by `N` lines of `value weight`.
pub fn parse_knapsack(input: &str) -> Result<KnapsackInstance> {
    let Header(n, capacity) = parse_header(input)?;
    let n = declared_count(n, "item count")?;
    let items = parse_records::<f64>(input, n)?
        .into_iter()
        .enumerate()
        .map(|(ix, (value, weight))| {
            require_finite(ix + 1, value)?;
            require_finite(ix + 1, weight)?;
            Ok(Item::new(value, weight))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!("parsed knapsack: {} items, capacity {}", items.len(), capacity);
    Ok(KnapsackInstance { capacity, items })
}

/// Parses `nbnodes nbedges` followed by `nbedges` lines of `id1 id2`.
pub fn parse_coloring(input: &str) -> Result<ColoringInstance> {
    let Header(nbnodes, nbedges) = parse_header(input)?;
    let nbnodes = declared_count(nbnodes, "node count")?;
    let nbedges = declared_count(nbedges, "edge count")?;
    let edges = parse_records::<i64>(input, nbedges)?
        .into_iter()
        .map(|(a, b)| (NodeId(a), NodeId(b)))
        .collect::<Vec<_>>();
    debug!("parsed coloring: nbnodes={}; nbedges={}", nbnodes, edges.len());
    Ok(ColoringInstance { nbnodes, edges })
}

pub fn read_knapsack<P: AsRef<Path>>(path: P) -> Result<KnapsackInstance> {
    let input = fs::read_to_string(path)?;
    parse_knapsack(&input)
}

pub fn read_coloring<P: AsRef<Path>>(path: P) -> Result<ColoringInstance> {
    let input = fs::read_to_string(path)?;
    parse_coloring(&input)
}

fn declared_count(value: i64, what: &str) -> Result<usize> {
    usize::try_from(value).map_err(|_| ParseError::Format {
        line: 0,
        reason: format!("{} must be non-negative, got {}", what, value),
    })
}

// `f64::from_str` accepts "inf" and "NaN"
fn require_finite(ix: usize, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParseError::Format {
            line: ix,
            reason: format!("expected a finite number, got {}", value),
        })
    }
}

/// Reads the `count` lines following the header. Lines after them are ignored.
/// `count` is not trusted for pre-allocation until the lines are seen.
fn parse_records<T>(input: &str, count: usize) -> Result<Vec<(T, T)>>
where
    T: FromStr,
    T::Err: Display,
{
    let mut records = Vec::new();
    for (ix, line) in input.lines().enumerate().skip(1).take(count) {
        records.push(parse_pair(ix, line)?);
    }
    if records.len() < count {
        return Err(ParseError::Truncated {
            declared: count,
            found: records.len(),
        });
    }
    Ok(records)
}

/// Parses the first two tokens of a line; any further tokens are ignored.
fn parse_pair<T>(ix: usize, line: &str) -> Result<(T, T)>
where
    T: FromStr,
    T::Err: Display,
{
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(a), Some(b)) => Ok((parse_token(ix, a)?, parse_token(ix, b)?)),
        _ => Err(ParseError::Format {
            line: ix,
            reason: format!("expected two tokens, got {:?}", line),
        }),
    }
}

fn parse_token<T>(ix: usize, token: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse::<T>().map_err(|err| ParseError::Format {
        line: ix,
        reason: format!("invalid number {:?}: {}", token, err),
    })
}
