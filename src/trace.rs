//! Step-by-step trace records for the RC4 state machine.
//!
//! Every KSA and PRGA iteration appends one typed record to the engine's
//! trace log. A presentation layer renders these records directly; the
//! fields it needs are exposed through accessors rather than loosely
//! structured key/value data.
//!
//! Full permutation-table snapshots cost 256 bytes per step and are only
//! captured when the engine is built with [`TraceLevel::Full`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controls how much state each trace step captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraceLevel {
    /// Record iteration indices and keystream bytes only.
    #[default]
    Steps,
    /// Additionally snapshot the full 256-byte permutation table at
    /// every step.
    Full,
}

/// One recorded step of the key scheduling algorithm.
///
/// The first entry of a KSA trace is the initial identity table and
/// carries no indices; the remaining 256 entries record the `i` and `j`
/// values after each swap.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KsaStep {
    i: Option<u8>,
    j: Option<u8>,
    snapshot: Option<Vec<u8>>,
}

impl KsaStep {
    /// Creates the initial-state entry (identity table, no indices).
    pub(crate) fn initial(snapshot: Option<Vec<u8>>) -> Self {
        KsaStep {
            i: None,
            j: None,
            snapshot,
        }
    }

    /// Creates an iteration entry with the indices after the swap.
    pub(crate) fn iteration(i: u8, j: u8, snapshot: Option<Vec<u8>>) -> Self {
        KsaStep {
            i: Some(i),
            j: Some(j),
            snapshot,
        }
    }

    /// Returns the step label, matching the rendered log line prefix:
    /// `"Initial S-box"` for the first entry, `"KSA iteration {i}"`
    /// otherwise.
    pub fn label(&self) -> String {
        match self.i {
            None => String::from("Initial S-box"),
            Some(i) => format!("KSA iteration {}", i),
        }
    }

    /// Returns the table index `i`, or `None` for the initial entry.
    pub fn i(&self) -> Option<u8> {
        self.i
    }

    /// Returns the swap index `j`, or `None` for the initial entry.
    pub fn j(&self) -> Option<u8> {
        self.j
    }

    /// Returns the permutation-table snapshot taken after this step,
    /// or `None` unless the engine was built with [`TraceLevel::Full`].
    pub fn snapshot(&self) -> Option<&[u8]> {
        self.snapshot.as_deref()
    }
}

impl fmt::Display for KsaStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.i, self.j) {
            (Some(i), Some(j)) => write!(f, "KSA iteration {}: i={}, j={}", i, i, j),
            _ => write!(f, "Initial S-box:"),
        }
    }
}

/// One recorded step of the pseudo-random generation algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrgaStep {
    iteration: usize,
    i: u8,
    j: u8,
    t: u8,
    keystream_byte: u8,
    snapshot: Option<Vec<u8>>,
}

impl PrgaStep {
    pub(crate) fn new(
        iteration: usize,
        i: u8,
        j: u8,
        t: u8,
        keystream_byte: u8,
        snapshot: Option<Vec<u8>>,
    ) -> Self {
        PrgaStep {
            iteration,
            i,
            j,
            t,
            keystream_byte,
            snapshot,
        }
    }

    /// Returns the step label `"PRGA iteration {idx}"`.
    pub fn label(&self) -> String {
        format!("PRGA iteration {}", self.iteration)
    }

    /// Returns the zero-based iteration number (input byte position).
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns the table index `i` after the increment.
    pub fn i(&self) -> u8 {
        self.i
    }

    /// Returns the swap index `j` after the update.
    pub fn j(&self) -> u8 {
        self.j
    }

    /// Returns the output index `t = (table[i] + table[j]) mod 256`.
    pub fn t(&self) -> u8 {
        self.t
    }

    /// Returns the keystream byte emitted at this iteration.
    pub fn keystream_byte(&self) -> u8 {
        self.keystream_byte
    }

    /// Returns the permutation-table snapshot taken after this step,
    /// or `None` unless the engine was built with [`TraceLevel::Full`].
    pub fn snapshot(&self) -> Option<&[u8]> {
        self.snapshot.as_deref()
    }
}

impl fmt::Display for PrgaStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PRGA iteration {}: i={}, j={}, t={}, keystream byte={}",
            self.iteration, self.i, self.j, self.t, self.keystream_byte
        )
    }
}

/// A trace step from either algorithm phase.
///
/// Tagged union consumed by presentation layers that render the KSA and
/// PRGA logs as one sequence; see [`Rc4::steps`](crate::Rc4::steps).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraceStep {
    /// A key scheduling step.
    Ksa(KsaStep),
    /// A keystream generation step.
    Prga(PrgaStep),
}

impl TraceStep {
    /// Returns the step label of the wrapped record.
    pub fn label(&self) -> String {
        match self {
            TraceStep::Ksa(step) => step.label(),
            TraceStep::Prga(step) => step.label(),
        }
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStep::Ksa(step) => write!(f, "{}", step),
            TraceStep::Prga(step) => write!(f, "{}", step),
        }
    }
}
