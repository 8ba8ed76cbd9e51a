//! tinyrc4: instrumented RC4 stream cipher engine.
//!
//! A from-first-principles implementation of the textbook RC4 algorithm
//! that records every internal state transition for educational
//! inspection. RC4 is cryptographically broken; this crate exists to
//! make the algorithm observable, not to protect data.
//!
//! # Architecture
//!
//! ```text
//! Rc4            (engine — permutation table + keystream + trace logs)
//!   KSA          (key schedule: 256 key-driven swaps of the table)
//!   PRGA         (keystream generation: one table walk per input byte)
//!   transform    (XOR of data against the held keystream)
//! KsaStep / PrgaStep / TraceStep
//!                (typed per-iteration records consumed by a display layer)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use tinyrc4::Rc4;
//!
//! let plaintext = b"Plaintext";
//!
//! let mut encoder = Rc4::new(b"Key").unwrap();
//! encoder.keystream(plaintext);
//! let ciphertext = encoder.transform(plaintext).unwrap();
//! assert_ne!(&ciphertext[..], plaintext);
//!
//! let mut decoder = Rc4::new(b"Key").unwrap();
//! decoder.keystream(&ciphertext);
//! let recovered = decoder.transform(&ciphertext).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```
//!
//! Inspect the key schedule step by step:
//!
//! ```
//! use tinyrc4::Rc4;
//!
//! let engine = Rc4::new(b"Key").unwrap();
//! let trace = engine.ksa_trace();
//! assert_eq!(trace.len(), 257);
//! assert_eq!(trace[0].label(), "Initial S-box");
//! assert_eq!(trace[1].label(), "KSA iteration 0");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod trace;

mod rc4;
pub mod utils;

pub use error::Rc4Error;
pub use rc4::{apply, Rc4};
pub use trace::{KsaStep, PrgaStep, TraceLevel, TraceStep};
