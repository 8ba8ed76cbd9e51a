//! RC4 cipher engine with instrumented state tracing.
//!
//! Implements the textbook RC4 algorithm: the key scheduling algorithm
//! (KSA) scrambles a 256-entry permutation table from the key, the
//! pseudo-random generation algorithm (PRGA) walks that table to emit
//! keystream bytes, and the transform XORs data against the keystream.
//! Every KSA and PRGA iteration is recorded as a typed trace step for
//! inspection by a presentation layer.

use crate::error::Rc4Error;
use crate::trace::{KsaStep, PrgaStep, TraceLevel, TraceStep};
use crate::utils::converter;

/// Number of entries in the permutation table.
const TABLE_SIZE: usize = 256;

/// RC4 cipher engine with step-by-step state tracing.
///
/// # Lifecycle
///
/// An engine moves through three states:
/// 1. **Constructed**: [`new`](Self::new) ran the KSA; the KSA trace
///    holds 257 entries and no keystream exists yet.
/// 2. **Keystream-ready**: [`keystream`](Self::keystream) ran the PRGA;
///    the keystream and PRGA trace match the last input length.
/// 3. **Transformed**: [`transform`](Self::transform) XORed data against
///    the keystream without touching the table or traces.
///
/// [`keystream`](Self::keystream) may be called repeatedly; each call
/// continues from the current table state and replaces the previous
/// keystream and PRGA trace. Each encrypt or decrypt session should use
/// its own engine instance.
///
/// # Examples
///
/// ```
/// use tinyrc4::Rc4;
///
/// let mut encoder = Rc4::new(b"Key").unwrap();
/// let plaintext = b"Plaintext";
/// encoder.keystream(plaintext);
/// let ciphertext = encoder.transform(plaintext).unwrap();
///
/// let mut decoder = Rc4::new(b"Key").unwrap();
/// decoder.keystream(&ciphertext);
/// let recovered = decoder.transform(&ciphertext).unwrap();
/// assert_eq!(recovered, plaintext);
/// ```
pub struct Rc4 {
    table: [u8; TABLE_SIZE],
    keystream: Vec<u8>,
    ksa_trace: Vec<KsaStep>,
    prga_trace: Vec<PrgaStep>,
    trace_level: TraceLevel,
}

impl Rc4 {
    /// Creates a new engine and runs the key scheduling algorithm.
    ///
    /// The permutation table starts as the identity sequence and is
    /// scrambled by 256 key-driven swaps. The KSA trace records the
    /// initial state plus one entry per iteration (257 total). Snapshot
    /// capture is off; use [`with_trace_level`](Self::with_trace_level)
    /// to enable it.
    ///
    /// # Parameters
    /// - `key`: Key bytes, read cyclically during scheduling (minimum 1 byte).
    ///
    /// # Errors
    /// Returns [`Rc4Error::InvalidKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyrc4::Rc4;
    ///
    /// let engine = Rc4::new(b"secret").unwrap();
    /// assert_eq!(engine.ksa_trace().len(), 257);
    /// ```
    ///
    /// ```
    /// use tinyrc4::Rc4;
    ///
    /// assert!(Rc4::new(b"").is_err());
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, Rc4Error> {
        Self::with_trace_level(key, TraceLevel::Steps)
    }

    /// Creates a new engine with the given trace capture level.
    ///
    /// At [`TraceLevel::Full`] every trace step additionally snapshots
    /// the whole permutation table, reproducing the complete state
    /// history at a cost of 256 bytes per step.
    ///
    /// # Parameters
    /// - `key`: Key bytes, read cyclically during scheduling (minimum 1 byte).
    /// - `level`: How much state each trace step captures.
    ///
    /// # Errors
    /// Returns [`Rc4Error::InvalidKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyrc4::{Rc4, TraceLevel};
    ///
    /// let engine = Rc4::with_trace_level(b"secret", TraceLevel::Full).unwrap();
    /// let initial = &engine.ksa_trace()[0];
    /// let identity: Vec<u8> = (0..=255).collect();
    /// assert_eq!(initial.snapshot(), Some(identity.as_slice()));
    /// ```
    pub fn with_trace_level(key: &[u8], level: TraceLevel) -> Result<Self, Rc4Error> {
        if key.is_empty() {
            return Err(Rc4Error::InvalidKey);
        }

        let mut table = [0u8; TABLE_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }

        let mut engine = Rc4 {
            table,
            keystream: Vec::new(),
            ksa_trace: Vec::with_capacity(TABLE_SIZE + 1),
            prga_trace: Vec::new(),
            trace_level: level,
        };
        engine.key_schedule(key);
        Ok(engine)
    }

    /// Key scheduling algorithm: scrambles the identity table with the key.
    ///
    /// Records the initial state, then for each `i` in 0..=255 advances
    /// `j = (j + table[i] + key[i mod key_len]) mod 256`, swaps
    /// `table[i]` and `table[j]`, and records the iteration.
    fn key_schedule(&mut self, key: &[u8]) {
        self.ksa_trace.push(KsaStep::initial(self.capture()));

        let mut j = 0u8;
        for i in 0..TABLE_SIZE {
            j = j
                .wrapping_add(self.table[i])
                .wrapping_add(key[i % key.len()]);
            self.table.swap(i, j as usize);
            self.ksa_trace
                .push(KsaStep::iteration(i as u8, j, self.capture()));
        }
    }

    /// Generates a keystream of the same length as `input`.
    ///
    /// Runs the PRGA once per input byte against the current permutation
    /// table, replacing the previously held keystream and PRGA trace.
    /// The table mutates cumulatively: calling this twice in a row
    /// produces two different keystreams because the second call
    /// continues from where the first left off. Empty input yields an
    /// empty keystream and an empty trace.
    ///
    /// # Parameters
    /// - `input`: The payload the keystream will be XORed against.
    ///   Only its length matters here.
    ///
    /// # Returns
    /// The generated keystream, one byte per input byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyrc4::Rc4;
    ///
    /// let mut engine = Rc4::new(b"Key").unwrap();
    /// let first = engine.keystream(b"Plaintext").to_vec();
    /// let second = engine.keystream(b"Plaintext").to_vec();
    /// assert_ne!(first, second);
    /// ```
    pub fn keystream(&mut self, input: &[u8]) -> &[u8] {
        self.keystream = Vec::with_capacity(input.len());
        self.prga_trace = Vec::with_capacity(input.len());

        let mut i = 0u8;
        let mut j = 0u8;
        for idx in 0..input.len() {
            i = i.wrapping_add(1);
            j = j.wrapping_add(self.table[i as usize]);
            self.table.swap(i as usize, j as usize);
            let t = self.table[i as usize].wrapping_add(self.table[j as usize]);
            let k = self.table[t as usize];
            self.keystream.push(k);
            self.prga_trace
                .push(PrgaStep::new(idx, i, j, t, k, self.capture()));
        }
        &self.keystream
    }

    /// XORs `data` against the held keystream, byte for byte.
    ///
    /// Encryption and decryption are the same operation. The engine
    /// state is not mutated; the call can be repeated any number of
    /// times against the current keystream. The caller must have derived
    /// a keystream of matching length first.
    ///
    /// # Parameters
    /// - `data`: The bytes to encrypt or decrypt.
    ///
    /// # Returns
    /// The XOR of `data` with the keystream.
    ///
    /// # Errors
    /// Returns [`Rc4Error::KeystreamLengthMismatch`] if `data.len()`
    /// differs from the held keystream length.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyrc4::{Rc4, Rc4Error};
    ///
    /// let mut engine = Rc4::new(b"Key").unwrap();
    /// engine.keystream(b"12345");
    /// assert!(matches!(
    ///     engine.transform(b"123456"),
    ///     Err(Rc4Error::KeystreamLengthMismatch { expected: 5, actual: 6 })
    /// ));
    /// ```
    pub fn transform(&self, data: &[u8]) -> Result<Vec<u8>, Rc4Error> {
        if data.len() != self.keystream.len() {
            return Err(Rc4Error::KeystreamLengthMismatch {
                expected: self.keystream.len(),
                actual: data.len(),
            });
        }
        Ok(data
            .iter()
            .zip(self.keystream.iter())
            .map(|(&byte, &key_byte)| byte ^ key_byte)
            .collect())
    }

    /// String-in, string-out variant of [`transform`](Self::transform).
    ///
    /// Encodes `data` through the byte-preserving single-byte mapping
    /// (one byte per code point U+0000..=U+00FF), XORs against the
    /// keystream, and decodes the result through the same mapping. The
    /// output may contain non-printable characters; feeding it back with
    /// the same keystream recovers the original string exactly.
    ///
    /// # Parameters
    /// - `data`: The text to encrypt or decrypt.
    ///
    /// # Errors
    /// - [`Rc4Error::EncodingError`] if `data` contains a character
    ///   above U+00FF.
    /// - [`Rc4Error::KeystreamLengthMismatch`] if the encoded length
    ///   differs from the held keystream length.
    pub fn transform_text(&self, data: &str) -> Result<String, Rc4Error> {
        let bytes = converter::text_to_bytes(data)?;
        let result = self.transform(&bytes)?;
        Ok(converter::bytes_to_text(&result))
    }

    /// Returns the most recently generated keystream.
    ///
    /// Empty until [`keystream`](Self::keystream) has been called.
    pub fn keystream_bytes(&self) -> &[u8] {
        &self.keystream
    }

    /// Returns the current permutation table.
    ///
    /// The table is always a permutation of 0..=255: the identity at
    /// construction, scrambled by the KSA, and advanced by each PRGA
    /// run.
    pub fn table(&self) -> &[u8; TABLE_SIZE] {
        &self.table
    }

    /// Returns the trace capture level the engine was built with.
    pub fn trace_level(&self) -> TraceLevel {
        self.trace_level
    }

    /// Returns the key scheduling trace: one initial-state entry plus
    /// 256 iteration entries.
    pub fn ksa_trace(&self) -> &[KsaStep] {
        &self.ksa_trace
    }

    /// Returns the keystream generation trace: one entry per byte of
    /// the last processed input.
    pub fn prga_trace(&self) -> &[PrgaStep] {
        &self.prga_trace
    }

    /// Returns both trace sequences, KSA first.
    ///
    /// Read-only: no engine state changes.
    pub fn trace(&self) -> (&[KsaStep], &[PrgaStep]) {
        (&self.ksa_trace, &self.prga_trace)
    }

    /// Iterates over all recorded steps as tagged records, KSA steps
    /// followed by PRGA steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinyrc4::Rc4;
    ///
    /// let mut engine = Rc4::new(b"Key").unwrap();
    /// engine.keystream(b"Plaintext");
    /// for step in engine.steps() {
    ///     println!("{}", step);
    /// }
    /// ```
    pub fn steps(&self) -> impl Iterator<Item = TraceStep> + '_ {
        self.ksa_trace
            .iter()
            .cloned()
            .map(TraceStep::Ksa)
            .chain(self.prga_trace.iter().cloned().map(TraceStep::Prga))
    }

    /// Snapshots the permutation table when the trace level asks for it.
    fn capture(&self) -> Option<Vec<u8>> {
        match self.trace_level {
            TraceLevel::Steps => None,
            TraceLevel::Full => Some(self.table.to_vec()),
        }
    }
}

impl Drop for Rc4 {
    /// Clears the permutation table and keystream on drop.
    fn drop(&mut self) {
        self.table = [0u8; TABLE_SIZE];
        for byte in self.keystream.iter_mut() {
            *byte = 0;
        }
    }
}

/// Encrypts or decrypts `data` with a fresh engine in one call.
///
/// Runs the full sequence a caller would otherwise perform by hand:
/// construct an engine from `key`, derive a keystream over `data`, and
/// XOR. Calling it twice with the same key is an exact roundtrip:
///
/// ```
/// use tinyrc4::apply;
///
/// let ciphertext = apply(b"Key", b"Plaintext").unwrap();
/// let recovered = apply(b"Key", &ciphertext).unwrap();
/// assert_eq!(recovered, b"Plaintext");
/// ```
///
/// # Errors
/// Returns [`Rc4Error::InvalidKey`] if `key` is empty.
pub fn apply(key: &[u8], data: &[u8]) -> Result<Vec<u8>, Rc4Error> {
    let mut engine = Rc4::new(key)?;
    engine.keystream(data);
    engine.transform(data)
}
