//! Issue id generation.
//!
//! An id is the SHA-256 hex digest of `random | user | timestamp`. Nothing
//! checks for existing ids; uniqueness rests on the digest and its inputs.
//! The clock and the random source are traits so tests can pin both.

use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of a generated id (hex-encoded SHA-256).
pub const ID_LENGTH: usize = 64;

/// Upper bound (exclusive) for the random component: 48 bits.
const RANDOM_BOUND: u64 = 1 << 48;

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of the random component mixed into each id.
pub trait EntropySource {
    fn next_u48(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl EntropySource for ThreadRngSource {
    fn next_u48(&self) -> u64 {
        rand::rng().random_range(0..RANDOM_BOUND)
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// An entropy source that always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub u64);

impl EntropySource for FixedEntropy {
    fn next_u48(&self) -> u64 {
        self.0 % RANDOM_BOUND
    }
}

/// Produces new issue ids and creation timestamps.
pub struct IdGenerator {
    clock: Box<dyn Clock>,
    entropy: Box<dyn EntropySource>,
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}

impl IdGenerator {
    #[must_use]
    pub fn new(clock: impl Clock + 'static, entropy: impl EntropySource + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            entropy: Box::new(entropy),
        }
    }

    /// Generator backed by the wall clock and the thread RNG.
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemClock, ThreadRngSource)
    }

    /// Fully deterministic generator for tests.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>, random: u64) -> Self {
        Self::new(FixedClock(at), FixedEntropy(random))
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Generate an id for `user` at the clock's current time.
    #[must_use]
    pub fn new_id(&self, user: &str) -> String {
        self.new_id_at(user, self.clock.now())
    }

    /// Generate an id for `user` at a given instant.
    #[must_use]
    pub fn new_id_at(&self, user: &str, at: DateTime<Utc>) -> String {
        let seed = generate_id_seed(self.entropy.next_u48(), user, at);
        compute_id_hash(&seed)
    }
}

/// Build the hash input: `random | user | timestamp (ns)`.
#[must_use]
pub fn generate_id_seed(random: u64, user: &str, at: DateTime<Utc>) -> String {
    format!(
        "{}|{}|{}",
        random,
        user,
        at.timestamp_nanos_opt().unwrap_or(0)
    )
}

/// SHA-256 of the seed as lowercase hex.
#[must_use]
pub fn compute_id_hash(seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Whether `s` could be an issue id (or a prefix of one).
///
/// Ids are lowercase hex. Anything else, notably path separators and `..`,
/// never names a record.
#[must_use]
pub fn is_valid_id(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= ID_LENGTH
        && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
