//! Structural hashing over an explicit, ordered field list.
//!
//! Each type that participates declares exactly which fields feed the hash
//! and in what order, instead of relying on any kind of introspection.
//! Composite element types hash their own fields first, then the embedded
//! [`StyledElement`], so two composites differing only in their wrapper
//! fields still hash apart.
//!
//! [`StyledElement`]: crate::StyledElement

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Deterministic hash over a declared field list.
///
/// The provided [`structural_hash`](Structural::structural_hash) drives an
/// `FxHasher`, which is seed-free: equal field values give equal hashes
/// across runs and processes, which `std`'s randomly seeded default hasher
/// does not guarantee.
///
/// # Example
///
/// ```rust
/// use std::hash::{Hash, Hasher};
/// use underplot::{Structural, StyledElement};
///
/// struct AxisTitle {
///     text: String,
///     style: StyledElement,
/// }
///
/// impl Structural for AxisTitle {
///     fn hash_fields<H: Hasher>(&self, state: &mut H) {
///         self.text.hash(state);
///         self.style.hash_fields(state);
///     }
/// }
/// ```
pub trait Structural {
    /// Feeds every hashed field, in declared order, into `state`.
    fn hash_fields<H: Hasher>(&self, state: &mut H);

    /// The combined hash of the current field values.
    fn structural_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash_fields(&mut hasher);
        hasher.finish()
    }
}

/// Hashes a float by bit pattern, so the helper is total (NaN included).
pub fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    value.to_bits().hash(state);
}

/// Hashes an optional float, keeping `None` distinct from any value.
pub fn hash_opt_f64<H: Hasher>(value: Option<f64>, state: &mut H) {
    match value {
        Some(v) => {
            1u8.hash(state);
            hash_f64(v, state);
        }
        None => 0u8.hash(state),
    }
}

/// Hashes an opaque JSON tag through its canonical string form.
///
/// `serde_json::Value` implements no `Hash` of its own; the compact
/// serialization is stable for a given value, which is all the structural
/// hash needs.
pub fn hash_tag<H: Hasher>(tag: Option<&serde_json::Value>, state: &mut H) {
    match tag {
        Some(value) => {
            1u8.hash(state);
            value.to_string().hash(state);
        }
        None => 0u8.hash(state),
    }
}
