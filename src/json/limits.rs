//! DoS protection limits for JSON parsing.
//!
//! Every parse runs under a [`Limits`] value. Two presets cover the common
//! cases; individual fields can be overridden in code or loaded from a JSON
//! file, where missing fields fall back to [`Limits::lenient`].
//!
//! | Limit | Error |
//! |-------|-------|
//! | `max_input_size` | `InputTooLarge` |
//! | `max_nesting_depth` (at most [`MAX_SUPPORTED_DEPTH`]) | `DepthExceeded` |
//! | `max_string_length` | `StringTooLong` |
//! | `max_object_fields` | `TooManyFields` |
//! | `max_array_length` | `ArrayTooLong` |
//! | `ascii_only` | `Lexical(NonAscii)` |

use serde::Deserialize;

/// Largest integer an `f64` represents exactly (2^53 - 1).
pub const MAX_SAFE_INT: i64 = (1i64 << 53) - 1;

/// Smallest integer an `f64` represents exactly (-(2^53 - 1)).
pub const MIN_SAFE_INT: i64 = -MAX_SAFE_INT;

/// Deepest nesting the recursive parser supports, whatever the configured
/// `max_nesting_depth`. Keeps deep documents from overflowing the stack.
pub const MAX_SUPPORTED_DEPTH: u64 = 512;

/// Resource limits applied while lexing and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Maximum total input size in bytes
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects, capped at
    /// [`MAX_SUPPORTED_DEPTH`]
    pub max_nesting_depth: u64,
    /// Maximum decoded string length in bytes
    pub max_string_length: u64,
    /// Maximum number of fields in an object (duplicates included)
    pub max_object_fields: u64,
    /// Maximum number of elements in an array
    pub max_array_length: u64,
    /// Whether to reject non-ASCII characters in strings
    pub ascii_only: bool,
}

impl Limits {
    /// Tight limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024,  // 1 MiB
            max_nesting_depth: 32,        // 32 levels
            max_string_length: 64 * 1024, // 64 KiB
            max_object_fields: 1024,      // 1024 fields
            max_array_length: 10_000,     // 10,000 elements
            ascii_only: true,
        }
    }

    /// Generous limits for general-purpose parsing.
    pub const fn lenient() -> Self {
        Self {
            max_input_size: 16 * 1024 * 1024, // 16 MiB
            max_nesting_depth: 128,           // 128 levels
            max_string_length: 1024 * 1024,   // 1 MiB
            max_object_fields: 10_000,        // 10,000 fields
            max_array_length: 100_000,        // 100,000 elements
            ascii_only: false,
        }
    }

    /// Load limits from a JSON object; absent fields keep their lenient value.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Nesting depth the parser actually enforces.
    pub fn effective_depth(&self) -> u64 {
        self.max_nesting_depth.min(MAX_SUPPORTED_DEPTH)
    }

    /// Check if an integer is exactly representable as an `f64`.
    pub fn is_safe_integer(value: i64) -> bool {
        (MIN_SAFE_INT..=MAX_SAFE_INT).contains(&value)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::lenient()
    }
}
