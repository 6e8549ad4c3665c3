//! Password strength scoring and password generation.
//!
//! This library scores passwords on a 0-10 heuristic rubric with a
//! per-criterion breakdown, and generates random passwords that satisfy a
//! character-class policy.
//!
//! The score is a heuristic. It does not model dictionary attacks and must
//! not be presented as a security certification.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Extra denylist file read by [`Denylist::from_env`].
//!   When unset, only the built-in denylist is used.
//!
//! # Example
//!
//! ```rust
//! use pwd_kit::{GeneratorOptions, GeneratorPolicy, StrengthLabel, evaluate, evaluate_secret, generate};
//!
//! let result = evaluate("Tr0ub4dor&3");
//! assert_eq!(result.label, StrengthLabel::Good);
//! assert!(result.criteria.has_special_char);
//!
//! let policy = GeneratorPolicy::new(GeneratorOptions::default()).expect("valid policy");
//! let password = generate(&policy);
//! println!("Strength: {}", evaluate_secret(&password).label);
//! ```

// Internal modules
mod charset;
mod denylist;
mod evaluator;
mod generator;
mod policy;
mod sections;
mod types;

// Public API
pub use charset::{AMBIGUOUS_SYMBOLS, CharClass, SIMILAR_GLYPHS};
pub use denylist::{DENYLIST_PATH_ENV, Denylist, DenylistError, denylist_path};
pub use evaluator::{evaluate, evaluate_secret, evaluate_with};
pub use generator::{generate, generate_with_rng};
pub use policy::{GeneratorOptions, GeneratorPolicy, PolicyError};
pub use types::{Criteria, StrengthLabel, StrengthResult};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_tx};
