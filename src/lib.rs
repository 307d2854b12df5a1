//! Multi-scheme release version parsing and comparison
//!
//! This crate is the piece of a release pipeline that decides "is this
//! release newer than that one". A tag string is parsed under a named
//! scheme into an immutable value with a total order; malformed tags fail
//! outright, and every scheme provides a synthetic lowest value to stand
//! in when no prior tag exists.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────────────────────┐
//! │   Scheme    │────▶│           schemes             │
//! │ (dispatch)  │     │ dotted / chronver / calver /  │
//! └─────────────┘     │           custom              │
//!        │            └───────────────────────────────┘
//!        ▼                            │
//! ┌─────────────┐              ┌─────────────┐
//! │ TagVersion  │◀─────────────│   compare   │
//! │  (value)    │              │  (helpers)  │
//! └─────────────┘              └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`scheme`]: the closed scheme set and parse/default/compare dispatch
//! - [`schemes`]: one grammar per scheme
//! - [`compare`]: relational helpers over the ordering contract
//! - [`error`]: the single error type
//!
//! # Example
//!
//! ```
//! use tagver::Scheme;
//!
//! let scheme = Scheme::new("CALVER", Some("YYYY.MINOR.MICRO[.MODIFIER]"))?;
//! let older = scheme.parse("2022.1.1.beta2")?;
//! let newer = scheme.parse("2022.1.1")?;
//! assert_eq!(older.compare(&newer)?, std::cmp::Ordering::Less);
//! # Ok::<(), tagver::VersionError>(())
//! ```

pub mod compare;
pub mod error;
pub mod scheme;
pub mod schemes;

pub use error::VersionError;
pub use scheme::{Scheme, TagVersion};
pub use schemes::calver::{CalverFormat, CalverVersion};
pub use schemes::chronver::ChronVersion;
pub use schemes::custom::CustomVersion;
pub use schemes::dotted::{JavaModuleVersion, JavaRuntimeVersion, SemanticVersion};
