//! Per-scheme version grammars
//!
//! Each scheme owns its grammar, its validation rules and its total
//! ordering; none of them call into each other:
//!
//! - [`dotted`]: the `major[.minor[.patch]][-tag][+build]` family
//!   (semver, java_module, java_runtime)
//! - [`chronver`]: fixed `YYYY.MM.DD[.changeset]` with calendar validation
//! - [`calver`]: format-string-driven calendar versions
//! - [`custom`]: raw tags ordered by a user regex or lexicographically

pub mod calver;
pub mod chronver;
pub mod custom;
pub mod dotted;
