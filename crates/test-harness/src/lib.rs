//! Fixtures and oracles for the mesh ingestion tests.
//!
//! # Key Components
//!
//! - [`stl`]: Binary and ASCII STL writers for crafting decoder input
//! - [`helpers`]: Error type and canned geometry (triangle, quad, cube)
//! - [`oracle`]: Checks over serialized documents returning pass/fail verdicts
//! - [`assertions`]: `Result`-returning assertions with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod stl;

pub use helpers::HarnessError;
pub use oracle::{OracleVerdict, ParsedDocument};
