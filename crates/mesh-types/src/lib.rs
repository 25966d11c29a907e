//! Shared data model for the mesh ingestion pipeline.
//!
//! The decoder produces a [`Mesh`] of independent [`Triangle`]s; the builder
//! turns it into a [`WeldedMesh`] whose faces index shared vertices.

pub mod bounds;
pub mod mesh;
pub mod point;
pub mod triangle;
pub mod vector;

pub use bounds::Bounds;
pub use mesh::{Mesh, WeldedMesh, WeldedVertex};
pub use point::Point3;
pub use triangle::Triangle;
pub use vector::Vec3;
