//! Core data model: points, registries, tiles, colours, hex geometry.

pub mod colour;
pub mod hex;
pub mod point;
pub mod registry;
pub mod tile;

pub use colour::Colour;
pub use hex::Hex;
pub use point::{Point, PointId};
pub use registry::{PointRegistry, RegistryBuilder};
pub use tile::{Board, Canvas, TileSpec};
