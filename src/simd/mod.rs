//! SIMD-accelerated boundary distance.
//!
//! The pole search spends nearly all of its time in the distance oracle, which
//! scans every polygon edge for every cell. [`PackedPolygon`] stores the edges
//! as structure-of-arrays lanes so four edges are measured per instruction.
//!
//! Enable with the `simd` feature flag:
//! ```toml
//! inaccessum = { version = "0.1", features = ["simd"] }
//! ```

mod packed;

pub use packed::{polylabel_packed, PackedPolygon};
