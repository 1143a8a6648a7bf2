// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules and
// the randomness capability used to fill matrices.

pub mod random;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod matrix;
    pub mod spiral;
    pub mod traits;
}
