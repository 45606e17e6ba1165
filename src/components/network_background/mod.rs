//! Animated node network drawn on a canvas: nodes drift on a jittered grid,
//! nearby nodes are linked, particles travel the links and burst into sparks
//! on arrival.

mod component;
mod engine;
mod field;
mod graph;
mod particles;
mod physics;
mod render;
mod scheduler;
mod sparks;
mod state;
mod types;

pub use component::NetworkBackground;
