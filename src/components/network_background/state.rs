use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::field::{layout_grid, spawn_nodes};
use super::graph::connect_nearby;
use super::particles::{advance_particles, seed_particles};
use super::physics::integrate;
use super::sparks::advance_sparks;
use super::types::{Node, Particle, Spark};

/// Everything the simulation mutates. Only touched from inside a frame or a
/// resize, never both at once.
pub struct NetworkState {
	pub nodes: Vec<Node>,
	pub particles: Vec<Particle>,
	pub sparks: Vec<Spark>,
	pub width: f64,
	pub height: f64,
	/// Timestamp of the last tick in milliseconds.
	pub time: f64,
	pub frame: u64,
	rng: SmallRng,
}

impl NetworkState {
	pub fn new(node_count: usize, width: f64, height: f64, seed: u64) -> Self {
		let (width, height) = (surface_extent(width), surface_extent(height));
		let mut rng = SmallRng::seed_from_u64(seed);
		let nodes = spawn_nodes(node_count, width, height, &mut rng);

		let mut state = Self {
			nodes,
			particles: Vec::new(),
			sparks: Vec::new(),
			width,
			height,
			time: 0.0,
			frame: 0,
			rng,
		};
		state.rebuild_graph();
		state
	}

	/// Re-lays the grid for the new surface and rebuilds the graph.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = surface_extent(width);
		self.height = surface_extent(height);
		layout_grid(&mut self.nodes, self.width, self.height, &mut self.rng);
		self.rebuild_graph();
	}

	fn rebuild_graph(&mut self) {
		connect_nearby(&mut self.nodes, self.width);
		self.particles = seed_particles(&self.nodes, &mut self.rng);
		debug!(
			"network graph rebuilt: {} nodes, {} edges on {}x{}",
			self.nodes.len(),
			self.particles.len(),
			self.width,
			self.height
		);
	}

	/// One simulation step at host time `now` (ms).
	pub fn tick(&mut self, now: f64) {
		self.time = now;
		self.frame += 1;
		integrate(&mut self.nodes, self.width, self.height, &mut self.rng);
		// Age existing sparks before emitting so newborn ones show at full life.
		advance_sparks(&mut self.sparks);
		advance_particles(
			&mut self.particles,
			&self.nodes,
			&mut self.sparks,
			&mut self.rng,
		);
	}

	pub fn edge_count(&self) -> usize {
		self.nodes.iter().map(|n| n.connections.len()).sum()
	}
}

fn surface_extent(value: f64) -> f64 {
	if value.is_finite() { value.max(0.0) } else { 0.0 }
}
