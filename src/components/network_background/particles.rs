use rand::Rng;

use super::graph::directed_edges;
use super::sparks::burst;
use super::types::{Node, Particle, Spark};

/// Progress per frame; a full edge takes 500 frames regardless of length.
pub const PROGRESS_STEP: f64 = 0.002;

impl Particle {
	/// Steps along the edge. Returns `true` on the frame it reaches the target,
	/// after wrapping back to the source.
	pub fn advance(&mut self) -> bool {
		let before = self.progress;
		self.progress += PROGRESS_STEP;
		let arrived = before < 1.0 && self.progress >= 1.0;
		if self.progress >= 1.0 {
			self.progress = 0.0;
		}
		arrived
	}

	/// Interpolated position between the live endpoints.
	pub fn position(&self, nodes: &[Node]) -> Option<(f64, f64)> {
		let (source, target) = (nodes.get(self.source)?, nodes.get(self.target)?);
		Some((
			source.x + (target.x - source.x) * self.progress,
			source.y + (target.y - source.y) * self.progress,
		))
	}
}

/// One particle per directed edge, each starting at a random phase.
pub fn seed_particles(nodes: &[Node], rng: &mut impl Rng) -> Vec<Particle> {
	directed_edges(nodes)
		.map(|(source, target)| Particle {
			source,
			target,
			progress: rng.random::<f64>(),
		})
		.collect()
}

/// Moves every particle and emits a spark burst at each arrival.
pub fn advance_particles(
	particles: &mut [Particle],
	nodes: &[Node],
	sparks: &mut Vec<Spark>,
	rng: &mut impl Rng,
) {
	for particle in particles {
		if !particle.advance() {
			continue;
		}
		if let Some(target) = nodes.get(particle.target) {
			burst(sparks, target.x, target.y, rng);
		}
	}
}
