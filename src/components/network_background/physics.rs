use rand::Rng;

use super::types::Node;

/// Velocity kept (and reversed) after hitting a wall.
pub const RESTITUTION: f64 = 0.8;
pub const JITTER: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.8;

/// Advances every node by one frame: move, reflect, jitter, clamp speed.
pub fn integrate(nodes: &mut [Node], width: f64, height: f64, rng: &mut impl Rng) {
	for node in nodes {
		step_node(node, width, height, rng);
	}
}

pub fn step_node(node: &mut Node, width: f64, height: f64, rng: &mut impl Rng) {
	node.x += node.vx;
	node.y += node.vy;

	reflect(&mut node.x, &mut node.vx, width);
	reflect(&mut node.y, &mut node.vy, height);

	// Jitter after reflection so nodes never rest against a wall.
	node.vx += rng.random_range(-JITTER..=JITTER);
	node.vy += rng.random_range(-JITTER..=JITTER);

	let speed = (node.vx * node.vx + node.vy * node.vy).sqrt();
	if speed > MAX_SPEED {
		node.vx = node.vx / speed * MAX_SPEED;
		node.vy = node.vy / speed * MAX_SPEED;
	}
}

fn reflect(pos: &mut f64, vel: &mut f64, max: f64) {
	if *pos < 0.0 || *pos > max {
		*vel *= -RESTITUTION;
		*pos = pos.clamp(0.0, max);
	}
}
