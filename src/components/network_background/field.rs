use rand::Rng;

use super::types::Node;

pub const MIN_RADIUS: f64 = 1.0;
pub const MAX_RADIUS: f64 = 2.5;
pub const INITIAL_SPEED: f64 = 0.1;
/// Total jitter span as a fraction of cell spacing (±15%).
pub const JITTER_SPAN: f64 = 0.3;

/// Side length of the smallest square grid holding `count` nodes.
pub fn grid_size(count: usize) -> usize {
	((count as f64).sqrt().ceil() as usize).max(1)
}

/// Distance between grid lines. A single-cell grid spans the whole extent.
pub fn spacing(extent: f64, grid: usize) -> f64 {
	if grid <= 1 {
		extent
	} else {
		extent / (grid - 1) as f64
	}
}

pub fn spawn_nodes(count: usize, width: f64, height: f64, rng: &mut impl Rng) -> Vec<Node> {
	let mut nodes: Vec<Node> = (0..count.max(1))
		.map(|_| Node {
			radius: rng.random_range(MIN_RADIUS..=MAX_RADIUS),
			vx: rng.random_range(-INITIAL_SPEED..=INITIAL_SPEED),
			vy: rng.random_range(-INITIAL_SPEED..=INITIAL_SPEED),
			..Default::default()
		})
		.collect();
	layout_grid(&mut nodes, width, height, rng);
	nodes
}

/// Places every node on its grid cell plus jitter. Velocities are untouched.
pub fn layout_grid(nodes: &mut [Node], width: f64, height: f64, rng: &mut impl Rng) {
	let grid = grid_size(nodes.len());
	let (spacing_x, spacing_y) = (spacing(width, grid), spacing(height, grid));

	for (i, node) in nodes.iter_mut().enumerate() {
		let (row, col) = ((i / grid) as f64, (i % grid) as f64);
		let offset_x = (rng.random::<f64>() - 0.5) * spacing_x * JITTER_SPAN;
		let offset_y = (rng.random::<f64>() - 0.5) * spacing_y * JITTER_SPAN;
		node.x = (spacing_x * col + offset_x).clamp(0.0, width);
		node.y = (spacing_y * row + offset_y).clamp(0.0, height);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn grid_size_is_ceil_sqrt() {
		assert_eq!(grid_size(1), 1);
		assert_eq!(grid_size(4), 2);
		assert_eq!(grid_size(5), 3);
		assert_eq!(grid_size(50), 8);
		assert_eq!(grid_size(64), 8);
	}

	#[test]
	fn single_cell_spacing_is_full_extent() {
		assert_eq!(spacing(640.0, 1), 640.0);
		assert_eq!(spacing(700.0, 8), 100.0);
	}

	#[test]
	fn spawns_requested_count_inside_surface() {
		let mut rng = SmallRng::seed_from_u64(1);
		for count in [1, 2, 3, 7, 50, 101] {
			let nodes = spawn_nodes(count, 800.0, 600.0, &mut rng);
			assert_eq!(nodes.len(), count);
			for node in &nodes {
				assert!((0.0..=800.0).contains(&node.x), "x = {}", node.x);
				assert!((0.0..=600.0).contains(&node.y), "y = {}", node.y);
				assert!(node.x.is_finite() && node.y.is_finite());
				assert!((MIN_RADIUS..=MAX_RADIUS).contains(&node.radius));
				assert!(node.vx.abs() <= INITIAL_SPEED && node.vy.abs() <= INITIAL_SPEED);
				assert!(node.connections.is_empty());
			}
		}
	}

	#[test]
	fn jitter_stays_within_fifteen_percent_of_cell() {
		let mut rng = SmallRng::seed_from_u64(2);
		let nodes = spawn_nodes(16, 300.0, 300.0, &mut rng);
		// 4x4 grid, 100px cells
		for (i, node) in nodes.iter().enumerate() {
			let (row, col) = ((i / 4) as f64, (i % 4) as f64);
			assert!((node.x - col * 100.0).abs() <= 15.0 + 1e-9);
			assert!((node.y - row * 100.0).abs() <= 15.0 + 1e-9);
		}
	}

	#[test]
	fn single_node_gets_finite_position() {
		let mut rng = SmallRng::seed_from_u64(3);
		let nodes = spawn_nodes(1, 400.0, 300.0, &mut rng);
		assert_eq!(nodes.len(), 1);
		assert!(nodes[0].x.is_finite() && nodes[0].y.is_finite());
	}

	#[test]
	fn zero_count_still_yields_one_node() {
		let mut rng = SmallRng::seed_from_u64(4);
		assert_eq!(spawn_nodes(0, 400.0, 300.0, &mut rng).len(), 1);
	}

	#[test]
	fn layout_keeps_velocities() {
		let mut rng = SmallRng::seed_from_u64(5);
		let mut nodes = spawn_nodes(9, 400.0, 400.0, &mut rng);
		let velocities: Vec<_> = nodes.iter().map(|n| (n.vx, n.vy)).collect();
		layout_grid(&mut nodes, 1000.0, 500.0, &mut rng);
		let after: Vec<_> = nodes.iter().map(|n| (n.vx, n.vy)).collect();
		assert_eq!(velocities, after);
		assert!(nodes.iter().all(|n| n.x <= 1000.0 && n.y <= 500.0));
	}
}
