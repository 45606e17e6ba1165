use super::types::{Node, NodeIndex};

/// Nodes closer than this fraction of the surface width are connected.
pub const CONNECT_FRACTION: f64 = 0.2;

/// Rebuilds every node's `connections` from scratch with an all-pairs scan.
pub fn connect_nearby(nodes: &mut [Node], width: f64) {
	let threshold = width * CONNECT_FRACTION;
	let positions: Vec<(f64, f64)> = nodes.iter().map(|n| (n.x, n.y)).collect();

	for (i, node) in nodes.iter_mut().enumerate() {
		node.connections = positions
			.iter()
			.enumerate()
			.filter(|&(j, &(x, y))| {
				let (dx, dy) = (node.x - x, node.y - y);
				j != i && (dx * dx + dy * dy).sqrt() < threshold
			})
			.map(|(j, _)| j)
			.collect();
	}
}

/// Directed `(source, target)` pairs in connection order.
pub fn directed_edges(nodes: &[Node]) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
	nodes
		.iter()
		.enumerate()
		.flat_map(|(i, node)| node.connections.iter().map(move |&j| (i, j)))
}
