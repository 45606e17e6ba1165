use log::warn;
use thiserror::Error;

/// Index of a node inside [`super::NetworkState::nodes`].
pub type NodeIndex = usize;

pub const DEFAULT_NODE_COUNT: usize = 50;
pub const DEFAULT_OPACITY: f64 = 0.4;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub vx: f64,
	pub vy: f64,
	/// Neighbors within the proximity threshold at the last rebuild, ascending.
	pub connections: Vec<NodeIndex>,
}

/// A marker travelling along the directed edge `source -> target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub source: NodeIndex,
	pub target: NodeIndex,
	/// Always in `[0, 1)` between frames.
	pub progress: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spark {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub life: u32,
	pub max_life: u32,
}

/// Host-facing configuration of the background.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkOptions {
	pub node_count: usize,
	/// Alpha of the whole canvas, applied once rather than per element.
	pub opacity: f64,
	/// Suspend the frame loop while the document is hidden.
	pub pause_when_hidden: bool,
}

impl Default for NetworkOptions {
	fn default() -> Self {
		Self {
			node_count: DEFAULT_NODE_COUNT,
			opacity: DEFAULT_OPACITY,
			pause_when_hidden: false,
		}
	}
}

impl NetworkOptions {
	/// Returns a copy with every field forced into its valid range.
	pub fn sanitized(&self) -> Self {
		let mut options = self.clone();
		if options.node_count == 0 {
			warn!("node_count must be at least 1, using 1");
			options.node_count = 1;
		}
		if !options.opacity.is_finite() {
			warn!("opacity {} is not finite, using {}", options.opacity, DEFAULT_OPACITY);
			options.opacity = DEFAULT_OPACITY;
		} else if !(0.0..=1.0).contains(&options.opacity) {
			let clamped = options.opacity.clamp(0.0, 1.0);
			warn!("opacity {} outside [0, 1], using {}", options.opacity, clamped);
			options.opacity = clamped;
		}
		options
	}
}

/// Reasons the background could not attach to its host. None of these are
/// surfaced to the page; the component just stays idle.
#[derive(Debug, Error, PartialEq)]
pub enum SetupError {
	#[error("no window available")]
	NoWindow,
	#[error("canvas has no containing element")]
	NoContainer,
	#[error("canvas has no 2d context")]
	NoContext,
	#[error("dom call failed: {0}")]
	Js(String),
}

impl From<wasm_bindgen::JsValue> for SetupError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Js(format!("{:?}", value))
	}
}
