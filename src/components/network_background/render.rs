use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::NetworkState;

const CONNECTION_STYLE: &str = "rgba(255, 255, 255, 0.12)";
const NODE_STYLE: &str = "rgba(255, 255, 255, 0.3)";
const PARTICLE_STYLE: &str = "rgba(255, 255, 255, 0.6)";
const PULSE_STYLE: &str = "rgba(255, 255, 255, 0.15)";
const CONNECTION_WIDTH: f64 = 0.5;
const SPARK_WIDTH: f64 = 2.0;
const PARTICLE_RADIUS: f64 = 1.0;

/// The slice of a 2D immediate-mode context the renderer needs.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn set_fill_style(&self, style: &str);
	fn set_stroke_style(&self, style: &str);
	fn set_line_width(&self, width: f64);
	fn begin_path(&self);
	fn move_to(&self, x: f64, y: f64);
	fn line_to(&self, x: f64, y: f64);
	/// Full circle centred on `(x, y)`.
	fn circle(&self, x: f64, y: f64, radius: f64);
	fn fill(&self);
	fn stroke(&self);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn set_fill_style(&self, style: &str) {
		self.set_fill_style_str(style);
	}

	fn set_stroke_style(&self, style: &str) {
		self.set_stroke_style_str(style);
	}

	fn set_line_width(&self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn begin_path(&self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn move_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn circle(&self, x: f64, y: f64, radius: f64) {
		let _ = self.arc(x, y, radius.max(0.0), 0.0, 2.0 * PI);
	}

	fn fill(&self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke(&self) {
		CanvasRenderingContext2d::stroke(self);
	}
}

/// Halo radius for a node, oscillating with time and position.
pub fn pulse_radius(base: f64, x: f64, y: f64, time: f64) -> f64 {
	base + (time / 2000.0 + x + y).sin() * 1.5 + 2.0
}

pub fn render(state: &NetworkState, surface: &impl Surface) {
	surface.clear(state.width, state.height);
	draw_connections(state, surface);
	draw_nodes(state, surface);
	draw_particles(state, surface);
	draw_sparks(state, surface);
	draw_pulses(state, surface);
}

fn draw_connections(state: &NetworkState, surface: &impl Surface) {
	surface.set_stroke_style(CONNECTION_STYLE);
	surface.set_line_width(CONNECTION_WIDTH);
	for node in &state.nodes {
		for target in node.connections.iter().filter_map(|&j| state.nodes.get(j)) {
			surface.begin_path();
			surface.move_to(node.x, node.y);
			surface.line_to(target.x, target.y);
			surface.stroke();
		}
	}
}

fn draw_nodes(state: &NetworkState, surface: &impl Surface) {
	surface.set_fill_style(NODE_STYLE);
	for node in &state.nodes {
		surface.begin_path();
		surface.circle(node.x, node.y, node.radius);
		surface.fill();
	}
}

fn draw_particles(state: &NetworkState, surface: &impl Surface) {
	surface.set_fill_style(PARTICLE_STYLE);
	for (x, y) in state.particles.iter().filter_map(|p| p.position(&state.nodes)) {
		surface.begin_path();
		surface.circle(x, y, PARTICLE_RADIUS);
		surface.fill();
	}
}

fn draw_sparks(state: &NetworkState, surface: &impl Surface) {
	surface.set_line_width(SPARK_WIDTH);
	for spark in state.sparks.iter().filter(|s| s.is_alive()) {
		let (tail_x, tail_y) = spark.tail();
		surface.set_stroke_style(&format!("rgba(255, 255, 255, {})", spark.alpha()));
		surface.begin_path();
		surface.move_to(spark.x, spark.y);
		surface.line_to(tail_x, tail_y);
		surface.stroke();
	}
}

fn draw_pulses(state: &NetworkState, surface: &impl Surface) {
	surface.set_fill_style(PULSE_STYLE);
	for node in &state.nodes {
		surface.begin_path();
		surface.circle(
			node.x,
			node.y,
			pulse_radius(node.radius, node.x, node.y, state.time),
		);
		surface.fill();
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use std::cell::RefCell;

	use super::Surface;

	#[derive(Clone, Debug, PartialEq)]
	pub enum Call {
		Clear(f64, f64),
		FillStyle(String),
		StrokeStyle(String),
		LineWidth(f64),
		BeginPath,
		MoveTo(f64, f64),
		LineTo(f64, f64),
		Circle(f64, f64, f64),
		Fill,
		Stroke,
	}

	/// Records every drawing call in order.
	#[derive(Default)]
	pub struct RecordingSurface {
		pub calls: RefCell<Vec<Call>>,
	}

	impl RecordingSurface {
		pub fn take(&self) -> Vec<Call> {
			std::mem::take(&mut *self.calls.borrow_mut())
		}

		fn push(&self, call: Call) {
			self.calls.borrow_mut().push(call);
		}
	}

	impl Surface for RecordingSurface {
		fn clear(&self, width: f64, height: f64) {
			self.push(Call::Clear(width, height));
		}
		fn set_fill_style(&self, style: &str) {
			self.push(Call::FillStyle(style.into()));
		}
		fn set_stroke_style(&self, style: &str) {
			self.push(Call::StrokeStyle(style.into()));
		}
		fn set_line_width(&self, width: f64) {
			self.push(Call::LineWidth(width));
		}
		fn begin_path(&self) {
			self.push(Call::BeginPath);
		}
		fn move_to(&self, x: f64, y: f64) {
			self.push(Call::MoveTo(x, y));
		}
		fn line_to(&self, x: f64, y: f64) {
			self.push(Call::LineTo(x, y));
		}
		fn circle(&self, x: f64, y: f64, radius: f64) {
			self.push(Call::Circle(x, y, radius));
		}
		fn fill(&self) {
			self.push(Call::Fill);
		}
		fn stroke(&self) {
			self.push(Call::Stroke);
		}
	}
}
