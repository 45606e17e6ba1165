use log::info;

use super::render::{Surface, render};
use super::scheduler::{FrameHost, FrameScheduler};
use super::state::NetworkState;

/// Simulation, scheduler and surface bound together behind a start/stop pair.
pub struct NetworkEngine<H: FrameHost, S: Surface> {
	state: NetworkState,
	scheduler: FrameScheduler<H>,
	surface: S,
	pause_when_hidden: bool,
	/// Stopped because the document went hidden, not by the host.
	suspended: bool,
	released: bool,
}

impl<H: FrameHost, S: Surface> NetworkEngine<H, S> {
	pub fn new(state: NetworkState, host: H, surface: S, pause_when_hidden: bool) -> Self {
		Self {
			state,
			scheduler: FrameScheduler::new(host),
			surface,
			pause_when_hidden,
			suspended: false,
			released: false,
		}
	}

	#[cfg(test)]
	pub fn state(&self) -> &NetworkState {
		&self.state
	}

	#[cfg(test)]
	pub fn scheduler(&self) -> &FrameScheduler<H> {
		&self.scheduler
	}

	#[cfg(test)]
	pub fn is_running(&self) -> bool {
		self.scheduler.is_running()
	}

	#[cfg(test)]
	pub fn is_suspended(&self) -> bool {
		self.suspended
	}

	pub fn start(&mut self) -> bool {
		self.released = false;
		self.suspended = false;
		let running = self.scheduler.start();
		if running {
			info!(
				"network background started: {} nodes, {} edges",
				self.state.nodes.len(),
				self.state.edge_count()
			);
		}
		running
	}

	/// Cancels the pending frame. Later frames, resizes and visibility
	/// changes are ignored until the next [`Self::start`].
	pub fn stop(&mut self) {
		if self.released {
			return;
		}
		self.scheduler.stop();
		self.released = true;
		self.suspended = false;
		info!("network background stopped after {} frames", self.state.frame);
	}

	/// Host frame callback: one tick and one render, then re-arm.
	pub fn on_frame(&mut self, now: f64) {
		let Self {
			state,
			scheduler,
			surface,
			..
		} = self;
		scheduler.run_frame(|| {
			state.tick(now);
			render(state, &*surface);
		});
	}

	pub fn on_resize(&mut self, width: f64, height: f64) {
		if self.released {
			return;
		}
		self.state.resize(width, height);
	}

	pub fn set_visible(&mut self, visible: bool) {
		if self.released || !self.pause_when_hidden {
			return;
		}
		if !visible && self.scheduler.is_running() {
			self.scheduler.stop();
			self.suspended = true;
			info!("network background paused while hidden");
		} else if visible && self.suspended {
			self.suspended = false;
			self.scheduler.start();
			info!("network background resumed");
		}
	}
}
