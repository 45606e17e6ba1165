/// The host's display-refresh primitive.
pub trait FrameHost {
	type Handle: Copy;

	/// Schedules the next frame callback. `None` if the host refused.
	fn request_frame(&self) -> Option<Self::Handle>;

	fn cancel_frame(&self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
	Stopped,
	Running,
}

/// Owns the single pending-frame slot of the render loop.
pub struct FrameScheduler<H: FrameHost> {
	host: H,
	state: SchedulerState,
	pending: Option<H::Handle>,
}

impl<H: FrameHost> FrameScheduler<H> {
	pub fn new(host: H) -> Self {
		Self {
			host,
			state: SchedulerState::Stopped,
			pending: None,
		}
	}

	#[cfg(test)]
	pub fn state(&self) -> SchedulerState {
		self.state
	}

	pub fn is_running(&self) -> bool {
		self.state == SchedulerState::Running
	}

	#[cfg(test)]
	pub fn has_pending_frame(&self) -> bool {
		self.pending.is_some()
	}

	#[cfg(test)]
	pub fn host(&self) -> &H {
		&self.host
	}

	/// Arms the first frame. Returns whether the loop is running afterwards.
	pub fn start(&mut self) -> bool {
		if self.is_running() {
			return true;
		}
		self.state = SchedulerState::Running;
		self.arm();
		self.is_running()
	}

	/// Runs `frame` for the callback that just fired and re-arms the loop.
	/// Returns `false` without running anything when stopped.
	pub fn run_frame(&mut self, frame: impl FnOnce()) -> bool {
		self.pending = None;
		if !self.is_running() {
			return false;
		}
		frame();
		self.arm();
		true
	}

	pub fn stop(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.host.cancel_frame(handle);
		}
		self.state = SchedulerState::Stopped;
	}

	fn arm(&mut self) {
		if self.pending.is_some() {
			return;
		}
		self.pending = self.host.request_frame();
		if self.pending.is_none() {
			self.state = SchedulerState::Stopped;
		}
	}
}
