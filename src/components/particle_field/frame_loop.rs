//! Bookkeeping for the `requestAnimationFrame` loop.
//!
//! The browser side only knows how to request and cancel a frame by id.
//! `FrameLoop` tracks which request is outstanding and whether the loop is
//! still allowed to do work, so teardown is a single call that hands back
//! the id to cancel and guarantees every later callback is a no-op.

/// Lifecycle of the animation loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopPhase {
	/// Built but no frame requested yet.
	#[default]
	Idle,
	/// A frame is requested or about to be.
	Running,
	/// Torn down. Terminal.
	Stopped,
}

/// Scheduled-task handle for the per-frame callback.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
	phase: LoopPhase,
	pending: Option<i32>,
	frames: u64,
}

impl FrameLoop {
	/// An idle loop with no frame requested.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current lifecycle phase.
	pub fn phase(&self) -> LoopPhase {
		self.phase
	}

	/// Whether frames are still allowed to do work.
	pub fn is_running(&self) -> bool {
		self.phase == LoopPhase::Running
	}

	/// Id of the frame request that has not fired yet, if any.
	pub fn pending(&self) -> Option<i32> {
		self.pending
	}

	/// Frames rendered so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Moves `Idle` to `Running`. Returns whether the caller should request
	/// the first frame.
	pub fn start(&mut self) -> bool {
		if self.phase == LoopPhase::Idle {
			self.phase = LoopPhase::Running;
			true
		} else {
			false
		}
	}

	/// Records the id returned by `requestAnimationFrame`.
	pub fn scheduled(&mut self, id: i32) {
		if self.is_running() {
			self.pending = Some(id);
		}
	}

	/// Called at the top of each frame callback. Returns `false` when the
	/// loop has been stopped; the callback must then neither render nor
	/// request another frame.
	pub fn begin_frame(&mut self) -> bool {
		self.pending = None;
		if self.is_running() {
			self.frames += 1;
			true
		} else {
			false
		}
	}

	/// Stops the loop for good and returns the outstanding request to cancel.
	pub fn stop(&mut self) -> Option<i32> {
		self.phase = LoopPhase::Stopped;
		self.pending.take()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn runs_until_stopped() {
		let mut lp = FrameLoop::new();
		assert_eq!(lp.phase(), LoopPhase::Idle);
		assert!(lp.start());
		lp.scheduled(1);
		assert_eq!(lp.pending(), Some(1));

		assert!(lp.begin_frame());
		assert_eq!(lp.pending(), None);
		lp.scheduled(2);
		assert!(lp.begin_frame());
		assert_eq!(lp.frames(), 2);
	}

	#[test]
	fn stop_hands_back_pending_request() {
		let mut lp = FrameLoop::new();
		lp.start();
		lp.scheduled(7);
		assert_eq!(lp.stop(), Some(7));
		assert_eq!(lp.stop(), None);
		assert_eq!(lp.phase(), LoopPhase::Stopped);
	}

	#[test]
	fn no_frames_after_stop() {
		let mut lp = FrameLoop::new();
		lp.start();
		lp.scheduled(3);
		assert!(lp.begin_frame());
		lp.stop();

		// A callback that was already queued still fires once in the browser.
		assert!(!lp.begin_frame());
		lp.scheduled(4);
		assert_eq!(lp.pending(), None);
		assert_eq!(lp.frames(), 1);
	}

	#[test]
	fn start_is_one_shot() {
		let mut lp = FrameLoop::new();
		assert!(lp.start());
		assert!(!lp.start());
		lp.stop();
		assert!(!lp.start());
		assert!(!lp.is_running());
	}
}
