//! Shared drag context
//!
//! Browsers deliver events for a single in-progress drag at a time, but the
//! `dragover` listeners of every table on the page see it. A [`DragSession`]
//! records which container the drag started in so the others can ignore it.
//! Controllers that should share that knowledge are handed clones of the same
//! session.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one controlled container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(u64);

impl ContainerId {
	/// Allocates an identifier no other container has.
	pub fn next() -> Self {
		Self(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
	}
}

impl fmt::Display for ContainerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "container-{}", self.0)
	}
}

/// Records the container the current drag started in.
///
/// Cloning is cheap; all clones observe the same drag.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
	origin: Rc<Cell<Option<ContainerId>>>,
}

impl DragSession {
	/// Creates a session with no drag in progress.
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a drag from `container`, replacing any previous origin.
	pub fn begin(&self, container: ContainerId) {
		self.origin.set(Some(container));
	}

	/// The container the current drag started in.
	pub fn origin(&self) -> Option<ContainerId> {
		self.origin.get()
	}

	/// Whether the current drag started in `container`.
	pub fn is_from(&self, container: ContainerId) -> bool {
		self.origin.get() == Some(container)
	}

	/// Ends the drag if `container` is still its origin.
	///
	/// Returns `false` when another container has started a drag since.
	pub fn end(&self, container: ContainerId) -> bool {
		if self.is_from(container) {
			self.origin.set(None);
			true
		} else {
			false
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_container_ids_are_unique() {
		let a = ContainerId::next();
		let b = ContainerId::next();
		assert_ne!(a, b);
	}

	#[rstest]
	fn test_clones_share_origin() {
		let session = DragSession::new();
		let other = session.clone();
		let id = ContainerId::next();

		session.begin(id);
		assert!(other.is_from(id));
		assert_eq!(other.origin(), Some(id));
	}

	#[rstest]
	fn test_begin_overwrites_origin() {
		let session = DragSession::new();
		let first = ContainerId::next();
		let second = ContainerId::next();

		session.begin(first);
		session.begin(second);
		assert!(!session.is_from(first));
		assert!(session.is_from(second));
	}

	#[rstest]
	fn test_end_only_clears_own_drag() {
		let session = DragSession::new();
		let first = ContainerId::next();
		let second = ContainerId::next();

		session.begin(first);
		session.begin(second);
		assert!(!session.end(first));
		assert_eq!(session.origin(), Some(second));
		assert!(session.end(second));
		assert_eq!(session.origin(), None);
	}
}
