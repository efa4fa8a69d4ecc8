//! Reorder controller
//!
//! [`ReorderController`] owns one container's rows and buttons and runs the
//! drag lifecycle:
//!
//! ```text
//! Idle --dragstart--> Dragging --dragover*--> Dragging --dragend--> Idle
//! ```
//!
//! At the end of a drag the current order is compared with the baseline,
//! the buttons are updated and, in instant mode, a [`Submission`] is issued.
//!
//! ## Outstanding submissions
//!
//! At most one submission per controller is outstanding. A drag that ends in
//! instant mode while one is in flight supersedes it: the older ticket becomes
//! stale and its acknowledgment is dropped. Save and cancel are disabled and
//! ignored until the outstanding submission is acknowledged.

use std::collections::HashSet;
use std::fmt;

use crate::buttons::{Affordance, Buttons};
use crate::error::{ConfigurationError, ReorderError, SinkFailure, ValidationError};
use crate::markup::{ActionMode, ContainerConfig};
use crate::order::{Order, is_equal};
use crate::rows::RowList;
use crate::session::{ContainerId, DragSession};
use crate::settings::Settings;
use crate::sink::{OrderSink, Submission, Ticket};
use crate::{error_log, info_log, trace_log, warn_log};

/// Class applied to the row being dragged unless overridden.
pub const DEFAULT_DRAGGED_CLASS: &str = "dragreorder-dragging";

struct DragState<R> {
	row: R,
	/// Row whose hover caused the last relocation.
	last_target: Option<R>,
}

struct Pending {
	ticket: Ticket,
	order: Order,
}

/// Drag-and-drop reordering of one container's rows.
pub struct ReorderController<L: RowList, A> {
	id: ContainerId,
	rows: L,
	config: ContainerConfig,
	settings: Settings,
	buttons: Buttons<A>,
	dragged_class: String,
	drag: Option<DragState<L::Row>>,
	baseline: Order,
	pending: Option<Pending>,
	next_ticket: u64,
}

impl<L: RowList, A> fmt::Debug for ReorderController<L, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ReorderController")
			.field("id", &self.id)
			.field("config", &self.config)
			.field("dragged_class", &self.dragged_class)
			.field("dragging", &self.drag.is_some())
			.field("baseline", &self.baseline)
			.field("pending", &self.pending.as_ref().map(|p| p.ticket))
			.finish_non_exhaustive()
	}
}

impl<L, A> ReorderController<L, A>
where
	L: RowList,
	A: Affordance,
{
	/// Wires up a container.
	///
	/// Marks the draggable rows, captures the baseline order and applies the
	/// initial button visibility. Every draggable row must carry a unique
	/// identifier.
	pub fn new(
		rows: L,
		config: ContainerConfig,
		settings: Settings,
		buttons: Buttons<A>,
	) -> Result<Self, ConfigurationError> {
		let mut controller = Self {
			id: ContainerId::next(),
			rows,
			config,
			settings,
			buttons,
			dragged_class: DEFAULT_DRAGGED_CLASS.to_string(),
			drag: None,
			baseline: Order::default(),
			pending: None,
			next_ticket: 1,
		};

		controller.validate_rows()?;
		for row in controller.draggable_rows() {
			controller.rows.set_draggable(&row);
		}
		controller.baseline = controller.order();
		controller.refresh_buttons();

		info_log!(
			"{} ready: {} draggable rows, mode {:?}",
			controller.id,
			controller.baseline.len(),
			controller.config.mode
		);
		Ok(controller)
	}

	fn validate_rows(&self) -> Result<(), ConfigurationError> {
		let mut seen = HashSet::new();
		for (index, row) in self.draggable_rows().iter().enumerate() {
			let id = self
				.rows
				.row_id(row)
				.ok_or(ConfigurationError::MissingRowId { index })?;
			if !seen.insert(id.clone()) {
				return Err(ConfigurationError::DuplicateRowId(id));
			}
		}
		Ok(())
	}

	/// This controller's identity within a [`DragSession`].
	pub fn id(&self) -> ContainerId {
		self.id
	}

	/// The underlying rows.
	pub fn rows(&self) -> &L {
		&self.rows
	}

	/// Mutable access to the underlying rows.
	///
	/// Changes made here bypass the drag lifecycle; the next comparison
	/// simply sees the new order.
	pub fn rows_mut(&mut self) -> &mut L {
		&mut self.rows
	}

	/// The container's reference token.
	pub fn reference(&self) -> Option<&str> {
		self.config.reference.as_deref()
	}

	/// When the sink is invoked.
	pub fn mode(&self) -> ActionMode {
		self.config.mode
	}

	/// Button visibility settings.
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	/// The rows that can be dragged: every row after the skipped ones, in
	/// current document order.
	pub fn draggable_rows(&self) -> Vec<L::Row> {
		self.rows
			.rows()
			.into_iter()
			.skip(self.config.row_skip)
			.collect()
	}

	/// Identifiers of the draggable rows in current order.
	pub fn order(&self) -> Order {
		self.draggable_rows()
			.iter()
			.enumerate()
			.filter_map(|(index, row)| {
				let id = self.rows.row_id(row);
				if id.is_none() {
					warn_log!("{}: draggable row {} has no identifier", self.id, index);
				}
				id
			})
			.collect()
	}

	/// The order last acknowledged by the sink (or the initial order).
	pub fn baseline(&self) -> &Order {
		&self.baseline
	}

	/// Whether the current order differs from the baseline.
	pub fn is_changed(&self) -> bool {
		!is_equal(&self.baseline, &self.order())
	}

	/// Whether a submission is waiting for acknowledgment.
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Whether a row is being dragged.
	pub fn is_dragging(&self) -> bool {
		self.drag.is_some()
	}

	/// Class applied to the row being dragged.
	pub fn dragged_class(&self) -> &str {
		&self.dragged_class
	}

	/// Replaces the dragged-row class. The name is trimmed and must not be empty.
	pub fn set_dragged_class(&mut self, name: &str) -> Result<(), ValidationError> {
		let name = name.trim();
		if name.is_empty() {
			error_log!("{}", ValidationError::EmptyClassName);
			return Err(ValidationError::EmptyClassName);
		}
		if let Some(drag) = &self.drag {
			self.rows.set_class(&drag.row, &self.dragged_class, false);
			self.rows.set_class(&drag.row, name, true);
		}
		self.dragged_class = name.to_string();
		Ok(())
	}

	fn is_draggable(&self, row: &L::Row) -> bool {
		self.draggable_rows().contains(row)
	}

	/// A drag starts on `row`.
	pub fn drag_start(&mut self, session: &DragSession, row: &L::Row) {
		if !self.is_draggable(row) {
			trace_log!("{}: dragstart on a row that is not draggable", self.id);
			return;
		}
		if let Some(previous) = self.drag.take() {
			self.rows.set_class(&previous.row, &self.dragged_class, false);
		}

		self.rows.set_class(row, &self.dragged_class, true);
		self.drag = Some(DragState {
			row: row.clone(),
			last_target: None,
		});
		session.begin(self.id);
		trace_log!("{}: drag start", self.id);
	}

	/// The pointer hovers `hovered` during a drag.
	///
	/// The dragged row is moved after `hovered` when `hovered` is further down,
	/// before it otherwise. Returns whether a row moved.
	pub fn drag_over(&mut self, session: &DragSession, hovered: &L::Row) -> bool {
		if !session.is_from(self.id) {
			return false;
		}
		let rows = self.draggable_rows();
		let Some(drag) = self.drag.as_mut() else {
			return false;
		};

		if *hovered == drag.row {
			drag.last_target = None;
			return false;
		}
		if drag.last_target.as_ref() == Some(hovered) {
			return false;
		}
		let (Some(from), Some(to)) = (
			rows.iter().position(|row| *row == drag.row),
			rows.iter().position(|row| row == hovered),
		) else {
			return false;
		};

		if to > from {
			self.rows.move_after(&drag.row, hovered);
		} else {
			self.rows.move_before(&drag.row, hovered);
		}
		drag.last_target = Some(hovered.clone());
		trace_log!("{}: drag over, row {} -> {}", self.id, from, to);
		true
	}

	/// The drag ends, dropped or cancelled.
	///
	/// Without a drag in progress this does nothing.
	pub fn drag_end(&mut self, session: &DragSession) -> Option<Submission> {
		let Some(drag) = self.drag.take() else {
			trace_log!("{}: dragend without a drag", self.id);
			return None;
		};
		self.rows.set_class(&drag.row, &self.dragged_class, false);
		session.end(self.id);
		trace_log!("{}: drag end", self.id);
		self.end_of_drag_action()
	}

	/// Updates the buttons and, in instant mode, issues a submission.
	pub fn end_of_drag_action(&mut self) -> Option<Submission> {
		self.refresh_buttons();
		if self.config.mode.sends_on_drag_end() {
			Some(self.submit())
		} else {
			None
		}
	}

	/// The save button was clicked.
	pub fn save(&mut self) -> Option<Submission> {
		if self.pending.is_some() {
			warn_log!("{}: save ignored, a submission is outstanding", self.id);
			return None;
		}
		Some(self.submit())
	}

	/// The cancel button was clicked.
	pub fn cancel(&mut self) -> Option<Submission> {
		if self.pending.is_some() {
			warn_log!("{}: cancel ignored, a submission is outstanding", self.id);
			return None;
		}
		self.revert_ordering()
	}

	/// Restores the baseline order, then runs the end-of-drag action.
	pub fn revert_ordering(&mut self) -> Option<Submission> {
		let moves = self.restore_baseline();
		trace_log!("{}: baseline restored in {} moves", self.id, moves);
		self.end_of_drag_action()
	}

	/// Repeatedly pulls the row that belongs at the first mismatching position
	/// up to that position. Positions above the mismatch already hold their
	/// baseline rows, so every move fixes one more position.
	fn restore_baseline(&mut self) -> usize {
		let mut moves = 0;
		loop {
			let rows = self.draggable_rows();
			let mismatch = rows
				.iter()
				.zip(self.baseline.iter())
				.position(|(row, expected)| {
					self.rows.row_id(row).as_deref() != Some(expected.as_str())
				});
			let Some(index) = mismatch else {
				return moves;
			};

			let expected = &self.baseline[index];
			let Some(source) = rows
				.iter()
				.find(|row| self.rows.row_id(row).as_deref() == Some(expected.as_str()))
			else {
				warn_log!(
					"{}: row `{}` is gone, cannot restore the baseline",
					self.id,
					expected
				);
				return moves;
			};

			trace_log!("{}: moving `{}` to position {}", self.id, expected, index);
			self.rows.move_before(source, &rows[index]);
			moves += 1;

			if moves > rows.len() {
				warn_log!("{}: baseline restore did not converge", self.id);
				return moves;
			}
		}
	}

	/// Acknowledges the submission identified by `ticket`.
	///
	/// On success the submitted order becomes the baseline. On failure the
	/// rows and baseline are left untouched and the failure is returned for
	/// the caller to show. Acknowledgments for stale tickets are ignored.
	pub fn complete(
		&mut self,
		ticket: Ticket,
		outcome: Result<(), SinkFailure>,
	) -> Result<(), ReorderError> {
		let Some(pending) = self.pending.take_if(|pending| pending.ticket == ticket) else {
			trace_log!("{}: dropping stale acknowledgment {}", self.id, ticket);
			return Ok(());
		};
		self.buttons.set_busy(false);

		match outcome {
			Ok(()) => {
				self.baseline = pending.order;
				self.refresh_buttons();
				trace_log!("{}: submission {} acknowledged", self.id, ticket);
				Ok(())
			}
			Err(failure) => {
				error_log!("{}: {}", self.id, failure);
				Err(failure.into())
			}
		}
	}

	/// Delivers a submission through a synchronous sink and acknowledges it.
	///
	/// Without a sink the submission is acknowledged as successful.
	pub fn dispatch(
		&mut self,
		submission: Option<Submission>,
		sink: Option<&dyn OrderSink>,
	) -> Result<(), ReorderError> {
		let Some(submission) = submission else {
			return Ok(());
		};
		let outcome = match sink {
			Some(sink) => sink.deliver(&submission),
			None => Ok(()),
		};
		self.complete(submission.ticket, outcome)
	}

	fn submit(&mut self) -> Submission {
		let ticket = Ticket(self.next_ticket);
		self.next_ticket += 1;
		let order = self.order();

		if let Some(superseded) = self.pending.replace(Pending {
			ticket,
			order: order.clone(),
		}) {
			trace_log!(
				"{}: submission {} superseded by {}",
				self.id,
				superseded.ticket,
				ticket
			);
		}
		self.buttons.set_busy(true);

		Submission {
			ticket,
			reference: self.config.reference.clone(),
			order,
		}
	}

	fn refresh_buttons(&mut self) {
		let equal = is_equal(&self.baseline, &self.order());
		self.buttons.apply(equal, &self.settings);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::buttons::MemoryButton;
	use crate::rows::MemoryRows;
	use rstest::rstest;

	fn controller(ids: &[&str]) -> ReorderController<MemoryRows, MemoryButton> {
		ReorderController::new(
			MemoryRows::new(ids.iter().copied()),
			ContainerConfig::default(),
			Settings::default(),
			Buttons::new(),
		)
		.unwrap()
	}

	#[rstest]
	fn test_new_marks_only_draggable_rows() {
		let rows = MemoryRows::from_optional_ids([None, Some("a".into()), Some("b".into())]);
		let controller: ReorderController<_, MemoryButton> = ReorderController::new(
			rows,
			ContainerConfig::default().with_row_skip(1),
			Settings::default(),
			Buttons::new(),
		)
		.unwrap();

		let all = controller.rows().rows();
		assert!(!controller.rows().is_draggable(&all[0]));
		assert!(controller.rows().is_draggable(&all[1]));
		assert!(controller.rows().is_draggable(&all[2]));
		assert_eq!(controller.baseline().as_slice(), ["a", "b"]);
	}

	#[rstest]
	fn test_new_rejects_missing_identifier() {
		let rows = MemoryRows::from_optional_ids([Some("a".into()), None]);
		let result: Result<ReorderController<_, MemoryButton>, _> = ReorderController::new(
			rows,
			ContainerConfig::default(),
			Settings::default(),
			Buttons::new(),
		);
		assert_eq!(
			result.unwrap_err(),
			ConfigurationError::MissingRowId { index: 1 }
		);
	}

	#[rstest]
	fn test_new_rejects_duplicate_identifier() {
		let result: Result<ReorderController<_, MemoryButton>, _> = ReorderController::new(
			MemoryRows::new(["a", "b", "a"]),
			ContainerConfig::default(),
			Settings::default(),
			Buttons::new(),
		);
		assert_eq!(
			result.unwrap_err(),
			ConfigurationError::DuplicateRowId("a".to_string())
		);
	}

	#[rstest]
	fn test_order_skips_row_that_lost_identifier() {
		let rows = MemoryRows::new(["a", "b", "c"]);
		let b = rows.find("b").unwrap();
		let mut controller: ReorderController<_, MemoryButton> = ReorderController::new(
			rows,
			ContainerConfig::default(),
			Settings::default(),
			Buttons::new(),
		)
		.unwrap();
		controller.rows.clear_id(&b);
		assert_eq!(controller.order().as_slice(), ["a", "c"]);
	}

	#[rstest]
	#[case("  custom  ", "custom")]
	#[case("x", "x")]
	fn test_set_dragged_class(#[case] name: &str, #[case] expected: &str) {
		let mut controller = controller(&["a"]);
		controller.set_dragged_class(name).unwrap();
		assert_eq!(controller.dragged_class(), expected);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn test_set_dragged_class_rejects_empty(#[case] name: &str) {
		let mut controller = controller(&["a"]);
		assert_eq!(
			controller.set_dragged_class(name),
			Err(ValidationError::EmptyClassName)
		);
		assert_eq!(controller.dragged_class(), DEFAULT_DRAGGED_CLASS);
	}

	#[rstest]
	fn test_set_dragged_class_during_drag_moves_class() {
		let mut controller = controller(&["a", "b"]);
		let session = DragSession::new();
		let a = controller.rows().find("a").unwrap();

		controller.drag_start(&session, &a);
		controller.set_dragged_class("lifted").unwrap();

		assert!(controller.rows().has_class(&a, "lifted"));
		assert!(!controller.rows().has_class(&a, DEFAULT_DRAGGED_CLASS));
	}

	#[rstest]
	fn test_drag_start_on_skipped_row_is_ignored() {
		let rows = MemoryRows::from_optional_ids([None, Some("a".into())]);
		let header = rows.get(0).unwrap();
		let mut controller: ReorderController<_, MemoryButton> = ReorderController::new(
			rows,
			ContainerConfig::default().with_row_skip(1),
			Settings::default(),
			Buttons::new(),
		)
		.unwrap();
		let session = DragSession::new();

		controller.drag_start(&session, &header);
		assert!(!controller.is_dragging());
		assert_eq!(session.origin(), None);
	}

	#[rstest]
	fn test_drag_over_without_drag_is_ignored() {
		let mut controller = controller(&["a", "b"]);
		let session = DragSession::new();
		session.begin(controller.id());
		let b = controller.rows().find("b").unwrap();
		assert!(!controller.drag_over(&session, &b));
	}

	#[rstest]
	fn test_repeated_hover_does_not_thrash() {
		let mut controller = controller(&["a", "b", "c"]);
		let session = DragSession::new();
		let a = controller.rows().find("a").unwrap();
		let b = controller.rows().find("b").unwrap();

		controller.drag_start(&session, &a);
		assert!(controller.drag_over(&session, &b));
		assert_eq!(controller.order().as_slice(), ["b", "a", "c"]);

		assert!(!controller.drag_over(&session, &b));
		assert!(!controller.drag_over(&session, &b));
		assert_eq!(controller.order().as_slice(), ["b", "a", "c"]);
	}

	#[rstest]
	fn test_hovering_dragged_row_rearms_target() {
		let mut controller = controller(&["a", "b", "c"]);
		let session = DragSession::new();
		let a = controller.rows().find("a").unwrap();
		let b = controller.rows().find("b").unwrap();

		controller.drag_start(&session, &a);
		controller.drag_over(&session, &b);
		assert!(!controller.drag_over(&session, &a));
		assert!(controller.drag_over(&session, &b));
		assert_eq!(controller.order().as_slice(), ["a", "b", "c"]);
	}

	#[rstest]
	fn test_stale_ticket_is_ignored() {
		let mut controller = ReorderController::<_, MemoryButton>::new(
			MemoryRows::new(["a", "b"]),
			ContainerConfig::default().with_mode(ActionMode::Instant),
			Settings::default(),
			Buttons::new(),
		)
		.unwrap();
		let session = DragSession::new();
		let a = controller.rows().find("a").unwrap();
		let b = controller.rows().find("b").unwrap();

		controller.drag_start(&session, &a);
		controller.drag_over(&session, &b);
		let first = controller.drag_end(&session).unwrap();

		controller.drag_start(&session, &a);
		controller.drag_over(&session, &b);
		let second = controller.drag_end(&session).unwrap();
		assert_ne!(first.ticket, second.ticket);

		controller.complete(first.ticket, Ok(())).unwrap();
		assert!(controller.is_pending());
		assert_eq!(controller.baseline().as_slice(), ["a", "b"]);

		controller.complete(second.ticket, Ok(())).unwrap();
		assert!(!controller.is_pending());
		assert_eq!(controller.baseline().as_slice(), ["a", "b"]);
		assert_eq!(second.order.as_slice(), ["a", "b"]);
	}
}
