//! Ordered row abstraction
//!
//! [`RowList`] is the only way the controller reads or changes row positions.
//! The browser implementation works on `<tr>` elements; [`MemoryRows`] keeps
//! rows in a `Vec` for tests and headless use.

use std::collections::{BTreeSet, HashMap, HashSet};

/// An ordered collection of rows that can be repositioned.
pub trait RowList {
	/// Handle to one row. Equality is row identity, not identifier equality.
	type Row: Clone + PartialEq;

	/// Every row of the container in document order, skipped rows included.
	fn rows(&self) -> Vec<Self::Row>;

	/// The row's identifier, if it carries one.
	fn row_id(&self, row: &Self::Row) -> Option<String>;

	/// Moves `row` so it sits immediately before `anchor`.
	///
	/// Moving a row before itself is a no-op.
	fn move_before(&mut self, row: &Self::Row, anchor: &Self::Row);

	/// Moves `row` so it sits immediately after `anchor`.
	///
	/// Moving a row after itself is a no-op.
	fn move_after(&mut self, row: &Self::Row, anchor: &Self::Row);

	/// Marks the row as draggable.
	fn set_draggable(&mut self, row: &Self::Row);

	/// Adds or removes a CSS class on the row.
	fn set_class(&mut self, row: &Self::Row, class: &str, on: bool);
}

/// Handle to a row of [`MemoryRows`].
#[derive(Debug, Clone)]
pub struct MemoryRow {
	key: usize,
	id: Option<String>,
}

impl PartialEq for MemoryRow {
	fn eq(&self, other: &Self) -> bool {
		self.key == other.key
	}
}

impl Eq for MemoryRow {}

/// In-memory [`RowList`].
///
/// ```
/// use dragreorder_core::{MemoryRows, RowList};
///
/// let mut rows = MemoryRows::new(["a", "b", "c"]);
/// let a = rows.find("a").unwrap();
/// let c = rows.find("c").unwrap();
/// rows.move_after(&a, &c);
/// assert_eq!(rows.ids(), ["b", "c", "a"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryRows {
	rows: Vec<MemoryRow>,
	draggable: HashSet<usize>,
	classes: HashMap<usize, BTreeSet<String>>,
}

impl MemoryRows {
	/// Creates rows carrying the given identifiers, top to bottom.
	pub fn new<I, S>(ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::from_optional_ids(ids.into_iter().map(|id| Some(id.into())))
	}

	/// Creates rows where `None` is a row without identifier (e.g. a header).
	pub fn from_optional_ids<I>(ids: I) -> Self
	where
		I: IntoIterator<Item = Option<String>>,
	{
		let rows = ids
			.into_iter()
			.enumerate()
			.map(|(key, id)| MemoryRow { key, id })
			.collect();
		Self {
			rows,
			..Self::default()
		}
	}

	/// Finds the first row carrying `id`.
	pub fn find(&self, id: &str) -> Option<MemoryRow> {
		self.rows
			.iter()
			.find(|row| row.id.as_deref() == Some(id))
			.cloned()
	}

	/// Returns the row at `index`.
	pub fn get(&self, index: usize) -> Option<MemoryRow> {
		self.rows.get(index).cloned()
	}

	/// Identifiers of every row, rows without identifier rendered as `""`.
	pub fn ids(&self) -> Vec<String> {
		self.rows
			.iter()
			.map(|row| row.id.clone().unwrap_or_default())
			.collect()
	}

	/// Number of rows, skipped rows included.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Whether there are no rows at all.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Whether [`RowList::set_draggable`] was called for `row`.
	pub fn is_draggable(&self, row: &MemoryRow) -> bool {
		self.draggable.contains(&row.key)
	}

	/// Whether `row` currently carries `class`.
	pub fn has_class(&self, row: &MemoryRow, class: &str) -> bool {
		self.classes
			.get(&row.key)
			.is_some_and(|classes| classes.contains(class))
	}

	/// Removes the identifier from `row`, as a script editing the page might.
	pub fn clear_id(&mut self, row: &MemoryRow) {
		if let Some(target) = self.rows.iter_mut().find(|r| r.key == row.key) {
			target.id = None;
		}
	}

	fn index_of(&self, row: &MemoryRow) -> Option<usize> {
		self.rows.iter().position(|candidate| candidate.key == row.key)
	}

	fn relocate(&mut self, row: &MemoryRow, anchor: &MemoryRow, after: bool) {
		if row == anchor {
			return;
		}
		let (Some(from), Some(_)) = (self.index_of(row), self.index_of(anchor)) else {
			return;
		};
		let moved = self.rows.remove(from);
		// Anchor position shifts once the row is removed.
		let Some(to) = self.index_of(anchor) else {
			self.rows.insert(from, moved);
			return;
		};
		let to = if after { to + 1 } else { to };
		self.rows.insert(to, moved);
	}
}

impl RowList for MemoryRows {
	type Row = MemoryRow;

	fn rows(&self) -> Vec<MemoryRow> {
		self.rows.clone()
	}

	fn row_id(&self, row: &MemoryRow) -> Option<String> {
		self.rows
			.iter()
			.find(|candidate| candidate.key == row.key)
			.and_then(|candidate| candidate.id.clone())
	}

	fn move_before(&mut self, row: &MemoryRow, anchor: &MemoryRow) {
		self.relocate(row, anchor, false);
	}

	fn move_after(&mut self, row: &MemoryRow, anchor: &MemoryRow) {
		self.relocate(row, anchor, true);
	}

	fn set_draggable(&mut self, row: &MemoryRow) {
		self.draggable.insert(row.key);
	}

	fn set_class(&mut self, row: &MemoryRow, class: &str, on: bool) {
		let classes = self.classes.entry(row.key).or_default();
		if on {
			classes.insert(class.to_string());
		} else {
			classes.remove(class);
		}
	}
}
