//! Row orders and their comparison.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Identifiers of the draggable rows, top to bottom.
///
/// Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Order(Vec<String>);

impl Order {
	/// Creates an order from row identifiers.
	pub fn new<I, S>(ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(ids.into_iter().map(Into::into).collect())
	}

	/// Returns the identifiers as a slice.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// Consumes the order, returning the identifiers.
	pub fn into_inner(self) -> Vec<String> {
		self.0
	}
}

impl Deref for Order {
	type Target = [String];

	fn deref(&self) -> &[String] {
		&self.0
	}
}

impl From<Vec<String>> for Order {
	fn from(ids: Vec<String>) -> Self {
		Self(ids)
	}
}

impl FromIterator<String> for Order {
	fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a Order {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Sequence equality: same length and the same identifier at every position.
pub fn is_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
	a.len() == b.len() && a.iter().zip(b).all(|(left, right)| left == right)
}
