//! Open/closed state for modal dialogs.

/// Keys a dialog reacts to while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKey {
	/// Escape requests closing.
	Escape,
	/// Anything else is ignored.
	Other,
}

/// Modal dialog visibility. Closed by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DialogState {
	open: bool,
}
impl DialogState {
	/// Returns `true` while the dialog is shown.
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Shows the dialog.
	pub fn open(&mut self) {
		self.open = true;
	}

	/// Hides the dialog.
	pub fn close(&mut self) {
		self.open = false;
	}

	/// Flips visibility and returns the new state.
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;

		self.open
	}

	/// Handles a key press, returning `true` when it closed the dialog.
	///
	/// Keys are only observed while the dialog is open.
	pub fn handle_key(&mut self, key: DialogKey) -> bool {
		if self.open && key == DialogKey::Escape {
			self.close();

			return true;
		}

		false
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn escape_closes_only_open_dialogs() {
		let mut dialog = DialogState::default();

		assert!(!dialog.handle_key(DialogKey::Escape));

		dialog.open();

		assert!(!dialog.handle_key(DialogKey::Other));
		assert!(dialog.is_open());
		assert!(dialog.handle_key(DialogKey::Escape));
		assert!(!dialog.is_open());
	}

	#[test]
	fn toggle_flips_visibility() {
		let mut dialog = DialogState::default();

		assert!(dialog.toggle());
		assert!(!dialog.toggle());
	}
}
