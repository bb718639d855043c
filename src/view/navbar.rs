//! Navigation bar state: the collapsible left menu on small screens.

/// Left navigation drawer state. Closed by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
	left_nav_open: bool,
}
impl NavbarState {
	/// Returns `true` while the drawer is shown.
	pub fn is_open(&self) -> bool {
		self.left_nav_open
	}

	/// Flips the drawer and returns the new state.
	pub fn toggle(&mut self) -> bool {
		self.left_nav_open = !self.left_nav_open;

		self.left_nav_open
	}

	/// Material icon name for the menu button.
	pub fn menu_icon(&self) -> &'static str {
		if self.left_nav_open { "close" } else { "menu" }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn icon_follows_drawer_state() {
		let mut navbar = NavbarState::default();

		assert_eq!(navbar.menu_icon(), "menu");
		assert!(navbar.toggle());
		assert_eq!(navbar.menu_icon(), "close");
		assert!(!navbar.toggle());
		assert_eq!(navbar.menu_icon(), "menu");
	}
}
