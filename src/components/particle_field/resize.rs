//! Window resize propagation.

use std::cell::RefCell;
use std::rc::Weak;

use log::debug;
use web_sys::Event;

use super::component::FieldSurface;
use crate::dom::{self, ListenerHandle};
use crate::error::FxError;

/// Rebuilds every live field whenever the window is resized.
///
/// Fields are held weakly, so a disposed field simply drops out. Each resize
/// event triggers an immediate rebuild with no debouncing.
pub struct ResizeAdapter {
	_listener: ListenerHandle,
}

impl ResizeAdapter {
	pub fn attach(surfaces: Vec<Weak<RefCell<FieldSurface>>>) -> Result<Self, FxError> {
		let window = dom::window()?;
		let listener = dom::listen(&window, "resize", move |_: Event| {
			for surface in live(&surfaces) {
				if let Err(e) = surface.borrow_mut().resize() {
					debug!("portfolio-fx: resize: {e}");
				}
			}
		})?;
		Ok(Self {
			_listener: listener,
		})
	}
}

/// Upgrades the handles that still point at a live value.
fn live<T>(handles: &[Weak<T>]) -> impl Iterator<Item = std::rc::Rc<T>> + '_ {
	handles.iter().filter_map(Weak::upgrade)
}

#[cfg(test)]
mod tests {
	use std::rc::Rc;

	use super::*;

	#[test]
	fn dropped_values_are_skipped() {
		let kept = Rc::new(1);
		let dropped = Rc::new(2);
		let handles = vec![Rc::downgrade(&kept), Rc::downgrade(&dropped)];
		drop(dropped);

		let seen: Vec<i32> = live(&handles).map(|v| *v).collect();
		assert_eq!(seen, vec![1]);
	}
}
