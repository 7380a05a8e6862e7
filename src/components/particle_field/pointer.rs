//! Pointer tracking for particle fields.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{DomRect, HtmlElement, MouseEvent};

use super::component::FieldSurface;
use crate::dom::{self, ListenerHandle};
use crate::error::FxError;

/// Converts viewport coordinates into coordinates local to a container whose
/// bounding box starts at `(left, top)`.
pub fn local_position(client_x: f64, client_y: f64, left: f64, top: f64) -> (f64, f64) {
	(client_x - left, client_y - top)
}

/// Pointer offset from the container centre, normalized to `-0.5..=0.5`.
///
/// Zero-sized boxes produce a zero offset instead of dividing by zero.
pub fn centred_offset(local_x: f64, local_y: f64, width: f64, height: f64) -> (f64, f64) {
	let norm = |v: f64, extent: f64| {
		if extent > 0.0 {
			v / extent - 0.5
		} else {
			0.0
		}
	};
	(norm(local_x, width), norm(local_y, height))
}

fn event_position(ev: &MouseEvent, rect: &DomRect) -> (f64, f64) {
	local_position(
		ev.client_x() as f64,
		ev.client_y() as f64,
		rect.left(),
		rect.top(),
	)
}

/// Wires pointer-move and pointer-leave on `container` into `surface`.
///
/// Every move updates the field synchronously; leaving the container clears
/// the pointer so repulsion stops immediately.
pub fn attach(
	container: &HtmlElement,
	surface: &Rc<RefCell<FieldSurface>>,
) -> Result<Vec<ListenerHandle>, FxError> {
	let (surface_mm, container_mm) = (surface.clone(), container.clone());
	let on_move = dom::listen(container, "mousemove", move |ev: MouseEvent| {
		let rect = container_mm.get_bounding_client_rect();
		let (x, y) = event_position(&ev, &rect);
		let mut s = surface_mm.borrow_mut();
		s.field.set_pointer(x, y);
		let (nx, ny) = centred_offset(x, y, rect.width(), rect.height());
		s.field.nudge(nx, ny);
	})?;

	let surface_ml = surface.clone();
	let on_leave = dom::listen(container, "mouseleave", move |_: MouseEvent| {
		surface_ml.borrow_mut().field.clear_pointer();
	})?;

	Ok(vec![on_move, on_leave])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn local_position_subtracts_origin() {
		assert_eq!(local_position(250.0, 140.0, 50.0, 40.0), (200.0, 100.0));
	}

	#[test]
	fn centred_offset_spans_half_units() {
		assert_eq!(centred_offset(0.0, 0.0, 400.0, 300.0), (-0.5, -0.5));
		assert_eq!(centred_offset(200.0, 150.0, 400.0, 300.0), (0.0, 0.0));
		assert_eq!(centred_offset(400.0, 300.0, 400.0, 300.0), (0.5, 0.5));
	}

	#[test]
	fn centred_offset_tolerates_empty_box() {
		assert_eq!(centred_offset(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
	}
}
