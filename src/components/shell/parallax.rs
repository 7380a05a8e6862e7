//! Hero parallax driven by scroll position and mouse offset.
//!
//! Updates are coalesced: any number of scroll or mouse events between two
//! refreshes produce a single style write on the next animation frame.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use crate::dom::{self, ListenerHandle};
use crate::error::FxError;

/// How strongly a layer follows scroll and mouse movement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Depth {
	pub scroll: f64,
	pub mouse: f64,
}

pub const IMAGE_DEPTH: Depth = Depth {
	scroll: 0.3,
	mouse: 0.02,
};
pub const TEXT_DEPTH: Depth = Depth {
	scroll: 0.15,
	mouse: 0.01,
};

/// Translation of a layer for the given scroll and mouse offsets.
pub fn layer_offset(depth: Depth, scroll_y: f64, mouse: (f64, f64)) -> (f64, f64) {
	(
		mouse.0 * depth.mouse,
		-scroll_y * depth.scroll + mouse.1 * depth.mouse,
	)
}

/// Hero content opacity: fully visible at the top, gone after 80% of a viewport.
pub fn hero_fade(scroll_y: f64, viewport_height: f64) -> f64 {
	if viewport_height <= 0.0 {
		return 1.0;
	}
	(1.0 - scroll_y / (viewport_height * 0.8)).max(0.0)
}

struct Layers {
	image: Option<HtmlElement>,
	text: Option<HtmlElement>,
	content: Option<HtmlElement>,
	mouse: Cell<(f64, f64)>,
	ticking: Cell<bool>,
}

impl Layers {
	fn apply(&self) {
		let Ok(window) = dom::window() else {
			return;
		};
		let y = dom::scroll_y(&window);
		let mouse = self.mouse.get();

		for (layer, depth) in [(&self.image, IMAGE_DEPTH), (&self.text, TEXT_DEPTH)] {
			if let Some(el) = layer {
				let (x, dy) = layer_offset(depth, y, mouse);
				let _ = el
					.style()
					.set_property("transform", &format!("translate3d({x}px, {dy}px, 0)"));
			}
		}
		if let Some(ref content) = self.content {
			let (_, vh) = dom::viewport(&window);
			let _ = content
				.style()
				.set_property("opacity", &hero_fade(y, vh).to_string());
		}
		self.ticking.set(false);
	}
}

/// Owns the parallax listeners and the reusable frame callback.
pub struct Parallax {
	_listeners: Vec<ListenerHandle>,
	_frame: Rc<Closure<dyn FnMut()>>,
}

pub fn install(document: &Document) -> Result<Parallax, FxError> {
	let window = dom::window()?;
	let layers = Rc::new(Layers {
		image: dom::query(document, ".hero-image").ok(),
		text: dom::query(document, ".hero-text").ok(),
		content: dom::query(document, ".hero-content").ok(),
		mouse: Cell::new((0.0, 0.0)),
		ticking: Cell::new(false),
	});

	let layers_frame = layers.clone();
	let frame: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::new(move || layers_frame.apply()));

	let request_tick = {
		let (layers, frame) = (layers.clone(), Rc::downgrade(&frame));
		Rc::new(move || {
			if layers.ticking.get() {
				return;
			}
			let (Some(frame), Some(win)) = (frame.upgrade(), web_sys::window()) else {
				return;
			};
			let callback: &Closure<dyn FnMut()> = &frame;
			if win
				.request_animation_frame(callback.as_ref().unchecked_ref())
				.is_ok()
			{
				layers.ticking.set(true);
			}
		})
	};

	let mut listeners = Vec::new();
	let tick_scroll = request_tick.clone();
	listeners.push(dom::listen_passive(&window, "scroll", move |_: Event| {
		(*tick_scroll)()
	})?);

	if let Ok(hero) = dom::query(document, ".hero") {
		let (hero_mm, layers_mm) = (hero.clone(), layers.clone());
		listeners.push(dom::listen(&hero, "mousemove", move |ev: MouseEvent| {
			let (w, h) = (hero_mm.offset_width() as f64, hero_mm.offset_height() as f64);
			layers_mm.mouse.set((
				ev.client_x() as f64 - w / 2.0,
				ev.client_y() as f64 - h / 2.0,
			));
			(*request_tick)()
		})?);
	}

	Ok(Parallax {
		_listeners: listeners,
		_frame: frame,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn image_moves_faster_than_text() {
		let image = layer_offset(IMAGE_DEPTH, 100.0, (0.0, 0.0));
		let text = layer_offset(TEXT_DEPTH, 100.0, (0.0, 0.0));
		assert!((image.1 - -30.0).abs() < 1e-9);
		assert!((text.1 - -15.0).abs() < 1e-9);
	}

	#[test]
	fn mouse_offset_scales_by_depth() {
		let (x, y) = layer_offset(IMAGE_DEPTH, 0.0, (100.0, -50.0));
		assert!((x - 2.0).abs() < 1e-9);
		assert!((y - -1.0).abs() < 1e-9);
	}

	#[test]
	fn hero_fades_out_over_most_of_a_viewport() {
		assert_eq!(hero_fade(0.0, 1000.0), 1.0);
		assert!((hero_fade(400.0, 1000.0) - 0.5).abs() < 1e-9);
		assert_eq!(hero_fade(2000.0, 1000.0), 0.0);
	}

	#[test]
	fn hero_fade_without_viewport_stays_visible() {
		assert_eq!(hero_fade(300.0, 0.0), 1.0);
	}
}
