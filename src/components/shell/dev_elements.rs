//! Floating code glyphs layered over the hero, nudged by the pointer.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::components::particle_field::{centred_offset, local_position};
use crate::dom::{self, ListenerHandle};
use crate::error::FxError;

const LAYER_CLASS: &str = "dev-elements";
const SHIFT: f64 = 10.0;

const GLYPH_CLASS: &str = "dev-element";

const CSS: &str = r#"
.dev-elements {
	position: absolute;
	inset: 0;
	z-index: 2;
	pointer-events: none;
}
.dev-element {
	position: absolute;
	color: rgba(255, 255, 255, 0.25);
	font-family: SFMono-Regular, Menlo, Monaco, Consolas, "Liberation Mono", "Courier New", monospace;
	font-weight: 500;
	text-shadow: 0 2px 8px rgba(0, 0, 0, 0.5);
	animation: devFloat 8s ease-in-out infinite;
	will-change: transform;
}
@keyframes devFloat {
	0%, 100% { transform: translateY(0) }
	50% { transform: translateY(-12px) }
}
"#;

/// One floating glyph: text, placement and animation phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
	pub text: &'static str,
	pub top_pct: f64,
	pub left_pct: f64,
	pub size_px: f64,
	pub delay_s: f64,
}

impl Glyph {
	const fn new(text: &'static str, top_pct: f64, left_pct: f64, size_px: f64, delay_s: f64) -> Self {
		Self {
			text,
			top_pct,
			left_pct,
			size_px,
			delay_s,
		}
	}

	pub fn inline_style(&self) -> String {
		format!(
			"top:{}%;left:{}%;font-size:{}px;animation-delay:{}s;",
			self.top_pct, self.left_pct, self.size_px, self.delay_s
		)
	}
}

pub const GLYPHS: [Glyph; 6] = [
	Glyph::new("</>", 18.0, 12.0, 28.0, 0.0),
	Glyph::new("{}", 28.0, 78.0, 26.0, 0.6),
	Glyph::new("[]", 64.0, 10.0, 24.0, 0.3),
	Glyph::new("λ", 70.0, 75.0, 30.0, 0.9),
	Glyph::new("⚙", 40.0, 50.0, 34.0, 0.2),
	Glyph::new("01", 22.0, 52.0, 22.0, 0.4),
];

/// Layer transform for a normalized pointer offset.
pub fn shift(nx: f64, ny: f64) -> String {
	format!("translate({}px, {}px)", nx * SHIFT, ny * SHIFT)
}

fn build_layer(document: &Document) -> Result<Element, FxError> {
	let layer = document.create_element("div")?;
	layer.set_class_name(LAYER_CLASS);
	for glyph in &GLYPHS {
		let span = document.create_element("span")?;
		span.set_class_name(GLYPH_CLASS);
		span.set_text_content(Some(glyph.text));
		span.set_attribute("style", &glyph.inline_style())?;
		layer.append_child(&span)?;
	}
	Ok(layer)
}

/// The glyph layer, its stylesheet and the listeners driving it.
///
/// Dropping it detaches the layer and the stylesheet.
pub struct DevElements {
	layer: HtmlElement,
	style: Element,
	_listeners: Vec<ListenerHandle>,
}

impl Drop for DevElements {
	fn drop(&mut self) {
		self.layer.remove();
		self.style.remove();
	}
}

pub fn install(document: &Document) -> Result<DevElements, FxError> {
	let hero = dom::query(document, ".hero")?;
	let style = dom::inject_style(document, CSS)?;
	let layer: HtmlElement = build_layer(document)?.unchecked_into();
	hero.append_child(&layer)?;

	let (hero_move, layer_move, layer_leave) = (hero.clone(), layer.clone(), layer.clone());
	let listeners = vec![
		dom::listen(&hero, "mousemove", move |ev: MouseEvent| {
			let rect = hero_move.get_bounding_client_rect();
			let (x, y) = local_position(
				ev.client_x() as f64,
				ev.client_y() as f64,
				rect.left(),
				rect.top(),
			);
			let (nx, ny) = centred_offset(x, y, rect.width(), rect.height());
			let _ = layer_move.style().set_property("transform", &shift(nx, ny));
		})?,
		dom::listen(&hero, "mouseleave", move |_: MouseEvent| {
			let _ = layer_leave.style().set_property("transform", "translate(0px, 0px)");
		})?,
	];

	Ok(DevElements {
		layer,
		style,
		_listeners: listeners,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shift_is_bounded_by_half_range() {
		assert_eq!(shift(0.5, -0.5), "translate(5px, -5px)");
		assert_eq!(shift(0.0, 0.0), "translate(0px, 0px)");
	}

	#[test]
	fn glyph_style_places_span() {
		assert_eq!(
			GLYPHS[1].inline_style(),
			"top:28%;left:78%;font-size:26px;animation-delay:0.6s;"
		);
	}

	#[test]
	fn glyphs_are_light_and_float_without_rotating() {
		assert!(CSS.contains("color: rgba(255, 255, 255, 0.25)"));
		assert!(CSS.contains("z-index: 2"));
		assert!(CSS.contains("devFloat 8s"));
		assert!(!CSS.contains("rotate"));
		assert!(CSS.contains(&format!(".{GLYPH_CLASS} {{")));
	}

	#[test]
	fn glyphs_are_distinct() {
		for (i, a) in GLYPHS.iter().enumerate() {
			assert!(GLYPHS[i + 1..].iter().all(|b| b.text != a.text));
		}
	}
}
