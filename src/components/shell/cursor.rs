//! Ring cursor that follows the mouse on wide viewports.

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::Style;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::dom;

const CSS: &str = r#"
.custom-cursor {
	width: 20px;
	height: 20px;
	border: 2px solid #000;
	border-radius: 50%;
	position: fixed;
	pointer-events: none;
	z-index: 9999;
	transition: transform 0.1s ease;
	mix-blend-mode: difference;
}
.custom-cursor.hover {
	transform: scale(2);
}
"#;

/// Elements that enlarge the cursor while hovered.
pub const HOVER_TARGETS: &str = "a, button, .portfolio-item";

/// Half the ring size, so the ring centres on the pointer.
const CENTRE_OFFSET: f64 = 10.0;

/// Whether a viewport this wide gets the custom cursor.
pub fn enabled_for(viewport_width: f64, min_width: f64) -> bool {
	viewport_width > min_width
}

fn over_hover_target(ev: &MouseEvent) -> bool {
	ev.target()
		.and_then(|t| t.dyn_into::<Element>().ok())
		.and_then(|el| el.closest(HOVER_TARGETS).ok().flatten())
		.is_some()
}

fn viewport_width() -> f64 {
	dom::window().map(|w| dom::viewport(&w).0).unwrap_or(0.0)
}

/// Custom cursor, shown only when the viewport is wider than `min_width` at
/// load. Once the viewport shrinks to `min_width` or below it is removed for
/// the rest of the page's life.
#[component]
pub fn CustomCursor(#[prop(default = 768.0)] min_width: f64) -> impl IntoView {
	let (enabled, set_enabled) = signal(enabled_for(viewport_width(), min_width));
	let (position, set_position) = signal((0.0_f64, 0.0_f64));
	let (hover, set_hover) = signal(false);

	let _on_move = window_event_listener(ev::mousemove, move |ev| {
		set_position.set((
			ev.client_x() as f64 - CENTRE_OFFSET,
			ev.client_y() as f64 - CENTRE_OFFSET,
		));
	});
	let _on_over = window_event_listener(ev::mouseover, move |ev| {
		set_hover.set(over_hover_target(&ev));
	});
	let _on_resize = window_event_listener(ev::resize, move |_| {
		if !enabled_for(viewport_width(), min_width) {
			set_enabled.set(false);
		}
	});

	view! {
		<Show when=move || enabled.get()>
			<Style>{CSS}</Style>
			<div
				class="custom-cursor"
				class:hover=move || hover.get()
				style:left=move || format!("{}px", position.get().0)
				style:top=move || format!("{}px", position.get().1)
			></div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn desktop_gets_cursor() {
		assert!(enabled_for(1280.0, 768.0));
	}

	#[test]
	fn tablet_width_does_not() {
		assert!(!enabled_for(768.0, 768.0));
		assert!(!enabled_for(400.0, 768.0));
	}
}
