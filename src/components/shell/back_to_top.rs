//! Floating button that returns to the top of the page.

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::Style;

use crate::dom;

const CSS: &str = r#"
.back-to-top {
	position: fixed;
	right: 20px;
	bottom: 20px;
	width: 42px; height: 42px;
	border-radius: 50%;
	border: 1px solid rgba(255,255,255,0.3);
	background: rgba(0,0,0,0.4);
	color: #fff;
	display: grid; place-items: center;
	font-size: 18px;
	cursor: pointer;
	z-index: 1500;
	opacity: 0; transform: translateY(10px);
	transition: opacity .25s ease, transform .25s ease;
	backdrop-filter: blur(6px);
}
.back-to-top.visible { opacity: 1; transform: translateY(0); }
"#;

/// Whether the button should show after scrolling `scroll_y` pixels.
pub fn should_show(scroll_y: f64, viewport_height: f64, ratio: f64) -> bool {
	scroll_y > viewport_height * ratio
}

fn visible_now(ratio: f64) -> bool {
	dom::window()
		.map(|w| should_show(dom::scroll_y(&w), dom::viewport(&w).1, ratio))
		.unwrap_or(false)
}

/// Round button that fades in once the visitor has scrolled past `ratio`
/// of a viewport height.
#[component]
pub fn BackToTop(#[prop(default = 0.8)] ratio: f64) -> impl IntoView {
	let (visible, set_visible) = signal(visible_now(ratio));
	let _on_scroll = window_event_listener(ev::scroll, move |_| {
		set_visible.set(visible_now(ratio));
	});

	let on_click = move |_| {
		if let Ok(window) = dom::window() {
			dom::smooth_scroll_to(&window, 0.0);
		}
	};

	view! {
		<Style>{CSS}</Style>
		<button
			class="back-to-top"
			class:visible=move || visible.get()
			aria-label="Volver arriba"
			on:click=on_click
		>
			"↑"
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hidden_near_top() {
		assert!(!should_show(0.0, 900.0, 0.8));
		assert!(!should_show(720.0, 900.0, 0.8));
	}

	#[test]
	fn shown_past_threshold() {
		assert!(should_show(721.0, 900.0, 0.8));
	}
}
