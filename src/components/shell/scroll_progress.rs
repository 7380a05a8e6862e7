//! Reading-progress bar pinned to the top of the viewport.

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::Style;

use crate::dom;

const CSS: &str = r#"
.scroll-progress {
	position: fixed;
	top: 0; left: 0;
	height: 3px;
	width: 100%;
	background: rgba(255,255,255,0.08);
	z-index: 2000;
	pointer-events: none;
}
.scroll-progress__bar {
	height: 100%;
	width: 100%;
	background: #fff;
	transform-origin: left center;
	transition: transform 0.08s linear;
}
"#;

/// Fraction of the scrollable distance already scrolled, in `[0, 1]`.
///
/// Documents shorter than the viewport report zero.
pub fn scroll_ratio(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
	let scrollable = scroll_height - viewport_height;
	if scrollable <= 0.0 {
		return 0.0;
	}
	(scroll_top / scrollable).clamp(0.0, 1.0)
}

fn current_ratio() -> f64 {
	let (Ok(window), Ok(document)) = (dom::window(), dom::document()) else {
		return 0.0;
	};
	let height = document
		.document_element()
		.map(|el| el.scroll_height() as f64)
		.unwrap_or(0.0);
	let (_, vh) = dom::viewport(&window);
	scroll_ratio(dom::scroll_y(&window), height, vh)
}

/// Thin bar whose horizontal scale tracks scroll position.
#[component]
pub fn ScrollProgress() -> impl IntoView {
	let (ratio, set_ratio) = signal(current_ratio());
	let update = move || set_ratio.set(current_ratio());
	let _on_scroll = window_event_listener(ev::scroll, move |_| update());
	let _on_resize = window_event_listener(ev::resize, move |_| update());

	view! {
		<Style>{CSS}</Style>
		<div class="scroll-progress">
			<div
				class="scroll-progress__bar"
				style:transform=move || format!("scaleX({})", ratio.get())
			></div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn halfway_down() {
		assert_eq!(scroll_ratio(500.0, 2000.0, 1000.0), 0.5);
	}

	#[test]
	fn short_document_reports_zero() {
		assert_eq!(scroll_ratio(0.0, 600.0, 800.0), 0.0);
		assert_eq!(scroll_ratio(0.0, 800.0, 800.0), 0.0);
	}

	#[test]
	fn overscroll_is_clamped() {
		assert_eq!(scroll_ratio(1200.0, 2000.0, 1000.0), 1.0);
		assert_eq!(scroll_ratio(-40.0, 2000.0, 1000.0), 0.0);
	}
}
