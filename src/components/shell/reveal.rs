//! Fade-in of content blocks as they scroll into view.

use std::time::Duration;

use leptos::prelude::set_timeout;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit,
};

use crate::dom;
use crate::error::FxError;

/// Blocks that start hidden and reveal on intersection.
pub const ANIMATED: &str =
	".portfolio-item, .resume-item, .about-text, .about-image, .contact-content, .section-title";
const PORTFOLIO_ITEM: &str = "portfolio-item";
const HERO_DELAY: Duration = Duration::from_millis(500);

/// Delay before the `index`-th portfolio item activates.
pub fn stagger(index: usize, step_ms: u64) -> Duration {
	Duration::from_millis(index as u64 * step_ms)
}

/// Observer plus the callback it calls into. Disconnects when dropped.
pub struct Reveal {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Reveal {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

fn on_intersect(entries: &js_sys::Array, portfolio: &[HtmlElement], step_ms: u64) {
	for entry in entries.iter() {
		let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
			continue;
		};
		if !entry.is_intersecting() {
			continue;
		}
		let target = entry.target();
		let _ = target.class_list().add_1("active");

		if target.class_list().contains(PORTFOLIO_ITEM) {
			for (i, item) in portfolio.iter().enumerate() {
				let item = item.clone();
				set_timeout(
					move || {
						let _ = item.class_list().add_1("active");
					},
					stagger(i, step_ms),
				);
			}
		}
	}
}

fn slide_in_hero(document: &Document) {
	let text = dom::query(document, ".hero-text").ok();
	let image = dom::query(document, ".hero-image").ok();
	set_timeout(
		move || {
			if let Some(text) = text {
				let _ = text.class_list().add_2("slide-in-left", "active");
			}
			if let Some(image) = image {
				let _ = image.class_list().add_2("slide-in-right", "active");
			}
		},
		HERO_DELAY,
	);
}

pub fn install(document: &Document, step_ms: u64) -> Result<Reveal, FxError> {
	let portfolio = dom::query_all(document, &format!(".{PORTFOLIO_ITEM}"))?;
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, _observer: IntersectionObserver| {
			on_intersect(&entries, &portfolio, step_ms);
		},
	);

	let init = IntersectionObserverInit::new();
	init.set_threshold(&JsValue::from_f64(0.1));
	init.set_root_margin("0px 0px -50px 0px");
	let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

	for el in dom::query_all(document, ANIMATED)? {
		let _ = el.class_list().add_1("fade-in");
		observer.observe(&el);
	}

	slide_in_hero(document);

	Ok(Reveal {
		observer,
		_callback: callback,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stagger_grows_linearly() {
		assert_eq!(stagger(0, 100), Duration::ZERO);
		assert_eq!(stagger(3, 100), Duration::from_millis(300));
	}
}
