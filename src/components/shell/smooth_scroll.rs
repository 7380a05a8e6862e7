//! In-page anchor links scroll smoothly instead of jumping.

use web_sys::{Document, HtmlElement, MouseEvent};
use wasm_bindgen::JsCast;

use crate::dom::{self, ListenerHandle};
use crate::error::FxError;

/// Element id an in-page `href` points at, if any.
pub fn anchor_target(href: &str) -> Option<&str> {
	href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts `element_top` just below a fixed header of
/// height `offset`.
pub fn scroll_target(element_top: f64, offset: f64) -> f64 {
	element_top - offset
}

pub fn install(document: &Document, offset: f64) -> Result<Vec<ListenerHandle>, FxError> {
	let links = dom::query_all(document, "a[href^=\"#\"]")?;

	links
		.iter()
		.map(|link| {
			let (link_click, doc) = (link.clone(), document.clone());
			dom::listen(link, "click", move |ev: MouseEvent| {
				ev.prevent_default();
				let href = link_click.get_attribute("href").unwrap_or_default();
				let target = anchor_target(&href)
					.and_then(|id| doc.get_element_by_id(id))
					.and_then(|el| el.dyn_into::<HtmlElement>().ok());
				if let (Some(target), Ok(window)) = (target, dom::window()) {
					dom::smooth_scroll_to(&window, scroll_target(target.offset_top() as f64, offset));
				}
			})
		})
		.collect()
}
