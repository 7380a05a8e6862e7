//! Portfolio category filter buttons.

use std::time::Duration;

use leptos::prelude::set_timeout;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::dom::{self, ListenerHandle};
use crate::error::FxError;

/// Filter value that matches every item.
pub const ALL: &str = "all";

const SETTLE: Duration = Duration::from_millis(50);
const COLLAPSE: Duration = Duration::from_millis(300);

/// Whether an item tagged `category` stays visible under `filter`.
pub fn matches_filter(filter: &str, category: Option<&str>) -> bool {
	filter == ALL || category == Some(filter)
}

fn set_styles(item: &HtmlElement, styles: &[(&str, &str)]) {
	let css = item.style();
	for (name, value) in styles {
		let _ = css.set_property(name, value);
	}
}

fn show(item: HtmlElement) {
	set_styles(
		&item,
		&[
			("display", "block"),
			("opacity", "0"),
			("transform", "translateY(20px)"),
		],
	);
	set_timeout(
		move || set_styles(&item, &[("opacity", "1"), ("transform", "translateY(0)")]),
		SETTLE,
	);
}

fn hide(item: HtmlElement) {
	set_styles(&item, &[("opacity", "0"), ("transform", "translateY(-20px)")]);
	set_timeout(move || set_styles(&item, &[("display", "none")]), COLLAPSE);
}

fn apply_filter(items: &[HtmlElement], filter: &str, stagger_ms: u64) {
	for (i, item) in items.iter().enumerate() {
		let visible = matches_filter(filter, item.get_attribute("data-category").as_deref());
		let item = item.clone();
		set_timeout(
			move || if visible { show(item) } else { hide(item) },
			Duration::from_millis(i as u64 * stagger_ms),
		);
	}
}

pub fn install(document: &Document, stagger_ms: u64) -> Result<Vec<ListenerHandle>, FxError> {
	let buttons = dom::query_all(document, ".filter-btn")?;
	let items = dom::query_all(document, ".portfolio-item")?;

	buttons
		.iter()
		.map(|btn| {
			let (btn_click, all_buttons, items) = (btn.clone(), buttons.clone(), items.clone());
			dom::listen(btn, "click", move |_: MouseEvent| {
				let filter = btn_click
					.get_attribute("data-filter")
					.unwrap_or_else(|| ALL.to_string());
				for b in &all_buttons {
					let _ = b.class_list().remove_1("active");
				}
				let _ = btn_click.class_list().add_1("active");
				apply_filter(&items, &filter, stagger_ms);
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn all_matches_everything() {
		assert!(matches_filter("all", Some("web")));
		assert!(matches_filter("all", None));
	}

	#[test]
	fn category_must_match_exactly() {
		assert!(matches_filter("web", Some("web")));
		assert!(!matches_filter("web", Some("mobile")));
		assert!(!matches_filter("web", None));
	}
}
