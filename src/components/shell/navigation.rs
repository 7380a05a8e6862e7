//! Navbar behaviour: scrolled state, mobile menu and active-link highlighting.

use web_sys::{Document, Event, HtmlElement, MouseEvent};

use crate::config::FxConfig;
use crate::dom::{self, ListenerHandle};
use crate::error::FxError;

/// Id of the last section whose top, less `offset`, has been scrolled past.
///
/// Sections are checked in document order, so a later match wins.
pub fn active_section(sections: &[(String, f64)], scroll_y: f64, offset: f64) -> Option<&str> {
	sections
		.iter()
		.filter(|(_, top)| scroll_y >= top - offset)
		.map(|(id, _)| id.as_str())
		.last()
}

fn set_class(el: &HtmlElement, class: &str, on: bool) {
	let list = el.class_list();
	let _ = if on {
		list.add_1(class)
	} else {
		list.remove_1(class)
	};
}

fn highlight_links(document: &Document, links: &[HtmlElement], scroll_y: f64, offset: f64) {
	let sections: Vec<(String, f64)> = dom::query_all(document, "section")
		.unwrap_or_default()
		.iter()
		.map(|s| (s.id(), s.offset_top() as f64))
		.collect();
	let current = active_section(&sections, scroll_y, offset).unwrap_or_default();
	let target = format!("#{current}");

	for link in links {
		let is_current = link.get_attribute("href").as_deref() == Some(target.as_str());
		set_class(link, "active", is_current);
	}
}

pub fn install(document: &Document, config: &FxConfig) -> Result<Vec<ListenerHandle>, FxError> {
	let window = dom::window()?;
	let links = dom::query_all(document, ".nav-link")?;
	let mut handles = Vec::new();

	let navbar = dom::query(document, ".navbar").ok();
	let (doc_scroll, win_scroll, links_scroll) = (document.clone(), window.clone(), links.clone());
	let (scrolled_after, active_offset) = (config.nav_scrolled_after, config.nav_active_offset);
	handles.push(dom::listen_passive(&window, "scroll", move |_: Event| {
		let y = dom::scroll_y(&win_scroll);
		if let Some(ref navbar) = navbar {
			set_class(navbar, "scrolled", y > scrolled_after);
		}
		highlight_links(&doc_scroll, &links_scroll, y, active_offset);
	})?);

	if let (Ok(hamburger), Ok(menu)) = (
		dom::query(document, ".hamburger"),
		dom::query(document, ".nav-menu"),
	) {
		let (burger_click, menu_click) = (hamburger.clone(), menu.clone());
		handles.push(dom::listen(&hamburger, "click", move |_: MouseEvent| {
			let _ = burger_click.class_list().toggle("active");
			let _ = menu_click.class_list().toggle("active");
		})?);

		for link in &links {
			let (burger_link, menu_link) = (hamburger.clone(), menu.clone());
			handles.push(dom::listen(link, "click", move |_: MouseEvent| {
				set_class(&burger_link, "active", false);
				set_class(&menu_link, "active", false);
			})?);
		}
	}

	Ok(handles)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sections() -> Vec<(String, f64)> {
		vec![
			("home".into(), 0.0),
			("about".into(), 800.0),
			("portfolio".into(), 1600.0),
		]
	}

	#[test]
	fn top_of_page_is_first_section() {
		assert_eq!(active_section(&sections(), 0.0, 200.0), Some("home"));
	}

	#[test]
	fn offset_activates_section_early() {
		assert_eq!(active_section(&sections(), 599.0, 200.0), Some("home"));
		assert_eq!(active_section(&sections(), 600.0, 200.0), Some("about"));
	}

	#[test]
	fn last_passed_section_wins() {
		assert_eq!(active_section(&sections(), 5000.0, 200.0), Some("portfolio"));
	}

	#[test]
	fn nothing_passed_yields_none() {
		let s = vec![("late".to_string(), 1000.0)];
		assert_eq!(active_section(&s, 0.0, 200.0), None);
	}
}
