//! Collapses the about section to one column when it has no image.

use web_sys::Document;

use crate::dom;
use crate::error::FxError;

/// Whether the about content should span a single column.
///
/// `image` is the image column's trimmed markup and rendered height, or
/// `None` when the column does not exist.
pub fn single_column(image: Option<(&str, i32)>) -> bool {
	match image {
		None => true,
		Some((html, height)) => html.is_empty() || height == 0,
	}
}

pub fn apply(document: &Document) -> Result<bool, FxError> {
	let content = dom::query(document, ".about-content")?;
	let image = dom::query(document, ".about-image").ok();
	let markup = image.as_ref().map(|el| el.inner_html());
	let one = single_column(
		image
			.as_ref()
			.zip(markup.as_deref())
			.map(|(el, html)| (html.trim(), el.offset_height())),
	);

	let classes = content.class_list();
	if one {
		classes.add_1("one-column")?;
	} else {
		classes.remove_1("one-column")?;
	}
	Ok(one)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_image_collapses() {
		assert!(single_column(None));
	}

	#[test]
	fn empty_or_hidden_image_collapses() {
		assert!(single_column(Some(("", 320))));
		assert!(single_column(Some(("<img src=\"me.jpg\">", 0))));
	}

	#[test]
	fn visible_image_keeps_two_columns() {
		assert!(!single_column(Some(("<img src=\"me.jpg\">", 320))));
	}
}
