// src/extraction/lookup.rs
//! Scoped "find the node or fail" primitives shared by every section extractor

use crate::error::ResumeError;
use scraper::{ElementRef, Selector};

/// Compile one of the fixed selectors. Only called from `Lazy` statics.
pub(crate) fn compile(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// First node under `scope` matching `selector`, in document order
pub fn find_one<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

pub fn required<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    field: &'static str,
) -> Result<ElementRef<'a>, ResumeError> {
    find_one(scope, selector).ok_or(ResumeError::MissingField { field })
}

/// Concatenated text of every descendant text node, untrimmed
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

pub fn required_text(
    scope: ElementRef<'_>,
    selector: &Selector,
    field: &'static str,
) -> Result<String, ResumeError> {
    required(scope, selector, field).map(|el| text_of(el).trim().to_string())
}

/// Same as [`required_text`] without trimming, for fields parsed further
pub fn required_raw_text(
    scope: ElementRef<'_>,
    selector: &Selector,
    field: &'static str,
) -> Result<String, ResumeError> {
    required(scope, selector, field).map(text_of)
}

/// Inner markup of the matched node, tags included
pub fn required_markup(
    scope: ElementRef<'_>,
    selector: &Selector,
    field: &'static str,
) -> Result<String, ResumeError> {
    required(scope, selector, field).map(|el| el.inner_html())
}

/// Attribute value of the matched node. A present node without the
/// attribute is reported separately from a missing node.
pub fn required_attr(
    scope: ElementRef<'_>,
    selector: &Selector,
    attribute: &'static str,
    field: &'static str,
) -> Result<String, ResumeError> {
    let element = required(scope, selector, field)?;
    element
        .value()
        .attr(attribute)
        .map(str::to_string)
        .ok_or(ResumeError::MissingAttribute { field, attribute })
}
