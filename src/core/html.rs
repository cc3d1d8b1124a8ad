// src/core/html.rs
//! Document query facility.
//!
//! Thin read-only layer over `scraper`: parse bytes into a tree, select by CSS,
//! read attributes and text, and re-parse markup that the page stores inside an
//! attribute value (tooltips, the API key snippet, the empire energy cell).
//!
//! Selection mirrors how the extractors think about the page: a `Node` scopes
//! every lookup to its descendants, `nth` picks the n-th match of a selector in
//! document order, and a missing match is `None`, never an error. The only
//! error a lookup can produce is a selector that does not compile.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::{ExtractError, Result};

pub struct Doc {
    html: Html,
}

impl Doc {
    /// Parse a full page. Invalid UTF-8 is the only thing html5ever cannot
    /// recover from, so that is what "unparsable" means here.
    pub fn parse(bytes: &[u8]) -> Result<Doc> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ExtractError::Unparsable(e.to_string()))?;
        Ok(Doc { html: Html::parse_document(text) })
    }

    /// Parse an inline snippet (usually an attribute value).
    pub fn parse_fragment(markup: &str) -> Doc {
        Doc { html: Html::parse_fragment(markup) }
    }

    pub fn root(&self) -> Node<'_> {
        Node(self.html.root_element())
    }

    pub fn select(&self, selector: &str) -> Result<Vec<Node<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).map(Node).collect())
    }

    pub fn select_first(&self, selector: &str) -> Result<Option<Node<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).next().map(Node))
    }

    pub fn nth(&self, selector: &str, index: usize) -> Result<Option<Node<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).nth(index).map(Node))
    }

    pub fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.select_first(selector)?.is_some())
    }

    /// Trimmed text of the first match, or "" when nothing matches.
    pub fn text_of(&self, selector: &str) -> Result<String> {
        Ok(self.select_first(selector)?.map(|n| n.text()).unwrap_or_default())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    pub fn select(&self, selector: &str) -> Result<Vec<Node<'a>>> {
        let sel = compile(selector)?;
        Ok(self.0.select(&sel).map(Node).collect())
    }

    pub fn select_first(&self, selector: &str) -> Result<Option<Node<'a>>> {
        let sel = compile(selector)?;
        Ok(self.0.select(&sel).next().map(Node))
    }

    pub fn nth(&self, selector: &str, index: usize) -> Result<Option<Node<'a>>> {
        let sel = compile(selector)?;
        Ok(self.0.select(&sel).nth(index).map(Node))
    }

    pub fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.select_first(selector)?.is_some())
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    pub fn attr_or(&self, name: &str, default: &'a str) -> &'a str {
        self.attr(name).unwrap_or(default)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.value().classes().any(|c| c == class)
    }

    /// All descendant text, concatenated as-is.
    pub fn raw_text(&self) -> String {
        self.0.text().collect()
    }

    /// Descendant text with whitespace collapsed and trimmed.
    pub fn text(&self) -> String {
        normalize_ws(&self.raw_text())
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.0.parent().and_then(ElementRef::wrap).map(Node)
    }

    /// Re-parse the value of `name` as markup. A missing attribute gives an
    /// empty document, so lookups inside it simply find nothing.
    pub fn attr_doc(&self, name: &str) -> Doc {
        Doc::parse_fragment(self.attr_or(name, ""))
    }
}

/// True when any node in the set carries `class`.
pub fn any_has_class(nodes: &[Node<'_>], class: &str) -> bool {
    nodes.iter().any(|n| n.has_class(class))
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector(format!("{selector:?}: {e:?}")))
}
