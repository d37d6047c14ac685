//! Renderer seam: the page surface the Translation Manager writes to.
//!
//! The manager never touches a real document directly; it speaks to this
//! trait. `PageModel` is the in-memory implementation used by the binary and
//! by tests.

use crate::i18n::{Direction, Language};

/// A page element tagged with a translation key (the `data-i18n` contract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedElement {
    /// Identifier used to address the element in `set_text`/`set_placeholder`.
    pub id: String,
    /// Translation key to look up in the active table.
    pub key: String,
    /// True for input elements that already carry a placeholder; translated
    /// strings go to the placeholder attribute instead of the text content.
    pub wants_placeholder: bool,
}

/// Write access to the rendered page.
pub trait Renderer {
    /// Set the document's text direction.
    fn set_direction(&mut self, direction: Direction);

    /// Set the document's language attribute.
    fn set_language(&mut self, lang: &Language);

    /// Update the language-selector control's displayed value, if the page
    /// has one.
    fn set_selector_value(&mut self, lang: &Language);

    /// Snapshot of all elements carrying a translation key.
    fn tagged_elements(&self) -> Vec<TaggedElement>;

    /// Write a translated string to an element's text content.
    fn set_text(&mut self, id: &str, value: &str);

    /// Write a translated string to an input element's placeholder.
    fn set_placeholder(&mut self, id: &str, value: &str);
}

/// One element of a [`PageModel`].
#[derive(Debug, Clone)]
pub struct PageElement {
    pub id: String,
    pub key: String,
    pub text: String,
    /// Present for input elements; translated strings land here.
    pub placeholder: Option<String>,
}

impl PageElement {
    /// A plain element whose text content gets translated.
    pub fn text(id: &str, key: &str, initial: &str) -> PageElement {
        PageElement {
            id: id.to_string(),
            key: key.to_string(),
            text: initial.to_string(),
            placeholder: None,
        }
    }

    /// An input element whose placeholder gets translated.
    pub fn input(id: &str, key: &str, initial_placeholder: &str) -> PageElement {
        PageElement {
            id: id.to_string(),
            key: key.to_string(),
            text: String::new(),
            placeholder: Some(initial_placeholder.to_string()),
        }
    }
}

/// In-memory page: a flat element list plus document-level attributes.
#[derive(Debug, Default)]
pub struct PageModel {
    elements: Vec<PageElement>,
    direction: Option<Direction>,
    language: Option<Language>,
    selector_value: Option<Language>,
}

impl PageModel {
    pub fn new(elements: Vec<PageElement>) -> PageModel {
        PageModel {
            elements,
            ..PageModel::default()
        }
    }

    pub fn element(&self, id: &str) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    pub fn selector_value(&self) -> Option<&Language> {
        self.selector_value.as_ref()
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut PageElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }
}

impl Renderer for PageModel {
    fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    fn set_language(&mut self, lang: &Language) {
        self.language = Some(lang.clone());
    }

    fn set_selector_value(&mut self, lang: &Language) {
        self.selector_value = Some(lang.clone());
    }

    fn tagged_elements(&self) -> Vec<TaggedElement> {
        self.elements
            .iter()
            .map(|e| TaggedElement {
                id: e.id.clone(),
                key: e.key.clone(),
                wants_placeholder: e.placeholder.is_some(),
            })
            .collect()
    }

    fn set_text(&mut self, id: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.text = value.to_string();
        }
    }

    fn set_placeholder(&mut self, id: &str, value: &str) {
        if let Some(element) = self.element_mut(id) {
            element.placeholder = Some(value.to_string());
        }
    }
}
