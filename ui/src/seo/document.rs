//! Metadata ports: an in-memory document model and the live DOM.

use std::collections::BTreeMap;

use crate::error::PageError;

use super::{DocumentMetadata, MetadataPort, STRUCTURED_DATA_SCHEMA};

/// One element in the document head.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadElement {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub text: String,
}

impl HeadElement {
    fn new(tag: &str, selector: &[(&str, &str)]) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: selector
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            text: String::new(),
        }
    }

    fn matches(&self, tag: &str, selector: &[(&str, &str)]) -> bool {
        self.tag == tag
            && selector
                .iter()
                .all(|(name, value)| self.attributes.get(*name).map(String::as_str) == Some(*value))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Minimal document model: title, root `lang` and a flat head.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryDocument {
    pub title: String,
    pub lang: Option<String>,
    pub head: Vec<HeadElement>,
}

impl InMemoryDocument {
    /// First head element matching `tag` and every `(attribute, value)` pair.
    pub fn find(&self, tag: &str, selector: &[(&str, &str)]) -> Option<&HeadElement> {
        self.head.iter().find(|el| el.matches(tag, selector))
    }

    pub fn count(&self, tag: &str, selector: &[(&str, &str)]) -> usize {
        self.head.iter().filter(|el| el.matches(tag, selector)).count()
    }

    /// `content` of `<meta {attribute}="{key}">`.
    pub fn meta_content(&self, attribute: &str, key: &str) -> Option<&str> {
        self.find("meta", &[(attribute, key)])
            .and_then(|el| el.attribute("content"))
    }

    pub fn canonical_href(&self) -> Option<&str> {
        self.find("link", &[("rel", "canonical")])
            .and_then(|el| el.attribute("href"))
    }

    pub fn structured_data(&self) -> Option<&str> {
        self.find("script", &structured_data_selector())
            .map(|el| el.text.as_str())
    }

    fn upsert(&mut self, tag: &str, selector: &[(&str, &str)]) -> &mut HeadElement {
        match self.head.iter().position(|el| el.matches(tag, selector)) {
            Some(index) => &mut self.head[index],
            None => {
                self.head.push(HeadElement::new(tag, selector));
                let last = self.head.len() - 1;
                &mut self.head[last]
            }
        }
    }
}

fn structured_data_selector() -> [(&'static str, &'static str); 2] {
    [("type", "application/ld+json"), ("data-schema", STRUCTURED_DATA_SCHEMA)]
}

impl MetadataPort for InMemoryDocument {
    fn apply(&mut self, metadata: &DocumentMetadata) -> Result<(), PageError> {
        self.title = metadata.title.clone();

        for tag in &metadata.meta {
            let el = self.upsert("meta", &[(tag.attribute.as_str(), tag.key)]);
            el.attributes
                .insert("content".to_string(), tag.content.clone());
        }

        let link = self.upsert("link", &[("rel", "canonical")]);
        link.attributes
            .insert("href".to_string(), metadata.canonical_url.clone());

        let script = self.upsert("script", &structured_data_selector());
        script.text = metadata.structured_data.clone();

        self.lang = Some(metadata.lang.clone());
        Ok(())
    }
}

/// The live browser document.
#[cfg(target_arch = "wasm32")]
pub struct WebDocument {
    document: web_sys::Document,
}

#[cfg(target_arch = "wasm32")]
impl WebDocument {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    /// Factory suitable for [`super::register_metadata_port`].
    pub fn port() -> Option<Box<dyn MetadataPort>> {
        Self::current().map(|doc| Box::new(doc) as Box<dyn MetadataPort>)
    }

    fn upsert(
        &self,
        head: &web_sys::HtmlHeadElement,
        tag: &str,
        selector: &[(&str, &str)],
    ) -> Result<web_sys::Element, PageError> {
        let query = selector
            .iter()
            .fold(tag.to_string(), |acc, (name, value)| format!("{acc}[{name}=\"{value}\"]"));
        if let Some(existing) = self.document.query_selector(&query).map_err(dom_error)? {
            return Ok(existing);
        }
        let element = self.document.create_element(tag).map_err(dom_error)?;
        for (name, value) in selector {
            element.set_attribute(name, value).map_err(dom_error)?;
        }
        head.append_child(&element).map_err(dom_error)?;
        Ok(element)
    }
}

#[cfg(target_arch = "wasm32")]
fn dom_error(err: wasm_bindgen::JsValue) -> PageError {
    PageError::Document(format!("{err:?}"))
}

#[cfg(target_arch = "wasm32")]
impl MetadataPort for WebDocument {
    fn apply(&mut self, metadata: &DocumentMetadata) -> Result<(), PageError> {
        let head = self
            .document
            .head()
            .ok_or_else(|| PageError::Document("document has no <head>".into()))?;

        self.document.set_title(&metadata.title);

        for tag in &metadata.meta {
            let el = self.upsert(&head, "meta", &[(tag.attribute.as_str(), tag.key)])?;
            el.set_attribute("content", &tag.content).map_err(dom_error)?;
        }

        let link = self.upsert(&head, "link", &[("rel", "canonical")])?;
        link.set_attribute("href", &metadata.canonical_url)
            .map_err(dom_error)?;

        let script = self.upsert(&head, "script", &structured_data_selector())?;
        script.set_text_content(Some(&metadata.structured_data));

        if let Some(root) = self.document.document_element() {
            root.set_attribute("lang", &metadata.lang).map_err(dom_error)?;
        }
        Ok(())
    }
}
