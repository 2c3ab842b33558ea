//! Minimal XML element tree for project files.
//!
//! MSBuild project files are read as a whole into a small tree of [`Element`]s before any
//! field is extracted. The tree keeps exactly what the extractor needs: element names,
//! attributes in document order, child elements and text. Names are stored as local names, so
//! a legacy project that declares the MSBuild namespace (`xmlns="http://schemas.microsoft.com/
//! developer/msbuild/2003"`) reads the same as an SDK-style project.
//!
//! Building the tree is the only fallible step. Mismatched or unclosed tags, content after the
//! root element, a document without a root element and undecodable escapes are all reported
//! as errors; once a tree exists every lookup is infallible.
//!
//! # Examples
//!
//! ```rust
//! use slnscope::xml::Element;
//!
//! let root = Element::parse(r#"<Project Sdk="Microsoft.NET.Sdk">
//!   <PropertyGroup>
//!     <TargetFramework>net8.0</TargetFramework>
//!   </PropertyGroup>
//! </Project>"#)?;
//!
//! assert_eq!(root.attribute("Sdk"), Some("Microsoft.NET.Sdk"));
//! let group = root.descendants("PropertyGroup").next().unwrap();
//! assert_eq!(group.child("TargetFramework").unwrap().value(), "net8.0");
//! # Ok::<(), slnscope::Error>(())
//! ```

use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

use crate::Result;

/// A node below an [`Element`]: either a nested element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A child element
    Element(Element),
    /// Character data, already unescaped
    Text(String),
}

/// An XML element with its attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Parses a complete XML document and returns its root element.
    ///
    /// # Errors
    /// Returns [`crate::Error::Xml`] if the reader rejects the document, or
    /// [`crate::Error::Malformed`] if the document has no root, several roots, unclosed
    /// elements, or text outside the root element.
    pub fn parse(text: &str) -> Result<Element> {
        let mut reader = Reader::from_str(text);
        reader.config_mut().check_end_names = true;

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    if root.is_some() {
                        return Err(malformed_error!("Multiple root elements"));
                    }
                    stack.push(Element::from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = Element::from_start(&start)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => match stack.pop() {
                    Some(element) => Self::attach(&mut stack, &mut root, element)?,
                    None => return Err(malformed_error!("Unexpected closing tag")),
                },
                Event::Text(text) => {
                    let content = text
                        .unescape()
                        .map_err(|error| malformed_error!("Invalid text content - {}", error))?;
                    Self::append_text(&mut stack, &content)?;
                }
                Event::CData(data) => {
                    let content = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    Self::append_text(&mut stack, &content)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(malformed_error!("Unclosed element - <{}>", open.name));
        }

        root.ok_or_else(|| malformed_error!("Missing root element"))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Element> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute
                .map_err(|error| malformed_error!("Invalid attribute on <{}> - {}", name, error))?;
            let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|error| malformed_error!("Invalid attribute value on <{}> - {}", name, error))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(Element {
            name,
            attributes,
            children: Vec::new(),
        })
    }

    fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(Node::Element(element)),
            None if root.is_none() => *root = Some(element),
            None => return Err(malformed_error!("Multiple root elements")),
        }

        Ok(())
    }

    fn append_text(stack: &mut [Element], content: &str) -> Result<()> {
        match stack.last_mut() {
            Some(parent) => {
                if let Some(Node::Text(previous)) = parent.children.last_mut() {
                    previous.push_str(content);
                } else {
                    parent.children.push(Node::Text(content.to_string()));
                }
                Ok(())
            }
            None if content.trim().is_empty() => Ok(()),
            None => Err(malformed_error!("Text outside of the root element")),
        }
    }

    /// Returns the local name of this element.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the attribute with the given local name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns all attributes as `(name, value)` pairs in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the direct child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Returns the first direct child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    /// Returns all direct child elements with the given name, in document order.
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |element| element.name == name)
    }

    /// Returns all descendant elements (excluding `self`) with the given name, in document
    /// order.
    pub fn descendants<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found.into_iter()
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for element in self.elements() {
            if element.name == name {
                found.push(element);
            }
            element.collect_descendants(name, found);
        }
    }

    /// Returns the concatenated text of this element and all its descendants.
    ///
    /// Whitespace-only text between child elements is formatting and is left out; the text of
    /// a leaf element is returned exactly as written.
    #[must_use]
    pub fn value(&self) -> String {
        let mut value = String::new();
        self.collect_text(&mut value);
        value
    }

    fn collect_text(&self, value: &mut String) {
        let has_elements = self.elements().next().is_some();

        for node in &self.children {
            match node {
                Node::Element(element) => element.collect_text(value),
                Node::Text(text) if has_elements && text.trim().is_empty() => {}
                Node::Text(text) => value.push_str(text),
            }
        }
    }
}
