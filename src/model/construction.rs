//! The ordered construction list (`<construction>`).

use tracing::debug;

use super::{Element, ElementKind};

/// A derived construction step, e.g. `Segment[P, Q]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    /// Labels consumed, written as `a0`, `a1`, ... on `<input>`.
    pub inputs: Vec<String>,
    /// Labels produced, written as `a0`, `a1`, ... on `<output>`.
    pub outputs: Vec<String>,
}

impl Command {
    pub fn new(
        name: impl Into<String>,
        inputs: impl IntoIterator<Item = impl Into<String>>,
        outputs: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Human-readable definition shown next to a directly defined element.
/// Purely cosmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub label: String,
    pub exp: String,
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstructionEntry {
    Expression(Expression),
    Command(Command),
    Element(Element),
}

impl ConstructionEntry {
    /// XML tag of this entry.
    pub fn tag(&self) -> &'static str {
        match self {
            ConstructionEntry::Expression(_) => "expression",
            ConstructionEntry::Command(_) => "command",
            ConstructionEntry::Element(_) => "element",
        }
    }
}

/// Entries in declaration order. Only ever appended to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Construction {
    entries: Vec<ConstructionEntry>,
}

impl Construction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ConstructionEntry) {
        debug!(tag = entry.tag(), index = self.entries.len(), "append construction entry");
        self.entries.push(entry);
    }

    /// Append an element and hand back a handle to it.
    pub fn push_element(&mut self, element: Element) -> &mut Element {
        self.push(ConstructionEntry::Element(element));
        match self.entries.last_mut() {
            Some(ConstructionEntry::Element(element)) => element,
            _ => unreachable!("element was just pushed"),
        }
    }

    pub fn entries(&self) -> &[ConstructionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.entries.iter().filter_map(|entry| match entry {
            ConstructionEntry::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Labels of all elements, in declaration order.
    pub fn labels(&self) -> Vec<&str> {
        self.elements().map(|e| e.label.as_str()).collect()
    }

    pub fn element(&self, label: &str) -> Option<&Element> {
        self.elements().find(|e| e.label == label)
    }
}
