//! Restricted selector language for page targets.
//!
//! Supports the subset the binders need: tag names, `#id`, `.class`,
//! compounds of those, and the descendant combinator. `div.card`,
//! `#about .section-title` and `footer .footer-links` are all valid.

/// Identity of one open element, as seen by selector matching.
#[derive(Debug, Clone, Default)]
pub struct ElementMeta {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl ElementMeta {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
        }
    }
}

/// One whitespace-separated step of a selector: `tag#id.class.class`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(token: &str) -> Self {
        let mut compound = Compound::default();
        let mut rest = token;

        // Leading run up to the first `#` or `.` is the tag name.
        let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_end > 0 {
            compound.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while !rest.is_empty() {
            let marker = rest.as_bytes()[0];
            let tail = &rest[1..];
            let end = tail.find(['#', '.']).unwrap_or(tail.len());
            let name = &tail[..end];
            if !name.is_empty() {
                match marker {
                    b'#' => compound.id = Some(name.to_string()),
                    b'.' => compound.classes.push(name.to_string()),
                    _ => {}
                }
            }
            rest = &tail[end..];
        }

        compound
    }

    fn matches(&self, element: &ElementMeta) -> bool {
        if let Some(tag) = &self.tag {
            if *tag != element.tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes
            .iter()
            .all(|class| element.classes.iter().any(|c| c == class))
    }
}

/// A parsed selector: compounds joined by the descendant combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

impl Selector {
    /// Parse a selector string. Parsing is lenient; an empty selector
    /// matches nothing.
    pub fn parse(source: &str) -> Self {
        Self {
            parts: source.split_whitespace().map(Compound::parse).collect(),
        }
    }

    /// Match against a stack of open elements, outermost first. The last
    /// compound must match the innermost element; earlier compounds must
    /// match ancestors in order.
    pub fn matches(&self, stack: &[ElementMeta]) -> bool {
        let Some((target, ancestors_needed)) = self.parts.split_last() else {
            return false;
        };
        let Some((current, ancestors)) = stack.split_last() else {
            return false;
        };
        if !target.matches(current) {
            return false;
        }

        let mut upper = ancestors.len();
        for part in ancestors_needed.iter().rev() {
            let found = ancestors[..upper]
                .iter()
                .rposition(|ancestor| part.matches(ancestor));
            match found {
                Some(index) => upper = index,
                None => return false,
            }
        }
        true
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if let Some(tag) = &part.tag {
                f.write_str(tag)?;
            }
            if let Some(id) = &part.id {
                write!(f, "#{}", id)?;
            }
            for class in &part.classes {
                write!(f, ".{}", class)?;
            }
        }
        Ok(())
    }
}
