//! Static page rewriting.
//!
//! A [`Page`] wraps the host page markup and applies [`Patch`]es to it in a
//! single streaming pass: events are copied through unchanged except at
//! patched elements, where the original content is replaced. The page is
//! expected to be well-formed markup (self-closed void elements are also
//! accepted); selectors that match nothing are reported, never fatal — the
//! static markup is the failure-safe default.

mod selector;

pub use selector::{ElementMeta, Selector};

use std::io::Cursor;
use std::path::Path;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{FillError, Result};

/// HTML elements that never have children. Treated as childless even when
/// written as a start tag without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// What to do with a matched element.
#[derive(Debug, Clone)]
pub enum PatchOp {
    /// Replace the element's content with escaped text.
    Text(String),
    /// Replace the element's content with a raw HTML fragment.
    Html(String),
    /// Drop the element's children — except those matching `keep` — and
    /// append a raw HTML fragment.
    ReplaceChildren {
        html: String,
        keep: Option<Selector>,
    },
}

/// One pending page mutation: a selector, a match index, and an operation.
#[derive(Debug, Clone)]
pub struct Patch {
    selector: Selector,
    source: String,
    nth: usize,
    op: PatchOp,
}

impl Patch {
    /// Set an element's text content (escaped).
    pub fn text(selector: &str, value: impl Into<String>) -> Self {
        Self::new(selector, PatchOp::Text(value.into()))
    }

    /// Set an element's inner HTML (raw).
    pub fn html(selector: &str, value: impl Into<String>) -> Self {
        Self::new(selector, PatchOp::Html(value.into()))
    }

    /// Replace a container's children with a fragment, preserving direct
    /// children that match `keep`.
    pub fn replace_children(selector: &str, html: impl Into<String>, keep: Option<&str>) -> Self {
        Self::new(
            selector,
            PatchOp::ReplaceChildren {
                html: html.into(),
                keep: keep.map(Selector::parse),
            },
        )
    }

    fn new(selector: &str, op: PatchOp) -> Self {
        Self {
            selector: Selector::parse(selector),
            source: selector.to_string(),
            nth: 1,
            op,
        }
    }

    /// Target the nth matching element instead of the first (1-based).
    pub fn nth(mut self, nth: usize) -> Self {
        self.nth = nth.max(1);
        self
    }

    /// The selector as written.
    pub fn selector(&self) -> &str {
        &self.source
    }
}

/// Result of applying patches to a page.
#[derive(Debug)]
pub struct PatchOutcome {
    /// The rewritten page markup.
    pub html: Vec<u8>,
    /// Whether each patch, by index, found its target.
    pub applied: Vec<bool>,
}

impl PatchOutcome {
    pub fn applied_count(&self) -> usize {
        self.applied.iter().filter(|a| **a).count()
    }
}

/// The host page markup.
pub struct Page {
    source: Vec<u8>,
}

impl Page {
    pub fn new(source: Vec<u8>) -> Self {
        Self { source }
    }

    /// Read the host page from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read(path).map_err(|e| FillError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read page: {}", e),
        })?;
        Ok(Self::new(source))
    }

    /// Apply patches in one streaming pass.
    ///
    /// Each patch fires at most once, on its nth matching element. Patches
    /// that never match are reported in the outcome; the caller decides how
    /// loudly to complain.
    pub fn apply(&self, patches: &[Patch]) -> Result<PatchOutcome> {
        let mut reader = create_reader(&self.source);
        let mut writer = Writer::new(Cursor::new(Vec::with_capacity(self.source.len())));

        let mut stack: Vec<ElementMeta> = Vec::new();
        let mut seen: Vec<usize> = vec![0; patches.len()];
        let mut consumed: Vec<bool> = vec![false; patches.len()];

        loop {
            match reader.read_event().map_err(parse_error)? {
                Event::Start(elem) => {
                    let meta = element_meta(&elem);
                    if is_void(&meta.tag) {
                        // Childless; copy through without tracking.
                        writer.write_event(Event::Start(elem)).map_err(io_error)?;
                        continue;
                    }
                    stack.push(meta);

                    let chosen = match_patches(patches, &stack, &mut seen, &mut consumed);
                    match chosen {
                        Some(index) => {
                            apply_patch(&patches[index].op, &elem, &mut reader, &mut writer, &mut stack)?;
                        }
                        None => {
                            writer.write_event(Event::Start(elem)).map_err(io_error)?;
                        }
                    }
                }
                Event::Empty(elem) => {
                    // A self-closed target still binds; it gets expanded into
                    // an open/close pair around the new content.
                    let meta = element_meta(&elem);
                    let tag = meta.tag.clone();
                    stack.push(meta);
                    let chosen = match_patches(patches, &stack, &mut seen, &mut consumed);
                    stack.pop();
                    match chosen.map(|index| &patches[index].op) {
                        Some(PatchOp::Text(text)) => {
                            writer
                                .write_event(Event::Start(elem.to_owned()))
                                .map_err(io_error)?;
                            writer
                                .write_event(Event::Text(BytesText::new(text)))
                                .map_err(io_error)?;
                            writer
                                .write_event(Event::End(BytesEnd::new(tag)))
                                .map_err(io_error)?;
                        }
                        Some(PatchOp::Html(html)) | Some(PatchOp::ReplaceChildren { html, .. }) => {
                            writer
                                .write_event(Event::Start(elem.to_owned()))
                                .map_err(io_error)?;
                            writer
                                .write_event(Event::Text(BytesText::from_escaped(html.as_str())))
                                .map_err(io_error)?;
                            writer
                                .write_event(Event::End(BytesEnd::new(tag)))
                                .map_err(io_error)?;
                        }
                        None => {
                            writer.write_event(Event::Empty(elem)).map_err(io_error)?;
                        }
                    }
                }
                Event::End(elem) => {
                    let tag = String::from_utf8_lossy(elem.name().as_ref()).to_ascii_lowercase();
                    if stack.last().is_some_and(|meta| meta.tag == tag) {
                        stack.pop();
                    }
                    writer.write_event(Event::End(elem)).map_err(io_error)?;
                }
                Event::Eof => break,
                event => {
                    writer.write_event(event).map_err(io_error)?;
                }
            }
        }

        Ok(PatchOutcome {
            html: writer.into_inner().into_inner(),
            applied: consumed,
        })
    }
}

fn create_reader(content: &[u8]) -> Reader<&[u8]> {
    let mut reader = Reader::from_reader(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().enable_all_checks(false);
    reader
}

fn parse_error(e: quick_xml::Error) -> FillError {
    FillError::Page {
        message: format!("Markup parse error: {}", e),
    }
}

fn io_error<E: std::fmt::Display>(e: E) -> FillError {
    FillError::Page {
        message: format!("Failed to write markup: {}", e),
    }
}

/// Extract the matching identity of an element from its start tag.
fn element_meta(elem: &BytesStart<'_>) -> ElementMeta {
    let mut meta = ElementMeta::new(String::from_utf8_lossy(elem.name().as_ref()).into_owned());
    for attr in elem.attributes().flatten() {
        match attr.key.as_ref() {
            b"id" => meta.id = Some(String::from_utf8_lossy(&attr.value).into_owned()),
            b"class" => {
                meta.classes = String::from_utf8_lossy(&attr.value)
                    .split_whitespace()
                    .map(str::to_string)
                    .collect();
            }
            _ => {}
        }
    }
    meta
}

/// Advance match counters for every live patch and pick the first patch
/// whose nth match this element is.
fn match_patches(
    patches: &[Patch],
    stack: &[ElementMeta],
    seen: &mut [usize],
    consumed: &mut [bool],
) -> Option<usize> {
    let mut chosen = None;
    for (index, patch) in patches.iter().enumerate() {
        if consumed[index] || !patch.selector.matches(stack) {
            continue;
        }
        seen[index] += 1;
        if chosen.is_none() && seen[index] == patch.nth {
            chosen = Some(index);
        }
    }
    if let Some(index) = chosen {
        consumed[index] = true;
    }
    chosen
}

/// Write the patched form of a matched element and consume its original
/// content from the reader. The element's meta is popped from the stack.
fn apply_patch(
    op: &PatchOp,
    elem: &BytesStart<'_>,
    reader: &mut Reader<&[u8]>,
    writer: &mut Writer<Cursor<Vec<u8>>>,
    stack: &mut Vec<ElementMeta>,
) -> Result<()> {
    let tag = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
    writer
        .write_event(Event::Start(elem.to_owned()))
        .map_err(io_error)?;

    match op {
        PatchOp::Text(text) => {
            skip_subtree(reader)?;
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(io_error)?;
        }
        PatchOp::Html(html) => {
            skip_subtree(reader)?;
            writer
                .write_event(Event::Text(BytesText::from_escaped(html.as_str())))
                .map_err(io_error)?;
        }
        PatchOp::ReplaceChildren { html, keep } => {
            filter_children(reader, writer, stack, &tag, keep.as_ref())?;
            writer
                .write_event(Event::Text(BytesText::from_escaped(html.as_str())))
                .map_err(io_error)?;
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(io_error)?;
    stack.pop();
    Ok(())
}

/// Discard events until the current element's end tag.
fn skip_subtree(reader: &mut Reader<&[u8]>) -> Result<()> {
    let mut depth = 1usize;
    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(elem) => {
                let tag = String::from_utf8_lossy(elem.name().as_ref()).to_ascii_lowercase();
                if !is_void(&tag) {
                    depth += 1;
                }
            }
            Event::End(elem) => {
                let tag = String::from_utf8_lossy(elem.name().as_ref()).to_ascii_lowercase();
                if !is_void(&tag) {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
            }
            Event::Eof => {
                return Err(FillError::Page {
                    message: "Unexpected end of page inside patched element".to_string(),
                });
            }
            _ => {}
        }
    }
}

/// Copy a complete subtree verbatim, starting from its already-read start
/// tag.
fn copy_subtree(
    first: &BytesStart<'_>,
    reader: &mut Reader<&[u8]>,
    writer: &mut Writer<Cursor<Vec<u8>>>,
) -> Result<()> {
    writer
        .write_event(Event::Start(first.to_owned()))
        .map_err(io_error)?;
    let mut depth = 1usize;
    loop {
        let event = reader.read_event().map_err(parse_error)?;
        match &event {
            Event::Start(elem) => {
                let tag = String::from_utf8_lossy(elem.name().as_ref()).to_ascii_lowercase();
                if !is_void(&tag) {
                    depth += 1;
                }
            }
            Event::End(elem) => {
                let tag = String::from_utf8_lossy(elem.name().as_ref()).to_ascii_lowercase();
                if !is_void(&tag) {
                    depth -= 1;
                }
            }
            Event::Eof => {
                return Err(FillError::Page {
                    message: "Unexpected end of page inside preserved element".to_string(),
                });
            }
            _ => {}
        }
        writer.write_event(event).map_err(io_error)?;
        if depth == 0 {
            return Ok(());
        }
    }
}

/// Consume a container's children, copying through only direct children
/// matching `keep`, until the container's own end tag.
fn filter_children(
    reader: &mut Reader<&[u8]>,
    writer: &mut Writer<Cursor<Vec<u8>>>,
    stack: &mut Vec<ElementMeta>,
    container_tag: &str,
    keep: Option<&Selector>,
) -> Result<()> {
    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(elem) => {
                let meta = element_meta(&elem);
                if is_void(&meta.tag) {
                    continue;
                }
                stack.push(meta);
                let preserved = keep.is_some_and(|k| k.matches(stack));
                if preserved {
                    copy_subtree(&elem, reader, writer)?;
                } else {
                    skip_subtree(reader)?;
                }
                stack.pop();
            }
            Event::Empty(elem) => {
                let meta = element_meta(&elem);
                stack.push(meta);
                if keep.is_some_and(|k| k.matches(stack)) {
                    writer.write_event(Event::Empty(elem)).map_err(io_error)?;
                }
                stack.pop();
            }
            Event::End(elem) => {
                let tag = String::from_utf8_lossy(elem.name().as_ref()).to_ascii_lowercase();
                if tag == container_tag {
                    return Ok(());
                }
                // Stray closer (e.g. an unmatched void); ignore.
            }
            Event::Eof => {
                return Err(FillError::Page {
                    message: "Unexpected end of page inside replaced container".to_string(),
                });
            }
            // Existing text and comments inside the container are dropped.
            _ => {}
        }
    }
}
