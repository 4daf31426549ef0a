//! Structured view of a single GPX document
//!
//! The merge only needs two cut points inside each file: where the first track
//! element starts (everything before it is the structural header) and where the
//! root element's content ends (just before the closing `</gpx>`). Both are taken
//! from node byte ranges of a real markup parse, so a literal `<trk>` or `</gpx>`
//! inside a comment, CDATA section or text node does not move them.

use crate::error::{MergeError, Result};
use roxmltree::{Document, Node, ParsingOptions};
use std::ops::Range;

const TRACK_TAG: &str = "trk";
const TIME_TAG: &str = "time";

/// Byte offsets of the header/body boundary inside a document's text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentLayout {
    /// Start of the first `<trk` element
    pub track_start: usize,
    /// End of the root element's content, i.e. where `</gpx>` begins
    pub body_end: usize,
}

impl DocumentLayout {
    /// Declaration, root start tag and metadata preceding the first track
    pub fn header<'a>(&self, content: &'a str) -> &'a str {
        &content[..self.track_start]
    }

    /// From the first track element up to (excluding) the closing root tag
    pub fn body<'a>(&self, content: &'a str) -> &'a str {
        &content[self.body_range()]
    }

    pub fn body_range(&self) -> Range<usize> {
        self.track_start..self.body_end
    }
}

/// A parsed GPX document borrowing its source text
pub struct GpxDocument<'input> {
    doc: Document<'input>,
}

impl<'input> GpxDocument<'input> {
    /// Parse `text` as markup. Export tools sometimes emit a DOCTYPE, so DTDs are allowed.
    pub fn parse(text: &'input str) -> Result<Self> {
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;

        let doc = Document::parse_with_options(text, options)
            .map_err(|e| MergeError::malformed(e.to_string()))?;
        Ok(Self { doc })
    }

    /// First track element in document order
    pub fn first_track(&self) -> Option<Node<'_, 'input>> {
        self.doc
            .root_element()
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == TRACK_TAG)
    }

    /// Text of the first `time` element below the first track, trimmed.
    ///
    /// `None` for tracks without any recorded time (manually entered
    /// activities have no GPS points) and for empty time elements.
    pub fn first_track_time(&self) -> Option<&str> {
        let track = self.first_track()?;
        let time = track
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == TIME_TAG)?;
        let text = time.text()?.trim();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Header/body cut points, or `None` when the document has no track
    pub fn layout(&self) -> Option<DocumentLayout> {
        let track = self.first_track()?;
        let root = self.doc.root_element();
        // A track exists, so the root has at least one child
        let body_end = root.last_child()?.range().end;
        Some(DocumentLayout {
            track_start: track.range().start,
            body_end,
        })
    }
}

/// Split a GPX text into its structural header and track body
pub fn split_document(content: &str) -> Result<(&str, &str)> {
    let layout = GpxDocument::parse(content)?
        .layout()
        .ok_or_else(|| MergeError::malformed("document has no track element"))?;
    Ok((layout.header(content), layout.body(content)))
}
