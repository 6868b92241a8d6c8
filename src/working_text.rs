//! The string under translation, split into rewritable and final parts
//!
//! Title, time and idiom substitutions become [`Segment::Marked`] and are
//! never scanned again, so a later pass cannot rewrite an idiom that was
//! already substituted or match inside the highlight markup around it.
//! Open text stays a plain string; the word pass mutates it in place, markup
//! included.

use std::fmt;

use regex::{Captures, Regex};

use crate::highlight::highlight;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text that later passes may still rewrite
    Open(String),
    /// A substituted span, rendered with highlight markup
    Marked(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingText {
    segments: Vec<Segment>,
}

impl WorkingText {
    pub fn new(text: &str) -> Self {
        let mut working = WorkingText::default();
        working.push(Segment::Open(text.to_string()));
        working
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append a segment, merging neighbouring open text
    ///
    /// Open text must stay contiguous so a pattern can match across the
    /// point where an earlier pass split it.
    pub fn push(&mut self, segment: Segment) {
        match segment {
            Segment::Open(text) if text.is_empty() => {}
            Segment::Open(text) => match self.segments.last_mut() {
                Some(Segment::Open(last)) => last.push_str(&text),
                _ => self.segments.push(Segment::Open(text)),
            },
            marked => self.segments.push(marked),
        }
    }

    /// Replace every match of `pattern` in open text
    ///
    /// `replace` returns the segments that take the place of a match, or
    /// `None` to leave the match as it was.
    pub fn replace_matches<F>(self, pattern: &Regex, mut replace: F) -> Self
    where
        F: FnMut(&Captures) -> Option<Vec<Segment>>,
    {
        let mut result = WorkingText::default();
        for segment in self.segments {
            let text = match segment {
                Segment::Open(text) => text,
                marked => {
                    result.push(marked);
                    continue;
                }
            };

            let mut last = 0;
            for captures in pattern.captures_iter(&text) {
                let Some(matched) = captures.get(0) else {
                    continue;
                };
                let Some(replacement) = replace(&captures) else {
                    continue;
                };
                result.push(Segment::Open(text[last..matched.start()].to_string()));
                for piece in replacement {
                    result.push(piece);
                }
                last = matched.end();
            }
            result.push(Segment::Open(text[last..].to_string()));
        }
        result
    }

    /// Rewrite each open segment with `rewrite`
    pub fn map_open<F>(self, mut rewrite: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        let mut result = WorkingText::default();
        for segment in self.segments {
            match segment {
                Segment::Open(text) => result.push(Segment::Open(rewrite(text))),
                marked => result.push(marked),
            }
        }
        result
    }

    /// Flatten to the final string, wrapping marked segments in highlight markup
    pub fn render(&self) -> String {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Open(text) => output.push_str(text),
                Segment::Marked(text) => output.push_str(&highlight(text)),
            }
        }
        output
    }
}

impl fmt::Display for WorkingText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
