//! Manifest serialization
//!
//! Pretty-printed JSON with a configurable indent. In [`EscapeMode::Ascii`] every
//! character outside printable ASCII is written as a lowercase `\uXXXX` escape.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::config::EscapeMode;
use crate::error::{ManifestError, Result};

/// `serde_json` formatter combining pretty printing with the chosen escape mode
pub struct ManifestFormatter<'a> {
    pretty: PrettyFormatter<'a>,
    escape: EscapeMode,
}

impl<'a> ManifestFormatter<'a> {
    #[must_use]
    pub fn new(indent: &'a [u8], escape: EscapeMode) -> Self {
        Self {
            pretty: PrettyFormatter::with_indent(indent),
            escape,
        }
    }
}

impl Formatter for ManifestFormatter<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self.escape {
            EscapeMode::Utf8 => writer.write_all(fragment.as_bytes()),
            EscapeMode::Ascii => write_ascii_fragment(writer, fragment),
        }
    }
}

// Fragments never contain quotes, backslashes or control characters; serde_json
// escapes those itself. DEL is escaped here.
fn write_ascii_fragment<W>(writer: &mut W, fragment: &str) -> io::Result<()>
where
    W: ?Sized + io::Write,
{
    let mut start = 0;
    for (idx, ch) in fragment.char_indices() {
        if ch.is_ascii() && ch != '\x7f' {
            continue;
        }
        writer.write_all(&fragment.as_bytes()[start..idx])?;
        let mut units = [0u16; 2];
        for unit in ch.encode_utf16(&mut units) {
            write!(writer, "\\u{unit:04x}")?;
        }
        start = idx + ch.len_utf8();
    }
    writer.write_all(&fragment.as_bytes()[start..])
}

/// Serialize a value with the given indent width and escape mode
///
/// # Errors
///
/// Returns `ManifestError::Serialize` if the value cannot be serialized.
pub fn to_pretty_bytes<T>(value: &T, indent: usize, escape: EscapeMode) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let indent = vec![b' '; indent];
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, ManifestFormatter::new(&indent, escape));
    value
        .serialize(&mut serializer)
        .map_err(ManifestError::Serialize)?;
    Ok(out)
}
