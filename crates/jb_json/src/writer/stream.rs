use std::io;

use serde_json::ser::{CharEscape, CompactFormatter, Formatter, PrettyFormatter};

use super::nesting::{Container, Nesting, Slot};
use super::{JsonWriter, MAX_DEPTH, WriteError};

// -----------------------------------------------------------------------------
// StreamWriter

/// Writes JSON text to an [`io::Write`] sink.
///
/// Layout is delegated to a `serde_json` [`Formatter`]: [`CompactFormatter`] by
/// default, or [`PrettyFormatter`] with four-space indentation through
/// [`pretty`](StreamWriter::pretty).
///
/// # Examples
///
/// ```
/// use jb_json::{JsonWriter, StreamWriter};
///
/// let mut writer = StreamWriter::new(Vec::new());
/// writer.start_object();
/// writer.key("id");
/// writer.int(7);
/// writer.key("tags");
/// writer.start_array();
/// writer.string("a\"b");
/// writer.end_array();
/// writer.end_object();
///
/// let bytes = writer.finish().unwrap();
/// assert_eq!(bytes, br#"{"id":7,"tags":["a\"b"]}"#);
/// ```
pub struct StreamWriter<W, F = CompactFormatter> {
    sink: W,
    formatter: F,
    nesting: Nesting,
    escape_unicode: bool,
    error: Option<WriteError>,
}

impl<W: io::Write> StreamWriter<W> {
    /// Creates a writer producing compact output.
    #[inline]
    pub fn new(sink: W) -> Self {
        Self::with_formatter(sink, CompactFormatter)
    }
}

impl<W: io::Write> StreamWriter<W, PrettyFormatter<'static>> {
    /// Creates a writer producing indented output.
    #[inline]
    pub fn pretty(sink: W) -> Self {
        Self::with_formatter(sink, PrettyFormatter::with_indent(b"    "))
    }
}

impl<W: io::Write, F: Formatter> StreamWriter<W, F> {
    pub fn with_formatter(sink: W, formatter: F) -> Self {
        Self {
            sink,
            formatter,
            nesting: Nesting::default(),
            escape_unicode: false,
            error: None,
        }
    }

    /// Writes every non-ASCII character of strings and keys as a `\uXXXX` escape,
    /// keeping the output pure ASCII.
    #[inline]
    pub fn escape_unicode(mut self, enabled: bool) -> Self {
        self.escape_unicode = enabled;
        self
    }

    /// The first failure recorded so far.
    #[inline]
    pub fn error(&self) -> Option<&WriteError> {
        self.error.as_ref()
    }

    /// Flushes the sink and returns it once a complete value has been written.
    pub fn finish(mut self) -> Result<W, WriteError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.nesting.finish()?;
        self.sink.flush()?;
        Ok(self.sink)
    }

    fn record(&mut self, result: Result<(), WriteError>) {
        if let Err(error) = result {
            if let WriteError::Misuse(reason) = &error {
                log::error!("JSON writer misuse: {reason}");
            }
            self.error = Some(error);
        }
    }

    /// Whether events currently reach the output.
    #[inline]
    fn live(&self) -> bool {
        self.error.is_none() && !self.nesting.dropping()
    }

    fn open(&mut self, container: Container) {
        if self.error.is_some() {
            return;
        }
        if self.nesting.dropping() {
            self.nesting.drop_open();
            return;
        }
        if self.nesting.at_limit() {
            log::error!("JSON nested deeper than {MAX_DEPTH} levels, written as null");
            self.null();
            self.nesting.drop_open();
            return;
        }
        let result = self.try_open(container);
        self.record(result);
    }

    fn close(&mut self, container: Container) {
        if self.error.is_some() {
            return;
        }
        if self.nesting.dropping() {
            self.nesting.drop_close();
            return;
        }
        let result = self.try_close(container);
        self.record(result);
    }

    fn begin_slot(&mut self, slot: Slot) -> io::Result<()> {
        match slot {
            Slot::Root => Ok(()),
            Slot::Item { first } => self.formatter.begin_array_value(&mut self.sink, first),
            Slot::Member => self.formatter.begin_object_value(&mut self.sink),
        }
    }

    fn end_slot(&mut self, slot: Slot) -> io::Result<()> {
        match slot {
            Slot::Root => Ok(()),
            Slot::Item { .. } => self.formatter.end_array_value(&mut self.sink),
            Slot::Member => self.formatter.end_object_value(&mut self.sink),
        }
    }

    fn try_scalar(
        &mut self,
        write: impl FnOnce(&mut F, &mut W) -> io::Result<()>,
    ) -> Result<(), WriteError> {
        let slot = self.nesting.begin_value()?;
        self.begin_slot(slot)?;
        write(&mut self.formatter, &mut self.sink)?;
        self.end_slot(slot)?;
        Ok(())
    }

    fn scalar(&mut self, write: impl FnOnce(&mut F, &mut W) -> io::Result<()>) {
        if self.live() {
            let result = self.try_scalar(write);
            self.record(result);
        }
    }

    fn try_string(&mut self, value: &str) -> Result<(), WriteError> {
        let slot = self.nesting.begin_value()?;
        self.begin_slot(slot)?;
        self.write_quoted(value)?;
        self.end_slot(slot)?;
        Ok(())
    }

    fn try_key(&mut self, key: &str) -> Result<(), WriteError> {
        let first = self.nesting.begin_key()?;
        self.formatter.begin_object_key(&mut self.sink, first)?;
        self.write_quoted(key)?;
        self.formatter.end_object_key(&mut self.sink)?;
        Ok(())
    }

    fn try_open(&mut self, container: Container) -> Result<(), WriteError> {
        let slot = self.nesting.begin_value()?;
        self.begin_slot(slot)?;
        match container {
            Container::Array => self.formatter.begin_array(&mut self.sink)?,
            Container::Object => self.formatter.begin_object(&mut self.sink)?,
        }
        self.nesting.open(container, slot);
        Ok(())
    }

    fn try_close(&mut self, container: Container) -> Result<(), WriteError> {
        let slot = self.nesting.close(container)?;
        match container {
            Container::Array => self.formatter.end_array(&mut self.sink)?,
            Container::Object => self.formatter.end_object(&mut self.sink)?,
        }
        self.end_slot(slot)?;
        Ok(())
    }

    fn write_quoted(&mut self, value: &str) -> io::Result<()> {
        self.formatter.begin_string(&mut self.sink)?;
        let mut start = 0;
        for (index, ch) in value.char_indices() {
            let escape = match ch {
                '"' => Some(CharEscape::Quote),
                '\\' => Some(CharEscape::ReverseSolidus),
                '\u{08}' => Some(CharEscape::Backspace),
                '\u{0C}' => Some(CharEscape::FormFeed),
                '\n' => Some(CharEscape::LineFeed),
                '\r' => Some(CharEscape::CarriageReturn),
                '\t' => Some(CharEscape::Tab),
                c if (c as u32) < 0x20 => Some(CharEscape::AsciiControl(c as u8)),
                _ => None,
            };
            let wide = escape.is_none() && self.escape_unicode && !ch.is_ascii();
            if escape.is_none() && !wide {
                continue;
            }

            if start < index {
                self.formatter
                    .write_string_fragment(&mut self.sink, &value[start..index])?;
            }
            if let Some(escape) = escape {
                self.formatter.write_char_escape(&mut self.sink, escape)?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    let escaped = format!("\\u{unit:04x}");
                    self.formatter
                        .write_string_fragment(&mut self.sink, &escaped)?;
                }
            }
            start = index + ch.len_utf8();
        }
        if start < value.len() {
            self.formatter
                .write_string_fragment(&mut self.sink, &value[start..])?;
        }
        self.formatter.end_string(&mut self.sink)
    }
}

impl<W: io::Write, F: Formatter> JsonWriter for StreamWriter<W, F> {
    fn null(&mut self) {
        self.scalar(|f, w| f.write_null(w));
    }

    fn boolean(&mut self, value: bool) {
        self.scalar(|f, w| f.write_bool(w, value));
    }

    fn int(&mut self, value: i32) {
        self.scalar(|f, w| f.write_i32(w, value));
    }

    fn uint(&mut self, value: u32) {
        self.scalar(|f, w| f.write_u32(w, value));
    }

    fn int64(&mut self, value: i64) {
        self.scalar(|f, w| f.write_i64(w, value));
    }

    fn uint64(&mut self, value: u64) {
        self.scalar(|f, w| f.write_u64(w, value));
    }

    fn double(&mut self, value: f64) {
        if value.is_finite() {
            self.scalar(|f, w| f.write_f64(w, value));
        } else {
            log::warn!("non-finite number {value} written as null");
            self.scalar(|f, w| f.write_null(w));
        }
    }

    fn string(&mut self, value: &str) {
        if self.live() {
            let result = self.try_string(value);
            self.record(result);
        }
    }

    fn start_object(&mut self) {
        self.open(Container::Object);
    }

    fn key(&mut self, key: &str) {
        if self.live() {
            let result = self.try_key(key);
            self.record(result);
        }
    }

    fn end_object(&mut self) {
        self.close(Container::Object);
    }

    fn start_array(&mut self) {
        self.open(Container::Array);
    }

    fn end_array(&mut self) {
        self.close(Container::Array);
    }

    #[inline]
    fn depth(&self) -> usize {
        self.nesting.depth()
    }
}
