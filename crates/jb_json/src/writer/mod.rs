// -----------------------------------------------------------------------------
// Modules

mod error;
mod nesting;
mod stream;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use error::WriteError;
pub use stream::StreamWriter;
pub use value::ValueWriter;

// -----------------------------------------------------------------------------
// JsonWriter

/// The most containers a writer keeps open at once.
///
/// `serde_json` refuses a 128th level of nesting while parsing. A container
/// started at this depth is written as `null` instead, and every event up to
/// its matching end is dropped, so written documents stay readable.
pub const MAX_DEPTH: usize = 127;

/// A sink for JSON events.
///
/// Events must describe exactly one well-formed value: inside an object, every value
/// is preceded by [`key`](Self::key), and every `start_*` has a matching `end_*`.
/// Implementations record the first violation and ignore all later events; the
/// violation surfaces when the writer is finished.
///
/// Methods are infallible so that serialization code can stay a straight sequence of
/// calls. Both I/O failures and misuse are reported once, at the end.
pub trait JsonWriter {
    fn null(&mut self);

    fn boolean(&mut self, value: bool);

    fn int(&mut self, value: i32);

    fn uint(&mut self, value: u32);

    fn int64(&mut self, value: i64);

    fn uint64(&mut self, value: u64);

    /// Writes a real number. Non-finite values have no JSON form and are written
    /// as `null`.
    fn double(&mut self, value: f64);

    fn string(&mut self, value: &str);

    fn start_object(&mut self);

    /// Names the next object member.
    fn key(&mut self, key: &str);

    fn end_object(&mut self);

    fn start_array(&mut self);

    fn end_array(&mut self);

    /// Number of containers currently open, including those dropped for
    /// exceeding [`MAX_DEPTH`].
    fn depth(&self) -> usize;
}

impl<W: JsonWriter + ?Sized> JsonWriter for &mut W {
    #[inline]
    fn null(&mut self) {
        (**self).null();
    }

    #[inline]
    fn boolean(&mut self, value: bool) {
        (**self).boolean(value);
    }

    #[inline]
    fn int(&mut self, value: i32) {
        (**self).int(value);
    }

    #[inline]
    fn uint(&mut self, value: u32) {
        (**self).uint(value);
    }

    #[inline]
    fn int64(&mut self, value: i64) {
        (**self).int64(value);
    }

    #[inline]
    fn uint64(&mut self, value: u64) {
        (**self).uint64(value);
    }

    #[inline]
    fn double(&mut self, value: f64) {
        (**self).double(value);
    }

    #[inline]
    fn string(&mut self, value: &str) {
        (**self).string(value);
    }

    #[inline]
    fn start_object(&mut self) {
        (**self).start_object();
    }

    #[inline]
    fn key(&mut self, key: &str) {
        (**self).key(key);
    }

    #[inline]
    fn end_object(&mut self) {
        (**self).end_object();
    }

    #[inline]
    fn start_array(&mut self) {
        (**self).start_array();
    }

    #[inline]
    fn end_array(&mut self) {
        (**self).end_array();
    }

    #[inline]
    fn depth(&self) -> usize {
        (**self).depth()
    }
}
