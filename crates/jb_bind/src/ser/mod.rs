//! The serialization half: walking a value and emitting writer events.

use jb_json::JsonWriter;

use crate::{Category, JsonShape};

// -----------------------------------------------------------------------------
// ToJson

/// A type that can describe itself as JSON writer events.
///
/// `to_json` must emit exactly one complete JSON value. How it does so follows
/// from [`SER_CATEGORY`](Self::SER_CATEGORY):
///
/// - `Value`: a single scalar or string event.
/// - `Array`: `start_array`, one value per element in iteration order, `end_array`.
/// - `Object`: `start_object`, a `key` and a value per entry in iteration order,
///   `end_object`.
/// - `UserDefined`: whatever the type's own hook writes.
///
/// # Examples
///
/// ```
/// use jb_bind::{Category, JsonShape, JsonWriter, Shape, ToJson, to_json};
///
/// struct Rgb(u8, u8, u8);
///
/// impl JsonShape for Rgb {
///     const SHAPE: Shape = Shape::SCALAR;
/// }
///
/// impl ToJson for Rgb {
///     fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
///         writer.string(&format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2));
///     }
/// }
///
/// assert_eq!(Rgb::SER_CATEGORY, Category::Value);
/// assert_eq!(to_json(&Rgb(255, 0, 16)), r##""#ff0010""##);
/// ```
pub trait ToJson: JsonShape {
    const SER_CATEGORY: Category = Self::SHAPE.serialize_category();

    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W);
}

/// Emits `value` into `writer`.
#[inline]
pub fn serialize<T, W>(writer: &mut W, value: &T)
where
    T: ToJson + ?Sized,
    W: JsonWriter + ?Sized,
{
    log::trace!(
        "serializing {} as {}",
        core::any::type_name::<T>(),
        T::SER_CATEGORY
    );
    value.to_json(writer);
}
