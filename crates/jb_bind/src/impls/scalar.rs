use jb_json::{JsonWriter, Value};

use crate::{Context, FromJson, JsonShape, Shape, ToJson, extract};

macro_rules! impl_json_scalar {
    ($($ty:ty => $write:ident($wide:ty)),* $(,)?) => {$(
        impl JsonShape for $ty {
            const SHAPE: Shape = Shape::SCALAR;
        }

        impl ToJson for $ty {
            #[inline]
            fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
                writer.$write(<$wide>::from(*self));
            }
        }

        impl FromJson for $ty {
            #[inline]
            fn from_json(&mut self, value: &Value, cx: &mut Context) {
                *self = extract(value, cx);
            }
        }
    )*};
}

impl_json_scalar! {
    bool => boolean(bool),
    i8 => int(i32),
    i16 => int(i32),
    i32 => int(i32),
    i64 => int64(i64),
    u8 => uint(u32),
    u16 => uint(u32),
    u32 => uint(u32),
    u64 => uint64(u64),
    f32 => double(f64),
    f64 => double(f64),
}

impl JsonShape for isize {
    const SHAPE: Shape = Shape::SCALAR;
}

impl ToJson for isize {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        writer.int64(*self as i64);
    }
}

impl FromJson for isize {
    #[inline]
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        *self = extract(value, cx);
    }
}

impl JsonShape for usize {
    const SHAPE: Shape = Shape::SCALAR;
}

impl ToJson for usize {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        writer.uint64(*self as u64);
    }
}

impl FromJson for usize {
    #[inline]
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        *self = extract(value, cx);
    }
}

impl JsonShape for char {
    const SHAPE: Shape = Shape::SCALAR;
}

impl ToJson for char {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        writer.string(self.encode_utf8(&mut [0; 4]));
    }
}

impl FromJson for char {
    #[inline]
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        *self = extract(value, cx);
    }
}
