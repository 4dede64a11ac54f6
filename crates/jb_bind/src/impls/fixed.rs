use jb_json::{JsonWriter, Value, ValueExt};

use crate::{Context, FromJson, IssueKind, JsonShape, Shape, ToJson, deserialize, serialize};

// Fixed-length targets are read positionally and in place. A document array of
// another length is reported, and only the overlapping prefix is read.

fn positional_items<'a>(value: &'a Value, len: usize, cx: &mut Context) -> Option<&'a [Value]> {
    let Some(items) = value.as_array() else {
        cx.report(IssueKind::Mismatch {
            expected: "an array",
            found: value.kind(),
        });
        return None;
    };
    if items.len() != len {
        cx.report(IssueKind::Length {
            expected: len,
            found: items.len(),
        });
    }
    Some(items)
}

// -----------------------------------------------------------------------------
// Arrays

impl<T, const N: usize> JsonShape for [T; N] {
    const SHAPE: Shape = Shape::FIXED;
}

impl<T: ToJson, const N: usize> ToJson for [T; N] {
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        writer.start_array();
        for item in self {
            serialize(writer, item);
        }
        writer.end_array();
    }
}

impl<T: FromJson, const N: usize> FromJson for [T; N] {
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        let Some(items) = positional_items(value, N, cx) else {
            return;
        };
        for (index, (slot, item)) in self.iter_mut().zip(items).enumerate() {
            cx.at_index(index, |cx| deserialize(item, slot, cx));
        }
    }
}

// -----------------------------------------------------------------------------
// Tuples

macro_rules! impl_json_tuple {
    ($len:literal: $($index:tt $name:ident),+) => {
        impl<$($name),+> JsonShape for ($($name,)+) {
            const SHAPE: Shape = Shape::FIXED;
        }

        impl<$($name: ToJson),+> ToJson for ($($name,)+) {
            fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
                writer.start_array();
                $(serialize(writer, &self.$index);)+
                writer.end_array();
            }
        }

        impl<$($name: FromJson),+> FromJson for ($($name,)+) {
            fn from_json(&mut self, value: &Value, cx: &mut Context) {
                let Some(items) = positional_items(value, $len, cx) else {
                    return;
                };
                $(
                    if let Some(item) = items.get($index) {
                        cx.at_index($index, |cx| deserialize(item, &mut self.$index, cx));
                    }
                )+
            }
        }
    };
}

impl_json_tuple!(1: 0 T0);
impl_json_tuple!(2: 0 T0, 1 T1);
impl_json_tuple!(3: 0 T0, 1 T1, 2 T2);
impl_json_tuple!(4: 0 T0, 1 T1, 2 T2, 3 T3);
impl_json_tuple!(5: 0 T0, 1 T1, 2 T2, 3 T3, 4 T4);
impl_json_tuple!(6: 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5);
impl_json_tuple!(7: 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6);
impl_json_tuple!(8: 0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7);

#[cfg(test)]
mod tests {
    use crate::{Category, FromJson, IssueKind, from_json, from_json_with_issues, to_json};

    #[test]
    fn arrays_are_positional() {
        assert_eq!(<[u8; 3]>::DE_CATEGORY, Category::Array);
        assert_eq!(to_json(&[1u8, 2, 3]), "[1,2,3]");
        assert_eq!(from_json::<[u8; 3]>("[4,5,6]").unwrap(), [4, 5, 6]);
    }

    #[test]
    fn length_mismatch_fills_prefix() {
        let (short, issues) = from_json_with_issues::<[i32; 3]>("[9]").unwrap();
        assert_eq!(short, [9, 0, 0]);
        assert_eq!(
            issues[0].kind,
            IssueKind::Length {
                expected: 3,
                found: 1
            }
        );

        let (long, issues) = from_json_with_issues::<[i32; 1]>("[1, 2]").unwrap();
        assert_eq!(long, [1]);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn tuples_mix_types() {
        let pair = (String::from("id"), 7u64);
        let text = to_json(&pair);
        assert_eq!(text, r#"["id",7]"#);
        assert_eq!(from_json::<(String, u64)>(&text).unwrap(), pair);

        let (triple, issues) =
            from_json_with_issues::<(bool, i8, f64)>("[true, 300, 0.5]").unwrap();
        assert_eq!(triple, (true, 0, 0.5));
        assert_eq!(issues[0].path, "$[1]");
    }
}
