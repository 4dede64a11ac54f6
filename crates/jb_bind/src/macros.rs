// -----------------------------------------------------------------------------
// Aggregates

/// Binds a struct as a JSON object with one member per listed field.
///
/// Fields are written in the listed order under their own name, or under the
/// name given with `as "..."`. Every field type must itself be bindable, and
/// for generic structs each type parameter must be as well.
///
/// Reading is strict about membership: when a listed member is absent, a
/// `MissingField` issue is reported and reading the struct stops there, so
/// later fields keep their current values. A member that is present but has
/// the wrong kind is only an issue for that field. Members that are not listed
/// are ignored.
///
/// # Examples
///
/// ```
/// use jb_bind::{IssueKind, from_json_with_issues, json_object, to_json};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
///     label: Option<String>,
/// }
///
/// json_object!(Point { x, y, label as "name" });
///
/// let point = Point { x: 1, y: -2, label: None };
/// assert_eq!(to_json(&point), r#"{"x":1,"y":-2,"name":null}"#);
///
/// let (point, issues) = from_json_with_issues::<Point>(r#"{"x": true, "y": 5}"#).unwrap();
/// assert_eq!(point, Point { x: 0, y: 5, label: None });
/// assert_eq!(issues.len(), 2);
/// assert_eq!(issues[0].path, "$.x");
/// assert!(matches!(issues[1].kind, IssueKind::MissingField { name: "name" }));
/// ```
#[macro_export]
macro_rules! json_object {
    (@key $field:ident) => {
        ::core::stringify!($field)
    };
    (@key $field:ident as $key:literal) => {
        $key
    };
    (
        $ty:ident $(<$($param:ident),+ $(,)?>)? {
            $($field:ident $(as $key:literal)?),* $(,)?
        }
    ) => {
        impl $(<$($param),+>)? $crate::JsonShape for $ty $(<$($param),+>)? {
            const SHAPE: $crate::Shape = $crate::Shape::USER_DEFINED;
        }

        impl $(<$($param: $crate::ToJson),+>)? $crate::ToJson for $ty $(<$($param),+>)? {
            fn to_json<W: $crate::JsonWriter + ?Sized>(&self, writer: &mut W) {
                writer.start_object();
                $(
                    writer.key($crate::json_object!(@key $field $(as $key)?));
                    $crate::serialize(writer, &self.$field);
                )*
                writer.end_object();
            }
        }

        impl $(<$($param: $crate::FromJson + ::core::default::Default),+>)? $crate::FromJson
            for $ty $(<$($param),+>)?
        {
            fn from_json(
                &mut self,
                value: &$crate::__macro_exports::Value,
                cx: &mut $crate::Context,
            ) {
                let Some(members) = value.as_object() else {
                    cx.report($crate::IssueKind::Mismatch {
                        expected: "an object",
                        found: $crate::__macro_exports::ValueExt::kind(value),
                    });
                    return;
                };
                $(
                    let name = $crate::json_object!(@key $field $(as $key)?);
                    let Some(member) = members.get(name) else {
                        cx.report($crate::IssueKind::MissingField { name });
                        return;
                    };
                    cx.at_key(name, |cx| $crate::deserialize(member, &mut self.$field, cx));
                )*
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Enums

/// Binds a fieldless enum as its integer discriminant.
///
/// The enum must have an explicit or implied `#[repr]` matching `$repr`, and
/// every variant must be listed. Reading a number that is not a listed
/// discriminant reports `UnknownDiscriminant` and keeps the current variant.
///
/// # Examples
///
/// ```
/// use jb_bind::{from_json, json_int_enum, to_json};
///
/// #[derive(Debug, Default, PartialEq)]
/// #[repr(u8)]
/// enum Level {
///     #[default]
///     Low = 1,
///     High = 9,
/// }
///
/// json_int_enum!(Level: u8 { Low, High });
///
/// assert_eq!(to_json(&[Level::High, Level::Low]), "[9,1]");
/// assert_eq!(from_json::<Vec<Level>>("[1, 9, 4]").unwrap(), [Level::Low, Level::High, Level::Low]);
/// ```
#[macro_export]
macro_rules! json_int_enum {
    ($ty:ident : $repr:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::JsonShape for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::SCALAR;
        }

        impl $crate::ToJson for $ty {
            fn to_json<W: $crate::JsonWriter + ?Sized>(&self, writer: &mut W) {
                let raw = match self {
                    $(Self::$variant => Self::$variant as $repr,)+
                };
                $crate::serialize(writer, &raw);
            }
        }

        impl $crate::FromJson for $ty {
            fn from_json(
                &mut self,
                value: &$crate::__macro_exports::Value,
                cx: &mut $crate::Context,
            ) {
                let Some(raw) = <$repr as $crate::Extract>::extract(value) else {
                    cx.report($crate::IssueKind::Mismatch {
                        expected: <$repr as $crate::Extract>::EXPECTED,
                        found: $crate::__macro_exports::ValueExt::kind(value),
                    });
                    return;
                };
                $(
                    if raw == Self::$variant as $repr {
                        *self = Self::$variant;
                        return;
                    }
                )+
                cx.report($crate::IssueKind::UnknownDiscriminant {
                    ty: ::core::stringify!($ty),
                    value: i64::try_from(raw).unwrap_or(i64::MAX),
                });
            }
        }
    };
}

/// Binds a fieldless enum as the name of its variant.
///
/// Names default to the variant identifier and can be replaced with
/// `as "..."`. Reading a string that names no variant reports
/// `UnknownVariant` and keeps the current variant. The enum also becomes
/// usable as an object key.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use jb_bind::{from_json, json_named_enum, to_json};
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// enum Side {
///     #[default]
///     Buy,
///     Sell,
/// }
///
/// json_named_enum!(Side { Buy as "buy", Sell as "sell" });
///
/// let mut book = BTreeMap::new();
/// book.insert(Side::Sell, vec![Side::Buy]);
///
/// let text = to_json(&book);
/// assert_eq!(text, r#"{"sell":["buy"]}"#);
/// assert_eq!(from_json::<BTreeMap<Side, Vec<Side>>>(&text).unwrap(), book);
/// ```
#[macro_export]
macro_rules! json_named_enum {
    (@name $variant:ident) => {
        ::core::stringify!($variant)
    };
    (@name $variant:ident as $name:literal) => {
        $name
    };
    ($ty:ident { $($variant:ident $(as $name:literal)?),+ $(,)? }) => {
        impl $crate::JsonShape for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::SCALAR;
        }

        impl $crate::ToJson for $ty {
            fn to_json<W: $crate::JsonWriter + ?Sized>(&self, writer: &mut W) {
                writer.string(&$crate::JsonKey::to_key(self));
            }
        }

        impl $crate::FromJson for $ty {
            fn from_json(
                &mut self,
                value: &$crate::__macro_exports::Value,
                cx: &mut $crate::Context,
            ) {
                let Some(name) = value.as_str() else {
                    cx.report($crate::IssueKind::Mismatch {
                        expected: "a string",
                        found: $crate::__macro_exports::ValueExt::kind(value),
                    });
                    return;
                };
                $(
                    if name == $crate::json_named_enum!(@name $variant $(as $name)?) {
                        *self = Self::$variant;
                        return;
                    }
                )+
                cx.report($crate::IssueKind::UnknownVariant {
                    ty: ::core::stringify!($ty),
                    name: name.into(),
                });
            }
        }

        impl $crate::JsonKey for $ty {
            fn to_key(&self) -> $crate::__macro_exports::Cow<'_, str> {
                $crate::__macro_exports::Cow::Borrowed(match self {
                    $(Self::$variant => $crate::json_named_enum!(@name $variant $(as $name)?),)+
                })
            }

            fn from_key(key: &str, cx: &mut $crate::Context) -> ::core::option::Option<Self> {
                $(
                    if key == $crate::json_named_enum!(@name $variant $(as $name)?) {
                        return ::core::option::Option::Some(Self::$variant);
                    }
                )+
                cx.report($crate::IssueKind::UnknownVariant {
                    ty: ::core::stringify!($ty),
                    name: key.into(),
                });
                ::core::option::Option::None
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Containers

/// Binds a type implementing [`Sequence`](crate::Sequence) as a JSON array.
///
/// Reading appends every element in document order; use
/// [`read_sequence`](crate::read_sequence) directly for another policy.
///
/// ```
/// use jb_bind::{Sequence, from_json, impl_json_sequence, to_json};
///
/// #[derive(Default)]
/// struct Stack<T>(Vec<T>);
///
/// impl<T> Sequence for Stack<T> {
///     type Item = T;
///
///     fn items(&self) -> impl Iterator<Item = &T> {
///         self.0.iter().rev()
///     }
///
///     fn append(&mut self, item: T) {
///         self.0.insert(0, item);
///     }
/// }
///
/// impl_json_sequence!(impl<T> Stack<T>);
///
/// let stack: Stack<u32> = from_json("[3, 2, 1]").unwrap();
/// assert_eq!(stack.0, [1, 2, 3]);
/// assert_eq!(to_json(&stack), "[3,2,1]");
/// ```
#[macro_export]
macro_rules! impl_json_sequence {
    (impl<$($param:ident),+ $(,)?> $ty:ty) => {
        $crate::impl_json_sequence!(@impl [$($param),+] $ty);
    };
    (impl $ty:ty) => {
        $crate::impl_json_sequence!(@impl [] $ty);
    };
    (@impl [$($param:ident),*] $ty:ty) => {
        impl<$($param),*> $crate::JsonShape for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::SEQUENCE;
        }

        impl<$($param),*> $crate::ToJson for $ty
        where
            $ty: $crate::Sequence,
            <$ty as $crate::Sequence>::Item: $crate::ToJson,
        {
            fn to_json<W: $crate::JsonWriter + ?Sized>(&self, writer: &mut W) {
                writer.start_array();
                for item in <$ty as $crate::Sequence>::items(self) {
                    $crate::serialize(writer, item);
                }
                writer.end_array();
            }
        }

        impl<$($param),*> $crate::FromJson for $ty
        where
            $ty: $crate::Sequence,
            <$ty as $crate::Sequence>::Item: $crate::FromJson + ::core::default::Default,
        {
            #[inline]
            fn from_json(
                &mut self,
                value: &$crate::__macro_exports::Value,
                cx: &mut $crate::Context,
            ) {
                $crate::read_sequence::<$crate::Append, Self>(value, self, cx);
            }
        }
    };
}

/// Binds a type implementing [`Mapping`](crate::Mapping) as a JSON object.
///
/// Keys must implement [`JsonKey`](crate::JsonKey). Reading appends every
/// member in document order.
#[macro_export]
macro_rules! impl_json_mapping {
    (impl<$($param:ident),+ $(,)?> $ty:ty) => {
        $crate::impl_json_mapping!(@impl [$($param),+] $ty);
    };
    (impl $ty:ty) => {
        $crate::impl_json_mapping!(@impl [] $ty);
    };
    (@impl [$($param:ident),*] $ty:ty) => {
        impl<$($param),*> $crate::JsonShape for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::MAPPING;
        }

        impl<$($param),*> $crate::ToJson for $ty
        where
            $ty: $crate::Mapping,
            <$ty as $crate::Mapping>::Key: $crate::JsonKey,
            <$ty as $crate::Mapping>::Value: $crate::ToJson,
        {
            fn to_json<W: $crate::JsonWriter + ?Sized>(&self, writer: &mut W) {
                writer.start_object();
                for (key, value) in <$ty as $crate::Mapping>::entries(self) {
                    writer.key(&$crate::JsonKey::to_key(key));
                    $crate::serialize(writer, value);
                }
                writer.end_object();
            }
        }

        impl<$($param),*> $crate::FromJson for $ty
        where
            $ty: $crate::Mapping,
            <$ty as $crate::Mapping>::Key: $crate::JsonKey,
            <$ty as $crate::Mapping>::Value: $crate::FromJson + ::core::default::Default,
        {
            #[inline]
            fn from_json(
                &mut self,
                value: &$crate::__macro_exports::Value,
                cx: &mut $crate::Context,
            ) {
                $crate::read_mapping::<$crate::Append, Self>(value, self, cx);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use serde_json::json;

    use crate::{
        Context, IssueKind, deserialize, from_json, from_json_with_issues, json_int_enum,
        json_named_enum, json_object, to_json,
    };

    #[derive(Debug, Default, PartialEq)]
    struct Config {
        name: String,
        port: u16,
        verbose: bool,
    }

    json_object!(Config { name, port, verbose });

    #[derive(Debug, Default, PartialEq)]
    struct Tagged<T> {
        tag: String,
        value: T,
    }

    json_object!(Tagged<T> { tag, value as "v" });

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    #[repr(i16)]
    enum Mode {
        #[default]
        Off = 0,
        On = 1,
        Auto = -1,
    }

    json_int_enum!(Mode: i16 { Off, On, Auto });

    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Color {
        #[default]
        Red,
        Green,
        Blue,
    }

    json_named_enum!(Color { Red, Green, Blue as "blue" });

    #[test]
    fn missing_member_stops_the_object() {
        let mut config = Config {
            name: "old".into(),
            port: 1,
            verbose: false,
        };
        let mut cx = Context::new();
        deserialize(&json!({"name": "new", "verbose": true}), &mut config, &mut cx);

        assert_eq!(config.name, "new");
        assert_eq!(config.port, 1);
        assert!(!config.verbose);
        assert_eq!(cx.issues().len(), 1);
        assert_eq!(cx.issues()[0].path, "$");
        assert_eq!(cx.issues()[0].kind, IssueKind::MissingField { name: "port" });
    }

    #[test]
    fn unlisted_members_are_ignored() {
        let (config, issues) = from_json_with_issues::<Config>(
            r#"{"name": "a", "extra": [1], "port": 80, "verbose": true}"#,
        )
        .unwrap();
        assert!(issues.is_empty());
        assert_eq!(
            config,
            Config {
                name: "a".into(),
                port: 80,
                verbose: true
            }
        );
    }

    #[test]
    fn generic_objects() {
        let tagged = Tagged {
            tag: "ids".into(),
            value: vec![1u8, 2],
        };
        assert_eq!(to_json(&tagged), r#"{"tag":"ids","v":[1,2]}"#);

        let (back, issues) =
            from_json_with_issues::<Tagged<i32>>(r#"{"tag": "n", "v": "7"}"#).unwrap();
        assert_eq!(back.tag, "n");
        assert_eq!(back.value, 0);
        assert_eq!(issues[0].path, "$.v");
    }

    #[test]
    fn unknown_discriminant_keeps_variant() {
        assert_eq!(to_json(&Mode::Auto), "-1");
        assert_eq!(from_json::<Mode>("1").unwrap(), Mode::On);

        let mut mode = Mode::On;
        let mut cx = Context::new();
        deserialize(&json!(7), &mut mode, &mut cx);
        assert_eq!(mode, Mode::On);
        assert_eq!(
            cx.issues()[0].kind,
            IssueKind::UnknownDiscriminant { ty: "Mode", value: 7 }
        );

        deserialize(&json!("on"), &mut mode, &mut cx);
        assert_eq!(mode, Mode::On);
        assert!(matches!(
            cx.issues()[1].kind,
            IssueKind::Mismatch { expected: "a 16-bit integer", .. }
        ));
    }

    #[test]
    fn unknown_name_keeps_variant() {
        assert_eq!(to_json(&[Color::Green, Color::Blue]), r#"["Green","blue"]"#);

        let mut color = Color::Green;
        let mut cx = Context::new();
        for text in [json!("purple"), json!("Blue")] {
            deserialize(&text, &mut color, &mut cx);
        }
        assert_eq!(color, Color::Green);
        assert_eq!(
            cx.issues()[0].kind,
            IssueKind::UnknownVariant {
                ty: "Color",
                name: "purple".into()
            }
        );
        assert_eq!(cx.issues().len(), 2);

        deserialize(&json!(2), &mut color, &mut cx);
        assert_eq!(color, Color::Green);
        assert!(matches!(
            cx.issues()[2].kind,
            IssueKind::Mismatch { expected: "a string", .. }
        ));
    }

    #[test]
    fn unknown_key_names_are_skipped() {
        let (map, issues) =
            from_json_with_issues::<BTreeMap<Color, u8>>(r#"{"Red": 1, "mauve": 2}"#).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map[&Color::Red], 1);
        assert!(matches!(
            issues[0].kind,
            IssueKind::UnknownVariant { ty: "Color", .. }
        ));
    }
}
