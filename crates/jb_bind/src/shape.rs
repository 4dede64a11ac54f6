//! Compile-time classification of bindable types.
//!
//! Every bindable type describes its structure once, as a constant [`Shape`]. The
//! [`classify`] function turns that description into a [`Category`], and the
//! serializer and deserializer each evaluate it for their own direction:
//!
//! | Priority | Condition                                   | Category        |
//! |----------|---------------------------------------------|-----------------|
//! | 1        | the type has a hook for this direction      | `UserDefined`   |
//! | 2        | text, even when it has elements             | `Value`         |
//! | 3        | consuming container of key/value pairs      | `Object`        |
//! | 4        | consuming container of single items         | `Array`         |
//! | 5        | fixed-size array or tuple                   | `Array`         |
//! | 6        | anything else                               | `Value`         |
//!
//! Wrappers (`Option`, `Box`, `Rc`, `Arc`, `Weak`) reuse their pointee's shape and
//! add an [`Indirection`], so they never introduce a category of their own.

use core::fmt;

// -----------------------------------------------------------------------------
// Category

/// The structural category a type binds as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Written as a JSON array, read from one.
    Array,
    /// Written as a JSON object of key/value members, read from one.
    Object,
    /// A scalar, a string, or a type with a dedicated extractor.
    Value,
    /// The type owns its JSON representation; read from objects only.
    UserDefined,
}

impl Category {
    /// The JSON kind a value of this category must have before it is read,
    /// phrased for diagnostics. `None` for [`Value`](Self::Value), whose
    /// extractors check the kind themselves.
    pub const fn required_kind(self) -> Option<&'static str> {
        match self {
            Self::Array => Some("an array"),
            Self::Object | Self::UserDefined => Some("an object"),
            Self::Value => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Value => "Value",
            Self::UserDefined => "UserDefined",
        })
    }
}

// -----------------------------------------------------------------------------
// Shape

/// What a container holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Not a container.
    None,
    /// Single values.
    Item,
    /// Key/value pairs.
    Pair,
}

/// The wrapper a type puts around its pointee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indirection {
    /// `Option<T>`: `null` when unset.
    Optional,
    /// `Box<T>`: a single owner.
    Owning,
    /// `Rc<T>` and `Arc<T>`.
    Shared,
    /// `rc::Weak<T>` and `sync::Weak<T>`: `null` once the pointee is gone.
    Weak,
}

/// The structural description a type gives to the classifier.
///
/// # Examples
///
/// ```
/// use jb_bind::{Category, Shape};
///
/// assert_eq!(Shape::SEQUENCE.serialize_category(), Category::Array);
/// assert_eq!(Shape::MAPPING.serialize_category(), Category::Object);
/// assert_eq!(Shape::TEXT.serialize_category(), Category::Value);
///
/// // A hook wins over structure, and each direction is decided on its own.
/// let hooked = Shape::MAPPING.with_hooks(true, false);
/// assert_eq!(hooked.serialize_category(), Category::UserDefined);
/// assert_eq!(hooked.deserialize_category(), Category::Object);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub element: Element,
    /// Moving out of the container leaves it empty, which tells owning
    /// containers apart from views.
    pub consuming: bool,
    /// Character data, never treated as a container.
    pub text: bool,
    /// A fixed number of positional elements.
    pub fixed: bool,
    pub write_hook: bool,
    pub read_hook: bool,
    pub indirection: Option<Indirection>,
}

impl Shape {
    /// Numbers, booleans and other leaf values.
    pub const SCALAR: Self = Self {
        element: Element::None,
        consuming: false,
        text: false,
        fixed: false,
        write_hook: false,
        read_hook: false,
        indirection: None,
    };

    /// Strings. They hold characters, but bind as values.
    pub const TEXT: Self = Self {
        element: Element::Item,
        consuming: true,
        text: true,
        ..Self::SCALAR
    };

    /// Growable containers of single items.
    pub const SEQUENCE: Self = Self {
        element: Element::Item,
        consuming: true,
        ..Self::SCALAR
    };

    /// Growable containers of key/value pairs.
    pub const MAPPING: Self = Self {
        element: Element::Pair,
        consuming: true,
        ..Self::SCALAR
    };

    /// Arrays and tuples.
    pub const FIXED: Self = Self {
        element: Element::Item,
        fixed: true,
        ..Self::SCALAR
    };

    /// Types that read and write themselves.
    pub const USER_DEFINED: Self = Self {
        write_hook: true,
        read_hook: true,
        ..Self::SCALAR
    };

    #[inline]
    pub const fn with_hooks(self, write_hook: bool, read_hook: bool) -> Self {
        Self {
            write_hook,
            read_hook,
            ..self
        }
    }

    /// The shape of a wrapper around a value of this shape.
    #[inline]
    pub const fn behind(self, indirection: Indirection) -> Self {
        Self {
            indirection: Some(indirection),
            ..self
        }
    }

    #[inline]
    pub const fn serialize_category(&self) -> Category {
        classify(self, self.write_hook)
    }

    #[inline]
    pub const fn deserialize_category(&self) -> Category {
        classify(self, self.read_hook)
    }
}

/// Decides the category of `shape` for a direction in which a hook is
/// present (`hooked`) or not.
pub const fn classify(shape: &Shape, hooked: bool) -> Category {
    if hooked {
        return Category::UserDefined;
    }
    if shape.text {
        return Category::Value;
    }
    match (shape.element, shape.consuming) {
        (Element::Pair, true) => Category::Object,
        (Element::Item, true) => Category::Array,
        _ if shape.fixed => Category::Array,
        _ => Category::Value,
    }
}

// -----------------------------------------------------------------------------
// JsonShape

/// Provides the [`Shape`] of a bindable type.
///
/// Implemented by every [`ToJson`](crate::ToJson) and [`FromJson`](crate::FromJson)
/// type; the categories of both traits derive from it.
pub trait JsonShape {
    const SHAPE: Shape;
}

#[cfg(test)]
mod tests {
    use super::{Category, Element, Indirection, Shape, classify};

    #[test]
    fn views_are_values() {
        let view = Shape {
            element: Element::Item,
            consuming: false,
            ..Shape::SCALAR
        };
        assert_eq!(classify(&view, false), Category::Value);
    }

    #[test]
    fn hook_takes_precedence_over_structure() {
        let shape = Shape::SEQUENCE.with_hooks(true, true);
        assert_eq!(shape.serialize_category(), Category::UserDefined);
        assert_eq!(shape.deserialize_category(), Category::UserDefined);

        let text = Shape::TEXT.with_hooks(false, true);
        assert_eq!(text.serialize_category(), Category::Value);
        assert_eq!(text.deserialize_category(), Category::UserDefined);
    }

    #[test]
    fn wrappers_keep_the_category() {
        for indirection in [
            Indirection::Optional,
            Indirection::Owning,
            Indirection::Shared,
            Indirection::Weak,
        ] {
            let shape = Shape::MAPPING.behind(indirection);
            assert_eq!(shape.serialize_category(), Category::Object);
            assert_eq!(shape.indirection, Some(indirection));
        }
        assert_eq!(Shape::FIXED.deserialize_category(), Category::Array);
    }

    #[test]
    fn required_kinds() {
        assert_eq!(Category::Array.required_kind(), Some("an array"));
        assert_eq!(Category::UserDefined.required_kind(), Some("an object"));
        assert_eq!(Category::Value.required_kind(), None);
    }
}
