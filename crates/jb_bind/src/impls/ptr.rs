use alloc::rc::{self, Rc};
use alloc::sync::{self, Arc};
use core::cell::RefCell;

use jb_json::{JsonWriter, MAX_DEPTH, Value};

use crate::{Context, FromJson, Indirection, JsonShape, Shape, ToJson, deserialize_new, serialize};

/// Shared pointers can close a cycle, so they stop descending once the writer
/// is `MAX_DEPTH` containers deep.
fn serialize_shared<W, T>(writer: &mut W, value: &T)
where
    W: JsonWriter + ?Sized,
    T: ToJson + ?Sized,
{
    if writer.depth() >= MAX_DEPTH {
        log::error!(
            "{} nested deeper than {MAX_DEPTH} levels, written as null",
            core::any::type_name::<T>()
        );
        writer.null();
    } else {
        serialize(writer, value);
    }
}

// -----------------------------------------------------------------------------
// Option

impl<T: JsonShape> JsonShape for Option<T> {
    const SHAPE: Shape = T::SHAPE.behind(Indirection::Optional);
}

impl<T: ToJson> ToJson for Option<T> {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        match self {
            Some(value) => serialize(writer, value),
            None => writer.null(),
        }
    }
}

impl<T: FromJson + Default> FromJson for Option<T> {
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        *self = if value.is_null() {
            None
        } else {
            Some(deserialize_new(value, cx))
        };
    }
}

// -----------------------------------------------------------------------------
// Owning pointers
//
// A `Box`, `Rc` or `Arc` always holds a value, so reading allocates a fresh
// pointee and `null` is left to the pointee to reject. `Option<Box<T>>` is the
// nullable form.

impl<T: JsonShape + ?Sized> JsonShape for Box<T> {
    const SHAPE: Shape = T::SHAPE.behind(Indirection::Owning);
}

impl<T: ToJson + ?Sized> ToJson for Box<T> {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        serialize(writer, &**self);
    }
}

impl<T: FromJson + Default> FromJson for Box<T> {
    #[inline]
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        *self = Box::new(deserialize_new(value, cx));
    }
}

impl<T: JsonShape + ?Sized> JsonShape for Rc<T> {
    const SHAPE: Shape = T::SHAPE.behind(Indirection::Shared);
}

impl<T: ToJson + ?Sized> ToJson for Rc<T> {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        serialize_shared(writer, &**self);
    }
}

impl<T: FromJson + Default> FromJson for Rc<T> {
    #[inline]
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        *self = Rc::new(deserialize_new(value, cx));
    }
}

impl<T: JsonShape + ?Sized> JsonShape for Arc<T> {
    const SHAPE: Shape = T::SHAPE.behind(Indirection::Shared);
}

impl<T: ToJson + ?Sized> ToJson for Arc<T> {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        serialize_shared(writer, &**self);
    }
}

impl<T: FromJson + Default> FromJson for Arc<T> {
    #[inline]
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        *self = Arc::new(deserialize_new(value, cx));
    }
}

// -----------------------------------------------------------------------------
// Weak pointers
//
// Write-only: a weak pointer cannot own what it would read.

impl<T: JsonShape + ?Sized> JsonShape for rc::Weak<T> {
    const SHAPE: Shape = T::SHAPE.behind(Indirection::Weak);
}

impl<T: ToJson + ?Sized> ToJson for rc::Weak<T> {
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        match self.upgrade() {
            Some(value) => serialize_shared(writer, &*value),
            None => writer.null(),
        }
    }
}

impl<T: JsonShape + ?Sized> JsonShape for sync::Weak<T> {
    const SHAPE: Shape = T::SHAPE.behind(Indirection::Weak);
}

impl<T: ToJson + ?Sized> ToJson for sync::Weak<T> {
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        match self.upgrade() {
            Some(value) => serialize_shared(writer, &*value),
            None => writer.null(),
        }
    }
}

// -----------------------------------------------------------------------------
// Transparent wrappers

impl<T: JsonShape + ?Sized> JsonShape for &T {
    const SHAPE: Shape = T::SHAPE;
}

impl<T: ToJson + ?Sized> ToJson for &T {
    #[inline]
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        (**self).to_json(writer);
    }
}

impl<T: JsonShape + ?Sized> JsonShape for RefCell<T> {
    const SHAPE: Shape = T::SHAPE;
}

impl<T: ToJson + ?Sized> ToJson for RefCell<T> {
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        match self.try_borrow() {
            Ok(value) => value.to_json(writer),
            Err(_) => {
                log::error!("mutably borrowed value written as null");
                writer.null();
            }
        }
    }
}

impl<T: FromJson + ?Sized> FromJson for RefCell<T> {
    #[inline]
    fn from_json(&mut self, value: &Value, cx: &mut Context) {
        self.get_mut().from_json(value, cx);
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::sync::Arc;
    use core::cell::RefCell;

    use jb_json::MAX_DEPTH;

    use crate::{
        Category, FromJson, Indirection, JsonShape, ToJson, from_json, from_json_with_issues,
        json_object, to_json,
    };

    #[derive(Debug, Default)]
    struct Node {
        id: u32,
        next: RefCell<Option<Rc<Node>>>,
    }

    json_object!(Node { id, next });

    #[derive(Debug, Default)]
    struct Link {
        id: u32,
        next: Option<Box<Link>>,
    }

    json_object!(Link { id, next });

    #[test]
    fn optional_values() {
        assert_eq!(from_json::<Option<i32>>("null").unwrap(), None);
        assert_eq!(from_json::<Option<i32>>("5").unwrap(), Some(5));
        assert_eq!(to_json(&None::<i32>), "null");
        assert_eq!(to_json(&Some("x")), "\"x\"");

        let (value, issues) = from_json_with_issues::<Option<Vec<u8>>>("true").unwrap();
        assert_eq!(value, Some(vec![]));
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn wrappers_keep_pointee_category() {
        assert_eq!(Option::<Vec<u8>>::SER_CATEGORY, Category::Array);
        assert_eq!(Box::<Node>::DE_CATEGORY, Category::UserDefined);
        assert_eq!(
            <Arc<Vec<u8>> as JsonShape>::SHAPE.indirection,
            Some(Indirection::Shared)
        );
    }

    #[test]
    fn owning_pointers_allocate() {
        let boxed: Box<Vec<i32>> = from_json("[1, 2]").unwrap();
        assert_eq!(*boxed, [1, 2]);

        let shared: Arc<String> = from_json(r#""s""#).unwrap();
        assert_eq!(shared.as_str(), "s");
        assert_eq!(to_json(&shared), r#""s""#);
    }

    #[test]
    fn weak_pointers() {
        let strong = Rc::new(3u8);
        let weak = Rc::downgrade(&strong);
        assert_eq!(to_json(&weak), "3");
        drop(strong);
        assert_eq!(to_json(&weak), "null");
    }

    #[test]
    fn cycles_stop_at_depth_limit() {
        let node = Rc::new(Node {
            id: 1,
            next: RefCell::default(),
        });
        *node.next.borrow_mut() = Some(Rc::clone(&node));

        let text = to_json(&node);
        assert!(text.starts_with(r#"{"id":1,"next":{"id":1,"#));
        assert!(text.contains(r#""next":null"#));
        assert!(from_json::<Node>(&text).is_ok());

        node.next.borrow_mut().take();
    }

    #[test]
    fn deep_chains_are_cut_to_readable_depth() {
        let mut head = None;
        for id in 0..200 {
            head = Some(Box::new(Link { id, next: head }));
        }

        let text = to_json(&head);
        assert!(text.starts_with(r#"{"id":199,"next":{"id":198,"#));

        let back: Option<Box<Link>> = from_json(&text).unwrap();
        let mut links = 0;
        let mut cursor = back.as_deref();
        while let Some(link) = cursor {
            links += 1;
            cursor = link.next.as_deref();
        }
        assert_eq!(links, MAX_DEPTH);
    }

    #[test]
    fn chains_read_back() {
        let node: Node = from_json(r#"{"id": 1, "next": {"id": 2, "next": null}}"#).unwrap();
        let next_id = node.next.borrow().as_ref().map(|next| next.id);
        assert_eq!(next_id, Some(2));
    }
}
