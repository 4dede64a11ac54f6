use jb_json::{Value, ValueExt};

use super::{Context, FromJson, IssueKind, deserialize_new};
use crate::JsonKey;

// -----------------------------------------------------------------------------
// Container operations

/// A growable container of single items, bound as a JSON array.
///
/// Implement it for your own container and invoke
/// [`impl_json_sequence!`](crate::impl_json_sequence) to make it bindable.
pub trait Sequence {
    type Item;

    /// Items in the order they are written.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    fn append(&mut self, item: Self::Item);

    /// Inserts at the front. Containers without a notion of position may
    /// keep the default, which appends.
    #[inline]
    fn prepend(&mut self, item: Self::Item) {
        self.append(item);
    }
}

/// A growable container of key/value entries, bound as a JSON object.
pub trait Mapping {
    type Key;
    type Value;

    /// Entries in the order they are written.
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    fn append(&mut self, key: Self::Key, value: Self::Value);

    #[inline]
    fn prepend(&mut self, key: Self::Key, value: Self::Value) {
        self.append(key, value);
    }
}

// -----------------------------------------------------------------------------
// InsertionPolicy

/// Where deserialized elements go in their container.
pub trait InsertionPolicy {
    fn insert_item<S: Sequence + ?Sized>(target: &mut S, item: S::Item);

    fn insert_entry<M: Mapping + ?Sized>(target: &mut M, key: M::Key, value: M::Value);
}

/// Inserts each element after the previous one, keeping document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Append;

/// Inserts each element before the previous one, reversing document order in
/// containers that keep insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prepend;

impl InsertionPolicy for Append {
    #[inline]
    fn insert_item<S: Sequence + ?Sized>(target: &mut S, item: S::Item) {
        target.append(item);
    }

    #[inline]
    fn insert_entry<M: Mapping + ?Sized>(target: &mut M, key: M::Key, value: M::Value) {
        target.append(key, value);
    }
}

impl InsertionPolicy for Prepend {
    #[inline]
    fn insert_item<S: Sequence + ?Sized>(target: &mut S, item: S::Item) {
        target.prepend(item);
    }

    #[inline]
    fn insert_entry<M: Mapping + ?Sized>(target: &mut M, key: M::Key, value: M::Value) {
        target.prepend(key, value);
    }
}

// -----------------------------------------------------------------------------
// Readers

/// Reads every element of a JSON array into `target` with policy `P`.
///
/// Each element is default-constructed, read, and then inserted, so an element
/// of the wrong kind is inserted as its default value.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
///
/// use jb_bind::{Context, Prepend, read_sequence};
/// use serde_json::json;
///
/// let mut cx = Context::new();
/// let mut target: VecDeque<i32> = VecDeque::new();
/// read_sequence::<Prepend, _>(&json!([1, 2, 3]), &mut target, &mut cx);
///
/// assert_eq!(target, [3, 2, 1]);
/// ```
pub fn read_sequence<P, S>(value: &Value, target: &mut S, cx: &mut Context)
where
    P: InsertionPolicy,
    S: Sequence + ?Sized,
    S::Item: FromJson + Default,
{
    let Some(items) = value.as_array() else {
        cx.report(IssueKind::Mismatch {
            expected: "an array",
            found: value.kind(),
        });
        return;
    };

    for (index, item) in items.iter().enumerate() {
        let element = cx.at_index(index, |cx| deserialize_new::<S::Item>(item, cx));
        P::insert_item(target, element);
    }
}

/// Reads every member of a JSON object into `target` with policy `P`.
///
/// Members whose name is not a valid key are reported and skipped.
pub fn read_mapping<P, M>(value: &Value, target: &mut M, cx: &mut Context)
where
    P: InsertionPolicy,
    M: Mapping + ?Sized,
    M::Key: JsonKey,
    M::Value: FromJson + Default,
{
    let Some(members) = value.as_object() else {
        cx.report(IssueKind::Mismatch {
            expected: "an object",
            found: value.kind(),
        });
        return;
    };

    for (name, member) in members {
        cx.at_key(name, |cx| {
            let Some(key) = M::Key::from_key(name, cx) else {
                return;
            };
            let value = deserialize_new::<M::Value>(member, cx);
            P::insert_entry(target, key, value);
        });
    }
}
