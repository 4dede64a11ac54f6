use jb_json::{JsonWriter, Value};

use crate::{Context, FromJson, JsonShape, Shape, ToJson};

// A raw document is copied through unchanged in both directions.

impl JsonShape for Value {
    const SHAPE: Shape = Shape::SCALAR;
}

impl ToJson for Value {
    fn to_json<W: JsonWriter + ?Sized>(&self, writer: &mut W) {
        match self {
            Value::Null => writer.null(),
            Value::Bool(value) => writer.boolean(*value),
            Value::Number(number) => {
                if let Some(value) = number.as_u64() {
                    writer.uint64(value);
                } else if let Some(value) = number.as_i64() {
                    writer.int64(value);
                } else if let Some(value) = number.as_f64() {
                    writer.double(value);
                } else {
                    writer.null();
                }
            }
            Value::String(value) => writer.string(value),
            Value::Array(items) => {
                writer.start_array();
                for item in items {
                    item.to_json(writer);
                }
                writer.end_array();
            }
            Value::Object(members) => {
                writer.start_object();
                for (key, member) in members {
                    writer.key(key);
                    member.to_json(writer);
                }
                writer.end_object();
            }
        }
    }
}

impl FromJson for Value {
    #[inline]
    fn from_json(&mut self, value: &Value, _cx: &mut Context) {
        self.clone_from(value);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{from_json, to_json, to_value};

    #[test]
    fn passthrough() {
        let raw = json!({"b": [1, -2, 2.5, null], "a": {"s": "x"}});
        assert_eq!(to_json(&raw), r#"{"b":[1,-2,2.5,null],"a":{"s":"x"}}"#);
        assert_eq!(to_value(&raw).unwrap(), raw);
        assert_eq!(from_json::<serde_json::Value>(&to_json(&raw)).unwrap(), raw);
    }
}
