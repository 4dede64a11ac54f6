use core::mem;

use serde_json::{Map, Number, Value};

use super::nesting::{Container, Nesting};
use super::{JsonWriter, MAX_DEPTH, WriteError};

#[derive(Debug)]
enum Partial {
    Array(Vec<Value>),
    Object(Map<String, Value>, String),
}

// -----------------------------------------------------------------------------
// ValueWriter

/// Builds a [`Value`] from writer events.
///
/// Accepts the same event sequences as [`StreamWriter`](super::StreamWriter); a
/// repeated key inside one object keeps the last value at the first position.
///
/// # Examples
///
/// ```
/// use jb_json::{JsonWriter, ValueWriter};
/// use serde_json::json;
///
/// let mut writer = ValueWriter::new();
/// writer.start_array();
/// writer.boolean(true);
/// writer.string("x");
/// writer.end_array();
///
/// assert_eq!(writer.finish().unwrap(), json!([true, "x"]));
/// ```
#[derive(Debug, Default)]
pub struct ValueWriter {
    nesting: Nesting,
    building: Vec<Partial>,
    root: Option<Value>,
    error: Option<WriteError>,
}

impl ValueWriter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the finished value.
    pub fn finish(self) -> Result<Value, WriteError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        self.nesting.finish()?;
        self.root.ok_or(WriteError::Empty)
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

    fn attach(&mut self, value: Value) {
        match self.building.last_mut() {
            None => self.root = Some(value),
            Some(Partial::Array(items)) => items.push(value),
            Some(Partial::Object(members, key)) => {
                members.insert(mem::take(key), value);
            }
        }
    }

    fn place(&mut self, value: Value) {
        if self.live() {
            let result = self.nesting.begin_value().map(|_| self.attach(value));
            self.record(result);
        }
    }

    fn try_open(&mut self, container: Container) -> Result<(), WriteError> {
        let slot = self.nesting.begin_value()?;
        self.nesting.open(container, slot);
        self.building.push(match container {
            Container::Array => Partial::Array(Vec::new()),
            Container::Object => Partial::Object(Map::new(), String::new()),
        });
        Ok(())
    }

    fn try_close(&mut self, container: Container) -> Result<(), WriteError> {
        self.nesting.close(container)?;
        let value = match self.building.pop() {
            Some(Partial::Array(items)) => Value::Array(items),
            Some(Partial::Object(members, _)) => Value::Object(members),
            None => return Err(WriteError::Misuse("closed a container that was never opened")),
        };
        self.attach(value);
        Ok(())
    }

    fn try_key(&mut self, key: &str) -> Result<(), WriteError> {
        self.nesting.begin_key()?;
        if let Some(Partial::Object(_, pending)) = self.building.last_mut() {
            key.clone_into(pending);
        }
        Ok(())
    }
}

impl JsonWriter for ValueWriter {
    fn null(&mut self) {
        self.place(Value::Null);
    }

    fn boolean(&mut self, value: bool) {
        self.place(Value::Bool(value));
    }

    fn int(&mut self, value: i32) {
        self.place(Value::from(value));
    }

    fn uint(&mut self, value: u32) {
        self.place(Value::from(value));
    }

    fn int64(&mut self, value: i64) {
        self.place(Value::from(value));
    }

    fn uint64(&mut self, value: u64) {
        self.place(Value::from(value));
    }

    fn double(&mut self, value: f64) {
        match Number::from_f64(value) {
            Some(number) => self.place(Value::Number(number)),
            None => {
                log::warn!("non-finite number {value} written as null");
                self.place(Value::Null);
            }
        }
    }

    fn string(&mut self, value: &str) {
        self.place(Value::String(value.to_owned()));
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

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ValueWriter;
    use crate::{JsonWriter, MAX_DEPTH, WriteError};

    #[test]
    fn nested_members_keep_order() {
        let mut writer = ValueWriter::new();
        writer.start_object();
        writer.key("z");
        writer.start_array();
        writer.int64(-3);
        writer.end_array();
        writer.key("a");
        writer.double(1.5);
        writer.end_object();

        let value = writer.finish().unwrap();
        assert_eq!(value, json!({"z": [-3], "a": 1.5}));
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn second_root_is_rejected() {
        let mut writer = ValueWriter::new();
        writer.int(1);
        writer.int(2);
        assert!(matches!(writer.finish(), Err(WriteError::Misuse(_))));
    }

    #[test]
    fn too_deep_containers_become_null() {
        let mut writer = ValueWriter::new();
        for _ in 0..MAX_DEPTH {
            writer.start_object();
            writer.key("next");
        }
        writer.start_array();
        writer.boolean(true);
        writer.end_array();
        for _ in 0..MAX_DEPTH {
            writer.end_object();
        }

        let mut value = &writer.finish().unwrap();
        for _ in 0..MAX_DEPTH {
            value = &value["next"];
        }
        assert!(value.is_null());
    }
}
