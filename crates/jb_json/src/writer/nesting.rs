use super::{MAX_DEPTH, WriteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    Array,
    Object,
}

/// Where a value is being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    Root,
    Item { first: bool },
    Member,
}

#[derive(Debug)]
struct Frame {
    container: Container,
    slot: Slot,
    len: usize,
    key_pending: bool,
}

/// Event sequence validation shared by the writers.
#[derive(Debug, Default)]
pub(crate) struct Nesting {
    frames: Vec<Frame>,
    roots: usize,
    dropped: usize,
}

impl Nesting {
    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.frames.len() + self.dropped
    }

    /// Whether events are being dropped inside a too-deep container.
    #[inline]
    pub(crate) fn dropping(&self) -> bool {
        self.dropped > 0
    }

    /// Whether a container started now has to be dropped.
    #[inline]
    pub(crate) fn at_limit(&self) -> bool {
        self.frames.len() >= MAX_DEPTH
    }

    #[inline]
    pub(crate) fn drop_open(&mut self) {
        self.dropped += 1;
    }

    #[inline]
    pub(crate) fn drop_close(&mut self) {
        self.dropped -= 1;
    }

    /// Accounts for a value about to be written and returns its slot.
    pub(crate) fn begin_value(&mut self) -> Result<Slot, WriteError> {
        let Some(frame) = self.frames.last_mut() else {
            if self.roots > 0 {
                return Err(WriteError::Misuse("a document holds a single root value"));
            }
            self.roots += 1;
            return Ok(Slot::Root);
        };

        match frame.container {
            Container::Array => {
                let first = frame.len == 0;
                frame.len += 1;
                Ok(Slot::Item { first })
            }
            Container::Object => {
                if !frame.key_pending {
                    return Err(WriteError::Misuse("object member written without a key"));
                }
                frame.key_pending = false;
                frame.len += 1;
                Ok(Slot::Member)
            }
        }
    }

    /// Accounts for a key and returns whether it names the first member.
    pub(crate) fn begin_key(&mut self) -> Result<bool, WriteError> {
        match self.frames.last_mut() {
            Some(frame) if frame.container == Container::Object => {
                if frame.key_pending {
                    return Err(WriteError::Misuse("two keys written without a value"));
                }
                frame.key_pending = true;
                Ok(frame.len == 0)
            }
            _ => Err(WriteError::Misuse("key written outside of an object")),
        }
    }

    #[inline]
    pub(crate) fn open(&mut self, container: Container, slot: Slot) {
        self.frames.push(Frame {
            container,
            slot,
            len: 0,
            key_pending: false,
        });
    }

    /// Closes the innermost container and returns the slot it was opened in.
    pub(crate) fn close(&mut self, container: Container) -> Result<Slot, WriteError> {
        let Some(frame) = self.frames.last() else {
            return Err(WriteError::Misuse("closed a container that was never opened"));
        };
        if frame.container != container {
            return Err(WriteError::Misuse("closed a container of the other kind"));
        }
        if frame.key_pending {
            return Err(WriteError::Misuse("object closed after a key without a value"));
        }
        let slot = frame.slot;
        self.frames.pop();
        Ok(slot)
    }

    pub(crate) fn finish(&self) -> Result<(), WriteError> {
        if self.depth() > 0 {
            return Err(WriteError::Incomplete { open: self.depth() });
        }
        if self.roots == 0 {
            return Err(WriteError::Empty);
        }
        Ok(())
    }
}
