use std::time::SystemTime;

/// Status of a single character slot in the target text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotStatus {
    Remaining,
    Typed,
    Error,
    SpaceError,
    Skipped,
}

/// One character of the target text together with its current status.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub character: char,
    pub status: SlotStatus,
}

/// A keystroke the session understands. Everything else is dropped before
/// it reaches the session (see [`Key::from_char`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Space,
    Backspace,
}

impl Key {
    /// Map a case-normalized character to a session key. Only the 26
    /// lowercase letters and the space character are accepted; the caller
    /// is responsible for lowercasing letters first.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Key::Space),
            'a'..='z' => Some(Key::Letter(c)),
            _ => None,
        }
    }
}

/// One round of typing: the target text, the per-character status log,
/// the cursor, and the timing anchor.
#[derive(Clone, Debug)]
pub struct Session {
    pub target: String,
    pub slots: Vec<Slot>,
    pub position: usize,
    pub started_at: Option<SystemTime>,
}

impl Session {
    pub fn new(target: String) -> Self {
        let slots = target
            .chars()
            .map(|character| Slot {
                character,
                status: SlotStatus::Remaining,
            })
            .collect();

        Self {
            target,
            slots,
            position: 0,
            started_at: None,
        }
    }

    /// Consume one keystroke. Keys arriving after the cursor has reached
    /// the end of the target are ignored.
    pub fn press(&mut self, key: Key) {
        if self.position >= self.slots.len() {
            return;
        }

        if self.started_at.is_none() {
            self.started_at = Some(SystemTime::now());
        }

        match key {
            Key::Backspace => {
                if self.position > 0 {
                    self.position -= 1;
                    self.slots[self.position].status = SlotStatus::Remaining;
                }
            }
            Key::Space => {
                if self.slots[self.position].character == ' ' {
                    self.slots[self.position].status = SlotStatus::Typed;
                    self.position += 1;
                } else {
                    // Space mid-word: give up on the rest of this word.
                    self.slots[self.position].status = SlotStatus::SpaceError;

                    let mut next = self.position + 1;
                    while next < self.slots.len() && self.slots[next].character != ' ' {
                        self.slots[next].status = SlotStatus::Skipped;
                        next += 1;
                    }

                    // The separating space is jumped over too (it stays
                    // Remaining); the cursor lands at the start of the
                    // next word. Intentional, see the skip-jump notes in
                    // DESIGN.md before touching this.
                    self.position = (next + 1).min(self.slots.len());
                }
            }
            Key::Letter(c) => {
                let slot = &mut self.slots[self.position];
                slot.status = if slot.character == c {
                    SlotStatus::Typed
                } else {
                    SlotStatus::Error
                };
                self.position += 1;
            }
        }
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn has_finished(&self) -> bool {
        self.position >= self.slots.len()
    }

    /// Milliseconds since the first keystroke, 0.0 before any input.
    pub fn elapsed_ms(&self) -> f64 {
        self.started_at
            .and_then(|t| t.elapsed().ok())
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}
