use fnv::FnvHashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum NoteState<B> {
    Pending,
    Loaded(B),
    Failed,
}

/// Why a requested note cannot start a source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unplayable<'a> {
    /// The color channel fell past the end of the note table.
    Unmapped,
    NotLoaded(&'a str),
    Failed(&'a str),
}

/// Per-note load bookkeeping for decoded samples.
///
/// Generic over the buffer type so the browser side can store
/// `AudioBuffer`s while host tests use plain values.
#[derive(Clone, Debug)]
pub struct NoteBank<B> {
    notes: FnvHashMap<&'static str, NoteState<B>>,
    expected: Vec<&'static str>,
}

impl<B> NoteBank<B> {
    /// Create a bank expecting `notes`, all `Pending`.
    pub fn new(notes: &[&'static str]) -> Self {
        let mut map = FnvHashMap::default();
        for note in notes {
            map.insert(*note, NoteState::Pending);
        }
        Self {
            notes: map,
            expected: notes.to_vec(),
        }
    }

    /// Record a decoded buffer. Failed notes stay failed: a fetch is never
    /// retried within a session, so a late result is dropped.
    pub fn insert(&mut self, note: &'static str, buffer: B) -> bool {
        match self.notes.get(note) {
            Some(NoteState::Failed) => false,
            _ => {
                self.notes.insert(note, NoteState::Loaded(buffer));
                true
            }
        }
    }

    pub fn mark_failed(&mut self, note: &'static str) {
        if !matches!(self.notes.get(note), Some(NoteState::Loaded(_))) {
            self.notes.insert(note, NoteState::Failed);
        }
    }

    /// Buffer for `note` if it has finished decoding.
    pub fn get(&self, note: &str) -> Option<&B> {
        match self.notes.get(note) {
            Some(NoteState::Loaded(b)) => Some(b),
            _ => None,
        }
    }

    pub fn state(&self, note: &str) -> Option<&NoteState<B>> {
        self.notes.get(note)
    }

    /// Buffer to play for a mapped note. Unmapped, pending and failed notes
    /// are refused so the caller can warn and skip playback.
    pub fn playable<'a>(&'a self, note: Option<&'a str>) -> Result<&'a B, Unplayable<'a>> {
        let note = note.ok_or(Unplayable::Unmapped)?;
        match self.state(note) {
            Some(NoteState::Loaded(b)) => Ok(b),
            Some(NoteState::Failed) => Err(Unplayable::Failed(note)),
            Some(NoteState::Pending) | None => Err(Unplayable::NotLoaded(note)),
        }
    }

    pub fn is_loaded(&self, note: &str) -> bool {
        self.get(note).is_some()
    }

    pub fn loaded_count(&self) -> usize {
        self.notes
            .values()
            .filter(|s| matches!(s, NoteState::Loaded(_)))
            .count()
    }

    pub fn failed(&self) -> Vec<&'static str> {
        self.expected
            .iter()
            .copied()
            .filter(|n| matches!(self.notes.get(*n), Some(NoteState::Failed)))
            .collect()
    }

    pub fn expected_len(&self) -> usize {
        self.expected.len()
    }

    /// Every expected note has decoded.
    pub fn is_ready(&self) -> bool {
        self.expected.iter().all(|n| self.is_loaded(n))
    }

    /// Every expected note has either decoded or failed.
    pub fn is_settled(&self) -> bool {
        self.expected
            .iter()
            .all(|n| !matches!(self.notes.get(*n), Some(NoteState::Pending) | None))
    }
}
