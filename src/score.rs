use crate::session::{Slot, SlotStatus};

/// Final result of a round, kept at full precision; rounding happens only
/// at the presentation boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Score {
    pub wpm: f64,
    pub accuracy: f64,
}

impl Score {
    /// Derive the score from a finished slot sequence and the elapsed time
    /// in milliseconds.
    ///
    /// A word is counted per correctly typed space plus one for the final
    /// word. Skipped slots are abstained: they count neither as errors nor
    /// as correct, and a space that was jumped over by a word skip stays
    /// Remaining and so does not count as a word boundary.
    pub fn from_round(slots: &[Slot], duration_ms: f64) -> Self {
        let word_count = slots
            .iter()
            .filter(|s| s.status == SlotStatus::Typed && s.character == ' ')
            .count()
            + 1;

        let error_count = slots
            .iter()
            .filter(|s| matches!(s.status, SlotStatus::Error | SlotStatus::SpaceError))
            .count();

        let wpm = if duration_ms > 0.0 {
            (word_count as f64 / duration_ms) * 60_000.0
        } else {
            0.0
        };

        let accuracy = if slots.is_empty() {
            100.0
        } else {
            (1.0 - error_count as f64 / slots.len() as f64) * 100.0
        };

        Self { wpm, accuracy }
    }

    pub fn wpm_rounded(&self) -> u32 {
        self.wpm.round() as u32
    }

    pub fn accuracy_rounded(&self) -> u32 {
        self.accuracy.round() as u32
    }
}
