use super::{Document, MistakeId};

impl Document {
    /// Move to the next valid mistake. Returns false once the end is reached.
    pub fn advance(&mut self) -> bool {
        let len = self.mistakes.len() as isize;

        self.position = (self.position + 1).min(len);
        while self.position < len && !self.mistakes[self.position as usize].valid {
            self.position += 1;
        }

        self.position < len
    }

    /// Move to the previous valid mistake.
    ///
    /// The very first entry is never reported as a previous mistake: reaching
    /// position 0 returns false.
    pub fn retreat(&mut self) -> bool {
        self.position = (self.position - 1).max(-1);
        while self.position > 0 && !self.mistakes[self.position as usize].valid {
            self.position -= 1;
        }

        self.position > 0
    }

    /// The mistake under the cursor, if the cursor sits on one
    pub fn current(&self) -> Option<MistakeId> {
        usize::try_from(self.position)
            .ok()
            .filter(|&index| index < self.mistakes.len())
            .map(MistakeId)
    }

    pub fn next_mistake(&mut self) -> Option<MistakeId> {
        if self.advance() {
            self.current()
        } else {
            None
        }
    }

    pub fn previous_mistake(&mut self) -> Option<MistakeId> {
        if self.retreat() {
            self.current()
        } else {
            None
        }
    }

    /// Place the cursor so that the next [`Document::advance`] lands on the
    /// first valid mistake at or after the 0-based line `target`.
    pub fn jump_to_line(&mut self, target: usize) {
        let target = target.min(self.lines.len());
        if target == 0 {
            self.position = -1;
            return;
        }

        let first = self.mistakes.partition_point(|m| m.line < target);
        self.position = first as isize - 1;
    }
}
