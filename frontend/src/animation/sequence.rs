//! Staged typing effect. Phases run strictly in order: a phase only starts
//! typing once the previous one is fully shown.

use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub struct TypingSequence {
    phases: Vec<&'static str>,
    phase: usize,
    typed: usize,
}

pub enum SequenceAction {
    Tick,
}

impl TypingSequence {
    pub fn new(phases: Vec<&'static str>) -> Self {
        let mut sequence = Self { phases, phase: 0, typed: 0 };
        sequence.skip_empty();
        sequence
    }

    fn skip_empty(&mut self) {
        while self.phase < self.phases.len()
            && self.typed >= self.phases[self.phase].chars().count()
        {
            self.phase += 1;
            self.typed = 0;
        }
    }

    /// Reveals one more character.
    pub fn tick(&mut self) {
        if self.is_done() {
            return;
        }
        self.typed += 1;
        self.skip_empty();
    }

    pub fn is_done(&self) -> bool {
        self.phase >= self.phases.len()
    }

    pub fn is_phase_complete(&self, index: usize) -> bool {
        index < self.phase
    }

    pub fn is_phase_started(&self, index: usize) -> bool {
        index <= self.phase && index < self.phases.len()
    }

    /// Text of phase `index` as currently typed.
    pub fn visible(&self, index: usize) -> &'static str {
        let Some(text) = self.phases.get(index).copied() else {
            return "";
        };
        if index < self.phase {
            text
        } else if index == self.phase {
            let end = text
                .char_indices()
                .nth(self.typed)
                .map(|(i, _)| i)
                .unwrap_or(text.len());
            &text[..end]
        } else {
            ""
        }
    }
}

impl Reducible for TypingSequence {
    type Action = SequenceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SequenceAction::Tick => {
                let mut next = (*self).clone();
                next.tick();
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_run_in_order() {
        let mut seq = TypingSequence::new(vec!["ab", "c"]);
        assert_eq!(seq.visible(0), "");
        assert!(!seq.is_phase_started(1));

        seq.tick();
        assert_eq!(seq.visible(0), "a");
        assert_eq!(seq.visible(1), "");

        seq.tick();
        assert!(seq.is_phase_complete(0));
        assert_eq!(seq.visible(0), "ab");
        assert!(seq.is_phase_started(1));
        assert_eq!(seq.visible(1), "");

        seq.tick();
        assert_eq!(seq.visible(1), "c");
        assert!(seq.is_done());
    }

    #[test]
    fn test_tick_after_done_is_noop() {
        let mut seq = TypingSequence::new(vec!["x"]);
        seq.tick();
        let done = seq.clone();
        seq.tick();
        assert_eq!(seq, done);
    }

    #[test]
    fn test_empty_phases_are_skipped() {
        let mut seq = TypingSequence::new(vec!["", "hi", ""]);
        assert!(seq.is_phase_complete(0));
        seq.tick();
        seq.tick();
        assert!(seq.is_done());
        assert_eq!(seq.visible(1), "hi");
        assert!(TypingSequence::new(vec![]).is_done());
    }

    #[test]
    fn test_multibyte_text() {
        let mut seq = TypingSequence::new(vec!["é→x"]);
        seq.tick();
        seq.tick();
        assert_eq!(seq.visible(0), "é→");
    }
}
