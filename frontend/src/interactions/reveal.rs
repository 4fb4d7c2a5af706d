/// Remembers which of a fixed set of elements already entered the
/// viewport. Only the first entry of each element counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShot {
    fired: Vec<bool>,
}

impl OneShot {
    pub fn new(len: usize) -> Self {
        Self {
            fired: vec![false; len],
        }
    }

    /// Records an entry of element `index`. True only the first time;
    /// unknown indices never fire.
    pub fn enter(&mut self, index: usize) -> bool {
        match self.fired.get_mut(index) {
            Some(fired) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }

    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }

    /// Number of elements still waiting for their first entry.
    pub fn remaining(&self) -> usize {
        self.fired.iter().filter(|fired| !**fired).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::counter::StatCounter;

    #[test]
    fn second_entry_is_ignored() {
        let mut cards = OneShot::new(3);
        assert!(cards.enter(1));
        assert!(!cards.enter(1));
        assert!(cards.has_fired(1));
        assert!(!cards.has_fired(0));
        assert_eq!(cards.remaining(), 2);
        assert!(!cards.enter(7));
    }

    #[test]
    fn scrolling_back_does_not_restart_a_counter() {
        let labels = ["1,250+", "98%"];
        let mut stats = OneShot::new(labels.len());
        let mut started = Vec::new();

        // Viewport entries as the user scrolls down, up and down again.
        for index in [0, 1, 0, 1, 0] {
            if stats.enter(index) {
                started.push(StatCounter::parse(labels[index], 60).unwrap());
            }
        }

        assert_eq!(started.len(), 2);
        assert_eq!(started[0].frames().last().unwrap(), "1250+");
        assert_eq!(stats.remaining(), 0);
    }
}
