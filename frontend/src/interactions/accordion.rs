/// A group of panels of which at most one is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Builds the group from the panels' current open markers. When the
    /// markup opens several panels, only the first stays open.
    pub fn from_markers(markers: impl IntoIterator<Item = bool>) -> Self {
        let mut len = 0;
        let mut open = None;
        for (i, active) in markers.into_iter().enumerate() {
            len = i + 1;
            if active && open.is_none() {
                open = Some(i);
            }
        }
        Self { len, open }
    }

    /// Handles a click on a panel header and returns the open panel.
    pub fn click(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        self.open
    }

    pub fn open_panel(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_count(&self) -> usize {
        (0..self.len).filter(|&i| self.is_open(i)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_open_panel_closes_it() {
        let mut accordion = Accordion::new(3);
        assert_eq!(accordion.click(1), Some(1));
        assert_eq!(accordion.click(1), None);
        assert_eq!(accordion.open_count(), 0);
    }

    #[test]
    fn clicking_another_panel_moves_the_open_one() {
        let mut accordion = Accordion::new(3);
        accordion.click(0);
        assert_eq!(accordion.click(2), Some(2));
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn at_most_one_panel_open_after_any_clicks() {
        let mut accordion = Accordion::new(5);
        let clicks = [0, 3, 3, 1, 4, 4, 4, 2, 0, 7, 1, 1, 2];
        for &i in &clicks {
            accordion.click(i);
            assert!(accordion.open_count() <= 1);
        }
        assert_eq!(accordion.open_panel(), Some(2));
    }

    #[test]
    fn markup_with_several_open_panels_is_normalized() {
        let accordion = Accordion::from_markers([false, true, true, false]);
        assert_eq!(accordion.len(), 4);
        assert_eq!(accordion.open_panel(), Some(1));
        assert_eq!(accordion.open_count(), 1);
    }
}
