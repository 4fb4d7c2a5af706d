/// Swaps the document title while the tab is in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSwap {
    original: String,
    farewell: String,
}

impl TitleSwap {
    pub fn new(original: impl Into<String>, farewell: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            farewell: farewell.into(),
        }
    }

    pub fn title(&self, hidden: bool) -> &str {
        if hidden {
            &self.farewell
        } else {
            &self.original
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_tab_shows_farewell_and_visible_restores() {
        let swap = TitleSwap::new("RenalFlow", "Come back");
        assert_eq!(swap.title(true), "Come back");
        assert_eq!(swap.title(false), "RenalFlow");
    }
}
