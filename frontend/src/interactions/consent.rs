/// Download consent dialog. Whether the download action is enabled is
/// always derived from the consent flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsentModal {
    open: bool,
    consent: bool,
}

/// Result of pressing the dialog's download action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The download goes ahead and the dialog closes shortly after.
    Proceed,
    /// No consent yet; the click must not navigate.
    Blocked,
}

/// How the download action is shown for a given consent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionAppearance {
    pub opacity: &'static str,
    pub pointer_events: &'static str,
    pub disabled: bool,
}

impl ConsentModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn has_consent(&self) -> bool {
        self.consent
    }

    pub fn download_enabled(&self) -> bool {
        self.consent
    }

    pub fn action_appearance(&self) -> ActionAppearance {
        if self.download_enabled() {
            ActionAppearance {
                opacity: "1",
                pointer_events: "auto",
                disabled: false,
            }
        } else {
            ActionAppearance {
                opacity: "0.5",
                pointer_events: "none",
                disabled: true,
            }
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    pub fn confirm(&self) -> Confirmation {
        if self.download_enabled() {
            Confirmation::Proceed
        } else {
            Confirmation::Blocked
        }
    }

    /// Closes the dialog and withdraws consent.
    pub fn close(&mut self) {
        self.open = false;
        self.consent = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(modal: &ConsentModal) {
        assert_eq!(modal.download_enabled(), modal.has_consent());
        assert_eq!(modal.action_appearance().disabled, !modal.has_consent());
    }

    #[test]
    fn download_requires_consent() {
        let mut modal = ConsentModal::default();
        modal.open();
        assert_consistent(&modal);
        assert_eq!(modal.confirm(), Confirmation::Blocked);

        modal.set_consent(true);
        assert_consistent(&modal);
        assert_eq!(modal.confirm(), Confirmation::Proceed);

        modal.set_consent(false);
        assert_consistent(&modal);
        assert_eq!(modal.confirm(), Confirmation::Blocked);
    }

    #[test]
    fn reopening_starts_without_consent() {
        let mut modal = ConsentModal::default();
        modal.open();
        modal.set_consent(true);
        modal.close();
        assert!(!modal.is_open());
        assert_consistent(&modal);

        modal.open();
        assert!(modal.is_open());
        assert!(!modal.has_consent());
        assert_eq!(modal.confirm(), Confirmation::Blocked);
        assert_eq!(
            modal.action_appearance(),
            ActionAppearance {
                opacity: "0.5",
                pointer_events: "none",
                disabled: true,
            }
        );
    }
}
