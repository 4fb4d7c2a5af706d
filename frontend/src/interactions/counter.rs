use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatParseError {
    #[error("Stat label {0:?} contains no number")]
    NotANumber(String),
    #[error("Stat label {0:?} is too large to animate")]
    TooLarge(String),
}

/// Count-up animation of a numeric stat label such as `1,250+` or `98%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCounter {
    target: u64,
    plus: bool,
    percent: bool,
    steps: u32,
}

impl StatCounter {
    /// Parses the label's digits, ignoring every other character.
    pub fn parse(text: &str, steps: u32) -> Result<Self, StatParseError> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(StatParseError::NotANumber(text.to_string()));
        }
        let target = digits
            .parse::<u64>()
            .map_err(|_| StatParseError::TooLarge(text.to_string()))?;
        Ok(Self {
            target,
            plus: text.contains('+'),
            percent: text.contains('%'),
            steps: steps.max(1),
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Label shown after `step` of the animation's steps.
    pub fn frame(&self, step: u32) -> String {
        let step = step.min(self.steps) as u128;
        let value = self.target as u128 * step / self.steps as u128;
        let mut label = value.to_string();
        if self.plus {
            label.push('+');
        }
        if self.percent {
            label.push('%');
        }
        label
    }

    /// Labels for steps 1 through the last, which shows the exact target.
    pub fn frames(&self) -> impl Iterator<Item = String> + '_ {
        (1..=self.steps).map(move |step| self.frame(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separator_and_suffix() {
        let counter = StatCounter::parse("1,250+", 60).unwrap();
        assert_eq!(counter.target(), 1250);

        let frames: Vec<String> = counter.frames().collect();
        assert_eq!(frames.len(), 60);
        assert_eq!(frames.last().map(String::as_str), Some("1250+"));

        let values: Vec<u64> = frames
            .iter()
            .map(|f| f.trim_end_matches('+').parse().unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn percent_suffix_is_kept() {
        let counter = StatCounter::parse("98%", 60).unwrap();
        assert_eq!(counter.frame(0), "0%");
        assert_eq!(counter.frame(60), "98%");
        assert_eq!(counter.frame(600), "98%");
    }

    #[test]
    fn both_suffixes_in_fixed_order() {
        let counter = StatCounter::parse("%50+", 10).unwrap();
        assert_eq!(counter.frame(10), "50+%");
    }

    #[test]
    fn labels_without_digits_are_not_numbers() {
        assert_eq!(
            StatCounter::parse("24/7", 60).map(|c| c.target()),
            Ok(247)
        );
        assert!(matches!(
            StatCounter::parse("∞", 60),
            Err(StatParseError::NotANumber(_))
        ));
        assert!(matches!(
            StatCounter::parse("99999999999999999999999", 60),
            Err(StatParseError::TooLarge(_))
        ));
    }

    #[test]
    fn small_targets_never_exceed_target() {
        let counter = StatCounter::parse("5", 60).unwrap();
        let values: Vec<u64> = counter.frames().map(|f| f.parse().unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values.last(), Some(&5));
    }
}
