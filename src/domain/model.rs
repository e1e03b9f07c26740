use crate::domain::functions::Consumer;
use crate::utils::error::Result;

/// Demonstration branch chosen by the first command-line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    NoParameters,
    Message,
    Product,
    ListForEach,
    ConsumerForEach,
    LocalFunctions,
    StaticFunctions,
    /// Unrecognised input; behaves like `NoParameters`.
    Fallback,
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        match value {
            "0" => Selector::NoParameters,
            "1" => Selector::Message,
            "2" => Selector::Product,
            "3" => Selector::ListForEach,
            "4" => Selector::ConsumerForEach,
            "5" => Selector::LocalFunctions,
            "6" => Selector::StaticFunctions,
            _ => Selector::Fallback,
        }
    }
}

/// The fixed list of guesses walked by the for-each demonstrations.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence {
    values: Vec<f64>,
}

impl SampleSequence {
    pub fn new() -> Self {
        Self {
            values: vec![719.210, 719.768, 719.771, 719.77125],
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Hands every element to `action` in order, stopping at the first error.
    pub fn for_each<C: Consumer>(&self, mut action: C) -> Result<()> {
        self.values.iter().try_for_each(|&v| action.accept(v))
    }
}

impl Default for SampleSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DemoError;

    #[test]
    fn test_selector_known_values() {
        assert_eq!(Selector::from("0"), Selector::NoParameters);
        assert_eq!(Selector::from("1"), Selector::Message);
        assert_eq!(Selector::from("2"), Selector::Product);
        assert_eq!(Selector::from("3"), Selector::ListForEach);
        assert_eq!(Selector::from("4"), Selector::ConsumerForEach);
        assert_eq!(Selector::from("5"), Selector::LocalFunctions);
        assert_eq!(Selector::from("6"), Selector::StaticFunctions);
    }

    #[test]
    fn test_selector_fallback() {
        for input in ["7", "", " 1", "01", "abc", "-1"] {
            assert_eq!(Selector::from(input), Selector::Fallback, "input {:?}", input);
        }
    }

    #[test]
    fn test_sample_sequence_order() {
        let seq = SampleSequence::new();
        assert_eq!(seq.values().len(), 4);
        assert_eq!(seq.values(), &[719.210, 719.768, 719.771, 719.77125]);
    }

    #[test]
    fn test_sample_sequence_display_form() {
        let rendered: Vec<String> = SampleSequence::new()
            .values()
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(rendered, vec!["719.21", "719.768", "719.771", "719.77125"]);
    }

    #[test]
    fn test_for_each_stops_on_error() {
        let seq = SampleSequence::new();
        let mut visited = 0;
        let result = seq.for_each(|_v: f64| {
            visited += 1;
            if visited == 2 {
                return Err(DemoError::from(std::io::Error::other("sink closed")));
            }
            Ok(())
        });
        assert!(result.is_err());
        assert_eq!(visited, 2);
    }
}
