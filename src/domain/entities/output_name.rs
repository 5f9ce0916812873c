use std::fmt;

/// Extension given to every carved output
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Minimum number of decimal digits in an output name
pub const OUTPUT_INDEX_WIDTH: usize = 3;

/// Name of a carved output file: `000.jpg`, `001.jpg`, ...
///
/// Indices beyond 999 widen instead of wrapping (`1000.jpg`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputName(String);

impl OutputName {
    pub fn for_index(index: u64) -> Self {
        Self(format!(
            "{:0width$}.{}",
            index,
            OUTPUT_EXTENSION,
            width = OUTPUT_INDEX_WIDTH
        ))
    }

    /// Returns true if a carve run could produce a file called `name`
    pub fn could_be(name: &str) -> bool {
        name.strip_suffix(OUTPUT_EXTENSION)
            .and_then(|stem| stem.strip_suffix('.'))
            .is_some_and(|digits| {
                digits.len() >= OUTPUT_INDEX_WIDTH && digits.bytes().all(|b| b.is_ascii_digit())
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for OutputName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padded() {
        assert_eq!(OutputName::for_index(0).as_str(), "000.jpg");
        assert_eq!(OutputName::for_index(7).as_str(), "007.jpg");
        assert_eq!(OutputName::for_index(42).as_str(), "042.jpg");
        assert_eq!(OutputName::for_index(999).as_str(), "999.jpg");
    }

    #[test]
    fn test_could_be() {
        assert!(OutputName::could_be("000.jpg"));
        assert!(OutputName::could_be("1000.jpg"));
        assert!(!OutputName::could_be("00.jpg"));
        assert!(!OutputName::could_be("card.raw"));
        assert!(!OutputName::could_be("abc.jpg"));
        assert!(!OutputName::could_be("000.jpeg"));
    }

    #[test]
    fn test_widens_past_three_digits() {
        assert_eq!(OutputName::for_index(1000).as_str(), "1000.jpg");
        assert_eq!(OutputName::for_index(123_456).as_str(), "123456.jpg");
    }
}
