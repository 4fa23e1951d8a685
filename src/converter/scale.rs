/// A named magnitude step applied to a three-digit group.
///
/// Variants are ordered from least to most significant, so comparing two
/// scales compares their magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scale {
    /// The lowest group, which carries no scale word.
    Units,
    /// `10^3`
    Thousand,
    /// `10^6`
    Million,
    /// `10^9`
    Billion,
    /// `10^12`
    Trillion,
}

impl Scale {
    /// Every scale, least significant first. The index of a scale in this
    /// slice is the index of the digit group it names.
    pub const ALL: [Self; 5] =
        [Self::Units, Self::Thousand, Self::Million, Self::Billion, Self::Trillion];

    /// Returns the scale naming the group at `index`, counted from the least
    /// significant group.
    ///
    /// # Example
    /// ```
    /// use numwords::converter::scale::Scale;
    ///
    /// assert_eq!(Scale::from_index(2), Some(Scale::Million));
    /// assert_eq!(Scale::from_index(5), None);
    /// ```
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The word appended after a group, or `None` for the units group.
    #[must_use]
    pub const fn word(self) -> Option<&'static str> {
        match self {
            Self::Units => None,
            Self::Thousand => Some("thousand"),
            Self::Million => Some("million"),
            Self::Billion => Some("billion"),
            Self::Trillion => Some("trillion"),
        }
    }

    /// The multiplier this scale stands for.
    ///
    /// # Example
    /// ```
    /// use numwords::converter::scale::Scale;
    ///
    /// assert_eq!(Scale::Billion.value(), 1_000_000_000);
    /// ```
    #[must_use]
    pub const fn value(self) -> u64 {
        match self {
            Self::Units => 1,
            Self::Thousand => 1_000,
            Self::Million => 1_000_000,
            Self::Billion => 1_000_000_000,
            Self::Trillion => 1_000_000_000_000,
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.word().unwrap_or("units"))
    }
}
