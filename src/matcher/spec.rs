use super::MatchError;

/// What a matcher does with the lines its pattern hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Print,
    Count,
    PrintAndCount,
}

impl MatchKind {
    /// Translates a command line flag token into a matcher kind.
    pub fn from_flag(flag: &str) -> Result<MatchKind, MatchError> {
        match flag {
            "-p" => Ok(MatchKind::Print),
            "-c" => Ok(MatchKind::Count),
            "-pc" => Ok(MatchKind::PrintAndCount),
            _ => Err(MatchError::UnrecognizedFlag(flag.to_string())),
        }
    }

    pub fn prints(&self) -> bool {
        matches!(self, MatchKind::Print | MatchKind::PrintAndCount)
    }

    pub fn counts(&self) -> bool {
        matches!(self, MatchKind::Count | MatchKind::PrintAndCount)
    }
}

/// One matching rule: a kind and the regex source text it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpec {
    pub kind: MatchKind,
    pub pattern: String,
}

impl MatchSpec {
    pub fn new(kind: MatchKind, pattern: impl Into<String>) -> Self {
        MatchSpec {
            kind,
            pattern: pattern.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-p", MatchKind::Print)]
    #[case("-c", MatchKind::Count)]
    #[case("-pc", MatchKind::PrintAndCount)]
    fn flag_to_kind(#[case] flag: &str, #[case] expected: MatchKind) {
        assert_eq!(expected, MatchKind::from_flag(flag).unwrap());
    }

    #[rstest]
    #[case("qk")]
    #[case("-q")]
    #[case("")]
    fn unknown_flag_is_rejected(#[case] flag: &str) {
        let err = MatchKind::from_flag(flag).unwrap_err();
        assert_eq!(format!("unrecognized flag: {}", flag), err.to_string());
    }

    #[rstest]
    #[case(MatchKind::Print, true, false)]
    #[case(MatchKind::Count, false, true)]
    #[case(MatchKind::PrintAndCount, true, true)]
    fn kind_behavior(#[case] kind: MatchKind, #[case] prints: bool, #[case] counts: bool) {
        assert_eq!(prints, kind.prints());
        assert_eq!(counts, kind.counts());
    }
}
