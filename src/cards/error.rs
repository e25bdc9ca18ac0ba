/// Errors that can occur while constructing cards and hands.
///
/// Symbol errors carry the offending character; shape errors carry the
/// whole input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    InvalidRank(char),
    InvalidSuit(char),
    MalformedHand(String),
}

impl std::fmt::Display for CardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRank(c) => {
                write!(f, "invalid rank '{}': expected one of 23456789TJQKA", c)
            }
            Self::InvalidSuit(c) => write!(f, "invalid suit '{}': expected one of SHDC", c),
            Self::MalformedHand(s) => write!(
                f,
                "malformed hand '{}': expected 5 rank/suit pairs like 3s4h5d6c7s",
                s
            ),
        }
    }
}

impl std::error::Error for CardError {}
