use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// Largest neighbor count a cell can have.
pub const MAX_NEIGHBORS: u8 = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Neighbor count {0} is out of range, counts lie in 0..=8")]
    CountOutOfRange(u8),

    #[error("Unexpected character '{0}' in rule")]
    InvalidChar(char),

    #[error("Rule is missing its {0} part")]
    MissingPart(&'static str),
}

/// # Representation
/// Birth and survival counts are each stored as a bit set, where bit `i` on means count `i` is
/// in the set. Any bit past the 8th is ignored.
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0001_0000_0000_0000_0001
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and `s`, numbers
    /// are set on a bit basis. For instance if bit `i` in `b` is on, it means `i` is included in
    /// the set of births.
    ///
    /// Big endian is used here (i.e. `b = 0b1` means b0, and `b = 0b1_0000_0000` means b8).
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    /// Create a `RuleSet` from lists of neighbor counts.
    pub fn from_counts(birth: &[u8], survive: &[u8]) -> Result<Self, RuleError> {
        Ok(Self::new(counts_to_bits(birth)?, counts_to_bits(survive)?))
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Whether a dead cell with `n` live neighbors is born
    pub fn is_birth(&self, n: u8) -> bool {
        n <= MAX_NEIGHBORS && self.births() & (1 << n) != 0
    }

    /// Whether a live cell with `n` live neighbors survives
    pub fn is_survival(&self, n: u8) -> bool {
        n <= MAX_NEIGHBORS && self.survivals() & (1 << n) != 0
    }

    /// Birth counts in increasing order
    pub fn birth_counts(&self) -> Vec<u8> {
        bits_to_counts(self.births())
    }

    /// Survival counts in increasing order
    pub fn survival_counts(&self) -> Vec<u8> {
        bits_to_counts(self.survivals())
    }
}

fn counts_to_bits(counts: &[u8]) -> Result<u16, RuleError> {
    let mut n = 0;

    for &c in counts {
        if c > MAX_NEIGHBORS {
            return Err(RuleError::CountOutOfRange(c));
        }

        n |= 1 << c;
    }

    Ok(n)
}

fn bits_to_counts(bits: u16) -> Vec<u8> {
    (0..=MAX_NEIGHBORS).filter(|&i| bits & (1 << i) != 0).collect()
}

/// Parses rulestrings like `B3/S23`, `b3s23` or `b36/s23`. Both parts are required, but either
/// may be empty (`B/S23`).
impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[derive(Clone, Copy)]
        enum State {
            Start,
            Birth,
            Survival,
        }

        let mut state = State::Start;
        let (mut birth, mut survival) = (0u16, 0u16);
        let mut s_seen = false;

        for c in s.trim().chars() {
            match (c, state) {
                ('b' | 'B', State::Start) => {
                    state = State::Birth;
                }
                ('/', State::Birth) => {}
                ('s' | 'S', State::Birth) => {
                    state = State::Survival;
                    s_seen = true;
                }
                (n, State::Birth | State::Survival) if n.is_ascii_digit() => {
                    let n = n as u8 - b'0';

                    if n > MAX_NEIGHBORS {
                        return Err(RuleError::CountOutOfRange(n));
                    }

                    match state {
                        State::Birth => birth |= 1 << n,
                        _ => survival |= 1 << n,
                    }
                }
                (c, _) => return Err(RuleError::InvalidChar(c)),
            }
        }

        if matches!(state, State::Start) {
            return Err(RuleError::MissingPart("birth"));
        }

        if !s_seen {
            return Err(RuleError::MissingPart("survival"));
        }

        Ok(RuleSet::new(birth, survival))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in self.birth_counts() {
            write!(f, "{n}")?;
        }

        write!(f, "/S")?;
        for n in self.survival_counts() {
            write!(f, "{n}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_conway() {
        let rules = RuleSet::default();

        assert_eq!(rules.birth_counts(), vec![3]);
        assert_eq!(rules.survival_counts(), vec![2, 3]);
        assert!(rules.is_birth(3));
        assert!(!rules.is_birth(2));
        assert!(rules.is_survival(2));
        assert!(!rules.is_survival(4));
    }

    #[test]
    fn parse_rulestrings() {
        assert_eq!("B3/S23".parse::<RuleSet>(), Ok(B3S23));
        assert_eq!("b3s23".parse::<RuleSet>(), Ok(B3S23));
        assert_eq!(
            "b36/s23".parse::<RuleSet>(),
            RuleSet::from_counts(&[3, 6], &[2, 3])
        );
        assert_eq!("B/S".parse::<RuleSet>(), Ok(RuleSet::new(0, 0)));
    }

    #[test]
    fn reject_bad_rulestrings() {
        assert_eq!("".parse::<RuleSet>(), Err(RuleError::MissingPart("birth")));
        assert_eq!(
            "B3".parse::<RuleSet>(),
            Err(RuleError::MissingPart("survival"))
        );
        assert_eq!(
            "B9/S23".parse::<RuleSet>(),
            Err(RuleError::CountOutOfRange(9))
        );
        assert_eq!("S23/B3".parse::<RuleSet>(), Err(RuleError::InvalidChar('S')));
        assert_eq!("B3/S2x".parse::<RuleSet>(), Err(RuleError::InvalidChar('x')));
    }

    #[test]
    fn counts_out_of_range() {
        assert_eq!(
            RuleSet::from_counts(&[3], &[2, 9]),
            Err(RuleError::CountOutOfRange(9))
        );
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(B3S23.to_string(), "B3/S23");
        assert_eq!("b63s32".parse::<RuleSet>().unwrap().to_string(), "B36/S23");
    }

    #[test]
    fn bits_past_eight_are_ignored() {
        let rules = RuleSet::new(0xFFFF, 0xFFFF);

        assert_eq!(rules.births(), 0x1FF);
        assert_eq!(rules.survivals(), 0x1FF);
        assert!(!rules.is_birth(9));
    }
}
