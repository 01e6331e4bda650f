// Custom types that are widely used are defined here.

// Identifier types.
pub type TeamId = String;
pub type GameId = String;
pub type ChampionshipId = String;

// Round numbers start from 1.
pub type RoundNumber = u16;

// Scores and the counters derived from them.
pub type Goals = u16;
pub type Points = u16;

// Type conversions.
pub mod convert {
    // Convert usize to u16, saturating instead of overflowing.
    pub fn usize_to_u16(num: usize) -> u16 {
        u16::try_from(num).unwrap_or(u16::MAX)
    }

    // Convert u16 to i32 for signed arithmetic.
    pub fn u16_to_i32(num: u16) -> i32 {
        i32::from(num)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn usize_to_u16_saturates() {
            assert_eq!(usize_to_u16(7), 7);
            assert_eq!(usize_to_u16(usize::MAX), u16::MAX);
        }
    }
}
