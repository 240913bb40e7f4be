//! Word scoring
//!
//! Points grow linearly with length, with a bonus for longer words.

/// Points awarded per letter
pub const POINTS_PER_LETTER: u32 = 50;

/// Length bonus added on top of the per-letter points
#[must_use]
pub const fn length_bonus(length: usize) -> u32 {
    match length {
        0..=3 => 0,
        4 => 50,
        5 => 150,
        _ => 300,
    }
}

/// Points for a validated word of `length` letters
///
/// `50 × length + bonus`, where the bonus is 0 up to three letters, 50 for
/// four, 150 for five and 300 for six or more. Saturates at `u32::MAX`
/// instead of wrapping.
///
/// # Examples
/// ```
/// use wordronin::core::points_for_word;
///
/// assert_eq!(points_for_word(3), 150);
/// assert_eq!(points_for_word(5), 400);
/// assert_eq!(points_for_word(7), 650);
/// ```
#[must_use]
pub const fn points_for_word(length: usize) -> u32 {
    let letters = if length > u32::MAX as usize {
        u32::MAX
    } else {
        length as u32
    };
    POINTS_PER_LETTER
        .saturating_mul(letters)
        .saturating_add(length_bonus(length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        assert_eq!(points_for_word(3), 150);
        assert_eq!(points_for_word(4), 250);
        assert_eq!(points_for_word(5), 400);
        assert_eq!(points_for_word(6), 600);
    }

    #[test]
    fn short_lengths_have_no_bonus() {
        assert_eq!(points_for_word(0), 0);
        assert_eq!(points_for_word(1), 50);
        assert_eq!(points_for_word(2), 100);
    }

    #[test]
    fn long_words_keep_the_top_bonus() {
        assert_eq!(points_for_word(7), 650);
        assert_eq!(points_for_word(10), 800);
    }

    #[test]
    fn monotonic_in_length() {
        for n in 0..64 {
            assert!(
                points_for_word(n + 1) >= points_for_word(n),
                "points dropped between {n} and {}",
                n + 1
            );
        }
    }

    #[test]
    fn huge_lengths_saturate() {
        let lengths = [
            85_899_344,
            85_899_345,
            85_899_346,
            u32::MAX as usize,
            u32::MAX as usize + 4,
            usize::MAX,
        ];
        for pair in lengths.windows(2) {
            assert!(points_for_word(pair[1]) >= points_for_word(pair[0]));
        }
        assert_eq!(points_for_word(85_899_346), u32::MAX);
        assert_eq!(points_for_word(u32::MAX as usize + 4), u32::MAX);
    }
}
