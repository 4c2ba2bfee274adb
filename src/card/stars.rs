//! Star-rating line: filled and empty glyphs plus the rating count.

#[cfg(test)]
#[path = "stars_test.rs"]
mod stars_test;

/// Total star glyphs drawn on every card.
pub const MAX_STARS: u8 = 5;
/// Glyph for a filled star.
pub const FILLED_STAR: char = '★';
/// Glyph for an empty star.
pub const EMPTY_STAR: char = '☆';

/// A rating reduced to what the card draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarRating {
    /// Filled stars, always in `0..=MAX_STARS`.
    pub filled: u8,
    /// Ratings backing the average, shown in parentheses.
    pub count: u64,
}

impl StarRating {
    /// Build a star rating, clamping `rating` into `0..=MAX_STARS`.
    pub fn new(rating: i64, count: u64) -> Self {
        let clamped = rating.clamp(0, i64::from(MAX_STARS));
        if clamped != rating {
            leptos::logging::warn!("recipe-card: rating {rating} outside 0..={MAX_STARS}, drawing {clamped} stars");
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = clamped as u8;
        Self { filled, count }
    }

    /// Empty stars drawn after the filled ones.
    pub fn empty(self) -> u8 {
        MAX_STARS - self.filled
    }

    /// The glyph run, e.g. `★★★☆☆`.
    pub fn glyphs(self) -> String {
        let mut out = String::with_capacity(usize::from(MAX_STARS) * FILLED_STAR.len_utf8());
        out.extend(std::iter::repeat_n(FILLED_STAR, usize::from(self.filled)));
        out.extend(std::iter::repeat_n(EMPTY_STAR, usize::from(self.empty())));
        out
    }

    /// The parenthesised count, e.g. `(42)`.
    pub fn count_label(self) -> String {
        format!("({})", self.count)
    }
}
