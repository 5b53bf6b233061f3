use crate::domain::ColorToken;

/// Series color rotation for multi-series and share charts.
///
/// Order matters: the first three series land on blue, violet, emerald,
/// then the cycle repeats. Assignment depends only on series position,
/// so repeated composition yields identical colors.
pub const PALETTE: [ColorToken; 3] = [ColorToken::Blue, ColorToken::Violet, ColorToken::Emerald];

pub fn series_color(index: usize) -> ColorToken {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(series_color(0), ColorToken::Blue);
        assert_eq!(series_color(1), ColorToken::Violet);
        assert_eq!(series_color(2), ColorToken::Emerald);
        assert_eq!(series_color(3), ColorToken::Blue);
        assert_eq!(series_color(7), series_color(1));
    }
}
