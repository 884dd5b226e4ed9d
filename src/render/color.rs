//! Ratio colors for outcome records

use super::canvas::Color;
use crate::data::Record;

/// Color whose channels are the A-win, B-win and tie fractions of the
/// record's games. The channels are independent ratios; a pure A-win
/// record is pure red, a pure tie pure blue.
///
/// None when the record has no games, since every ratio is then undefined.
pub fn ratio_color(record: &Record) -> Option<Color> {
    let total = record.total_games();
    if total == 0 {
        return None;
    }
    let total = total as f64;
    let ratio = |count: u32| (f64::from(count) / total) as f32;
    Some(Color::rgb(
        ratio(record.wins_a),
        ratio(record.wins_b),
        ratio(record.ties),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_win_is_pure_red() {
        let color = ratio_color(&Record::new(0, 0, 10, 0, 0)).unwrap();
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_mixed_ratios() {
        let color = ratio_color(&Record::new(0, 0, 1, 1, 2)).unwrap();
        assert_eq!(color, Color::rgb(0.25, 0.25, 0.5));
    }

    #[test]
    fn test_pure_tie_is_blue() {
        let color = ratio_color(&Record::new(3, 1, 0, 0, 7)).unwrap();
        assert_eq!(color, Color::BLUE);
    }

    #[test]
    fn test_channels_within_unit_range() {
        for (a, b, t) in [(1, 2, 3), (u32::MAX, 1, 0), (7, 0, 13), (1, 1, 1)] {
            let c = ratio_color(&Record::new(0, 0, a, b, t)).unwrap();
            for channel in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&channel), "{channel} out of range");
            }
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn test_zero_total_has_no_color() {
        assert!(ratio_color(&Record::new(1, 1, 0, 0, 0)).is_none());
    }
}
