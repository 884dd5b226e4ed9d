//! Outcome-tally records and the dataset they form

use std::path::{Path, PathBuf};

use crate::constants::MAX_DIMENSION;
use crate::error::ChartError;

/// One outcome-tally row: results of games played at a pair of search depths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// Search depth of side A (first axis)
    pub depth_a: u32,
    /// Search depth of side B (second axis)
    pub depth_b: u32,
    pub wins_a: u32,
    pub wins_b: u32,
    pub ties: u32,
}

impl Record {
    pub fn new(depth_a: u32, depth_b: u32, wins_a: u32, wins_b: u32, ties: u32) -> Self {
        Self {
            depth_a,
            depth_b,
            wins_a,
            wins_b,
            ties,
        }
    }

    /// Total games played (widened so three u32 tallies never overflow)
    pub fn total_games(&self) -> u64 {
        u64::from(self.wins_a) + u64::from(self.wins_b) + u64::from(self.ties)
    }
}

/// Records in input order plus the size of the square grid they span
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    dimension: u32,
    source: PathBuf,
}

impl Dataset {
    /// Validate records and derive the grid dimension.
    ///
    /// Rejects an empty record list, any record with zero total games and
    /// depths too large for the plot to give each column a pixel.
    /// Record order is kept: it is the draw order, so later records
    /// overplot earlier ones at the same cell.
    pub fn from_records(records: Vec<Record>, source: &Path) -> Result<Self, ChartError> {
        if records.is_empty() {
            return Err(ChartError::EmptyInput {
                path: source.to_path_buf(),
            });
        }

        let mut max_depth = 0;
        for (idx, record) in records.iter().enumerate() {
            if record.total_games() == 0 {
                return Err(ChartError::ZeroTotalRecord {
                    path: source.to_path_buf(),
                    record: idx + 1,
                    depth_a: record.depth_a,
                    depth_b: record.depth_b,
                });
            }
            max_depth = max_depth.max(record.depth_a).max(record.depth_b);
        }

        // +1 keeps the deepest row/column strictly inside [0,1) once normalized
        let dimension = u64::from(max_depth) + 1;
        if dimension > u64::from(MAX_DIMENSION) {
            return Err(ChartError::TooWide {
                path: source.to_path_buf(),
                dimension,
                max: MAX_DIMENSION,
            });
        }

        Ok(Self {
            records,
            dimension: dimension as u32,
            source: source.to_path_buf(),
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// `1 + max(depth_a, depth_b)` over all records; in `1..=MAX_DIMENSION`
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_is_max_depth_plus_one() {
        let records = vec![Record::new(3, 1, 1, 0, 0), Record::new(0, 6, 0, 1, 0)];
        let data = Dataset::from_records(records, Path::new("t.csv")).unwrap();
        assert_eq!(data.dimension(), 7);
    }

    #[test]
    fn test_single_origin_record_has_dimension_one() {
        let data =
            Dataset::from_records(vec![Record::new(0, 0, 0, 0, 4)], Path::new("t.csv")).unwrap();
        assert_eq!(data.dimension(), 1);
    }

    #[test]
    fn test_zero_total_rejected_with_position() {
        let records = vec![Record::new(0, 0, 1, 0, 0), Record::new(2, 5, 0, 0, 0)];
        let err = Dataset::from_records(records, Path::new("t.csv")).unwrap_err();
        match err {
            ChartError::ZeroTotalRecord {
                record,
                depth_a,
                depth_b,
                ..
            } => {
                assert_eq!(record, 2);
                assert_eq!((depth_a, depth_b), (2, 5));
            }
            other => panic!("expected ZeroTotalRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_widest_drawable_dimension_accepted() {
        let deepest = MAX_DIMENSION - 1;
        let data = Dataset::from_records(vec![Record::new(deepest, 0, 1, 0, 0)], Path::new("t.csv"))
            .unwrap();
        assert_eq!(data.dimension(), MAX_DIMENSION);
    }

    #[test]
    fn test_too_wide_rejected() {
        let err = Dataset::from_records(vec![Record::new(0, MAX_DIMENSION, 1, 0, 0)], Path::new("t.csv"))
            .unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Validate);
        match err {
            ChartError::TooWide { dimension, max, .. } => {
                assert_eq!(dimension, u64::from(MAX_DIMENSION) + 1);
                assert_eq!(max, MAX_DIMENSION);
            }
            other => panic!("expected TooWide, got {other:?}"),
        }
    }

    #[test]
    fn test_max_depth_does_not_wrap_dimension() {
        let records = vec![Record::new(u32::MAX, 0, 1, 0, 0)];
        let err = Dataset::from_records(records, Path::new("t.csv")).unwrap_err();
        match err {
            ChartError::TooWide { dimension, .. } => {
                assert_eq!(dimension, u64::from(u32::MAX) + 1)
            }
            other => panic!("expected TooWide, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_rejected() {
        let err = Dataset::from_records(Vec::new(), Path::new("t.csv")).unwrap_err();
        assert!(matches!(err, ChartError::EmptyInput { .. }));
    }

    #[test]
    fn test_total_games_does_not_overflow() {
        let record = Record::new(0, 0, u32::MAX, u32::MAX, 1);
        assert_eq!(record.total_games(), 2 * u64::from(u32::MAX) + 1);
    }
}
