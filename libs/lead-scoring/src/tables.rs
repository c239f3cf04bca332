//! Point tables for each qualification factor.
//!
//! Every table is ordered by rank, lowest first, so the position of a key
//! is its bucket rank and points never decrease down the table.

/// Immutable key -> points table
pub type PointTable = &'static [(&'static str, u8)];

/// Budget buckets in PLN, ascending money ranges (max 30)
pub const BUDGET_POINTS: PointTable = &[
    ("5000-15000", 10),
    ("15000-30000", 15),
    ("30000-50000", 20),
    ("50000-100000", 25),
    ("100000+", 30),
];

/// Purchase timeline, least to most urgent (max 20)
pub const TIMELINE_POINTS: PointTable = &[
    ("planning", 5),
    ("6-months", 10),
    ("3-months", 15),
    ("1-month", 18),
    ("asap", 20),
];

/// Company headcount brackets, smallest first (max 25)
pub const COMPANY_SIZE_POINTS: PointTable = &[
    ("1-10", 10),
    ("11-50", 15),
    ("51-200", 20),
    ("201-500", 23),
    ("500+", 25),
];

/// Role of the contact in the buying decision (max 15)
pub const DECISION_MAKER_POINTS: PointTable = &[
    ("end-user", 5),
    ("evaluator", 8),
    ("influencer", 12),
    ("decision-maker", 15),
];

/// Flat size/type contribution for private individuals
pub const PRIVATE_LEAD_POINTS: u8 = 8;

pub const POINTS_PER_PAIN_POINT: u8 = 2;
pub const MAX_PAIN_POINT_POINTS: u8 = 10;

pub const MAX_SCORE: u8 = 100;

/// Look up a key, returning `None` when it is absent or not in the table
pub fn lookup(table: PointTable, key: Option<&str>) -> Option<u8> {
    let key = key?;
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, points)| *points)
}

/// Look up a key with the zero default applied on a miss
pub fn points_for(table: PointTable, key: Option<&str>) -> u8 {
    lookup(table, key).unwrap_or(0)
}

/// Highest value a table can contribute
pub fn max_points(table: PointTable) -> u8 {
    table.iter().map(|(_, points)| *points).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TABLES: [PointTable; 4] = [
        BUDGET_POINTS,
        TIMELINE_POINTS,
        COMPANY_SIZE_POINTS,
        DECISION_MAKER_POINTS,
    ];

    #[test]
    fn test_tables_are_strictly_ascending() {
        for table in ALL_TABLES {
            for pair in table.windows(2) {
                assert!(
                    pair[0].1 < pair[1].1,
                    "{} ({}) should rank below {} ({})",
                    pair[0].0,
                    pair[0].1,
                    pair[1].0,
                    pair[1].1
                );
            }
        }
    }

    #[test]
    fn test_factor_maximums_sum_to_max_score() {
        let size_max = max_points(COMPANY_SIZE_POINTS).max(PRIVATE_LEAD_POINTS);
        let total = max_points(BUDGET_POINTS) as u16
            + max_points(TIMELINE_POINTS) as u16
            + size_max as u16
            + max_points(DECISION_MAKER_POINTS) as u16
            + MAX_PAIN_POINT_POINTS as u16;

        assert_eq!(total, MAX_SCORE as u16);
    }

    #[test]
    fn test_lookup_defaults_to_zero_on_miss() {
        assert_eq!(points_for(BUDGET_POINTS, Some("50000-100000")), 25);
        assert_eq!(points_for(BUDGET_POINTS, Some("not-a-real-bucket")), 0);
        assert_eq!(points_for(BUDGET_POINTS, Some("")), 0);
        assert_eq!(points_for(BUDGET_POINTS, None), 0);
        assert_eq!(lookup(TIMELINE_POINTS, Some("ASAP")), None);
    }
}
