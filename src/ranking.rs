//! Score aggregation and leaderboard assembly.
//!
//! Everything here is pure so the scoring rules can be exercised without a
//! database. Averages are kept as `Decimal` and rounded to two places, half
//! away from zero.

use std::collections::HashMap;

use rust_decimal::RoundingStrategy;
use sea_orm::prelude::Decimal;
use uuid::Uuid;

use crate::config::LEADERBOARD_SIZE;

pub const MIN_SCORE: i16 = 1;
pub const MAX_SCORE: i16 = 5;

/// Valid scores are whole numbers from 1 to 5 inclusive.
pub fn score_in_range(score: i16) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Recompute the rounded average and count from the full set of scores a
/// student has received.
pub fn summarize_scores(scores: &[i16]) -> (Decimal, i32) {
    if scores.is_empty() {
        return (Decimal::ZERO, 0);
    }

    let sum: i64 = scores.iter().map(|score| i64::from(*score)).sum();
    let avg = Decimal::from(sum) / Decimal::from(scores.len() as i64);
    (round_half_up(avg), scores.len() as i32)
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentStanding {
    pub student_id: Uuid,
    pub name: String,
    pub grade: i32,
    pub school_id: Uuid,
    pub school_name: String,
    pub avg_score: Decimal,
    pub rating_count: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedStudent {
    pub rank: u32,
    pub standing: StudentStanding,
}

/// Order rated students by average score, then by number of ratings, and
/// keep the top of the board. Students without a single rating never
/// appear. Ranks are sequential from 1, so tied averages still get
/// distinct ranks in input order.
pub fn rank_students(mut standings: Vec<StudentStanding>) -> Vec<RankedStudent> {
    standings.retain(|standing| standing.rating_count > 0);
    standings.sort_by(|a, b| {
        b.avg_score
            .cmp(&a.avg_score)
            .then(b.rating_count.cmp(&a.rating_count))
    });
    standings.truncate(LEADERBOARD_SIZE);

    standings
        .into_iter()
        .enumerate()
        .map(|(index, standing)| RankedStudent {
            rank: index as u32 + 1,
            standing,
        })
        .collect()
}

/// Per-student aggregate carrying the school it belongs to, the input of
/// the school rollup.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolStudentRow {
    pub school_id: Uuid,
    pub school_name: String,
    pub avg_score: Decimal,
    pub rating_count: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchoolStanding {
    pub school_id: Uuid,
    pub school_name: String,
    pub avg_score: Decimal,
    pub rating_count: i64,
}

/// Roll per-student averages up into school standings weighted by rating
/// count, then order like the student board. A school whose students have
/// no ratings at all keeps an average of zero instead of dividing by zero.
/// Schools without students contribute no rows and are absent.
pub fn rank_schools(rows: Vec<SchoolStudentRow>) -> Vec<SchoolStanding> {
    let mut totals: Vec<SchoolAccumulator> = Vec::new();
    let mut positions: HashMap<Uuid, usize> = HashMap::new();

    for row in rows {
        let position = *positions.entry(row.school_id).or_insert_with(|| {
            totals.push(SchoolAccumulator {
                school_id: row.school_id,
                school_name: row.school_name.clone(),
                weighted_sum: Decimal::ZERO,
                rating_count: 0,
            });
            totals.len() - 1
        });

        let total = &mut totals[position];
        total.weighted_sum += row.avg_score * Decimal::from(row.rating_count);
        total.rating_count += i64::from(row.rating_count);
    }

    let mut standings: Vec<SchoolStanding> = totals
        .into_iter()
        .map(SchoolAccumulator::into_standing)
        .collect();
    standings.sort_by(|a, b| {
        b.avg_score
            .cmp(&a.avg_score)
            .then(b.rating_count.cmp(&a.rating_count))
    });
    standings.truncate(LEADERBOARD_SIZE);
    standings
}

struct SchoolAccumulator {
    school_id: Uuid,
    school_name: String,
    weighted_sum: Decimal,
    rating_count: i64,
}

impl SchoolAccumulator {
    fn into_standing(self) -> SchoolStanding {
        let avg_score = if self.rating_count > 0 {
            round_half_up(self.weighted_sum / Decimal::from(self.rating_count))
        } else {
            Decimal::ZERO
        };

        SchoolStanding {
            school_id: self.school_id,
            school_name: self.school_name,
            avg_score,
            rating_count: self.rating_count,
        }
    }
}

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn standing(name: &str, avg: &str, count: i32) -> StudentStanding {
        StudentStanding {
            student_id: Uuid::new_v4(),
            name: name.to_string(),
            grade: 3,
            school_id: Uuid::new_v4(),
            school_name: "Eastwood Primary".to_string(),
            avg_score: decimal(avg),
            rating_count: count,
        }
    }

    #[test]
    fn test_score_in_range() {
        assert!(!score_in_range(0));
        assert!(score_in_range(1));
        assert!(score_in_range(3));
        assert!(score_in_range(5));
        assert!(!score_in_range(6));
        assert!(!score_in_range(-1));
    }

    #[test]
    fn test_summarize_scores_basic() {
        let (avg, count) = summarize_scores(&[5, 3, 4]);
        assert_eq!(avg, decimal("4.00"));
        assert_eq!(count, 3);
    }

    #[test]
    fn test_summarize_scores_after_additional_rating() {
        let (avg, count) = summarize_scores(&[5, 3, 4, 2]);
        assert_eq!(avg, decimal("3.50"));
        assert_eq!(count, 4);
    }

    #[test]
    fn test_summarize_scores_after_overwrite() {
        // The first rater changed their 5 to a 1; the count stays at 4.
        let (avg, count) = summarize_scores(&[1, 3, 4, 2]);
        assert_eq!(avg, decimal("2.50"));
        assert_eq!(count, 4);
    }

    #[test]
    fn test_summarize_scores_rounds_half_up() {
        // 21 / 8 = 2.625 rounds up to 2.63, not to even
        let (avg, count) = summarize_scores(&[1, 2, 2, 3, 3, 3, 3, 4]);
        assert_eq!(avg, decimal("2.63"));
        assert_eq!(count, 8);
    }

    #[test]
    fn test_summarize_scores_empty() {
        let (avg, count) = summarize_scores(&[]);
        assert_eq!(avg, Decimal::ZERO);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_rank_students_orders_and_numbers() {
        let ranked = rank_students(vec![
            standing("Aaron", "3.20", 5),
            standing("Bella", "4.80", 2),
            standing("Cathy", "4.80", 7),
            standing("Derek", "1.00", 1),
        ]);

        let names: Vec<&str> = ranked
            .iter()
            .map(|entry| entry.standing.name.as_str())
            .collect();
        assert_eq!(names, ["Cathy", "Bella", "Aaron", "Derek"]);
        let ranks: Vec<u32> = ranked.iter().map(|entry| entry.rank).collect();
        assert_eq!(ranks, [1, 2, 3, 4]);
    }

    #[test]
    fn test_rank_students_skips_unrated() {
        let ranked = rank_students(vec![
            standing("Rated", "4.00", 1),
            standing("Unrated", "0.00", 0),
        ]);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].standing.name, "Rated");
    }

    #[test]
    fn test_rank_students_tied_averages_get_distinct_ranks() {
        let ranked = rank_students(vec![
            standing("First", "4.00", 3),
            standing("Second", "4.00", 3),
        ]);

        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_rank_students_caps_at_board_size() {
        let standings = (0..15)
            .map(|n| standing(&format!("student-{n}"), "4.00", n + 1))
            .collect();
        let ranked = rank_students(standings);

        assert_eq!(ranked.len(), LEADERBOARD_SIZE);
        assert_eq!(ranked.last().unwrap().rank, LEADERBOARD_SIZE as u32);
    }

    fn school_row(school_id: Uuid, name: &str, avg: &str, count: i32) -> SchoolStudentRow {
        SchoolStudentRow {
            school_id,
            school_name: name.to_string(),
            avg_score: decimal(avg),
            rating_count: count,
        }
    }

    #[test]
    fn test_rank_schools_weights_by_rating_count() {
        let school = Uuid::new_v4();
        let standings = rank_schools(vec![
            school_row(school, "Westbrook", "5.00", 2),
            school_row(school, "Westbrook", "1.00", 8),
        ]);

        // (5.00 * 2 + 1.00 * 8) / 10
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].avg_score, decimal("1.80"));
        assert_eq!(standings[0].rating_count, 10);
    }

    #[test]
    fn test_rank_schools_without_ratings_average_zero() {
        let standings = rank_schools(vec![
            school_row(Uuid::new_v4(), "Quiet School", "0.00", 0),
            school_row(Uuid::new_v4(), "Loud School", "4.00", 2),
        ]);

        assert_eq!(standings[0].school_name, "Loud School");
        assert_eq!(standings[1].school_name, "Quiet School");
        assert_eq!(standings[1].avg_score, Decimal::ZERO);
        assert_eq!(standings[1].rating_count, 0);
    }

    #[test]
    fn test_rank_schools_orders_and_caps() {
        let mut rows = Vec::new();
        for n in 0..12 {
            rows.push(school_row(
                Uuid::new_v4(),
                &format!("school-{n}"),
                "3.00",
                n + 1,
            ));
        }
        let standings = rank_schools(rows);

        assert_eq!(standings.len(), LEADERBOARD_SIZE);
        // Same average everywhere, so the most-rated school leads
        assert_eq!(standings[0].rating_count, 12);
    }
}
