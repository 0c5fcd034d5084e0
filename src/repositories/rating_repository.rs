use crate::entities::{rating, rating_summary, student, user};
use crate::ranking;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Insert, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

pub struct RatingRepository;

impl RatingRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    /// Insert or overwrite the rater's score for a student, then recompute
    /// the student's summary as a full aggregate over every current score.
    /// Both writes happen in one transaction so the rating table and the
    /// summary row can never drift apart.
    pub async fn submit(
        &self,
        rater_id: Uuid,
        target_id: Uuid,
        score: i16,
        comment: String,
    ) -> Result<rating::Model> {
        let db = self.get_connection();
        let txn = db.begin().await?;
        let now = chrono::Utc::now().naive_utc();

        let active_rating = rating::ActiveModel {
            rating_id: Set(Uuid::new_v4()),
            rater_id: Set(rater_id),
            target_id: Set(target_id),
            score: Set(score),
            comment: Set(comment),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = Self::upsert_rating(active_rating)
            .exec_with_returning(&txn)
            .await?;

        let scores = rating::Entity::find()
            .filter(rating::Column::TargetId.eq(target_id))
            .select_only()
            .column(rating::Column::Score)
            .into_tuple::<i16>()
            .all(&txn)
            .await?;
        let (avg_score, rating_count) = ranking::summarize_scores(&scores);

        let summary = rating_summary::Entity::find_by_id(target_id)
            .one(&txn)
            .await?;
        match summary {
            Some(found) => {
                let mut active_summary: rating_summary::ActiveModel = found.into();
                active_summary.avg_score = Set(avg_score);
                active_summary.rating_count = Set(rating_count);
                active_summary.last_update = Set(now);
                active_summary.update(&txn).await?;
            }
            None => {
                let active_summary = rating_summary::ActiveModel {
                    target_id: Set(target_id),
                    avg_score: Set(avg_score),
                    rating_count: Set(rating_count),
                    last_update: Set(now),
                };
                active_summary.insert(&txn).await?;
            }
        }

        txn.commit().await?;
        Ok(saved)
    }

    /// Upsert keyed on the unique (rater, target) pair: the store turns a
    /// second submission, concurrent or not, into an overwrite of score,
    /// comment and updated_at. created_at keeps the first write's value.
    fn upsert_rating(active_rating: rating::ActiveModel) -> Insert<rating::ActiveModel> {
        rating::Entity::insert(active_rating).on_conflict(
            OnConflict::columns([rating::Column::RaterId, rating::Column::TargetId])
                .update_columns([
                    rating::Column::Score,
                    rating::Column::Comment,
                    rating::Column::UpdatedAt,
                ])
                .to_owned(),
        )
    }

    pub async fn find_by_rater_with_target(
        &self,
        rater_id: Uuid,
    ) -> Result<Vec<(rating::Model, Option<student::Model>)>> {
        let db = self.get_connection();
        let ratings = rating::Entity::find()
            .filter(rating::Column::RaterId.eq(rater_id))
            .order_by_desc(rating::Column::CreatedAt)
            .find_also_related(student::Entity)
            .all(db)
            .await?;
        Ok(ratings)
    }

    pub async fn find_by_target_with_rater(
        &self,
        target_id: Uuid,
    ) -> Result<Vec<(rating::Model, Option<user::Model>)>> {
        let db = self.get_connection();
        let ratings = rating::Entity::find()
            .filter(rating::Column::TargetId.eq(target_id))
            .order_by_desc(rating::Column::CreatedAt)
            .find_also_related(user::Entity)
            .all(db)
            .await?;
        Ok(ratings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn sample_rating() -> rating::ActiveModel {
        let now = chrono::Utc::now().naive_utc();
        rating::ActiveModel {
            rating_id: Set(Uuid::new_v4()),
            rater_id: Set(Uuid::new_v4()),
            target_id: Set(Uuid::new_v4()),
            score: Set(4),
            comment: Set("steady under pressure".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    #[test]
    fn test_submit_overwrites_on_rater_target_conflict() {
        let sql = RatingRepository::upsert_rating(sample_rating())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"ON CONFLICT ("rater_id", "target_id") DO UPDATE SET"#));
        assert!(sql.contains(r#""score" = "excluded"."score""#));
        assert!(sql.contains(r#""comment" = "excluded"."comment""#));
        assert!(sql.contains(r#""updated_at" = "excluded"."updated_at""#));
    }

    #[test]
    fn test_submit_conflict_update_leaves_created_at_alone() {
        let sql = RatingRepository::upsert_rating(sample_rating())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(!sql.contains(r#""created_at" = "excluded"."created_at""#));
    }
}
