use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Rating table
        manager
            .create_table(
                Table::create()
                    .table(Rating::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rating::RatingId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Rating::RaterId).uuid().not_null())
                    .col(ColumnDef::new(Rating::TargetId).uuid().not_null())
                    .col(ColumnDef::new(Rating::Score).small_integer().not_null())
                    .col(ColumnDef::new(Rating::Comment).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Rating::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Rating::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_rater")
                            .from_tbl(Rating::Table)
                            .from_col(Rating::RaterId)
                            .to_tbl(User::Table)
                            .to_col(User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_target")
                            .from_tbl(Rating::Table)
                            .from_col(Rating::TargetId)
                            .to_tbl(Student::Table)
                            .to_col(Student::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One rating per (rater, target) pair
        manager
            .create_index(
                Index::create()
                    .name("unique_rating_per_target")
                    .table(Rating::Table)
                    .col(Rating::RaterId)
                    .col(Rating::TargetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rating_rater_id")
                    .table(Rating::Table)
                    .col(Rating::RaterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rating_target_id")
                    .table(Rating::Table)
                    .col(Rating::TargetId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rating_created_at")
                    .table(Rating::Table)
                    .col(Rating::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Create RatingSummary table
        manager
            .create_table(
                Table::create()
                    .table(RatingSummary::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RatingSummary::TargetId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RatingSummary::AvgScore)
                            .decimal_len(3, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RatingSummary::RatingCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(RatingSummary::LastUpdate)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rating_summary_student")
                            .from_tbl(RatingSummary::Table)
                            .from_col(RatingSummary::TargetId)
                            .to_tbl(Student::Table)
                            .to_col(Student::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rating_summary_avg_score")
                    .table(RatingSummary::Table)
                    .col(RatingSummary::AvgScore)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rating_summary_rating_count")
                    .table(RatingSummary::Table)
                    .col(RatingSummary::RatingCount)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes first
        manager
            .drop_index(
                Index::drop()
                    .name("idx_rating_summary_rating_count")
                    .table(RatingSummary::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_rating_summary_avg_score")
                    .table(RatingSummary::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RatingSummary::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_rating_created_at")
                    .table(Rating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_rating_target_id")
                    .table(Rating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_rating_rater_id")
                    .table(Rating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("unique_rating_per_target")
                    .table(Rating::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Rating::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Rating {
    Table,
    RatingId,
    RaterId,
    TargetId,
    Score,
    Comment,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum RatingSummary {
    Table,
    TargetId,
    AvgScore,
    RatingCount,
    LastUpdate,
}

#[derive(DeriveIden)]
enum User {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    StudentId,
}
