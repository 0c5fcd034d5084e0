use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create Leaderboard table
        manager
            .create_table(
                Table::create()
                    .table(Leaderboard::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Leaderboard::LeaderboardId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Leaderboard::Name).string().not_null())
                    .col(ColumnDef::new(Leaderboard::Type).string_len(50).not_null())
                    .col(ColumnDef::new(Leaderboard::Formula).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leaderboard_type")
                    .table(Leaderboard::Table)
                    .col(Leaderboard::Type)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leaderboard_name")
                    .table(Leaderboard::Table)
                    .col(Leaderboard::Name)
                    .to_owned(),
            )
            .await?;

        // Create LeaderboardEntry table
        manager
            .create_table(
                Table::create()
                    .table(LeaderboardEntry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaderboardEntry::EntryId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(LeaderboardEntry::LeaderboardId).uuid().not_null())
                    .col(ColumnDef::new(LeaderboardEntry::StudentId).uuid().not_null())
                    .col(ColumnDef::new(LeaderboardEntry::Rank).integer().not_null())
                    .col(
                        ColumnDef::new(LeaderboardEntry::ScoreSnapshot)
                            .decimal_len(4, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaderboard_entry_leaderboard")
                            .from_tbl(LeaderboardEntry::Table)
                            .from_col(LeaderboardEntry::LeaderboardId)
                            .to_tbl(Leaderboard::Table)
                            .to_col(Leaderboard::LeaderboardId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaderboard_entry_student")
                            .from_tbl(LeaderboardEntry::Table)
                            .from_col(LeaderboardEntry::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One entry per (leaderboard, student)
        manager
            .create_index(
                Index::create()
                    .name("unique_leaderboard_student")
                    .table(LeaderboardEntry::Table)
                    .col(LeaderboardEntry::LeaderboardId)
                    .col(LeaderboardEntry::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leaderboard_entry_rank")
                    .table(LeaderboardEntry::Table)
                    .col(LeaderboardEntry::LeaderboardId)
                    .col(LeaderboardEntry::Rank)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leaderboard_entry_student_id")
                    .table(LeaderboardEntry::Table)
                    .col(LeaderboardEntry::StudentId)
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
                    .name("idx_leaderboard_entry_student_id")
                    .table(LeaderboardEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_leaderboard_entry_rank")
                    .table(LeaderboardEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("unique_leaderboard_student")
                    .table(LeaderboardEntry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LeaderboardEntry::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_leaderboard_name")
                    .table(Leaderboard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_leaderboard_type")
                    .table(Leaderboard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Leaderboard::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Leaderboard {
    Table,
    LeaderboardId,
    Name,
    Type,
    Formula,
}

#[derive(DeriveIden)]
enum LeaderboardEntry {
    Table,
    EntryId,
    LeaderboardId,
    StudentId,
    Rank,
    ScoreSnapshot,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    StudentId,
}
