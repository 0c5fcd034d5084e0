use crate::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create BADGE_TYPE enum type
        manager
            .create_type(
                Type::create()
                    .as_enum(BadgeTypeEnum::Table)
                    .values([BadgeTypeEnum::Student, BadgeTypeEnum::School])
                    .to_owned(),
            )
            .await?;

        // Create Badge table
        manager
            .create_table(
                Table::create()
                    .table(Badge::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Badge::BadgeId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(Badge::Name).string().not_null())
                    .col(ColumnDef::new(Badge::Description).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Badge::BadgeType)
                            .enumeration(
                                BadgeTypeEnum::Table,
                                [BadgeTypeEnum::Student, BadgeTypeEnum::School],
                            )
                            .not_null(),
                    )
                    .col(ColumnDef::new(Badge::RuleDesc).text().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_badge_badge_type")
                    .table(Badge::Table)
                    .col(Badge::BadgeType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_badge_name")
                    .table(Badge::Table)
                    .col(Badge::Name)
                    .to_owned(),
            )
            .await?;

        // Create StudentBadge table
        manager
            .create_table(
                Table::create()
                    .table(StudentBadge::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentBadge::StudentBadgeId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(StudentBadge::StudentId).uuid().not_null())
                    .col(ColumnDef::new(StudentBadge::BadgeId).uuid().not_null())
                    .col(ColumnDef::new(StudentBadge::Period).string_len(50).not_null())
                    .col(
                        ColumnDef::new(StudentBadge::AwardedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_badge_student")
                            .from_tbl(StudentBadge::Table)
                            .from_col(StudentBadge::StudentId)
                            .to_tbl(Student::Table)
                            .to_col(Student::StudentId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_badge_badge")
                            .from_tbl(StudentBadge::Table)
                            .from_col(StudentBadge::BadgeId)
                            .to_tbl(Badge::Table)
                            .to_col(Badge::BadgeId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One badge per (student, badge, period)
        manager
            .create_index(
                Index::create()
                    .name("unique_student_badge_period")
                    .table(StudentBadge::Table)
                    .col(StudentBadge::StudentId)
                    .col(StudentBadge::BadgeId)
                    .col(StudentBadge::Period)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_badge_student_id")
                    .table(StudentBadge::Table)
                    .col(StudentBadge::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_badge_badge_id")
                    .table(StudentBadge::Table)
                    .col(StudentBadge::BadgeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_badge_period")
                    .table(StudentBadge::Table)
                    .col(StudentBadge::Period)
                    .to_owned(),
            )
            .await?;

        // Create SchoolBadge table
        manager
            .create_table(
                Table::create()
                    .table(SchoolBadge::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolBadge::SchoolBadgeId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(SchoolBadge::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(SchoolBadge::BadgeId).uuid().not_null())
                    .col(ColumnDef::new(SchoolBadge::Period).string_len(50).not_null())
                    .col(
                        ColumnDef::new(SchoolBadge::AwardedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_badge_school")
                            .from_tbl(SchoolBadge::Table)
                            .from_col(SchoolBadge::SchoolId)
                            .to_tbl(School::Table)
                            .to_col(School::SchoolId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_badge_badge")
                            .from_tbl(SchoolBadge::Table)
                            .from_col(SchoolBadge::BadgeId)
                            .to_tbl(Badge::Table)
                            .to_col(Badge::BadgeId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One badge per (school, badge, period)
        manager
            .create_index(
                Index::create()
                    .name("unique_school_badge_period")
                    .table(SchoolBadge::Table)
                    .col(SchoolBadge::SchoolId)
                    .col(SchoolBadge::BadgeId)
                    .col(SchoolBadge::Period)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_school_badge_school_id")
                    .table(SchoolBadge::Table)
                    .col(SchoolBadge::SchoolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_school_badge_badge_id")
                    .table(SchoolBadge::Table)
                    .col(SchoolBadge::BadgeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_school_badge_period")
                    .table(SchoolBadge::Table)
                    .col(SchoolBadge::Period)
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
                    .name("idx_school_badge_period")
                    .table(SchoolBadge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_school_badge_badge_id")
                    .table(SchoolBadge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_school_badge_school_id")
                    .table(SchoolBadge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("unique_school_badge_period")
                    .table(SchoolBadge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SchoolBadge::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_badge_period")
                    .table(StudentBadge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_badge_badge_id")
                    .table(StudentBadge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_badge_student_id")
                    .table(StudentBadge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("unique_student_badge_period")
                    .table(StudentBadge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StudentBadge::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_badge_name")
                    .table(Badge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_badge_badge_type")
                    .table(Badge::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Badge::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(BadgeTypeEnum::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Badge {
    Table,
    BadgeId,
    Name,
    Description,
    BadgeType,
    RuleDesc,
}

#[derive(DeriveIden)]
enum StudentBadge {
    Table,
    StudentBadgeId,
    StudentId,
    BadgeId,
    Period,
    AwardedAt,
}

#[derive(DeriveIden)]
enum SchoolBadge {
    Table,
    SchoolBadgeId,
    SchoolId,
    BadgeId,
    Period,
    AwardedAt,
}

#[derive(DeriveIden)]
enum BadgeTypeEnum {
    Table,
    Student,
    School,
}

#[derive(DeriveIden)]
enum School {
    Table,
    SchoolId,
}

#[derive(DeriveIden)]
enum Student {
    Table,
    StudentId,
}
