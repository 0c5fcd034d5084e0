use crate::extension::postgres::Type;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create APPLICATION_STATUS enum type
        manager
            .create_type(
                Type::create()
                    .as_enum(ApplicationStatusEnum::Table)
                    .values([
                        ApplicationStatusEnum::Pending,
                        ApplicationStatusEnum::Approved,
                        ApplicationStatusEnum::Rejected,
                    ])
                    .to_owned(),
            )
            .await?;

        // Create SchoolApplication table
        manager
            .create_table(
                Table::create()
                    .table(SchoolApplication::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolApplication::ApplicationId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(SchoolApplication::ApplicantId).uuid().not_null())
                    .col(ColumnDef::new(SchoolApplication::SchoolName).string().not_null())
                    .col(ColumnDef::new(SchoolApplication::Contact).string().not_null())
                    .col(ColumnDef::new(SchoolApplication::Reason).text().not_null())
                    .col(
                        ColumnDef::new(SchoolApplication::Status)
                            .enumeration(
                                ApplicationStatusEnum::Table,
                                [
                                    ApplicationStatusEnum::Pending,
                                    ApplicationStatusEnum::Approved,
                                    ApplicationStatusEnum::Rejected,
                                ],
                            )
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(SchoolApplication::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(SchoolApplication::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_school_application_applicant")
                            .from_tbl(SchoolApplication::Table)
                            .from_col(SchoolApplication::ApplicantId)
                            .to_tbl(User::Table)
                            .to_col(User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_school_application_applicant_id")
                    .table(SchoolApplication::Table)
                    .col(SchoolApplication::ApplicantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_school_application_status")
                    .table(SchoolApplication::Table)
                    .col(SchoolApplication::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_school_application_created_at")
                    .table(SchoolApplication::Table)
                    .col(SchoolApplication::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // Create StudentApplication table
        manager
            .create_table(
                Table::create()
                    .table(StudentApplication::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentApplication::ApplicationId)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .extra("DEFAULT gen_random_uuid()".to_string()),
                    )
                    .col(ColumnDef::new(StudentApplication::ApplicantId).uuid().not_null())
                    .col(ColumnDef::new(StudentApplication::StudentName).string().not_null())
                    .col(ColumnDef::new(StudentApplication::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(StudentApplication::Grade).integer().not_null())
                    .col(ColumnDef::new(StudentApplication::Reason).text().not_null())
                    .col(
                        ColumnDef::new(StudentApplication::Status)
                            .enumeration(
                                ApplicationStatusEnum::Table,
                                [
                                    ApplicationStatusEnum::Pending,
                                    ApplicationStatusEnum::Approved,
                                    ApplicationStatusEnum::Rejected,
                                ],
                            )
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(StudentApplication::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(StudentApplication::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_application_applicant")
                            .from_tbl(StudentApplication::Table)
                            .from_col(StudentApplication::ApplicantId)
                            .to_tbl(User::Table)
                            .to_col(User::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_application_school")
                            .from_tbl(StudentApplication::Table)
                            .from_col(StudentApplication::SchoolId)
                            .to_tbl(School::Table)
                            .to_col(School::SchoolId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_application_applicant_id")
                    .table(StudentApplication::Table)
                    .col(StudentApplication::ApplicantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_application_school_id")
                    .table(StudentApplication::Table)
                    .col(StudentApplication::SchoolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_application_status")
                    .table(StudentApplication::Table)
                    .col(StudentApplication::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_application_created_at")
                    .table(StudentApplication::Table)
                    .col(StudentApplication::CreatedAt)
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
                    .name("idx_student_application_created_at")
                    .table(StudentApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_application_status")
                    .table(StudentApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_application_school_id")
                    .table(StudentApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_application_applicant_id")
                    .table(StudentApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StudentApplication::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_school_application_created_at")
                    .table(SchoolApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_school_application_status")
                    .table(SchoolApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_school_application_applicant_id")
                    .table(SchoolApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SchoolApplication::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(ApplicationStatusEnum::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SchoolApplication {
    Table,
    ApplicationId,
    ApplicantId,
    SchoolName,
    Contact,
    Reason,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentApplication {
    Table,
    ApplicationId,
    ApplicantId,
    StudentName,
    SchoolId,
    Grade,
    Reason,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ApplicationStatusEnum {
    Table,
    Pending,
    Approved,
    Rejected,
}

#[derive(DeriveIden)]
enum User {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum School {
    Table,
    SchoolId,
}
