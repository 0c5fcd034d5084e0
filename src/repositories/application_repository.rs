use crate::entities::sea_orm_active_enums::ApplicationStatusEnum;
use crate::entities::{school, school_application, student, student_application};
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Select, Set, TransactionTrait,
};
use uuid::Uuid;

pub struct ApplicationRepository;

impl ApplicationRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_school_applications(
        &self,
        status: Option<ApplicationStatusEnum>,
        applicant_id: Option<Uuid>,
    ) -> Result<Vec<school_application::Model>> {
        let db = self.get_connection();
        let mut query = school_application::Entity::find()
            .order_by_desc(school_application::Column::CreatedAt);
        if let Some(status) = status {
            query = query.filter(school_application::Column::Status.eq(status));
        }
        if let Some(applicant_id) = applicant_id {
            query = query.filter(school_application::Column::ApplicantId.eq(applicant_id));
        }

        let applications = query.all(db).await?;
        Ok(applications)
    }

    pub async fn find_student_applications(
        &self,
        status: Option<ApplicationStatusEnum>,
        applicant_id: Option<Uuid>,
    ) -> Result<Vec<(student_application::Model, Option<school::Model>)>> {
        let db = self.get_connection();
        let mut query = student_application::Entity::find()
            .order_by_desc(student_application::Column::CreatedAt);
        if let Some(status) = status {
            query = query.filter(student_application::Column::Status.eq(status));
        }
        if let Some(applicant_id) = applicant_id {
            query = query.filter(student_application::Column::ApplicantId.eq(applicant_id));
        }

        let applications = query.find_also_related(school::Entity).all(db).await?;
        Ok(applications)
    }

    pub async fn find_school_application(
        &self,
        application_id: Uuid,
    ) -> Result<Option<school_application::Model>> {
        let db = self.get_connection();
        let application = school_application::Entity::find_by_id(application_id)
            .one(db)
            .await?;
        Ok(application)
    }

    pub async fn find_student_application(
        &self,
        application_id: Uuid,
    ) -> Result<Option<student_application::Model>> {
        let db = self.get_connection();
        let application = student_application::Entity::find_by_id(application_id)
            .one(db)
            .await?;
        Ok(application)
    }

    pub async fn create_school_application(
        &self,
        applicant_id: Uuid,
        school_name: String,
        contact: String,
        reason: String,
    ) -> Result<school_application::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let application = school_application::ActiveModel {
            application_id: Set(Uuid::new_v4()),
            applicant_id: Set(applicant_id),
            school_name: Set(school_name),
            contact: Set(contact),
            reason: Set(reason),
            status: Set(ApplicationStatusEnum::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = application.insert(db).await?;
        Ok(result)
    }

    pub async fn create_student_application(
        &self,
        applicant_id: Uuid,
        student_name: String,
        school_id: Uuid,
        grade: i32,
        reason: String,
    ) -> Result<student_application::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let application = student_application::ActiveModel {
            application_id: Set(Uuid::new_v4()),
            applicant_id: Set(applicant_id),
            student_name: Set(student_name),
            school_id: Set(school_id),
            grade: Set(grade),
            reason: Set(reason),
            status: Set(ApplicationStatusEnum::Pending),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = application.insert(db).await?;
        Ok(result)
    }

    /// Write the decision and, on approval, create the school unless one
    /// already exists under a case-insensitive name match. Status write and
    /// side effect share one transaction. Returns None when the application
    /// does not exist.
    pub async fn decide_school_application(
        &self,
        application_id: Uuid,
        status: ApplicationStatusEnum,
    ) -> Result<Option<school_application::Model>> {
        let db = self.get_connection();
        let txn = db.begin().await?;
        let now = chrono::Utc::now().naive_utc();

        let application = match school_application::Entity::find_by_id(application_id)
            .one(&txn)
            .await?
        {
            Some(application) => application,
            None => return Ok(None),
        };
        let school_name = application.school_name.clone();

        let mut active_application: school_application::ActiveModel = application.into();
        active_application.status = Set(status.clone());
        active_application.updated_at = Set(now);
        let updated = active_application.update(&txn).await?;

        if status == ApplicationStatusEnum::Approved {
            let existing = Self::find_school_ignore_case(&school_name)
                .one(&txn)
                .await?;
            if existing.is_none() {
                let school_model = school::ActiveModel {
                    school_id: Set(Uuid::new_v4()),
                    school_name: Set(school_name),
                    created_at: Set(now),
                };
                school_model.insert(&txn).await?;
            }
        }

        txn.commit().await?;
        Ok(Some(updated))
    }

    /// Name match with both sides lowercased in SQL, under the store's
    /// collation.
    fn find_school_ignore_case(school_name: &str) -> Select<school::Entity> {
        school::Entity::find().filter(
            Expr::expr(Func::lower(Expr::col(school::Column::SchoolName)))
                .eq(Func::lower(Expr::val(school_name))),
        )
    }

    /// Same shape as the school decision: on approval the student is
    /// created unless the exact (school, name, grade) triple already
    /// exists.
    pub async fn decide_student_application(
        &self,
        application_id: Uuid,
        status: ApplicationStatusEnum,
    ) -> Result<Option<student_application::Model>> {
        let db = self.get_connection();
        let txn = db.begin().await?;
        let now = chrono::Utc::now().naive_utc();

        let application = match student_application::Entity::find_by_id(application_id)
            .one(&txn)
            .await?
        {
            Some(application) => application,
            None => return Ok(None),
        };
        let student_name = application.student_name.clone();
        let school_id = application.school_id;
        let grade = application.grade;

        let mut active_application: student_application::ActiveModel = application.into();
        active_application.status = Set(status.clone());
        active_application.updated_at = Set(now);
        let updated = active_application.update(&txn).await?;

        if status == ApplicationStatusEnum::Approved {
            let existing = student::Entity::find()
                .filter(student::Column::SchoolId.eq(school_id))
                .filter(student::Column::Name.eq(student_name.clone()))
                .filter(student::Column::Grade.eq(grade))
                .one(&txn)
                .await?;
            if existing.is_none() {
                let student_model = student::ActiveModel {
                    student_id: Set(Uuid::new_v4()),
                    school_id: Set(school_id),
                    name: Set(student_name),
                    grade: Set(grade),
                    created_at: Set(now),
                };
                student_model.insert(&txn).await?;
            }
        }

        txn.commit().await?;
        Ok(Some(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn test_school_existence_check_lowercases_both_sides() {
        let sql = ApplicationRepository::find_school_ignore_case("Northlake High")
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"LOWER("school_name") = LOWER('Northlake High')"#));
    }
}
