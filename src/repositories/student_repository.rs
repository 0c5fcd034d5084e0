use std::collections::HashMap;

use crate::entities::{rating_summary, school, student};
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::prelude::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

/// A student joined with its school name and rating aggregate. Students
/// without a summary row read as average 0 with zero ratings.
pub struct StudentRow {
    pub student: student::Model,
    pub school_name: String,
    pub avg_score: Decimal,
    pub rating_count: i32,
}

pub struct StudentRepository;

impl StudentRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, student_id: Uuid) -> Result<Option<student::Model>> {
        let db = self.get_connection();
        let student = student::Entity::find_by_id(student_id).one(db).await?;
        Ok(student)
    }

    pub async fn find_rows(
        &self,
        school_id: Option<Uuid>,
        grade: Option<i32>,
    ) -> Result<Vec<StudentRow>> {
        let db = self.get_connection();
        let mut query = student::Entity::find();
        if let Some(school_id) = school_id {
            query = query.filter(student::Column::SchoolId.eq(school_id));
        }
        if let Some(grade) = grade {
            query = query.filter(student::Column::Grade.eq(grade));
        }

        let students = query
            .order_by_asc(student::Column::CreatedAt)
            .find_also_related(rating_summary::Entity)
            .all(db)
            .await?;

        let schools = school::Entity::find().all(db).await?;
        let school_names: HashMap<Uuid, String> = schools
            .into_iter()
            .map(|school| (school.school_id, school.school_name))
            .collect();

        Ok(students
            .into_iter()
            .map(|(student, summary)| {
                let school_name = school_names
                    .get(&student.school_id)
                    .cloned()
                    .unwrap_or_default();
                Self::build_row(student, summary, school_name)
            })
            .collect())
    }

    pub async fn find_row_by_id(&self, student_id: Uuid) -> Result<Option<StudentRow>> {
        let db = self.get_connection();
        let found = student::Entity::find_by_id(student_id)
            .find_also_related(rating_summary::Entity)
            .one(db)
            .await?;

        if let Some((student, summary)) = found {
            let school_name = school::Entity::find_by_id(student.school_id)
                .one(db)
                .await?
                .map(|school| school.school_name)
                .unwrap_or_default();
            Ok(Some(Self::build_row(student, summary, school_name)))
        } else {
            Ok(None)
        }
    }

    fn build_row(
        student: student::Model,
        summary: Option<rating_summary::Model>,
        school_name: String,
    ) -> StudentRow {
        let (avg_score, rating_count) = summary
            .map(|summary| (summary.avg_score, summary.rating_count))
            .unwrap_or((Decimal::ZERO, 0));

        StudentRow {
            student,
            school_name,
            avg_score,
            rating_count,
        }
    }
}
