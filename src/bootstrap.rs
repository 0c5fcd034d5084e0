use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::config::APP_CONFIG;
use crate::entities::sea_orm_active_enums::{BadgeTypeEnum, RoleEnum};
use crate::entities::user;
use crate::repositories::BadgeRepository;

pub async fn initialize_admin_user(db: &DatabaseConnection) -> Result<()> {
    let admin_account: &str = &APP_CONFIG.admin_account;
    let default_password: &str = &APP_CONFIG.admin_password;

    let existing_admin = user::Entity::find()
        .filter(user::Column::Account.eq(admin_account))
        .one(db)
        .await
        .context("Failed to check existing admin")?;

    if existing_admin.is_some() {
        tracing::info!("Admin user already exists, skipping initialization");
        return Ok(());
    }

    tracing::info!("Creating default admin user...");

    let now = Utc::now().naive_utc();

    let admin_user = user::ActiveModel {
        user_id: Set(Uuid::new_v4()),
        account: Set(admin_account.to_string()),
        password: Set(default_password.to_string()),
        role: Set(RoleEnum::Admin),
        created_at: Set(now),
    };

    admin_user
        .insert(db)
        .await
        .context("Failed to insert admin user")?;

    tracing::info!("✅ Admin user created successfully!");
    tracing::info!("  Account: {}", admin_account);
    tracing::info!("  Password: {}", default_password);
    tracing::warn!("⚠️  Please change the default password after first login!");

    Ok(())
}

/// Seeds the built-in badge catalogue, once, on an empty table.
pub async fn initialize_default_badges() -> Result<()> {
    let badge_repo = BadgeRepository::new();

    let existing = badge_repo
        .count()
        .await
        .context("Failed to check badge catalogue")?;
    if existing > 0 {
        tracing::info!("Badge catalogue already present, skipping initialization");
        return Ok(());
    }

    tracing::info!("Seeding default badge catalogue...");

    let definitions = [
        (
            "Star Student",
            "Highest average score on the student leaderboard",
            BadgeTypeEnum::Student,
            "Top average score for the period",
        ),
        (
            "Crowd Favorite",
            "Most ratings received by a single student",
            BadgeTypeEnum::Student,
            "Highest rating count for the period",
        ),
        (
            "Top School",
            "Best weighted average across all students of the school",
            BadgeTypeEnum::School,
            "Top weighted average for the period",
        ),
        (
            "Engaged Campus",
            "Most ratings received across the school",
            BadgeTypeEnum::School,
            "Highest total rating count for the period",
        ),
    ];

    for (name, description, badge_type, rule_desc) in definitions {
        badge_repo
            .create(
                name.to_string(),
                description.to_string(),
                badge_type,
                rule_desc.to_string(),
            )
            .await
            .context("Failed to insert badge definition")?;
    }

    tracing::info!("✅ Badge catalogue seeded successfully!");

    Ok(())
}
