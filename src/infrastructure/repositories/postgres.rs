use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::domain::{
    models::{Meal, MealChanges, User},
    repositories::{MealRepository, UserRepository},
    value_objects::SessionId,
};

pub type PgPool = Pool<Postgres>;

/// Applies the SQL migrations bundled under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, created_at, session_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(user.created_at)
        .bind(user.session_id.map(|s| *s.as_uuid()))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, created_at, session_id FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn find_by_session(&self, session_id: &SessionId) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, created_at, session_id FROM users WHERE session_id = $1"#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }
}

#[derive(Clone)]
pub struct PostgresMealRepository {
    pool: PgPool,
}

impl PostgresMealRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl MealRepository for PostgresMealRepository {
    async fn insert(&self, meal: &Meal) -> anyhow::Result<Meal> {
        let record = sqlx::query_as::<_, MealRecord>(
            r#"
            INSERT INTO meals (id, name, description, in_diet, created_at, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, in_diet, created_at, user_id
            "#,
        )
        .bind(meal.id)
        .bind(&meal.name)
        .bind(&meal.description)
        .bind(meal.in_diet)
        .bind(meal.created_at)
        .bind(meal.user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(record.into())
    }

    async fn get(&self, meal_id: Uuid) -> anyhow::Result<Option<Meal>> {
        let record = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, name, description, in_diet, created_at, user_id
            FROM meals
            WHERE id = $1
            "#,
        )
        .bind(meal_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(Meal::from))
    }

    async fn list_by_user(&self, user_id: Uuid) -> anyhow::Result<Vec<Meal>> {
        let rows = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, name, description, in_diet, created_at, user_id
            FROM meals
            WHERE user_id = $1
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Meal::from).collect())
    }

    async fn update(&self, meal_id: Uuid, changes: &MealChanges) -> anyhow::Result<Option<Meal>> {
        let record = sqlx::query_as::<_, MealRecord>(
            r#"
            UPDATE meals
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                in_diet = COALESCE($4, in_diet)
            WHERE id = $1
            RETURNING id, name, description, in_diet, created_at, user_id
            "#,
        )
        .bind(meal_id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(changes.in_diet)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(Meal::from))
    }

    async fn delete(&self, meal_id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM meals WHERE id = $1"#)
            .bind(meal_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    session_id: Option<Uuid>,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            session_id: value.session_id.map(SessionId::from),
        }
    }
}

#[derive(FromRow)]
struct MealRecord {
    id: Uuid,
    name: String,
    description: String,
    in_diet: bool,
    created_at: DateTime<Utc>,
    user_id: Uuid,
}

impl From<MealRecord> for Meal {
    fn from(value: MealRecord) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            description: value.description,
            in_diet: value.in_diet,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seed_user(pool: &PgPool) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            created_at: Utc::now(),
            session_id: Some(SessionId::generate()),
        };
        PostgresUserRepository::new(pool.clone())
            .insert(&user)
            .await
            .unwrap();
        user
    }

    fn meal(user_id: Uuid, name: &str, in_diet: bool, created_at: DateTime<Utc>) -> Meal {
        Meal {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            description: format!("{name} description"),
            in_diet,
            created_at,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn users_are_found_by_id_and_session(pool: PgPool) {
        let repo = PostgresUserRepository::new(pool.clone());
        let user = seed_user(&pool).await;

        let by_id = repo.get(&user.id).await.unwrap().unwrap();
        assert_eq!(by_id.name, "John Doe");
        assert_eq!(by_id.session_id, user.session_id);

        let by_session = repo
            .find_by_session(&user.session_id.unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_session.id, user.id);

        assert!(repo.get(&Uuid::new_v4()).await.unwrap().is_none());
        assert!(
            repo.find_by_session(&SessionId::generate())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn update_with_only_a_false_flag_keeps_text_fields(pool: PgPool) {
        let user = seed_user(&pool).await;
        let repo = PostgresMealRepository::new(pool);
        let stored = repo
            .insert(&meal(user.id, "Bread", true, Utc::now()))
            .await
            .unwrap();

        let updated = repo
            .update(
                stored.id,
                &MealChanges {
                    in_diet: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert!(!updated.in_diet);
        assert_eq!(updated.name, "Bread");
        assert_eq!(updated.description, "Bread description");

        let renamed = repo
            .update(
                stored.id,
                &MealChanges {
                    description: Some("Toasted".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, "Bread");
        assert_eq!(renamed.description, "Toasted");
        assert!(!renamed.in_diet);

        let missing = repo
            .update(Uuid::new_v4(), &MealChanges::default())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn list_is_chronological_and_keeps_insertion_order_on_ties(pool: PgPool) {
        let user = seed_user(&pool).await;
        let other = seed_user(&pool).await;
        let repo = PostgresMealRepository::new(pool);

        let base = Utc::now();
        let later = base + chrono::Duration::seconds(10);
        repo.insert(&meal(user.id, "Dinner", false, later))
            .await
            .unwrap();
        repo.insert(&meal(user.id, "Breakfast", true, base))
            .await
            .unwrap();
        repo.insert(&meal(other.id, "Cake", false, base))
            .await
            .unwrap();
        repo.insert(&meal(user.id, "Snack", true, base))
            .await
            .unwrap();

        let names: Vec<String> = repo
            .list_by_user(user.id)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, ["Breakfast", "Snack", "Dinner"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
        let user = seed_user(&pool).await;
        let repo = PostgresMealRepository::new(pool);
        let stored = repo
            .insert(&meal(user.id, "Bread", true, Utc::now()))
            .await
            .unwrap();

        assert!(repo.delete(stored.id).await.unwrap());
        assert!(repo.get(stored.id).await.unwrap().is_none());
        assert!(!repo.delete(stored.id).await.unwrap());
    }
}
