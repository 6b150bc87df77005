//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryOrder, Schema, Set, TransactionTrait,
};

use crate::domain::entities::{SaveUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert the row under the requested id, or overwrite it if the id is taken.
    ///
    /// The id sequence is moved past the highest stored id in the same transaction,
    /// so later inserts without an id never collide with an explicit one.
    async fn upsert(&self, id: UserId, user: &SaveUser) -> Result<users::Model, DbErr> {
        let txn = self.db.begin().await?;

        let model = users::ActiveModel {
            id: Set(id.0),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            phone: Set(user.phone.clone()),
        };
        let saved = users::Entity::insert(model)
            .on_conflict(
                OnConflict::column(users::Column::Id)
                    .update_columns([
                        users::Column::FirstName,
                        users::Column::LastName,
                        users::Column::Phone,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(&txn)
            .await?;

        txn.execute_unprepared(SYNC_ID_SEQUENCE).await?;

        txn.commit().await?;
        Ok(saved)
    }
}

const SYNC_ID_SEQUENCE: &str = "SELECT setval(pg_get_serial_sequence('users', 'id'), \
     GREATEST((SELECT MAX(id) FROM users), 1))";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let results = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn save(&self, user: &SaveUser) -> Result<User, DomainError> {
        let saved = match user.id {
            Some(id) => self.upsert(id, user).await?,
            None => {
                users::ActiveModel {
                    id: NotSet,
                    first_name: Set(user.first_name.clone()),
                    last_name: Set(user.last_name.clone()),
                    phone: Set(user.phone.clone()),
                }
                .insert(&self.db)
                .await?
            }
        };

        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), DomainError> {
        let result = users::Entity::delete_by_id(id.0).exec(&self.db).await?;

        if result.rows_affected == 0 {
            tracing::debug!(user_id = %id, "Delete matched no rows");
        }

        Ok(())
    }
}

/// Create the `users` table if it does not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(users::Entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    Ok(())
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: UserId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
        }
    }
}
