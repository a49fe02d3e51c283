pub use sea_orm_migration::prelude::*;

mod m20250105_000001_create_users_table;
mod m20250105_000002_create_user_roles_table;
mod m20250105_000003_create_addresses_table;
mod m20250112_000001_create_password_reset_tokens_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250105_000001_create_users_table::Migration),
            Box::new(m20250105_000002_create_user_roles_table::Migration),
            Box::new(m20250105_000003_create_addresses_table::Migration),
            Box::new(m20250112_000001_create_password_reset_tokens_table::Migration),
        ]
    }
}
