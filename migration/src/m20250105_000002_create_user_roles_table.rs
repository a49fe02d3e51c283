use sea_orm_migration::{
    prelude::{
        async_trait,
        extension::postgres::Type,
        sea_orm::{self, DeriveIden, EnumIter, Iden, Iterable},
        Alias, DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{enumeration, uuid},
};

use crate::m20250105_000001_create_users_table::User;

const INDEX_USER_ID_ROLE: &str = "user_role_user_id_role_unique_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(RoleEnum)
                    .values(RoleVariants::iter())
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(UserRole::Table)
                    .if_not_exists()
                    .col(uuid(UserRole::Id).primary_key())
                    .col(uuid(UserRole::UserId))
                    .col(enumeration(
                        UserRole::Role,
                        Alias::new(RoleEnum.to_string()),
                        RoleVariants::iter(),
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_role-user_id")
                            .from(UserRole::Table, UserRole::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_USER_ID_ROLE)
                    .table(UserRole::Table)
                    .col(UserRole::UserId)
                    .col(UserRole::Role)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_USER_ID_ROLE).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRole::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().if_exists().name(RoleEnum).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserRole {
    Table,
    Id,
    UserId,
    Role,
}

#[derive(DeriveIden)]
struct RoleEnum;

#[derive(DeriveIden, EnumIter)]
enum RoleVariants {
    #[sea_orm(iden = "User")]
    User,
    #[sea_orm(iden = "Admin")]
    Admin,
}
