use sea_orm_migration::{
    prelude::{
        async_trait,
        extension::postgres::Type,
        sea_orm::{self, DeriveIden, EnumIter, Iden, Iterable},
        Alias, DbErr, DeriveMigrationName, Expr, ForeignKey, ForeignKeyAction, Index,
        MigrationTrait, SchemaManager, Table,
    },
    schema::{enumeration, string, string_uniq, timestamp_with_time_zone, uuid},
};

use crate::m20250105_000001_create_users_table::User;

const INDEX_USER_ID: &str = "address_user_id_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(AddressTypeEnum)
                    .values(AddressTypeVariants::iter())
                    .to_owned(),
            )
            .await?;
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(uuid(Address::Id).primary_key())
                    .col(string_uniq(Address::AddressId))
                    .col(uuid(Address::UserId))
                    .col(string(Address::StreetName))
                    .col(string(Address::City))
                    .col(string(Address::Country))
                    .col(string(Address::PostalCode))
                    .col(enumeration(
                        Address::Type,
                        Alias::new(AddressTypeEnum.to_string()),
                        AddressTypeVariants::iter(),
                    ))
                    .col(
                        timestamp_with_time_zone(Address::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-address-user_id")
                            .from(Address::Table, Address::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(INDEX_USER_ID)
                    .table(Address::Table)
                    .col(Address::UserId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_USER_ID).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await?;
        manager
            .drop_type(Type::drop().if_exists().name(AddressTypeEnum).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    AddressId,
    UserId,
    StreetName,
    City,
    Country,
    PostalCode,
    Type,
    CreatedAt,
}

#[derive(DeriveIden)]
struct AddressTypeEnum;

#[derive(DeriveIden, EnumIter)]
enum AddressTypeVariants {
    #[sea_orm(iden = "Billing")]
    Billing,
    #[sea_orm(iden = "Shipping")]
    Shipping,
}
