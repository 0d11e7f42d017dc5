use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_table_owners::Owners;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Animals::Table)
                    .if_not_exists()
                    .col(pk_auto(Animals::Id))
                    .col(string(Animals::Nombre).not_null())
                    .col(string(Animals::Tipo).not_null())
                    .col(double(Animals::Peso).not_null())
                    .col(string_null(Animals::Enfermedad))
                    .col(string_null(Animals::Comentarios))
                    .col(integer(Animals::OwnerId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_animals_owner_id")
                            .from(Animals::Table, Animals::OwnerId)
                            .to(Owners::Table, Owners::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("animals_owner_id_idx")
                    .table(Animals::Table)
                    .col(Animals::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("animals_owner_id_idx")
                    .table(Animals::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Animals::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Animals {
    Table,
    Id,
    Nombre,
    Tipo,
    Peso,
    Enfermedad,
    Comentarios,
    OwnerId,
}
