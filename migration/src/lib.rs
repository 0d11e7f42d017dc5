pub use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_table_owners::Migration),
            Box::new(m20260110_000002_create_table_animals::Migration),
        ]
    }
}
mod m20260110_000001_create_table_owners;
mod m20260110_000002_create_table_animals;
