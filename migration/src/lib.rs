pub use sea_orm_migration::prelude::*;

mod util;
mod m20260803_101112_init;
mod m20260804_070009_seed_demo_tenant;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260803_101112_init::Migration),
            Box::new(m20260804_070009_seed_demo_tenant::Migration),
        ]
    }
}
