pub use sea_orm_migration::prelude::*;

pub mod demo_catalog;
mod m20251018_000000_create_products;
mod m20251018_000001_seed_products;

/// Every migration, including the demo catalog seed
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        let mut migrations = SchemaMigrator::migrations();
        migrations.push(Box::new(m20251018_000001_seed_products::Migration));
        migrations
    }
}

/// Table and index migrations only, for tests that need an empty catalog
pub struct SchemaMigrator;

#[async_trait::async_trait]
impl MigratorTrait for SchemaMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251018_000000_create_products::Migration)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_runs_after_schema() {
        let names: Vec<String> = Migrator::migrations().iter().map(|m| m.name().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "m20251018_000000_create_products",
                "m20251018_000001_seed_products"
            ]
        );
    }

    #[test]
    fn test_schema_migrator_excludes_seed() {
        assert_eq!(SchemaMigrator::migrations().len(), 1);
    }
}
