//! CLI runner - executes commands

use crate::catalog::{parse_date, CatalogStore};
use crate::cli::commands::{Cli, Commands};
use crate::error::{Result, ResultExt};
use crate::loader::load_catalog;
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Serve { port } => self.serve(*port).await,
            Commands::Validate => self.validate(),
            Commands::Summary { date } => self.summary(date.as_deref()),
        }
    }

    /// Load and resolve the catalog seed
    fn load_store(&self) -> Result<CatalogStore> {
        let def = load_catalog(&self.cli.catalog)
            .with_context(|| format!("Failed to load catalog '{}'", self.cli.catalog.display()))?;
        CatalogStore::from_definition(def)
    }

    /// Start the HTTP API
    async fn serve(&self, port: u16) -> Result<()> {
        let store = self.load_store()?;
        tracing::info!(
            meals = store.meal_count(),
            menus = store.menu_count(),
            orders = store.order_count(),
            "Catalog loaded"
        );
        crate::cli::server::serve(Arc::new(store), port).await
    }

    /// Validate the catalog seed file
    fn validate(&self) -> Result<()> {
        let store = self.load_store()?;
        println!(
            "Catalog OK: {} meals, {} menus, {} orders",
            store.meal_count(),
            store.menu_count(),
            store.order_count()
        );
        if self.cli.verbose {
            for meal in store.meals() {
                println!("  {} ({})", meal.title, meal.price);
            }
        }
        Ok(())
    }

    /// Print cash accounting totals
    fn summary(&self, date: Option<&str>) -> Result<()> {
        let store = self.load_store()?;
        let date = date.map(parse_date).transpose()?;
        let summary = store.summary(date);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}
