use catalog_app::context::AppContext;
use clap::{Args, Subcommand};

mod export;
mod import;
mod template;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// Import every row of a CSV file as new products
    Import(import::ImportArgs),

    /// Export one page of products as CSV
    Export(export::ExportArgs),

    /// Write an empty CSV file with the import header row
    Template(template::TemplateArgs),
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::Import(args) => import::run(args).await,
        ProductsSubcommand::Export(args) => export::run(args).await,
        ProductsSubcommand::Template(args) => template::run(&args),
    }
}

async fn connect(database_url: &str) -> Result<AppContext, String> {
    AppContext::from_database_url(database_url, false)
        .await
        .map_err(|error| format!("{error}: {}", source_message(&error)))
}

fn source_message(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map_or_else(String::new, ToString::to_string)
}
