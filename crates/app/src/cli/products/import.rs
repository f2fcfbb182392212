use std::{fs::File, io::BufReader, path::PathBuf};

use catalog::transfer::sanitize_filename;
use catalog_app::domain::products::import_products;
use clap::Args;
use jiff::Timestamp;

#[derive(Debug, Args)]
pub(crate) struct ImportArgs {
    /// CSV file to import
    file: PathBuf,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ImportArgs) -> Result<(), String> {
    let file_name = args
        .file
        .file_name()
        .map(|name| sanitize_filename(&name.to_string_lossy()))
        .unwrap_or_default();

    let file = File::open(&args.file)
        .map_err(|error| format!("failed to open {}: {error}", args.file.display()))?;

    let app = super::connect(&args.database_url).await?;

    let imported = import_products(app.products.as_ref(), BufReader::new(file), Timestamp::now())
        .await
        .map_err(|error| format!("failed to import {file_name}: {error}"))?;

    #[expect(clippy::print_stdout, reason = "CLI output")]
    {
        println!("imported: {}", imported.len());
        println!("file_name: {file_name}");
    }

    Ok(())
}
