use std::{
    fs::File,
    io::{self, BufWriter, Write},
    num::NonZeroU64,
    path::PathBuf,
};

use catalog::search::{DEFAULT_PAGE_SIZE, ProductSearch};
use catalog_app::domain::products::export_products;
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct ExportArgs {
    /// Free-text search term; lists every named product when omitted
    #[arg(short, long)]
    query: Option<String>,

    /// 1-based page number
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,

    /// Products per page
    #[arg(long, env = "PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: NonZeroU64,

    /// Output file; standard output when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ExportArgs) -> Result<(), String> {
    let search = ProductSearch::new(args.query.as_deref(), args.page, args.page_size);

    let app = super::connect(&args.database_url).await?;

    let output: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|error| {
            format!("failed to create {}: {error}", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    let export = export_products(app.products.as_ref(), &search, output)
        .await
        .map_err(|error| format!("failed to export products: {error}"))?;

    let mut output = export.output;

    output
        .flush()
        .map_err(|error| format!("failed to write products: {error}"))?;

    #[expect(clippy::print_stderr, reason = "summary must not mix with CSV on stdout")]
    {
        eprintln!(
            "exported {} of {} products (page {} of {})",
            export.page.items.len(),
            export.page.total,
            export.page.page,
            export.page.total_pages()
        );
    }

    Ok(())
}
