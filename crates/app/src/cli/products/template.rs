use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
};

use catalog::transfer::{TransferError, export_template};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct TemplateArgs {
    /// Output file; standard output when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,
}

pub(crate) fn run(args: &TemplateArgs) -> Result<(), String> {
    let output: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(
            File::create(path)
                .map_err(|error| format!("failed to create {}: {error}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    export_template(output)
        .and_then(|mut output| output.flush().map_err(TransferError::from))
        .map_err(|error| format!("failed to write template: {error}"))
}
