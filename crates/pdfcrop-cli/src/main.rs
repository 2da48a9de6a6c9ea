mod cli;
mod info_cmd;
mod logging;
mod page_range;
mod render_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        cli::Commands::Info {
            ref file,
            ref pages,
            ref format,
            ref password,
        } => info_cmd::run(
            file,
            pages.as_deref(),
            format,
            &shared::open_options(password.as_deref(), cli.verbose),
        ),
        cli::Commands::Render {
            ref file,
            page,
            bbox,
            padding,
            resolution,
            ref output,
            ref password,
            ref pdfium_dir,
        } => render_cmd::run(
            &render_cmd::RenderArgs {
                file,
                page,
                bbox,
                padding,
                resolution,
                output,
                pdfium_dir: pdfium_dir.as_deref(),
            },
            shared::open_options(password.as_deref(), cli.verbose),
        ),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
