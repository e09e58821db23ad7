use tracing::info;

use logoprep::LogoParams;
use logoprep::api::process_logo_to_path;

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.size == 0 {
        return Err(AppError::ZeroSize { size: args.size }.into());
    }

    let params = LogoParams {
        canvas_size: args.size,
        threshold: args.threshold,
        sidecar: args.sidecar,
    };

    let report = process_logo_to_path(&args.input, &args.output, &params)?;

    info!(
        "Successfully processed: {:?} -> {:?} ({}x{} on {}x{} canvas)\n",
        args.input,
        args.output,
        report.scaled_width,
        report.scaled_height,
        report.canvas_size,
        report.canvas_size
    );
    println!("Success: Saved to {}", args.output.display());

    Ok(())
}
