use tracing::info;
use tracing_subscriber::EnvFilter;

use iconset::{IconSetParams, generate_icon_set};

use super::TAG;
use super::args::CliArgs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run(args: CliArgs) -> iconset::Result<()> {
    init_logging();

    let params = IconSetParams {
        input: args.input,
        output_dir: args.output_dir,
        target: args.target,
        ..Default::default()
    };

    let report = generate_icon_set(&params)?;
    info!(
        "Wrote {} PNGs per variant into {:?}",
        report.square.pngs.len(),
        report.output_dir
    );

    println!("{} generated sizes: {}", TAG, report.sizes);
    println!("{} output dir: {}", TAG, report.output_dir.display());
    Ok(())
}
