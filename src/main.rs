use mpo2stereo::batch::{self, Options};
use mpo2stereo::StereoMode;
use std::io;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "mpo2stereo",
    about = "Split MPO stereo photos into left/right JPEGs or a side-by-side stereo JPEG",
    usage = "mpo2stereo [options] mpofile(s)"
)]
struct Cli {
    /// MPO files to read, or a single pattern such as "*.mpo"
    #[structopt(required = true, min_values = 1)]
    files: Vec<String>,

    /// Specify stereo type: 'parallel' or 'crosseye'
    #[structopt(short, long, possible_values = &StereoMode::VARIANTS)]
    stereo: Option<StereoMode>,

    /// JPEG quality of the written files (1-100)
    #[structopt(short, long, default_value = "75", parse(try_from_str = parse_quality))]
    quality: u8,
}

fn parse_quality(value: &str) -> Result<u8, String> {
    match value.parse::<u8>() {
        Ok(quality) if (1..=100).contains(&quality) => Ok(quality),
        _ => Err(format!("'{}' is not a quality between 1 and 100", value)),
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::from_args();
    let inputs = batch::expand_inputs(&args.files);
    if inputs.is_empty() {
        log::warn!("no files match {:?}", args.files);
    }

    let options = Options {
        stereo: args.stereo,
        quality: args.quality,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = batch::run(&inputs, &options, &mut out)?;
    log::info!(
        "{} of {} file(s) converted, {} failed, {} image(s) written",
        report.succeeded(),
        report.outcomes.len(),
        report.failures().count(),
        report.written().count()
    );

    Ok(())
}
