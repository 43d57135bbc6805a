extern crate csg_raycaster as root;

use root::parsing::config::*;
use root::parsing::construct_world;
use root::renderer::{NaiveRenderer, Renderer, SingleThreadedRenderer};

#[macro_use]
extern crate tracing;

use std::process::ExitCode;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(long)]
    pub output_directory: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn construct_renderer(config: &Config) -> Box<dyn Renderer> {
    match config.renderer {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        RendererType::SingleThreaded => Box::new(SingleThreadedRenderer::new()),
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config: TOMLConfig = get_settings(opts.config_file)?;

    let threads = config
        .render_settings
        .iter()
        .map(|i| &i.threads)
        .fold(1, |a, &b| a.max(b.unwrap_or(1)));
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()?;

    // override scene file and output directory based on provided command line arguments
    config.default_scene_file = opts.scene_file.unwrap_or(config.default_scene_file);
    config.output_directory = opts.output_directory.or(config.output_directory);
    let config = Config::from(config);

    let world = construct_world(&config.scene_file)?;
    let renderer = construct_renderer(&config);

    if opts.dry_run {
        info!("dry run, skipping {} renders", config.render_settings.len());
        return Ok(());
    }
    renderer.render(world, &config)
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    let filter = EnvFilter::try_new(&opts.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("fatal error, aborting. error is {:?}", err);
            ExitCode::FAILURE
        }
    }
}
