use circsim::{bench_trail, LogRenderer, Renderer, Scenario, ScenarioConfig, YamlRenderer};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter};

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Yaml,
    Log,
}

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file name under `scenarios/`, or a path to one
    #[arg(short, default_value = "centripetal.yaml")]
    file_name: String,

    /// Number of auto-advance frames after the initial one
    #[arg(short = 'n', default_value_t = 50)]
    frames: usize,

    #[arg(long, value_enum, default_value_t = Format::Log)]
    format: Format,

    /// Banked corner: render a single frame at this angle (degrees)
    #[arg(long)]
    angle: Option<f64>,

    /// Banked corner: friction coefficient for `--angle`
    #[arg(long)]
    friction: Option<f64>,

    /// Time the recomputation chain for a range of trail depths and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.exists() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader).with_context(|| format!("parsing {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run<R: Renderer>(mut scenario: Scenario, args: &Args, renderer: &mut R) -> Result<()> {
    if let Scenario::Banked(session) = &mut scenario {
        if args.angle.is_some() || args.friction.is_some() {
            let current = session.current()?;
            let angle = args.angle.unwrap_or(current.inputs.angle_degrees);
            let mu = args.friction.unwrap_or(current.inputs.friction_coefficient);
            let frame = session.on_input(angle, mu).context("banked corner inputs")?;
            renderer.render(&frame.scene)?;
            return Ok(());
        }
    }

    renderer.render(&scenario.initial_scene()?)?;
    for _ in 0..args.frames {
        scenario.step(renderer)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    if args.bench {
        for r in bench_trail(&[0, 8, 32, 128, 512])? {
            println!("depth = {:4}, frames = {:5}, {:8.3} us/frame", r.depth, r.frames, r.us_per_frame);
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    match args.format {
        Format::Yaml => run(scenario, &args, &mut YamlRenderer::new(io::stdout().lock())),
        Format::Log => run(scenario, &args, &mut LogRenderer::new()),
    }
}
