mod cli;
mod studio;

use forge_common::ForgeError;
use forge_config::schema::StudioConfig;
use forge_renderer::scene::background_from_settings;
use forge_renderer::{
    compose, CaptureBridge, Camera, FrameTimer, GpuContext, IdleMotion, OffscreenRenderer,
    PhysicalSize, RenderSurface, Scene,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use studio::Studio;

const DEFAULT_LOG_DIRECTIVE: &str = "forge=info";

fn init_logging(directive: &str) {
    let directive = directive.parse().unwrap_or_else(|_| {
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Settings are read before logging so logging.level can take effect
    let loaded = forge_config::load_config(args.config.as_deref());

    // Initialize logging
    let config_level = loaded.as_ref().map(|c| c.logging.level.clone()).ok();
    let log_directive = args
        .log_level
        .clone()
        .or(config_level)
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.into());
    init_logging(&log_directive);

    tracing::info!("Avatar Forge v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        StudioConfig::default()
    });

    if let Err(e) = run(&args, &config) {
        tracing::error!("{e}");
        eprintln!("forge: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

fn run(args: &cli::Args, config: &StudioConfig) -> Result<(), ForgeError> {
    let mut studio = Studio::new(&args.output, config.capture.file_prefix.clone());

    if args.reset {
        studio.reset();
    }
    if args.randomize {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        studio.randomize(&mut rng);
    }
    for edit in args.edits() {
        studio.edit(edit);
    }
    tracing::debug!("Sliders: {}", studio.slider_summary());

    let tree = compose(studio.avatar());
    tracing::info!(nodes = tree.len(), beard = studio.avatar().beard, "Composed avatar");

    if args.dump_tree {
        let json = serde_json::to_string_pretty(&tree).map_err(|e| ForgeError::Other(e.to_string()))?;
        println!("{json}");
        return Ok(());
    }

    std::fs::create_dir_all(studio.output_dir())?;

    // Headless renderer at the configured viewport
    let gpu = pollster::block_on(GpuContext::new_headless())?;
    let viewport = PhysicalSize::new(config.viewport.width, config.viewport.height);
    let mut renderer = OffscreenRenderer::new(gpu, viewport, config.viewport.pixel_ratio);

    let mut scene = Scene::new(tree, background_from_settings(&config.scene));
    let camera = Camera::from_settings(&config.scene);
    let mut bridge = CaptureBridge::with_resolution(PhysicalSize::new(
        config.capture.width,
        config.capture.height,
    ));

    // Fixed-step preview loop
    let frames = args.frames.unwrap_or(config.preview.frames);
    let dt = config.preview.frame_delta();
    let mut motion = IdleMotion::new();
    let mut timer = FrameTimer::new();
    tracing::info!(
        frames,
        buffer = ?renderer.buffer_size(),
        "Entering preview loop"
    );
    for _ in 0..frames {
        timer.start();
        motion.apply(dt, scene.root_mut());
        renderer.render(&scene, &camera)?;
        timer.finish();
        bridge.mark_ready();
    }
    let stats = timer.stats();
    tracing::info!(
        fps = stats.fps,
        avg_ms = stats.avg_ms,
        worst_ms = stats.worst_ms,
        yaw = scene.root().yaw,
        "Preview finished"
    );

    let captured = bridge.capture(&mut renderer, &scene, &camera);
    let exported = studio.export(captured, chrono::Utc::now().timestamp_millis());

    if let Some(feedback) = studio.feedback().current() {
        tracing::info!("{}", feedback.message);
    }
    if let Some(path) = exported {
        println!("{}", path.display());
    }
    Ok(())
}
