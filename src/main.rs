#![deny(clippy::all)]

use clap::{App, Arg};
use log::{error, info};
use std::fs::{self, File};
use std::path::Path;
use std::process;
use std::time::Instant;
use trace::{Result, Scene};

struct Options<'a> {
    scene_path: &'a Path,
    output_dir: &'a Path,
    output_name: &'a str,
    use_progress: bool,
}

fn run(options: &Options) -> Result<()> {
    let now = Instant::now();
    let scene = Scene::from_reader(File::open(options.scene_path)?)?;
    let scene = scene.build_raytracing_scene()?;
    info!(
        "Took {:?} to load {} with {} shapes and {} cameras.",
        now.elapsed(),
        options.scene_path.display(),
        scene.get_num_objects(),
        scene.cameras().len()
    );

    fs::create_dir_all(options.output_dir)?;
    scene.render_each(options.use_progress, |rendered| {
        let path = rendered.save(options.output_dir, options.output_name)?;
        info!("Output written to {}", path.display());
        Ok(())
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = App::new("ray caster")
        .about("Renders every camera of a static scene with a single-bounce ray caster")
        .arg(
            Arg::with_name("scene")
                .index(1)
                .required(true)
                .takes_value(true)
                .help("input scene as a json file"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .default_value("render.png")
                .help(
                    "Base name of the rendered images\n\
                     Each camera writes <camera>-<output>",
                ),
        )
        .arg(
            Arg::with_name("output-dir")
                .short("d")
                .long("output-dir")
                .takes_value(true)
                .default_value("output")
                .help("Directory for rendered images, created if missing"),
        )
        .arg(
            Arg::with_name("noprogress")
                .long("no-progress")
                .help("Hide progress bar"),
        )
        .get_matches();

    let options = Options {
        scene_path: Path::new(matches.value_of("scene").expect("scene is a required argument")),
        output_dir: Path::new(matches.value_of("output-dir").unwrap_or("output")),
        output_name: matches.value_of("output").unwrap_or("render.png"),
        use_progress: !matches.is_present("noprogress"),
    };

    if let Err(err) = run(&options) {
        error!("{}", err);
        process::exit(1);
    }
}
