/// Livery native driver: loads a catalog, restores saved selections, prints
/// the paint job and writes one preview per view.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::main()
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};
    use std::process::ExitCode;

    use livery::config::{AppConfig, LogLevel};
    use livery::preview::{blank_canvas, load_base, render_view_preview};
    use livery::{Catalog, Configurator};

    const USAGE: &str = "\
Usage: livery-native [OPTIONS]

Options:
  --config <FILE>      Configuration file (default: platform config dir)
  --catalog <FILE>     Catalog JSON (default: built-in scooter catalog)
  --selections <FILE>  Saved part -> color mapping to restore
  --assets <DIR>       Directory base artwork paths are relative to (default: .)
  --out <DIR>          Output folder for previews and the paint job
  --log-level <LEVEL>  error, warn, info, debug or trace
  --save-config        Write the effective configuration back to the config file
  -h, --help           Print this help";

    #[derive(Debug, Default)]
    struct Args {
        config: Option<PathBuf>,
        catalog: Option<PathBuf>,
        selections: Option<PathBuf>,
        assets: Option<PathBuf>,
        out: Option<PathBuf>,
        log_level: Option<LogLevel>,
        save_config: bool,
        help: bool,
    }

    impl Args {
        fn parse(mut raw: impl Iterator<Item = String>) -> Result<Self, String> {
            let mut args = Self::default();
            while let Some(flag) = raw.next() {
                if flag == "-h" || flag == "--help" {
                    args.help = true;
                    continue;
                }
                if flag == "--save-config" {
                    args.save_config = true;
                    continue;
                }
                let value = raw
                    .next()
                    .ok_or_else(|| format!("Missing value for {}", flag))?;
                match flag.as_str() {
                    "--config" => args.config = Some(value.into()),
                    "--catalog" => args.catalog = Some(value.into()),
                    "--selections" => args.selections = Some(value.into()),
                    "--assets" => args.assets = Some(value.into()),
                    "--out" => args.out = Some(value.into()),
                    "--log-level" => {
                        args.log_level = Some(
                            LogLevel::parse(&value)
                                .ok_or_else(|| format!("Unknown log level: {}", value))?,
                        );
                    }
                    _ => return Err(format!("Unknown argument: {}", flag)),
                }
            }
            Ok(args)
        }
    }

    pub fn main() -> ExitCode {
        let args = match Args::parse(std::env::args().skip(1)) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("{}\n\n{}", e, USAGE);
                return ExitCode::FAILURE;
            }
        };
        if args.help {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }

        match run(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                log::error!("{}", e);
                eprintln!("Application error: {}", e);
                ExitCode::FAILURE
            }
        }
    }

    fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
        let mut config = match &args.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::load_from_default_path().unwrap_or_default(),
        };

        let level = args.log_level.unwrap_or(config.preferences.log_level);
        env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .parse_default_env()
            .init();
        log::info!("Livery native driver starting (log level {})", level.name());

        if args.save_config {
            config.preferences.log_level = level;
            match &args.config {
                Some(path) => config.save(path)?,
                None => config.save_to_default_path()?,
            }
        }

        let catalog_path = args
            .catalog
            .clone()
            .or_else(|| config.catalog_path.as_ref().map(PathBuf::from));
        let catalog = match catalog_path {
            Some(path) => Catalog::load(&path)?,
            None => Catalog::builtin(),
        };
        let mut configurator =
            Configurator::from_catalog(catalog)?.with_style(config.preferences.overlay_style());

        if let Some(path) = &args.selections {
            let json = std::fs::read_to_string(path)?;
            let saved: BTreeMap<String, String> = serde_json::from_str(&json)?;
            configurator.restore_selections(saved);
        }

        let job = configurator.paint_job();
        println!("{}", job);

        let out_dir = args.out.clone().unwrap_or_else(|| {
            if config.preferences.output_folder.is_empty() {
                PathBuf::from(".")
            } else {
                PathBuf::from(&config.preferences.output_folder)
            }
        });
        std::fs::create_dir_all(&out_dir)?;
        std::fs::write(out_dir.join("paint-job.json"), job.to_json()?)?;

        let assets = args.assets.clone().unwrap_or_else(|| PathBuf::from("."));
        write_previews(&configurator, &assets, &out_dir)
    }

    fn write_previews(
        configurator: &Configurator,
        assets: &Path,
        out_dir: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut written = 0;
        for view in configurator.registry().views() {
            let base_path = assets.join(&view.base_image_ref);
            let base = if base_path.exists() {
                match load_base(&base_path) {
                    Ok(base) => base,
                    Err(e) => {
                        log::warn!("Failed to load artwork {:?}: {}", base_path, e);
                        continue;
                    }
                }
            } else {
                log::info!(
                    "No artwork for '{}' at {:?}, using a blank canvas",
                    view.id,
                    base_path
                );
                blank_canvas(view.reference_size)
            };

            let preview = render_view_preview(configurator, &view.id, &base)?;
            let target = out_dir.join(format!("{}-preview.png", view.id));
            preview.save(&target)?;
            log::info!("Saved preview for '{}' to {:?}", view.id, target);
            written += 1;
        }
        println!("Previews written: {}", written);
        Ok(())
    }

}
