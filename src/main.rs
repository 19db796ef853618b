//! Command-script host for zonedraw.
//!
//! Usage: `zonedraw [--config PATH] [--image PATH] [SCRIPT]`
//!
//! SCRIPT (or stdin when absent) is a JSON array of commands, e.g.
//! `[{"command":"add_point","x":0,"y":0,"surface_width":100,"surface_height":100}]`.
//! The commands are replayed in order, validation notices go to stderr and
//! the encoded output of both modes goes to stdout.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::io::Read;
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use thiserror::Error;
    use zonedraw::{Annotator, AppConfig, Command, ConfigError, FormatError, Mode};

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("Failed to read {path:?}: {source}")]
        Io {
            path: PathBuf,
            source: std::io::Error,
        },

        #[error("Invalid command script: {0}")]
        Script(#[from] serde_json::Error),

        #[error("Failed to read image size: {0}")]
        Image(#[from] image::ImageError),

        #[error(transparent)]
        Config(#[from] ConfigError),

        #[error(transparent)]
        Format(#[from] FormatError),
    }

    #[derive(Parser, Debug)]
    #[command(name = "zonedraw", about = "Replay zone and counting-line commands")]
    struct Cli {
        /// Config file (defaults to the per-user config path)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Image whose pixel size sets the output dimensions
        #[arg(long)]
        image: Option<PathBuf>,

        /// JSON command script (read from stdin when omitted)
        script: Option<PathBuf>,
    }

    fn load_config(path: Option<&Path>) -> Result<AppConfig, CliError> {
        match path {
            Some(path) => Ok(AppConfig::load_from(path)?),
            None => Ok(AppConfig::load_from_default_path().unwrap_or_default()),
        }
    }

    fn read_script(path: Option<&Path>) -> Result<Vec<Command>, CliError> {
        let json = match path {
            Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?,
            None => {
                let mut json = String::new();
                std::io::stdin()
                    .read_to_string(&mut json)
                    .map_err(|source| CliError::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                json
            }
        };
        Ok(serde_json::from_str(&json)?)
    }

    pub fn run() -> Result<(), CliError> {
        let args = Cli::parse();
        let config = load_config(args.config.as_deref())?;

        env_logger::Builder::from_env(
            env_logger::Env::default()
                .default_filter_or(config.preferences.log_level.to_level_filter().as_str()),
        )
        .init();

        let mut annotator = Annotator::from_config(&config);

        if let Some(image) = &args.image {
            let (width, height) = image::image_dimensions(image)?;
            log::info!("Image {:?} is {}x{}", image, width, height);
            annotator.submit(Command::LoadImage { width, height });
        }

        let commands = read_script(args.script.as_deref())?;
        log::debug!("Replaying {} commands", commands.len());
        for command in commands {
            annotator.submit(command);
        }

        for processed in annotator.process() {
            if let Err(e) = processed.result {
                if let Some(message) = e.notice() {
                    eprintln!("{}", message);
                }
            }
        }

        let formats = annotator.formats();
        for mode in [Mode::Roi, Mode::People] {
            println!("# {} ({})", mode.name(), formats.id_for(mode));
            println!("{}", annotator.output_for(mode)?);
        }
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("zonedraw: {}", e);
        std::process::exit(1);
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
