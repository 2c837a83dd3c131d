use clap::Parser;
use color_eyre::Result;
use config::Source;

use crate::config::{get_config_dir, get_data_dir};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 60.0)]
    pub frame_rate: f64,

    /// Path to the data directory, where logs are written
    #[arg(short, long, value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Initial `value` attribute of the picker
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub value: Option<String>,

    /// `min` attribute of the picker (not enforced)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub min: Option<String>,

    /// `max` attribute of the picker (not enforced)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub max: Option<String>,

    /// `name` attribute of the picker
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Start with the picker disabled
    #[arg(long)]
    pub disabled: bool,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

const VERSION_MESSAGE: &str = concat!(env!("CARGO_PKG_VERSION"));

pub fn version() -> String {
    let author = clap::crate_authors!();

    let data_dir_path = get_data_dir().display().to_string();
    let config_dir_path = get_config_dir().display().to_string();

    format!(
        "\
{VERSION_MESSAGE}

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}

/// Command line arguments as a [`config::Source`], so they can override
/// every other layer of configuration.
#[derive(Clone, Debug, Default)]
pub(crate) struct ClapSource {
    data_dir: Option<String>,
    value: Option<String>,
    min: Option<String>,
    max: Option<String>,
    name: Option<String>,
    disabled: bool,
    no_mouse: bool,
}

impl ClapSource {
    pub fn new(cli: &Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            value: cli.value.clone(),
            min: cli.min.clone(),
            max: cli.max.clone(),
            name: cli.name.clone(),
            disabled: cli.disabled,
            no_mouse: cli.no_mouse,
        }
    }
}

impl Source for ClapSource {
    fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<config::Map<String, config::Value>, config::ConfigError> {
        let mut map = config::Map::new();
        let strings = [
            ("data_dir", &self.data_dir),
            ("picker.value", &self.value),
            ("picker.min", &self.min),
            ("picker.max", &self.max),
            ("picker.name", &self.name),
        ];
        for (key, value) in strings {
            if let Some(value) = value {
                map.insert(key.to_string(), config::Value::new(None, value.clone()));
            }
        }
        // flags only ever turn the default around
        if self.disabled {
            map.insert(
                "picker.disabled".to_string(),
                config::Value::new(None, true),
            );
        }
        if self.no_mouse {
            map.insert("mouse".to_string(), config::Value::new(None, false));
        }
        Ok(map)
    }
}
