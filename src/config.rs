use crate::cli::Cli;
use crate::io::config_cache::ConfigCache;
use crate::optics::units::DistanceUnit;
use std::path::PathBuf;

/// Camera listing filters. Both `None` lists the whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub maker: Option<String>,
    pub model: Option<String>,
}

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub distances: Vec<String>,
    /// Unit for near/far when they carry no suffix.
    pub unit: DistanceUnit,
    pub explicit_coc: Option<f64>,
    pub query: bool,
    pub listing: Option<Listing>,
    pub config_path: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        // clap already cleared every unit flag but the last one given
        let unit = if cli.feet {
            DistanceUnit::Feet
        } else if cli.mm {
            DistanceUnit::Millimetres
        } else if cli.cm {
            DistanceUnit::Centimetres
        } else if cli.metres {
            DistanceUnit::Metres
        } else {
            DistanceUnit::Inches
        };

        let filtered = cli.list_make.is_some() || cli.list_model.is_some();
        let listing = (cli.list_all || filtered || cli.query).then(|| Listing {
            maker: cli.list_make,
            model: cli.list_model,
        });

        Config {
            distances: cli.distances,
            unit,
            explicit_coc: cli.coc,
            query: cli.query,
            listing,
            config_path: cli.config,
        }
    }

    pub fn cache(&self) -> ConfigCache {
        match &self.config_path {
            Some(path) => ConfigCache::at(path),
            None => ConfigCache::default_location(),
        }
    }
}
