use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dof")]
#[command(
    version,
    about = "Aperture needed to keep everything between a near and a far distance sharp.",
    long_about = "Computes the f-number required for a depth of field from focal length (mm) \
                  and near/far distances. Without FAR the far limit is infinity (hyperfocal). \
                  Distances take an optional unit suffix: i(nches), f(eet), m(illimetres), \
                  c(entimetres), M(etres)."
)]
#[command(args_override_self = true)]
pub struct Cli {
    /// FOCAL NEAR [FAR]
    #[arg(num_args = 0..=3, value_name = "DISTANCE", allow_negative_numbers = true)]
    pub distances: Vec<String>,

    /// Near/far distances are in inches (default).
    #[arg(short = 'i', long = "inch", overrides_with_all = ["feet", "mm", "cm", "metres"])]
    pub inch: bool,

    /// Near/far distances are in feet.
    #[arg(short = 'f', long = "feet", overrides_with_all = ["inch", "mm", "cm", "metres"])]
    pub feet: bool,

    /// Near/far distances are in millimetres.
    #[arg(short = 'm', long = "mm", overrides_with_all = ["inch", "feet", "cm", "metres"])]
    pub mm: bool,

    /// Near/far distances are in centimetres.
    #[arg(short = 'c', long = "cm", overrides_with_all = ["inch", "feet", "mm", "metres"])]
    pub cm: bool,

    /// Near/far distances are in metres.
    #[arg(
        short = 'M',
        long = "m",
        alias = "metres",
        overrides_with_all = ["inch", "feet", "mm", "cm"]
    )]
    pub metres: bool,

    /// Circle of confusion in mm; remembered for later runs.
    #[arg(long = "coc", value_name = "MM")]
    pub coc: Option<f64>,

    /// After listing cameras, ask for one and use its circle of confusion.
    #[arg(short = 'q')]
    pub query: bool,

    /// List every camera in the built-in table.
    #[arg(long = "list-all")]
    pub list_all: bool,

    /// List cameras whose manufacturer contains TEXT.
    #[arg(long = "list-make", value_name = "TEXT")]
    pub list_make: Option<String>,

    /// List cameras whose model contains TEXT.
    #[arg(long = "list-model", value_name = "TEXT")]
    pub list_model: Option<String>,

    /// Cache file for the last circle of confusion (default: ~/.config/dof).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}
