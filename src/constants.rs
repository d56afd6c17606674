// Centralized magic numbers & default values
pub const DEFAULT_COC: f64 = 0.019;
/// Returned by table lookups for an index outside the table.
pub const INVALID_SELECTION: f64 = -1.0;
pub const CONFIG_DIR: &str = ".config";
pub const CONFIG_FILE: &str = "dof";
pub const CONFIG_KEY: &str = "coc";
pub const SELECTION_PROMPT: &str = "Enter camera ID: ";
