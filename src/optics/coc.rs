//! Effective circle-of-confusion resolution.
//!
//! Producers are tried in a fixed order and the first one that yields a value
//! wins: camera selection, explicit `--coc`, cached value, default.

use super::cameras::CameraTable;
use crate::constants::DEFAULT_COC;
use crate::error::DofError;
use tracing::debug;

/// Where the resolved CoC came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CocSource {
    CameraSelection,
    Explicit,
    Cached,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedCoc {
    pub value: f64,
    pub source: CocSource,
}

/// Inputs gathered for one run. Any of them may be absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct CocInputs {
    /// Table index typed at the selection prompt.
    pub selection: Option<i64>,
    pub explicit: Option<f64>,
    pub cached: Option<f64>,
}

pub fn is_valid_coc(coc: f64) -> bool {
    coc.is_finite() && coc > 0.0
}

impl CocInputs {
    pub fn resolve(
        &self,
        table: &CameraTable,
    ) -> Result<ResolvedCoc, DofError> {
        let selected = match self.selection {
            Some(index) => {
                let coc = table.coc_at(index);
                if coc < 0.0 {
                    return Err(DofError::InvalidCameraSelection { index });
                }
                Some(coc)
            }
            None => None,
        };
        // A stale or corrupt cache entry is just absent.
        let cached = self.cached.filter(|&c| is_valid_coc(c));

        let chain = [
            (CocSource::CameraSelection, selected),
            (CocSource::Explicit, self.explicit),
            (CocSource::Cached, cached),
            (CocSource::Default, Some(DEFAULT_COC)),
        ];
        let (source, value) = chain
            .into_iter()
            .find_map(|(source, value)| value.map(|v| (source, v)))
            .unwrap_or((CocSource::Default, DEFAULT_COC));

        if !is_valid_coc(value) {
            return Err(DofError::InvalidCoc(value));
        }
        debug!(coc = value, ?source, "resolved circle of confusion");
        Ok(ResolvedCoc { value, source })
    }
}
