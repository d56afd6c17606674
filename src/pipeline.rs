use crate::config::Config;
use crate::io::config_cache::ConfigCache;
use crate::optics::cameras::CameraTable;
use crate::optics::coc::{CocInputs, ResolvedCoc};
use crate::optics::types::{DistanceArgs, DofRequest};
use crate::output;
use crate::ui::prompt_camera_index;
use anyhow::{Result, anyhow};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// One invocation: cache load, optional listing and selection, CoC
/// resolution, cache save, computation.
pub struct Pipeline<'c> {
    config: &'c Config,
    table: CameraTable,
    cache: ConfigCache,
    cached: Option<f64>,
    selection: Option<i64>,
    coc: Option<ResolvedCoc>,
    request: Option<DofRequest>,
    factor: Option<f64>,
}

impl<'c> Pipeline<'c> {
    pub fn new(
        config: &'c Config,
        table: CameraTable,
        cache: ConfigCache,
    ) -> Self {
        Self {
            config,
            table,
            cache,
            cached: None,
            selection: None,
            coc: None,
            request: None,
            factor: None,
        }
    }

    pub fn load_cache(&mut self) {
        self.cached = self.cache.load();
    }

    /// Print the requested camera listing, if any.
    pub fn list_cameras<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<()> {
        let Some(listing) = &self.config.listing else {
            return Ok(());
        };
        let matches = self
            .table
            .list_matching(listing.maker.as_deref(), listing.model.as_deref());
        let mut shown = 0usize;
        for (index, camera) in matches {
            writeln!(out, "{}", output::format_listing_line(index, camera))?;
            shown += 1;
        }
        if shown == 0 {
            warn!("no cameras match the given filters");
        }
        out.flush()?;
        Ok(())
    }

    /// Prompt for a camera index when `-q` was given.
    pub fn select_camera<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        if self.config.query {
            self.selection = Some(prompt_camera_index(input, out)?);
            debug!(selection = ?self.selection, "camera selected");
        }
        Ok(())
    }

    pub fn resolve_coc(&mut self) -> Result<ResolvedCoc> {
        let inputs = CocInputs {
            selection: self.selection,
            explicit: self.config.explicit_coc,
            cached: self.cached,
        };
        let resolved = inputs.resolve(&self.table)?;
        self.coc = Some(resolved);
        Ok(resolved)
    }

    /// Remember the resolved CoC, changed or not.
    pub fn persist(&self) {
        if let Some(coc) = self.coc {
            self.cache.save(coc.value);
        }
    }

    /// A listing run without distances has nothing left to compute.
    pub fn wants_computation(&self) -> bool {
        self.config.listing.is_none() || !self.config.distances.is_empty()
    }

    pub fn compute(&mut self) -> Result<f64> {
        let coc = self
            .coc
            .ok_or_else(|| anyhow!("circle of confusion not resolved"))?;
        let args = DistanceArgs::parse(&self.config.distances, self.config.unit)?;
        let request = args.with_coc(coc.value);
        let factor = request.factor();
        self.request = Some(request);
        self.factor = Some(factor);
        Ok(factor)
    }

    pub fn write_result<W: Write>(
        &self,
        out: &mut W,
    ) -> Result<()> {
        if let (Some(request), Some(factor)) = (&self.request, self.factor) {
            writeln!(out, "{}", output::format_result(request, factor))?;
        }
        Ok(())
    }

    /// Run every step in order. Stops at the first fatal condition.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        self.load_cache();
        self.list_cameras(out)?;
        self.select_camera(input, out)?;
        self.resolve_coc()?;
        self.persist();
        if self.wants_computation() {
            self.compute()?;
            self.write_result(out)?;
        }
        Ok(())
    }

    pub fn coc(&self) -> Option<ResolvedCoc> {
        self.coc
    }

    pub fn request(&self) -> Option<&DofRequest> {
        self.request.as_ref()
    }

    pub fn factor(&self) -> Option<f64> {
        self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::error::DofError;
    use crate::optics::coc::CocSource;
    use clap::Parser;
    use std::io::Cursor;

    fn config(args: &[&str]) -> Config {
        Config::from_cli(Cli::parse_from(std::iter::once("dof").chain(args.iter().copied())))
    }

    fn run(
        cfg: &Config,
        cache: ConfigCache,
        stdin: &str,
    ) -> (Result<()>, String, Option<ResolvedCoc>, Option<f64>) {
        let mut p = Pipeline::new(cfg, CameraTable::builtin(), cache);
        let mut out = Vec::new();
        let res = p.run(&mut Cursor::new(stdin), &mut out);
        (res, String::from_utf8(out).unwrap(), p.coc(), p.factor())
    }

    #[test]
    fn computes_and_prints() {
        let cfg = config(&["-m", "55", "660", "710"]);
        let (res, out, coc, factor) = run(&cfg, ConfigCache::disabled(), "");
        res.unwrap();
        assert_eq!(coc.unwrap().source, CocSource::Default);
        assert!((factor.unwrap() - 8.49395).abs() < 1e-4);
        assert!(out.starts_with("[0.019](55 660 710) => 8.49"), "{out}");
    }

    #[test]
    fn selection_overrides_explicit_and_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dof");
        let cfg = config(&["--coc", "0.011", "--list-make", "Leica", "-q", "-m", "35", "2000"]);
        let (res, out, coc, _) = run(&cfg, ConfigCache::at(&path), "26\n");
        res.unwrap();
        assert!(out.contains("  26: \"Leica\" \"M9\" 0.03"), "{out}");
        assert!(out.contains("Enter camera ID: "));
        assert_eq!(coc.unwrap().value, 0.030);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "coc: 0.03");
    }

    #[test]
    fn bad_selection_aborts_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dof");
        let cfg = config(&["--list-all", "-q", "55", "660"]);
        let (res, out, coc, factor) = run(&cfg, ConfigCache::at(&path), "999\n");
        let err = res.unwrap_err();
        assert_eq!(
            err.downcast_ref::<DofError>(),
            Some(&DofError::InvalidCameraSelection { index: 999 })
        );
        assert!(coc.is_none() && factor.is_none());
        assert!(!out.contains("=>"));
        assert!(!path.exists());
    }

    #[test]
    fn listing_only_run_stops_after_listing() {
        let cfg = config(&["--list-model", "XS"]);
        let (res, out, coc, factor) = run(&cfg, ConfigCache::disabled(), "");
        res.unwrap();
        assert!(coc.is_some());
        assert!(factor.is_none());
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn missing_arguments_still_saves_resolved_coc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dof");
        let cfg = config(&["--coc", "0.025", "55"]);
        let (res, out, _, _) = run(&cfg, ConfigCache::at(&path), "");
        let err = res.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DofError>(),
            Some(DofError::MissingRequiredArguments(_))
        ));
        assert!(out.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "coc: 0.025");
    }
}
