//! Export submodules
//!
//! Each submodule exports one category of simulation output. The set is
//! closed: [`Submodule`] names every member, and [`Submodule::export`] maps a
//! member to its export function with a plain `match`. Every submodule
//! declares the option names it accepts in `PARAMETERS`; the dispatcher hands
//! it exactly that subset of the caller's options.

pub mod compdat;
pub mod equil;
pub mod faults;
pub mod fipreports;
pub mod grid;
pub mod nnc;
pub mod pillars;
pub mod pvt;
pub mod rft;
pub mod satfunc;
pub mod summary;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::context::ExportContext;
use crate::error::{Error, Result};
use crate::options::OptionSet;
use crate::share::ExportedTable;

/// Every known submodule, in canonical order
pub const SUBMODULES: [Submodule; 12] = [
    Submodule::Bulk,
    Submodule::Compdat,
    Submodule::Equil,
    Submodule::Faults,
    Submodule::Fipreports,
    Submodule::Grid,
    Submodule::Nnc,
    Submodule::Pillars,
    Submodule::Pvt,
    Submodule::Rft,
    Submodule::Satfunc,
    Submodule::Summary,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Submodule {
    /// The bulk exporter itself. Listed so config files may name it, never exported.
    Bulk,
    Compdat,
    Equil,
    Faults,
    Fipreports,
    Grid,
    Nnc,
    Pillars,
    Pvt,
    Rft,
    Satfunc,
    Summary,
}

impl Submodule {
    pub fn name(&self) -> &'static str {
        match self {
            Submodule::Bulk => "bulk",
            Submodule::Compdat => "compdat",
            Submodule::Equil => "equil",
            Submodule::Faults => "faults",
            Submodule::Fipreports => "fipreports",
            Submodule::Grid => "grid",
            Submodule::Nnc => "nnc",
            Submodule::Pillars => "pillars",
            Submodule::Pvt => "pvt",
            Submodule::Rft => "rft",
            Submodule::Satfunc => "satfunc",
            Submodule::Summary => "summary",
        }
    }

    /// Whether this submodule produces a table of its own
    pub fn is_exportable(&self) -> bool {
        !matches!(self, Submodule::Bulk)
    }

    /// Submodules that produce tables, in canonical order
    pub fn exportable() -> impl Iterator<Item = Submodule> {
        SUBMODULES.into_iter().filter(Submodule::is_exportable)
    }

    /// Option names accepted by this submodule's export function
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            Submodule::Bulk => &[],
            Submodule::Compdat => compdat::PARAMETERS,
            Submodule::Equil => equil::PARAMETERS,
            Submodule::Faults => faults::PARAMETERS,
            Submodule::Fipreports => fipreports::PARAMETERS,
            Submodule::Grid => grid::PARAMETERS,
            Submodule::Nnc => nnc::PARAMETERS,
            Submodule::Pillars => pillars::PARAMETERS,
            Submodule::Pvt => pvt::PARAMETERS,
            Submodule::Rft => rft::PARAMETERS,
            Submodule::Satfunc => satfunc::PARAMETERS,
            Submodule::Summary => summary::PARAMETERS,
        }
    }

    /// Metadata content type of the exported table
    pub fn content(&self) -> &'static str {
        match self {
            Submodule::Equil => "fluid_contact",
            Submodule::Faults => "fault_lines",
            Submodule::Fipreports => "volumes",
            Submodule::Pvt => "pvt",
            Submodule::Rft => "rft",
            Submodule::Satfunc => "relperm",
            Submodule::Summary => "timeseries",
            _ => "property",
        }
    }

    /// Build this submodule's typed options from the caller's full option set
    pub fn resolve_options(&self, options: &OptionSet) -> Result<SubmoduleOptions> {
        let filtered = options.filtered(self.parameters());
        let resolved = match self {
            Submodule::Bulk => return Err(Error::NotExportable { submodule: *self }),
            Submodule::Compdat => SubmoduleOptions::Compdat(compdat::CompdatOptions::from_options(&filtered)?),
            Submodule::Equil => SubmoduleOptions::Equil(equil::EquilOptions::from_options(&filtered)?),
            Submodule::Faults => SubmoduleOptions::Faults(faults::FaultsOptions),
            Submodule::Fipreports => {
                SubmoduleOptions::Fipreports(fipreports::FipreportsOptions::from_options(&filtered)?)
            }
            Submodule::Grid => SubmoduleOptions::Grid(grid::GridOptions::from_options(&filtered)?),
            Submodule::Nnc => SubmoduleOptions::Nnc(nnc::NncOptions::from_options(&filtered)?),
            Submodule::Pillars => SubmoduleOptions::Pillars(pillars::PillarsOptions::from_options(&filtered)?),
            Submodule::Pvt => SubmoduleOptions::Pvt(pvt::PvtOptions::from_options(&filtered)?),
            Submodule::Rft => SubmoduleOptions::Rft(rft::RftOptions::from_options(&filtered)?),
            Submodule::Satfunc => SubmoduleOptions::Satfunc(satfunc::SatfuncOptions::from_options(&filtered)?),
            Submodule::Summary => SubmoduleOptions::Summary(summary::SummaryOptions::from_options(&filtered)?),
        };
        Ok(resolved)
    }

    /// Run this submodule's export function against one datafile
    pub fn export(
        &self,
        ctx: &ExportContext<'_>,
        datafile: &Path,
        config_path: &Path,
        options: &OptionSet,
    ) -> Result<ExportedTable> {
        match self.resolve_options(options)? {
            SubmoduleOptions::Compdat(opts) => compdat::export_w_metadata(ctx, datafile, config_path, &opts),
            SubmoduleOptions::Equil(opts) => equil::export_w_metadata(ctx, datafile, config_path, &opts),
            SubmoduleOptions::Faults(opts) => faults::export_w_metadata(ctx, datafile, config_path, &opts),
            SubmoduleOptions::Fipreports(opts) => fipreports::export_w_metadata(ctx, datafile, config_path, &opts),
            SubmoduleOptions::Grid(opts) => grid::export_w_metadata(ctx, datafile, config_path, &opts),
            SubmoduleOptions::Nnc(opts) => nnc::export_w_metadata(ctx, datafile, config_path, &opts),
            SubmoduleOptions::Pillars(opts) => pillars::export_w_metadata(ctx, datafile, config_path, &opts),
            SubmoduleOptions::Pvt(opts) => pvt::export_w_metadata(ctx, datafile, config_path, &opts),
            SubmoduleOptions::Rft(opts) => rft::export_w_metadata(ctx, datafile, config_path, &opts),
            SubmoduleOptions::Satfunc(opts) => satfunc::export_w_metadata(ctx, datafile, config_path, &opts),
            SubmoduleOptions::Summary(opts) => summary::export_w_metadata(ctx, datafile, config_path, &opts),
        }
    }
}

impl fmt::Display for Submodule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Submodule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        SUBMODULES
            .into_iter()
            .find(|sub| sub.name() == wanted)
            .ok_or_else(|| Error::UnknownSubmodule {
                name: s.to_string(),
                expected: SUBMODULES.map(|sub| sub.name()).join(", "),
            })
    }
}

/// Parse a list of submodule names, failing on the first unknown one
pub fn parse_submodules<S: AsRef<str>>(names: &[S]) -> Result<Vec<Submodule>> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

/// Typed options of one export call
#[derive(Debug, Clone, PartialEq)]
pub enum SubmoduleOptions {
    Compdat(compdat::CompdatOptions),
    Equil(equil::EquilOptions),
    Faults(faults::FaultsOptions),
    Fipreports(fipreports::FipreportsOptions),
    Grid(grid::GridOptions),
    Nnc(nnc::NncOptions),
    Pillars(pillars::PillarsOptions),
    Pvt(pvt::PvtOptions),
    Rft(rft::RftOptions),
    Satfunc(satfunc::SatfuncOptions),
    Summary(summary::SummaryOptions),
}

impl SubmoduleOptions {
    pub fn submodule(&self) -> Submodule {
        match self {
            SubmoduleOptions::Compdat(_) => Submodule::Compdat,
            SubmoduleOptions::Equil(_) => Submodule::Equil,
            SubmoduleOptions::Faults(_) => Submodule::Faults,
            SubmoduleOptions::Fipreports(_) => Submodule::Fipreports,
            SubmoduleOptions::Grid(_) => Submodule::Grid,
            SubmoduleOptions::Nnc(_) => Submodule::Nnc,
            SubmoduleOptions::Pillars(_) => Submodule::Pillars,
            SubmoduleOptions::Pvt(_) => Submodule::Pvt,
            SubmoduleOptions::Rft(_) => Submodule::Rft,
            SubmoduleOptions::Satfunc(_) => Submodule::Satfunc,
            SubmoduleOptions::Summary(_) => Submodule::Summary,
        }
    }
}
