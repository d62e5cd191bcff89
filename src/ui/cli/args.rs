use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, ValueHint};

use crate::classifiers::Algorithm;
use crate::core::AttributeKind;
use crate::metric::SvdmVariant;
use crate::output::SummaryFormat;
use crate::tasks::StatsMode;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Leave-one-out evaluation of the RIONA, RIA and k+NN classifiers"
)]
pub struct Cli {
    /// Input dataset in ARFF-like format (last attribute is the decision)
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Override attribute kinds: n/N numeric, c/C/s/S nominal, others ignored
    #[arg(long, value_name = "SPEC")]
    pub types: Option<String>,

    /// Algorithm to run: riona, ria, knn or all
    #[arg(long, default_value = "all", value_name = "ALGO")]
    pub algo: String,

    /// Distance statistics mode: g (global), l (local) or both
    #[arg(long, default_value = "g", value_name = "MODE")]
    pub mode: String,

    /// Nominal distance: svdm or svdmprime
    #[arg(long, default_value = "svdm", value_name = "VARIANT")]
    pub svdm: String,

    /// Comma list of k values; log/log2 resolves to floor(log2(objects))
    #[arg(long, default_value = "1,3,log2", value_name = "LIST")]
    pub k: String,

    /// Preliminary neighborhood size for k+NN (-1 = training-set size)
    #[arg(long, default_value_t = -1, value_name = "N", allow_hyphen_values = true)]
    pub n: i64,

    /// Token marking missing values
    #[arg(long, default_value = "?", value_name = "TOKEN")]
    pub missing: String,

    /// Output directory
    #[arg(long, default_value = ".", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub outdir: PathBuf,

    /// File to dump one summary record per experiment after completion
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dump_file: Option<PathBuf>,

    /// Format for the dump file (csv, tsv, json)
    #[arg(long, default_value = "csv", value_name = "FORMAT")]
    pub dump_format: String,
}

/// A `--k` entry before the dataset size is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KSpec {
    Fixed(usize),
    Log2,
}

/// The validated run configuration, independent of the dataset contents.
#[derive(Debug, Clone)]
pub struct ExperimentPlan {
    pub algorithms: Vec<Algorithm>,
    pub modes: Vec<StatsMode>,
    pub k_specs: Vec<KSpec>,
    pub svdm: SvdmVariant,
    pub n_for_kplus_nn: Option<usize>,
    pub kinds_override: Option<Vec<AttributeKind>>,
    pub dump: Option<(PathBuf, SummaryFormat)>,
}

impl Cli {
    pub fn plan(&self) -> Result<ExperimentPlan> {
        let algorithms = parse_algorithms(&self.algo)
            .with_context(|| format!("invalid algorithm '{}'", self.algo))?;
        let modes =
            parse_modes(&self.mode).with_context(|| format!("invalid mode '{}'", self.mode))?;
        let svdm = self
            .svdm
            .parse::<SvdmVariant>()
            .map_err(|_| anyhow!("invalid nominal distance '{}'", self.svdm))?;
        let k_specs = parse_k_list(&self.k)?;

        let dump = match &self.dump_file {
            Some(path) => {
                let format = self
                    .dump_format
                    .parse::<SummaryFormat>()
                    .map_err(|_| anyhow!("invalid dump format '{}'", self.dump_format))?;
                Some((path.clone(), format))
            }
            None => None,
        };

        Ok(ExperimentPlan {
            algorithms,
            modes,
            k_specs,
            svdm,
            n_for_kplus_nn: if self.n < 0 { None } else { Some(self.n as usize) },
            kinds_override: self.types.as_deref().map(parse_type_spec),
            dump,
        })
    }
}

fn parse_algorithms(raw: &str) -> Result<Vec<Algorithm>> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(vec![Algorithm::Riona, Algorithm::Ria, Algorithm::Knn]);
    }
    Ok(vec![
        raw.trim()
            .parse::<Algorithm>()
            .map_err(|_| anyhow!("expected riona, ria, knn or all"))?,
    ])
}

fn parse_modes(raw: &str) -> Result<Vec<StatsMode>> {
    if raw.trim().eq_ignore_ascii_case("both") {
        return Ok(vec![StatsMode::Global, StatsMode::Local]);
    }
    Ok(vec![
        raw.trim()
            .parse::<StatsMode>()
            .map_err(|_| anyhow!("expected g, l or both"))?,
    ])
}

/// Parses the `--k` comma list. Fixed entries are clamped up to 1; `log` /
/// `log2` stay symbolic until the dataset size is known.
pub fn parse_k_list(raw: &str) -> Result<Vec<KSpec>> {
    let mut specs = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if token.eq_ignore_ascii_case("log") || token.eq_ignore_ascii_case("log2") {
            specs.push(KSpec::Log2);
        } else {
            let value: usize = token
                .parse()
                .map_err(|_| anyhow!("invalid k value '{token}'"))?;
            specs.push(KSpec::Fixed(value.max(1)));
        }
    }
    if specs.is_empty() {
        bail!("--k list is empty");
    }
    Ok(specs)
}

/// Resolves symbolic entries against the object count, then sorts and
/// deduplicates.
pub fn resolve_k_values(specs: &[KSpec], objects: usize) -> Vec<usize> {
    let mut ks: Vec<usize> = specs
        .iter()
        .map(|spec| match spec {
            KSpec::Fixed(k) => *k,
            KSpec::Log2 => {
                let k = libm::log2(objects.max(1) as f64).floor();
                if k < 1.0 { 1 } else { k as usize }
            }
        })
        .collect();
    ks.sort_unstable();
    ks.dedup();
    ks
}

/// Parses a `--types` override: `n`/`N` numeric, `c`/`C`/`s`/`S` nominal,
/// anything else (commas included) ignored.
pub fn parse_type_spec(spec: &str) -> Vec<AttributeKind> {
    spec.chars()
        .filter_map(|ch| match ch {
            'n' | 'N' => Some(AttributeKind::Numeric),
            'c' | 'C' | 's' | 'S' => Some(AttributeKind::Nominal),
            _ => None,
        })
        .collect()
}
