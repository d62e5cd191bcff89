use strum_macros::{Display, EnumString};

/// Nominal-distance flavor: plain SVDM (per-pair range [0, 2]) or the
/// halved SVDM' (range [0, 1]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SvdmVariant {
    #[strum(to_string = "SVDM", serialize = "svdm")]
    Svdm,
    #[strum(
        to_string = "SVDMprime",
        serialize = "svdmprime",
        serialize = "svdm'",
        serialize = "svdmp"
    )]
    SvdmPrime,
}

/// Settings describing how distances are computed. The missing penalties
/// default to the top of the respective per-attribute scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceConfig {
    pub svdm_prime: bool,
    pub missing_nominal: f64,
    pub missing_numeric: f64,
}

impl DistanceConfig {
    pub fn for_variant(variant: SvdmVariant) -> DistanceConfig {
        match variant {
            SvdmVariant::Svdm => DistanceConfig {
                svdm_prime: false,
                missing_nominal: 2.0,
                missing_numeric: 1.0,
            },
            SvdmVariant::SvdmPrime => DistanceConfig {
                svdm_prime: true,
                missing_nominal: 1.0,
                missing_numeric: 1.0,
            },
        }
    }
}

impl Default for DistanceConfig {
    fn default() -> DistanceConfig {
        DistanceConfig::for_variant(SvdmVariant::Svdm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_spellings() {
        for raw in ["svdm", "SVDM"] {
            assert_eq!(raw.parse::<SvdmVariant>().unwrap(), SvdmVariant::Svdm);
        }
        for raw in ["svdmprime", "svdm'", "svdmp", "SVDMprime"] {
            assert_eq!(raw.parse::<SvdmVariant>().unwrap(), SvdmVariant::SvdmPrime);
        }
        assert!("svdm2".parse::<SvdmVariant>().is_err());
    }

    #[test]
    fn report_labels() {
        assert_eq!(SvdmVariant::Svdm.to_string(), "SVDM");
        assert_eq!(SvdmVariant::SvdmPrime.to_string(), "SVDMprime");
    }

    #[test]
    fn variant_fixes_missing_penalties() {
        let plain = DistanceConfig::for_variant(SvdmVariant::Svdm);
        assert!(!plain.svdm_prime);
        assert_eq!(plain.missing_nominal, 2.0);
        assert_eq!(plain.missing_numeric, 1.0);

        let prime = DistanceConfig::for_variant(SvdmVariant::SvdmPrime);
        assert!(prime.svdm_prime);
        assert_eq!(prime.missing_nominal, 1.0);
        assert_eq!(prime.missing_numeric, 1.0);
    }
}
