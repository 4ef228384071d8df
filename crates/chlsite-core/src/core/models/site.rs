use serde::Serialize;
use std::fmt;

/// Categorical verdict for one cofactor site, derived from the donor/acceptor balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Prediction {
    /// More donors than acceptors; the site disfavors the cofactor.
    NotCofactor,
    /// More acceptors than donors; the site favors the cofactor.
    Cofactor,
    /// Donors and acceptors are balanced.
    Ambiguous,
}

impl Prediction {
    /// Maps a donor-minus-acceptor balance to a verdict.
    pub fn from_balance(balance: i64) -> Self {
        match balance {
            b if b > 0 => Prediction::NotCofactor,
            b if b < 0 => Prediction::Cofactor,
            _ => Prediction::Ambiguous,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::NotCofactor => "not-cofactor",
            Prediction::Cofactor => "cofactor",
            Prediction::Ambiguous => "ambiguous",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A neighboring atom counted as donor or acceptor for a site.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactAtom {
    pub atom_name: String,
    pub residue_name: String,
    pub residue_number: isize,
    pub chain_id: char,
    /// Distance from the site's pivot atom, in Angstroms.
    pub distance: f64,
}

/// The classification outcome of one cofactor site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteResult {
    pub cofactor_name: String,
    pub residue_number: isize,
    pub chain_id: char,
    pub donor_count: usize,
    pub acceptor_count: usize,
    /// `donor_count - acceptor_count`.
    pub balance: i64,
    pub prediction: Prediction,
    /// Mean pivot distance of the donors, `0.0` when there are none.
    pub mean_donor_distance: f64,
    /// Mean pivot distance of the acceptors, `0.0` when there are none.
    pub mean_acceptor_distance: f64,
    pub donors: Vec<ContactAtom>,
    pub acceptors: Vec<ContactAtom>,
}

impl SiteResult {
    pub fn donor_atom_names(&self) -> Vec<&str> {
        self.donors.iter().map(|c| c.atom_name.as_str()).collect()
    }

    pub fn donor_residue_names(&self) -> Vec<&str> {
        self.donors.iter().map(|c| c.residue_name.as_str()).collect()
    }

    pub fn acceptor_atom_names(&self) -> Vec<&str> {
        self.acceptors.iter().map(|c| c.atom_name.as_str()).collect()
    }

    pub fn acceptor_residue_names(&self) -> Vec<&str> {
        self.acceptors
            .iter()
            .map(|c| c.residue_name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_follows_sign_of_balance() {
        assert_eq!(Prediction::from_balance(3), Prediction::NotCofactor);
        assert_eq!(Prediction::from_balance(1), Prediction::NotCofactor);
        assert_eq!(Prediction::from_balance(0), Prediction::Ambiguous);
        assert_eq!(Prediction::from_balance(-1), Prediction::Cofactor);
        assert_eq!(Prediction::from_balance(i64::MIN), Prediction::Cofactor);
    }

    #[test]
    fn prediction_labels_are_kebab_case() {
        assert_eq!(Prediction::NotCofactor.to_string(), "not-cofactor");
        assert_eq!(Prediction::Cofactor.to_string(), "cofactor");
        assert_eq!(Prediction::Ambiguous.as_str(), "ambiguous");
    }

    #[test]
    fn name_accessors_preserve_list_order() {
        let contact = |atom: &str, residue: &str| ContactAtom {
            atom_name: atom.to_string(),
            residue_name: residue.to_string(),
            residue_number: 1,
            chain_id: 'A',
            distance: 3.0,
        };
        let result = SiteResult {
            cofactor_name: "CLA".into(),
            residue_number: 601,
            chain_id: 'A',
            donor_count: 2,
            acceptor_count: 1,
            balance: 1,
            prediction: Prediction::NotCofactor,
            mean_donor_distance: 3.0,
            mean_acceptor_distance: 3.0,
            donors: vec![contact("O", "HOH"), contact("NE2", "GLN")],
            acceptors: vec![contact("OD1", "ASP")],
        };

        assert_eq!(result.donor_atom_names(), vec!["O", "NE2"]);
        assert_eq!(result.donor_residue_names(), vec!["HOH", "GLN"]);
        assert_eq!(result.acceptor_atom_names(), vec!["OD1"]);
        assert_eq!(result.acceptor_residue_names(), vec!["ASP"]);
    }
}
