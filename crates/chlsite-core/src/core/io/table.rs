use crate::core::models::site::{Prediction, SiteResult};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Separator used inside list-valued cells.
pub const LIST_SEPARATOR: &str = ";";

/// Column names, in output order.
pub const HEADER: [&str; 13] = [
    "cofactor",
    "residue_id",
    "chain",
    "donor_count",
    "acceptor_count",
    "balance",
    "prediction",
    "mean_donor_distance",
    "mean_acceptor_distance",
    "donor_atoms",
    "donor_residues",
    "acceptor_atoms",
    "acceptor_residues",
];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct SiteRow<'a> {
    cofactor: &'a str,
    residue_id: isize,
    chain: char,
    donor_count: usize,
    acceptor_count: usize,
    balance: i64,
    prediction: Prediction,
    mean_donor_distance: f64,
    mean_acceptor_distance: f64,
    donor_atoms: String,
    donor_residues: String,
    acceptor_atoms: String,
    acceptor_residues: String,
}

impl<'a> From<&'a SiteResult> for SiteRow<'a> {
    fn from(result: &'a SiteResult) -> Self {
        Self {
            cofactor: &result.cofactor_name,
            residue_id: result.residue_number,
            chain: result.chain_id,
            donor_count: result.donor_count,
            acceptor_count: result.acceptor_count,
            balance: result.balance,
            prediction: result.prediction,
            mean_donor_distance: result.mean_donor_distance,
            mean_acceptor_distance: result.mean_acceptor_distance,
            donor_atoms: result.donor_atom_names().join(LIST_SEPARATOR),
            donor_residues: result.donor_residue_names().join(LIST_SEPARATOR),
            acceptor_atoms: result.acceptor_atom_names().join(LIST_SEPARATOR),
            acceptor_residues: result.acceptor_residue_names().join(LIST_SEPARATOR),
        }
    }
}

/// Writes per-site results as a delimited text table, one row per site.
pub struct SiteTable;

impl SiteTable {
    /// Writes the results as CSV with a header row, preserving the slice order.
    ///
    /// The header is written even when `results` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] if serialization or the underlying writer fails.
    pub fn write_csv<W: Write>(results: &[SiteResult], writer: W) -> Result<(), TableError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(HEADER)?;
        for result in results {
            csv_writer.serialize(SiteRow::from(result))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Writes the results as CSV to a file, creating or truncating it.
    pub fn write_csv_to_path<P: AsRef<Path>>(
        results: &[SiteResult],
        path: P,
    ) -> Result<(), TableError> {
        let file = File::create(path)?;
        Self::write_csv(results, BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::site::ContactAtom;
    use tempfile::tempdir;

    fn contact(atom: &str, residue: &str, distance: f64) -> ContactAtom {
        ContactAtom {
            atom_name: atom.to_string(),
            residue_name: residue.to_string(),
            residue_number: 1,
            chain_id: 'A',
            distance,
        }
    }

    fn sample_results() -> Vec<SiteResult> {
        vec![
            SiteResult {
                cofactor_name: "CLA".into(),
                residue_number: 601,
                chain_id: 'A',
                donor_count: 2,
                acceptor_count: 1,
                balance: 1,
                prediction: Prediction::NotCofactor,
                mean_donor_distance: 2.5,
                mean_acceptor_distance: 3.0,
                donors: vec![contact("O", "HOH", 2.0), contact("NE2", "GLN", 3.0)],
                acceptors: vec![contact("OD1", "ASP", 3.0)],
            },
            SiteResult {
                cofactor_name: "CHL".into(),
                residue_number: 602,
                chain_id: 'B',
                donor_count: 0,
                acceptor_count: 0,
                balance: 0,
                prediction: Prediction::Ambiguous,
                mean_donor_distance: 0.0,
                mean_acceptor_distance: 0.0,
                donors: vec![],
                acceptors: vec![],
            },
        ]
    }

    #[test]
    fn write_csv_emits_header_and_one_row_per_site() {
        let mut buffer = Vec::new();
        SiteTable::write_csv(&sample_results(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "cofactor,residue_id,chain,donor_count,acceptor_count,balance,prediction,\
             mean_donor_distance,mean_acceptor_distance,donor_atoms,donor_residues,\
             acceptor_atoms,acceptor_residues"
        );
        assert_eq!(
            lines[1],
            "CLA,601,A,2,1,1,not-cofactor,2.5,3.0,O;NE2,HOH;GLN,OD1,ASP"
        );
        assert_eq!(lines[2], "CHL,602,B,0,0,0,ambiguous,0.0,0.0,,,,");
    }

    #[test]
    fn write_csv_writes_header_for_empty_table() {
        let mut buffer = Vec::new();
        SiteTable::write_csv(&[], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.trim_end(), HEADER.join(","));
    }

    #[test]
    fn write_csv_to_path_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sites.csv");
        SiteTable::write_csv_to_path(&sample_results(), &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "CLA");
        assert_eq!(&rows[1][6], "ambiguous");
    }

    #[test]
    fn write_csv_to_unwritable_path_fails_with_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("sites.csv");
        let result = SiteTable::write_csv_to_path(&sample_results(), &path);
        assert!(matches!(result, Err(TableError::Io(_))));
    }
}
