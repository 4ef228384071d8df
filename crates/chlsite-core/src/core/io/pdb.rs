use crate::core::io::traits::MolecularFile;
use crate::core::models::atom::Atom;
use crate::core::models::ids::ResidueId;
use crate::core::models::residue::ResidueKind;
use crate::core::models::system::MolecularSystem;
use nalgebra::Point3;
use phf::{Set, phf_set};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

/// Element symbols accepted when inferring an element from an atom name.
static KNOWN_ELEMENTS: Set<&'static str> = phf_set! {
    "H", "D", "C", "N", "O", "S", "P", "F", "I", "K",
    "MG", "FE", "ZN", "CA", "MN", "CL", "NA", "CU", "CO", "NI", "SE", "BR", "CD", "HG",
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbMetadata {
    /// HEADER/TITLE/COMPND records, verbatim.
    pub header_lines: Vec<String>,
    /// Number of ATOM/HETATM records dropped as lower-occupancy alternate locations.
    pub discarded_alt_locs: usize,
    /// `true` if the file contained further models after the first one.
    pub truncated_models: bool,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: PdbParseErrorKind },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("")
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    slice(line, start, end).trim()
}

fn column_char(line: &str, index: usize) -> Option<char> {
    slice(line, index, index + 1)
        .chars()
        .next()
        .filter(|c| !c.is_whitespace())
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

/// Guesses the element from the raw four-character atom name field.
///
/// Names starting in column 13 with a letter (e.g. `"MG  "`) are two-letter
/// elements unless the remainder is a hydrogen-style digit suffix (`"HG21"`);
/// otherwise the first letter of the name is used.
fn infer_element(raw_name: &str) -> String {
    let name = raw_name.trim();
    let starts_with_letter = raw_name.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    let digit_suffix = {
        let rest = slice(raw_name, 2, raw_name.len()).trim();
        !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
    };

    let candidate = if starts_with_letter && !digit_suffix {
        name.chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .take(2)
            .collect::<String>()
    } else {
        name.chars()
            .find(|c| c.is_ascii_alphabetic())
            .map(String::from)
            .unwrap_or_default()
    };

    let candidate = candidate.to_ascii_uppercase();
    if KNOWN_ELEMENTS.contains(candidate.as_str()) {
        candidate
    } else {
        String::new()
    }
}

pub struct PdbFile;

impl PdbFile {
    fn parse_atom_record(
        system: &mut MolecularSystem,
        metadata: &mut PdbMetadata,
        line: &str,
        line_num: usize,
    ) -> Result<(), PdbError> {
        if line.len() < 54 {
            return Err(PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::LineTooShort,
            });
        }

        let record = slice(line, 0, 6);
        let serial_str = slice_and_trim(line, 6, 11);
        let raw_name = slice(line, 12, 16);
        let name = raw_name.trim();
        let alt_loc = column_char(line, 16);
        let res_name = slice_and_trim(line, 17, 20);
        let chain_char = slice(line, 21, 22).chars().next().unwrap_or(' ');
        let res_seq_str = slice_and_trim(line, 22, 26);
        let insertion_code = column_char(line, 26);

        if name.is_empty() {
            return Err(PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::MissingRequiredField {
                    columns: "13-16".into(),
                },
            });
        }
        let res_seq: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::InvalidInt {
                columns: "23-26".into(),
                value: res_seq_str.into(),
            },
        })?;
        // Serials overflow the five-column field in large structures; keep 0 then.
        let serial: usize = serial_str.parse().unwrap_or(0);

        let x = parse_float(line, line_num, 30, 38)?;
        let y = parse_float(line, line_num, 38, 46)?;
        let z = parse_float(line, line_num, 46, 54)?;
        let occupancy = if slice_and_trim(line, 54, 60).is_empty() {
            1.0
        } else {
            parse_float(line, line_num, 54, 60)?
        };

        let element_field = slice_and_trim(line, 76, 78);
        let element = if element_field.is_empty() {
            infer_element(raw_name)
        } else {
            element_field.to_ascii_uppercase()
        };

        let chain_id = system.add_chain(chain_char);
        let residue_id = system
            .add_residue(
                chain_id,
                res_seq,
                insertion_code,
                ResidueKind::from_record(record, res_name),
                res_name,
            )
            .ok_or_else(|| PdbError::MissingRecord(format!("chain '{}'", chain_char)))?;

        let mut atom = Atom::new(name, &element, residue_id, Point3::new(x, y, z));
        atom.serial = serial;
        atom.occupancy = occupancy;
        atom.alt_loc = alt_loc;

        Self::insert_atom(system, metadata, residue_id, atom);
        Ok(())
    }

    fn insert_atom(
        system: &mut MolecularSystem,
        metadata: &mut PdbMetadata,
        residue_id: ResidueId,
        atom: Atom,
    ) {
        let existing = system
            .residue(residue_id)
            .and_then(|residue| residue.atom_id(&atom.name));

        match existing {
            None => {
                system.add_atom_to_residue(residue_id, atom);
            }
            Some(existing_id) => {
                let kept_occupancy = system.atom(existing_id).map_or(0.0, |a| a.occupancy);
                trace!(
                    "Alternate location for atom '{}' (occupancy {} vs kept {}).",
                    atom.name, atom.occupancy, kept_occupancy
                );
                if atom.occupancy > kept_occupancy {
                    system.replace_atom(existing_id, atom);
                }
                metadata.discarded_alt_locs += 1;
            }
        }
    }
}

impl MolecularFile for PdbFile {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(MolecularSystem, Self::Metadata), Self::Error> {
        let mut system = MolecularSystem::new();
        let mut metadata = PdbMetadata::default();
        let mut atom_records = 0usize;

        let mut lines = reader.lines().enumerate();
        while let Some((line_num, line_res)) = lines.next() {
            let line = line_res?;
            let line_num = line_num + 1;

            match slice_and_trim(&line, 0, 6) {
                "ATOM" | "HETATM" => {
                    Self::parse_atom_record(&mut system, &mut metadata, &line, line_num)?;
                    atom_records += 1;
                }
                "HEADER" | "TITLE" | "COMPND" => metadata.header_lines.push(line.clone()),
                "ENDMDL" => {
                    for (_, rest) in lines.by_ref() {
                        if slice_and_trim(&rest?, 0, 6) == "MODEL" {
                            metadata.truncated_models = true;
                            break;
                        }
                    }
                    break;
                }
                "END" => break,
                _ => {}
            }
        }

        if atom_records == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        debug!(
            "Parsed {} atom records into {} atoms ({} alternate locations discarded).",
            atom_records,
            system.atom_count(),
            metadata.discarded_alt_locs
        );
        Ok((system, metadata))
    }
}
