//! Reader for the XYZ coordinate format: an atom-count line, a comment
//! line, then one `<element> <x> <y> <z>` record per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::warn;
use nalgebra::Vector3;

use crate::io::error::Error;
use crate::model::atom::{AtomCoordinate, Element, Molecule};

/// Reads a molecule from an XYZ file on disk.
pub fn read_file(path: impl AsRef<Path>) -> Result<Molecule, Error> {
    let file = File::open(path.as_ref())?;
    read(BufReader::new(file))
}

/// Reads a molecule from any buffered source.
///
/// Both header lines are ignored for control flow; if the first one carries
/// a parseable atom count that disagrees with the records actually read, a
/// warning is logged. Malformed coordinate fields abort the read with a
/// line-numbered error rather than dropping the atom. Lines whose element
/// symbol is not recognized are counted in [`Molecule::skipped`].
pub fn read<R: BufRead>(reader: R) -> Result<Molecule, Error> {
    let mut lines = reader.lines().enumerate();

    let declared_count = match lines.next() {
        Some((_, line)) => line
            .map_err(|e| Error::Io { source: e })?
            .trim()
            .parse::<usize>()
            .ok(),
        None => return Err(Error::parse(1, "missing atom-count header line")),
    };
    match lines.next() {
        Some((_, line)) => {
            line.map_err(|e| Error::Io { source: e })?;
        }
        None => return Err(Error::parse(2, "missing comment header line")),
    }

    let mut molecule = Molecule::default();
    let mut data_lines = 0usize;

    for (i, line) in lines {
        let content = line.map_err(|e| Error::Io { source: e })?;
        let ln = i + 1;
        if content.trim().is_empty() {
            continue;
        }
        data_lines += 1;

        let tokens: Vec<_> = content.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(Error::parse(
                ln,
                format!("atom line must contain element and three coordinates: '{content}'"),
            ));
        }

        let x = parse_coord(tokens[1], "x", ln)?;
        let y = parse_coord(tokens[2], "y", ln)?;
        let z = parse_coord(tokens[3], "z", ln)?;

        match Element::from_str(tokens[0]) {
            Ok(element) => {
                let atom = AtomCoordinate::new(element, Vector3::new(x, y, z));
                match element {
                    Element::C => molecule.carbons.push(atom),
                    Element::H => molecule.hydrogens.push(atom),
                }
            }
            Err(_) => molecule.skipped += 1,
        }
    }

    if let Some(declared) = declared_count {
        if declared != data_lines {
            warn!(
                "XYZ header declares {declared} atoms but {data_lines} data lines were read"
            );
        }
    }

    Ok(molecule)
}

fn parse_coord(token: &str, axis: &str, line: usize) -> Result<f32, Error> {
    token
        .parse::<f32>()
        .map_err(|_| Error::parse(line, format!("invalid {axis} coordinate '{token}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CYCLOHEXANE_FRAGMENT: &str = "\
6
cyclohexane fragment
C  1.4670  0.0000  0.2500
C  0.7335  1.2705 -0.2500
H  1.4670  0.0000  1.3400
H  2.4958  0.0000 -0.1101
O  0.0000  0.0000  0.0000
C -0.7335  1.2705  0.2500
";

    #[test]
    fn partitions_by_element() {
        let molecule = read(CYCLOHEXANE_FRAGMENT.as_bytes()).unwrap();
        assert_eq!(molecule.carbons.len(), 3);
        assert_eq!(molecule.hydrogens.len(), 2);
        assert_eq!(molecule.skipped, 1);
    }

    #[test]
    fn partition_counts_cover_all_data_lines() {
        let molecule = read(CYCLOHEXANE_FRAGMENT.as_bytes()).unwrap();
        let data_lines = CYCLOHEXANE_FRAGMENT.lines().count() - 2;
        assert_eq!(
            molecule.carbons.len() + molecule.hydrogens.len() + molecule.skipped,
            data_lines
        );
    }

    #[test]
    fn carbon_line_parses_into_carbon_list_only() {
        let input = "1\ncomment\nC 1.5 -0.2 0.0\n";
        let molecule = read(input.as_bytes()).unwrap();
        assert_eq!(molecule.carbons.len(), 1);
        assert!(molecule.hydrogens.is_empty());
        let atom = &molecule.carbons[0];
        assert_eq!(atom.element, Element::C);
        assert_eq!(atom.position, Vector3::new(1.5, -0.2, 0.0));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let input = "2\ncomment\nC 0.0 0.0 0.0\n\nH 1.0 0.0 0.0\n";
        let molecule = read(input.as_bytes()).unwrap();
        assert_eq!(molecule.atom_count(), 2);
        assert_eq!(molecule.skipped, 0);
    }

    #[test]
    fn malformed_coordinate_aborts_with_line_number() {
        let input = "2\ncomment\nC 0.0 0.0 0.0\nH 1.0 oops 0.0\n";
        let err = read(input.as_bytes()).unwrap_err();
        match err {
            Error::Parse { line, details } => {
                assert_eq!(line, 4);
                assert!(details.contains("invalid y coordinate"), "{details}");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn short_atom_line_is_an_error() {
        let input = "1\ncomment\nC 0.0 0.0\n";
        let err = read(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn missing_headers_are_an_error() {
        assert!(matches!(
            read("".as_bytes()).unwrap_err(),
            Error::Parse { line: 1, .. }
        ));
        assert!(matches!(
            read("18\n".as_bytes()).unwrap_err(),
            Error::Parse { line: 2, .. }
        ));
    }

    #[test]
    fn read_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CYCLOHEXANE_FRAGMENT.as_bytes()).unwrap();
        let molecule = read_file(file.path()).unwrap();
        assert_eq!(molecule.carbons.len(), 3);
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let err = read_file("/nonexistent/cyclohexane.xyz").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
