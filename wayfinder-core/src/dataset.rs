//! Edge lists: the built-in campus floor plan and a text loader for
//! replacement plans.
//!
//! The text format holds one edge per line as `SOURCE TARGET WEIGHT`
//! separated by whitespace. Blank lines and lines starting with `#` are
//! skipped. Weights must be finite and non-negative.

use std::io::BufRead;

use tracing::{debug, instrument};

use crate::{error::EdgeListError, graph::Edge};

/// Walkways of the campus, grouped by building and floor. Weights are
/// walking costs.
const CAMPUS_EDGES: &[(&str, &str, f64)] = &[
    // Building 1, ground floor
    ("Cafeteria", "LectureHall2", 5.0),
    ("LectureHall2", "LectureHall1", 5.0),
    ("LectureHall1", "AssistantsOffice", 3.0),
    ("AssistantsOffice", "LectureHall3", 6.0),
    ("LectureHall3", "PaymentOffice", 4.0),
    ("PaymentOffice", "Stairs_B1_GF", 2.0),
    ("Cafeteria", "Stairs_B2_GF", 2.0),
    // Building 2
    ("Stairs_B2_GF", "B2_GF", 1.0),
    ("B2_GF", "B2_F1", 10.0),
    ("B2_F1", "B2_F2", 10.0),
    ("B2_F2", "Auditorium", 2.0),
    ("B2_F2", "StudyArea", 5.0),
    // Building 1, first floor
    ("Stairs_B1_GF", "LectureHall4", 10.0),
    ("LectureHall4", "LectureHall5", 2.0),
    ("LectureHall5", "LectureHall6", 2.0),
    // Building 1, second floor
    ("LectureHall4", "BusinessOffice", 10.0),
    ("BusinessOffice", "LectureHallA", 2.0),
    ("BusinessOffice", "LectureHallB", 2.0),
    ("LectureHallA", "StudyArea", 3.0),
    ("LectureHallB", "StudyArea", 3.0),
    ("BusinessOffice", "LectureHall7_10", 6.0),
    ("LectureHall7_10", "OutsideArea", 4.0),
    ("OutsideArea", "B2_F2", 8.0),
    ("StudyArea", "B2_F2", 5.0),
    // Building 1, third floor
    ("BusinessOffice", "Library", 15.0),
    ("Library", "EngineeringSection", 5.0),
    // Building 1, fourth floor
    ("Library", "ComputingOffice", 15.0),
    ("ComputingOffice", "ComputingLab", 3.0),
    ("ComputingLab", "TeachersOffices", 3.0),
    ("ComputingOffice", "HarrisonHall", 4.0),
    ("HarrisonHall", "NetEngLab", 4.0),
    ("NetEngLab", "Lab01", 3.0),
];

/// Ordered list of edges used to populate a graph.
///
/// # Examples
/// ```
/// use wayfinder_core::EdgeList;
///
/// let input = "# floor plan\nHall Lab 2.5\n\nLab Office 1\n";
/// let edges = EdgeList::from_reader(input.as_bytes()).expect("valid edge list");
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges.iter().next().map(|edge| edge.weight()), Some(2.5));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Creates an empty edge list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the built-in campus floor plan.
    #[must_use]
    pub fn campus() -> Self {
        CAMPUS_EDGES
            .iter()
            .map(|&(source, target, weight)| Edge::new(source, target, weight))
            .collect()
    }

    /// Parses an edge list from line-oriented text.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Io`] when reading fails,
    /// [`EdgeListError::MalformedLine`] when a line does not have exactly
    /// three fields, and [`EdgeListError::InvalidWeight`] when a weight is
    /// not a finite, non-negative number.
    #[instrument(level = "debug", name = "edges.from_reader", skip(reader), err)]
    pub fn from_reader(reader: impl BufRead) -> Result<Self, EdgeListError> {
        let mut edges = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| EdgeListError::Io { source })?;
            if let Some(edge) = parse_line(index.saturating_add(1), &line)? {
                edges.push(edge);
            }
        }
        debug!(edges = edges.len(), "edge list parsed");
        Ok(edges)
    }

    /// Appends an edge.
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the list holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the edges in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }
}

impl FromIterator<Edge> for EdgeList {
    fn from_iter<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        Self {
            edges: edges.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn parse_line(line: usize, raw: &str) -> Result<Option<Edge>, EdgeListError> {
    let content = raw.trim();
    if content.is_empty() || content.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = content.split_whitespace().collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(EdgeListError::MalformedLine {
            line,
            content: content.to_owned(),
        });
    };

    let weight = weight
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| EdgeListError::InvalidWeight {
            line,
            raw: (*weight).to_owned(),
        })?;
    Ok(Some(Edge::new(*source, *target, weight)))
}
