// patterns.rs - Builtin pattern catalog and the JSON pattern store
//
// Coordinates are (row, col) pairs relative to the pattern's top-left corner.
// Placement and bounds checking happen in `Simulation::load_cells`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::PatternError;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Cells as signed coordinates, ready to be offset.
    pub fn coords(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.cells.iter().map(|&(r, c)| (r as i64, c as i64))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "LWSS",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 0), (2, 3), (3, 1), (3, 2)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom section (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|p| p.name)
}

pub fn find_builtin(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Directory of saved patterns, one JSON file per pattern.
///
/// A file holds only a list of `[row, col]` pairs, e.g. `[[0,1],[1,2]]`.
#[derive(Debug, Clone)]
pub struct PatternStore {
    dir: PathBuf,
}

impl PatternStore {
    /// Opens the store, creating its directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PatternError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn save(&self, cells: &[(usize, usize)], filename: &str) -> Result<PathBuf, PatternError> {
        let path = self.path_for(filename)?;
        let json = serde_json::to_string(cells)?;
        fs::write(&path, json)?;
        info!(path = %path.display(), cells = cells.len(), "saved pattern");
        Ok(path)
    }

    /// Reads a saved pattern. A missing file yields an empty pattern.
    pub fn load(&self, filename: &str) -> Result<Vec<(i64, i64)>, PatternError> {
        let path = self.path_for(filename)?;
        if !path.exists() {
            debug!(path = %path.display(), "pattern file not found");
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&path)?;
        let cells: Vec<(i64, i64)> = serde_json::from_str(&text)?;
        info!(path = %path.display(), cells = cells.len(), "loaded pattern file");
        Ok(cells)
    }

    /// Names of the saved `*.json` files, sorted.
    pub fn list(&self) -> Result<Vec<String>, PatternError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    // Only the final path component is used, so names cannot leave the store.
    fn path_for(&self, filename: &str) -> Result<PathBuf, PatternError> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| PatternError::InvalidName(PathBuf::from(filename)))?;
        Ok(self.dir.join(name))
    }
}
