//! Python bindings for the tier engine
//!
//! The theme index is an explicit argument on every call. `init_themes`
//! only swaps the catalog those indexes refer to; when it was never called
//! the shipped catalog is used.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::{Difficulty, GameTypeConfig};
use crate::error::Result;
use crate::theme::{Theme, ThemeCatalog};
use crate::tier::Thresholds;

// ============================================================================
// Cached Theme Catalog
// ============================================================================

static CACHED_CATALOG: OnceCell<Arc<RwLock<ThemeCatalog>>> = OnceCell::new();

fn with_theme<T>(theme_index: usize, f: impl FnOnce(&Theme) -> Result<T>) -> PyResult<T> {
    let result = match CACHED_CATALOG.get() {
        Some(catalog) => {
            let catalog = catalog.read();
            f(catalog.theme(theme_index)?)
        }
        None => f(ThemeCatalog::shipped().theme(theme_index)?),
    };
    Ok(result?)
}

fn parse_difficulty(difficulty: Option<&str>) -> PyResult<Difficulty> {
    match difficulty {
        None => Ok(Difficulty::Normal),
        Some(s) => Difficulty::from_str(s)
            .ok_or_else(|| PyValueError::new_err(format!("Unknown difficulty: {}", s))),
    }
}

fn threshold_rows(thresholds: Thresholds) -> Vec<(String, String)> {
    thresholds
        .into_iter()
        .map(|t| {
            let description = t.description();
            (t.name, description)
        })
        .collect()
}

// ============================================================================
// Python Functions
// ============================================================================

/// Install a theme catalog from JSON (`{"themes": [{"name", "tiers"}]}`)
#[pyfunction]
fn init_themes(json: &str) -> PyResult<()> {
    let catalog = ThemeCatalog::from_json(json)?;

    if let Some(existing) = CACHED_CATALOG.get() {
        *existing.write() = catalog;
    } else {
        let _ = CACHED_CATALOG.set(Arc::new(RwLock::new(catalog)));
    }
    Ok(())
}

/// Display names of the available themes, in index order
#[pyfunction]
fn theme_names() -> Vec<String> {
    let names = |catalog: &ThemeCatalog| -> Vec<String> {
        catalog.themes().iter().map(|t| t.name().to_string()).collect()
    };
    match CACHED_CATALOG.get() {
        Some(catalog) => names(&*catalog.read()),
        None => names(ThemeCatalog::shipped()),
    }
}

#[pyfunction]
fn create_game_type(name: String, good_score: i32, bad_score: i32) -> PyResult<PyGameType> {
    PyGameType::new(name, good_score, bad_score)
}

#[pyfunction]
#[pyo3(signature = (game_type, total_score, player_count, theme_index, difficulty=None))]
fn tier_index(
    game_type: &PyGameType,
    total_score: i32,
    player_count: i32,
    theme_index: usize,
    difficulty: Option<&str>,
) -> PyResult<usize> {
    game_type.tier_index(total_score, player_count, theme_index, difficulty)
}

#[pyfunction]
#[pyo3(signature = (game_type, total_score, player_count, theme_index, difficulty=None))]
fn tier_name(
    game_type: &PyGameType,
    total_score: i32,
    player_count: i32,
    theme_index: usize,
    difficulty: Option<&str>,
) -> PyResult<String> {
    game_type.tier_name(total_score, player_count, theme_index, difficulty)
}

#[pyfunction]
#[pyo3(signature = (game_type, player_count, theme_index, difficulty=None))]
fn tier_thresholds(
    game_type: &PyGameType,
    player_count: i32,
    theme_index: usize,
    difficulty: Option<&str>,
) -> PyResult<Vec<(String, String)>> {
    game_type.tier_thresholds(player_count, theme_index, difficulty)
}

// ============================================================================
// GameType PyClass
// ============================================================================

/// Game type with its score calibration
#[pyclass(name = "GameType")]
#[derive(Clone)]
pub struct PyGameType {
    inner: GameTypeConfig,
}

#[pymethods]
impl PyGameType {
    #[new]
    fn new(name: String, good_score: i32, bad_score: i32) -> PyResult<Self> {
        Ok(Self {
            inner: GameTypeConfig::new(name, good_score, bad_score)?,
        })
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[getter]
    fn good_score(&self) -> i32 {
        self.inner.good_score()
    }

    #[getter]
    fn bad_score(&self) -> i32 {
        self.inner.bad_score()
    }

    fn edit(&mut self, name: String, good_score: i32, bad_score: i32) -> PyResult<()> {
        Ok(self.inner.edit(name, good_score, bad_score)?)
    }

    #[pyo3(signature = (total_score, player_count, theme_index, difficulty=None))]
    fn tier_index(
        &self,
        total_score: i32,
        player_count: i32,
        theme_index: usize,
        difficulty: Option<&str>,
    ) -> PyResult<usize> {
        let difficulty = parse_difficulty(difficulty)?;
        with_theme(theme_index, |theme| {
            self.inner.tier_index(total_score, player_count, difficulty, theme)
        })
    }

    #[pyo3(signature = (total_score, player_count, theme_index, difficulty=None))]
    fn tier_name(
        &self,
        total_score: i32,
        player_count: i32,
        theme_index: usize,
        difficulty: Option<&str>,
    ) -> PyResult<String> {
        let difficulty = parse_difficulty(difficulty)?;
        with_theme(theme_index, |theme| {
            self.inner
                .tier_name(total_score, player_count, difficulty, theme)
                .map(str::to_string)
        })
    }

    /// `(tier name, requirement)` pairs, worst tier first
    #[pyo3(signature = (player_count, theme_index, difficulty=None))]
    fn tier_thresholds(
        &self,
        player_count: i32,
        theme_index: usize,
        difficulty: Option<&str>,
    ) -> PyResult<Vec<(String, String)>> {
        let difficulty = parse_difficulty(difficulty)?;
        let thresholds = with_theme(theme_index, |theme| {
            self.inner.tier_thresholds(player_count, difficulty, theme)
        })?;
        Ok(threshold_rows(thresholds))
    }

    fn __repr__(&self) -> String {
        format!(
            "GameType(name={:?}, good_score={}, bad_score={})",
            self.inner.name(),
            self.inner.good_score(),
            self.inner.bad_score()
        )
    }
}

// ============================================================================
// Python Module Definition
// ============================================================================

#[pymodule]
fn tier_tally_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_themes, m)?)?;
    m.add_function(wrap_pyfunction!(theme_names, m)?)?;
    m.add_function(wrap_pyfunction!(create_game_type, m)?)?;
    m.add_function(wrap_pyfunction!(tier_index, m)?)?;
    m.add_function(wrap_pyfunction!(tier_name, m)?)?;
    m.add_function(wrap_pyfunction!(tier_thresholds, m)?)?;
    m.add_class::<PyGameType>()?;
    Ok(())
}
