//! JSON persistence for the steering weights.
//!
//! On disk the brain is one flat object, action name to weight:
//!
//! ```json
//! { "east": 1.32, "ne": 0.91, ... }
//! ```
//!
//! Loading is tolerant entry by entry: unknown keys and non-numeric values
//! are skipped so an old or hand-edited file never poisons the defaults.
//! Callers decide what a failed load/save means; here it is only reported.

use std::collections::{BTreeMap, HashMap};
use std::{fs, io, path::PathBuf};

use thiserror::Error;

use super::{ActionWeights, SteerAction};

/// Errors surfaced by load/save. Non-fatal by design; the caller
/// typically logs and falls back to defaults.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying I/O failure, propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// File exists but is not a JSON object.
    #[error("malformed weight file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File-backed weight store.
#[derive(Clone, Debug)]
pub struct BrainStore {
    path: PathBuf,
}

impl BrainStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Read weights from disk.
    ///
    /// `Ok(None)` when the file does not exist (first run); otherwise the
    /// defaults merged with every recognizable entry. Clamping happens in
    /// [`ActionWeights::set`], so out-of-range file values are pulled back
    /// into bounds.
    pub fn load(&self) -> Result<Option<ActionWeights>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let raw: HashMap<String, serde_json::Value> = serde_json::from_str(&text)?;

        let mut weights = ActionWeights::default();
        for (key, value) in &raw {
            if let (Some(action), Some(num)) = (SteerAction::from_name(key), value.as_f64()) {
                weights.set(action, num as f32);
            }
        }
        Ok(Some(weights))
    }

    /// Write the full mapping, pretty-printed with stable key order.
    pub fn save(&self, weights: &ActionWeights) -> Result<(), StoreError> {
        let map: BTreeMap<&'static str, f32> =
            weights.iter().map(|(a, w)| (a.name(), w)).collect();
        let text = serde_json::to_string_pretty(&map)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
