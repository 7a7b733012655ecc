//! Operator class: the callbacks a host tree invokes, bundled with the
//! hierarchy they run against and the configuration they honor.

use crate::cell::Cell;
use crate::compute::{self, Consistency, Containment, NodeKind, Split, Strategy};
use crate::config::Config;
use crate::error::{GistError, Result};
use crate::hierarchy::{CellHierarchy, H3Hierarchy};

/// Index callbacks for one index.
///
/// Holds no per-call state, so one instance can serve concurrent callers.
///
/// ```rust
/// use h3_gist::{Cell, NodeKind, OpClass, Strategy};
///
/// let ops = OpClass::new(Default::default())?;
/// let parent: Cell = "85283083fffffff".parse()?;
/// let child: Cell = "8928308280fffff".parse()?;
///
/// let found = ops.consistent(parent, child, Strategy::Contains, NodeKind::Internal)?;
/// assert!(found.matches && found.recheck);
/// # Ok::<(), h3_gist::GistError>(())
/// ```
#[derive(Debug, Clone)]
pub struct OpClass<H = H3Hierarchy> {
    hierarchy: H,
    config: Config,
}

impl OpClass<H3Hierarchy> {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_hierarchy(H3Hierarchy::new(), config)
    }
}

impl<H: CellHierarchy> OpClass<H> {
    pub fn with_hierarchy(hierarchy: H, config: Config) -> Result<Self> {
        config.validate().map_err(GistError::Config)?;
        Ok(Self { hierarchy, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn hierarchy(&self) -> &H {
        &self.hierarchy
    }

    /// Keys may be the sentinel; everything else has to be a real cell.
    fn check_key(&self, key: Cell) -> Result<()> {
        if key.is_sentinel() {
            return Ok(());
        }
        self.check_cell(key)
    }

    fn check_cell(&self, cell: Cell) -> Result<()> {
        if self.config.strict {
            self.hierarchy.validate(cell)?;
        }
        Ok(())
    }

    pub fn finest_common_ancestor(&self, a: Cell, b: Cell) -> Result<Cell> {
        self.check_key(a)?;
        self.check_key(b)?;
        Ok(compute::finest_common_ancestor(&self.hierarchy, a, b))
    }

    pub fn compare(&self, a: Cell, b: Cell) -> Result<Containment> {
        self.check_key(a)?;
        self.check_key(b)?;
        Ok(compute::compare(&self.hierarchy, a, b))
    }

    /// Search predicate evaluated on every key during descent.
    pub fn consistent(
        &self,
        key: Cell,
        query: Cell,
        strategy: Strategy,
        node: NodeKind,
    ) -> Result<Consistency> {
        self.check_key(key)?;
        self.check_cell(query)?;
        compute::consistent(&self.hierarchy, key, query, strategy, node)
    }

    pub fn union(&self, keys: &[Cell]) -> Result<Cell> {
        for &key in keys {
            self.check_key(key)?;
        }
        compute::union(&self.hierarchy, keys)
    }

    pub fn penalty(&self, key: Cell, new: Cell) -> Result<f32> {
        self.check_key(key)?;
        self.check_cell(new)?;
        Ok(compute::penalty(&self.hierarchy, key, new))
    }

    pub fn pick_split(&self, keys: &[Cell]) -> Result<Split> {
        if keys.len() > self.config.max_split_entries {
            return Err(GistError::InvalidInput(format!(
                "Cannot split {} entries, limit is {}",
                keys.len(),
                self.config.max_split_entries
            )));
        }
        for &key in keys {
            self.check_key(key)?;
        }
        compute::pick_split(&self.hierarchy, keys)
    }

    pub fn same(&self, a: Cell, b: Cell) -> bool {
        a == b
    }

    /// Ordering value for nearest-first scans; `None` when `strategy` does
    /// not order.
    pub fn distance(&self, key: Cell, query: Cell, strategy: Strategy) -> Result<Option<f64>> {
        self.check_key(key)?;
        self.check_cell(query)?;
        compute::distance(&self.hierarchy, key, query, strategy)
    }
}
