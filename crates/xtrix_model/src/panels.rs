//! Percentage sizes for a group of resizable panels.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ResizableError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Per-panel size bounds for a resizable group.
pub struct PanelPolicy {
    /// Smallest size a panel can be dragged to, in percent.
    pub min_size: f64,
    /// Largest size a panel can be dragged to, in percent.
    pub max_size: f64,
    /// Size used when a panel registers without one.
    pub default_size: f64,
}

impl Default for PanelPolicy {
    fn default() -> Self {
        Self {
            min_size: 10.0,
            max_size: 100.0,
            default_size: 50.0,
        }
    }
}

impl PanelPolicy {
    /// Checks `0 <= min_size <= default_size <= max_size <= 100`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds_ok = self.min_size.is_finite()
            && self.max_size.is_finite()
            && self.min_size >= 0.0
            && self.min_size <= self.max_size
            && self.max_size <= 100.0;
        if !bounds_ok {
            return Err(ConfigError::InvalidPanelBounds {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if !self.contains(self.default_size) {
            return Err(ConfigError::InvalidDefaultPanelSize {
                size: self.default_size,
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }

    fn contains(&self, size: f64) -> bool {
        size.is_finite() && (self.min_size..=self.max_size).contains(&size)
    }

    fn clamp(&self, size: f64) -> f64 {
        size.clamp(self.min_size, self.max_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Sizes of the two panels on either side of a handle.
pub struct PanelPair {
    /// Panel before the handle (left or top).
    pub before: f64,
    /// Panel after the handle (right or bottom).
    pub after: f64,
}

impl PanelPair {
    /// Combined size; conserved by every resize.
    pub fn total(&self) -> f64 {
        self.before + self.after
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredAllocation")]
/// Registered panel sizes in mount order.
pub struct PanelAllocation {
    policy: PanelPolicy,
    panels: Vec<(String, f64)>,
}

/// Wire shape of a [`PanelAllocation`], checked before it becomes one.
#[derive(Deserialize)]
struct StoredAllocation {
    policy: PanelPolicy,
    panels: Vec<(String, f64)>,
}

impl TryFrom<StoredAllocation> for PanelAllocation {
    type Error = ConfigError;

    fn try_from(stored: StoredAllocation) -> Result<Self, Self::Error> {
        let mut allocation = Self::new(stored.policy)?;
        for (id, size) in stored.panels {
            if allocation.size(&id).is_some() {
                return Err(ConfigError::DuplicatePanel(id));
            }
            if !allocation.policy.contains(size) {
                return Err(ConfigError::PanelSizeOutOfBounds { id, size });
            }
            allocation.panels.push((id, size));
        }
        Ok(allocation)
    }
}

impl PanelAllocation {
    /// Builds an empty group after validating `policy`.
    pub fn new(policy: PanelPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self {
            policy,
            panels: Vec::new(),
        })
    }

    /// Bounds applied to every panel.
    pub fn policy(&self) -> PanelPolicy {
        self.policy
    }

    /// Size of a registered panel.
    pub fn size(&self, id: &str) -> Option<f64> {
        self.panels
            .iter()
            .find(|(panel_id, _)| panel_id == id)
            .map(|(_, size)| *size)
    }

    /// Registered panels in mount order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.panels.iter().map(|(id, size)| (id.as_str(), *size))
    }

    /// Number of registered panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether no panel has registered yet.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Registers a panel at its default size and returns the stored size.
    ///
    /// A panel that is already known keeps its current size, so remounting
    /// never undoes a drag.
    pub fn register(&mut self, id: &str, default_size: Option<f64>) -> f64 {
        if let Some(size) = self.size(id) {
            return size;
        }
        let requested = default_size
            .filter(|size| size.is_finite())
            .unwrap_or(self.policy.default_size);
        let size = self.policy.clamp(requested);
        self.panels.push((id.to_string(), size));
        size
    }

    /// Current sizes of the panels either side of a handle.
    pub fn pair(&self, before_id: &str, after_id: &str) -> Result<PanelPair, ResizableError> {
        if before_id == after_id {
            return Err(ResizableError::SamePanel(before_id.to_string()));
        }
        let before = self
            .size(before_id)
            .ok_or_else(|| ResizableError::UnknownPanel(before_id.to_string()))?;
        let after = self
            .size(after_id)
            .ok_or_else(|| ResizableError::UnknownPanel(after_id.to_string()))?;
        Ok(PanelPair { before, after })
    }

    /// Moves `delta_percent` of the pair's combined size from `after_id` to
    /// `before_id` (negative values move it the other way).
    ///
    /// # Errors
    ///
    /// Returns [`ResizableError`] when either id is unknown or both are the same.
    pub fn resize(
        &mut self,
        before_id: &str,
        after_id: &str,
        delta_percent: f64,
    ) -> Result<PanelPair, ResizableError> {
        let current = self.pair(before_id, after_id)?;
        self.resize_from(before_id, after_id, current, delta_percent)
    }

    /// Applies a resize relative to a pair captured at gesture start.
    pub fn resize_from(
        &mut self,
        before_id: &str,
        after_id: &str,
        snapshot: PanelPair,
        delta_percent: f64,
    ) -> Result<PanelPair, ResizableError> {
        self.pair(before_id, after_id)?;
        let next = allocate(&self.policy, snapshot, delta_percent);
        self.set(before_id, next.before);
        self.set(after_id, next.after);
        Ok(next)
    }

    fn set(&mut self, id: &str, size: f64) {
        if let Some(entry) = self.panels.iter_mut().find(|(panel_id, _)| panel_id == id) {
            entry.1 = size;
        }
    }
}

/// Splits `pair.total()` between the two panels after shifting `delta_percent`
/// of it towards `before`.
///
/// Both sides stay within the policy bounds. When a bound is reached the rest of
/// the shift is discarded; if the pair cannot satisfy both bounds at all it is
/// returned unchanged.
pub fn allocate(policy: &PanelPolicy, pair: PanelPair, delta_percent: f64) -> PanelPair {
    let total = pair.total();
    if !delta_percent.is_finite() {
        return pair;
    }
    // Feasible range for `before` such that both sides respect the bounds.
    let lo = policy.min_size.max(total - policy.max_size);
    let hi = policy.max_size.min(total - policy.min_size);
    if lo > hi {
        return pair;
    }
    let shift = delta_percent / 100.0 * total;
    let before = (pair.before + shift).clamp(lo, hi);
    PanelPair {
        before,
        after: total - before,
    }
}
