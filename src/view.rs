//! The view-state machine. Two states: overview (nothing selected) and
//! detail (one series selected, auxiliary overlay on or off). Every
//! transition settles the state and the draw order first, then yields a
//! fresh [`RenderInstruction`]; nothing is ever emitted from
//! partially-updated state.

use crate::collection::Collection;
use crate::error::Error;
use crate::models::{ChartConfig, Dimension};
use crate::render::{self, RenderInstruction};
use crate::scale::ScaleSet;

/// What the user is currently looking at. Selection is by name; the
/// series itself stays owned by the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub active_dimension: Dimension,
    pub selected: Option<String>,
    pub auxiliary_visible: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_dimension: Dimension::Amount,
            selected: None,
            auxiliary_visible: false,
        }
    }
}

impl ViewState {
    pub fn is_detail(&self) -> bool {
        self.selected.is_some()
    }
}

/// Single-threaded, event-driven driver: receives one input event at a
/// time, completes the transition and recomputation, and returns the
/// render instruction for the settled state.
#[derive(Debug, Clone)]
pub struct Explorer {
    collection: Collection,
    config: ChartConfig,
    view: ViewState,
    scales: ScaleSet,
}

impl Explorer {
    /// Overview scales are built once here; the member set is immutable,
    /// so the combined extents never change afterwards.
    pub fn new(collection: Collection, config: ChartConfig) -> Self {
        let scales = ScaleSet::new(collection.extents(), &config);
        let mut explorer = Self {
            collection,
            config,
            view: ViewState::default(),
            scales,
        };
        explorer
            .collection
            .sort_by_dimension(explorer.view.active_dimension);
        explorer
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Instruction for the current state, without a transition.
    pub fn current(&self) -> Result<RenderInstruction, Error> {
        render::build(&self.collection, &self.view, &self.scales, &self.config)
    }

    /// Valid in both states. In detail view the new dimension applies to
    /// the same selected series; the selection is kept.
    pub fn select_dimension(&mut self, dimension: Dimension) -> Result<RenderInstruction, Error> {
        log::debug!("select dimension {dimension}");
        self.view.active_dimension = dimension;
        self.settle()
    }

    /// Overview → detail. Re-entrant: selecting another series while in
    /// detail replaces it without touching the dimension or the
    /// auxiliary flag. An unknown name is a contract violation and
    /// leaves the state untouched.
    pub fn select_series(&mut self, name: &str) -> Result<RenderInstruction, Error> {
        if !self.collection.contains(name) {
            return Err(Error::UnknownSeries(name.to_string()));
        }
        log::debug!("select series {name:?}");
        self.view.selected = Some(name.to_string());
        self.settle()
    }

    /// Detail → overview; clears the selection and the overlay with it.
    pub fn deselect(&mut self) -> Result<RenderInstruction, Error> {
        log::debug!("deselect");
        self.view.selected = None;
        self.view.auxiliary_visible = false;
        self.settle()
    }

    /// Flips the temperature overlay in detail view. In overview this is
    /// a contractual no-op: nothing observable changes, but the current
    /// instruction is still re-emitted.
    pub fn toggle_auxiliary(&mut self) -> Result<RenderInstruction, Error> {
        if self.view.is_detail() {
            self.view.auxiliary_visible = !self.view.auxiliary_visible;
            log::debug!("auxiliary visible: {}", self.view.auxiliary_visible);
        }
        self.settle()
    }

    /// Re-sort for the active dimension, then assemble the instruction.
    /// The sort must run before assembly so the emitted draw order
    /// reflects the new state.
    fn settle(&mut self) -> Result<RenderInstruction, Error> {
        self.collection.sort_by_dimension(self.view.active_dimension);
        render::build(&self.collection, &self.view, &self.scales, &self.config)
    }
}
