//! Binding between panel edits and renderer setters.
//!
//! A [`Binder`] owns the session's [`ConfigState`] and the renderer handle.
//! Front ends report edits through [`ControlEvents`]; the binder decodes each
//! edit, applies the field's [`UpdatePolicy`], updates the state and forwards
//! at most one [`RendererCall`].
//!
//! # Policies
//!
//! - **Immediate** fields dispatch on every change.
//! - **Deferred** fields hold intermediate values as pending and dispatch only
//!   on commit.
//!
//! # Usage
//!
//! ```ignore
//! let mut binder = Binder::bind(renderer, &snapshot)?;
//!
//! // Slider drag
//! binder.on_immediate_change(FieldId::GrayMin, FieldValue::Float(0.3))?;
//!
//! // Text box edited, then focus lost
//! binder.on_immediate_change(FieldId::RowCol, "2x".into())?;
//! binder.on_commit(FieldId::RowCol, "2x2".into())?;
//! ```

use log::{debug, info, warn};
use serde_json::Value;

use crate::config::PanelConfig;
use crate::decode::Setting;
use crate::error::PanelError;
use crate::renderer::{Renderer, RendererCall};
use crate::state::{ConfigState, ControlInfo, FieldId, FieldValue, UpdatePolicy, panel_controls};

/// What an edit resulted in.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// The call was forwarded to the renderer.
    Sent(RendererCall),
    /// Intermediate value of a deferred field; held until commit.
    Deferred,
    /// Accepted, but the selection is a "default"/"no" sentinel.
    NoOp,
    /// Commit of an immediate field whose value was already dispatched.
    Unchanged,
}

/// Edit notifications a UI front end delivers.
pub trait ControlEvents {
    /// A widget's value changed during interaction.
    fn on_immediate_change(
        &mut self,
        field: FieldId,
        value: FieldValue,
    ) -> Result<Dispatch, PanelError>;

    /// The user finished editing a widget.
    fn on_commit(&mut self, field: FieldId, value: FieldValue) -> Result<Dispatch, PanelError>;
}

/// Keeps one [`ConfigState`] in step with a renderer.
pub struct Binder<R: Renderer> {
    /// Current values (owned; there is no shared instance).
    state: ConfigState,

    /// Renderer receiving decoded edits.
    renderer: R,

    /// Widget descriptors, fixed at bind time.
    controls: Vec<ControlInfo>,

    /// Uncommitted values of deferred fields, indexed by `FieldId::slot`.
    pending: [Option<FieldValue>; FieldId::COUNT],
}

impl<R: Renderer> Binder<R> {
    /// Seed a state from the renderer snapshot and bind it.
    pub fn bind(renderer: R, snapshot: &Value) -> Result<Self, PanelError> {
        Ok(Self::new(ConfigState::seed(snapshot)?, renderer))
    }

    pub fn new(state: ConfigState, renderer: R) -> Self {
        Self::with_config(state, renderer, PanelConfig::default())
    }

    pub fn with_config(state: ConfigState, renderer: R, config: PanelConfig) -> Self {
        let max_steps = renderer.max_steps_number();
        info!(
            "Binding panel: steps {}..{}, slices 1..{}",
            config.min_steps, max_steps, config.max_slices
        );

        Self {
            state,
            renderer,
            controls: panel_controls(&config, max_steps),
            pending: Default::default(),
        }
    }

    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn controls(&self) -> &[ControlInfo] {
        &self.controls
    }

    pub fn control(&self, field: FieldId) -> &ControlInfo {
        &self.controls[field.slot()]
    }

    /// Uncommitted value of a deferred field, if any.
    pub fn pending(&self, field: FieldId) -> Option<&FieldValue> {
        self.pending[field.slot()].as_ref()
    }

    /// Value a front end should currently show for `field`.
    pub fn display(&self, field: FieldId) -> FieldValue {
        self.pending(field)
            .cloned()
            .unwrap_or_else(|| self.state.value(field))
    }

    /// Re-read the renderer snapshot without dispatching anything.
    pub fn reseed(&mut self, snapshot: &Value) -> Result<(), PanelError> {
        self.state.reseed(snapshot)?;
        self.pending = Default::default();
        info!("Panel reseeded from renderer snapshot");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edit handling
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_change(&mut self, field: FieldId, value: FieldValue) -> Result<Dispatch, PanelError> {
        let setting = Setting::decode(field, &value)?;
        self.note_range(field, &value);

        match field.policy() {
            UpdatePolicy::Immediate => Ok(self.commit(setting)),
            UpdatePolicy::Deferred => {
                let shown = setting.display();
                debug!("Holding {} = {} until commit", field, shown);
                self.pending[field.slot()] = Some(shown);
                Ok(Dispatch::Deferred)
            }
        }
    }

    fn handle_commit(&mut self, field: FieldId, value: FieldValue) -> Result<Dispatch, PanelError> {
        let setting = Setting::decode(field, &value)?;
        self.note_range(field, &value);
        self.pending[field.slot()] = None;

        if field.policy() == UpdatePolicy::Immediate && self.state.get(field) == setting {
            return Ok(Dispatch::Unchanged);
        }
        Ok(self.commit(setting))
    }

    /// Store a decoded value and forward it.
    fn commit(&mut self, setting: Setting) -> Dispatch {
        self.state.apply(setting);
        match setting.renderer_call() {
            Some(call) => {
                debug!("Dispatching {} as {:?}", setting.field(), call);
                call.apply(&mut self.renderer);
                Dispatch::Sent(call)
            }
            None => Dispatch::NoOp,
        }
    }

    fn note_range(&self, field: FieldId, value: &FieldValue) {
        if !self.control(field).in_range(value) {
            debug!("{} = {} is outside the advisory range", field, value);
        }
    }

    /// Contain an edit error to its field: drop the pending value so the
    /// display falls back to the stored one.
    fn contain(
        &mut self,
        field: FieldId,
        result: Result<Dispatch, PanelError>,
    ) -> Result<Dispatch, PanelError> {
        if let Err(err) = &result {
            warn!("Rejected edit of {}: {}", field, err);
            self.pending[field.slot()] = None;
        }
        result
    }
}

impl<R: Renderer> ControlEvents for Binder<R> {
    fn on_immediate_change(
        &mut self,
        field: FieldId,
        value: FieldValue,
    ) -> Result<Dispatch, PanelError> {
        let result = self.handle_change(field, value);
        self.contain(field, result)
    }

    fn on_commit(&mut self, field: FieldId, value: FieldValue) -> Result<Dispatch, PanelError> {
        let result = self.handle_commit(field, value);
        self.contain(field, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::RowCol;
    use crate::presets::{Colormap, Extent};
    use crate::testing::{Recorder, snapshot, snapshot_without};

    fn binder() -> Binder<Recorder> {
        Binder::bind(Recorder::new(1024), &snapshot()).unwrap()
    }

    #[test]
    fn test_bind_requires_complete_snapshot() {
        let result = Binder::bind(Recorder::new(1024), &snapshot_without("row_col"));
        assert!(matches!(
            result,
            Err(PanelError::MissingField { key: "row_col" })
        ));
    }

    #[test]
    fn test_bind_dispatches_nothing() {
        let binder = binder();
        assert!(binder.renderer().calls.is_empty());
    }

    #[test]
    fn test_immediate_field_dispatches_every_change() {
        let mut binder = binder();
        for v in [0.1, 0.2, 0.3, 0.4] {
            let dispatch = binder
                .on_immediate_change(FieldId::GrayMin, FieldValue::Float(v))
                .unwrap();
            assert_eq!(dispatch, Dispatch::Sent(RendererCall::SetGrayMinValue(v)));
        }
        assert_eq!(binder.renderer().calls.len(), 4);
        assert_eq!(binder.state().gray_min, 0.4);
    }

    #[test]
    fn test_deferred_field_dispatches_only_on_commit() {
        let mut binder = binder();
        for n in 100..110 {
            let dispatch = binder
                .on_immediate_change(FieldId::Steps, FieldValue::Int(n))
                .unwrap();
            assert_eq!(dispatch, Dispatch::Deferred);
        }
        assert!(binder.renderer().calls.is_empty());
        assert_eq!(binder.state().steps, 120);
        assert_eq!(binder.display(FieldId::Steps), FieldValue::Int(109));

        binder
            .on_commit(FieldId::Steps, FieldValue::Int(109))
            .unwrap();
        assert_eq!(binder.renderer().calls, [RendererCall::SetSteps(109)]);
        assert_eq!(binder.state().steps, 109);
        assert!(binder.pending(FieldId::Steps).is_none());
    }

    #[test]
    fn test_pending_values_are_shown_decoded() {
        let mut binder = binder();
        binder
            .on_immediate_change(FieldId::RenderSize, FieldValue::from("7"))
            .unwrap();
        binder
            .on_immediate_change(FieldId::Steps, FieldValue::Float(99.6))
            .unwrap();
        assert_eq!(binder.display(FieldId::RenderSize), FieldValue::Choice(7));
        assert_eq!(binder.display(FieldId::Steps), FieldValue::Int(100));
        assert!(binder.renderer().calls.is_empty());
    }

    #[test]
    fn test_select_accepts_numeric_index() {
        let mut binder = binder();
        binder
            .on_immediate_change(FieldId::AbsorptionMode, FieldValue::Float(2.0))
            .unwrap();
        binder.on_commit(FieldId::Colormap, FieldValue::Float(3.0)).unwrap();
        assert_eq!(
            binder.renderer().calls,
            [
                RendererCall::SetAbsorptionMode(2),
                RendererCall::SetTransferFunctionByColors(Colormap::Hot.stops().unwrap().to_vec()),
            ]
        );
    }

    #[test]
    fn test_number_slices_commit() {
        let mut binder = binder();
        binder
            .on_commit(FieldId::NumberSlices, FieldValue::Int(500))
            .unwrap();
        assert_eq!(
            binder.renderer().calls,
            [RendererCall::SetSlicesRange { start: 0, end: 500 }]
        );
        assert_eq!(binder.state().number_slices, 500);
    }

    #[test]
    fn test_sentinel_selections_issue_no_call() {
        let mut binder = binder();
        binder.on_commit(FieldId::RenderSize, FieldValue::Choice(2)).unwrap();
        binder.renderer_mut().calls.clear();

        let cases = [
            (FieldId::RenderSize, 8),
            (FieldId::RenderCanvasSize, 7),
            (FieldId::Colormap, 13),
            (FieldId::Thresholding, 4),
        ];
        for (field, index) in cases {
            assert_eq!(
                binder.on_commit(field, FieldValue::Choice(index)).unwrap(),
                Dispatch::NoOp
            );
            assert_eq!(binder.display(field), FieldValue::Choice(index));
        }
        assert!(binder.renderer().calls.is_empty());
    }

    #[test]
    fn test_render_size_commit_with_stringified_index() {
        let mut binder = binder();
        binder
            .on_commit(FieldId::RenderSize, FieldValue::from("7"))
            .unwrap();
        binder
            .on_commit(FieldId::RenderCanvasSize, FieldValue::from("0"))
            .unwrap();
        assert_eq!(
            binder.renderer().calls,
            [
                RendererCall::SetRenderSize {
                    width: Extent::Wildcard,
                    height: Extent::Wildcard
                },
                RendererCall::SetRenderCanvasSize {
                    width: Extent::Pixels(256),
                    height: Extent::Pixels(256)
                },
            ]
        );
    }

    #[test]
    fn test_colormap_commit_sends_stops() {
        let mut binder = binder();
        binder.on_commit(FieldId::Colormap, FieldValue::Choice(10)).unwrap();
        let stops = Colormap::Bone.stops().unwrap().to_vec();
        assert_eq!(
            binder.renderer().calls,
            [RendererCall::SetTransferFunctionByColors(stops)]
        );
        assert_eq!(binder.state().colormap, Colormap::Bone);
    }

    #[test]
    fn test_thresholding_commits() {
        let mut binder = binder();
        for i in 0..5 {
            binder
                .on_commit(FieldId::Thresholding, FieldValue::Choice(i))
                .unwrap();
        }
        let methods: Vec<_> = binder
            .renderer()
            .calls
            .iter()
            .map(|call| match call {
                RendererCall::ApplyThresholding(m) => m.as_str(),
                other => panic!("unexpected call {other:?}"),
            })
            .collect();
        assert_eq!(methods, ["otsu", "isodata", "yen", "li"]);
    }

    #[test]
    fn test_row_col_commit() {
        let mut binder = binder();
        binder
            .on_commit(FieldId::RowCol, FieldValue::from("4x7"))
            .unwrap();
        assert_eq!(
            binder.renderer().calls,
            [RendererCall::SetRowCol { rows: 4, cols: 7 }]
        );
        assert_eq!(binder.display(FieldId::RowCol), FieldValue::from("4x7"));
    }

    #[test]
    fn test_malformed_row_col_keeps_prior_value() {
        let mut binder = binder();
        for text in ["4-7", "4x", "ax3"] {
            let err = binder
                .on_commit(FieldId::RowCol, FieldValue::from(text))
                .unwrap_err();
            assert!(matches!(err, PanelError::MalformedCompositeValue { .. }));
            assert!(err.is_recoverable());
        }
        assert_eq!(binder.state().row_col, RowCol::new(4, 3));
        assert_eq!(binder.display(FieldId::RowCol), FieldValue::from("4x3"));
        assert!(binder.renderer().calls.is_empty());
    }

    #[test]
    fn test_rejected_intermediate_value_clears_pending() {
        let mut binder = binder();
        binder
            .on_immediate_change(FieldId::RowCol, FieldValue::from("2x2"))
            .unwrap();
        assert_eq!(binder.display(FieldId::RowCol), FieldValue::from("2x2"));

        assert!(binder
            .on_immediate_change(FieldId::RowCol, FieldValue::from("2x"))
            .is_err());
        assert_eq!(binder.display(FieldId::RowCol), FieldValue::from("4x3"));
    }

    #[test]
    fn test_error_in_one_field_does_not_block_others() {
        let mut binder = binder();
        assert!(binder
            .on_commit(FieldId::Colormap, FieldValue::Choice(99))
            .is_err());
        assert_eq!(binder.state().colormap, Colormap::Default);

        binder
            .on_immediate_change(FieldId::OpacityFactor, FieldValue::Float(10.0))
            .unwrap();
        binder
            .on_immediate_change(FieldId::AutoSteps, FieldValue::Bool(true))
            .unwrap();
        assert_eq!(
            binder.renderer().calls,
            [
                RendererCall::SetOpacityFactor(10.0),
                RendererCall::SetAutoStepsOn(true)
            ]
        );
    }

    #[test]
    fn test_commit_of_immediate_field() {
        let mut binder = binder();
        binder
            .on_immediate_change(FieldId::XMax, FieldValue::Float(0.7))
            .unwrap();
        assert_eq!(
            binder.on_commit(FieldId::XMax, FieldValue::Float(0.7)).unwrap(),
            Dispatch::Unchanged
        );
        assert_eq!(
            binder.on_commit(FieldId::XMax, FieldValue::Float(0.6)).unwrap(),
            Dispatch::Sent(RendererCall::SetGeometryMaxX(0.6))
        );
        assert_eq!(binder.renderer().calls.len(), 2);
    }

    #[test]
    fn test_out_of_range_values_are_forwarded() {
        let mut binder = binder();
        binder
            .on_immediate_change(FieldId::ColorFactor, FieldValue::Float(35.0))
            .unwrap();
        binder
            .on_immediate_change(FieldId::XMin, FieldValue::Float(0.9))
            .unwrap();
        binder
            .on_immediate_change(FieldId::XMax, FieldValue::Float(0.1))
            .unwrap();
        assert_eq!(binder.renderer().calls.len(), 3);
        assert_eq!(binder.state().color_factor, 35.0);
    }

    #[test]
    fn test_absorption_mode_is_immediate() {
        let mut binder = binder();
        binder
            .on_immediate_change(FieldId::AbsorptionMode, FieldValue::Choice(2))
            .unwrap();
        assert_eq!(
            binder.renderer().calls,
            [RendererCall::SetAbsorptionMode(2)]
        );
    }

    #[test]
    fn test_reseed_clears_pending_without_dispatch() {
        let mut binder = binder();
        binder
            .on_immediate_change(FieldId::Steps, FieldValue::Int(300))
            .unwrap();
        let mut value = snapshot();
        value["steps"] = serde_json::json!(200);
        binder.reseed(&value).unwrap();

        assert!(binder.pending(FieldId::Steps).is_none());
        assert_eq!(binder.display(FieldId::Steps), FieldValue::Int(200));
        assert!(binder.renderer().calls.is_empty());
    }

    #[test]
    fn test_controls_use_renderer_max_steps() {
        let binder = binder();
        assert_eq!(binder.controls().len(), FieldId::COUNT);
        assert!(binder.control(FieldId::Steps).in_range(&FieldValue::Int(1024)));
        assert!(!binder.control(FieldId::Steps).in_range(&FieldValue::Int(1025)));
    }
}
