use crate::error::ClientError;
use crate::resource::Resource;

/// Transient working copy of a resource held while composing a
/// create/edit operation.
///
/// A draft is always a deep copy of the item it was opened from, never a
/// live reference, so in-place field edits cannot leak into the
/// collection store before a submit succeeds.
pub trait Draft<T: Resource>: Clone + Default + Send + Sync + 'static {
    /// Typed input-change event: which field changed, with the raw value
    /// as the UI delivered it.
    type Field;

    /// Deep-copy the fields of an existing item into a fresh draft.
    fn from_item(item: &T) -> Self;

    /// Apply one field change. Must not touch any other field.
    fn apply(&mut self, field: Self::Field);

    /// Check the draft is fit to be sent to the remote source.
    fn validate(&self) -> Result<(), ClientError>;
}

/// Observable phase of an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Idle,
    Composing,
    Submitting,
}

enum State<T: Resource, D> {
    Idle,
    Composing {
        draft: D,
        target: Option<T::Id>,
        error: Option<ClientError>,
    },
    Submitting {
        draft: D,
        target: Option<T::Id>,
    },
}

/// The add/edit modal lifecycle for one resource type.
///
/// `Idle -> Composing -> Submitting -> Idle` on success, or back to
/// `Composing` with the error attached and the draft intact on failure.
/// At most one session is ever composing or submitting; opening while
/// composing replaces the draft (last-open-wins, matching a
/// single-modal-per-resource UI).
///
/// The session never touches a collection store itself; the split
/// [`begin_submit`](EditSession::begin_submit) /
/// [`resolve_ok`](EditSession::resolve_ok) /
/// [`resolve_err`](EditSession::resolve_err) transitions let the
/// controller run the network call between them.
pub struct EditSession<T: Resource, D: Draft<T>> {
    state: State<T, D>,
}

impl<T: Resource, D: Draft<T>> Default for EditSession<T, D> {
    fn default() -> Self {
        Self { state: State::Idle }
    }
}

impl<T: Resource, D: Draft<T>> EditSession<T, D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditPhase {
        match self.state {
            State::Idle => EditPhase::Idle,
            State::Composing { .. } => EditPhase::Composing,
            State::Submitting { .. } => EditPhase::Submitting,
        }
    }

    /// Open the modal with an empty draft and no identity attached.
    /// Ignored while a submit is in flight.
    pub fn open_for_create(&mut self) {
        if matches!(self.state, State::Submitting { .. }) {
            return;
        }
        self.state = State::Composing {
            draft: D::default(),
            target: None,
            error: None,
        };
    }

    /// Open the modal over a deep copy of `item`, carrying its identity.
    /// Ignored while a submit is in flight.
    pub fn open_for_edit(&mut self, item: &T) {
        if matches!(self.state, State::Submitting { .. }) {
            return;
        }
        self.state = State::Composing {
            draft: D::from_item(item),
            target: Some(item.id()),
            error: None,
        };
    }

    /// Apply one field change to the draft. Only meaningful while
    /// composing; a change arriving in any other phase is dropped.
    pub fn update_field(&mut self, field: D::Field) {
        if let State::Composing { draft, .. } = &mut self.state {
            draft.apply(field);
        }
    }

    /// Discard the draft and close the modal.
    pub fn cancel(&mut self) {
        if matches!(self.state, State::Composing { .. }) {
            self.state = State::Idle;
        }
    }

    /// Validate the draft and move to `Submitting`, handing back the
    /// payload for the remote call. On a validation failure the session
    /// stays in `Composing` with the error attached and no call is made.
    pub fn begin_submit(&mut self) -> Result<(D, Option<T::Id>), ClientError> {
        let State::Composing {
            draft,
            target,
            error,
        } = &mut self.state
        else {
            // Caller-state misuse, not a malformed draft; the
            // controller guards its phase before calling in.
            debug_assert!(false, "begin_submit called outside a composing session");
            return Err(ClientError::validation("no edit session open"));
        };
        if let Err(e) = draft.validate() {
            *error = Some(e.clone());
            return Err(e);
        }
        let (draft, target) = (draft.clone(), *target);
        self.state = State::Submitting {
            draft: draft.clone(),
            target,
        };
        Ok((draft, target))
    }

    /// The remote call succeeded: close the modal and discard the draft.
    pub fn resolve_ok(&mut self) {
        if matches!(self.state, State::Submitting { .. }) {
            self.state = State::Idle;
        }
    }

    /// The remote call failed: reopen the modal with the draft intact
    /// and the error recorded for display.
    pub fn resolve_err(&mut self, err: ClientError) {
        if let State::Submitting { draft, target } =
            std::mem::replace(&mut self.state, State::Idle)
        {
            self.state = State::Composing {
                draft,
                target,
                error: Some(err),
            };
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match &self.state {
            State::Composing { draft, .. } | State::Submitting { draft, .. } => Some(draft),
            State::Idle => None,
        }
    }

    /// Identity of the record being edited, if this session was opened
    /// with [`open_for_edit`](EditSession::open_for_edit).
    pub fn target(&self) -> Option<T::Id> {
        match &self.state {
            State::Composing { target, .. } | State::Submitting { target, .. } => *target,
            State::Idle => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match &self.state {
            State::Composing { error, .. } => error.as_ref(),
            _ => None,
        }
    }
}
