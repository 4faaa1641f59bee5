//! Copy-to-clipboard with a transient "Copied" acknowledgement.
//!
//! A successful copy acknowledges its identifier and schedules a clear
//! 1500 ms later under a fresh [`CopyToken`]. A newer copy replaces the
//! scheduled clear, so a stale one can never erase a newer acknowledgement.
//!
//! The UI asks for a copy with a [`CopyRequest`] message; the write itself
//! goes through the [`ClipboardSinkHandle`] resource.

use std::time::Duration;

use bevy::prelude::*;

use crate::constants::COPY_ACK_DURATION;
use crate::error::ClipboardError;

/// Write-only access to the system clipboard
pub trait ClipboardSink: Send + Sync + 'static {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard via arboard
pub struct SystemClipboardSink;

impl ClipboardSink for SystemClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(clipboard_error)?;
        clipboard.set_text(text).map_err(clipboard_error)
    }
}

fn clipboard_error(err: arboard::Error) -> ClipboardError {
    match err {
        arboard::Error::ClipboardOccupied => ClipboardError::Denied,
        other => ClipboardError::Unavailable(other.to_string()),
    }
}

/// Resource holding the clipboard the copy requests write to
#[derive(Resource)]
pub struct ClipboardSinkHandle(pub Box<dyn ClipboardSink>);

impl ClipboardSinkHandle {
    pub fn new(sink: impl ClipboardSink) -> Self {
        Self(Box::new(sink))
    }
}

impl Default for ClipboardSinkHandle {
    fn default() -> Self {
        Self::new(SystemClipboardSink)
    }
}

/// Request to copy an identifier and acknowledge it
#[derive(Message, Debug, Clone)]
pub struct CopyRequest {
    pub id: String,
}

/// Identity of one acknowledgement-setting copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyToken(u64);

#[derive(Debug)]
struct Acknowledged {
    id: String,
    token: CopyToken,
}

#[derive(Debug)]
struct ScheduledClear {
    token: CopyToken,
    due: Duration,
}

/// Resource tracking which identifier, if any, was just copied
#[derive(Resource, Default, Debug)]
pub struct CopyAcknowledgement {
    current: Option<Acknowledged>,
    pending_clear: Option<ScheduledClear>,
    next_token: u64,
}

impl CopyAcknowledgement {
    /// Copy `id` to the clipboard and acknowledge it.
    ///
    /// `now` is the elapsed wall-clock time the clear is scheduled from.
    /// On failure the acknowledgement is left untouched.
    pub fn copy(
        &mut self,
        sink: &mut dyn ClipboardSink,
        id: &str,
        now: Duration,
    ) -> Result<CopyToken, ClipboardError> {
        if let Err(e) = sink.write_text(id) {
            warn!("Copy failed: {}", e);
            return Err(e);
        }

        let token = CopyToken(self.next_token);
        self.next_token += 1;

        self.current = Some(Acknowledged {
            id: id.to_string(),
            token,
        });
        // Replaces (cancels) whatever clear was scheduled before
        self.pending_clear = Some(ScheduledClear {
            token,
            due: now + COPY_ACK_DURATION,
        });
        debug!("Copied {} to clipboard", id);
        Ok(token)
    }

    /// Run the scheduled clear if it is due.
    pub fn tick(&mut self, now: Duration) {
        let Some(token) = self
            .pending_clear
            .as_ref()
            .filter(|clear| now >= clear.due)
            .map(|clear| clear.token)
        else {
            return;
        };

        self.pending_clear = None;
        self.clear_if(token);
    }

    /// Clear the acknowledgement only if `token` still owns it.
    pub fn clear_if(&mut self, token: CopyToken) -> bool {
        if self.current.as_ref().is_some_and(|ack| ack.token == token) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The identifier currently acknowledged
    pub fn acknowledged(&self) -> Option<&str> {
        self.current.as_ref().map(|ack| ack.id.as_str())
    }

    pub fn is_acknowledged(&self, id: &str) -> bool {
        self.acknowledged() == Some(id)
    }
}

/// System to perform requested copies; failures are logged by `copy`
fn handle_copy_requests(
    mut requests: MessageReader<CopyRequest>,
    mut ack: ResMut<CopyAcknowledgement>,
    mut sink: ResMut<ClipboardSinkHandle>,
    time: Res<Time<Real>>,
) {
    for request in requests.read() {
        let _ = ack.copy(sink.0.as_mut(), &request.id, time.elapsed());
    }
}

/// System to expire the acknowledgement against wall-clock time
fn expire_copy_acknowledgement(mut ack: ResMut<CopyAcknowledgement>, time: Res<Time<Real>>) {
    ack.tick(time.elapsed());
}

/// Plugin for copy requests and their acknowledgements
pub struct ClipboardPlugin;

impl Plugin for ClipboardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CopyAcknowledgement>()
            .init_resource::<ClipboardSinkHandle>()
            .add_message::<CopyRequest>()
            .add_systems(
                Update,
                (
                    handle_copy_requests.run_if(on_message::<CopyRequest>),
                    expire_copy_acknowledgement,
                )
                    .chain(),
            );
    }
}
