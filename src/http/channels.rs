//! HTTP → control loop command bridge.
//!
//! Uses `embassy-sync` bounded channels to hand validated commands from the
//! httpd task to the synchronous control loop and carry the reply back.
//! The dispatcher is only ever touched by the loop that drains the bridge.
//!
//! ```text
//! ┌──────────────┐  CommandMsg  ┌──────────────┐
//! │  httpd task  │─────────────▶│ Control Loop │
//! │  (blocking)  │◀─────────────│    (sync)    │
//! └──────────────┘   ReplyMsg   └──────────────┘
//! ```

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use crate::app::commands::{AppCommand, CommandReply};
use crate::app::dispatcher::Dispatcher;
use crate::app::ports::{ActuatorPort, EventSink};
use crate::error::CommsError;

/// Inbound command, tagged so the reply can be matched.
#[derive(Debug)]
pub struct CommandMsg {
    pub seq: u32,
    pub command: AppCommand,
}

/// Dispatcher reply for the command with the same `seq`.
#[derive(Debug)]
pub struct ReplyMsg {
    pub seq: u32,
    pub reply: CommandReply,
}

/// Channel depth in each direction.
const DEPTH: usize = 4;

/// The process-wide bridge used by the HTTP server and the control loop.
pub static BRIDGE: CommandBridge = CommandBridge::new();

pub struct CommandBridge {
    commands: Channel<CriticalSectionRawMutex, CommandMsg, DEPTH>,
    replies: Channel<CriticalSectionRawMutex, ReplyMsg, DEPTH>,
    /// One request in flight at a time; the reply channel is shared.
    in_flight: Mutex<()>,
    next_seq: AtomicU32,
}

impl Default for CommandBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBridge {
    pub const fn new() -> Self {
        Self {
            commands: Channel::new(),
            replies: Channel::new(),
            in_flight: Mutex::new(()),
            next_seq: AtomicU32::new(0),
        }
    }

    /// Send a command to the control loop and block until it replies.
    ///
    /// Called from the HTTP side.  Blocks forever if nothing ever drains the
    /// bridge.
    pub fn submit(&self, command: AppCommand) -> Result<CommandReply, CommsError> {
        let _guard = self
            .in_flight
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);

        self.commands
            .try_send(CommandMsg { seq, command })
            .map_err(|_| CommsError::CommandQueueFull)?;

        loop {
            let msg = futures_lite::future::block_on(self.replies.receive());
            if msg.seq == seq {
                return Ok(msg.reply);
            }
            warn!("HTTP: dropping stale reply #{} (waiting for #{seq})", msg.seq);
        }
    }

    /// Dispatch every queued command.  Called from the control loop; never
    /// blocks.  Returns how many commands were handled.
    pub fn serve_pending(
        &self,
        dispatcher: &mut Dispatcher,
        now_ms: u64,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) -> usize {
        let mut served = 0;
        while let Ok(CommandMsg { seq, command }) = self.commands.try_receive() {
            let reply = dispatcher.handle_command(command, now_ms, hw, sink);
            if self.replies.try_send(ReplyMsg { seq, reply }).is_err() {
                warn!("HTTP: reply channel full, dropping reply #{seq}");
            }
            served += 1;
        }
        served
    }
}
