//! Line-oriented input: one command per line
//!
//! Stands in for clicks on the rendered controls. Each line is parsed into an
//! [`Action`](crate::message::Action); blank lines are skipped.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::message::{Action, AppMsg};

/// Forward commands from `reader` until end of input, then send
/// [`AppMsg::InputClosed`]
pub fn spawn_line_reader<R>(reader: R, sender: mpsc::UnboundedSender<AppMsg>) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Ok(action) = line.parse::<Action>() else {
                        continue;
                    };
                    debug!(?action, "Command read");
                    if sender.send(AppMsg::User(action)).is_err() {
                        return;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read command: {}", e);
                    break;
                }
            }
        }
        let _ = sender.send(AppMsg::InputClosed);
    })
}
