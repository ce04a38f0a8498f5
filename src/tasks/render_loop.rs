//! Background render task

use tracing::{debug, error, info};

use crate::state::TimersState;
use crate::store::ComponentScope;
use crate::ui::{Header, TimerCard};

/// Build one frame of output from the header and a state snapshot
pub fn render_frame(header: &Header, snapshot: &TimersState) -> String {
    let mut lines = header.render();

    if snapshot.timers.is_empty() {
        lines.push("(no timers yet)".to_string());
    } else {
        for timer in &snapshot.timers {
            lines.extend(TimerCard::new(timer).render());
        }
    }

    lines.join("\n")
}

/// Background task that reprints the UI on every published snapshot
///
/// Subscribes to the store's snapshot channel; a burst of dispatches collapses
/// into one pass over the newest value, so the screen always shows the latest
/// state rather than every intermediate one.
pub async fn render_loop_task(scope: ComponentScope) {
    info!("Starting render task");

    let header = match Header::new(&scope) {
        Ok(header) => header,
        Err(e) => {
            error!("Render task cannot start: {}", e);
            return;
        }
    };
    let ctx = match scope.timers_context() {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Render task cannot start: {}", e);
            return;
        }
    };

    let mut snapshot_rx = ctx.subscribe();

    // First pass up front; the loop below only wakes on changes.
    println!("\n{}", render_frame(&header, &snapshot_rx.borrow_and_update().clone()));

    loop {
        if snapshot_rx.changed().await.is_err() {
            debug!("Snapshot channel closed, stopping render task");
            break;
        }

        let snapshot = snapshot_rx.borrow_and_update().clone();
        debug!(
            "Render pass: is_running={}, timers={}",
            snapshot.is_running,
            snapshot.timer_count()
        );

        println!("\n{}", render_frame(&header, &snapshot));
    }
}
