//! State synchronizer task
//!
//! Owns the synchronizer together with the widget set and the icon loader,
//! applies link events one at a time and answers every push.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use stratus_core::config::WatchfaceConfig;
use stratus_core::sync::{FieldKey, StateSynchronizer};
use stratus_display::{DisplayBackend, WeatherScreen};
use stratus_protocol::{Frame, OutboundMessage};

use crate::channels::{LinkEvent, LINK_REPLIES, SYNC_EVENTS};
use crate::display::{TraceBackend, TraceIconLoader};

/// Retry interval for content the display was not ready for
const REDRAW_INTERVAL_MS: u64 = 500;

type Synchronizer = StateSynchronizer<WeatherScreen<TraceBackend>, TraceIconLoader>;

/// Sync task - applies pushes and transport failures
#[embassy_executor::task]
pub async fn sync_task(config: WatchfaceConfig) {
    info!("Sync task started");

    let screen = WeatherScreen::new(TraceBackend::new());
    let mut sync: Synchronizer =
        match StateSynchronizer::new(&config, screen, TraceIconLoader::new()) {
            Ok(sync) => sync,
            Err(e) => {
                error!("Failed to start synchronizer: {:?}", e);
                return;
            }
        };
    info!("Initial state published");

    let mut redraw = Ticker::every(Duration::from_millis(REDRAW_INTERVAL_MS));
    let mut render_errors = 0;

    loop {
        match select(SYNC_EVENTS.receive(), redraw.next()).await {
            Either::First(event) => handle_event(&mut sync, event).await,
            Either::Second(()) => retry_display(&mut sync),
        }

        let errors = sync.adapter().render_errors();
        if errors != render_errors {
            warn!(
                "Display errors: {} (last {:?})",
                errors,
                sync.adapter().last_error()
            );
            render_errors = errors;
        }
    }
}

async fn handle_event(sync: &mut Synchronizer, event: LinkEvent) {
    match event {
        LinkEvent::Push(frame) => {
            let reply = apply_push(sync, &frame);
            LINK_REPLIES.send(reply).await;
        }
        LinkEvent::Failure { code } => {
            error!("Sync transport failure: code = {}", code);
            if let Err(e) = sync.apply_transport_error(code) {
                warn!("Error icon unavailable: {:?}", e);
            }
        }
    }
}

/// Apply a push as one update and pick the reply
fn apply_push(sync: &mut Synchronizer, frame: &Frame) -> OutboundMessage {
    let txn = frame.txn;
    let outcome = sync.apply_payload(&frame.payload);
    debug!(
        "Push {}: {} applied, {} ignored, {} rejected",
        txn, outcome.applied, outcome.ignored, outcome.rejected
    );

    match outcome.decode_error {
        None => OutboundMessage::Ack { txn },
        Some(e) => {
            error!("Push {} failed to decode: {:?}", txn, e);
            OutboundMessage::Nack { txn }
        }
    }
}

/// Draw what the display missed while it was not ready
fn retry_display(sync: &mut Synchronizer) {
    sync.adapter_mut().redraw();
    let screen = sync.adapter();
    if screen.icon_pending() && screen.backend().is_ready() {
        debug!("Resending icon");
        sync.republish(FieldKey::Icon);
    }
}
