//! Companion link transmit task
//!
//! Sends the startup STATUS message, then ACK/NACK replies.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use stratus_protocol::{OutboundMessage, MAX_FRAME_SIZE};

use crate::channels::LINK_REPLIES;

/// Transaction id of the startup STATUS message
const STATUS_TXN: u8 = 0;

/// Link TX task - sends frames to the companion
#[embassy_executor::task]
pub async fn link_tx_task(mut tx: BufferedUartTx) {
    info!("Link TX task started");

    // Fire-and-forget liveness signal
    send_message(&mut tx, OutboundMessage::ready(STATUS_TXN)).await;

    loop {
        let message = LINK_REPLIES.receive().await;
        send_message(&mut tx, message).await;
    }
}

async fn send_message(tx: &mut BufferedUartTx, message: OutboundMessage) {
    let frame = match message.to_frame() {
        Ok(frame) => frame,
        Err(e) => {
            error!("Failed to build {:?}: {:?}", message, e);
            return;
        }
    };

    let mut buf = [0u8; MAX_FRAME_SIZE];
    match frame.encode(&mut buf) {
        Ok(len) => {
            if let Err(e) = tx.write_all(&buf[..len]).await {
                warn!("Failed to send {:?}: {:?}", message, e);
            } else {
                trace!("Sent {:?}", message);
            }
        }
        Err(e) => error!("Failed to encode {:?}: {:?}", message, e),
    }
}
