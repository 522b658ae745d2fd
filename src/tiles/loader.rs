use super::source::TileSource;
use crate::core::geo::TileCoord;
use crate::Result;
use once_cell::sync::Lazy;
use reqwest::blocking::Client;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

/// Public tile servers (OpenStreetMap in particular) reject requests
/// without a distinguishable User-Agent, so the shared client sets one.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("quakemap/0.1 (+https://github.com/example/quakemap)")
        .build()
        .expect("failed to build reqwest blocking client")
});

const RETRY_DELAY: Duration = Duration::from_millis(100);

/// Downloads one tile on a detached thread, reporting the bytes back on
/// `tx`. A transient server error gets a single retry after a short delay;
/// a tile that fails twice is dropped and will be re-requested the next
/// time it scrolls into view.
pub fn spawn_fetch(source: &dyn TileSource, coord: TileCoord, tx: Sender<(TileCoord, Vec<u8>)>) {
    let url = source.url(coord);

    thread::spawn(move || {
        let data = fetch_bytes(&url).or_else(|e| {
            log::debug!("retrying tile {:?} after {}", coord, e);
            thread::sleep(RETRY_DELAY);
            fetch_bytes(&url)
        });

        match data {
            Ok(data) => {
                let _ = tx.send((coord, data));
            }
            Err(e) => log::warn!("tile {:?} failed twice, dropping: {}", coord, e),
        }
    });
}

fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = HTTP_CLIENT.get(url).send()?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}
