//! Sharing integration.
//!
//! The page may or may not have a sharing integration. It is injected as a
//! [`ShareProvider`]; [`NoShare`] stands in when none is registered and
//! reports [`ShareError::Unavailable`].

use std::io::Write;

use serde_json::json;
use tracing::debug;

use crate::types::errors::ShareError;
use crate::types::favorite::Bookmark;

/// Trait for anything that can share a location.
pub trait ShareProvider {
    fn share(&mut self, lat: f64, lon: f64, url: &str, name: &str) -> Result<(), ShareError>;
}

/// Provider used when no sharing integration is registered.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShare;

impl ShareProvider for NoShare {
    fn share(&mut self, _lat: f64, _lon: f64, _url: &str, _name: &str) -> Result<(), ShareError> {
        Err(ShareError::Unavailable)
    }
}

/// Forwards share requests to the host as newline-delimited JSON events.
///
/// Each request becomes one line:
/// `{"event":"share","lat":..,"lon":..,"url":"..","name":".."}`.
pub struct EventShare<W: Write> {
    out: W,
}

impl<W: Write> EventShare<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ShareProvider for EventShare<W> {
    fn share(&mut self, lat: f64, lon: f64, url: &str, name: &str) -> Result<(), ShareError> {
        let event = json!({"event": "share", "lat": lat, "lon": lon, "url": url, "name": name});
        writeln!(self.out, "{}", event)
            .and_then(|_| self.out.flush())
            .map_err(|e| ShareError::Failed(e.to_string()))?;
        debug!(%url, "share event emitted");
        Ok(())
    }
}

/// Formats a coordinate pair as `"lat, lon"` with three decimals.
pub fn coord_str(lat: f64, lon: f64) -> String {
    format!("{:.3}, {:.3}", lat, lon)
}

/// Returns the stored link of `bookmark`, or builds one from `base` and its coordinates.
pub fn share_url(bookmark: &Bookmark, base: &str) -> String {
    match &bookmark.url {
        Some(url) if !url.is_empty() => url.clone(),
        _ => format!("{}{:.3},{:.3}", base, bookmark.lat, bookmark.lon),
    }
}
