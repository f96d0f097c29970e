use super::conditions::Conditions;
use super::error::AppError;
use super::forecast::ForecastEntry;
use super::spot::SpotId;
use std::cell::Cell;

/// Conditions and forecast for one spot, only ever built from two successful fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotReport {
    pub spot_id: SpotId,
    pub conditions: Conditions,
    pub forecast: Vec<ForecastEntry>,
}

impl SpotReport {
    /// Combines both fetch results; the first error wins and no partial report is built.
    pub fn from_parts(
        spot_id: SpotId,
        conditions: Result<Conditions, AppError>,
        forecast: Result<Vec<ForecastEntry>, AppError>,
    ) -> Result<Self, AppError> {
        let conditions = conditions?;
        let forecast = forecast?;

        Ok(Self {
            spot_id,
            conditions,
            forecast,
        })
    }
}

/// Identifies one conditions+forecast load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    spot_id: SpotId,
}

impl LoadTicket {
    pub fn spot_id(&self) -> SpotId {
        self.spot_id
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// True if `self` was issued after `other`.
    pub fn supersedes(&self, other: &LoadTicket) -> bool {
        self.seq > other.seq
    }
}

/// Hands out tickets in request order and remembers the most recent one.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    issued: Cell<u64>,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, spot_id: SpotId) -> LoadTicket {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        LoadTicket { seq, spot_id }
    }

    /// Whether no newer ticket has been issued since `ticket`.
    pub fn is_latest(&self, ticket: &LoadTicket) -> bool {
        ticket.seq == self.issued.get()
    }
}
