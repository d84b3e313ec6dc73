use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

use super::OverlaySnapshot;

pub const OVERLAY_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for persisted/replayed geometry snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: OverlaySnapshot,
}

impl OverlaySnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> OverlayResult<String> {
        let payload = OverlaySnapshotJsonContractV1 {
            schema_version: OVERLAY_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            OverlayError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both a bare host payload and the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> OverlayResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<OverlaySnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: OverlaySnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            OverlayError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != OVERLAY_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(OverlayError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
