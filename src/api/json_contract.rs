use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartGeometry;

pub const GEOMETRY_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometrySnapshotJsonContractV1 {
    pub schema_version: u32,
    pub geometry: ChartGeometry,
}

impl ChartGeometry {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize geometry json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = GeometrySnapshotJsonContractV1 {
            schema_version: GEOMETRY_SNAPSHOT_JSON_SCHEMA_V1,
            geometry: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize geometry contract v1: {e}"))
        })
    }

    /// Accepts either a bare geometry or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(geometry) = serde_json::from_str::<ChartGeometry>(input) {
            return Ok(geometry);
        }
        let payload: GeometrySnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse geometry json payload: {e}"))
        })?;
        if payload.schema_version != GEOMETRY_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported geometry schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.geometry)
    }
}
