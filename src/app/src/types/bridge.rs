use serde::{Deserialize, Serialize};

/// Secondary wireless interface reported by the bridge service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Iface {
    pub path: String,
    pub iface: String,
    pub connected: bool,
    pub driver: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub ap_capable: bool,
}
