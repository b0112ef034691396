use serde::{Deserialize, Serialize};

/// Connection intent edited by the user and posted to `/connect` or `/repeat`
///
/// Absent fields are left out of the JSON body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    /// Secondary interface to repeat through; only set for repeat requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iface: Option<String>,
}

/// Single-field edit of the connection intent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum IntentField {
    Ssid(Option<String>),
    Identity(Option<String>),
    Passphrase(Option<String>),
}

impl NetworkInfo {
    /// The ssid, unless missing or blank
    pub fn ssid(&self) -> Option<&str> {
        self.ssid.as_deref().filter(|ssid| !ssid.is_empty())
    }

    /// Apply one field edit, keeping every other field
    pub fn apply(mut self, field: IntentField) -> Self {
        match field {
            IntentField::Ssid(ssid) => self.ssid = ssid,
            IntentField::Identity(identity) => self.identity = identity,
            IntentField::Passphrase(passphrase) => self.passphrase = passphrase,
        }
        self
    }

    /// Fill in `default_ssid` when no ssid was chosen
    pub fn with_default_ssid(mut self, default_ssid: Option<&str>) -> Self {
        if self.ssid().is_none() {
            if let Some(ssid) = default_ssid {
                self.ssid = Some(ssid.to_string());
            }
        }
        self
    }
}

/// Reduce a sequence of field edits into an intent
pub fn reduce_intent(
    intent: NetworkInfo,
    fields: impl IntoIterator<Item = IntentField>,
) -> NetworkInfo {
    fields.into_iter().fold(intent, NetworkInfo::apply)
}
