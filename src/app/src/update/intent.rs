use crux_core::Command;

use crate::events::{Event, IntentEvent};
use crate::model::Model;
use crate::types::reduce_intent;
use crate::update_field;
use crate::Effect;

/// Handle form edits of the connection intent
pub fn handle(event: IntentEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        IntentEvent::Replace(intent) => update_field!(model.intent, intent),
        IntentEvent::Update(field) => {
            let intent = model.intent.clone().apply(field);
            update_field!(model.intent, intent)
        }
        IntentEvent::UpdateMany(fields) => {
            let intent = reduce_intent(model.intent.clone(), fields);
            update_field!(model.intent, intent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IntentField, Network, NetworkInfo};

    #[test]
    fn replace_drops_fields_missing_from_new_data() {
        let mut model = Model {
            intent: NetworkInfo {
                ssid: Some("Home".to_string()),
                passphrase: Some("secret".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let _ = handle(
            IntentEvent::Replace(NetworkInfo {
                ssid: Some("Cafe".to_string()),
                ..Default::default()
            }),
            &mut model,
        );

        assert_eq!(model.intent.ssid.as_deref(), Some("Cafe"));
        assert_eq!(model.intent.passphrase, None);
    }

    #[test]
    fn field_update_keeps_other_fields() {
        let mut model = Model {
            intent: NetworkInfo {
                ssid: Some("Home".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let _ = handle(
            IntentEvent::Update(IntentField::Passphrase(Some("x".to_string()))),
            &mut model,
        );

        assert_eq!(model.intent.ssid.as_deref(), Some("Home"));
        assert_eq!(model.intent.passphrase.as_deref(), Some("x"));
    }

    #[test]
    fn batch_update_applies_fields_in_order() {
        let mut model = Model {
            intent: NetworkInfo {
                ssid: Some("Home".to_string()),
                passphrase: Some("old".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let _ = handle(
            IntentEvent::UpdateMany(vec![
                IntentField::Ssid(Some("Office".to_string())),
                IntentField::Identity(Some("alice".to_string())),
                IntentField::Passphrase(None),
            ]),
            &mut model,
        );

        assert_eq!(
            model.intent,
            NetworkInfo {
                ssid: Some("Office".to_string()),
                identity: Some("alice".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn selecting_enterprise_network_reveals_identity() {
        let mut model = Model {
            networks: vec![
                Network {
                    ssid: "Home".to_string(),
                    security: "wpa2".to_string(),
                },
                Network {
                    ssid: "Office".to_string(),
                    security: "enterprise".to_string(),
                },
            ],
            ..Default::default()
        };
        assert!(!model.is_selected_network_enterprise());

        let _ = handle(
            IntentEvent::Update(IntentField::Ssid(Some("Office".to_string()))),
            &mut model,
        );

        assert!(model.is_selected_network_enterprise());
    }

    #[test]
    fn passphrase_survives_rescan() {
        let mut model = Model::default();
        let _ = handle(
            IntentEvent::Update(IntentField::Passphrase(Some("secret".to_string()))),
            &mut model,
        );

        model.networks = vec![Network {
            ssid: "Other".to_string(),
            security: "wpa2".to_string(),
        }];

        let intent = model.submitted_intent();
        assert_eq!(intent.ssid.as_deref(), Some("Other"));
        assert_eq!(intent.passphrase.as_deref(), Some("secret"));
    }
}
