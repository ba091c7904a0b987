use crate::domain::model::{CharacteristicAddress, EventRegistration, RawCharacteristic};
use crate::domain::service_type::{type_prefix, NAME_CHARACTERISTIC};

const PERM_WRITE: &str = "pw";
const PERM_EVENT: &str = "ev";

/// One characteristic of a service, with its command addresses resolved.
///
/// The owning accessory id is copied in at construction so the
/// characteristic never needs to reach back into its service.
#[derive(Debug, Clone, PartialEq)]
pub struct Characteristic {
    pub aid: u64,
    pub iid: u64,
    /// 8 字元的型別前綴
    pub type_code: String,
    pub description: String,
    pub perms: Vec<String>,
    pub format: Option<String>,
    pub unit: Option<String>,
    pub value: serde_json::Value,
    /// `"<aid>.<iid>"`
    pub get_characteristic: String,
    pub put_characteristic: Vec<CharacteristicAddress>,
    pub event_register: Vec<EventRegistration>,
}

impl Characteristic {
    pub fn new(raw: &RawCharacteristic, aid: u64) -> Self {
        let has_perm = |perm: &str| raw.perms.iter().any(|p| p == perm);

        let put_characteristic = if has_perm(PERM_WRITE) {
            vec![CharacteristicAddress { aid, iid: raw.iid }]
        } else {
            Vec::new()
        };

        let event_register = if has_perm(PERM_EVENT) {
            vec![EventRegistration {
                aid,
                iid: raw.iid,
                ev: true,
            }]
        } else {
            Vec::new()
        };

        Self {
            aid,
            iid: raw.iid,
            type_code: type_prefix(&raw.characteristic_type),
            description: raw.description.clone(),
            perms: raw.perms.clone(),
            format: raw.format.clone(),
            unit: raw.unit.clone(),
            value: raw.value.clone(),
            get_characteristic: format!("{}.{}", aid, raw.iid),
            put_characteristic,
            event_register,
        }
    }

    pub fn is_name(&self) -> bool {
        self.type_code == NAME_CHARACTERISTIC
    }

    /// Value rendered as text; `None` when the accessory reported no value
    /// or an empty string.
    pub fn value_as_string(&self) -> Option<String> {
        match &self.value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawCharacteristic {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_read_only_characteristic() {
        let c = Characteristic::new(
            &raw(json!({
                "iid": 10,
                "type": "00000011-0000-1000-8000-0026BB765291",
                "perms": ["pr"],
                "format": "float",
                "value": 4.9,
                "description": "Current Temperature"
            })),
            1,
        );

        assert_eq!(c.type_code, "00000011");
        assert_eq!(c.get_characteristic, "1.10");
        assert!(c.put_characteristic.is_empty());
        assert!(c.event_register.is_empty());
        assert!(!c.is_name());
    }

    #[test]
    fn test_writable_and_evented_characteristic() {
        let c = Characteristic::new(
            &raw(json!({
                "iid": 11,
                "type": "00000025-0000-1000-8000-0026BB765291",
                "perms": ["pr", "pw", "ev"],
                "format": "bool",
                "value": false,
                "description": "On"
            })),
            7,
        );

        assert_eq!(c.put_characteristic, vec![CharacteristicAddress { aid: 7, iid: 11 }]);
        assert_eq!(
            c.event_register,
            vec![EventRegistration {
                aid: 7,
                iid: 11,
                ev: true
            }]
        );
        assert_eq!(c.value_as_string().as_deref(), Some("false"));
    }

    #[test]
    fn test_name_characteristic_value() {
        let c = Characteristic::new(
            &raw(json!({
                "iid": 9,
                "type": "00000023-0000-1000-8000-0026BB765291",
                "perms": ["pr"],
                "value": "Cold Cellar"
            })),
            1,
        );

        assert!(c.is_name());
        assert_eq!(c.description, "");
        assert_eq!(c.value_as_string().as_deref(), Some("Cold Cellar"));
    }

    #[test]
    fn test_empty_name_value_is_no_name() {
        let c = Characteristic::new(
            &raw(json!({
                "iid": 9,
                "type": "00000023-0000-1000-8000-0026BB765291",
                "perms": ["pr"],
                "value": ""
            })),
            1,
        );

        assert!(c.is_name());
        assert_eq!(c.value_as_string(), None);
    }
}
