use serde::{Deserialize, Serialize};

/// `/accessories` 回應的最外層
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessoryDocument {
    pub accessories: Vec<RawAccessory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAccessory {
    pub aid: u64,
    #[serde(default)]
    pub services: Vec<RawService>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawService {
    pub iid: u64,
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub characteristics: Vec<RawCharacteristic>,
    // 保留但不使用
    #[serde(default)]
    pub primary: Option<bool>,
    #[serde(default)]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCharacteristic {
    pub iid: u64,
    #[serde(rename = "type")]
    pub characteristic_type: String,
    #[serde(default)]
    pub perms: Vec<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub min_step: Option<f64>,
}

/// Addressing information shared by all services of one accessory.
///
/// `name` and `manufacturer` are usually unknown when a service is built and
/// get filled in while the services of an accessory are aggregated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub aid: u64,
    pub host: String,
    pub port: u16,
    pub bridge_id: String,
    pub instance_id: String,
    pub manufacturer: Option<String>,
    pub name: Option<String>,
}

impl Context {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        bridge_id: impl Into<String>,
        instance_id: impl Into<String>,
    ) -> Self {
        Self {
            aid: 0,
            host: host.into(),
            port,
            bridge_id: bridge_id.into(),
            instance_id: instance_id.into(),
            manufacturer: None,
            name: None,
        }
    }

    pub fn with_aid(mut self, aid: u64) -> Self {
        self.aid = aid;
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Writable characteristic address, `{ "aid": 1, "iid": 10 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicAddress {
    pub aid: u64,
    pub iid: u64,
}

/// Event subscription entry, `{ "aid": 1, "iid": 10, "ev": true }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRegistration {
    pub aid: u64,
    pub iid: u64,
    pub ev: bool,
}

/// One flattened service as handed to the integration layer. Field names are
/// part of the downstream contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRecord {
    pub bridge_id: String,
    pub host: String,
    pub port: u16,
    pub instance_id: String,
    pub accessory_id: u64,
    pub service_code: String,
    pub name: Option<String>,
    pub category: String,
    pub full_name: String,
    pub sort_key: String,
    pub unique_id: String,
    pub descriptions: String,
    pub get_characteristics: String,
    pub put_characteristics: Vec<CharacteristicAddress>,
    pub event_registers: Vec<EventRegistration>,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub records: Vec<FlatRecord>,
    /// 未能分類而被丟棄的服務數
    pub skipped: usize,
}
