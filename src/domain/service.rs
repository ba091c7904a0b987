use crate::domain::characteristic::Characteristic;
use crate::domain::model::{CharacteristicAddress, Context, EventRegistration, FlatRecord, RawService};
use crate::domain::service_type::{classify, type_prefix};

/// A service of an accessory, split into its display name and its
/// functional characteristics.
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    pub instance_id: u64,
    pub service_code: String,
    pub category: Option<&'static str>,
    /// Addressing copied from the context at build time. Aggregation reads
    /// the context it is given instead, so these describe where the service
    /// was discovered.
    pub accessory_id: u64,
    pub host: String,
    pub port: u16,
    pub bridge_id: String,
    /// Feeds `uniqueId`.
    pub context_instance_id: String,
    pub display_name: Option<String>,
    /// Never contains the Name characteristic.
    pub characteristics: Vec<Characteristic>,
}

impl ServiceDescriptor {
    pub fn build(raw: &RawService, ctx: &Context) -> Self {
        let service_code = type_prefix(&raw.service_type);
        let category = classify(&service_code);

        let mut display_name = None;
        let mut characteristics = Vec::with_capacity(raw.characteristics.len());
        for element in &raw.characteristics {
            let characteristic = Characteristic::new(element, ctx.aid);
            if characteristic.is_name() {
                display_name = characteristic.value_as_string();
            } else {
                characteristics.push(characteristic);
            }
        }

        Self {
            instance_id: raw.iid,
            service_code,
            category,
            accessory_id: ctx.aid,
            host: ctx.host.clone(),
            port: ctx.port,
            bridge_id: ctx.bridge_id.clone(),
            context_instance_id: ctx.instance_id.clone(),
            display_name,
            characteristics,
        }
    }

    /// Folds the functional characteristics into one flat record.
    ///
    /// The returned context carries this service's display name, if it has
    /// one, so later services of the same accessory inherit it. Services
    /// with an unknown category produce no record.
    pub fn to_flat_record(&self, mut ctx: Context) -> (Option<FlatRecord>, Context) {
        let mut descriptions: Vec<&str> = Vec::new();
        let mut get_characteristics: Vec<&str> = Vec::new();
        let mut put_characteristics: Vec<CharacteristicAddress> = Vec::new();
        let mut event_registers: Vec<EventRegistration> = Vec::new();

        if let Some(name) = &self.display_name {
            ctx.name = Some(name.clone());
        }

        for characteristic in &self.characteristics {
            if characteristic.is_name() {
                tracing::trace!("Skipping name characteristic {}", characteristic.get_characteristic);
                continue;
            }
            descriptions.push(&characteristic.description);
            get_characteristics.push(&characteristic.get_characteristic);
            put_characteristics.extend_from_slice(&characteristic.put_characteristic);
            event_registers.extend_from_slice(&characteristic.event_register);
        }

        let Some(category) = self.category else {
            tracing::debug!(
                "Dropping service {} ({}) of accessory {}: unknown category",
                self.instance_id,
                self.service_code,
                self.accessory_id
            );
            return (None, ctx);
        };

        let name = ctx.name.clone().unwrap_or_default();
        let manufacturer = ctx.manufacturer.as_deref().unwrap_or_default();

        let record = FlatRecord {
            bridge_id: ctx.bridge_id.clone(),
            host: ctx.host.clone(),
            port: ctx.port,
            instance_id: ctx.instance_id.clone(),
            accessory_id: ctx.aid,
            service_code: self.service_code.clone(),
            name: ctx.name.clone(),
            category: category.to_string(),
            full_name: format!("{} - {}", name, category),
            sort_key: format!("{}:{}", name, category),
            unique_id: format!(
                "{}{}{}{}{}",
                ctx.bridge_id, self.context_instance_id, manufacturer, name, self.service_code
            ),
            descriptions: descriptions.join(","),
            get_characteristics: get_characteristics.join(","),
            put_characteristics,
            event_registers,
        };

        (Some(record), ctx)
    }
}
