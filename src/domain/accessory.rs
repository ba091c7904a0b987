use crate::domain::characteristic::Characteristic;
use crate::domain::model::{AccessoryDocument, Context, FlatRecord, RawAccessory, RawService};
use crate::domain::service::ServiceDescriptor;
use crate::domain::service_type::{
    type_prefix, ACCESSORY_INFORMATION_SERVICE, MANUFACTURER_CHARACTERISTIC, NAME_CHARACTERISTIC,
};

/// All services of one accessory, ready to be flattened.
#[derive(Debug, Clone)]
pub struct AccessoryDescriptor {
    pub aid: u64,
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub services: Vec<ServiceDescriptor>,
}

impl AccessoryDescriptor {
    pub fn build(raw: &RawAccessory, ctx: &Context) -> Self {
        let ctx = ctx.clone().with_aid(raw.aid);

        let (name, manufacturer) = raw
            .services
            .iter()
            .find(|s| type_prefix(&s.service_type) == ACCESSORY_INFORMATION_SERVICE)
            .map(|info| information(info, raw.aid))
            .unwrap_or_default();

        let services = raw
            .services
            .iter()
            .map(|service| ServiceDescriptor::build(service, &ctx))
            .collect();

        Self {
            aid: raw.aid,
            name,
            manufacturer,
            services,
        }
    }

    /// Seeds the context with this accessory's identity.
    pub fn seed(&self, mut ctx: Context) -> Context {
        ctx.aid = self.aid;
        if self.name.is_some() {
            ctx.name = self.name.clone();
        }
        if self.manufacturer.is_some() {
            ctx.manufacturer = self.manufacturer.clone();
        }
        ctx
    }

    /// Flattens every service in input order, threading the context from one
    /// service to the next and dropping services with no category.
    pub fn to_flat_records(&self, ctx: Context) -> (Vec<FlatRecord>, Context) {
        let mut ctx = self.seed(ctx);
        let mut records = Vec::with_capacity(self.services.len());

        for service in &self.services {
            let (record, next) = service.to_flat_record(ctx);
            ctx = next;
            if let Some(record) = record {
                records.push(record);
            }
        }

        (records, ctx)
    }
}

/// 從 Accessory Information 取出名稱與製造商
fn information(service: &RawService, aid: u64) -> (Option<String>, Option<String>) {
    let mut name = None;
    let mut manufacturer = None;

    for element in &service.characteristics {
        let characteristic = Characteristic::new(element, aid);
        match characteristic.type_code.as_str() {
            NAME_CHARACTERISTIC => name = characteristic.value_as_string(),
            MANUFACTURER_CHARACTERISTIC => manufacturer = characteristic.value_as_string(),
            _ => {}
        }
    }

    (name, manufacturer)
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub records: Vec<FlatRecord>,
    pub skipped: usize,
}

/// Flattens a whole `/accessories` document.
///
/// Each accessory starts from a fresh copy of `base`, so names and
/// manufacturers never leak from one accessory to the next.
pub fn build_catalog(document: &AccessoryDocument, base: &Context, sort: bool) -> Catalog {
    let mut catalog = Catalog::default();

    for raw in &document.accessories {
        let accessory = AccessoryDescriptor::build(raw, base);
        let (records, _) = accessory.to_flat_records(base.clone());

        let skipped = accessory.services.len() - records.len();
        if skipped > 0 {
            tracing::debug!(
                "Accessory {} ({}): {} of {} services not classified",
                raw.aid,
                accessory.name.as_deref().unwrap_or("unnamed"),
                skipped,
                accessory.services.len()
            );
        }

        catalog.skipped += skipped;
        catalog.records.extend(records);
    }

    if sort {
        catalog.records.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
    }

    catalog
}
