/// Type prefix of the Name characteristic.
pub const NAME_CHARACTERISTIC: &str = "00000023";

/// Type prefix of the Manufacturer characteristic.
pub const MANUFACTURER_CHARACTERISTIC: &str = "00000020";

/// Service code of the Accessory Information service.
pub const ACCESSORY_INFORMATION_SERVICE: &str = "0000003E";

/// First eight characters of a type UUID, case as supplied.
///
/// Short or non-ASCII input yields whatever is there; it simply misses the
/// lookup later. The table is uppercase, so lowercase codes miss too.
pub fn type_prefix(type_uuid: &str) -> String {
    type_uuid.chars().take(8).collect()
}

/// Maps an 8 hex digit service code to its display category.
pub fn classify(service_code: &str) -> Option<&'static str> {
    let category = match service_code {
        "0000003E" => "Accessory Information",
        "000000BB" => "Air Purifier",
        "0000008D" => "Air Quality Sensor",
        "00000096" => "Battery Service",
        "00000110" => "Camera RTP Stream Management",
        "00000097" => "Carbon Dioxide Sensor",
        "0000007F" => "Carbon Monoxide Sensor",
        "00000080" => "Contact Sensor",
        "00000081" => "Door",
        "00000121" => "Doorbell",
        "00000040" => "Fan",
        "000000B7" => "Fan v2",
        "000000BA" => "Filter Maintenance",
        "000000D7" => "Faucet",
        "00000041" => "Garage Door Opener",
        "000000BC" => "Heater Cooler",
        "000000BD" => "Humidifier Dehumidifier",
        "00000082" => "Humidity Sensor",
        "000000CF" => "Irrigation System",
        "00000083" => "Leak Sensor",
        "00000084" => "Light Sensor",
        "00000043" => "Lightbulb",
        "00000044" => "Lock Management",
        "00000045" => "Lock Mechanism",
        "00000112" => "Microphone",
        "00000085" => "Motion Sensor",
        "00000086" => "Occupancy Sensor",
        "00000047" => "Outlet",
        "0000007E" => "Security System",
        "000000CC" => "Service Label",
        "000000B9" => "Slat",
        "00000087" => "Smoke Sensor",
        "00000113" => "Speaker",
        "00000089" => "Stateless Programmable Switch",
        "00000049" => "Switch",
        "0000008A" => "Temperature Sensor",
        "0000004A" => "Thermostat",
        "000000D0" => "Valve",
        "0000008B" => "Window",
        "0000008C" => "Window Covering",
        "00000111" => "Camera",
        _ => {
            tracing::debug!("Unknown service type code: {}", service_code);
            return None;
        }
    };
    Some(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_codes() {
        assert_eq!(classify("0000008A"), Some("Temperature Sensor"));
        assert_eq!(classify("0000003E"), Some("Accessory Information"));
        assert_eq!(classify("000000B7"), Some("Fan v2"));
        assert_eq!(classify("00000111"), Some("Camera"));
    }

    const TABLE: [(&str, &str); 41] = [
        ("0000003E", "Accessory Information"),
        ("000000BB", "Air Purifier"),
        ("0000008D", "Air Quality Sensor"),
        ("00000096", "Battery Service"),
        ("00000110", "Camera RTP Stream Management"),
        ("00000097", "Carbon Dioxide Sensor"),
        ("0000007F", "Carbon Monoxide Sensor"),
        ("00000080", "Contact Sensor"),
        ("00000081", "Door"),
        ("00000121", "Doorbell"),
        ("00000040", "Fan"),
        ("000000B7", "Fan v2"),
        ("000000BA", "Filter Maintenance"),
        ("000000D7", "Faucet"),
        ("00000041", "Garage Door Opener"),
        ("000000BC", "Heater Cooler"),
        ("000000BD", "Humidifier Dehumidifier"),
        ("00000082", "Humidity Sensor"),
        ("000000CF", "Irrigation System"),
        ("00000083", "Leak Sensor"),
        ("00000084", "Light Sensor"),
        ("00000043", "Lightbulb"),
        ("00000044", "Lock Management"),
        ("00000045", "Lock Mechanism"),
        ("00000112", "Microphone"),
        ("00000085", "Motion Sensor"),
        ("00000086", "Occupancy Sensor"),
        ("00000047", "Outlet"),
        ("0000007E", "Security System"),
        ("000000CC", "Service Label"),
        ("000000B9", "Slat"),
        ("00000087", "Smoke Sensor"),
        ("00000113", "Speaker"),
        ("00000089", "Stateless Programmable Switch"),
        ("00000049", "Switch"),
        ("0000008A", "Temperature Sensor"),
        ("0000004A", "Thermostat"),
        ("000000D0", "Valve"),
        ("0000008B", "Window"),
        ("0000008C", "Window Covering"),
        ("00000111", "Camera"),
    ];

    #[test]
    fn test_classify_every_table_entry() {
        for (code, category) in TABLE {
            assert_eq!(classify(code), Some(category), "code {}", code);
        }
    }

    #[test]
    fn test_classify_near_misses() {
        for (code, _) in TABLE {
            assert_eq!(classify(&format!("{} ", code)), None);
            assert_eq!(classify(&code[1..]), None);

            let lower = code.to_ascii_lowercase();
            if lower != code {
                assert_eq!(classify(&lower), None, "code {}", lower);
            }
        }
        assert_eq!(classify("0000008B "), None);
        assert_eq!(classify("0000003e"), None);
    }

    #[test]
    fn test_classify_unknown_code() {
        assert_eq!(classify("FFFFFFFF"), None);
        assert_eq!(classify(""), None);
        // 表格只有大寫
        assert_eq!(classify("0000008a"), None);
    }

    #[test]
    fn test_type_prefix() {
        assert_eq!(type_prefix("0000008a-0000-1000-8000-0026BB765291"), "0000008a");
        assert_eq!(type_prefix("0000008A-0000-1000-8000-0026BB765291"), "0000008A");
        assert_eq!(type_prefix("E863F10F-079E-48FF-8F27-9C2605A29F52"), "E863F10F");
        assert_eq!(type_prefix("8A"), "8A");
        assert_eq!(type_prefix("äöü"), "äöü");
    }
}
