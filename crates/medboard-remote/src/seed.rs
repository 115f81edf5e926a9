//! # Seed Equipment
//!
//! The static default equipment collection.
//!
//! When the inventory endpoint is unreachable the dashboard still has to
//! render something meaningful, so it falls back to this fixed set of
//! devices rather than an empty screen. The same set doubles as demo data
//! for offline development.

use medboard_core::{Equipment, EquipmentStatus};

/// Builds the default equipment collection.
///
/// Returns owned values so callers can mutate their copy freely; the seed
/// itself is re-derived on every call and never shared.
pub fn default_equipment() -> Vec<Equipment> {
    vec![
        device(
            "eq-seed-001",
            "Infusion Pump",
            "IP-2214-A",
            "ICU Room 4",
            "Braun",
            "Perfusor Space",
            EquipmentStatus::Operational,
        ),
        device(
            "eq-seed-002",
            "Patient Monitor",
            "PM-8852",
            "ICU Room 2",
            "Philips",
            "IntelliVue MX450",
            EquipmentStatus::Operational,
        ),
        device(
            "eq-seed-003",
            "Defibrillator",
            "DF-1190",
            "Emergency Bay 1",
            "Zoll",
            "R Series",
            EquipmentStatus::UnderMaintenance,
        ),
        device(
            "eq-seed-004",
            "Ventilator",
            "VT-0433",
            "OR 2",
            "Draeger",
            "Evita V600",
            EquipmentStatus::Operational,
        ),
        device(
            "eq-seed-005",
            "Ultrasound Scanner",
            "US-7761",
            "Radiology",
            "GE",
            "Logiq E10",
            EquipmentStatus::OutOfService,
        ),
    ]
}

fn device(
    id: &str,
    name: &str,
    serial: &str,
    location: &str,
    manufacturer: &str,
    model: &str,
    status: EquipmentStatus,
) -> Equipment {
    Equipment {
        id: id.to_string(),
        name: name.to_string(),
        serial_number: serial.to_string(),
        location: location.to_string(),
        manufacturer: Some(manufacturer.to_string()),
        model: Some(model.to_string()),
        status,
        last_serviced_at: None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_is_not_empty() {
        assert!(!default_equipment().is_empty());
    }

    #[test]
    fn test_seed_ids_and_serials_are_unique() {
        let seed = default_equipment();

        let ids: HashSet<&str> = seed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), seed.len());

        let serials: HashSet<&str> = seed.iter().map(|e| e.serial_number.as_str()).collect();
        assert_eq!(serials.len(), seed.len());
    }
}
