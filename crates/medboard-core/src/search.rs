//! # Global Search Engine
//!
//! Pure, role-gated search across equipment, work orders, and the user
//! directory.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Global Search Flow                                  │
//! │                                                                         │
//! │  User types "pump" into the overlay                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  global_search(query, current_user, scope)                             │
//! │       │                                                                 │
//! │  ┌────┴──────────────────────────────────────────┐                     │
//! │  │  No current user?        → []                 │                     │
//! │  │  Trimmed query < 2 chars → []                 │                     │
//! │  └────┬──────────────────────────────────────────┘                     │
//! │       ▼                                                                 │
//! │  lowercase the needle, then per category:                              │
//! │                                                                         │
//! │  Equipment   name | serial     every authenticated role                │
//! │  WorkOrder   id | description  super/system admin, biomedical engineer │
//! │  User        name | email      super admin only                        │
//! │                                                                         │
//! │       ▼                                                                 │
//! │  Vec<SearchResult> grouped by category, source order within            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Role Gating Is Per Category
//! Each category's gate is evaluated independently: an area head sees
//! matching Equipment results while WorkOrder and User matches are
//! silently withheld in the same query.

use crate::types::{Equipment, SearchCategory, SearchResult, User, WorkOrder};
use crate::{SEARCH_MIN_QUERY_LEN, UNKNOWN_EQUIPMENT_LABEL};

// =============================================================================
// Search Scope
// =============================================================================

/// The collections a search runs over.
///
/// Borrowed slices keep the engine pure: callers snapshot their live state
/// and hand it in; the engine never reaches out for data.
#[derive(Debug, Clone, Copy)]
pub struct SearchScope<'a> {
    /// Live equipment collection.
    pub equipment: &'a [Equipment],

    /// Live work-order collection.
    pub work_orders: &'a [WorkOrder],

    /// The fixed user directory (not the live session user).
    pub directory: &'a [User],
}

// =============================================================================
// Engine
// =============================================================================

/// Runs the global search.
///
/// ## Preconditions
/// - No current user, or a trimmed query shorter than
///   [`SEARCH_MIN_QUERY_LEN`] characters, yields an empty result set.
///   Neither is an error.
///
/// ## Matching
/// Case-insensitive substring containment against a fixed per-category
/// field set (see module docs). Within a category, results keep the
/// stable iteration order of the source collection.
///
/// ## Referential Lookup
/// Work-order titles embed the parent equipment's display name, resolved
/// by equipment id; a miss substitutes [`UNKNOWN_EQUIPMENT_LABEL`] and is
/// never fatal.
pub fn global_search(
    query: &str,
    current_user: Option<&User>,
    scope: &SearchScope<'_>,
) -> Vec<SearchResult> {
    let Some(user) = current_user else {
        return Vec::new();
    };

    let query = query.trim();
    if query.chars().count() < SEARCH_MIN_QUERY_LEN {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut results = Vec::new();

    // Equipment is visible to every authenticated role
    for equipment in scope.equipment {
        if contains(&equipment.name, &needle) || contains(&equipment.serial_number, &needle) {
            results.push(SearchResult {
                id: format!("equipment-{}", equipment.id),
                category: SearchCategory::Equipment,
                title: equipment.name.clone(),
                subtitle: equipment.serial_number.clone(),
                target: format!("/equipment/{}", equipment.id),
                icon: SearchCategory::Equipment.icon().to_string(),
            });
        }
    }

    if user.role.can_view_work_orders() {
        for order in scope.work_orders {
            if contains(&order.id, &needle) || contains(&order.description, &needle) {
                let equipment_name = scope
                    .equipment
                    .iter()
                    .find(|e| e.id == order.equipment_id)
                    .map(|e| e.name.as_str())
                    .unwrap_or(UNKNOWN_EQUIPMENT_LABEL);

                results.push(SearchResult {
                    id: format!("work-order-{}", order.id),
                    category: SearchCategory::WorkOrder,
                    title: format!("{} - {}", order.id, equipment_name),
                    subtitle: order.description.clone(),
                    target: format!("/work-orders/{}", order.id),
                    icon: SearchCategory::WorkOrder.icon().to_string(),
                });
            }
        }
    }

    if user.role.can_view_user_directory() {
        for directory_user in scope.directory {
            if contains(&directory_user.name, &needle) || contains(&directory_user.email, &needle) {
                results.push(SearchResult {
                    id: format!("user-{}", directory_user.id),
                    category: SearchCategory::User,
                    title: directory_user.name.clone(),
                    subtitle: directory_user.email.clone(),
                    target: format!("/users/{}", directory_user.id),
                    icon: SearchCategory::User.icon().to_string(),
                });
            }
        }
    }

    results
}

/// Case-insensitive substring containment.
fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

// =============================================================================
// Grouping
// =============================================================================

/// One display section of the result list.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchGroup {
    /// Category every result in this group belongs to.
    pub category: SearchCategory,

    /// Section heading for the overlay.
    pub label: &'static str,

    /// Results in stable source order.
    pub results: Vec<SearchResult>,
}

/// Groups a result list by category for sectioned display.
///
/// `global_search` already emits results in category order, so grouping is
/// a single pass collecting adjacent runs.
pub fn group_results(results: Vec<SearchResult>) -> Vec<SearchGroup> {
    let mut groups: Vec<SearchGroup> = Vec::new();

    for result in results {
        match groups.last_mut() {
            Some(group) if group.category == result.category => group.results.push(result),
            _ => groups.push(SearchGroup {
                category: result.category,
                label: result.category.label(),
                results: vec![result],
            }),
        }
    }

    groups
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EquipmentStatus, Role, WorkOrderStatus, WorkOrderType};
    use chrono::Utc;

    fn user_with_role(role: Role) -> User {
        User {
            id: "u1".to_string(),
            name: "Dana Osei".to_string(),
            email: "dana.osei@hospital.test".to_string(),
            role,
        }
    }

    fn equipment(id: &str, name: &str, serial: &str) -> Equipment {
        Equipment {
            id: id.to_string(),
            name: name.to_string(),
            serial_number: serial.to_string(),
            location: "ICU".to_string(),
            manufacturer: None,
            model: None,
            status: EquipmentStatus::Operational,
            last_serviced_at: None,
        }
    }

    fn work_order(id: &str, equipment_id: &str, description: &str) -> WorkOrder {
        WorkOrder {
            id: id.to_string(),
            equipment_id: equipment_id.to_string(),
            description: description.to_string(),
            status: WorkOrderStatus::Open,
            order_type: WorkOrderType::Corrective,
            created_at: Utc::now(),
        }
    }

    fn directory() -> Vec<User> {
        vec![
            User {
                id: "u7".to_string(),
                name: "Priya Nair".to_string(),
                email: "priya.nair@hospital.test".to_string(),
                role: Role::AreaHead,
            },
            User {
                id: "u8".to_string(),
                name: "Sam Keller".to_string(),
                email: "sam.keller@hospital.test".to_string(),
                role: Role::ReadOnly,
            },
        ]
    }

    fn scope<'a>(
        equipment: &'a [Equipment],
        work_orders: &'a [WorkOrder],
        directory: &'a [User],
    ) -> SearchScope<'a> {
        SearchScope {
            equipment,
            work_orders,
            directory,
        }
    }

    #[test]
    fn test_short_query_is_empty_for_every_role() {
        let eq = vec![equipment("e1", "Infusion Pump", "SN123")];
        let wo = vec![work_order("WO1", "e1", "Calibration due")];
        let dir = directory();

        for role in [Role::SuperAdmin, Role::AreaHead, Role::ReadOnly] {
            let user = user_with_role(role);
            assert!(global_search("p", Some(&user), &scope(&eq, &wo, &dir)).is_empty());
            assert!(global_search("", Some(&user), &scope(&eq, &wo, &dir)).is_empty());
            assert!(global_search("  i  ", Some(&user), &scope(&eq, &wo, &dir)).is_empty());
        }
    }

    #[test]
    fn test_no_user_is_empty() {
        let eq = vec![equipment("e1", "Infusion Pump", "SN123")];
        assert!(global_search("pump", None, &scope(&eq, &[], &[])).is_empty());
    }

    #[test]
    fn test_equipment_matches_name_or_serial_case_insensitive() {
        let eq = vec![
            equipment("e1", "Infusion Pump", "SN123"),
            equipment("e2", "Ventilator", "VT-900"),
        ];
        let user = user_with_role(Role::ReadOnly);

        let by_name = global_search("PUMP", Some(&user), &scope(&eq, &[], &[]));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].title, "Infusion Pump");
        assert_eq!(by_name[0].id, "equipment-e1");

        let by_serial = global_search("vt-9", Some(&user), &scope(&eq, &[], &[]));
        assert_eq!(by_serial.len(), 1);
        assert_eq!(by_serial[0].title, "Ventilator");

        // No non-matching item ever appears
        let none = global_search("defib", Some(&user), &scope(&eq, &[], &[]));
        assert!(none.is_empty());
    }

    #[test]
    fn test_work_order_gating_per_role() {
        let eq = vec![equipment("e1", "Infusion Pump", "SN123")];
        let wo = vec![work_order("WO1", "e1", "Calibration due")];

        // Biomedical engineer: sees the work order, matched by id
        let engineer = user_with_role(Role::BiomedicalEngineer);
        let results = global_search("wo1", Some(&engineer), &scope(&eq, &wo, &[]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, SearchCategory::WorkOrder);
        assert_eq!(results[0].subtitle, "Calibration due");
        assert!(results[0].title.contains("Infusion Pump"));

        // Area head: same query, nothing
        let area_head = user_with_role(Role::AreaHead);
        assert!(global_search("wo1", Some(&area_head), &scope(&eq, &wo, &[])).is_empty());
    }

    #[test]
    fn test_work_order_matches_description() {
        let eq = vec![equipment("e1", "Infusion Pump", "SN123")];
        let wo = vec![work_order("WO1", "e1", "Calibration due")];
        let engineer = user_with_role(Role::BiomedicalEngineer);

        let results = global_search("calibration", Some(&engineer), &scope(&eq, &wo, &[]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "work-order-WO1");
    }

    #[test]
    fn test_dangling_equipment_reference_uses_placeholder() {
        let wo = vec![work_order("WO9", "ghost", "Replace battery")];
        let engineer = user_with_role(Role::BiomedicalEngineer);

        let results = global_search("battery", Some(&engineer), &scope(&[], &wo, &[]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "WO9 - unknown");
    }

    #[test]
    fn test_user_directory_super_admin_only() {
        let dir = directory();

        let super_admin = user_with_role(Role::SuperAdmin);
        let results = global_search("priya", Some(&super_admin), &scope(&[], &[], &dir));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, SearchCategory::User);
        assert_eq!(results[0].subtitle, "priya.nair@hospital.test");

        // Matching by email works too
        let by_email = global_search("keller@", Some(&super_admin), &scope(&[], &[], &dir));
        assert_eq!(by_email.len(), 1);

        // System admin is denied the category entirely
        let system_admin = user_with_role(Role::SystemAdmin);
        assert!(global_search("priya", Some(&system_admin), &scope(&[], &[], &dir)).is_empty());
    }

    #[test]
    fn test_results_are_grouped_in_category_order() {
        let eq = vec![equipment("e1", "Pump A", "PU-1"), equipment("e2", "Pump B", "PU-2")];
        let wo = vec![work_order("WO1", "e1", "pump tubing worn")];
        let dir = vec![User {
            id: "u9".to_string(),
            name: "Pum Podee".to_string(),
            email: "pum.podee@hospital.test".to_string(),
            role: Role::ReadOnly,
        }];

        let super_admin = user_with_role(Role::SuperAdmin);
        let results = global_search("pum", Some(&super_admin), &scope(&eq, &wo, &dir));

        let categories: Vec<SearchCategory> = results.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                SearchCategory::Equipment,
                SearchCategory::Equipment,
                SearchCategory::WorkOrder,
                SearchCategory::User,
            ]
        );

        // Stable source order within the category
        assert_eq!(results[0].title, "Pump A");
        assert_eq!(results[1].title, "Pump B");

        let groups = group_results(results);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label, "Equipment");
        assert_eq!(groups[0].results.len(), 2);
        assert_eq!(groups[1].label, "Work Orders");
        assert_eq!(groups[2].label, "Users");
    }

    #[test]
    fn test_result_ids_are_unique_across_categories() {
        // Same raw id in two collections must not collide
        let eq = vec![equipment("x1", "Monitor", "MON-1")];
        let wo = vec![work_order("x1", "x1", "Monitor flickering")];
        let engineer = user_with_role(Role::BiomedicalEngineer);

        let results = global_search("monitor", Some(&engineer), &scope(&eq, &wo, &[]));
        assert_eq!(results.len(), 2);
        assert_ne!(results[0].id, results[1].id);
    }
}
