use contracts::domain::a010_delivery_zone::aggregate::{
    DeliveryZone, OperatingStatus, ZoneCoverage, ZonePerformance, ZonePricing, ZoneSchedule,
    ZoneType,
};

use crate::shared::seed::strings;

/// Зоны доставки
pub fn seed() -> Vec<DeliveryZone> {
    vec![
        DeliveryZone {
            id: "zone-1".into(),
            name: "Downtown Core".into(),
            zone_type: ZoneType::Express,
            status: OperatingStatus::Active,
            coverage: ZoneCoverage {
                radius: 5.0,
                zip_codes: strings(&["10001", "10002", "10003"]),
                neighborhoods: strings(&["Financial District", "SoHo", "Tribeca"]),
            },
            pricing: ZonePricing {
                base_fee: 4.99,
                free_delivery_threshold: 35.0,
                express_upcharge: 2.99,
            },
            schedule: ZoneSchedule {
                time_slots: strings(&[
                    "9:00-11:00",
                    "11:00-13:00",
                    "13:00-15:00",
                    "15:00-17:00",
                    "17:00-19:00",
                ]),
                max_capacity: 50,
                current_load: 32,
            },
            performance: ZonePerformance {
                avg_delivery_time: 28,
                success_rate: 98.5,
                customer_satisfaction: 4.7,
            },
        },
        DeliveryZone {
            id: "zone-2".into(),
            name: "Westside Residential".into(),
            zone_type: ZoneType::Standard,
            status: OperatingStatus::Active,
            coverage: ZoneCoverage {
                radius: 8.0,
                zip_codes: strings(&["10011", "10014", "10016"]),
                neighborhoods: strings(&["Chelsea", "Greenwich Village", "Union Square"]),
            },
            pricing: ZonePricing {
                base_fee: 3.99,
                free_delivery_threshold: 50.0,
                express_upcharge: 3.99,
            },
            schedule: ZoneSchedule {
                time_slots: strings(&["10:00-12:00", "12:00-14:00", "14:00-16:00", "16:00-18:00"]),
                max_capacity: 40,
                current_load: 18,
            },
            performance: ZonePerformance {
                avg_delivery_time: 45,
                success_rate: 96.2,
                customer_satisfaction: 4.5,
            },
        },
        DeliveryZone {
            id: "zone-3".into(),
            name: "Express Brooklyn".into(),
            zone_type: ZoneType::Premium,
            status: OperatingStatus::Maintenance,
            coverage: ZoneCoverage {
                radius: 12.0,
                zip_codes: strings(&["11201", "11205", "11215"]),
                neighborhoods: strings(&["Brooklyn Heights", "Fort Greene", "Park Slope"]),
            },
            pricing: ZonePricing {
                base_fee: 6.99,
                free_delivery_threshold: 75.0,
                express_upcharge: 4.99,
            },
            schedule: ZoneSchedule {
                time_slots: strings(&["11:00-13:00", "13:00-15:00", "15:00-17:00"]),
                max_capacity: 30,
                current_load: 0,
            },
            performance: ZonePerformance {
                avg_delivery_time: 52,
                success_rate: 94.8,
                customer_satisfaction: 4.3,
            },
        },
    ]
}
