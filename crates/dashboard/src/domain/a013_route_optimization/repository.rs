use contracts::domain::a013_route_optimization::aggregate::{
    OptimizationPerformance, OptimizationStatus, PlannedRoute, RouteOptimization, RouteStatus,
    RoutingAlgorithm,
};

fn route(
    id: &str,
    driver: &str,
    stops: u32,
    estimated_time: u32,
    distance: f64,
    status: RouteStatus,
) -> PlannedRoute {
    PlannedRoute {
        id: id.into(),
        driver: driver.into(),
        stops,
        estimated_time,
        distance,
        status,
    }
}

/// Прогоны оптимизации маршрутов на сегодня
pub fn seed() -> Vec<RouteOptimization> {
    vec![
        RouteOptimization {
            id: "opt-1".into(),
            name: "Morning Delivery Routes".into(),
            status: OptimizationStatus::Active,
            algorithm: RoutingAlgorithm::Balanced,
            performance: OptimizationPerformance {
                distance_reduction: 23.5,
                time_savings: 18.2,
                fuel_efficiency: 15.8,
                success_rate: 94.2,
            },
            routes: vec![
                route("route-1", "John Smith", 12, 180, 45.2, RouteStatus::InProgress),
                route("route-2", "Sarah Johnson", 8, 120, 32.1, RouteStatus::Completed),
                route("route-3", "Mike Davis", 15, 210, 52.8, RouteStatus::Pending),
            ],
        },
        RouteOptimization {
            id: "opt-2".into(),
            name: "Afternoon Express Routes".into(),
            status: OptimizationStatus::Optimizing,
            algorithm: RoutingAlgorithm::FastestTime,
            performance: OptimizationPerformance {
                distance_reduction: 31.2,
                time_savings: 25.7,
                fuel_efficiency: 12.3,
                success_rate: 96.8,
            },
            routes: vec![
                route("route-4", "Lisa Wilson", 6, 90, 28.5, RouteStatus::Pending),
                route("route-5", "Tom Brown", 9, 135, 38.7, RouteStatus::Pending),
            ],
        },
    ]
}
