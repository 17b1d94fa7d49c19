use contracts::domain::a013_route_optimization::aggregate::{
    RouteOptimization, RouteStatus, RoutingAlgorithm,
};
use contracts::shared::list_query::Enumerated;

use super::repository;
use crate::shared::list_screen::ListScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSummary {
    pub total_routes: usize,
    /// Маршруты в пути
    pub active_routes: usize,
    /// Средняя экономия времени, %, округленная; 0 без прогонов
    pub avg_time_savings: u32,
    pub avg_distance_reduction: u32,
}

/// Настройки панели оптимизации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizationSettings {
    pub algorithm: RoutingAlgorithm,
    pub auto_optimization: bool,
    pub traffic_integration: bool,
    pub eco_friendly: bool,
}

impl Default for OptimizationSettings {
    fn default() -> Self {
        Self {
            algorithm: RoutingAlgorithm::Balanced,
            auto_optimization: true,
            traffic_integration: true,
            eco_friendly: false,
        }
    }
}

/// Оптимизация маршрутов доставки
pub struct RouteOptimizationService {
    screen: ListScreen<RouteOptimization>,
    settings: OptimizationSettings,
}

impl RouteOptimizationService {
    pub fn new(optimizations: Vec<RouteOptimization>) -> Self {
        Self {
            screen: ListScreen::new("route optimization", optimizations),
            settings: OptimizationSettings::default(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(repository::seed())
    }

    pub fn screen(&self) -> &ListScreen<RouteOptimization> {
        &self.screen
    }

    pub fn settings(&self) -> &OptimizationSettings {
        &self.settings
    }

    /// Поиск по названию прогона и водителям
    pub fn set_search(&mut self, search: &str) {
        self.screen.set_search(search);
    }

    pub fn set_status_filter(&mut self, raw: &str) {
        self.screen.set_filter("status", raw);
    }

    /// Неизвестный код алгоритма не меняет настройку
    pub fn set_algorithm(&mut self, raw: &str) -> Option<RoutingAlgorithm> {
        let algorithm = RoutingAlgorithm::from_code(raw.trim())?;
        self.settings.algorithm = algorithm;
        tracing::info!(algorithm = algorithm.code(), "Routing algorithm selected");
        Some(algorithm)
    }

    pub fn set_auto_optimization(&mut self, enabled: bool) {
        self.settings.auto_optimization = enabled;
    }

    pub fn set_traffic_integration(&mut self, enabled: bool) {
        self.settings.traffic_integration = enabled;
    }

    pub fn set_eco_friendly(&mut self, enabled: bool) {
        self.settings.eco_friendly = enabled;
    }

    pub fn summary(&self) -> RouteSummary {
        let runs = self.screen.records();
        let average = |value: fn(&RouteOptimization) -> f64| -> u32 {
            if runs.is_empty() {
                0
            } else {
                (runs.iter().map(value).sum::<f64>() / runs.len() as f64).round() as u32
            }
        };
        RouteSummary {
            total_routes: runs.iter().map(|r| r.routes.len()).sum(),
            active_routes: runs.iter().map(|r| r.routes_in(RouteStatus::InProgress)).sum(),
            avg_time_savings: average(|r| r.performance.time_savings),
            avg_distance_reduction: average(|r| r.performance.distance_reduction),
        }
    }
}
