use serde::{Deserialize, Serialize};

use crate::shared::list_query::{AttributeValue, Enumerated, ListRecord};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationStatus {
    Active,
    Optimizing,
    Completed,
    Failed,
}

impl Enumerated for OptimizationStatus {
    fn all() -> &'static [Self] {
        &[
            OptimizationStatus::Active,
            OptimizationStatus::Optimizing,
            OptimizationStatus::Completed,
            OptimizationStatus::Failed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            OptimizationStatus::Active => "active",
            OptimizationStatus::Optimizing => "optimizing",
            OptimizationStatus::Completed => "completed",
            OptimizationStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingAlgorithm {
    ShortestPath,
    FastestTime,
    #[default]
    Balanced,
    EcoFriendly,
}

impl Enumerated for RoutingAlgorithm {
    fn all() -> &'static [Self] {
        &[
            RoutingAlgorithm::ShortestPath,
            RoutingAlgorithm::FastestTime,
            RoutingAlgorithm::Balanced,
            RoutingAlgorithm::EcoFriendly,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            RoutingAlgorithm::ShortestPath => "shortest_path",
            RoutingAlgorithm::FastestTime => "fastest_time",
            RoutingAlgorithm::Balanced => "balanced",
            RoutingAlgorithm::EcoFriendly => "eco_friendly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Pending,
    InProgress,
    Completed,
}

impl Enumerated for RouteStatus {
    fn all() -> &'static [Self] {
        &[RouteStatus::Pending, RouteStatus::InProgress, RouteStatus::Completed]
    }

    fn code(&self) -> &'static str {
        match self {
            RouteStatus::Pending => "pending",
            RouteStatus::InProgress => "in_progress",
            RouteStatus::Completed => "completed",
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Эффект оптимизации в процентах
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationPerformance {
    pub distance_reduction: f64,
    pub time_savings: f64,
    pub fuel_efficiency: f64,
    pub success_rate: f64,
}

/// Маршрут одного водителя
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedRoute {
    pub id: String,
    pub driver: String,
    pub stops: u32,
    /// Минуты
    pub estimated_time: u32,
    /// Мили
    pub distance: f64,
    pub status: RouteStatus,
}

/// Прогон оптимизации с набором маршрутов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptimization {
    pub id: String,
    pub name: String,
    pub status: OptimizationStatus,
    pub algorithm: RoutingAlgorithm,
    pub performance: OptimizationPerformance,
    pub routes: Vec<PlannedRoute>,
}

impl RouteOptimization {
    pub fn routes_in(&self, status: RouteStatus) -> usize {
        self.routes.iter().filter(|r| r.status == status).count()
    }
}

impl ListRecord for RouteOptimization {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.routes.iter().map(|r| r.driver.as_str()));
        fields
    }

    fn attribute(&self, field: &str) -> AttributeValue<'_> {
        match field {
            "status" => AttributeValue::Single(self.status.code()),
            "algorithm" => AttributeValue::Single(self.algorithm.code()),
            _ => AttributeValue::Missing,
        }
    }
}
