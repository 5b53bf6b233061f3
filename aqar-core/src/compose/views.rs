//! Per-route view composition.
//!
//! One function per page, each a pure selection over `MarketData`, plus
//! the total `compose` entry point the shell calls every frame. Page
//! headings live here; captions inside a card template belong to the
//! widget that draws it.

use serde::{Deserialize, Serialize};

use super::bars::{compose_bars, BarChartSpec};
use super::line::{compose_line, LineChartSpec};
use super::share::{compose_shares, ShareChartSpec};
use crate::domain::{ForecastRegion, ImpactFactor, Kpi, NeighborhoodCard, RiskItem};
use crate::nav::Route;
use crate::registry::MarketData;

/// Display names for the price-trend series keys.
const PRICE_TREND_LABELS: [(&str, &str); 3] =
    [("villa", "فيلا"), ("apartment", "شقة"), ("land", "أرض")];

/// Landing page: hero copy, KPI cards, featured tiles, attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewView {
    pub hero_title: String,
    pub hero_tagline: Vec<String>,
    pub kpis: Vec<Kpi>,
    pub neighborhoods_heading: String,
    pub neighborhoods: Vec<NeighborhoodCard>,
    pub sources_heading: String,
    pub sources: Vec<String>,
    pub last_updated: String,
}

/// Charts page: trend lines, neighborhood bars, property-type shares.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsView {
    pub title: String,
    pub price_trend: LineChartSpec,
    pub neighborhoods: BarChartSpec,
    pub property_types: ShareChartSpec,
}

/// Forecasts page: regional cards, factor table, risk watchlist, notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionsView {
    pub title: String,
    pub forecasts: Vec<ForecastRegion>,
    pub factors_heading: String,
    pub factors: Vec<ImpactFactor>,
    pub risks_heading: String,
    pub risks: Vec<RiskItem>,
    pub advisory_tip: String,
    pub methodology_heading: String,
    pub methodology_note: String,
}

/// Attribution page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesView {
    pub title: String,
    pub sources: Vec<String>,
    pub last_updated: String,
}

/// Fallback for unknown paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundView {
    pub requested_path: String,
}

/// The composed render tree for one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ViewSpec {
    Overview(OverviewView),
    Analytics(AnalyticsView),
    Predictions(PredictionsView),
    Sources(SourcesView),
    NotFound(NotFoundView),
}

impl ViewSpec {
    /// The route this view belongs to; `None` for NotFound.
    pub fn route(&self) -> Option<Route> {
        match self {
            ViewSpec::Overview(_) => Some(Route::Overview),
            ViewSpec::Analytics(_) => Some(Route::Analytics),
            ViewSpec::Predictions(_) => Some(Route::Predictions),
            ViewSpec::Sources(_) => Some(Route::Sources),
            ViewSpec::NotFound(_) => None,
        }
    }
}

/// Compose the view for a path. Total: unknown paths yield NotFound.
pub fn compose(data: &MarketData, path: &str) -> ViewSpec {
    match Route::from_path(path) {
        Some(Route::Overview) => ViewSpec::Overview(compose_overview(data)),
        Some(Route::Analytics) => ViewSpec::Analytics(compose_analytics(data)),
        Some(Route::Predictions) => ViewSpec::Predictions(compose_predictions(data)),
        Some(Route::Sources) => ViewSpec::Sources(compose_sources(data)),
        None => ViewSpec::NotFound(NotFoundView { requested_path: path.to_string() }),
    }
}

pub fn compose_overview(data: &MarketData) -> OverviewView {
    OverviewView {
        hero_title: data.hero_title.clone(),
        hero_tagline: data.hero_tagline.clone(),
        kpis: data.kpis.clone(),
        neighborhoods_heading: "أسعار الأحياء المميزة".to_string(),
        neighborhoods: data.featured_neighborhoods.clone(),
        sources_heading: "مصادر البيانات".to_string(),
        sources: data.data_sources.clone(),
        last_updated: data.last_updated.clone(),
    }
}

pub fn compose_analytics(data: &MarketData) -> AnalyticsView {
    AnalyticsView {
        title: "لوحة التحليل المتقدمة".to_string(),
        price_trend: compose_line("تطور الأسعار 2020-2025", &data.price_trend, &PRICE_TREND_LABELS),
        neighborhoods: compose_bars("مقارنة الأحياء - سعر المتر", &data.neighborhood_prices),
        property_types: compose_shares("توزيع أنواع العقارات", &data.property_type_shares),
    }
}

pub fn compose_predictions(data: &MarketData) -> PredictionsView {
    PredictionsView {
        title: "التنبؤات الإقليمية ومؤشرات المخاطر".to_string(),
        forecasts: data.regional_forecasts.clone(),
        factors_heading: "العوامل الاقتصادية والسياسية المؤثرة".to_string(),
        factors: data.impact_factors.clone(),
        risks_heading: "مخاطر يجب مراقبتها".to_string(),
        risks: data.risks.clone(),
        advisory_tip: data.advisory_tip.clone(),
        methodology_heading: "ملاحظة منهجية".to_string(),
        methodology_note: data.methodology_note.clone(),
    }
}

pub fn compose_sources(data: &MarketData) -> SourcesView {
    SourcesView {
        title: "مصادر البيانات".to_string(),
        sources: data.data_sources.clone(),
        last_updated: data.last_updated.clone(),
    }
}
