//! The dataset registry — every figure the dashboard shows.
//!
//! `MarketData` holds the fixed, named datasets as plain public fields:
//! - Price trend 2020-2025 (villa / apartment / land, SAR per m²)
//! - Neighborhood price comparison and property-type shares
//! - KPI cards and featured-neighborhood tiles
//! - Regional forecasts, impact factors, risk watchlist
//! - Attribution and page copy
//!
//! All values are illustrative literals. There is no ingestion, refresh
//! or mutation path; a dataset a view needs that is not a field here is
//! a compile-time error at the access site.

use serde::{Deserialize, Serialize};

use crate::domain::{
    CategoryValue, ColorToken, Confidence, ForecastRegion, IconRef, Impact, ImpactFactor, Kpi,
    NeighborhoodCard, RiskItem, TimeSeriesPoint,
};

/// The read-only dataset registry. Construct once, pass by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketData {
    /// SAR per m² per property type, yearly.
    pub price_trend: Vec<TimeSeriesPoint>,
    /// SAR per m² by neighborhood, highest first.
    pub neighborhood_prices: Vec<CategoryValue>,
    /// Market share by property type, in percent units.
    pub property_type_shares: Vec<CategoryValue>,
    pub kpis: Vec<Kpi>,
    pub featured_neighborhoods: Vec<NeighborhoodCard>,
    pub regional_forecasts: Vec<ForecastRegion>,
    pub impact_factors: Vec<ImpactFactor>,
    pub risks: Vec<RiskItem>,
    /// Attribution entries shown on the overview footer and sources page.
    pub data_sources: Vec<String>,
    /// Display string, e.g. "نوفمبر 2025".
    pub last_updated: String,
    pub brand: String,
    pub hero_title: String,
    pub hero_tagline: Vec<String>,
    pub advisory_tip: String,
    pub methodology_note: String,
}

impl MarketData {
    /// The canonical Riyadh dataset.
    pub fn riyadh() -> Self {
        Self {
            price_trend: price_trend(),
            neighborhood_prices: neighborhood_prices(),
            property_type_shares: property_type_shares(),
            kpis: kpis(),
            featured_neighborhoods: featured_neighborhoods(),
            regional_forecasts: regional_forecasts(),
            impact_factors: impact_factors(),
            risks: risks(),
            data_sources: vec![
                "الهيئة العامة للإحصاء (GASTAT)".to_string(),
                "وزارة الشؤون البلدية (MOMRA)".to_string(),
                "منصة سكني (Sakani)".to_string(),
                "صندوق التنمية العقارية (REDF)".to_string(),
            ],
            last_updated: "نوفمبر 2025".to_string(),
            brand: "الرياض العقارية".to_string(),
            hero_title: "منصة الرياض العقارية".to_string(),
            hero_tagline: vec![
                "تحليلات ذكية وتنبؤات دقيقة لسوق العقارات في الرياض".to_string(),
                "توفر لك أدوات متقدمة لاتخاذ قرارات استثمارية مدروسة".to_string(),
            ],
            advisory_tip: "نصيحة: دمج هذه التنبؤات مع بيانات العرض والطلب في الوقت الحقيقي \
                           سيحسّن دقة التوصيات الاستثمارية."
                .to_string(),
            methodology_note: "التنبؤات مبنية على تحليل تاريخي لأسعار السوق والعوامل المؤثرة \
                               العامة. هذه التوقعات ليست استشارة استثمارية ويجب دائماً التحقق \
                               منها مع مصادر متعددة وبيانات مُحدثة قبل اتخاذ قرارات مالية."
                .to_string(),
        }
    }
}

impl Default for MarketData {
    fn default() -> Self {
        Self::riyadh()
    }
}

fn price_trend() -> Vec<TimeSeriesPoint> {
    vec![
        TimeSeriesPoint::new("2020", &[("villa", 1800.0), ("apartment", 1200.0), ("land", 900.0)]),
        TimeSeriesPoint::new("2021", &[("villa", 1950.0), ("apartment", 1300.0), ("land", 1000.0)]),
        TimeSeriesPoint::new("2022", &[("villa", 2100.0), ("apartment", 1450.0), ("land", 1150.0)]),
        TimeSeriesPoint::new("2023", &[("villa", 2300.0), ("apartment", 1600.0), ("land", 1300.0)]),
        TimeSeriesPoint::new("2024", &[("villa", 2500.0), ("apartment", 1800.0), ("land", 1500.0)]),
        TimeSeriesPoint::new("2025", &[("villa", 2700.0), ("apartment", 2000.0), ("land", 1700.0)]),
    ]
}

fn neighborhood_prices() -> Vec<CategoryValue> {
    vec![
        CategoryValue::new("النرجس", 3100.0),
        CategoryValue::new("العليا", 2850.0),
        CategoryValue::new("الياسمين", 2500.0),
        CategoryValue::new("غرناطة", 2200.0),
        CategoryValue::new("الربوة", 1950.0),
    ]
}

fn property_type_shares() -> Vec<CategoryValue> {
    vec![
        CategoryValue::new("فيلا", 45.0),
        CategoryValue::new("شقة", 35.0),
        CategoryValue::new("أرض", 20.0),
    ]
}

fn kpis() -> Vec<Kpi> {
    vec![
        Kpi {
            title: "متوسط سعر المتر".to_string(),
            value: "2,250 ريال".to_string(),
            change: Some("+7.2%".to_string()),
            icon: IconRef::Home,
            color: ColorToken::Blue,
        },
        Kpi {
            title: "إجمالي العقارات".to_string(),
            value: "1,245,890".to_string(),
            change: None,
            icon: IconRef::Building,
            color: ColorToken::Indigo,
        },
        Kpi {
            title: "معدل العائد ROI".to_string(),
            value: "8.2%".to_string(),
            change: None,
            icon: IconRef::TrendingUp,
            color: ColorToken::Emerald,
        },
        Kpi {
            title: "مستوى الثقة".to_string(),
            value: "87%".to_string(),
            change: None,
            icon: IconRef::Target,
            color: ColorToken::Violet,
        },
    ]
}

fn featured_neighborhoods() -> Vec<NeighborhoodCard> {
    vec![
        NeighborhoodCard {
            name: "النرجس".to_string(),
            price: "3,100".to_string(),
            change: "+9%".to_string(),
            color: ColorToken::Emerald,
        },
        NeighborhoodCard {
            name: "العليا".to_string(),
            price: "2,850".to_string(),
            change: "+8%".to_string(),
            color: ColorToken::Blue,
        },
        NeighborhoodCard {
            name: "الياسمين".to_string(),
            price: "2,500".to_string(),
            change: "+7%".to_string(),
            color: ColorToken::Violet,
        },
        NeighborhoodCard {
            name: "غرناطة".to_string(),
            price: "2,200".to_string(),
            change: "+6%".to_string(),
            color: ColorToken::Orange,
        },
    ]
}

fn regional_forecasts() -> Vec<ForecastRegion> {
    vec![
        ForecastRegion {
            region: "شمال الرياض".to_string(),
            forecast: "+4.5%".to_string(),
            confidence: Confidence::High,
            color: ColorToken::Emerald,
        },
        ForecastRegion {
            region: "شرق الرياض".to_string(),
            forecast: "+3.2%".to_string(),
            confidence: Confidence::Medium,
            color: ColorToken::Blue,
        },
        ForecastRegion {
            region: "غرب الرياض".to_string(),
            forecast: "+3.8%".to_string(),
            confidence: Confidence::High,
            color: ColorToken::Violet,
        },
        ForecastRegion {
            region: "جنوب الرياض".to_string(),
            forecast: "+2.9%".to_string(),
            confidence: Confidence::Medium,
            color: ColorToken::Orange,
        },
    ]
}

fn impact_factors() -> Vec<ImpactFactor> {
    vec![
        ImpactFactor {
            name: "رؤية 2030".to_string(),
            impact: "+20%".to_string(),
            level: Impact::High,
            color: ColorToken::Emerald,
            icon: IconRef::Lightbulb,
        },
        ImpactFactor {
            name: "مشروع مترو الرياض".to_string(),
            impact: "+15%".to_string(),
            level: Impact::High,
            color: ColorToken::Blue,
            icon: IconRef::TrendingUp,
        },
        ImpactFactor {
            name: "التضخم وأسعار الفائدة".to_string(),
            impact: "-5%".to_string(),
            level: Impact::Medium,
            color: ColorToken::Amber,
            icon: IconRef::Info,
        },
        ImpactFactor {
            name: "العرض والطلب".to_string(),
            impact: "+8%".to_string(),
            level: Impact::High,
            color: ColorToken::Violet,
            icon: IconRef::TrendingUp,
        },
        ImpactFactor {
            name: "تشريعات الإسكان".to_string(),
            impact: "+3%".to_string(),
            level: Impact::Low,
            color: ColorToken::Gray,
            icon: IconRef::Info,
        },
    ]
}

fn risks() -> Vec<RiskItem> {
    vec![
        RiskItem {
            title: "تقلبات أسعار الفائدة".to_string(),
            description: "ارتفاع مفاجئ في أسعار الفائدة قد يضغط على الطلب العقاري.".to_string(),
        },
        RiskItem {
            title: "تأخيرات مشروعات البنية التحتية".to_string(),
            description: "تأجيل مشاريع رئيسية يؤثر على توقعات نمو المناطق المتأثرة.".to_string(),
        },
    ]
}
