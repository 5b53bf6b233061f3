//! Full-frame smoke tests.
//!
//! Each test draws a complete frame for one route into a test backend and
//! checks that the headline content actually landed on screen:
//!
//! 1. Every route renders without panicking, at normal and tiny sizes.
//! 2. The nav bar and status bar frame every view.
//! 3. Key figures from the dataset are visible on their pages.
//! 4. Unknown paths show the not-found view with the path echoed back.

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use aqar_core::nav::Route;
use aqar_core::registry::MarketData;
use aqar_tui::app::AppState;
use aqar_tui::ui;

fn render_sized(path: &str, width: u16, height: u16) -> String {
    let app = AppState::new(MarketData::riyadh(), path);
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();

    let buf = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}

fn render_path(path: &str) -> String {
    render_sized(path, 120, 40)
}

// ── per-route content ────────────────────────────────────────────────────

#[test]
fn overview_frame_shows_hero_cards_and_attribution() {
    let frame = render_path("/");
    assert!(frame.contains("منصة الرياض العقارية"));
    assert!(frame.contains("متوسط سعر المتر"));
    assert!(frame.contains("2,250 ريال"));
    assert!(frame.contains("↑ +7.2%"));
    assert!(frame.contains("أسعار الأحياء المميزة"));
    assert!(frame.contains("3,100 ريال/متر"));
    assert!(frame.contains("GASTAT"));
    assert!(frame.contains("آخر تحديث: نوفمبر 2025"));
}

#[test]
fn analytics_frame_shows_all_three_charts() {
    let frame = render_path("/analytics");
    assert!(frame.contains("لوحة التحليل المتقدمة"));
    assert!(frame.contains("تطور الأسعار 2020-2025"));
    assert!(frame.contains("مقارنة الأحياء - سعر المتر"));
    assert!(frame.contains("توزيع أنواع العقارات"));
    // Share slices carry their rounded percent in the label.
    assert!(frame.contains("فيلا 45%"));
    assert!(frame.contains("أرض 20%"));
    // Bar labels and x-axis periods.
    assert!(frame.contains("النرجس"));
    assert!(frame.contains("2020"));
    assert!(frame.contains("2025"));
}

#[test]
fn predictions_frame_shows_forecasts_factors_and_risks() {
    let frame = render_path("/predictions");
    assert!(frame.contains("التنبؤات الإقليمية ومؤشرات المخاطر"));
    assert!(frame.contains("شمال الرياض"));
    assert!(frame.contains("+4.5% نمو متوقع سنوياً"));
    assert!(frame.contains("الثقة: عالية"));
    assert!(frame.contains("رؤية 2030"));
    assert!(frame.contains("+20%"));
    assert!(frame.contains("تأثير عالي"));
    assert!(frame.contains("مخاطر يجب مراقبتها"));
    assert!(frame.contains("تقلبات أسعار الفائدة"));
    assert!(frame.contains("ملاحظة منهجية"));
}

#[test]
fn sources_frame_lists_every_source() {
    let frame = render_path("/sources");
    assert!(frame.contains("مصادر البيانات"));
    assert!(frame.contains("الهيئة العامة للإحصاء (GASTAT)"));
    assert!(frame.contains("وزارة الشؤون البلدية (MOMRA)"));
    assert!(frame.contains("منصة سكني (Sakani)"));
    assert!(frame.contains("صندوق التنمية العقارية (REDF)"));
    assert!(frame.contains("آخر تحديث: نوفمبر 2025"));
}

#[test]
fn unknown_path_shows_not_found_with_the_path() {
    let frame = render_path("/old-map");
    assert!(frame.contains("404"));
    assert!(frame.contains("الصفحة غير موجودة"));
    assert!(frame.contains("المسار المطلوب: /old-map"));
    assert!(frame.contains("اضغط 1 للعودة إلى الرئيسية"));
}

// ── shell chrome ─────────────────────────────────────────────────────────

#[test]
fn nav_bar_frames_every_route() {
    for path in ["/", "/analytics", "/predictions", "/sources", "/nope"] {
        let frame = render_path(path);
        assert!(frame.contains("الرياض العقارية"), "brand missing on {path}");
        for route in Route::ALL {
            assert!(
                frame.contains(route.label()),
                "nav label {} missing on {path}",
                route.label()
            );
        }
    }
}

#[test]
fn status_bar_shows_hints_and_location() {
    let frame = render_path("/analytics");
    assert!(frame.contains("خروج"));
    assert!(frame.contains("/analytics"));

    let frame = render_path("/zzz");
    assert!(frame.contains("/zzz"));
    assert!(frame.contains("مسار غير معروف"));
}

// ── resilience ───────────────────────────────────────────────────────────

#[test]
fn tiny_terminal_renders_every_route_without_panicking() {
    for path in ["/", "/analytics", "/predictions", "/sources", "/nope"] {
        for (w, h) in [(10, 5), (30, 12), (60, 18)] {
            render_sized(path, w, h);
        }
    }
}
