//! Boot sequence against an in-memory copy of the landing page markup.

use invenscan_landing::activity::{ACTIVITY_ENTRIES, activity_lines, render_activity};
use invenscan_landing::memory::NodeId;
use invenscan_landing::{LandingError, MemoryPage, Page, PageConfig, boot};
use pretty_assertions::assert_eq;

struct Markup {
    page: MemoryPage,
    nav: NodeId,
    hamburger: NodeId,
    log: NodeId,
    bar: NodeId,
    demo: NodeId,
    hero_cta: NodeId,
    pricing_cta: NodeId,
    broken_cta: NodeId,
}

fn landing_markup() -> Markup {
    let page = MemoryPage::new();
    let body = MemoryPage::BODY;

    let nav = page.append_element(body, "nav");
    page.set_attribute(nav, "class", "nav");
    let hamburger = page.append_element(nav, "button");
    page.set_attribute(hamburger, "class", "hamburger");

    let hero = page.append_element(body, "section");
    page.set_attribute(hero, "id", "hero");
    let hero_cta = page.append_element(hero, "button");
    page.set_attribute(hero_cta, "data-scroll", "#demo");
    let pricing_cta = page.append_element(hero, "a");
    page.set_attribute(pricing_cta, "data-scroll", "#pricing");
    let broken_cta = page.append_element(hero, "a");
    page.set_attribute(broken_cta, "data-scroll", "#does-not-exist");

    let demo = page.append_element(body, "section");
    page.set_attribute(demo, "id", "demo");
    let log = page.append_element(demo, "div");
    page.set_attribute(log, "id", "activity-log");
    let placeholder = page.append_element(log, "p");
    page.set_text(placeholder, "Waiting for invoices...");
    let track = page.append_element(demo, "div");
    page.set_attribute(track, "class", "accuracy-track");
    let bar = page.append_element(track, "div");
    page.set_attribute(bar, "id", "accuracy-bar");

    Markup {
        page,
        nav,
        hamburger,
        log,
        bar,
        demo,
        hero_cta,
        pricing_cta,
        broken_cta,
    }
}

#[test]
fn boot_renders_log_and_bar() {
    let m = landing_markup();
    boot(&m.page, &PageConfig::default()).unwrap();

    assert_eq!(
        m.page.child_texts(m.log),
        vec![
            "1. Invoice captured via camera upload",
            "2. AI extracts items, quantities, and prices",
            "3. Clover inventory updates automatically",
            "4. Operators review only exceptions",
        ]
    );
    assert_eq!(m.page.style(m.bar, "width").as_deref(), Some("85%"));
}

#[test]
fn rerender_discards_foreign_children() {
    let m = landing_markup();
    boot(&m.page, &PageConfig::default()).unwrap();

    let extra = m.page.append_element(m.log, "span");
    m.page.set_text(extra, "injected");
    assert_eq!(m.page.children(m.log).len(), 5);

    render_activity(&m.page, &m.log, &ACTIVITY_ENTRIES).unwrap();
    render_activity(&m.page, &m.log, &ACTIVITY_ENTRIES).unwrap();
    assert_eq!(m.page.child_texts(m.log), activity_lines(&ACTIVITY_ENTRIES));
    assert!(!m.page.is_attached(extra));
}

#[test]
fn scroll_triggers_are_independent() {
    let m = landing_markup();
    let pricing = m.page.append_element(MemoryPage::BODY, "section");
    m.page.set_attribute(pricing, "id", "pricing");

    let landing = boot(&m.page, &PageConfig::default()).unwrap();
    assert_eq!(landing.scroll_bindings.len(), 3);

    m.page.click(m.hero_cta);
    assert_eq!(m.page.scroll_count(m.demo), 1);
    assert_eq!(m.page.scroll_count(pricing), 0);

    m.page.click(m.pricing_cta);
    m.page.click(m.pricing_cta);
    assert_eq!(m.page.scroll_count(m.demo), 1);
    assert_eq!(m.page.scroll_count(pricing), 2);

    // Missing target: nothing scrolls, nothing panics
    m.page.click(m.broken_cta);
    assert_eq!(m.page.scroll_count(m.demo), 1);
    assert_eq!(m.page.scroll_count(pricing), 2);
}

#[test]
fn triggers_added_after_boot_stay_unbound() {
    let m = landing_markup();
    boot(&m.page, &PageConfig::default()).unwrap();

    let late = m.page.append_element(MemoryPage::BODY, "button");
    m.page.set_attribute(late, "data-scroll", "#demo");
    m.page.click(late);
    assert_eq!(m.page.scroll_count(m.demo), 0);
}

#[test]
fn hamburger_toggles_nav() {
    let m = landing_markup();
    let landing = boot(&m.page, &PageConfig::default()).unwrap();
    assert!(!m.page.has_class(m.nav, "open"));

    m.page.click(m.hamburger);
    assert!(m.page.has_class(m.nav, "open"));
    assert!(landing.nav.is_open());

    m.page.click(m.hamburger);
    assert!(!m.page.has_class(m.nav, "open"));
    assert!(!landing.nav.is_open());
}

#[test]
fn missing_activity_log_fails_fast() {
    let page = MemoryPage::new();
    let nav = page.append_element(MemoryPage::BODY, "nav");
    page.set_attribute(nav, "class", "nav");
    let hamburger = page.append_element(nav, "button");
    page.set_attribute(hamburger, "class", "hamburger");

    let err = boot(&page, &PageConfig::default()).err();
    assert_eq!(
        err,
        Some(LandingError::missing("activity log", "#activity-log"))
    );

    // Boot stopped before binding the toggle
    page.click(hamburger);
    assert!(!page.has_class(nav, "open"));
}

#[test]
fn missing_toggle_is_reported_after_earlier_steps_ran() {
    let m = landing_markup();
    let config = PageConfig::default().with_toggle_selector(".menu-button");

    let err = boot(&m.page, &config).err();
    assert_eq!(err, Some(LandingError::missing("nav toggle", ".menu-button")));
    assert_eq!(m.page.children(m.log).len(), 4);
    assert_eq!(m.page.style(m.bar, "width").as_deref(), Some("85%"));
}

#[test]
fn custom_identifiers_are_honoured() {
    let page = MemoryPage::new();
    let nav = page.append_element(MemoryPage::BODY, "header");
    page.set_attribute(nav, "class", "topbar");
    let burger = page.append_element(nav, "button");
    page.set_attribute(burger, "id", "burger");
    let log = page.append_element(MemoryPage::BODY, "ol");
    page.set_attribute(log, "id", "steps");
    let bar = page.append_element(MemoryPage::BODY, "div");
    page.set_attribute(bar, "id", "meter");

    static ENTRIES: [&str; 2] = ["Upload", "Review"];
    let config = PageConfig::default()
        .with_activity_log_id("steps")
        .with_accuracy_bar_id("meter")
        .with_nav_selector(".topbar")
        .with_toggle_selector("#burger")
        .with_nav_open_class("is-open")
        .with_accuracy_percent(92)
        .with_entries(&ENTRIES);

    boot(&page, &config).unwrap();
    assert_eq!(page.child_texts(log), vec!["1. Upload", "2. Review"]);
    assert_eq!(page.style(bar, "width").as_deref(), Some("92%"));

    page.click(burger);
    assert!(page.has_class(nav, "is-open"));
    assert!(page.query_selector(".topbar").unwrap().is_some());
}

#[test]
fn out_of_range_accuracy_is_rejected_before_rendering() {
    let m = landing_markup();
    let config = PageConfig::default().with_accuracy_percent(140);

    let err = boot(&m.page, &config).err();
    assert_eq!(err, Some(LandingError::InvalidAccuracy(140)));
    assert_eq!(m.page.child_texts(m.log), vec!["Waiting for invoices..."]);
}
