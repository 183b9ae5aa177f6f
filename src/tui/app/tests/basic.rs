use super::*;
use crate::config::TuiConfig;

#[test]
fn test_new_app_starts_on_first_card() {
    let app = seeded_app();
    assert!(!app.should_quit);
    assert_eq!(app.tick_count, 0);
    assert_eq!(app.selected, 0);
    assert_eq!(app.focus, Focus::Dashboard);
    assert!(app.modal.is_none());
    assert!(app.status_message.is_none());
    assert_eq!(app.store().revision(), 0);
}

#[test]
fn test_settings_from_config_defaults() {
    let settings = TuiSettings::from_config(&TuiConfig::default()).expect("defaults parse");
    assert_eq!(settings, TuiSettings::default());
}

#[test]
fn test_settings_from_config_rejects_bad_duration() {
    let config = TuiConfig {
        tick_rate: "fast".to_string(),
        ..TuiConfig::default()
    };
    assert!(TuiSettings::from_config(&config).is_err());
}

#[test]
fn test_settings_from_config_clamps_columns() {
    let config = TuiConfig {
        columns: 0,
        ..TuiConfig::default()
    };
    let settings = TuiSettings::from_config(&config).expect("parses");
    assert_eq!(settings.columns, 1);
}

#[test]
fn test_slots_list_widgets_then_add_card_per_category() {
    let app = seeded_app();
    let slots = app.slots();
    assert_eq!(slots.len(), 9);
    assert_eq!(
        slots[0],
        Slot::Widget {
            category_id: "cspm-executive".to_string(),
            widget_id: "widget-1".to_string(),
        }
    );
    assert_eq!(
        slots[2],
        Slot::AddCard {
            category_id: "cspm-executive".to_string()
        }
    );
    assert_eq!(slots[8].category_id(), "registry-scan");
}

#[test]
fn test_slots_follow_search_filter() {
    let app = seeded_app().with_search("vulnerab");
    let slots = app.slots();
    // Three add cards plus widget-5
    assert_eq!(slots.len(), 4);
    assert!(slots.contains(&Slot::Widget {
        category_id: "registry-scan".to_string(),
        widget_id: "widget-5".to_string(),
    }));
}

#[test]
fn test_view_does_not_touch_store() {
    let app = seeded_app().with_search("nothing matches this");
    assert!(app.view().categories.iter().all(|c| c.widgets.is_empty()));
    assert_eq!(app.store().state().widget_count(), 6);
}

#[test]
fn test_select_next_and_previous_clamp() {
    let mut app = seeded_app();
    app.select_previous();
    assert_eq!(app.selected, 0);
    for _ in 0..20 {
        app.select_next();
    }
    assert_eq!(app.selected, 8);
    app.select_previous();
    assert_eq!(app.selected, 7);
}

#[test]
fn test_clamp_selection_after_filter_narrows() {
    let mut app = seeded_app();
    app.selected = 8;
    app.search = "vulnerab".to_string();
    app.clamp_selection();
    assert_eq!(app.selected, 3);
}

#[test]
fn test_status_message_expires() {
    let mut app = seeded_app();
    app.settings.status_timeout = Duration::ZERO;
    app.set_status("hello");
    assert!(app.expire_status_message());
    assert!(app.status_message.is_none());
    assert!(!app.expire_status_message());
}

#[test]
fn test_status_message_kept_until_timeout() {
    let mut app = seeded_app();
    app.set_status("hello");
    assert!(!app.expire_status_message());
    assert_eq!(status(&app), Some("hello"));
}

#[test]
fn test_open_modal_preselects_tab_and_draft_category() {
    let mut app = seeded_app();
    app.open_modal(Some("registry-scan"));
    let modal = app.modal.as_ref().expect("modal open");
    assert_eq!(modal.tab, crate::catalog::CatalogTab::Image);
    assert_eq!(modal.mode, ModalMode::Catalog);
    assert_eq!(app.draft.category_id, "registry-scan");
}

#[test]
fn test_open_modal_keeps_existing_draft_category() {
    let mut app = seeded_app();
    app.draft.category_id = "cwpp-dashboard".to_string();
    app.open_modal(Some("cspm-executive"));
    assert_eq!(app.draft.category_id, "cwpp-dashboard");
}

#[test]
fn test_open_modal_without_category_uses_first_tab() {
    let mut app = seeded_app();
    app.open_modal(None);
    assert_eq!(
        app.modal.as_ref().map(|m| m.tab),
        Some(crate::catalog::CatalogTab::Cspm)
    );
    assert!(app.draft.category_id.is_empty());
}

#[test]
fn test_cycle_draft_category_wraps_through_empty_option() {
    let mut app = seeded_app();
    app.cycle_draft_category(true);
    assert_eq!(app.draft.category_id, "cspm-executive");
    assert_eq!(app.draft_category_name(), Some("CSPM Executive Dashboard"));
    app.cycle_draft_category(false);
    assert!(app.draft.category_id.is_empty());
    assert_eq!(app.draft_category_name(), None);
    app.cycle_draft_category(false);
    assert_eq!(app.draft.category_id, "registry-scan");
}

#[test]
fn test_modal_entry_count_per_tab() {
    let mut app = seeded_app();
    assert_eq!(app.modal_entry_count(), 0);
    app.open_modal(None);
    assert_eq!(app.modal_entry_count(), 2);
    if let Some(modal) = app.modal.as_mut() {
        modal.set_tab(crate::catalog::CatalogTab::Ticket);
    }
    assert_eq!(app.modal_entry_count(), 0);
}

#[test]
fn test_debug_output_names_app_fields() {
    let app = seeded_app();
    let debug = format!("{:?}", app);
    assert!(debug.contains("App"));
    assert!(debug.contains("selected"));
    assert!(debug.contains("store"));
}
