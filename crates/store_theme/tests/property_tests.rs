use proptest::prelude::*;
use store_theme::storage::COLOR_MODE_KEY;
use store_theme::{
    ColorMode, LocalStorage, ThemeId, ThemeState, default_theme, get_theme_by_id, list_themes,
};

fn theme_id() -> impl Strategy<Value = ThemeId> {
    prop::sample::select(ThemeId::all().to_vec())
}

// =============================================================================
// Registry lookup
// =============================================================================

proptest! {
    #[test]
    fn unknown_ids_resolve_to_default(id in "\\PC{0,40}") {
        prop_assume!(id.parse::<ThemeId>().is_err());
        prop_assert_eq!(get_theme_by_id(&id), default_theme());
    }

    #[test]
    fn known_ids_resolve_to_themselves(id in theme_id()) {
        prop_assert_eq!(get_theme_by_id(id.as_str()).id, id);
    }

    #[test]
    fn every_lookup_lands_in_registry(id in "[a-z-]{0,16}") {
        let descriptor = get_theme_by_id(&id);
        prop_assert!(list_themes().iter().any(|t| t == descriptor));
    }
}

// =============================================================================
// Theme state
// =============================================================================

proptest! {
    #[test]
    fn colour_mode_parity(toggles in 0usize..12) {
        let storage = LocalStorage::in_memory();
        let mut state = ThemeState::load(storage.clone());
        for _ in 0..toggles {
            state.toggle_color_mode();
        }
        let expected = if toggles % 2 == 0 { ColorMode::Light } else { ColorMode::Dark };
        prop_assert_eq!(state.color_mode(), expected);
        if toggles > 0 {
            prop_assert_eq!(storage.get(COLOR_MODE_KEY), Some(expected.as_str().to_string()));
        }
    }

    #[test]
    fn preview_never_changes_active(active in theme_id(), previews in prop::collection::vec(theme_id(), 0..6)) {
        let mut state = ThemeState::load(LocalStorage::in_memory());
        state.set_active_theme(active.as_str());
        state.toggle_preview(true);
        for preview in &previews {
            state.set_preview_theme(preview.as_str());
        }
        prop_assert_eq!(state.active_theme_id(), active.as_str());
        let expected = previews.last().copied().unwrap_or(active);
        prop_assert_eq!(state.effective_theme().id, expected);

        state.toggle_preview(false);
        prop_assert_eq!(state.effective_theme().id, active);
    }
}
