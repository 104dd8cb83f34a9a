use std::rc::Rc;

use anyhow::{Context, Result, ensure};
use pagekit_core::constants::STORAGE_KEY;
use pagekit_core::memory::{MemoryStorage, RecordingSurface, ScriptedControl};
use pagekit_core::{ColorScheme, ThemeError, ThemeSelector};

type MemorySelector = ThemeSelector<MemoryStorage, RecordingSurface>;

fn load_page(storage: &MemoryStorage) -> Result<(Rc<MemorySelector>, ScriptedControl)> {
    let selector = Rc::new(ThemeSelector::new(
        storage.clone(),
        RecordingSurface::default(),
    ));
    selector
        .load_initial_preference()
        .context("initial preference load")?;
    let control = ScriptedControl::default();
    selector.bind(&control);
    Ok((selector, control))
}

pub fn default_idempotent() -> Result<()> {
    let storage = MemoryStorage::default();
    for load in 1..=2 {
        let (selector, _control) = load_page(&storage)?;
        ensure!(
            selector.surface().rendered() == Some(ColorScheme::Automatic),
            "load {load} rendered {:?}",
            selector.surface().rendered()
        );
    }
    Ok(())
}

pub fn round_trip() -> Result<()> {
    for scheme in ColorScheme::ALL {
        let storage = MemoryStorage::default();
        let (_selector, control) = load_page(&storage)?;
        control.emit(scheme.as_str());

        let (reloaded, _control) = load_page(&storage)?;
        let stored = storage.value(STORAGE_KEY);
        ensure!(
            stored.as_deref() == Some(scheme.as_str()),
            "stored {stored:?} after choosing {scheme}"
        );
        ensure!(
            reloaded.surface().rendered() == Some(scheme),
            "reload rendered {:?}, expected {scheme}",
            reloaded.surface().rendered()
        );
        ensure!(
            reloaded.surface().selected() == Some(scheme),
            "reload selected {:?}, expected {scheme}",
            reloaded.surface().selected()
        );
    }
    Ok(())
}

pub fn last_write_wins() -> Result<()> {
    let storage = MemoryStorage::default();
    let (selector, _control) = load_page(&storage)?;
    selector.apply_preference(ColorScheme::Light)?;
    selector.apply_preference(ColorScheme::Dark)?;
    let stored = storage.value(STORAGE_KEY);
    ensure!(stored.as_deref() == Some("dark"), "stored {stored:?}");
    Ok(())
}

pub fn storage_failure() -> Result<()> {
    let storage = MemoryStorage::default();
    storage.fail_writes(true);
    let selector = ThemeSelector::new(storage.clone(), RecordingSurface::default());
    let outcome = selector.apply_preference(ColorScheme::Dark);
    ensure!(
        matches!(outcome, Err(ThemeError::Storage(_))),
        "expected storage error, got {outcome:?}"
    );
    ensure!(storage.is_empty(), "rejected write left data behind");
    Ok(())
}
