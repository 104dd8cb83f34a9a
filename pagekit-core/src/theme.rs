use std::rc::Rc;

use crate::constants::{DEFAULT_SCHEME, STORAGE_KEY};
use crate::{ColorScheme, InputSource, PreferenceStore, SchemeSurface};

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Keeps the persisted color scheme and the rendered one in step.
pub struct ThemeSelector<S, D>
where
    S: PreferenceStore,
    D: SchemeSurface,
{
    storage: S,
    surface: D,
}

impl<S, D> ThemeSelector<S, D>
where
    S: PreferenceStore,
    D: SchemeSurface,
{
    pub const fn new(storage: S, surface: D) -> Self {
        Self { storage, surface }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn surface(&self) -> &D {
        &self.surface
    }

    /// The persisted scheme, if one is stored and recognised.
    ///
    /// Unrecognised values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub fn saved_preference(&self) -> Result<Option<ColorScheme>, ThemeError> {
        let raw = self
            .storage
            .get_item(STORAGE_KEY)
            .map_err(|e| ThemeError::Storage(e.to_string()))?;
        Ok(raw.and_then(|value| match value.parse() {
            Ok(scheme) => Some(scheme),
            Err(err) => {
                log::warn!("ignoring stored preference: {err}");
                None
            }
        }))
    }

    /// Restore the saved scheme, or the automatic default when none is saved.
    ///
    /// The default is written back so storage and display agree afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if storage or the surface rejects the update.
    pub fn load_initial_preference(&self) -> Result<ColorScheme, ThemeError> {
        let scheme = self.saved_preference()?.unwrap_or(DEFAULT_SCHEME);
        self.surface.select_option(scheme);
        self.apply_preference(scheme)?;
        log::debug!("color scheme restored: {scheme}");
        Ok(scheme)
    }

    /// Render `scheme` and persist it, overwriting any earlier value.
    ///
    /// # Errors
    ///
    /// Returns an error if storage or the surface rejects the update.
    pub fn apply_preference(&self, scheme: ColorScheme) -> Result<(), ThemeError> {
        self.surface
            .set_color_scheme(scheme)
            .map_err(|e| ThemeError::Surface(e.to_string()))?;
        self.storage
            .set_item(STORAGE_KEY, scheme.as_str())
            .map_err(|e| ThemeError::Storage(e.to_string()))
    }

    /// Handle a raw value emitted by the control.
    ///
    /// Values outside the option set are ignored and return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if applying the parsed scheme fails.
    pub fn handle_input(&self, raw: &str) -> Result<Option<ColorScheme>, ThemeError> {
        let Ok(scheme) = raw.parse::<ColorScheme>() else {
            log::warn!("theme control emitted unknown value {raw:?}");
            return Ok(None);
        };
        self.apply_preference(scheme)?;
        Ok(Some(scheme))
    }
}

impl<S, D> ThemeSelector<S, D>
where
    S: PreferenceStore + 'static,
    D: SchemeSurface + 'static,
{
    /// Restore the saved scheme, then follow `control`.
    ///
    /// A failed restore is logged and the control is bound anyway. Returns the
    /// restored scheme when the restore succeeded.
    pub fn activate<C: InputSource>(self: &Rc<Self>, control: &C) -> Option<ColorScheme> {
        let restored = match self.load_initial_preference() {
            Ok(scheme) => Some(scheme),
            Err(err) => {
                log::error!("color scheme not restored: {err}");
                None
            }
        };
        self.bind(control);
        restored
    }

    /// Apply every value `control` emits from now on.
    ///
    /// Failures inside the handler are logged; the handler never panics.
    pub fn bind<C: InputSource>(self: &Rc<Self>, control: &C) {
        let selector = Rc::clone(self);
        control.on_input(Box::new(move |value| {
            if let Err(err) = selector.handle_input(value) {
                log::error!("failed to apply color scheme: {err}");
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryStorage, RecordingSurface, ScriptedControl};

    fn selector(storage: &MemoryStorage) -> ThemeSelector<MemoryStorage, RecordingSurface> {
        ThemeSelector::new(storage.clone(), RecordingSurface::default())
    }

    #[test]
    fn missing_preference_applies_default() {
        let storage = MemoryStorage::default();
        let theme = selector(&storage);
        assert_eq!(theme.load_initial_preference().unwrap(), ColorScheme::Automatic);
        assert_eq!(theme.surface().rendered(), Some(ColorScheme::Automatic));
        assert_eq!(theme.surface().selected(), Some(ColorScheme::Automatic));
        assert_eq!(storage.value(STORAGE_KEY).as_deref(), Some("light dark"));
    }

    #[test]
    fn saved_preference_is_restored() {
        let storage = MemoryStorage::default();
        storage.insert(STORAGE_KEY, "dark");
        let theme = selector(&storage);
        assert_eq!(theme.load_initial_preference().unwrap(), ColorScheme::Dark);
        assert_eq!(theme.surface().rendered(), Some(ColorScheme::Dark));
        assert_eq!(theme.surface().selected(), Some(ColorScheme::Dark));
    }

    #[test]
    fn garbage_in_storage_falls_back_to_default() {
        let storage = MemoryStorage::default();
        storage.insert(STORAGE_KEY, "sepia");
        let theme = selector(&storage);
        assert_eq!(theme.load_initial_preference().unwrap(), ColorScheme::Automatic);
        assert_eq!(storage.value(STORAGE_KEY).as_deref(), Some("light dark"));
    }

    #[test]
    fn apply_overwrites_previous_value() {
        let storage = MemoryStorage::default();
        let theme = selector(&storage);
        theme.apply_preference(ColorScheme::Light).unwrap();
        theme.apply_preference(ColorScheme::Dark).unwrap();
        assert_eq!(storage.value(STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn storage_failure_surfaces_as_error() {
        let storage = MemoryStorage::default();
        storage.fail_writes(true);
        let theme = selector(&storage);
        let err = theme.apply_preference(ColorScheme::Dark).unwrap_err();
        assert!(matches!(err, ThemeError::Storage(_)));
        // The display still updated before the write was attempted.
        assert_eq!(theme.surface().rendered(), Some(ColorScheme::Dark));
    }

    #[test]
    fn unknown_input_is_ignored() {
        let storage = MemoryStorage::default();
        let theme = selector(&storage);
        assert_eq!(theme.handle_input("neon").unwrap(), None);
        assert_eq!(storage.value(STORAGE_KEY), None);
        assert_eq!(theme.surface().rendered(), None);
    }

    #[test]
    fn bound_control_drives_preference() {
        let storage = MemoryStorage::default();
        let theme = Rc::new(selector(&storage));
        let control = ScriptedControl::default();
        theme.bind(&control);

        control.emit("light");
        assert_eq!(storage.value(STORAGE_KEY).as_deref(), Some("light"));
        control.emit("light dark");
        assert_eq!(theme.surface().rendered(), Some(ColorScheme::Automatic));
    }

    #[test]
    fn activate_binds_even_when_storage_rejects_writes() {
        let storage = MemoryStorage::default();
        storage.fail_writes(true);
        let theme = Rc::new(selector(&storage));
        let control = ScriptedControl::default();

        assert_eq!(theme.activate(&control), None);
        assert_eq!(theme.surface().rendered(), Some(ColorScheme::Automatic));

        control.emit("dark");
        assert_eq!(theme.surface().rendered(), Some(ColorScheme::Dark));
        assert_eq!(storage.value(STORAGE_KEY), None);
    }

    #[test]
    fn activate_restores_and_binds() {
        let storage = MemoryStorage::default();
        storage.insert(STORAGE_KEY, "light");
        let theme = Rc::new(selector(&storage));
        let control = ScriptedControl::default();

        assert_eq!(theme.activate(&control), Some(ColorScheme::Light));
        control.emit("dark");
        assert_eq!(storage.value(STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn bound_handler_swallows_storage_errors() {
        let storage = MemoryStorage::default();
        storage.fail_writes(true);
        let theme = Rc::new(selector(&storage));
        let control = ScriptedControl::default();
        theme.bind(&control);
        control.emit("dark");
        assert_eq!(storage.value(STORAGE_KEY), None);
    }
}
