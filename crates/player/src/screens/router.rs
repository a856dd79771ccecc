//! Switches between registered screens.

use crate::error::ScreenError;
use crate::screens::{Screen, ScreenView};

/// Owns every screen; at most one is current.
#[derive(Default)]
pub struct ScreenRouter {
    screens: Vec<Box<dyn Screen>>,
    current: Option<usize>,
}

impl ScreenRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a screen. Names must be unique.
    pub fn register(&mut self, screen: Box<dyn Screen>) -> Result<(), ScreenError> {
        if self.position(screen.name()).is_some() {
            return Err(ScreenError::DuplicateScreen(screen.name().to_string()));
        }
        tracing::debug!(screen = %screen.name(), "Registered screen");
        self.screens.push(screen);
        Ok(())
    }

    /// Registered screen names in registration order.
    pub fn screen_names(&self) -> impl Iterator<Item = &str> {
        self.screens.iter().map(|s| s.name())
    }

    /// Make `name` the current screen.
    ///
    /// The outgoing screen is deactivated before the incoming one is
    /// activated. Showing the screen that is already current re-activates
    /// it so it can refresh. If the incoming screen fails to activate, the
    /// outgoing one is activated again and stays current.
    pub async fn show(&mut self, name: &str) -> Result<(), ScreenError> {
        let next = self
            .position(name)
            .ok_or_else(|| ScreenError::UnknownScreen(name.to_string()))?;

        let previous = self.current.filter(|&c| c != next);
        if let Some(previous) = previous {
            self.screens[previous].on_deactivate().await?;
        }

        if let Err(e) = self.screens[next].on_activate().await {
            tracing::warn!(screen = %name, error = %e, "Screen failed to activate");
            if let Some(previous) = previous {
                if let Err(restore) = self.screens[previous].on_activate().await {
                    tracing::warn!(error = %restore, "Previous screen failed to reactivate");
                }
            }
            return Err(e);
        }
        self.current = Some(next);

        tracing::debug!(screen = %name, "Showing screen");
        Ok(())
    }

    pub fn current(&self) -> Option<&dyn Screen> {
        self.current.map(|i| self.screens[i].as_ref())
    }

    pub fn current_mut(&mut self) -> Option<&mut (dyn Screen + 'static)> {
        self.current.map(|i| self.screens[i].as_mut())
    }

    /// Render the current screen, if any.
    pub fn render(&self) -> Option<ScreenView> {
        self.current().map(|s| s.render())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.screens.iter().position(|s| s.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<String>>>;

    struct RecordingScreen {
        name: &'static str,
        log: Log,
        broken: bool,
    }

    #[async_trait]
    impl Screen for RecordingScreen {
        fn name(&self) -> &str {
            self.name
        }

        fn render(&self) -> ScreenView {
            ScreenView::new(self.name)
        }

        async fn on_activate(&mut self) -> Result<(), ScreenError> {
            if self.broken {
                return Err(ScreenError::UnknownCommand("activate".to_string()));
            }
            self.log.lock().unwrap().push(format!("show {}", self.name));
            Ok(())
        }

        async fn on_deactivate(&mut self) -> Result<(), ScreenError> {
            self.log.lock().unwrap().push(format!("hide {}", self.name));
            Ok(())
        }
    }

    fn router_with(names: &[&'static str]) -> (ScreenRouter, Log) {
        let log: Log = Arc::default();
        let mut router = ScreenRouter::new();
        for &name in names {
            router
                .register(Box::new(RecordingScreen {
                    name,
                    log: log.clone(),
                    broken: false,
                }))
                .unwrap();
        }
        (router, log)
    }

    #[tokio::test]
    async fn show_hides_previous_then_shows_next() {
        let (mut router, log) = router_with(&["sheet", "roster"]);
        assert!(router.render().is_none());

        router.show("sheet").await.unwrap();
        router.show("roster").await.unwrap();

        assert_eq!(router.current().map(|s| s.name()), Some("roster"));
        assert_eq!(router.render().map(|v| v.title), Some("roster".to_string()));
        assert_eq!(
            *log.lock().unwrap(),
            vec!["show sheet", "hide sheet", "show roster"]
        );
    }

    #[tokio::test]
    async fn showing_current_screen_only_reactivates() {
        let (mut router, log) = router_with(&["sheet"]);
        router.show("sheet").await.unwrap();
        router.show("sheet").await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["show sheet", "show sheet"]);
    }

    #[tokio::test]
    async fn unknown_screen_keeps_current() {
        let (mut router, log) = router_with(&["sheet"]);
        router.show("sheet").await.unwrap();

        let err = router.show("spells").await.unwrap_err();

        assert!(matches!(err, ScreenError::UnknownScreen(ref n) if n == "spells"));
        assert_eq!(router.current().map(|s| s.name()), Some("sheet"));
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failed_activation_stays_on_previous_screen() {
        let (mut router, log) = router_with(&["sheet"]);
        router
            .register(Box::new(RecordingScreen {
                name: "spells",
                log: log.clone(),
                broken: true,
            }))
            .unwrap();
        router.show("sheet").await.unwrap();

        assert!(router.show("spells").await.is_err());

        assert_eq!(router.current().map(|s| s.name()), Some("sheet"));
        assert_eq!(
            *log.lock().unwrap(),
            vec!["show sheet", "hide sheet", "show sheet"]
        );
    }

    #[tokio::test]
    async fn failed_first_activation_leaves_no_current_screen() {
        let log: Log = Arc::default();
        let mut router = ScreenRouter::new();
        router
            .register(Box::new(RecordingScreen {
                name: "spells",
                log,
                broken: true,
            }))
            .unwrap();

        assert!(router.show("spells").await.is_err());
        assert!(router.current().is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let (mut router, log) = router_with(&["sheet"]);
        let err = router
            .register(Box::new(RecordingScreen {
                name: "sheet",
                log,
                broken: false,
            }))
            .unwrap_err();

        assert!(matches!(err, ScreenError::DuplicateScreen(_)));
        assert_eq!(router.screen_names().collect::<Vec<_>>(), vec!["sheet"]);
    }

    #[tokio::test]
    async fn default_command_handler_rejects() {
        let (mut router, _log) = router_with(&["sheet"]);
        router.show("sheet").await.unwrap();

        let screen = router.current_mut().unwrap();
        let err = screen.handle_command("dance", "").await.unwrap_err();
        assert!(matches!(err, ScreenError::UnknownCommand(_)));
    }
}
