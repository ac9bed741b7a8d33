//! Global Application State
//!
//! The toast feedback channel shared by every page, provided through
//! Leptos context.

use leptos::*;

/// How prominently a toast should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    /// Confirmation of a successful action
    Default,
    /// A failure or a destructive action
    Destructive,
}

/// One transient message for the toast area
///
/// At most one is visible at a time; a newer toast replaces the current
/// one immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub title: String,
    pub description: Option<String>,
    pub severity: ToastSeverity,
}

impl ToastMessage {
    /// Create a default-severity toast with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity: ToastSeverity::Default,
        }
    }

    /// Builder: set the description line
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: mark as destructive
    pub fn destructive(mut self) -> Self {
        self.severity = ToastSeverity::Destructive;
        self
    }

    /// How long the toast stays visible; failures linger a little longer
    pub fn dismiss_after_ms(&self) -> u32 {
        match self.severity {
            ToastSeverity::Default => 3_000,
            ToastSeverity::Destructive => 5_000,
        }
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Currently visible toast, if any
    pub toast: RwSignal<Option<ToastMessage>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        toast: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a toast (auto-clears after its dismiss interval)
    pub fn notify(&self, toast: ToastMessage) {
        let dismiss_after = toast.dismiss_after_ms();
        self.toast.set(Some(toast));

        let toast_signal = self.toast;
        gloo_timers::callback::Timeout::new(dismiss_after, move || {
            toast_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_builders() {
        let toast = ToastMessage::new("Address Added")
            .description("Carol has been added to your address book.");

        assert_eq!(toast.title, "Address Added");
        assert_eq!(
            toast.description.as_deref(),
            Some("Carol has been added to your address book.")
        );
        assert_eq!(toast.severity, ToastSeverity::Default);

        let toast = ToastMessage::new("Share Failed").destructive();
        assert_eq!(toast.severity, ToastSeverity::Destructive);
        assert_eq!(toast.description, None);
    }

    #[test]
    fn test_destructive_toasts_linger_longer() {
        let ok = ToastMessage::new("Copied!");
        let bad = ToastMessage::new("Share Failed").destructive();

        assert!(bad.dismiss_after_ms() > ok.dismiss_after_ms());
    }

    #[test]
    fn test_toast_signal_replaces_current() {
        let runtime = create_runtime();

        let state = GlobalState {
            toast: create_rw_signal(None),
        };
        state.toast.set(Some(ToastMessage::new("first")));
        state.toast.set(Some(ToastMessage::new("second")));

        assert_eq!(
            state.toast.get().map(|t| t.title),
            Some("second".to_string())
        );

        runtime.dispose();
    }
}
