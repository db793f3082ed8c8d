use widgetd_widgets::WidgetSet;

/// Widget set snapshot shared with handlers. Built once at startup and
/// never mutated afterwards, so no lock around it.
pub struct AppState {
    pub widgets: WidgetSet,
}
