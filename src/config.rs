//! Widget configuration.

/// Change callback: receives the full ordered content snapshot after every
/// mutation.
pub type ChangeHandler = Box<dyn FnMut(&[String])>;

/// Per-bubble display renderer: committed content in, display string out.
pub type BubbleRenderer = Box<dyn Fn(&str) -> String>;

/// Configuration for a [`Bubbles`](crate::Bubbles) widget.
///
/// # Example
///
/// ```
/// use bubbles::BubblesConfig;
///
/// let config = BubblesConfig::new()
///     .with_class("tag-input")
///     .with_initial(["red", "green"])
///     .with_renderer(|content| format!("[{content}]"));
/// # let _ = config;
/// ```
pub struct BubblesConfig {
    /// Initial bubble contents, loaded on attach.
    pub initial: Vec<String>,
    /// Styling class name applied to the surface.
    pub class: String,
    pub(crate) on_change: Option<ChangeHandler>,
    pub(crate) render: Option<BubbleRenderer>,
}

impl BubblesConfig {
    /// Empty configuration: no initial bubbles, no change handler, identity
    /// renderer.
    pub fn new() -> Self {
        Self {
            initial: Vec::new(),
            class: String::new(),
            on_change: None,
            render: None,
        }
    }

    /// Set the initial bubble contents.
    pub fn with_initial<I, S>(mut self, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial = initial.into_iter().map(Into::into).collect();
        self
    }

    /// Set the styling class name for the surface.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Register the change handler.
    pub fn on_change(mut self, handler: impl FnMut(&[String]) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Set the per-bubble display renderer. Without one, bubbles display
    /// their content as-is.
    pub fn with_renderer(mut self, render: impl Fn(&str) -> String + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Produce the display string for one bubble.
    pub(crate) fn render_bubble(&self, content: &str) -> String {
        match &self.render {
            Some(render) => render(content),
            None => content.to_string(),
        }
    }
}

impl Default for BubblesConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BubblesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BubblesConfig")
            .field("initial", &self.initial)
            .field("class", &self.class)
            .field("on_change", &self.on_change.is_some())
            .field("render", &self.render.is_some())
            .finish()
    }
}
