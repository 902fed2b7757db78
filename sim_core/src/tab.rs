use crate::widgets::Widgets;

/// The contents of one menu tab.
pub trait TabContent {
    /// Called every frame the tab is the active one and the menu is visible.
    fn draw(&mut self, ui: &mut Widgets<'_>);

    /// Called every update with whether this tab is currently on screen.
    fn on_visibility(&mut self, _shown: bool) {}
}

type DrawFn = Box<dyn FnMut(&mut Widgets<'_>)>;
type VisibilityFn = Box<dyn FnMut(bool)>;

/// [TabContent] built from a draw closure and an optional visibility closure.
pub struct FnTab {
    draw: DrawFn,
    on_visibility: Option<VisibilityFn>,
}

impl FnTab {
    pub fn new(draw: impl FnMut(&mut Widgets<'_>) + 'static) -> Self {
        Self {
            draw: Box::new(draw),
            on_visibility: None,
        }
    }

    pub fn with_visibility(mut self, on_visibility: impl FnMut(bool) + 'static) -> Self {
        self.on_visibility = Some(Box::new(on_visibility));
        self
    }
}

impl TabContent for FnTab {
    fn draw(&mut self, ui: &mut Widgets<'_>) {
        (self.draw)(ui)
    }

    fn on_visibility(&mut self, shown: bool) {
        if let Some(on_visibility) = &mut self.on_visibility {
            on_visibility(shown);
        }
    }
}

pub struct Tab {
    pub name: String,
    pub content: Box<dyn TabContent>,
}

impl Tab {
    pub fn new(name: impl Into<String>, content: impl TabContent + 'static) -> Self {
        Self {
            name: name.into(),
            content: Box::new(content),
        }
    }
}
