use danmaku_core::Stage;
use unicode_width::UnicodeWidthStr;

/// A comment's on-screen text, padded and measured in terminal columns
#[derive(Debug, Clone, Default)]
pub struct Label {
    text: String,
    width: u16,
}

impl Label {
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display width in columns
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }
}

/// Terminal implementation of the player's rendering collaborator
///
/// One viewport unit is one terminal cell. Labels are padded on both sides
/// so neighbouring comments never touch even with a zero margin.
#[derive(Debug, Clone)]
pub struct TerminalStage {
    width: u16,
    padding: u16,
    created: usize,
    attached: usize,
}

impl TerminalStage {
    pub fn new(width: u16, padding: u16) -> Self {
        Self {
            width,
            padding,
            created: 0,
            attached: 0,
        }
    }

    /// Update the viewport after a terminal resize
    pub fn set_viewport_width(&mut self, width: u16) {
        self.width = width;
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Labels built so far (pool misses)
    #[inline]
    pub fn created(&self) -> usize {
        self.created
    }

    /// Labels currently attached to the viewport
    #[inline]
    pub fn attached(&self) -> usize {
        self.attached
    }
}

impl Stage for TerminalStage {
    type Visual = Label;

    fn viewport_width(&self) -> f32 {
        self.width as f32
    }

    fn create_visual(&mut self) -> Label {
        self.created += 1;
        Label::default()
    }

    fn bind(&mut self, label: &mut Label, text: &str) -> f32 {
        let padding = self.padding as usize;
        label.text.clear();
        label.text.extend(std::iter::repeat(' ').take(padding));
        // Comments are single-line; tabs and newlines would break the row
        label
            .text
            .extend(text.chars().map(|c| if c.is_control() { ' ' } else { c }));
        label.text.extend(std::iter::repeat(' ').take(padding));
        label.width = label.text.width().min(u16::MAX as usize) as u16;
        label.width as f32
    }

    fn attach(&mut self, _label: &Label) {
        self.attached += 1;
    }

    fn detach(&mut self, _label: &Label) {
        self.attached = self.attached.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_pads_and_measures() {
        let mut stage = TerminalStage::new(80, 1);
        let mut label = stage.create_visual();
        assert_eq!(stage.bind(&mut label, "hello"), 7.0);
        assert_eq!(label.text(), " hello ");
        assert_eq!(label.width(), 7);
    }

    #[test]
    fn test_wide_glyphs_take_two_columns() {
        let mut stage = TerminalStage::new(80, 0);
        let mut label = stage.create_visual();
        assert_eq!(stage.bind(&mut label, "弹幕护体"), 8.0);
        assert_eq!(stage.bind(&mut label, "(*^▽^*)"), 7.0);
    }

    #[test]
    fn test_control_characters_flattened() {
        let mut stage = TerminalStage::new(80, 0);
        let mut label = stage.create_visual();
        stage.bind(&mut label, "a\tb\nc");
        assert_eq!(label.text(), "a b c");
    }

    #[test]
    fn test_rebinding_reuses_label() {
        let mut stage = TerminalStage::new(80, 1);
        let mut label = stage.create_visual();
        stage.bind(&mut label, "a much longer comment");
        stage.bind(&mut label, "ok");
        assert_eq!(label.text(), " ok ");
        assert_eq!(label.width(), 4);
        assert_eq!(stage.created(), 1);
    }

    #[test]
    fn test_attach_detach_counts() {
        let mut stage = TerminalStage::new(80, 1);
        let label = stage.create_visual();
        stage.attach(&label);
        stage.attach(&label);
        stage.detach(&label);
        assert_eq!(stage.attached(), 1);
        stage.detach(&label);
        stage.detach(&label);
        assert_eq!(stage.attached(), 0);
    }

    #[test]
    fn test_viewport_follows_resize() {
        let mut stage = TerminalStage::new(80, 1);
        stage.set_viewport_width(120);
        assert_eq!(stage.viewport_width(), 120.0);
    }
}
