//! src/panels/text.rs
//!
//! Static text panels: the title bar and the controls/help footer.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct TitlePanel {
    title: String,
}

impl TitlePanel {
    pub fn new(title: &str) -> TitlePanel {
        TitlePanel {
            title: title.to_string(),
        }
    }
}

impl crate::ui::Panel for TitlePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.title.clone()).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}

pub struct HelpPanel {
    text: String,
}

impl HelpPanel {
    pub fn new(text: &str) -> HelpPanel {
        HelpPanel {
            text: text.to_string(),
        }
    }
}

impl crate::ui::Panel for HelpPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let p = Paragraph::new(self.text.clone())
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Controls").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
