//! src/form.rs
//!
//! Search form state: three fields (game name, tag line, region) edited by
//! the keyboard, separate from the query machine so typing never touches an
//! in-flight request.

use crate::query::SearchQuery;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    GameName,
    TagLine,
    Region,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::GameName => "Game name",
            FormField::TagLine => "Tag line",
            FormField::Region => "Region",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchForm {
    pub query: SearchQuery,
    pub field: FormField,
}

impl SearchForm {
    pub fn next_field(&mut self) {
        self.field = match self.field {
            FormField::GameName => FormField::TagLine,
            FormField::TagLine => FormField::Region,
            FormField::Region => FormField::GameName,
        };
    }

    pub fn prev_field(&mut self) {
        self.field = match self.field {
            FormField::GameName => FormField::Region,
            FormField::TagLine => FormField::GameName,
            FormField::Region => FormField::TagLine,
        };
    }

    /// Type into the focused text field. The region field takes no text;
    /// it cycles with left/right instead.
    pub fn insert_char(&mut self, c: char) {
        match self.field {
            FormField::GameName => self.query.game_name.push(c),
            FormField::TagLine => self.query.tag_line.push(c),
            FormField::Region => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            FormField::GameName => {
                self.query.game_name.pop();
            }
            FormField::TagLine => {
                self.query.tag_line.pop();
            }
            FormField::Region => {}
        }
    }

    pub fn cycle_region_right(&mut self) {
        if self.field == FormField::Region {
            self.query.region = self.query.region.next();
        }
    }

    pub fn cycle_region_left(&mut self) {
        if self.field == FormField::Region {
            self.query.region = self.query.region.prev();
        }
    }
}
