pub mod article_row;
pub mod form_field;
