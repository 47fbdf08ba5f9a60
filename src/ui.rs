pub mod font;
pub mod inline_view;
pub mod inputs;
pub mod shortcuts;
pub mod side_by_side;
pub mod stats_bar;
pub mod toast;
pub mod toolbar;
pub mod viewport;
