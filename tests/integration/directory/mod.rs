mod clean;
mod copy;
mod list;
mod r#move;
mod remove;
mod size;
