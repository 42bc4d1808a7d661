mod add;
mod export;
mod helpers;
mod view;

pub(crate) use add::cmd_add;
pub(crate) use export::cmd_export;
pub(crate) use helpers::prompt;
pub(crate) use view::cmd_view;
