mod about;
mod achievements;
mod contact;
mod experience;
mod hero;
mod open_source;
mod projects;
mod skills;

pub use about::About;
pub use achievements::Achievements;
pub use contact::Contact;
pub use experience::{Certifications, Experience};
pub use hero::Hero;
pub use open_source::OpenSource;
pub use projects::Projects;
pub use skills::Skills;

use crate::theme::Theme;

fn tab_class(active: bool, theme: Theme) -> String {
    let colours = match (active, theme) {
        (true, _) => "bg-blue-600 text-white",
        (false, Theme::Light) => "bg-slate-200 text-slate-700 hover:bg-slate-300",
        (false, Theme::Dark) => "bg-white/10 text-slate-300 hover:bg-white/20",
    };
    format!("px-5 py-2 rounded-full text-sm font-semibold transition-colors {colours}")
}

fn body_text(theme: Theme) -> &'static str {
    theme.pick("text-slate-700", "text-slate-300")
}
