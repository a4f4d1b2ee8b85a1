pub mod admin;
pub mod game;
pub mod settings;
pub mod utility;

use parlor_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    game::truth::META,
    game::dare::META,
    game::wyr::META,
    game::ama::META,
    settings::mode::META,
    admin::addquestion::META,
    admin::removequestion::META,
    utility::help::META,
    utility::ping::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        game::truth::truth(),
        game::dare::dare(),
        game::wyr::wyr(),
        game::ama::ama(),
        settings::mode::mode(),
        admin::addquestion::addquestion(),
        admin::removequestion::removequestion(),
        utility::help::help(),
        utility::ping::ping(),
    ]
}
