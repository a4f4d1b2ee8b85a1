use parlor_store::{ModePreferenceStore, QuestionBank};

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub questions: QuestionBank,
    pub modes: ModePreferenceStore,
    /// The single user allowed to run the admin commands, when configured.
    pub owner_id: Option<u64>,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
