/// Screens of the console shell, in the order a round walks through them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    ModeSelection,
    Game,
    End { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    Input(String),
    Quit,
}
